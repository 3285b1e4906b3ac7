use portside_common::config::Config;
use portside_domain::container::ContainerEngine;
use portside_domain::icon::{IconRepository, IconSource};
use portside_infra_fs::AssetStore;
use portside_settings::{AppSettingsReconciler, ContainerSettingsReconciler, IconWorkflow};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<dyn ContainerEngine>,
    pub container_settings: Arc<ContainerSettingsReconciler>,
    pub app_settings: Arc<AppSettingsReconciler>,
    pub icons: Arc<IconWorkflow>,
    pub assets: Arc<AssetStore>,
}

impl AppState {
    pub fn new(config: &Config, engine: Arc<dyn ContainerEngine>, icon_source: Arc<dyn IconSource>) -> Self {
        let assets = Arc::new(AssetStore::new(config.assets_dir()));
        let container_settings = Arc::new(ContainerSettingsReconciler::new(config.container_settings_path()));
        let icons = Arc::new(IconWorkflow::new(
            engine.clone(),
            icon_source,
            assets.clone(),
            container_settings.clone(),
            IconRepository::new(config.icon_repository.clone()),
        ));

        Self {
            engine,
            container_settings,
            app_settings: Arc::new(AppSettingsReconciler::new(config.app_settings_path())),
            icons,
            assets,
        }
    }
}
