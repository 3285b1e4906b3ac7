//! Ties a stored icon to a container.
//!
//! The file name is derived from the container id and its engine name at the
//! time of the call, so `originalName` is refreshed on every icon operation.

use crate::container::ContainerSettingsReconciler;
use crate::error::SettingsError;
use futures_util::future::join_all;
use portside_domain::container::ContainerEngine;
use portside_domain::icon::{
    asset_path, extension_from_filename, extension_from_url, icon_filename, sanitize_name, IconCandidate,
    IconRepository, IconSource,
};
use portside_domain::settings::{ContainerSettingsEntry, ContainerSettingsPatch};
use portside_infra_fs::AssetStore;
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredIcon {
    pub filename: String,
    pub icon_path: String,
    pub settings: ContainerSettingsEntry,
}

pub struct IconWorkflow {
    engine: Arc<dyn ContainerEngine>,
    source: Arc<dyn IconSource>,
    assets: Arc<AssetStore>,
    settings: Arc<ContainerSettingsReconciler>,
    repository: IconRepository,
}

impl IconWorkflow {
    pub fn new(
        engine: Arc<dyn ContainerEngine>,
        source: Arc<dyn IconSource>,
        assets: Arc<AssetStore>,
        settings: Arc<ContainerSettingsReconciler>,
        repository: IconRepository,
    ) -> Self {
        Self {
            engine,
            source,
            assets,
            settings,
            repository,
        }
    }

    async fn sanitized_name(&self, container_id: &str) -> Result<String, SettingsError> {
        let name = self
            .engine
            .name_of(container_id)
            .await?
            .ok_or_else(|| SettingsError::NotFound(format!("Container not found: {}", container_id)))?;
        Ok(sanitize_name(&name))
    }

    /// Moves an already staged upload into place and records it.
    ///
    /// `custom_name` rides along in the same settings write.
    pub async fn store_upload(
        &self,
        container_id: &str,
        staged: &Path,
        original_filename: &str,
        custom_name: Option<String>,
    ) -> Result<StoredIcon, SettingsError> {
        let name = self.sanitized_name(container_id).await?;
        let filename = icon_filename(container_id, &name, &extension_from_filename(original_filename));
        self.assets.place_staged(staged, &filename).await?;

        self.record(container_id, filename, name, custom_name).await
    }

    /// Downloads `url` and records it as the container's icon.
    pub async fn store_from_url(&self, container_id: &str, url: &str) -> Result<StoredIcon, SettingsError> {
        let name = self.sanitized_name(container_id).await?;
        let data = self.source.fetch(url).await?;
        let filename = icon_filename(container_id, &name, &extension_from_url(url));
        self.assets.write(&filename, data).await?;

        self.record(container_id, filename, name, None).await
    }

    async fn record(
        &self,
        container_id: &str,
        filename: String,
        original_name: String,
        custom_name: Option<String>,
    ) -> Result<StoredIcon, SettingsError> {
        let icon_path = asset_path(&filename);
        let patch = ContainerSettingsPatch {
            custom_name,
            icon_path: Some(icon_path.clone()),
            original_name: Some(original_name),
        };
        // On failure the asset stays behind; the next icon operation overwrites it.
        let settings = self.settings.upsert_customization(container_id, patch).await?;

        info!(id = %container_id, icon_path = %icon_path, "Icon associated with container");
        Ok(StoredIcon {
            filename,
            icon_path,
            settings,
        })
    }

    /// Probes the icon repository for `name`. Nothing is stored.
    pub async fn search(&self, name: &str) -> Result<Vec<IconCandidate>, SettingsError> {
        let candidates = self.repository.candidates(name);
        let probes = candidates.iter().map(|c| self.source.exists(&c.url));
        let results = join_all(probes).await;

        let found: Vec<IconCandidate> = candidates
            .into_iter()
            .zip(results)
            .filter_map(|(candidate, result)| match result {
                Ok(true) => Some(candidate),
                Ok(false) => None,
                Err(e) => {
                    warn!(url = %candidate.url, error = %e, "Icon probe failed");
                    None
                }
            })
            .collect();

        if found.is_empty() {
            return Err(SettingsError::NotFound(format!("No icons found for {:?}", name)));
        }
        info!(name = %name, count = found.len(), "Icon candidates found");
        Ok(found)
    }
}
