use crate::error::SettingsError;
use portside_domain::settings::{AppSettings, ServerEntry};
use portside_infra_fs::JsonDocument;
use std::path::PathBuf;
use tracing::info;

pub struct AppSettingsReconciler {
    document: JsonDocument<AppSettings>,
}

fn server_not_found(index: i64) -> SettingsError {
    SettingsError::NotFound(format!("Server not found at index {}", index))
}

impl AppSettingsReconciler {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            document: JsonDocument::new(path, AppSettings::default()),
        }
    }

    pub async fn get(&self) -> AppSettings {
        self.document.read().await
    }

    /// Appends `entry` and returns the full list.
    pub async fn add_server(&self, entry: ServerEntry) -> Result<Vec<ServerEntry>, SettingsError> {
        let servers = self
            .document
            .update(|doc| {
                doc.servers.push(entry);
                Ok::<_, SettingsError>(doc.servers.clone())
            })
            .await?;
        info!(count = servers.len(), "Server added");
        Ok(servers)
    }

    /// Replaces the entry at `index` in place.
    pub async fn update_server(&self, index: i64, entry: ServerEntry) -> Result<Vec<ServerEntry>, SettingsError> {
        let servers = self
            .document
            .update(|doc| {
                let pos = doc.position(index).ok_or_else(|| server_not_found(index))?;
                doc.servers[pos] = entry;
                Ok::<_, SettingsError>(doc.servers.clone())
            })
            .await?;
        info!(index, "Server updated");
        Ok(servers)
    }

    /// Removes the entry at `index`; later entries shift down by one.
    pub async fn delete_server(&self, index: i64) -> Result<Vec<ServerEntry>, SettingsError> {
        let servers = self
            .document
            .update(|doc| {
                let pos = doc.position(index).ok_or_else(|| server_not_found(index))?;
                doc.servers.remove(pos);
                Ok::<_, SettingsError>(doc.servers.clone())
            })
            .await?;
        info!(index, "Server deleted");
        Ok(servers)
    }

    pub async fn set_sort(&self, container_sort: String) -> Result<AppSettings, SettingsError> {
        let settings = self
            .document
            .update(|doc| {
                doc.container_sort = container_sort;
                Ok::<_, SettingsError>(doc.clone())
            })
            .await?;
        info!(container_sort = %settings.container_sort, "Sort preference saved");
        Ok(settings)
    }
}
