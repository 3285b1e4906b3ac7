use crate::error::SettingsError;
use portside_domain::settings::{ContainerSettingsDocument, ContainerSettingsEntry, ContainerSettingsPatch};
use portside_infra_fs::JsonDocument;
use std::path::PathBuf;
use tracing::info;

pub struct ContainerSettingsReconciler {
    document: JsonDocument<ContainerSettingsDocument>,
}

impl ContainerSettingsReconciler {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            document: JsonDocument::new(path, ContainerSettingsDocument::new()),
        }
    }

    /// The whole document; empty when the file is missing or corrupt.
    pub async fn get_all(&self) -> ContainerSettingsDocument {
        self.document.read().await
    }

    /// Merges `patch` into the entry for `container_id`, creating it if needed.
    pub async fn upsert_customization(
        &self,
        container_id: &str,
        patch: ContainerSettingsPatch,
    ) -> Result<ContainerSettingsEntry, SettingsError> {
        let entry = self
            .document
            .update(|doc| {
                let current = doc.remove(container_id).unwrap_or_default();
                let merged = current.merge(patch);
                doc.insert(container_id.to_string(), merged.clone());
                Ok::<_, SettingsError>(merged)
            })
            .await?;

        info!(id = %container_id, "Container settings updated");
        Ok(entry)
    }
}
