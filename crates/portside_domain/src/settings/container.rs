use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Container id -> customization.
pub type ContainerSettingsDocument = BTreeMap<String, ContainerSettingsEntry>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerSettingsEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_path: Option<String>,
    /// Sanitized engine name captured when the icon was stored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A partial update. `None` means "leave unchanged"; `Some("")` is a value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContainerSettingsPatch {
    pub custom_name: Option<String>,
    pub icon_path: Option<String>,
    pub original_name: Option<String>,
}

impl ContainerSettingsPatch {
    pub fn custom_name(name: impl Into<String>) -> Self {
        Self {
            custom_name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.custom_name.is_none() && self.icon_path.is_none() && self.original_name.is_none()
    }
}

impl ContainerSettingsEntry {
    /// Field-by-field "override if present".
    pub fn merge(mut self, patch: ContainerSettingsPatch) -> Self {
        if let Some(name) = patch.custom_name {
            self.custom_name = Some(name);
        }
        if let Some(path) = patch.icon_path {
            self.icon_path = Some(path);
        }
        if let Some(original) = patch.original_name {
            self.original_name = Some(original);
        }
        self
    }
}
