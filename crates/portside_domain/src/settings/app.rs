use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

pub const DEFAULT_CONTAINER_SORT: &str = "none";

fn default_container_sort() -> String {
    DEFAULT_CONTAINER_SORT.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    #[serde(default)]
    pub servers: Vec<ServerEntry>,
    /// Free-form; the dashboard decides which values it understands.
    #[serde(default = "default_container_sort")]
    pub container_sort: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            servers: Vec::new(),
            container_sort: default_container_sort(),
            extra: Map::new(),
        }
    }
}

impl AppSettings {
    /// Maps a signed request index onto `servers`, `None` when out of range.
    pub fn position(&self, index: i64) -> Option<usize> {
        usize::try_from(index).ok().filter(|&i| i < self.servers.len())
    }
}

/// A remote dashboard the user wants to jump to.
///
/// Every field is optional: older clients stored whatever the form held,
/// including `null`, and such entries must survive a rewrite.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<ServerPort>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ServerEntry {
    pub fn new(name: impl Into<String>, address: impl Into<String>, port: Option<ServerPort>) -> Self {
        Self {
            name: Some(name.into()),
            address: Some(address.into()),
            port,
            extra: Map::new(),
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    pub fn address(&self) -> &str {
        self.address.as_deref().unwrap_or("")
    }
}

/// Older clients sent the port as typed text, newer ones as a number.
/// Anything else is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ServerPort {
    Number(u64),
    Text(String),
    Other(Value),
}

impl fmt::Display for ServerPort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
            Self::Other(v) => write!(f, "{}", v),
        }
    }
}
