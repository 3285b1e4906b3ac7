use serde::{Deserialize, Serialize};

pub mod engine;
pub use engine::{ContainerEngine, EngineError};


/// A container as reported by the engine, with the leading `/` already
/// stripped from every name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerSummary {
    pub id: String,
    pub names: Vec<String>,
    pub state: String,
    pub status: String,
}

impl ContainerSummary {
    /// The primary name, or an empty string for unnamed containers.
    pub fn name(&self) -> &str {
        self.names.first().map(String::as_str).unwrap_or("")
    }

    pub fn matches_name(&self, needle: &str) -> bool {
        self.names.iter().any(|n| n.contains(needle))
    }
}

/// Wire shape of a container in the HTTP API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerView {
    pub id: String,
    pub name: String,
    pub state: String,
    pub status: String,
}

impl From<&ContainerSummary> for ContainerView {
    fn from(c: &ContainerSummary) -> Self {
        Self {
            id: c.id.clone(),
            name: c.name().to_string(),
            state: c.state.clone(),
            status: c.status.clone(),
        }
    }
}

pub fn strip_name_prefix(name: &str) -> &str {
    name.strip_prefix('/').unwrap_or(name)
}

/// First container any of whose names contains `needle`.
pub fn find_by_name<'a>(containers: &'a [ContainerSummary], needle: &str) -> Option<&'a ContainerSummary> {
    containers.iter().find(|c| c.matches_name(needle))
}
