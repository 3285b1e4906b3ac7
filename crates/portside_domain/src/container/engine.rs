use super::ContainerSummary;
use async_trait::async_trait;
use portside_common::diagnostic::Diagnosable;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Container not found: {0}")]
    NotFound(String),
    #[error("Engine request failed: {0}")]
    Request(String),
}

impl Diagnosable for EngineError {
    fn code(&self) -> String {
        match self {
            Self::NotFound(_) => "ENGINE_CONTAINER_NOT_FOUND".to_string(),
            Self::Request(_) => "ENGINE_REQUEST_FAILED".to_string(),
        }
    }

    fn suggestion(&self) -> Option<String> {
        match self {
            Self::NotFound(_) => Some("Refresh the container list; the container may have been removed".to_string()),
            Self::Request(_) => Some("Check that the Docker daemon is running and its socket is reachable".to_string()),
        }
    }
}

#[async_trait]
pub trait ContainerEngine: Send + Sync {
    async fn list(&self, all: bool) -> Result<Vec<ContainerSummary>, EngineError>;

    /// Engine-reported name of a container, `None` if the id is unknown.
    async fn name_of(&self, id: &str) -> Result<Option<String>, EngineError>;

    async fn start(&self, id: &str) -> Result<(), EngineError>;

    async fn stop(&self, id: &str) -> Result<(), EngineError>;
}
