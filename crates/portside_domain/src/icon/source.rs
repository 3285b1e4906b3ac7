use async_trait::async_trait;
use bytes::Bytes;
use portside_common::diagnostic::Diagnosable;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Remote returned status {status} for {url}")]
    Status { url: String, status: u16 },
    #[error("Request to {url} failed: {reason}")]
    Network { url: String, reason: String },
    #[error("Response from {url} exceeds {limit} bytes")]
    TooLarge { url: String, limit: usize },
}

impl Diagnosable for FetchError {
    fn code(&self) -> String {
        match self {
            Self::Status { .. } => "FETCH_BAD_STATUS".to_string(),
            Self::Network { .. } => "FETCH_NETWORK_ERROR".to_string(),
            Self::TooLarge { .. } => "FETCH_TOO_LARGE".to_string(),
        }
    }

    fn suggestion(&self) -> Option<String> {
        match self {
            Self::Status { .. } => Some("Check that the icon URL points to an existing image".to_string()),
            Self::Network { .. } => Some("Check the server's internet connection".to_string()),
            Self::TooLarge { .. } => Some("Pick a smaller image or upload it directly".to_string()),
        }
    }
}

/// Outbound HTTP used to pull icons.
#[async_trait]
pub trait IconSource: Send + Sync {
    /// Body of a successful GET.
    async fn fetch(&self, url: &str) -> Result<Bytes, FetchError>;

    /// Whether a HEAD request answers with a success status.
    async fn exists(&self, url: &str) -> Result<bool, FetchError>;
}
