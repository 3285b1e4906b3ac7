use portside_common::diagnostic::Diagnosable;

pub mod asset;
pub mod document;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization Error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl Diagnosable for StoreError {
    fn code(&self) -> String {
        match self {
            Self::Io(_) => "FS_IO_ERROR".to_string(),
            Self::Serialize(_) => "FS_SERIALIZATION_ERROR".to_string(),
        }
    }

    fn suggestion(&self) -> Option<String> {
        match self {
            Self::Io(_) => Some("Check permissions and free space of the public directory".to_string()),
            Self::Serialize(_) => None,
        }
    }
}
