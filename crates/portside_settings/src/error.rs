use portside_common::diagnostic::Diagnosable;
use portside_domain::container::EngineError;
use portside_domain::icon::FetchError;
use portside_infra_fs::StoreError;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    NotFound,
    Engine,
    Fetch,
    Io,
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("{0}")]
    NotFound(String),
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl SettingsError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound(_) | Self::Engine(EngineError::NotFound(_)) => ErrorKind::NotFound,
            Self::Engine(_) => ErrorKind::Engine,
            Self::Fetch(_) => ErrorKind::Fetch,
            Self::Store(_) => ErrorKind::Io,
        }
    }
}

impl Diagnosable for SettingsError {
    fn code(&self) -> String {
        match self {
            Self::NotFound(_) => "SETTINGS_NOT_FOUND".to_string(),
            Self::Engine(e) => e.code(),
            Self::Fetch(e) => e.code(),
            Self::Store(e) => e.code(),
        }
    }

    fn suggestion(&self) -> Option<String> {
        match self {
            Self::NotFound(_) => None,
            Self::Engine(e) => e.suggestion(),
            Self::Fetch(e) => e.suggestion(),
            Self::Store(e) => e.suggestion(),
        }
    }
}
