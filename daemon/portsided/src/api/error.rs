use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use portside_common::diagnostic::{self, Diagnosable};
use portside_domain::container::EngineError;
use portside_settings::{ErrorKind, SettingsError};
use serde::Serialize;
use tracing::error;

/// Failure body shared by every endpoint.
#[derive(Debug, Serialize)]
pub struct ApiError {
    #[serde(skip)]
    status: StatusCode,
    /// What the request was trying to do.
    error: String,
    kind: &'static str,
    details: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    suggestion: Option<String>,
}

impl ApiError {
    fn from_diagnostic(status: StatusCode, kind: &'static str, context: &str, err: diagnostic::Error) -> Self {
        Self {
            status,
            error: context.to_string(),
            kind,
            details: err.message().to_string(),
            code: Some(err.code().to_string()),
            suggestion: err.suggestion().map(str::to_string),
        }
    }

    pub fn settings(context: &str, err: SettingsError) -> Self {
        let (status, kind) = match err.kind() {
            ErrorKind::NotFound => (StatusCode::NOT_FOUND, "not_found"),
            ErrorKind::Fetch => (StatusCode::BAD_GATEWAY, "fetch"),
            ErrorKind::Engine => (StatusCode::INTERNAL_SERVER_ERROR, "engine"),
            ErrorKind::Io => (StatusCode::INTERNAL_SERVER_ERROR, "io"),
        };
        Self::from_diagnostic(status, kind, context, diagnostic::Error::new(err))
    }

    pub fn engine(context: &str, err: EngineError) -> Self {
        let (status, kind) = match &err {
            EngineError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            EngineError::Request(_) => (StatusCode::INTERNAL_SERVER_ERROR, "engine"),
        };
        Self::from_diagnostic(status, kind, context, diagnostic::Error::new(err))
    }

    pub fn io<E>(context: &str, err: E) -> Self
    where
        E: Diagnosable + Send + Sync + 'static,
    {
        Self::from_diagnostic(StatusCode::INTERNAL_SERVER_ERROR, "io", context, diagnostic::Error::new(err))
    }

    pub fn not_found(context: &str) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            error: context.to_string(),
            kind: "not_found",
            details: context.to_string(),
            code: None,
            suggestion: None,
        }
    }

    pub fn bad_request(context: &str, details: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error: context.to_string(),
            kind: "bad_request",
            details: details.into(),
            code: None,
            suggestion: None,
        }
    }

    /// A client error whose status comes from the failing extractor, such
    /// as 413 for an oversized multipart body.
    pub fn rejected(context: &str, status: StatusCode, details: impl Into<String>) -> Self {
        let kind = match status {
            StatusCode::PAYLOAD_TOO_LARGE => "too_large",
            _ => "bad_request",
        };
        Self {
            status,
            kind,
            ..Self::bad_request(context, details)
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(kind = self.kind, details = %self.details, "{}", self.error);
        }
        (self.status, Json(self)).into_response()
    }
}
