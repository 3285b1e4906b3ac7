use crate::api::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    Json,
};
use portside_domain::settings::{AppSettings, ServerEntry};
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Serialize)]
pub struct ServersResponse {
    pub success: bool,
    pub servers: Vec<ServerEntry>,
}

impl ServersResponse {
    fn ok(servers: Vec<ServerEntry>) -> Json<Self> {
        Json(Self { success: true, servers })
    }
}

#[derive(Debug, Serialize)]
pub struct SortResponse {
    pub success: bool,
    pub settings: AppSettings,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortRequest {
    pub container_sort: String,
}

/// GET /api/app-settings
pub async fn get(State(state): State<AppState>) -> Json<AppSettings> {
    Json(state.app_settings.get().await)
}

/// POST /api/app-settings/servers
pub async fn add_server(
    State(state): State<AppState>,
    body: Result<Json<ServerEntry>, JsonRejection>,
) -> Result<Json<ServersResponse>, ApiError> {
    const CONTEXT: &str = "Error saving server settings";
    let Json(entry) = body.map_err(|e| ApiError::bad_request(CONTEXT, e.body_text()))?;
    info!(name = %entry.name(), address = %entry.address(), "Adding server");
    let servers = state
        .app_settings
        .add_server(entry)
        .await
        .map_err(|e| ApiError::settings(CONTEXT, e))?;
    Ok(ServersResponse::ok(servers))
}

/// PUT /api/app-settings/servers/{index}
pub async fn update_server(
    State(state): State<AppState>,
    index: Result<Path<i64>, PathRejection>,
    body: Result<Json<ServerEntry>, JsonRejection>,
) -> Result<Json<ServersResponse>, ApiError> {
    const CONTEXT: &str = "Error updating server";
    let Path(index) = index.map_err(|e| ApiError::bad_request(CONTEXT, e.body_text()))?;
    let Json(entry) = body.map_err(|e| ApiError::bad_request(CONTEXT, e.body_text()))?;
    let servers = state
        .app_settings
        .update_server(index, entry)
        .await
        .map_err(|e| ApiError::settings(CONTEXT, e))?;
    Ok(ServersResponse::ok(servers))
}

/// DELETE /api/app-settings/servers/{index}
pub async fn delete_server(
    State(state): State<AppState>,
    index: Result<Path<i64>, PathRejection>,
) -> Result<Json<ServersResponse>, ApiError> {
    const CONTEXT: &str = "Error deleting server";
    let Path(index) = index.map_err(|e| ApiError::bad_request(CONTEXT, e.body_text()))?;
    let servers = state
        .app_settings
        .delete_server(index)
        .await
        .map_err(|e| ApiError::settings(CONTEXT, e))?;
    Ok(ServersResponse::ok(servers))
}

/// PUT /api/app-settings/sort
pub async fn set_sort(
    State(state): State<AppState>,
    body: Result<Json<SortRequest>, JsonRejection>,
) -> Result<Json<SortResponse>, ApiError> {
    const CONTEXT: &str = "Error saving sort preference";
    let Json(body) = body.map_err(|e| ApiError::bad_request(CONTEXT, e.body_text()))?;
    let settings = state
        .app_settings
        .set_sort(body.container_sort)
        .await
        .map_err(|e| ApiError::settings(CONTEXT, e))?;
    Ok(Json(SortResponse {
        success: true,
        settings,
    }))
}
