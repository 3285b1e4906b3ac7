use crate::api::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use portside_domain::container::{self, ContainerView};
use serde_json::{json, Value};
use tracing::info;

/// GET /api/containers
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<ContainerView>>, ApiError> {
    let containers = state
        .engine
        .list(true)
        .await
        .map_err(|e| ApiError::engine("Error retrieving containers", e))?;

    Ok(Json(containers.iter().map(ContainerView::from).collect()))
}

/// GET /api/containers/name/{name}
pub async fn find_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<ContainerView>, ApiError> {
    let containers = state
        .engine
        .list(true)
        .await
        .map_err(|e| ApiError::engine("Error finding container", e))?;

    container::find_by_name(&containers, &name)
        .map(|c| Json(ContainerView::from(c)))
        .ok_or_else(|| ApiError::not_found("Container not found"))
}

/// POST /api/containers/{id}/start
pub async fn start(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Value>, ApiError> {
    info!(id = %id, "Received start container request");
    state
        .engine
        .start(&id)
        .await
        .map_err(|e| ApiError::engine("Error starting container", e))?;
    Ok(Json(json!({ "success": true })))
}

/// POST /api/containers/{id}/stop
pub async fn stop(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Value>, ApiError> {
    info!(id = %id, "Received stop container request");
    state
        .engine
        .stop(&id)
        .await
        .map_err(|e| ApiError::engine("Error stopping container", e))?;
    Ok(Json(json!({ "success": true })))
}
