use crate::api::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use portside_domain::icon::IconCandidate;
use portside_settings::StoredIcon;
use serde::Deserialize;
use tracing::info;

#[derive(Debug, Deserialize)]
pub struct IconUrlRequest {
    pub url: String,
}

/// POST /api/containers/{id}/icon
pub async fn fetch_from_url(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
    body: Result<Json<IconUrlRequest>, JsonRejection>,
) -> Result<Json<StoredIcon>, ApiError> {
    const CONTEXT: &str = "Error fetching icon";
    let Path(id) = id.map_err(|e| ApiError::bad_request(CONTEXT, e.body_text()))?;
    let Json(body) = body.map_err(|e| ApiError::bad_request(CONTEXT, e.body_text()))?;
    let url = body.url.trim();
    if url.is_empty() {
        return Err(ApiError::bad_request(CONTEXT, "url must not be empty"));
    }

    info!(id = %id, url = %url, "Received icon fetch request");
    let stored = state
        .icons
        .store_from_url(&id, url)
        .await
        .map_err(|e| ApiError::settings(CONTEXT, e))?;
    Ok(Json(stored))
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub name: String,
}

/// GET /api/icons/search?name=
pub async fn search(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<Vec<IconCandidate>>, ApiError> {
    const CONTEXT: &str = "Error searching icons";
    let Query(params) = params.map_err(|e| ApiError::bad_request(CONTEXT, e.body_text()))?;
    let found = state
        .icons
        .search(&params.name)
        .await
        .map_err(|e| ApiError::settings(CONTEXT, e))?;
    Ok(Json(found))
}
