use crate::api::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        rejection::PathRejection,
        Multipart, Path, State,
    },
    Json,
};
use bytes::Bytes;
use portside_domain::settings::{ContainerSettingsDocument, ContainerSettingsEntry, ContainerSettingsPatch};
use serde::Serialize;
use tracing::info;

const UPDATE_FAILED: &str = "Error updating settings";

/// GET /api/containers/settings
pub async fn get_all(State(state): State<AppState>) -> Json<ContainerSettingsDocument> {
    Json(state.container_settings.get_all().await)
}

/// Fields of the settings form. Both are optional.
#[derive(Debug, Default)]
pub struct SettingsForm {
    pub name: Option<String>,
    pub icon: Option<IconUpload>,
}

#[derive(Debug)]
pub struct IconUpload {
    pub filename: String,
    pub data: Bytes,
}

#[derive(Debug, Serialize)]
pub struct UpdateResponse {
    pub success: bool,
    pub settings: ContainerSettingsEntry,
}

fn form_error(e: MultipartError) -> ApiError {
    ApiError::rejected(UPDATE_FAILED, e.status(), e.body_text())
}

async fn read_form(mut multipart: Multipart) -> Result<SettingsForm, ApiError> {
    let mut form = SettingsForm::default();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(form_error)?
    {
        let field_name = field.name().map(str::to_string);
        match field_name.as_deref() {
            Some("name") => {
                let text = field
                    .text()
                    .await
                    .map_err(form_error)?;
                form.name = Some(text);
            }
            Some("icon") => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(form_error)?;
                // Browsers submit an empty part when no file was picked.
                if !filename.is_empty() && !data.is_empty() {
                    form.icon = Some(IconUpload { filename, data });
                }
            }
            _ => {}
        }
    }
    Ok(form)
}

pub async fn apply_form(state: &AppState, id: &str, form: SettingsForm) -> Result<ContainerSettingsEntry, ApiError> {
    let Some(icon) = form.icon else {
        let patch = ContainerSettingsPatch {
            custom_name: form.name,
            ..Default::default()
        };
        return state
            .container_settings
            .upsert_customization(id, patch)
            .await
            .map_err(|e| ApiError::settings(UPDATE_FAILED, e));
    };

    let staged = state
        .assets
        .stage(icon.data)
        .await
        .map_err(|e| ApiError::io(UPDATE_FAILED, e))?;

    match state.icons.store_upload(id, &staged, &icon.filename, form.name).await {
        Ok(stored) => Ok(stored.settings),
        Err(e) => {
            state.assets.discard(&staged).await;
            Err(ApiError::settings(UPDATE_FAILED, e))
        }
    }
}

/// POST /api/containers/settings/{id}
///
/// Multipart form with an optional `name` text field and an optional `icon`
/// file field.
pub async fn update(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UpdateResponse>, ApiError> {
    let Path(id) = id.map_err(|e| ApiError::bad_request(UPDATE_FAILED, e.body_text()))?;
    let multipart = multipart.map_err(|e| ApiError::rejected(UPDATE_FAILED, e.status(), e.body_text()))?;
    let form = read_form(multipart).await?;
    info!(id = %id, name = ?form.name, has_icon = form.icon.is_some(), "Received settings update");

    let settings = apply_form(&state, &id, form).await?;
    Ok(Json(UpdateResponse {
        success: true,
        settings,
    }))
}
