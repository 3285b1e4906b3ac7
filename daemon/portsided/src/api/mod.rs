pub mod app_settings;
pub mod container_settings;
pub mod containers;
pub mod error;
pub mod icons;
pub mod middleware;
pub mod version;

#[cfg(test)]
pub(crate) mod testing;

use crate::state::AppState;
use portside_common::config::MAX_ICON_BYTES;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post, put},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/version", get(version::handle))
        .route("/api/containers", get(containers::list))
        .route("/api/containers/name/:name", get(containers::find_by_name))
        .route("/api/containers/:id/start", post(containers::start))
        .route("/api/containers/:id/stop", post(containers::stop))
        .route("/api/containers/:id/icon", post(icons::fetch_from_url))
        .route("/api/containers/settings", get(container_settings::get_all))
        .route(
            "/api/containers/settings/:id",
            post(container_settings::update).layer(DefaultBodyLimit::max(MAX_ICON_BYTES)),
        )
        .route("/api/icons/search", get(icons::search))
        .route("/api/app-settings", get(app_settings::get))
        .route("/api/app-settings/servers", post(app_settings::add_server))
        .route(
            "/api/app-settings/servers/:index",
            put(app_settings::update_server).delete(app_settings::delete_server),
        )
        .route("/api/app-settings/sort", put(app_settings::set_sort))
        .layer(axum::middleware::from_fn(middleware::trace_request))
        .with_state(state)
}
