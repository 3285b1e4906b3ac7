use clap::Parser;
use portside_common::config::{Config, MAX_ICON_BYTES};
use portside_common::telemetry;
use portside_infra_docker::DockerEngine;
use portside_infra_icons::HttpIconSource;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    telemetry::init_tracing("portsided")?;

    info!(public_dir = %config.public_dir.display(), "Starting portside daemon");

    let engine = DockerEngine::connect()?;
    let icon_source = HttpIconSource::new(config.fetch_timeout(), MAX_ICON_BYTES)?;

    let state = state::AppState::new(&config, Arc::new(engine), Arc::new(icon_source));
    state.assets.ensure_dirs().await?;

    let app = api::router(state);
    let addr = config.listen_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("API Server listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}

mod api;
mod state;
