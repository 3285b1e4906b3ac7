use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Used when `RUST_LOG` is unset. The HTTP and Docker client crates are noisy
/// at `info`.
pub const DEFAULT_FILTER: &str = "info,hyper=warn,hyper_util=warn,bollard=warn,reqwest=warn";

pub fn init_tracing(service_name: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to init tracing for {}: {}", service_name, e))?;

    tracing::info!(service = %service_name, "Tracing initialized");
    Ok(())
}
