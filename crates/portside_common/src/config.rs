//! Runtime configuration for the daemon.
//!
//! Every value can be given as a flag or through the environment; `PORT` is
//! kept unprefixed so existing deployments keep working.

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

pub const CONTAINER_SETTINGS_FILE: &str = "containerSettings.json";
pub const APP_SETTINGS_FILE: &str = "appSettings.json";
pub const ASSETS_DIR: &str = "assets";
/// Largest icon accepted, whether uploaded or downloaded.
pub const MAX_ICON_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone, Parser)]
#[command(name = "portsided", about = "Container dashboard backend")]
pub struct Config {
    /// Address to bind the HTTP listener to.
    #[arg(long, env = "PORTSIDE_BIND", default_value = "0.0.0.0")]
    pub bind: String,

    #[arg(long, env = "PORT", default_value_t = 3080)]
    pub port: u16,

    /// Directory holding the settings documents and the `assets/` folder.
    #[arg(long, env = "PORTSIDE_PUBLIC_DIR", default_value = "public")]
    pub public_dir: PathBuf,

    /// Upper bound for every outbound icon request, in seconds.
    #[arg(long, env = "PORTSIDE_FETCH_TIMEOUT_SECS", default_value_t = 5)]
    pub fetch_timeout_secs: u64,

    #[arg(
        long,
        env = "PORTSIDE_ICON_REPOSITORY",
        default_value = "https://cdn.jsdelivr.net/gh/walkxcode/dashboard-icons"
    )]
    pub icon_repository: String,
}

impl Config {
    pub fn listen_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.bind, self.port)
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid listen address {}:{}: {}", self.bind, self.port, e))
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    pub fn container_settings_path(&self) -> PathBuf {
        self.public_dir.join(CONTAINER_SETTINGS_FILE)
    }

    pub fn app_settings_path(&self) -> PathBuf {
        self.public_dir.join(APP_SETTINGS_FILE)
    }

    pub fn assets_dir(&self) -> PathBuf {
        self.public_dir.join(ASSETS_DIR)
    }
}
