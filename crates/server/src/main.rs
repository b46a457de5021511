//! Standalone server binary.
//!
//! Usage: `server [CONFIG.toml]`. Without a config file the defaults are
//! used (menu.json in the working directory, listening on 127.0.0.1:8000).

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use server::{AppState, ServerConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = ServerConfig::load(config_path.as_deref()).context("Failed to load config")?;
    info!(?config, "Starting menu recommender");

    let state = AppState::load(config)?;
    server::run(state).await
}
