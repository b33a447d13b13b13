//! Admin dashboard demo binary
//!
//! Loads the configuration, wires the services and controllers together
//! and runs a scripted session over every panel.

use std::path::PathBuf;

use anyhow::Result;
use tracing::info;

mod app;
mod config;
mod demo;

use app::App;
use config::AppConfig;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("dashboard.json"));
    let config = AppConfig::load(&config_path)?;
    info!(
        api_delay_ms = config.api_delay_ms,
        debounce_ms = config.debounce_ms,
        page_size = config.page_size,
        "starting dashboard demo"
    );

    let app = App::new(&config);
    demo::run(&app, &config).await?;

    info!("demo session complete");
    Ok(())
}
