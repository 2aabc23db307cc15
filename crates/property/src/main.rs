use anyhow::{Context, Result};
use dotenv::dotenv;
use property::{config::Config, handler::AppRouter, state::AppState};
use shared::utils::init_logger;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let is_dev = std::env::var("DEV_MODE")
        .map(|v| v == "true" || v == "1")
        .unwrap_or(false);
    let is_enable_file = std::env::var("ENABLE_FILE_LOG")
        .map(|v| v == "true")
        .unwrap_or(false);

    init_logger("property-service", is_dev, is_enable_file);

    let config = Config::init().context("Failed to load configuration")?;

    let port = config.port;

    let state = AppState::new(&config).context("Failed to create AppState")?;

    info!(
        "🚀 Property service starting (sanitize property routes: {})",
        config.sanitize_property_routes
    );

    AppRouter::serve(port, state)
        .await
        .context("Failed to start server")?;

    info!("✅ Property service shutdown complete.");

    Ok(())
}
