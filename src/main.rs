//! # Chirpy
//!
//! Entry point: tracing, configuration, then the HTTP server.

use anyhow::Result;
use tracing::info;

use chirpy::config::Settings;
use chirpy::startup::Application;

#[tokio::main]
async fn main() -> Result<()> {
    chirpy::telemetry::init_tracing();

    info!("Starting Chirpy...");

    // Missing required settings abort startup
    let settings = Settings::load()?;
    info!(
        host = %settings.server.host,
        port = %settings.server.port,
        platform = %settings.platform,
        fileserver_root = %settings.fileserver.root,
        "Configuration loaded"
    );

    let application = Application::build(settings).await?;

    info!("Server ready to accept connections");
    application.run_until_stopped().await?;

    Ok(())
}
