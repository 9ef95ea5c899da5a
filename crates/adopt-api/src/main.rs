//! Pet adoption API server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p adopt-api
//! ```
//!
//! Configuration is loaded from environment variables or a `.env` file.

use adopt_common::{try_init_tracing, AppConfig, Environment, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Initialize tracing
    if let Err(e) = try_init_tracing(TracingConfig::for_environment(Environment::from_env())) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    if let Err(e) = run().await {
        error!(error = %e, "Server failed to start");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    info!("Starting pet adoption API server...");

    let config = AppConfig::from_env().map_err(|e| {
        error!(error = %e, "Failed to load configuration");
        e
    })?;

    info!(
        env = ?config.app.env,
        port = config.api.port,
        "Configuration loaded"
    );

    adopt_api::run(config).await?;

    Ok(())
}
