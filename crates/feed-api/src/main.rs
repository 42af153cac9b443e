//! Community feed API server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p feed-api
//! ```
//!
//! Configuration is loaded from environment variables (and `.env` when present).

use feed_common::{try_init_tracing_with_config, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Load configuration first so the log format can follow the environment
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    // Initialize tracing
    if let Err(e) = try_init_tracing_with_config(&TracingConfig::for_environment(config.app.env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    // Run the server
    if let Err(e) = run(config).await {
        error!(error = %e, "Server failed to start");
        std::process::exit(1);
    }
}

async fn run(config: AppConfig) -> anyhow::Result<()> {
    info!(
        app = %config.app.name,
        env = ?config.app.env,
        port = config.api.port,
        "Starting community feed API server"
    );

    feed_api::run(config).await?;

    Ok(())
}
