//! Sage sketch client binary.
//!
//! # Architecture
//!
//! This binary is the composition root that assembles:
//! 1. Configuration from the environment (and an optional `.env` file)
//! 2. Logging to a file, since the terminal belongs to the UI
//! 3. Frontend (UI) - CLI, GUI, etc.
//!
//! # Features
//!
//! - `frontend-cli`: Terminal-based UI (default)
//!
//! # Examples
//!
//! ```bash
//! SAGE_GCD_MS=1500 RUST_LOG=debug cargo run -p sage-client
//! ```

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    #[cfg(feature = "frontend-cli")]
    {
        run_cli().await?;
    }

    #[cfg(not(feature = "frontend-cli"))]
    {
        compile_error!("At least one frontend feature must be enabled (frontend-cli, etc.)");
    }

    Ok(())
}

/// Run the CLI frontend.
#[cfg(feature = "frontend-cli")]
async fn run_cli() -> Result<()> {
    use anyhow::Context;
    use client_frontend_cli::{CliConfig, CliFrontend, FrontendConfig, logging};
    use sage_client::Client;

    // 1. Load configuration from environment
    let frontend_config = FrontendConfig::from_env();
    let cli_config = CliConfig::from_env();
    frontend_config
        .sketch
        .validate()
        .context("invalid sketch configuration")?;

    // 2. Setup logging
    let _log_guard = logging::setup_logging(cli_config.log_dir.as_deref())?;

    tracing::info!("Starting Sage sketch");
    tracing::info!(
        gcd_ms = frontend_config.sketch.gcd_ms,
        move_step = frontend_config.sketch.move_step,
        debug_slots = frontend_config.debug.slots,
        frame_interval_ms = cli_config.frame_interval_ms,
        "Configuration loaded"
    );

    // 3. Build Frontend
    let frontend = CliFrontend::new(frontend_config, cli_config);

    // 4. Build and run
    let client = Client::builder().frontend(frontend).build()?;
    client.run().await?;

    tracing::info!("Client shutdown complete");
    Ok(())
}
