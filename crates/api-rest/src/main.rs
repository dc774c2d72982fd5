//! Standalone REST API server binary.
//!
//! ## Purpose
//! Runs the REST API server on its own.
//!
//! ## Intended use
//! Useful for development and debugging. The workspace's main `dhanvantri-run` binary starts the
//! same server after resolving configuration from `.env`.

use api_rest::{core_config_from_env, init_tracing, serve, state_from_config, DEFAULT_REST_ADDR};

/// Main entry point for the standalone REST server
///
/// # Environment Variables
/// - `DHANVANTRI_REST_ADDR`: REST server address (default: "0.0.0.0:8000")
/// - `DHANVANTRI_DEFAULT_BUDGET`: hospital budget used when a request omits one (default: 2000)
///
/// # Returns
/// * `Ok(())` - If the server starts and shuts down cleanly
/// * `Err(anyhow::Error)` - If configuration, binding or serving fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing(&["api_rest=info", "dhanvantri_core=info"])?;

    let cfg = core_config_from_env()?;
    let rest_addr =
        std::env::var("DHANVANTRI_REST_ADDR").unwrap_or_else(|_| DEFAULT_REST_ADDR.into());

    tracing::info!(
        "-- Starting Dhanvantri REST API (default budget {})",
        cfg.default_budget()
    );

    serve(&rest_addr, state_from_config(cfg)).await
}
