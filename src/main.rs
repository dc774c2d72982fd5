use api_rest::{core_config_from_env, init_tracing, serve, state_from_config, DEFAULT_REST_ADDR};
use api_shared::SERVICE_NAME;
use dhanvantri_core::ReferenceData;

/// Main entry point for the Dhanvantri application
///
/// Resolves configuration once, checks the builtin reference tables and starts the REST server
/// (with Swagger UI at `/swagger-ui`).
///
/// # Environment Variables
/// - `DHANVANTRI_REST_ADDR`: REST server address (default: "0.0.0.0:8000")
/// - `DHANVANTRI_DEFAULT_BUDGET`: hospital budget used when a request omits one (default: 2000)
/// - `RUST_LOG`: extra tracing directives
///
/// # Returns
/// * `Ok(())` - If the server starts and shuts down cleanly
/// * `Err(anyhow::Error)` - If configuration, startup or serving fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing(&["dhanvantri_run=info", "api_rest=info", "dhanvantri_core=info"])?;

    let cfg = core_config_from_env()?;
    let rest_addr =
        std::env::var("DHANVANTRI_REST_ADDR").unwrap_or_else(|_| DEFAULT_REST_ADDR.into());

    // Builtin tables must be consistent before serving.
    ReferenceData::builtin().validate()?;

    tracing::info!("++ Starting {} on {}", SERVICE_NAME, rest_addr);
    serve(&rest_addr, state_from_config(cfg)).await
}
