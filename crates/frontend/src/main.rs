//! Sisyphus animation binary.
//!
//! ```bash
//! SISYPHUS_BASE_POLARITY=conventional SISYPHUS_RESTART=true cargo run -p sisyphus-client
//! ```

use anyhow::Result;
use sisyphus_client::{CliApp, CliConfig, logging};
use sisyphus_sim::SimConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let sim_config = SimConfig::from_env();
    let cli_config = CliConfig::from_env();

    let _log_guard = logging::setup_logging(cli_config.session_id.as_deref())?;

    CliApp::new(sim_config, cli_config).execute().await
}
