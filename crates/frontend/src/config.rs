//! CLI-specific configuration for the terminal renderer.
use std::env;

use sisyphus_sim::read_env;

/// Terminal frontend configuration.
///
/// Scene and behavior settings live in [`sisyphus_sim::SimConfig`]; this
/// only covers how the scene is presented.
#[derive(Clone, Debug)]
pub struct CliConfig {
    /// Frames (and tree updates) per second.
    pub tick_rate: u32,
    /// Session identifier used for the log directory.
    pub session_id: Option<String>,
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `SISYPHUS_TICK_RATE` - Frames per second (default: 60)
    /// - `SISYPHUS_SESSION_ID` - Log session name (default: timestamp based)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(rate) = read_env::<u32>("SISYPHUS_TICK_RATE") {
            config.tick_rate = rate.max(1);
        }

        config.session_id = env::var("SISYPHUS_SESSION_ID").ok();

        config
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            tick_rate: 60,
            session_id: None,
        }
    }
}
