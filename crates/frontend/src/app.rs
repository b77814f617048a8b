//! Glue code tying the simulation and the terminal UI together.
use anyhow::Result;
use sisyphus_sim::{SimConfig, Simulation};

use crate::config::CliConfig;
use crate::presentation::{FrameLoop, terminal};

pub struct CliApp {
    sim_config: SimConfig,
    cli_config: CliConfig,
}

impl CliApp {
    pub fn new(sim_config: SimConfig, cli_config: CliConfig) -> Self {
        Self {
            sim_config,
            cli_config,
        }
    }

    pub async fn execute(self) -> Result<()> {
        tracing::info!("CLI client starting...");
        tracing::info!(
            polarity = %self.sim_config.base_polarity,
            completion = ?self.sim_config.completion,
            tick_rate = self.cli_config.tick_rate,
            "scene configured"
        );

        let sim = Simulation::new(&self.sim_config);
        let frame_loop = FrameLoop::new(sim, self.cli_config.tick_rate);

        let mut terminal = terminal::init()?;
        let _guard = terminal::TerminalGuard;

        let sim = frame_loop.run(&mut terminal).await?;

        terminal::restore()?;
        tracing::info!(
            ticks = sim.tick_count(),
            finished = sim.is_finished(),
            "CLI client exiting"
        );

        Ok(())
    }
}
