//! Fixed-rate frame loop: poll input, update the tree, redraw.

use anyhow::Result;
use crossterm::event::{self as term_event, Event as TermEvent};
use sisyphus_sim::Simulation;
use tokio::time::{self, Duration, MissedTickBehavior};

use crate::{
    input::{KeyAction, handle_key},
    presentation::{terminal::Tui, ui},
};

/// Owns the simulation and advances it once per frame.
pub struct FrameLoop {
    sim: Simulation,
    frame_interval: Duration,
}

impl FrameLoop {
    pub fn new(sim: Simulation, tick_rate: u32) -> Self {
        Self {
            sim,
            frame_interval: Duration::from_secs_f64(1.0 / f64::from(tick_rate.max(1))),
        }
    }

    /// Runs until the user quits, then hands the simulation back.
    pub async fn run(mut self, terminal: &mut Tui) -> Result<Simulation> {
        let mut ticker = time::interval(self.frame_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        ui::render(terminal, &self.sim)?;

        loop {
            ticker.tick().await;

            if self.quit_requested()? {
                tracing::info!(tick = self.sim.tick_count(), "quit requested");
                break;
            }

            self.sim.step();
            ui::render(terminal, &self.sim)?;
        }

        Ok(self.sim)
    }

    /// Drains pending terminal events without blocking.
    fn quit_requested(&self) -> Result<bool> {
        while term_event::poll(Duration::ZERO)? {
            if let TermEvent::Key(key) = term_event::read()?
                && handle_key(key) == KeyAction::Quit
            {
                return Ok(true);
            }
        }
        Ok(false)
    }
}
