//! Frame-stepped driver pairing the world with its behavior tree.

use behavior_tree::{Behavior, Status};

use crate::config::SimConfig;
use crate::error::{Result, SimError};
use crate::tree::{CycleTree, create_behavior_tree};
use crate::world::World;

/// The world plus the tree that moves it, advanced one tick at a time.
///
/// With the default [`BasePolarity::Legacy`](crate::BasePolarity) and
/// [`Completion::Hold`](behavior_tree::Completion) the final frame shows
/// Sisyphus one step into his descent.
pub struct Simulation {
    world: World,
    tree: CycleTree,
    last_phase: Option<String>,
}

impl Simulation {
    pub fn new(config: &SimConfig) -> Self {
        Self {
            world: World::from_config(config),
            tree: create_behavior_tree(config),
            last_phase: None,
        }
    }

    /// Runs one tree update against the world.
    pub fn step(&mut self) -> Status {
        let runs_before = self.tree.runs();
        let status = self.tree.update(&mut self.world);

        if self.tree.runs() != runs_before && runs_before > 0 {
            tracing::info!(run = self.tree.runs(), "cycle restarted");
        }
        self.track_phase(status);
        status
    }

    /// Steps until the current run of the tree finishes.
    ///
    /// Returns the number of ticks taken, or an error if the run is still
    /// going after `max_ticks`. A simulation that already finished takes
    /// zero ticks.
    pub fn run_until_done(&mut self, max_ticks: u64) -> Result<u64> {
        if self.is_finished() {
            return Ok(0);
        }
        for tick in 1..=max_ticks {
            if self.step().is_done() {
                return Ok(tick);
            }
        }
        Err(SimError::TickBudgetExhausted { ticks: max_ticks })
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn tree(&self) -> &CycleTree {
        &self.tree
    }

    /// Name of the leaf currently in control, if the cycle is in progress.
    pub fn phase(&self) -> Option<&str> {
        self.tree.root().active_child_name()
    }

    pub fn status(&self) -> Option<Status> {
        self.tree.last_status()
    }

    pub fn tick_count(&self) -> u64 {
        self.tree.ticks()
    }

    pub fn is_finished(&self) -> bool {
        self.tree.is_finished()
    }

    fn track_phase(&mut self, status: Status) {
        let current = self.phase();
        if current == self.last_phase.as_deref() {
            return;
        }

        match current {
            Some(phase) => tracing::info!(tick = self.tick_count(), phase, "phase changed"),
            None => tracing::info!(
                tick = self.tick_count(),
                cycle = self.tree.root().name(),
                ?status,
                "cycle finished"
            ),
        }
        self.last_phase = current.map(str::to_owned);
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(&SimConfig::default())
    }
}
