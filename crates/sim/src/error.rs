//! Simulation errors.

/// Errors raised while driving the simulation headlessly.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    #[error("behavior tree still running after {ticks} ticks")]
    TickBudgetExhausted { ticks: u64 },
}

pub type Result<T> = std::result::Result<T, SimError>;
