//! Terminal frontend for the Sisyphus animation.
//!
//! Draws the scene on a ratatui canvas and advances the behavior tree once
//! per frame at a fixed tick rate.

mod app;
mod config;
pub mod input;
pub mod logging;
pub mod presentation;

pub use app::CliApp;
pub use config::CliConfig;
