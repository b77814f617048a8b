//! Behavior-tree driven animation of the myth of Sisyphus.
//!
//! A figure pushes a boulder up a hill, the boulder escapes and rolls back,
//! and the figure walks down to start over. The motion is scripted by a
//! three-phase [`Sequence`](behavior_tree::Sequence):
//!
//! ```text
//! Sisyphean Cycle
//!   ├─→ Push Boulder
//!   ├─→ Boulder Rolls Back
//!   └─→ Check Boulder At Base
//! ```
//!
//! The crate is rendering agnostic: [`Simulation::step`] mutates the
//! [`World`] and frontends draw it however they like.

pub mod config;
pub mod entities;
pub mod error;
pub mod geometry;
pub mod nodes;
pub mod simulation;
pub mod tree;
pub mod world;

pub use config::{BasePolarity, SimConfig, read_env};
pub use entities::{Boulder, Hill, Sisyphus};
pub use error::SimError;
pub use geometry::{Position, Slope};
pub use simulation::Simulation;
pub use tree::{CYCLE_NAME, CycleTree, create_behavior_tree};
pub use world::{Bounds, World};
