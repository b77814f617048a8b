//! Lightweight, frame-stepped behavior tree library.
//!
//! Nodes follow an `enter` / `execute` contract: a node is entered once when
//! it gains control, then executed once per tick until it stops reporting
//! [`Status::Running`]. The context is passed to every call, so nodes own no
//! references to the world they act on.
//!
//! - **Stateful composites**: a running child is resumed, not re-evaluated
//! - **Explicit completion policy**: the driver decides whether a finished
//!   root is held or restarted
//! - **Zero dependencies**: Pure Rust with no external crates
//!
//! # Architecture
//!
//! - [`Behavior`]: Core trait for all nodes
//! - [`Status`]: Running, Success or Failure
//! - Composite nodes: [`Sequence`], [`Selector`]
//! - Decorator nodes: [`Inverter`], [`AlwaysSucceed`]
//! - Driver: [`BehaviorTree`] with a [`Completion`] policy

pub mod behavior;
pub mod builder;
pub mod composite;
pub mod decorator;
pub mod status;
pub mod tree;

// Re-export core types for ergonomic API
pub use behavior::Behavior;
pub use composite::{Selector, Sequence};
pub use decorator::{AlwaysSucceed, Inverter};
pub use status::Status;
pub use tree::{BehaviorTree, Completion};
