//! Core behavior trait.
//!
//! This module defines the [`Behavior`] trait, the contract every behavior
//! tree node implements. The trait is generic over a context type `C`; the
//! context is handed to the node on every call instead of being captured at
//! construction, so nodes never hold references into the simulation.

use crate::Status;

/// A behavior tree node that can be driven against a context.
///
/// A node goes through the following lifecycle, driven by its parent:
///
/// 1. [`enter`](Behavior::enter) once, on the tick control transfers to it
/// 2. [`execute`](Behavior::execute) once per tick until it stops returning
///    [`Status::Running`]
/// 3. optionally [`reset`](Behavior::reset) before being run again
pub trait Behavior<C>: Send {
    /// Human readable node name, used in logs and status displays.
    fn name(&self) -> &str;

    /// Called exactly once when the node becomes active.
    ///
    /// Use this to snapshot whatever the run needs from the context. The
    /// hook cannot fail.
    fn enter(&mut self, _ctx: &mut C) {}

    /// Advance the node by one tick.
    ///
    /// # Returns
    ///
    /// - `Status::Running` if the node must be executed again next tick
    /// - `Status::Success` if the node reached its goal
    /// - `Status::Failure` if the node gave up
    fn execute(&mut self, ctx: &mut C) -> Status;

    /// Clear any progress so the node can run again from scratch.
    fn reset(&mut self) {}
}

/// Blanket implementation for boxed behaviors.
///
/// This allows `Box<dyn Behavior<C>>` to also implement `Behavior<C>`,
/// enabling dynamic dispatch and heterogeneous collections of nodes.
impl<C> Behavior<C> for Box<dyn Behavior<C>> {
    #[inline]
    fn name(&self) -> &str {
        (**self).name()
    }

    #[inline]
    fn enter(&mut self, ctx: &mut C) {
        (**self).enter(ctx)
    }

    #[inline]
    fn execute(&mut self, ctx: &mut C) -> Status {
        (**self).execute(ctx)
    }

    #[inline]
    fn reset(&mut self) {
        (**self).reset()
    }
}
