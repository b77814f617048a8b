//! Decorator behavior nodes.
//!
//! Decorators wrap a single child behavior and modify its result.
//! This module provides [`Inverter`] (NOT logic) and [`AlwaysSucceed`]
//! (failure suppression). Both forward `enter` and `reset` to the child and
//! pass `Running` through untouched.

use crate::{Behavior, Status};

/// Inverts the result of its child behavior.
///
/// # Semantics
///
/// - If the child returns `Success`, the inverter returns `Failure`
/// - If the child returns `Failure`, the inverter returns `Success`
/// - `Running` is propagated as is
pub struct Inverter<C> {
    child: Box<dyn Behavior<C>>,
}

impl<C> Inverter<C> {
    /// Creates a new inverter that wraps the given child behavior.
    pub fn new(child: Box<dyn Behavior<C>>) -> Self {
        Self { child }
    }
}

impl<C> Behavior<C> for Inverter<C> {
    fn name(&self) -> &str {
        self.child.name()
    }

    fn enter(&mut self, ctx: &mut C) {
        self.child.enter(ctx);
    }

    fn execute(&mut self, ctx: &mut C) -> Status {
        self.child.execute(ctx).invert()
    }

    fn reset(&mut self) {
        self.child.reset();
    }
}

/// Returns `Success` whenever the child finishes, regardless of its result.
///
/// Useful for optional steps that shouldn't cause a sequence to fail.
pub struct AlwaysSucceed<C> {
    child: Box<dyn Behavior<C>>,
}

impl<C> AlwaysSucceed<C> {
    /// Creates a new always-succeed wrapper around the given child behavior.
    pub fn new(child: Box<dyn Behavior<C>>) -> Self {
        Self { child }
    }
}

impl<C> Behavior<C> for AlwaysSucceed<C> {
    fn name(&self) -> &str {
        self.child.name()
    }

    fn enter(&mut self, ctx: &mut C) {
        self.child.enter(ctx);
    }

    fn execute(&mut self, ctx: &mut C) -> Status {
        match self.child.execute(ctx) {
            Status::Running => Status::Running,
            Status::Success | Status::Failure => Status::Success,
        }
    }

    fn reset(&mut self) {
        self.child.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestContext {
        value: i32,
    }

    struct IsPositive;
    impl Behavior<TestContext> for IsPositive {
        fn name(&self) -> &str {
            "is positive"
        }

        fn execute(&mut self, ctx: &mut TestContext) -> Status {
            if ctx.value > 0 {
                Status::Success
            } else {
                Status::Failure
            }
        }
    }

    /// Counts up to three, failing once it gets there.
    struct CountToThree;
    impl Behavior<TestContext> for CountToThree {
        fn name(&self) -> &str {
            "count"
        }

        fn execute(&mut self, ctx: &mut TestContext) -> Status {
            ctx.value += 1;
            if ctx.value < 3 {
                Status::Running
            } else {
                Status::Failure
            }
        }
    }

    #[test]
    fn inverter_inverts_success() {
        let mut inverter = Inverter::new(Box::new(IsPositive));

        let mut ctx = TestContext { value: 10 };
        assert_eq!(inverter.execute(&mut ctx), Status::Failure);
    }

    #[test]
    fn inverter_inverts_failure() {
        let mut inverter = Inverter::new(Box::new(IsPositive));

        let mut ctx = TestContext { value: -10 };
        assert_eq!(inverter.execute(&mut ctx), Status::Success);
        assert_eq!(inverter.name(), "is positive");
    }

    #[test]
    fn always_succeed_passes_running_then_masks_failure() {
        let mut always = AlwaysSucceed::new(Box::new(CountToThree));

        let mut ctx = TestContext { value: 0 };
        assert_eq!(always.execute(&mut ctx), Status::Running);
        assert_eq!(always.execute(&mut ctx), Status::Running);
        assert_eq!(always.execute(&mut ctx), Status::Success);
        assert_eq!(ctx.value, 3); // Child still executed
    }
}
