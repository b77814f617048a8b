//! Builder utilities for ergonomic behavior tree construction.
//!
//! This module provides helper functions to reduce boilerplate when building
//! behavior trees. Instead of writing verbose
//! `Box::new(Sequence::with_children(name, vec![...]))`, you can use shorter
//! functions like `sequence(name, vec![...])`.

use crate::{AlwaysSucceed, Behavior, Inverter, Selector, Sequence};

/// Creates a sequence node.
#[inline]
pub fn sequence<C: 'static>(
    name: impl Into<String>,
    children: Vec<Box<dyn Behavior<C>>>,
) -> Box<dyn Behavior<C>> {
    Box::new(Sequence::with_children(name, children))
}

/// Creates a selector node.
#[inline]
pub fn selector<C: 'static>(
    name: impl Into<String>,
    children: Vec<Box<dyn Behavior<C>>>,
) -> Box<dyn Behavior<C>> {
    Box::new(Selector::with_children(name, children))
}

/// Creates an inverter node.
///
/// Shorthand for `Box::new(Inverter::new(child))`.
#[inline]
pub fn inverter<C: 'static>(child: Box<dyn Behavior<C>>) -> Box<dyn Behavior<C>> {
    Box::new(Inverter::new(child))
}

/// Creates an always-succeed node.
///
/// Shorthand for `Box::new(AlwaysSucceed::new(child))`.
#[inline]
pub fn always_succeed<C: 'static>(child: Box<dyn Behavior<C>>) -> Box<dyn Behavior<C>> {
    Box::new(AlwaysSucceed::new(child))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Status;

    struct Fixed(Status);
    impl Behavior<u32> for Fixed {
        fn name(&self) -> &str {
            "fixed"
        }

        fn execute(&mut self, ticks: &mut u32) -> Status {
            *ticks += 1;
            self.0
        }
    }

    fn fixed(status: Status) -> Box<dyn Behavior<u32>> {
        Box::new(Fixed(status))
    }

    #[test]
    fn fallback_tree_from_helpers() {
        // Try a failing branch, then fall back to an optional one.
        let mut root = selector(
            "root",
            vec![
                sequence("attempt", vec![fixed(Status::Success), fixed(Status::Failure)]),
                always_succeed(inverter(fixed(Status::Success))),
            ],
        );

        let mut ticks = 0;
        assert_eq!(root.execute(&mut ticks), Status::Success);
        assert_eq!(ticks, 3);
        assert_eq!(root.name(), "root");
    }
}
