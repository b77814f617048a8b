//! Composite behavior nodes.
//!
//! Composite nodes control the execution flow of multiple child behaviors.
//! This module provides the two fundamental building blocks:
//! [`Sequence`] (AND logic) and [`Selector`] (OR logic).
//!
//! Both are stateful: a child that reports `Running` stays active and is
//! resumed on the next tick instead of re-evaluating its left siblings.

use crate::{Behavior, Status};

/// Executes child behaviors in order until one fails.
///
/// # Semantics
///
/// A `Sequence` keeps exactly one child active at a time:
/// - The first `execute` enters the first child
/// - If the active child returns `Running`, the sequence returns `Running`
///   and no later child is touched this tick
/// - If it returns `Success`, the next child is entered and executed in the
///   same tick; after the last child the sequence returns `Success`
/// - If it returns `Failure`, the sequence **stops immediately** and returns
///   `Failure`
///
/// Once finished, the sequence keeps reporting its outcome without running
/// any child until it is re-entered or [`reset`](Behavior::reset).
pub struct Sequence<C> {
    name: String,
    children: Vec<Box<dyn Behavior<C>>>,
    cursor: Cursor,
}

impl<C> Sequence<C> {
    /// Creates an empty sequence.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
            cursor: Cursor::default(),
        }
    }

    /// Creates a sequence with the given child behaviors.
    pub fn with_children(name: impl Into<String>, children: Vec<Box<dyn Behavior<C>>>) -> Self {
        Self {
            name: name.into(),
            children,
            cursor: Cursor::default(),
        }
    }

    /// Appends a child to the end of the sequence.
    pub fn add_child(&mut self, child: Box<dyn Behavior<C>>) {
        self.children.push(child);
    }

    /// Builder-style variant of [`add_child`](Self::add_child).
    pub fn with_child(mut self, child: Box<dyn Behavior<C>>) -> Self {
        self.add_child(child);
        self
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Name of the child currently holding control, if any.
    pub fn active_child_name(&self) -> Option<&str> {
        self.cursor.active.map(|index| self.children[index].name())
    }

    /// Outcome of the last completed run, if the sequence has finished.
    pub fn outcome(&self) -> Option<Status> {
        self.cursor.outcome
    }
}

impl<C> Behavior<C> for Sequence<C> {
    fn name(&self) -> &str {
        &self.name
    }

    fn enter(&mut self, _ctx: &mut C) {
        self.cursor = Cursor::default();
    }

    fn execute(&mut self, ctx: &mut C) -> Status {
        // Success moves on to the next child, Failure short-circuits
        self.cursor.drive(&mut self.children, ctx, Status::Success)
    }

    fn reset(&mut self) {
        self.cursor = Cursor::default();
        for child in &mut self.children {
            child.reset();
        }
    }
}

/// Executes child behaviors in order until one succeeds.
///
/// # Semantics
///
/// The mirror image of [`Sequence`]:
/// - `Running` from the active child is propagated
/// - `Failure` enters and executes the next alternative in the same tick;
///   after the last child the selector returns `Failure`
/// - `Success` **stops immediately** and returns `Success`
pub struct Selector<C> {
    name: String,
    children: Vec<Box<dyn Behavior<C>>>,
    cursor: Cursor,
}

impl<C> Selector<C> {
    /// Creates an empty selector.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
            cursor: Cursor::default(),
        }
    }

    /// Creates a selector with the given child behaviors.
    pub fn with_children(name: impl Into<String>, children: Vec<Box<dyn Behavior<C>>>) -> Self {
        Self {
            name: name.into(),
            children,
            cursor: Cursor::default(),
        }
    }

    /// Appends an alternative to the end of the selector.
    pub fn add_child(&mut self, child: Box<dyn Behavior<C>>) {
        self.children.push(child);
    }

    pub fn with_child(mut self, child: Box<dyn Behavior<C>>) -> Self {
        self.add_child(child);
        self
    }

    pub fn active_child_name(&self) -> Option<&str> {
        self.cursor.active.map(|index| self.children[index].name())
    }
}

impl<C> Behavior<C> for Selector<C> {
    fn name(&self) -> &str {
        &self.name
    }

    fn enter(&mut self, _ctx: &mut C) {
        self.cursor = Cursor::default();
    }

    fn execute(&mut self, ctx: &mut C) -> Status {
        // Failure moves on to the next alternative, Success short-circuits
        self.cursor.drive(&mut self.children, ctx, Status::Failure)
    }

    fn reset(&mut self) {
        self.cursor = Cursor::default();
        for child in &mut self.children {
            child.reset();
        }
    }
}

/// Progress through a list of children shared by both composites.
#[derive(Debug, Default, Clone, Copy)]
struct Cursor {
    /// Index of the child holding control.
    active: Option<usize>,
    /// Outcome of a finished run; children are not touched while set.
    outcome: Option<Status>,
}

impl Cursor {
    /// Runs the active child and advances while it reports `advance_on`.
    ///
    /// Running out of children yields `advance_on` itself (all children
    /// succeeded for a sequence, all alternatives failed for a selector).
    fn drive<C>(
        &mut self,
        children: &mut [Box<dyn Behavior<C>>],
        ctx: &mut C,
        advance_on: Status,
    ) -> Status {
        if let Some(outcome) = self.outcome {
            return outcome;
        }

        let mut index = match self.active {
            Some(index) => index,
            None => {
                let Some(first) = children.first_mut() else {
                    return self.finish(advance_on);
                };
                first.enter(ctx);
                self.active = Some(0);
                0
            }
        };

        loop {
            let status = children[index].execute(ctx);
            if status.is_running() {
                return Status::Running;
            }
            if status != advance_on {
                return self.finish(status);
            }

            index += 1;
            match children.get_mut(index) {
                Some(next) => {
                    next.enter(ctx);
                    self.active = Some(index);
                }
                None => return self.finish(advance_on),
            }
        }
    }

    fn finish(&mut self, outcome: Status) -> Status {
        self.active = None;
        self.outcome = Some(outcome);
        outcome
    }
}
