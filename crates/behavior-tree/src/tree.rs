//! Tree driver.
//!
//! [`BehaviorTree`] owns the root node and is the only thing the frame loop
//! talks to: one [`update`](BehaviorTree::update) per tick.

use crate::{Behavior, Status};

/// What the driver does once the root has finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Completion {
    /// Keep reporting the final status; the root is never run again.
    #[default]
    Hold,
    /// Reset and re-enter the root on the next update.
    Restart,
}

/// Drives a root behavior once per tick.
pub struct BehaviorTree<C, B = Box<dyn Behavior<C>>>
where
    B: Behavior<C>,
{
    root: B,
    completion: Completion,
    entered: bool,
    last: Option<Status>,
    ticks: u64,
    runs: u64,
    _context: std::marker::PhantomData<fn(&mut C)>,
}

impl<C, B> BehaviorTree<C, B>
where
    B: Behavior<C>,
{
    /// Wraps `root` with the default [`Completion::Hold`] policy.
    pub fn new(root: B) -> Self {
        Self {
            root,
            completion: Completion::Hold,
            entered: false,
            last: None,
            ticks: 0,
            runs: 0,
            _context: std::marker::PhantomData,
        }
    }

    pub fn with_completion(mut self, completion: Completion) -> Self {
        self.completion = completion;
        self
    }

    /// Evaluates the tree for one tick.
    ///
    /// The root is entered on the first update (and again after a restart).
    /// Under [`Completion::Hold`] a finished root is not executed again and
    /// the stored outcome is returned.
    pub fn update(&mut self, ctx: &mut C) -> Status {
        if let Some(last) = self.last.filter(|status| status.is_done()) {
            match self.completion {
                Completion::Hold => return last,
                Completion::Restart => {
                    self.root.reset();
                    self.entered = false;
                }
            }
        }

        if !self.entered {
            self.root.enter(ctx);
            self.entered = true;
            self.runs += 1;
        }

        let status = self.root.execute(ctx);
        self.ticks += 1;
        self.last = Some(status);
        status
    }

    /// Returns the driver to its never-run state.
    pub fn reset(&mut self) {
        self.root.reset();
        self.entered = false;
        self.last = None;
        self.ticks = 0;
        self.runs = 0;
    }

    pub fn root(&self) -> &B {
        &self.root
    }

    pub fn completion(&self) -> Completion {
        self.completion
    }

    /// Status returned by the most recent update.
    pub fn last_status(&self) -> Option<Status> {
        self.last
    }

    /// Number of updates that executed the root.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Number of times the root has been entered.
    pub fn runs(&self) -> u64 {
        self.runs
    }

    /// `true` when the root finished and will not run again.
    pub fn is_finished(&self) -> bool {
        self.completion == Completion::Hold && self.last.is_some_and(Status::is_done)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Sequence;

    #[derive(Default)]
    struct Counter {
        enters: u32,
        executes: u32,
    }

    /// Succeeds on its second execution.
    struct TwoStep {
        seen: u32,
    }

    impl Behavior<Counter> for TwoStep {
        fn name(&self) -> &str {
            "two step"
        }

        fn enter(&mut self, ctx: &mut Counter) {
            self.seen = 0;
            ctx.enters += 1;
        }

        fn execute(&mut self, ctx: &mut Counter) -> Status {
            ctx.executes += 1;
            self.seen += 1;
            if self.seen >= 2 {
                Status::Success
            } else {
                Status::Running
            }
        }
    }

    fn tree() -> Sequence<Counter> {
        Sequence::new("root").with_child(Box::new(TwoStep { seen: 0 }))
    }

    #[test]
    fn hold_keeps_final_status() {
        let mut bt = BehaviorTree::new(tree());
        let mut ctx = Counter::default();

        assert_eq!(bt.update(&mut ctx), Status::Running);
        assert_eq!(bt.update(&mut ctx), Status::Success);
        assert!(bt.is_finished());

        for _ in 0..5 {
            assert_eq!(bt.update(&mut ctx), Status::Success);
        }
        assert_eq!(ctx.executes, 2);
        assert_eq!(bt.ticks(), 2);
        assert_eq!(bt.runs(), 1);
    }

    #[test]
    fn restart_reenters_root() {
        let mut bt = BehaviorTree::new(tree()).with_completion(Completion::Restart);
        let mut ctx = Counter::default();

        for _ in 0..4 {
            bt.update(&mut ctx);
        }

        assert_eq!(ctx.enters, 2);
        assert_eq!(ctx.executes, 4);
        assert_eq!(bt.runs(), 2);
        assert!(!bt.is_finished());
    }

    #[test]
    fn reset_forgets_progress() {
        let mut bt = BehaviorTree::new(tree());
        let mut ctx = Counter::default();
        bt.update(&mut ctx);
        bt.update(&mut ctx);

        bt.reset();
        assert_eq!(bt.last_status(), None);
        assert_eq!(bt.update(&mut ctx), Status::Running);
        assert_eq!(ctx.enters, 2);
    }
}
