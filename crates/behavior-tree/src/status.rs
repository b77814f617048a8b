//! Status returned by behavior nodes.

/// The result of executing a behavior node for one tick.
///
/// # Frame-stepped Semantics
///
/// Nodes may span many ticks. A node that still has work to do reports
/// `Running` and is executed again on the next tick; `Success` and
/// `Failure` hand control back to the parent composite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// The behavior needs more ticks to finish.
    Running,

    /// The behavior reached its goal.
    Success,

    /// The behavior could not reach its goal.
    ///
    /// Composites that support fallback (e.g. [`Selector`](crate::Selector))
    /// use this to try the next alternative.
    Failure,
}

impl Status {
    /// Returns `true` if this status is `Running`.
    #[inline]
    pub fn is_running(self) -> bool {
        matches!(self, Status::Running)
    }

    /// Returns `true` if this status is `Success`.
    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    /// Returns `true` if this status is `Failure`.
    #[inline]
    pub fn is_failure(self) -> bool {
        matches!(self, Status::Failure)
    }

    /// Returns `true` once the node has finished, successfully or not.
    #[inline]
    pub fn is_done(self) -> bool {
        !self.is_running()
    }

    /// Swaps `Success` and `Failure`. `Running` is left untouched.
    #[inline]
    pub fn invert(self) -> Self {
        match self {
            Status::Running => Status::Running,
            Status::Success => Status::Failure,
            Status::Failure => Status::Success,
        }
    }
}
