//! Per-batch pending counter

use std::sync::atomic::{AtomicUsize, Ordering};

/// Countdown of items that have not signaled yet.
///
/// Owned by exactly one batch. Reaching zero is the terminal condition.
#[derive(Debug)]
pub struct PendingCounter {
    remaining: AtomicUsize,
}

impl PendingCounter {
    pub fn new(count: usize) -> Self {
        Self {
            remaining: AtomicUsize::new(count),
        }
    }

    /// Items still outstanding
    pub fn remaining(&self) -> usize {
        self.remaining.load(Ordering::Acquire)
    }

    /// Record one completion and return how many remain.
    ///
    /// `Some(0)` is returned to exactly one caller. An exhausted counter is
    /// left at zero and yields `None`.
    pub fn complete_one(&self) -> Option<usize> {
        self.remaining
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| n.checked_sub(1))
            .ok()
            .map(|previous| previous - 1)
    }
}
