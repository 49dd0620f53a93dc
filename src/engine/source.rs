// src/engine/source.rs

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::types::TaskId;

/// Finite source of the task ids `0..total`, shared by all workers.
///
/// Every id is handed out to exactly one caller. Once the last one is taken,
/// every further call returns `None` immediately, so a worker can never
/// wait on an exhausted source.
#[derive(Debug)]
pub struct TaskSource {
    next: AtomicUsize,
    total: usize,
}

impl TaskSource {
    pub fn new(total: usize) -> Self {
        Self {
            next: AtomicUsize::new(0),
            total,
        }
    }

    /// Take the next task id, or `None` once all of them were handed out.
    pub fn next(&self) -> Option<TaskId> {
        // Saturates at `total`; calls on an exhausted source don't touch it.
        self.next
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| {
                (n < self.total).then_some(n + 1)
            })
            .ok()
            .map(TaskId::new)
    }

    /// Ids not yet handed out.
    pub fn remaining(&self) -> usize {
        self.total - self.next.load(Ordering::Acquire).min(self.total)
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }
}
