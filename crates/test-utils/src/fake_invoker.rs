use std::collections::HashSet;
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use fork_cmd::engine::ReportSink;
use fork_cmd::errors::{ExecutionError, Result};
use fork_cmd::exec::backend::{InvokeFuture, Invoker};
use fork_cmd::types::{ExecutionResult, TaskId};

/// Shared observations made by a [`FakeInvoker`].
#[derive(Debug, Default)]
pub struct InvocationLog {
    invoked: Mutex<Vec<TaskId>>,
    in_flight: AtomicUsize,
    peak: AtomicUsize,
}

impl InvocationLog {
    /// Task ids in the order invocations started.
    pub fn invoked(&self) -> Vec<TaskId> {
        self.invoked.lock().unwrap().clone()
    }

    /// Highest number of invocations observed running at once.
    pub fn peak_in_flight(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }
}

/// A fake invoker that:
/// - records which task ids were "run"
/// - tracks how many invocations overlap
/// - fails ids marked with [`FakeInvoker::failing_on`] right away
/// - sleeps for `delay` on every other id, then succeeds with stdout
///   `"task <id>\n"`
#[derive(Debug)]
pub struct FakeInvoker {
    log: Arc<InvocationLog>,
    delay: Duration,
    failing: HashSet<usize>,
}

impl FakeInvoker {
    pub fn new(log: Arc<InvocationLog>) -> Self {
        Self {
            log,
            delay: Duration::ZERO,
            failing: HashSet::new(),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn failing_on(mut self, task: usize) -> Self {
        self.failing.insert(task);
        self
    }
}

impl Invoker for FakeInvoker {
    fn invoke(&self, task: TaskId) -> InvokeFuture<'_> {
        Box::pin(async move {
            self.log.invoked.lock().unwrap().push(task);

            if self.failing.contains(&task.index()) {
                return Err(ExecutionError::Spawn {
                    task,
                    program: "fake".to_string(),
                    source: io::Error::new(io::ErrorKind::NotFound, "fake failure"),
                });
            }

            let now = self.log.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.log.peak.fetch_max(now, Ordering::SeqCst);

            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            } else {
                tokio::task::yield_now().await;
            }

            self.log.in_flight.fetch_sub(1, Ordering::SeqCst);

            Ok(ExecutionResult::new(
                task,
                format!("task {task}\n").into_bytes(),
                Vec::new(),
            ))
        })
    }
}

/// Reporter that keeps every result in memory.
#[derive(Debug, Clone, Default)]
pub struct CollectingReporter {
    results: Arc<Mutex<Vec<ExecutionResult>>>,
}

impl CollectingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn results(&self) -> Vec<ExecutionResult> {
        self.results.lock().unwrap().clone()
    }
}

impl ReportSink for CollectingReporter {
    fn report(&self, result: &ExecutionResult) -> Result<()> {
        self.results.lock().unwrap().push(result.clone());
        Ok(())
    }
}
