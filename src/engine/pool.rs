// src/engine/pool.rs

use std::num::NonZeroUsize;
use std::sync::Arc;

use tokio::task::JoinSet;
use tracing::{debug, error, info};

use crate::engine::report::ReportSink;
use crate::engine::source::TaskSource;
use crate::errors::{ForkError, Result};
use crate::exec::Invoker;

/// What a completed pool run did.
///
/// Holds one counter per worker, so it grows with `limit` just like the
/// set of spawned workers does; a `usize` each next to a tokio task.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PoolSummary {
    /// Invocations performed by each worker, indexed by worker number.
    pub per_worker: Vec<usize>,
}

impl PoolSummary {
    /// Total number of completed invocations.
    pub fn executed(&self) -> usize {
        self.per_worker.iter().sum()
    }

    /// Workers that ran at least one invocation.
    pub fn active_workers(&self) -> usize {
        self.per_worker.iter().filter(|&&n| n > 0).count()
    }
}

/// Fixed-size pool of workers sharing one [`TaskSource`].
///
/// Exactly `limit` workers are started for every run, whatever the total.
/// Each one loops: take an id, invoke, report, until the source is empty.
/// Since a worker finishes one invocation before taking the next id, no
/// more than `limit` invocations are ever in flight.
pub struct WorkerPool<I, R> {
    limit: NonZeroUsize,
    invoker: Arc<I>,
    reporter: Arc<R>,
}

impl<I, R> std::fmt::Debug for WorkerPool<I, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkerPool")
            .field("limit", &self.limit)
            .finish_non_exhaustive()
    }
}

impl<I: Invoker, R: ReportSink> WorkerPool<I, R> {
    pub fn new(limit: NonZeroUsize, invoker: I, reporter: R) -> Self {
        Self {
            limit,
            invoker: Arc::new(invoker),
            reporter: Arc::new(reporter),
        }
    }

    /// Execute `total` invocations and wait for every worker to exit.
    ///
    /// Fail-fast: the first failed invocation aborts all other workers (their
    /// children are killed) and is returned as the error once they are gone.
    /// Results already reported stay reported.
    pub async fn run(&self, total: usize) -> Result<PoolSummary> {
        let limit = self.limit.get();
        let source = Arc::new(TaskSource::new(total));

        info!(total, limit, "starting worker pool");

        let mut workers = JoinSet::new();
        for worker in 0..limit {
            let source = Arc::clone(&source);
            let invoker = Arc::clone(&self.invoker);
            let reporter = Arc::clone(&self.reporter);
            workers.spawn(async move {
                let done =
                    worker_loop(worker, &source, invoker.as_ref(), reporter.as_ref()).await?;
                Ok::<_, ForkError>((worker, done))
            });
        }

        let mut summary = PoolSummary {
            per_worker: vec![0; limit],
        };

        while let Some(joined) = workers.join_next().await {
            let outcome = joined.map_err(|e| ForkError::Other(anyhow::Error::new(e)));
            match outcome.and_then(|r| r) {
                Ok((worker, done)) => {
                    summary.per_worker[worker] = done;
                }
                Err(err) => {
                    error!(error = %err, "invocation failed; aborting remaining workers");
                    workers.abort_all();
                    // Aborted workers drop their children, which kills them.
                    while workers.join_next().await.is_some() {}
                    return Err(err);
                }
            }
        }

        info!(executed = summary.executed(), "worker pool finished");
        Ok(summary)
    }
}

/// Body of one worker. Returns how many invocations it completed.
async fn worker_loop<I: Invoker, R: ReportSink>(
    worker: usize,
    source: &TaskSource,
    invoker: &I,
    reporter: &R,
) -> Result<usize> {
    let mut done = 0;

    while let Some(task) = source.next() {
        debug!(worker, task = %task, "worker took task");
        let result = invoker.invoke(task).await?;
        reporter.report(&result)?;
        done += 1;
    }

    debug!(worker, done, "task source exhausted; worker exiting");
    Ok(done)
}
