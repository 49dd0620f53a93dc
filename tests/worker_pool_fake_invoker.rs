// tests/worker_pool_fake_invoker.rs

use std::collections::HashSet;
use std::error::Error;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::{Duration, Instant};

use fork_cmd::engine::WorkerPool;
use fork_cmd::errors::{ExecutionError, ForkError};
use fork_cmd::types::TaskId;
use fork_test_utils::fake_invoker::{CollectingReporter, FakeInvoker, InvocationLog};
use fork_test_utils::{init_tracing, with_timeout};

type TestResult = Result<(), Box<dyn Error>>;

fn limit(n: usize) -> NonZeroUsize {
    NonZeroUsize::new(n).unwrap()
}

fn ids(range: std::ops::Range<usize>) -> HashSet<TaskId> {
    range.map(TaskId::new).collect()
}

#[tokio::test]
async fn runs_every_task_exactly_once() -> TestResult {
    init_tracing();

    let log = Arc::new(InvocationLog::default());
    let reporter = CollectingReporter::new();
    let pool = WorkerPool::new(limit(3), FakeInvoker::new(log.clone()), reporter.clone());

    let summary = with_timeout(pool.run(20)).await?;

    assert_eq!(summary.executed(), 20);
    assert_eq!(summary.per_worker.len(), 3);

    let invoked = log.invoked();
    assert_eq!(invoked.len(), 20);
    assert_eq!(invoked.iter().copied().collect::<HashSet<_>>(), ids(0..20));

    let reported: HashSet<_> = reporter.results().iter().map(|r| r.task).collect();
    assert_eq!(reported, ids(0..20));

    Ok(())
}

#[tokio::test]
async fn zero_total_runs_nothing() -> TestResult {
    init_tracing();

    let log = Arc::new(InvocationLog::default());
    let reporter = CollectingReporter::new();
    let pool = WorkerPool::new(limit(4), FakeInvoker::new(log.clone()), reporter.clone());

    let summary = with_timeout(pool.run(0)).await?;

    assert_eq!(summary.executed(), 0);
    assert_eq!(summary.per_worker, vec![0; 4]);
    assert!(log.invoked().is_empty());
    assert!(reporter.results().is_empty());

    Ok(())
}

#[tokio::test]
async fn extra_workers_do_nothing_when_limit_exceeds_total() -> TestResult {
    init_tracing();

    let log = Arc::new(InvocationLog::default());
    let invoker = FakeInvoker::new(log.clone()).with_delay(Duration::from_millis(50));
    let pool = WorkerPool::new(limit(8), invoker, CollectingReporter::new());

    let summary = with_timeout(pool.run(3)).await?;

    assert_eq!(summary.per_worker.len(), 8);
    assert_eq!(summary.executed(), 3);
    // Each invocation blocks long enough that no worker can take two.
    assert_eq!(summary.active_workers(), 3);
    assert!(summary.per_worker.iter().all(|&n| n <= 1));

    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn never_exceeds_the_concurrency_limit() -> TestResult {
    init_tracing();

    for (total, lim) in [(10, 1), (25, 3), (7, 7), (4, 16)] {
        let log = Arc::new(InvocationLog::default());
        let invoker = FakeInvoker::new(log.clone()).with_delay(Duration::from_millis(5));
        let pool = WorkerPool::new(limit(lim), invoker, CollectingReporter::new());

        let summary = with_timeout(pool.run(total)).await?;

        assert_eq!(summary.executed(), total);
        assert!(
            log.peak_in_flight() <= lim,
            "peak {} exceeded limit {lim} (total {total})",
            log.peak_in_flight()
        );
    }

    Ok(())
}

#[tokio::test]
async fn limit_is_reached_with_slow_tasks() -> TestResult {
    init_tracing();

    let log = Arc::new(InvocationLog::default());
    let invoker = FakeInvoker::new(log.clone()).with_delay(Duration::from_millis(50));
    let pool = WorkerPool::new(limit(4), invoker, CollectingReporter::new());

    with_timeout(pool.run(12)).await?;

    assert_eq!(log.peak_in_flight(), 4);

    Ok(())
}

#[tokio::test]
async fn first_failure_aborts_the_run() -> TestResult {
    init_tracing();

    let log = Arc::new(InvocationLog::default());
    let reporter = CollectingReporter::new();
    let invoker = FakeInvoker::new(log.clone()).failing_on(0);
    let pool = WorkerPool::new(limit(1), invoker, reporter.clone());

    let result = with_timeout(pool.run(5)).await;

    match result {
        Err(ForkError::Execution(ExecutionError::Spawn { task, .. })) => {
            assert_eq!(task, TaskId::new(0));
        }
        Err(e) => panic!("Expected spawn failure, got: {:?}", e),
        Ok(summary) => panic!("Expected error, got Ok({:?})", summary),
    }

    // Single worker: nothing after the failing task was attempted.
    assert_eq!(log.invoked(), vec![TaskId::new(0)]);
    assert!(reporter.results().is_empty());

    Ok(())
}

#[tokio::test]
async fn failure_exit_code_is_one() {
    init_tracing();

    let log = Arc::new(InvocationLog::default());
    let invoker = FakeInvoker::new(log).failing_on(2);
    let pool = WorkerPool::new(limit(2), invoker, CollectingReporter::new());

    let err = with_timeout(pool.run(6))
        .await
        .expect_err("run should fail");
    assert_eq!(err.exit_code(), 1);
    assert!(!err.is_config());
}

#[tokio::test]
async fn failure_does_not_wait_for_running_siblings() {
    init_tracing();

    // Task 0 would sleep far past the test timeout; task 1 fails at once.
    let log = Arc::new(InvocationLog::default());
    let invoker = FakeInvoker::new(log.clone())
        .with_delay(Duration::from_secs(60))
        .failing_on(1);
    let pool = WorkerPool::new(limit(2), invoker, CollectingReporter::new());

    let started = Instant::now();
    let err = with_timeout(pool.run(4))
        .await
        .expect_err("run should fail");

    assert!(
        started.elapsed() < Duration::from_secs(2),
        "run took {:?}",
        started.elapsed()
    );
    match err {
        ForkError::Execution(ExecutionError::Spawn { task, .. }) => {
            assert_eq!(task, TaskId::new(1));
        }
        e => panic!("Expected spawn failure, got: {:?}", e),
    }
    assert_eq!(log.invoked().len(), 2);
}

#[tokio::test]
async fn repeated_runs_produce_the_same_outputs() -> TestResult {
    init_tracing();

    let mut outputs = Vec::new();
    for _ in 0..2 {
        let reporter = CollectingReporter::new();
        let invoker = FakeInvoker::new(Arc::new(InvocationLog::default()));
        let pool = WorkerPool::new(limit(3), invoker, reporter.clone());
        with_timeout(pool.run(9)).await?;

        let mut rendered: Vec<String> = reporter.results().iter().map(|r| r.render()).collect();
        rendered.sort();
        outputs.push(rendered);
    }

    assert_eq!(outputs[0], outputs[1]);
    assert_eq!(outputs[0].len(), 9);

    Ok(())
}
