// src/lib.rs

pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod types;

use tracing::debug;

use crate::cli::CliArgs;
use crate::config::{ExecutionRequest, resolve_request};
use crate::engine::{PoolSummary, StdoutReporter, WorkerPool};
use crate::errors::Result;
use crate::exec::ProcessInvoker;

/// High-level entry point used by `main.rs`.
///
/// Resolves the execution request, then runs the command `total` times
/// through a pool of `limit` workers, reporting to stdout.
pub async fn run(args: CliArgs) -> Result<PoolSummary> {
    let request = resolve_request(&args)?;

    if args.dry_run {
        print_dry_run(&request);
        return Ok(PoolSummary::default());
    }

    execute(&request).await
}

/// Run a validated request with the production invoker and reporter.
pub async fn execute(request: &ExecutionRequest) -> Result<PoolSummary> {
    let invoker = ProcessInvoker::new(request.command.clone());
    let pool = WorkerPool::new(request.limit, invoker, StdoutReporter);
    pool.run(request.total).await
}

fn print_dry_run(request: &ExecutionRequest) {
    println!("fork dry-run");
    println!("  program: {}", request.command.program);
    if !request.command.args.is_empty() {
        println!("  args: {:?}", request.command.args);
    }
    println!("  total: {}", request.total);
    println!("  limit: {}", request.limit);

    debug!("dry-run complete (no execution)");
}
