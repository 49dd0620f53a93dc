// src/exec/backend.rs

//! Pluggable invocation backend.

use std::future::Future;
use std::pin::Pin;

use crate::config::CommandLine;
use crate::errors::ExecutionError;
use crate::types::{ExecutionResult, TaskId};

use super::task_runner::run_invocation;

/// Boxed future returned by [`Invoker::invoke`].
pub type InvokeFuture<'a> =
    Pin<Box<dyn Future<Output = std::result::Result<ExecutionResult, ExecutionError>> + Send + 'a>>;

/// Trait abstracting how a single task is executed.
///
/// Production code uses [`ProcessInvoker`]; tests can provide their own
/// implementation that doesn't spawn real processes.
pub trait Invoker: Send + Sync + 'static {
    /// Run the configured command once on behalf of `task`.
    fn invoke(&self, task: TaskId) -> InvokeFuture<'_>;
}

/// Spawns the configured command as a child process per invocation.
#[derive(Debug, Clone)]
pub struct ProcessInvoker {
    command: CommandLine,
}

impl ProcessInvoker {
    pub fn new(command: CommandLine) -> Self {
        Self { command }
    }

    pub fn command(&self) -> &CommandLine {
        &self.command
    }
}

impl Invoker for ProcessInvoker {
    fn invoke(&self, task: TaskId) -> InvokeFuture<'_> {
        Box::pin(run_invocation(&self.command, task))
    }
}
