// src/exec/task_runner.rs

//! Individual invocation runner.

use std::process::Stdio;

use tokio::process::Command;
use tracing::{debug, error};

use crate::config::CommandLine;
use crate::errors::ExecutionError;
use crate::types::{ExecutionResult, TaskId};

/// Run the command once and capture its full output.
///
/// Both streams are buffered in memory until the child exits; nothing is
/// streamed while it is still running. A non-zero exit or a signal is an
/// error and the captured output is dropped.
///
/// The child is killed if this future is dropped before it completes.
pub async fn run_invocation(
    command: &CommandLine,
    task: TaskId,
) -> Result<ExecutionResult, ExecutionError> {
    debug!(task = %task, cmd = %command, "starting process");

    let mut cmd = Command::new(&command.program);
    cmd.args(&command.args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let child = cmd.spawn().map_err(|source| {
        error!(
            task = %task,
            program = %command.program,
            error = %source,
            "failed to spawn process"
        );
        ExecutionError::Spawn {
            task,
            program: command.program.clone(),
            source,
        }
    })?;

    let output = child
        .wait_with_output()
        .await
        .map_err(|source| ExecutionError::Wait { task, source })?;

    debug!(
        task = %task,
        exit_code = output.status.code().unwrap_or(-1),
        success = output.status.success(),
        stdout_bytes = output.stdout.len(),
        stderr_bytes = output.stderr.len(),
        "process exited"
    );

    if !output.status.success() {
        error!(task = %task, status = %output.status, "process exited unsuccessfully");
        return Err(ExecutionError::Exited {
            task,
            status: output.status,
        });
    }

    Ok(ExecutionResult::new(task, output.stdout, output.stderr))
}
