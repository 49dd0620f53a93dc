// src/types.rs

use std::fmt;

/// Index of one requested execution, in `[0, total)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(usize);

impl TaskId {
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Captured output of one successful invocation.
///
/// Created by a worker right after the child exits and handed straight to
/// the reporter; nothing keeps it around afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    pub task: TaskId,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl ExecutionResult {
    pub fn new(task: TaskId, stdout: Vec<u8>, stderr: Vec<u8>) -> Self {
        Self {
            task,
            stdout,
            stderr,
        }
    }

    pub fn stdout_lossy(&self) -> String {
        String::from_utf8_lossy(&self.stdout).into_owned()
    }

    pub fn stderr_lossy(&self) -> String {
        String::from_utf8_lossy(&self.stderr).into_owned()
    }

    /// Text block printed for this result:
    ///
    /// ```text
    /// out <id>:
    /// <stdout>
    /// err:
    /// <stderr>
    /// ```
    pub fn render(&self) -> String {
        format!(
            "out {}:\n{}\nerr:\n{}\n",
            self.task,
            self.stdout_lossy(),
            self.stderr_lossy()
        )
    }
}
