// src/errors.rs

//! Crate-wide error types.
//!
//! Two classes of failure matter to the caller:
//! - configuration problems (nothing was run, exit code 2)
//! - a failed invocation (fail-fast, exit code 1)

use std::process::ExitStatus;

use thiserror::Error;

use crate::types::TaskId;

#[derive(Error, Debug)]
pub enum ForkError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    Execution(#[from] ExecutionError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ForkError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            ForkError::ConfigError(_) | ForkError::TomlError(_) => 2,
            _ => 1,
        }
    }

    pub fn is_config(&self) -> bool {
        self.exit_code() == 2
    }
}

/// Failure of a single invocation.
#[derive(Error, Debug)]
pub enum ExecutionError {
    #[error("task {task}: failed to start `{program}`: {source}")]
    Spawn {
        task: TaskId,
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("task {task}: failed while collecting output: {source}")]
    Wait {
        task: TaskId,
        #[source]
        source: std::io::Error,
    },

    #[error("task {task}: {status}")]
    Exited { task: TaskId, status: ExitStatus },
}

pub type Result<T> = std::result::Result<T, ForkError>;
