// src/config/model.rs

use std::fmt;
use std::num::NonZeroUsize;

use serde::Deserialize;

/// Executions performed when `total` is not given.
pub const DEFAULT_TOTAL: usize = 2;

/// Concurrency limit used when `limit` is not given.
pub const DEFAULT_LIMIT: usize = 10;

/// Unvalidated request values, as read from a TOML file or the CLI.
///
/// ```toml
/// command = "curl -s example.com"
/// total = 50
/// limit = 10
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawForkConfig {
    pub command: Option<String>,
    pub total: Option<usize>,
    pub limit: Option<usize>,
}

impl RawForkConfig {
    /// Field-wise merge where values set in `other` win.
    pub fn overlay(self, other: RawForkConfig) -> RawForkConfig {
        RawForkConfig {
            command: other.command.or(self.command),
            total: other.total.or(self.total),
            limit: other.limit.or(self.limit),
        }
    }
}

/// A command split into program and arguments.
///
/// Splitting is on whitespace only; quotes and escapes are not interpreted,
/// so `echo "a b"` runs `echo` with the two arguments `"a` and `b"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandLine {
    /// Returns `None` for an empty or whitespace-only command.
    pub fn parse(raw: &str) -> Option<Self> {
        let mut tokens = raw.split_whitespace().map(str::to_string);
        let program = tokens.next()?;
        Some(Self {
            program,
            args: tokens.collect(),
        })
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Validated request; immutable for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionRequest {
    pub command: CommandLine,
    pub total: usize,
    pub limit: NonZeroUsize,
}
