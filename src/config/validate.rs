// src/config/validate.rs

use std::num::NonZeroUsize;

use crate::config::model::{
    CommandLine, DEFAULT_LIMIT, DEFAULT_TOTAL, ExecutionRequest, RawForkConfig,
};
use crate::errors::{ForkError, Result};

impl TryFrom<RawForkConfig> for ExecutionRequest {
    type Error = ForkError;

    fn try_from(raw: RawForkConfig) -> std::result::Result<Self, Self::Error> {
        let command = validate_command(raw.command.as_deref())?;
        let limit = validate_limit(raw.limit.unwrap_or(DEFAULT_LIMIT))?;

        Ok(ExecutionRequest {
            command,
            total: raw.total.unwrap_or(DEFAULT_TOTAL),
            limit,
        })
    }
}

fn validate_command(raw: Option<&str>) -> Result<CommandLine> {
    let raw = raw.ok_or_else(|| {
        ForkError::ConfigError("no command supplied (use -c <command>)".to_string())
    })?;

    CommandLine::parse(raw).ok_or_else(|| {
        ForkError::ConfigError("command must not be empty".to_string())
    })
}

fn validate_limit(limit: usize) -> Result<NonZeroUsize> {
    NonZeroUsize::new(limit).ok_or_else(|| {
        ForkError::ConfigError("limit must be >= 1 (got 0)".to_string())
    })
}
