// src/config/loader.rs

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::cli::CliArgs;
use crate::config::model::{ExecutionRequest, RawForkConfig};
use crate::errors::{ForkError, Result};

/// Read a TOML request file.
///
/// This only deserializes; defaults and validation are applied when the
/// merged values are converted into an [`ExecutionRequest`].
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawForkConfig> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|e| {
        ForkError::ConfigError(format!("reading config file {}: {e}", path.display()))
    })?;

    let config: RawForkConfig = toml::from_str(&contents)?;

    Ok(config)
}

/// Build the execution request for a CLI invocation.
///
/// CLI flags override values from `--config`, which override defaults.
pub fn resolve_request(args: &CliArgs) -> Result<ExecutionRequest> {
    let from_file = match args.config.as_deref() {
        Some(path) => {
            debug!(path = %path.display(), "loading request file");
            load_from_path(path)?
        }
        None => RawForkConfig::default(),
    };

    let merged = from_file.overlay(args.overrides());
    ExecutionRequest::try_from(merged)
}
