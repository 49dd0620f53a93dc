// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{CommandFactory, Parser, ValueEnum};

use crate::config::RawForkConfig;

const AFTER_HELP: &str = "\
Examples:
  $ fork -c \"curl google.com\" -t 50 -l 10
  $ fork -c /tmp/test.sh -t 50 -l 10

Both execute the given script/command 50 times, never running more than 10
at the same time.";

/// Command-line arguments for `fork`.
#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = "fork",
    version,
    about = "Run a command or script a given number of times with bounded concurrency.",
    long_about = None,
    after_help = AFTER_HELP
)]
pub struct CliArgs {
    /// Script path or command to execute. Split on whitespace; no shell quoting.
    #[arg(short = 'c', long, visible_alias = "script", value_name = "CMD")]
    pub command: Option<String>,

    /// Total number of executions [default: 2].
    #[arg(short = 't', long, value_name = "N")]
    pub total: Option<usize>,

    /// Maximum number of executions running at the same time [default: 10].
    #[arg(short = 'l', long, value_name = "L")]
    pub limit: Option<usize>,

    /// Optional TOML file providing `command`, `total` and/or `limit`.
    ///
    /// Flags given on the command line take precedence.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `FORK_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Resolve and print the request, but don't execute anything.
    #[arg(long)]
    pub dry_run: bool,
}

impl CliArgs {
    /// Values given explicitly on the command line.
    pub fn overrides(&self) -> RawForkConfig {
        RawForkConfig {
            command: self.command.clone(),
            total: self.total,
            limit: self.limit,
        }
    }
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}

/// One-line usage string, printed alongside configuration errors.
pub fn usage() -> String {
    CliArgs::command().render_usage().to_string()
}
