// src/config/mod.rs

//! Resolution of the execution request.
//!
//! Values come from (highest priority first) the command line, an optional
//! TOML file, and built-in defaults. [`validate`] turns the merged
//! [`RawForkConfig`] into a checked [`ExecutionRequest`].

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_from_path, resolve_request};
pub use model::{CommandLine, DEFAULT_LIMIT, DEFAULT_TOTAL, ExecutionRequest, RawForkConfig};
