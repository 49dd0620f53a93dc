// src/exec/mod.rs

//! Process execution layer.
//!
//! - [`task_runner`] runs one invocation with `tokio::process::Command` and
//!   buffers its stdout/stderr.
//! - [`backend`] provides the `Invoker` trait the worker pool talks to, and
//!   the production `ProcessInvoker`. Tests swap in a fake implementation.

pub mod backend;
pub mod task_runner;

pub use backend::{Invoker, ProcessInvoker};
pub use task_runner::run_invocation;
