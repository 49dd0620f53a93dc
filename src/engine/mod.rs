// src/engine/mod.rs

//! Bounded-concurrency execution engine.
//!
//! - [`source`]: the shared [`TaskSource`] handing out task ids exactly once.
//! - [`pool`]: the fixed-size [`WorkerPool`] draining the source.
//! - [`report`]: where successful results are written.

pub mod pool;
pub mod report;
pub mod source;

pub use pool::{PoolSummary, WorkerPool};
pub use report::{ReportSink, StdoutReporter};
pub use source::TaskSource;
