// src/engine/report.rs

use std::io::Write;

use crate::errors::Result;
use crate::types::ExecutionResult;

/// Destination for successful execution results.
pub trait ReportSink: Send + Sync + 'static {
    fn report(&self, result: &ExecutionResult) -> Result<()>;
}

/// Prints each result to stdout as one contiguous write.
///
/// Reports from different workers may interleave with each other in any
/// order, but never within a single block.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutReporter;

impl ReportSink for StdoutReporter {
    fn report(&self, result: &ExecutionResult) -> Result<()> {
        let block = result.render();
        let mut out = std::io::stdout().lock();
        out.write_all(block.as_bytes())?;
        out.flush()?;
        Ok(())
    }
}
