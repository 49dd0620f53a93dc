#![allow(dead_code)]

use fork_cmd::config::{ExecutionRequest, RawForkConfig};

/// Builder for `RawForkConfig` / `ExecutionRequest` to simplify test setup.
#[derive(Debug, Default)]
pub struct RequestBuilder {
    raw: RawForkConfig,
}

impl RequestBuilder {
    pub fn new(command: &str) -> Self {
        Self {
            raw: RawForkConfig {
                command: Some(command.to_string()),
                ..RawForkConfig::default()
            },
        }
    }

    pub fn total(mut self, total: usize) -> Self {
        self.raw.total = Some(total);
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.raw.limit = Some(limit);
        self
    }

    pub fn raw(self) -> RawForkConfig {
        self.raw
    }

    pub fn build(self) -> ExecutionRequest {
        ExecutionRequest::try_from(self.raw).expect("Failed to build valid request from builder")
    }
}
