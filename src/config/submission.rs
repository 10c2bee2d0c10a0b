//! Submission pipeline configuration.

use std::time::Duration;

use serde::Deserialize;

use super::error::ValidationError;

const DEFAULT_WRITE_TIMEOUT_MS: u64 = 10_000;
const DEFAULT_WRITE_RETRIES: u32 = 1;
const MAX_WRITE_RETRIES: u32 = 5;

/// Bounds for the per-question writes of one step submission.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmissionConfig {
    /// Upper bound on a single answer write, in milliseconds.
    #[serde(default = "default_write_timeout_ms")]
    pub write_timeout_ms: u64,

    /// Retries after a timed-out or failed write before the step fails.
    #[serde(default = "default_write_retries")]
    pub write_retries: u32,
}

fn default_write_timeout_ms() -> u64 {
    DEFAULT_WRITE_TIMEOUT_MS
}

fn default_write_retries() -> u32 {
    DEFAULT_WRITE_RETRIES
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            write_timeout_ms: DEFAULT_WRITE_TIMEOUT_MS,
            write_retries: DEFAULT_WRITE_RETRIES,
        }
    }
}

impl SubmissionConfig {
    pub fn write_timeout(&self) -> Duration {
        Duration::from_millis(self.write_timeout_ms)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.write_timeout_ms == 0 {
            return Err(ValidationError::InvalidWriteTimeout);
        }
        if self.write_retries > MAX_WRITE_RETRIES {
            return Err(ValidationError::TooManyRetries);
        }
        Ok(())
    }
}
