//! Shared failure type for persistence-facing ports.

use thiserror::Error;

/// A fetch or write against the persistence collaborator failed.
///
/// Surfaced at most once per wizard step; the wizard stays on the current
/// step and the step may be retried by resubmitting.
#[derive(Debug, Clone, Error)]
pub enum PersistenceError {
    #[error("Backend request failed: {0}")]
    Backend(String),

    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Write timed out after {attempts} attempt(s)")]
    Timeout { attempts: u32 },

    #[error("Stored value could not be decoded: {0}")]
    Corrupted(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_reports_attempt_count() {
        let err = PersistenceError::Timeout { attempts: 2 };
        assert_eq!(err.to_string(), "Write timed out after 2 attempt(s)");
    }
}
