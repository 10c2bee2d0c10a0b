//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Field-scoped errors raised while checking a submitted answer value.
///
/// These never cross the persistence boundary; they block a step from
/// advancing and are shown inline next to the offending field.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("This field is required")]
    Required,

    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Must be a number")]
    NotANumber,

    #[error("Must be between {min} and {max}")]
    OutOfRange { min: i64, max: i64 },

    #[error("Must not exceed {max} characters")]
    TooLong { max: usize },

    #[error("Ranking must include every option exactly once")]
    NotAPermutation,

    #[error("Expected {expected}, got {actual}")]
    WrongShape {
        expected: &'static str,
        actual: &'static str,
    },
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,

    // Not found errors
    QuestionNotFound,
    AnswerNotFound,

    // State errors
    StepOutOfBounds,
    AssessmentAlreadyComplete,

    // Infrastructure errors
    PersistenceFailed,
    WriteTimedOut,
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::QuestionNotFound => "QUESTION_NOT_FOUND",
            ErrorCode::AnswerNotFound => "ANSWER_NOT_FOUND",
            ErrorCode::StepOutOfBounds => "STEP_OUT_OF_BOUNDS",
            ErrorCode::AssessmentAlreadyComplete => "ASSESSMENT_ALREADY_COMPLETE",
            ErrorCode::PersistenceFailed => "PERSISTENCE_FAILED",
            ErrorCode::WriteTimedOut => "WRITE_TIMED_OUT",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}
