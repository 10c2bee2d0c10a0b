//! Validation schema builder - per-question-type answer validation.

mod schema;

pub use schema::{build_validation_schema, ValidationErrors, ValidationSchema};
