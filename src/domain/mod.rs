//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, enums, errors)
//! - `question` - Questionnaire item model and grouping
//! - `answer` - Typed answer values, merging, equality, and formatting
//! - `validation` - Per-question-type validation schema
//! - `scoring` - Maturity scoring over the pattern catalog
//! - `wizard` - Durable multi-step wizard state

pub mod answer;
pub mod foundation;
pub mod question;
pub mod scoring;
pub mod validation;
pub mod wizard;
