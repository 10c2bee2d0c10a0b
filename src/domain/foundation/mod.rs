//! Shared domain primitives.
//!
//! Value objects, strongly-typed identifiers, the fixed category
//! enumeration, and the domain error types.

mod category;
mod errors;
mod ids;
mod percentage;
mod timestamp;

pub use category::Category;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{AnswerId, PatternId, QuestionId, SubjectId};
pub use percentage::Percentage;
pub use timestamp::Timestamp;
