//! Answer model - typed values, state merging, equality, and formatting.

mod canonical;
mod format;
mod merge;
mod record;
mod value;

pub use canonical::canonically_equal;
pub use format::{export_assessment, format_answer, ExportSection, FormattedAnswer};
pub use merge::{build_initial_values, ValueMap};
pub use record::{Answer, AnswerPatch, NewAnswer};
pub use value::AnswerValue;
