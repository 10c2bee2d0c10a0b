//! Question model - typed description of one questionnaire item.

mod grouping;
#[allow(clippy::module_inception)]
mod question;

pub use grouping::{group_questions, QuestionGroup, DEFAULT_GROUP_LABEL};
pub use question::{Question, QuestionOption, QuestionType, ScaleBounds};
