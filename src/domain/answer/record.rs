//! Stored answer records and write payloads.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AnswerId, QuestionId, SubjectId, Timestamp};

use super::AnswerValue;

/// One stored answer. Exactly one current record exists per
/// `(subject_id, question_id)`; a later write supersedes, never appends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    pub id: AnswerId,
    pub subject_id: SubjectId,
    /// Distinguishes answer sets when a subject takes several surveys.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub survey_context: Option<String>,
    pub question_id: QuestionId,
    pub value: AnswerValue,
    pub updated_at: Timestamp,
}

/// Payload for creating a first answer to a question.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAnswer {
    pub subject_id: SubjectId,
    pub survey_context: Option<String>,
    pub question_id: QuestionId,
    pub value: AnswerValue,
}

/// Payload for superseding an existing answer.
#[derive(Debug, Clone, PartialEq)]
pub struct AnswerPatch {
    pub value: AnswerValue,
}
