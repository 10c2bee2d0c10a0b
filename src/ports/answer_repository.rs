//! Answer Repository Port - stored answers for a subject.

use async_trait::async_trait;

use crate::domain::answer::{Answer, AnswerPatch, NewAnswer};
use crate::domain::foundation::{AnswerId, SubjectId};

use super::PersistenceError;

/// Port for reading and writing stored answers.
///
/// The backend guarantees at most one current answer per
/// `(subject, question)`; `update` supersedes in place, `create` must not
/// be used when a record already exists.
#[async_trait]
pub trait AnswerRepository: Send + Sync {
    /// Fetches all current answers for a subject, optionally narrowed to
    /// one survey context.
    async fn fetch_answers(
        &self,
        subject_id: SubjectId,
        survey_context: Option<&str>,
    ) -> Result<Vec<Answer>, PersistenceError>;

    /// Creates the first answer to a question.
    async fn create(&self, payload: NewAnswer) -> Result<Answer, PersistenceError>;

    /// Supersedes an existing answer by id.
    async fn update(&self, id: AnswerId, patch: AnswerPatch) -> Result<Answer, PersistenceError>;
}
