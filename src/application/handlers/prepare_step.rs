//! Prepare Step Handler - assembles one wizard step for rendering.
//!
//! Fetches the step's questions and the subject's stored answers, then
//! hands both to the domain: the merger seeds the value map, the schema
//! compiler produces the validator. Stored answers that reference no
//! question in the current catalog are logged and skipped, never fatal.

use std::collections::BTreeSet;
use std::sync::Arc;

use thiserror::Error;
use tracing::warn;

use crate::domain::answer::{build_initial_values, Answer, ValueMap};
use crate::domain::foundation::SubjectId;
use crate::domain::question::Question;
use crate::domain::validation::{build_validation_schema, ValidationSchema};
use crate::ports::{AnswerRepository, GroupFilter, PersistenceError, QuestionRepository};

#[derive(Debug, Clone)]
pub struct PrepareStepCommand {
    pub subject_id: SubjectId,
    pub survey_context: Option<String>,
    pub filter: GroupFilter,
}

/// One step, ready to render: ordered questions, seeded values, compiled
/// validator, and the answer snapshot the submission diff runs against.
#[derive(Debug, Clone)]
pub struct PreparedStep {
    pub questions: Vec<Question>,
    pub initial_values: ValueMap,
    pub schema: ValidationSchema,
    pub previous_answers: Vec<Answer>,
}

#[derive(Debug, Error)]
pub enum PrepareStepError {
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

pub struct PrepareStepHandler {
    question_repository: Arc<dyn QuestionRepository>,
    answer_repository: Arc<dyn AnswerRepository>,
}

impl PrepareStepHandler {
    pub fn new(
        question_repository: Arc<dyn QuestionRepository>,
        answer_repository: Arc<dyn AnswerRepository>,
    ) -> Self {
        Self {
            question_repository,
            answer_repository,
        }
    }

    pub async fn handle(&self, command: PrepareStepCommand) -> Result<PreparedStep, PrepareStepError> {
        let (questions, answers) = tokio::try_join!(
            self.question_repository.fetch_questions(command.filter.clone()),
            self.answer_repository
                .fetch_answers(command.subject_id, command.survey_context.as_deref()),
        )?;

        let mut questions = questions;
        questions.sort_by_key(|q| q.order);

        let known: BTreeSet<_> = questions.iter().map(|q| q.id).collect();
        let (matched, orphaned): (Vec<Answer>, Vec<Answer>) = answers
            .into_iter()
            .partition(|a| known.contains(&a.question_id));
        for orphan in &orphaned {
            warn!(
                question_id = %orphan.question_id,
                answer_id = %orphan.id,
                "stored answer references a question absent from this step; skipping"
            );
        }

        let initial_values = build_initial_values(&questions, &matched);
        let schema = build_validation_schema(&questions);

        Ok(PreparedStep {
            questions,
            initial_values,
            schema,
            previous_answers: matched,
        })
    }
}
