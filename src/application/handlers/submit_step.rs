//! Submit Step Handler - the diff-based write pipeline for one wizard step.
//!
//! Validates the submitted values, diffs them against the stored snapshot,
//! and issues only the writes that change state. Writes fan out
//! concurrently and the step completes only when all have resolved; a
//! single failure fails the whole step and is surfaced once. There is no
//! rollback of writes that already landed - a failed fan-in can leave the
//! step partially committed, and resubmitting the step is the recovery
//! path (the diff skips whatever already landed).

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, warn};

use crate::config::SubmissionConfig;
use crate::domain::answer::{canonically_equal, Answer, AnswerPatch, NewAnswer, ValueMap};
use crate::domain::foundation::{AnswerId, SubjectId};
use crate::domain::question::Question;
use crate::domain::validation::{build_validation_schema, ValidationErrors};
use crate::ports::{AnswerRepository, PersistenceError};

#[derive(Debug, Clone)]
pub struct SubmitStepCommand {
    pub subject_id: SubjectId,
    pub survey_context: Option<String>,
    /// The current step's questions, in render order.
    pub questions: Vec<Question>,
    /// The stored snapshot the diff runs against.
    pub previous_answers: Vec<Answer>,
    /// Submitted form values keyed by question id.
    pub values: ValueMap,
}

#[derive(Debug, Clone)]
pub struct SubmitStepResult {
    /// Authoritative answers refetched after the writes landed.
    pub answers: Vec<Answer>,
    /// How many create/update writes the diff produced.
    pub writes_issued: usize,
}

#[derive(Debug, Error)]
pub enum SubmitStepError {
    #[error("step submission rejected: {} field(s) failed validation", .0.len())]
    Validation(ValidationErrors),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

enum PlannedWrite {
    Create(NewAnswer),
    Update(AnswerId, AnswerPatch),
}

pub struct SubmitStepHandler {
    answer_repository: Arc<dyn AnswerRepository>,
    config: SubmissionConfig,
}

impl SubmitStepHandler {
    pub fn new(answer_repository: Arc<dyn AnswerRepository>, config: SubmissionConfig) -> Self {
        Self {
            answer_repository,
            config,
        }
    }

    pub async fn handle(&self, command: SubmitStepCommand) -> Result<SubmitStepResult, SubmitStepError> {
        let schema = build_validation_schema(&command.questions);
        schema
            .validate(&command.values)
            .map_err(SubmitStepError::Validation)?;

        let plan = build_write_plan(&command);
        let writes_issued = plan.len();
        debug!(writes = writes_issued, "dispatching step writes");

        let results = futures::future::join_all(plan.into_iter().map(|write| {
            let repository = Arc::clone(&self.answer_repository);
            let timeout = self.config.write_timeout();
            let retries = self.config.write_retries;
            async move { execute_with_retry(repository, write, timeout, retries).await }
        }))
        .await;

        // Fan-in: the first failure fails the step. Writes that already
        // landed stay landed; resubmission diffs them away.
        for result in results {
            result?;
        }

        let answers = self
            .answer_repository
            .fetch_answers(command.subject_id, command.survey_context.as_deref())
            .await?;

        Ok(SubmitStepResult {
            answers,
            writes_issued,
        })
    }
}

fn build_write_plan(command: &SubmitStepCommand) -> Vec<PlannedWrite> {
    let mut plan = Vec::new();

    for question in command.questions.iter().filter(|q| !q.is_hidden) {
        let Some(value) = command.values.get(&question.id) else {
            continue;
        };
        if value.is_empty() && !question.is_required {
            continue;
        }

        let existing = command
            .previous_answers
            .iter()
            .find(|a| a.question_id == question.id);

        match existing {
            Some(stored) if canonically_equal(&stored.value, value, question.question_type) => {}
            Some(stored) => plan.push(PlannedWrite::Update(
                stored.id,
                AnswerPatch {
                    value: value.clone(),
                },
            )),
            None => plan.push(PlannedWrite::Create(NewAnswer {
                subject_id: command.subject_id,
                survey_context: command.survey_context.clone(),
                question_id: question.id,
                value: value.clone(),
            })),
        }
    }

    plan
}

async fn execute_with_retry(
    repository: Arc<dyn AnswerRepository>,
    write: PlannedWrite,
    per_attempt: Duration,
    retries: u32,
) -> Result<Answer, PersistenceError> {
    let attempts = retries + 1;
    let mut last_error = PersistenceError::Timeout { attempts };

    for attempt in 1..=attempts {
        let outcome = match &write {
            PlannedWrite::Create(payload) => {
                tokio::time::timeout(per_attempt, repository.create(payload.clone())).await
            }
            PlannedWrite::Update(id, patch) => {
                tokio::time::timeout(per_attempt, repository.update(*id, patch.clone())).await
            }
        };

        match outcome {
            Ok(Ok(answer)) => return Ok(answer),
            Ok(Err(error)) => {
                warn!(attempt, %error, "answer write failed");
                last_error = error;
            }
            Err(_) => {
                warn!(attempt, "answer write timed out");
                last_error = PersistenceError::Timeout { attempts: attempt };
            }
        }
    }

    Err(last_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryAnswerRepository;
    use crate::domain::answer::AnswerValue;
    use crate::domain::foundation::{QuestionId, Timestamp};
    use crate::domain::question::{QuestionOption, QuestionType};

    fn stored(subject_id: SubjectId, question_id: QuestionId, value: AnswerValue) -> Answer {
        Answer {
            id: AnswerId::new(),
            subject_id,
            survey_context: None,
            question_id,
            value,
            updated_at: Timestamp::now(),
        }
    }

    fn fast_config() -> SubmissionConfig {
        SubmissionConfig {
            write_timeout_ms: 1_000,
            write_retries: 1,
        }
    }

    fn command(
        subject_id: SubjectId,
        questions: Vec<Question>,
        previous: Vec<Answer>,
        values: ValueMap,
    ) -> SubmitStepCommand {
        SubmitStepCommand {
            subject_id,
            survey_context: None,
            questions,
            previous_answers: previous,
            values,
        }
    }

    #[tokio::test]
    async fn writes_only_changed_answers() {
        let q1 = Question::new("Name?", QuestionType::TextShort);
        let q2 = Question::new("Team size?", QuestionType::Number);
        let subject = SubjectId::new();
        let prev = vec![stored(subject, q1.id, AnswerValue::Text("Ada".into()))];

        let repo = Arc::new(InMemoryAnswerRepository::with_answers(prev.clone()));
        let handler = SubmitStepHandler::new(repo.clone(), fast_config());

        let mut values = ValueMap::new();
        values.insert(q1.id, AnswerValue::Text("Ada".into()));
        values.insert(q2.id, AnswerValue::Number(4.0));

        let result = handler
            .handle(command(subject, vec![q1, q2], prev, values))
            .await
            .unwrap();

        assert_eq!(result.writes_issued, 1);
        assert_eq!(repo.write_count(), 1);
        assert_eq!(result.answers.len(), 2);
    }

    #[tokio::test]
    async fn identical_resubmission_issues_zero_writes() {
        let q = Question::new("Tags", QuestionType::CheckboxMultiple).with_options(vec![
            QuestionOption::new("a", "A"),
            QuestionOption::new("b", "B"),
        ]);
        let subject = SubjectId::new();
        let prev = vec![stored(
            subject,
            q.id,
            AnswerValue::List(vec!["a".into(), "b".into()]),
        )];

        let repo = Arc::new(InMemoryAnswerRepository::with_answers(prev.clone()));
        let handler = SubmitStepHandler::new(repo.clone(), fast_config());

        // Same selection in a different order is still canonically equal.
        let mut values = ValueMap::new();
        values.insert(q.id, AnswerValue::List(vec!["b".into(), "a".into()]));

        let result = handler
            .handle(command(subject, vec![q], prev, values))
            .await
            .unwrap();

        assert_eq!(result.writes_issued, 0);
        assert_eq!(repo.write_count(), 0);
    }

    #[tokio::test]
    async fn optional_empty_value_is_skipped() {
        let q = Question::new("Anything else?", QuestionType::TextLong);
        let subject = SubjectId::new();

        let repo = Arc::new(InMemoryAnswerRepository::new());
        let handler = SubmitStepHandler::new(repo.clone(), fast_config());

        let mut values = ValueMap::new();
        values.insert(q.id, AnswerValue::Text("   ".into()));

        let result = handler
            .handle(command(subject, vec![q], vec![], values))
            .await
            .unwrap();

        assert_eq!(result.writes_issued, 0);
        assert!(repo.stored().is_empty());
    }

    #[tokio::test]
    async fn required_empty_value_blocks_with_validation_error() {
        let q = Question::new("Name?", QuestionType::TextShort).required();
        let subject = SubjectId::new();

        let repo = Arc::new(InMemoryAnswerRepository::new());
        let handler = SubmitStepHandler::new(repo.clone(), fast_config());

        let mut values = ValueMap::new();
        values.insert(q.id, AnswerValue::Text(String::new()));

        let error = handler
            .handle(command(subject, vec![q], vec![], values))
            .await
            .unwrap_err();

        assert!(matches!(error, SubmitStepError::Validation(_)));
        assert_eq!(repo.write_count(), 0);
    }

    #[tokio::test]
    async fn transient_failure_is_retried_once() {
        let q = Question::new("Name?", QuestionType::TextShort);
        let subject = SubjectId::new();

        let repo = Arc::new(InMemoryAnswerRepository::new());
        repo.fail_next_writes(1);
        let handler = SubmitStepHandler::new(repo.clone(), fast_config());

        let mut values = ValueMap::new();
        values.insert(q.id, AnswerValue::Text("Ada".into()));

        let result = handler
            .handle(command(subject, vec![q], vec![], values))
            .await
            .unwrap();

        assert_eq!(result.writes_issued, 1);
        assert_eq!(repo.write_count(), 2);
        assert_eq!(result.answers.len(), 1);
    }

    #[tokio::test]
    async fn persistent_failure_surfaces_after_retry() {
        let q = Question::new("Name?", QuestionType::TextShort);
        let subject = SubjectId::new();

        let repo = Arc::new(InMemoryAnswerRepository::new());
        repo.fail_next_writes(2);
        let handler = SubmitStepHandler::new(repo.clone(), fast_config());

        let mut values = ValueMap::new();
        values.insert(q.id, AnswerValue::Text("Ada".into()));

        let error = handler
            .handle(command(subject, vec![q], vec![], values))
            .await
            .unwrap_err();

        assert!(matches!(
            error,
            SubmitStepError::Persistence(PersistenceError::Backend(_))
        ));
    }

    #[tokio::test]
    async fn slow_write_times_out_after_both_attempts() {
        let q = Question::new("Name?", QuestionType::TextShort);
        let subject = SubjectId::new();

        let repo = Arc::new(InMemoryAnswerRepository::new());
        repo.set_write_delay(Duration::from_millis(200));
        let handler = SubmitStepHandler::new(
            repo.clone(),
            SubmissionConfig {
                write_timeout_ms: 10,
                write_retries: 1,
            },
        );

        let mut values = ValueMap::new();
        values.insert(q.id, AnswerValue::Text("Ada".into()));

        let error = handler
            .handle(command(subject, vec![q], vec![], values))
            .await
            .unwrap_err();

        assert!(matches!(
            error,
            SubmitStepError::Persistence(PersistenceError::Timeout { attempts: 2 })
        ));
    }

    #[tokio::test]
    async fn hidden_questions_never_produce_writes() {
        let q = Question::new("internal flag", QuestionType::Checkbox).hidden();
        let subject = SubjectId::new();

        let repo = Arc::new(InMemoryAnswerRepository::new());
        let handler = SubmitStepHandler::new(repo.clone(), fast_config());

        let mut values = ValueMap::new();
        values.insert(q.id, AnswerValue::Bool(true));

        let result = handler
            .handle(command(subject, vec![q], vec![], values))
            .await
            .unwrap();

        assert_eq!(result.writes_issued, 0);
    }
}
