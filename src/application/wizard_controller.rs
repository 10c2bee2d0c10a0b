//! Wizard Controller - drives a durable multi-step assessment.
//!
//! Groups the catalog into ordered steps, resumes from the stored index,
//! and enforces submit-before-navigate: `next` and `jump_to` run the
//! submission pipeline for the current step first and only move when it
//! resolved. Navigation saves the target index to durable storage before
//! mutating in-memory state, so a storage failure leaves the wizard on its
//! current step.

use std::collections::BTreeSet;
use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use super::handlers::{
    ComputeScoresCommand, ComputeScoresError, ComputeScoresHandler, PreparedStep,
    SubmitStepCommand, SubmitStepError, SubmitStepHandler,
};
use crate::domain::answer::{build_initial_values, Answer, ValueMap};
use crate::domain::foundation::{Category, DomainError, SubjectId};
use crate::domain::question::{group_questions, Question, QuestionGroup};
use crate::domain::scoring::ScoreRecord;
use crate::domain::validation::{build_validation_schema, ValidationErrors};
use crate::domain::wizard::{AssessmentKind, WizardState};
use crate::ports::{
    AnswerRepository, GroupFilter, PersistenceError, QuestionRepository, WizardStateStorage,
};

#[derive(Debug, Error)]
pub enum WizardError {
    #[error("step blocked by {} invalid field(s)", .0.len())]
    Validation(ValidationErrors),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    #[error(transparent)]
    Navigation(#[from] DomainError),
}

impl From<SubmitStepError> for WizardError {
    fn from(error: SubmitStepError) -> Self {
        match error {
            SubmitStepError::Validation(errors) => WizardError::Validation(errors),
            SubmitStepError::Persistence(error) => WizardError::Persistence(error),
        }
    }
}

impl From<ComputeScoresError> for WizardError {
    fn from(error: ComputeScoresError) -> Self {
        match error {
            ComputeScoresError::Persistence(error) => WizardError::Persistence(error),
        }
    }
}

/// What a successful `next` did.
#[derive(Debug, Clone)]
pub enum StepOutcome {
    /// Moved to the step at `index`.
    Advanced { index: usize },
    /// The terminal step was submitted; scores were recomputed and the
    /// stored step index cleared.
    Completed { scores: ScoreRecord },
}

/// One subject's journey through one assessment.
pub struct WizardController {
    answer_repository: Arc<dyn AnswerRepository>,
    storage: Arc<dyn WizardStateStorage>,
    submit: SubmitStepHandler,
    scores: ComputeScoresHandler,
    subject_id: SubjectId,
    kind: AssessmentKind,
    survey_context: Option<String>,
    category_filter: Option<Vec<Category>>,
    groups: Vec<QuestionGroup>,
    state: WizardState,
}

impl WizardController {
    /// Builds the step list from the question catalog and resumes at the
    /// stored index, or at the first step when nothing is stored. The
    /// resolved index is saved back immediately so a stale stored value is
    /// replaced by the clamped one.
    #[allow(clippy::too_many_arguments)]
    pub async fn resume(
        question_repository: Arc<dyn QuestionRepository>,
        answer_repository: Arc<dyn AnswerRepository>,
        storage: Arc<dyn WizardStateStorage>,
        submit: SubmitStepHandler,
        scores: ComputeScoresHandler,
        subject_id: SubjectId,
        kind: AssessmentKind,
        survey_context: Option<String>,
    ) -> Result<Self, WizardError> {
        let filter = GroupFilter {
            survey: survey_context.clone(),
            ..GroupFilter::default()
        };
        let mut questions = question_repository.fetch_questions(filter).await?;
        questions.sort_by_key(|q| q.order);
        let groups = group_questions(&questions, Question::group_key);

        let keys: Vec<String> = groups.iter().map(|g| g.key.clone()).collect();
        let state = match storage.load(subject_id, kind).await? {
            Some(index) => WizardState::resume(keys, index)?,
            None => WizardState::new(keys)?,
        };
        storage.save(subject_id, kind, state.current_index()).await?;

        info!(
            subject_id = %subject_id,
            kind = %kind,
            step = state.current_index(),
            steps = state.step_count(),
            "assessment wizard resumed"
        );

        Ok(Self {
            answer_repository,
            storage,
            submit,
            scores,
            subject_id,
            kind,
            survey_context,
            category_filter: None,
            groups,
            state,
        })
    }

    /// Restricts completion scoring to the given categories.
    pub fn with_category_filter(mut self, filter: Vec<Category>) -> Self {
        self.category_filter = Some(filter);
        self
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index()
    }

    pub fn current_group(&self) -> &str {
        self.state.current_group()
    }

    pub fn step_count(&self) -> usize {
        self.state.step_count()
    }

    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    /// Assembles the current step for rendering: seeded values, compiled
    /// validator, and the snapshot the next submission diffs against.
    pub async fn current_step(&self) -> Result<PreparedStep, WizardError> {
        let questions = &self.groups[self.state.current_index()].questions;
        let previous = self.step_answers(questions).await?;

        Ok(PreparedStep {
            initial_values: build_initial_values(questions, &previous),
            schema: build_validation_schema(questions),
            questions: questions.clone(),
            previous_answers: previous,
        })
    }

    /// Submits the current step; then either advances or, from the
    /// terminal step, completes the assessment: scores are recomputed over
    /// the full catalog and the stored step index is cleared.
    pub async fn next(&mut self, values: ValueMap) -> Result<StepOutcome, WizardError> {
        self.submit_current(values).await?;

        if self.state.is_terminal() {
            let scores = self
                .scores
                .handle(ComputeScoresCommand {
                    subject_id: self.subject_id,
                    category_filter: self.category_filter.clone(),
                })
                .await?;
            self.storage.clear(self.subject_id, self.kind).await?;
            info!(subject_id = %self.subject_id, kind = %self.kind, "assessment completed");
            return Ok(StepOutcome::Completed { scores });
        }

        let mut next_state = self.state.clone();
        next_state.advance()?;
        self.persist_move(next_state).await?;
        Ok(StepOutcome::Advanced {
            index: self.state.current_index(),
        })
    }

    /// Moves back one step without submitting; going back never loses
    /// data because nothing on the current step has been committed.
    pub async fn back(&mut self) -> Result<usize, WizardError> {
        let mut next_state = self.state.clone();
        next_state.back()?;
        self.persist_move(next_state).await?;
        Ok(self.state.current_index())
    }

    /// Non-linear navigation: submits the current step, then jumps.
    pub async fn jump_to(&mut self, index: usize, values: ValueMap) -> Result<usize, WizardError> {
        let mut next_state = self.state.clone();
        next_state.jump_to(index)?;

        self.submit_current(values).await?;
        self.persist_move(next_state).await?;
        Ok(self.state.current_index())
    }

    async fn submit_current(&self, values: ValueMap) -> Result<(), WizardError> {
        let questions = &self.groups[self.state.current_index()].questions;
        let previous = self.step_answers(questions).await?;

        self.submit
            .handle(SubmitStepCommand {
                subject_id: self.subject_id,
                survey_context: self.survey_context.clone(),
                questions: questions.clone(),
                previous_answers: previous,
                values,
            })
            .await?;
        Ok(())
    }

    /// Save first, mutate second: a failed save leaves in-memory state on
    /// the step the storage still points at.
    async fn persist_move(&mut self, next_state: WizardState) -> Result<(), WizardError> {
        self.storage
            .save(self.subject_id, self.kind, next_state.current_index())
            .await?;
        self.state = next_state;
        Ok(())
    }

    /// The subject's stored answers narrowed to one step's questions.
    async fn step_answers(&self, questions: &[Question]) -> Result<Vec<Answer>, WizardError> {
        let answers = self
            .answer_repository
            .fetch_answers(self.subject_id, self.survey_context.as_deref())
            .await?;
        let known: BTreeSet<_> = questions.iter().map(|q| q.id).collect();
        Ok(answers
            .into_iter()
            .filter(|a| known.contains(&a.question_id))
            .collect())
    }
}
