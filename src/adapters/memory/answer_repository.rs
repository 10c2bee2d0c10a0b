//! In-memory answer store with failure and latency injection.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use crate::domain::answer::{Answer, AnswerPatch, NewAnswer};
use crate::domain::foundation::{AnswerId, SubjectId, Timestamp};
use crate::ports::{AnswerRepository, PersistenceError};

/// In-memory answer store keyed by `(subject, question)`.
pub struct InMemoryAnswerRepository {
    answers: Mutex<Vec<Answer>>,
    write_count: AtomicU32,
    /// Writes fail while the counter is positive; each failure decrements.
    failures_remaining: AtomicU32,
    write_delay: Mutex<Option<Duration>>,
}

impl InMemoryAnswerRepository {
    pub fn new() -> Self {
        Self {
            answers: Mutex::new(Vec::new()),
            write_count: AtomicU32::new(0),
            failures_remaining: AtomicU32::new(0),
            write_delay: Mutex::new(None),
        }
    }

    pub fn with_answers(answers: Vec<Answer>) -> Self {
        let repo = Self::new();
        *repo.answers.lock().expect("answer lock poisoned") = answers;
        repo
    }

    // === Test Helpers ===

    /// Number of create/update calls that reached the store.
    pub fn write_count(&self) -> u32 {
        self.write_count.load(Ordering::SeqCst)
    }

    /// Makes the next `n` writes fail with a backend error.
    pub fn fail_next_writes(&self, n: u32) {
        self.failures_remaining.store(n, Ordering::SeqCst);
    }

    /// Delays every write; combined with a short handler timeout this
    /// exercises the timeout/retry path.
    pub fn set_write_delay(&self, delay: Duration) {
        *self.write_delay.lock().expect("delay lock poisoned") = Some(delay);
    }

    pub fn stored(&self) -> Vec<Answer> {
        self.answers.lock().expect("answer lock poisoned").clone()
    }

    async fn before_write(&self) -> Result<(), PersistenceError> {
        let delay = *self.write_delay.lock().expect("delay lock poisoned");
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        self.write_count.fetch_add(1, Ordering::SeqCst);

        let remaining = self.failures_remaining.load(Ordering::SeqCst);
        if remaining > 0 {
            self.failures_remaining.store(remaining - 1, Ordering::SeqCst);
            return Err(PersistenceError::Backend("injected write failure".into()));
        }
        Ok(())
    }
}

impl Default for InMemoryAnswerRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AnswerRepository for InMemoryAnswerRepository {
    async fn fetch_answers(
        &self,
        subject_id: SubjectId,
        survey_context: Option<&str>,
    ) -> Result<Vec<Answer>, PersistenceError> {
        let answers = self.answers.lock().expect("answer lock poisoned");
        Ok(answers
            .iter()
            .filter(|a| a.subject_id == subject_id)
            .filter(|a| match survey_context {
                Some(ctx) => a.survey_context.as_deref() == Some(ctx),
                None => true,
            })
            .cloned()
            .collect())
    }

    async fn create(&self, payload: NewAnswer) -> Result<Answer, PersistenceError> {
        self.before_write().await?;

        let answer = Answer {
            id: AnswerId::new(),
            subject_id: payload.subject_id,
            survey_context: payload.survey_context,
            question_id: payload.question_id,
            value: payload.value,
            updated_at: Timestamp::now(),
        };

        let mut answers = self.answers.lock().expect("answer lock poisoned");
        // One current answer per (subject, question).
        if answers
            .iter()
            .any(|a| a.subject_id == answer.subject_id && a.question_id == answer.question_id)
        {
            return Err(PersistenceError::Backend(format!(
                "duplicate answer for question {}",
                answer.question_id
            )));
        }
        answers.push(answer.clone());
        Ok(answer)
    }

    async fn update(&self, id: AnswerId, patch: AnswerPatch) -> Result<Answer, PersistenceError> {
        self.before_write().await?;

        let mut answers = self.answers.lock().expect("answer lock poisoned");
        let answer = answers
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| PersistenceError::NotFound(format!("answer {}", id)))?;
        answer.value = patch.value;
        answer.updated_at = Timestamp::now();
        Ok(answer.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::answer::AnswerValue;
    use crate::domain::foundation::QuestionId;

    fn new_answer(subject_id: SubjectId, question_id: QuestionId) -> NewAnswer {
        NewAnswer {
            subject_id,
            survey_context: None,
            question_id,
            value: AnswerValue::Text("hi".into()),
        }
    }

    #[tokio::test]
    async fn create_then_update_supersedes() {
        let repo = InMemoryAnswerRepository::new();
        let subject = SubjectId::new();
        let question = QuestionId::new();

        let created = repo.create(new_answer(subject, question)).await.unwrap();
        let updated = repo
            .update(created.id, AnswerPatch { value: AnswerValue::Text("bye".into()) })
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        let fetched = repo.fetch_answers(subject, None).await.unwrap();
        assert_eq!(fetched.len(), 1);
        assert_eq!(fetched[0].value, AnswerValue::Text("bye".into()));
    }

    #[tokio::test]
    async fn duplicate_create_is_rejected() {
        let repo = InMemoryAnswerRepository::new();
        let subject = SubjectId::new();
        let question = QuestionId::new();

        repo.create(new_answer(subject, question)).await.unwrap();
        assert!(repo.create(new_answer(subject, question)).await.is_err());
    }

    #[tokio::test]
    async fn injected_failures_consume_then_recover() {
        let repo = InMemoryAnswerRepository::new();
        repo.fail_next_writes(1);

        let subject = SubjectId::new();
        let question = QuestionId::new();
        assert!(repo.create(new_answer(subject, question)).await.is_err());
        assert!(repo.create(new_answer(subject, question)).await.is_ok());
        assert_eq!(repo.write_count(), 2);
    }
}
