//! In-memory question catalog.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::domain::question::Question;
use crate::ports::{GroupFilter, PersistenceError, QuestionRepository};

/// Fixed question catalog held in memory.
pub struct InMemoryQuestionRepository {
    questions: Mutex<Vec<Question>>,
}

impl InMemoryQuestionRepository {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions: Mutex::new(questions),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait]
impl QuestionRepository for InMemoryQuestionRepository {
    async fn fetch_questions(
        &self,
        filter: GroupFilter,
    ) -> Result<Vec<Question>, PersistenceError> {
        let questions = self.questions.lock().expect("question lock poisoned");
        Ok(questions
            .iter()
            .filter(|q| match filter.category {
                Some(category) => q.category == Some(category),
                None => true,
            })
            .filter(|q| match &filter.topic {
                Some(topic) => q.topic.as_deref() == Some(topic.as_str()),
                None => true,
            })
            .cloned()
            .collect())
    }
}
