//! Question Repository Port - read-only access to the question catalog.

use async_trait::async_trait;

use crate::domain::foundation::Category;
use crate::domain::question::Question;

use super::PersistenceError;

/// Narrows a question fetch to one wizard step's worth of questions.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GroupFilter {
    pub category: Option<Category>,
    pub topic: Option<String>,
    /// Restricts to one named survey when a subject has several.
    pub survey: Option<String>,
}

impl GroupFilter {
    /// Matches every question.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn by_category(category: Category) -> Self {
        Self {
            category: Some(category),
            ..Self::default()
        }
    }

    pub fn by_topic(topic: impl Into<String>) -> Self {
        Self {
            topic: Some(topic.into()),
            ..Self::default()
        }
    }
}

/// Port for fetching questions. Questions are authored externally and are
/// read-only to this core.
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Fetches the questions matching a filter, unordered; callers group
    /// and sort via the domain grouping function.
    async fn fetch_questions(&self, filter: GroupFilter) -> Result<Vec<Question>, PersistenceError>;
}
