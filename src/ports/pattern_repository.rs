//! Pattern Repository Port - the pattern catalog and a subject's applications.

use async_trait::async_trait;

use crate::domain::foundation::SubjectId;
use crate::domain::scoring::{AppliedPattern, PatternCatalogEntry};

use super::PersistenceError;

/// Port for reading the best-practice pattern catalog and the patterns a
/// subject has applied.
#[async_trait]
pub trait PatternRepository: Send + Sync {
    /// Fetches the full pattern catalog.
    async fn fetch_catalog(&self) -> Result<Vec<PatternCatalogEntry>, PersistenceError>;

    /// Fetches the subject's recorded pattern applications.
    async fn fetch_applied(
        &self,
        subject_id: SubjectId,
    ) -> Result<Vec<AppliedPattern>, PersistenceError>;
}
