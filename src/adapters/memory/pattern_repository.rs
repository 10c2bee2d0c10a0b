//! In-memory pattern catalog and application records.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::foundation::SubjectId;
use crate::domain::scoring::{AppliedPattern, PatternCatalogEntry};
use crate::ports::{PatternRepository, PersistenceError};

/// Fixed pattern catalog plus per-subject application records.
pub struct InMemoryPatternRepository {
    catalog: Vec<PatternCatalogEntry>,
    applied: Mutex<HashMap<SubjectId, Vec<AppliedPattern>>>,
}

impl InMemoryPatternRepository {
    pub fn new(catalog: Vec<PatternCatalogEntry>) -> Self {
        Self {
            catalog,
            applied: Mutex::new(HashMap::new()),
        }
    }

    /// Records a pattern application for a subject.
    pub fn record_application(&self, subject_id: SubjectId, application: AppliedPattern) {
        self.applied
            .lock()
            .expect("applied lock poisoned")
            .entry(subject_id)
            .or_default()
            .push(application);
    }
}

#[async_trait]
impl PatternRepository for InMemoryPatternRepository {
    async fn fetch_catalog(&self) -> Result<Vec<PatternCatalogEntry>, PersistenceError> {
        Ok(self.catalog.clone())
    }

    async fn fetch_applied(
        &self,
        subject_id: SubjectId,
    ) -> Result<Vec<AppliedPattern>, PersistenceError> {
        Ok(self
            .applied
            .lock()
            .expect("applied lock poisoned")
            .get(&subject_id)
            .cloned()
            .unwrap_or_default())
    }
}
