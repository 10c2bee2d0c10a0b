//! In-memory wizard step storage.
//!
//! Mirrors the production key-value backend: the index is stored as an
//! integer string under a `(subject, kind)`-scoped key, and decode failures
//! surface as corruption rather than a silent reset.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::foundation::SubjectId;
use crate::domain::wizard::AssessmentKind;
use crate::ports::{PersistenceError, WizardStateStorage};

pub struct InMemoryWizardStateStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl InMemoryWizardStateStorage {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    fn key(subject_id: SubjectId, kind: AssessmentKind) -> String {
        format!("{}:{}:step", subject_id, kind)
    }

    /// Writes a raw value for corruption tests.
    pub fn put_raw(&self, subject_id: SubjectId, kind: AssessmentKind, raw: &str) {
        self.entries
            .lock()
            .expect("entries lock poisoned")
            .insert(Self::key(subject_id, kind), raw.to_string());
    }
}

impl Default for InMemoryWizardStateStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WizardStateStorage for InMemoryWizardStateStorage {
    async fn load(
        &self,
        subject_id: SubjectId,
        kind: AssessmentKind,
    ) -> Result<Option<usize>, PersistenceError> {
        let entries = self.entries.lock().expect("entries lock poisoned");
        match entries.get(&Self::key(subject_id, kind)) {
            None => Ok(None),
            Some(raw) => raw
                .parse::<usize>()
                .map(Some)
                .map_err(|_| PersistenceError::Corrupted(format!("step index '{}'", raw))),
        }
    }

    async fn save(
        &self,
        subject_id: SubjectId,
        kind: AssessmentKind,
        index: usize,
    ) -> Result<(), PersistenceError> {
        self.entries
            .lock()
            .expect("entries lock poisoned")
            .insert(Self::key(subject_id, kind), index.to_string());
        Ok(())
    }

    async fn clear(
        &self,
        subject_id: SubjectId,
        kind: AssessmentKind,
    ) -> Result<(), PersistenceError> {
        self.entries
            .lock()
            .expect("entries lock poisoned")
            .remove(&Self::key(subject_id, kind));
        Ok(())
    }
}
