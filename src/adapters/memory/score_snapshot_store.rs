//! In-memory score snapshot cache.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::foundation::SubjectId;
use crate::domain::scoring::ScoreRecord;
use crate::ports::{PersistenceError, ScoreSnapshotStore};

/// Keeps the latest snapshot per subject for test assertions.
pub struct InMemoryScoreSnapshotStore {
    snapshots: Mutex<HashMap<SubjectId, ScoreRecord>>,
}

impl InMemoryScoreSnapshotStore {
    pub fn new() -> Self {
        Self {
            snapshots: Mutex::new(HashMap::new()),
        }
    }

    pub fn snapshot_for(&self, subject_id: SubjectId) -> Option<ScoreRecord> {
        self.snapshots
            .lock()
            .expect("snapshot lock poisoned")
            .get(&subject_id)
            .cloned()
    }
}

impl Default for InMemoryScoreSnapshotStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ScoreSnapshotStore for InMemoryScoreSnapshotStore {
    async fn persist(
        &self,
        subject_id: SubjectId,
        record: &ScoreRecord,
    ) -> Result<(), PersistenceError> {
        self.snapshots
            .lock()
            .expect("snapshot lock poisoned")
            .insert(subject_id, record.clone());
        Ok(())
    }
}
