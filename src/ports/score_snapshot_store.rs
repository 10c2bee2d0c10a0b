//! Score Snapshot Store Port - cached maturity scores.

use async_trait::async_trait;

use crate::domain::foundation::SubjectId;
use crate::domain::scoring::ScoreRecord;

use super::PersistenceError;

/// Port for caching a computed score record.
///
/// The snapshot is a display cache, not the source of truth; scores are
/// recomputed from the catalog whenever the scoring engine runs.
#[async_trait]
pub trait ScoreSnapshotStore: Send + Sync {
    async fn persist(
        &self,
        subject_id: SubjectId,
        record: &ScoreRecord,
    ) -> Result<(), PersistenceError>;
}
