//! Compute Scores Handler - runs the scoring engine and caches the result.

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::config::ScoringConfig;
use crate::domain::foundation::{Category, SubjectId};
use crate::domain::scoring::{compute_scores, ScoreRecord};
use crate::ports::{PatternRepository, PersistenceError, ScoreSnapshotStore};

#[derive(Debug, Clone)]
pub struct ComputeScoresCommand {
    pub subject_id: SubjectId,
    /// Restricts scoring to the categories the subject opted into.
    pub category_filter: Option<Vec<Category>>,
}

#[derive(Debug, Error)]
pub enum ComputeScoresError {
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

pub struct ComputeScoresHandler {
    pattern_repository: Arc<dyn PatternRepository>,
    snapshot_store: Arc<dyn ScoreSnapshotStore>,
    config: ScoringConfig,
}

impl ComputeScoresHandler {
    pub fn new(
        pattern_repository: Arc<dyn PatternRepository>,
        snapshot_store: Arc<dyn ScoreSnapshotStore>,
        config: ScoringConfig,
    ) -> Self {
        Self {
            pattern_repository,
            snapshot_store,
            config,
        }
    }

    /// Recomputes the subject's maturity scores from the catalog and
    /// persists the snapshot. The snapshot is a display cache; the catalog
    /// stays the source of truth.
    pub async fn handle(&self, command: ComputeScoresCommand) -> Result<ScoreRecord, ComputeScoresError> {
        let (catalog, applied) = tokio::try_join!(
            self.pattern_repository.fetch_catalog(),
            self.pattern_repository.fetch_applied(command.subject_id),
        )?;

        let record = compute_scores(
            &catalog,
            &applied,
            command.category_filter.as_deref(),
            self.config.rounding,
        );

        self.snapshot_store
            .persist(command.subject_id, &record)
            .await?;

        info!(
            subject_id = %command.subject_id,
            overall = record.overall.value(),
            categories = record.per_category.len(),
            "maturity scores recomputed"
        );

        Ok(record)
    }
}
