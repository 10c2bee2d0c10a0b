//! Wizard State Storage Port - durable step index per assessment.

use async_trait::async_trait;

use crate::domain::foundation::SubjectId;
use crate::domain::wizard::AssessmentKind;

use super::PersistenceError;

/// Port for the durable wizard step index.
///
/// The index is stored as an integer string under a key scoped to
/// `(subject, assessment kind)` so a reload resumes mid-assessment. One
/// active session per subject makes this single-writer; no locking beyond
/// an atomic read-then-write of the single value is needed.
#[async_trait]
pub trait WizardStateStorage: Send + Sync {
    /// Loads the stored step index, if any.
    async fn load(
        &self,
        subject_id: SubjectId,
        kind: AssessmentKind,
    ) -> Result<Option<usize>, PersistenceError>;

    /// Stores the step index, replacing any previous value.
    async fn save(
        &self,
        subject_id: SubjectId,
        kind: AssessmentKind,
        index: usize,
    ) -> Result<(), PersistenceError>;

    /// Clears the stored index (terminal-step completion).
    async fn clear(
        &self,
        subject_id: SubjectId,
        kind: AssessmentKind,
    ) -> Result<(), PersistenceError>;
}
