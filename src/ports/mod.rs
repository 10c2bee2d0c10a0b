//! Ports - interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between the
//! assessment core and the persistence collaborator. Adapters implement
//! these ports; the core never talks to storage directly.

mod answer_repository;
mod pattern_repository;
mod persistence_error;
mod question_repository;
mod score_snapshot_store;
mod wizard_state_storage;

pub use answer_repository::AnswerRepository;
pub use pattern_repository::PatternRepository;
pub use persistence_error::PersistenceError;
pub use question_repository::{GroupFilter, QuestionRepository};
pub use score_snapshot_store::ScoreSnapshotStore;
pub use wizard_state_storage::WizardStateStorage;
