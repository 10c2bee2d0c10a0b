//! In-memory port implementations.
//!
//! Deterministic, lock-based backends used by handler tests and the
//! integration suite. Failure and latency injection make the timeout and
//! retry paths testable without a real backend.
//!
//! # Panics
//!
//! Lock poisoning panics. Acceptable for test infrastructure; these
//! adapters are not meant for production use.

mod answer_repository;
mod pattern_repository;
mod question_repository;
mod score_snapshot_store;
mod wizard_state_storage;

pub use answer_repository::InMemoryAnswerRepository;
pub use pattern_repository::InMemoryPatternRepository;
pub use question_repository::InMemoryQuestionRepository;
pub use score_snapshot_store::InMemoryScoreSnapshotStore;
pub use wizard_state_storage::InMemoryWizardStateStorage;
