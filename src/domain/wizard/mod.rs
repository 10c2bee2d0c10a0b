//! Durable multi-step wizard state.

mod state;

pub use state::{AssessmentKind, WizardState};
