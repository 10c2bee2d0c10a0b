//! Application layer - command handlers orchestrating domain and ports.

pub mod handlers;
mod wizard_controller;

pub use wizard_controller::{StepOutcome, WizardController, WizardError};
