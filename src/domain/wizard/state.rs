//! WizardState value object - position within an ordered list of steps.
//!
//! The current index is the only durable piece of wizard state; it is
//! persisted through the `WizardStateStorage` port so a reload resumes at
//! the same step. Group keys are re-derived from the question catalog on
//! load, so only the index needs storage.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Which assessment a wizard belongs to; scopes the persisted step key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentKind {
    SelfAssessment,
    TeamAssessment,
}

impl AssessmentKind {
    /// Returns the storage key fragment for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            AssessmentKind::SelfAssessment => "self_assessment",
            AssessmentKind::TeamAssessment => "team_assessment",
        }
    }
}

impl fmt::Display for AssessmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Position in an ordered list of wizard steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardState {
    ordered_groups: Vec<String>,
    current_index: usize,
}

impl WizardState {
    /// Creates a wizard at the first step.
    ///
    /// Returns an error for an empty group list; a wizard needs at least
    /// one step.
    pub fn new(ordered_groups: Vec<String>) -> Result<Self, DomainError> {
        if ordered_groups.is_empty() {
            return Err(DomainError::new(
                ErrorCode::StepOutOfBounds,
                "Wizard requires at least one step",
            ));
        }
        Ok(Self {
            ordered_groups,
            current_index: 0,
        })
    }

    /// Restores a wizard at a stored index, clamping an index that no
    /// longer fits (the catalog may have shrunk since it was saved).
    pub fn resume(ordered_groups: Vec<String>, stored_index: usize) -> Result<Self, DomainError> {
        let mut state = Self::new(ordered_groups)?;
        state.current_index = stored_index.min(state.ordered_groups.len() - 1);
        Ok(state)
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// The group key of the current step.
    pub fn current_group(&self) -> &str {
        &self.ordered_groups[self.current_index]
    }

    pub fn groups(&self) -> &[String] {
        &self.ordered_groups
    }

    pub fn step_count(&self) -> usize {
        self.ordered_groups.len()
    }

    /// True on the last step, where `next` completes the assessment.
    pub fn is_terminal(&self) -> bool {
        self.current_index + 1 == self.ordered_groups.len()
    }

    /// Moves forward one step. Fails on the terminal step; completing the
    /// assessment is the caller's transition, not a step move.
    pub fn advance(&mut self) -> Result<(), DomainError> {
        if self.is_terminal() {
            return Err(DomainError::new(
                ErrorCode::AssessmentAlreadyComplete,
                "Already on the final step",
            ));
        }
        self.current_index += 1;
        Ok(())
    }

    /// Moves back one step. Fails on the first step.
    pub fn back(&mut self) -> Result<(), DomainError> {
        if self.current_index == 0 {
            return Err(DomainError::new(
                ErrorCode::StepOutOfBounds,
                "Already on the first step",
            ));
        }
        self.current_index -= 1;
        Ok(())
    }

    /// Jumps directly to an arbitrary step (non-linear navigation).
    pub fn jump_to(&mut self, index: usize) -> Result<(), DomainError> {
        if index >= self.ordered_groups.len() {
            return Err(DomainError::new(
                ErrorCode::StepOutOfBounds,
                format!("Step {} out of bounds ({} steps)", index, self.ordered_groups.len()),
            ));
        }
        self.current_index = index;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_steps() -> WizardState {
        WizardState::new(vec!["a".into(), "b".into(), "c".into()]).unwrap()
    }

    #[test]
    fn new_starts_at_first_step() {
        let state = three_steps();
        assert_eq!(state.current_index(), 0);
        assert_eq!(state.current_group(), "a");
        assert!(!state.is_terminal());
    }

    #[test]
    fn empty_group_list_is_rejected() {
        assert!(WizardState::new(vec![]).is_err());
    }

    #[test]
    fn advance_and_back_move_one_step() {
        let mut state = three_steps();
        state.advance().unwrap();
        assert_eq!(state.current_group(), "b");
        state.back().unwrap();
        assert_eq!(state.current_group(), "a");
    }

    #[test]
    fn advance_past_terminal_fails() {
        let mut state = three_steps();
        state.advance().unwrap();
        state.advance().unwrap();
        assert!(state.is_terminal());
        assert!(state.advance().is_err());
    }

    #[test]
    fn back_from_first_step_fails() {
        let mut state = three_steps();
        assert!(state.back().is_err());
    }

    #[test]
    fn jump_to_checks_bounds() {
        let mut state = three_steps();
        state.jump_to(2).unwrap();
        assert_eq!(state.current_group(), "c");
        assert!(state.jump_to(3).is_err());
    }

    #[test]
    fn resume_clamps_stale_index() {
        let state = WizardState::resume(vec!["a".into(), "b".into()], 7).unwrap();
        assert_eq!(state.current_index(), 1);
    }
}
