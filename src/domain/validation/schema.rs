//! Compiles a set of questions into a per-field validator.
//!
//! The rules match exhaustively over `QuestionType`; adding a type without
//! updating this module is a compile error, not a silent fallthrough.

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use crate::domain::answer::{AnswerValue, ValueMap};
use crate::domain::foundation::{QuestionId, ValidationError};
use crate::domain::question::{Question, QuestionType};

/// Field-scoped validation failures, keyed by question id.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValidationErrors {
    errors: BTreeMap<QuestionId, Vec<ValidationError>>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn for_question(&self, id: &QuestionId) -> &[ValidationError] {
        self.errors.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&QuestionId, &Vec<ValidationError>)> {
        self.errors.iter()
    }

    fn push(&mut self, id: QuestionId, error: ValidationError) {
        self.errors.entry(id).or_default().push(error);
    }
}

/// A compiled validator over the non-hidden questions of one step.
#[derive(Debug, Clone)]
pub struct ValidationSchema {
    questions: Vec<Question>,
}

impl ValidationSchema {
    /// Checks every field of a submitted value map.
    ///
    /// Missing entries count as unanswered; for required questions that is
    /// a `Required` failure, for optional ones a pass.
    pub fn validate(&self, values: &ValueMap) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();

        for question in &self.questions {
            let value = values.get(&question.id);
            for error in check_question(question, value) {
                errors.push(question.id, error);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// The questions this schema covers, in input order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }
}

/// Builds the validator for a step, skipping hidden questions.
pub fn build_validation_schema(questions: &[Question]) -> ValidationSchema {
    ValidationSchema {
        questions: questions.iter().filter(|q| !q.is_hidden).cloned().collect(),
    }
}

fn check_question(question: &Question, value: Option<&AnswerValue>) -> Vec<ValidationError> {
    match question.question_type {
        QuestionType::TextShort | QuestionType::TextLong | QuestionType::Radio | QuestionType::Select => {
            check_text(question, value)
        }
        QuestionType::Email => check_email(question, value),
        QuestionType::Number => check_number(question, value),
        QuestionType::SelectMultiple | QuestionType::CheckboxMultiple => {
            check_multi(question, value)
        }
        // `false` is a valid, non-empty answer, so a required checkbox needs
        // nothing beyond being a boolean; required is intentionally not
        // "must be true".
        QuestionType::Checkbox => check_checkbox(value),
        QuestionType::Rank => check_rank(question, value),
        QuestionType::Scale => check_scale(question, value),
    }
}

fn check_text(question: &Question, value: Option<&AnswerValue>) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    match value {
        Some(AnswerValue::Text(s)) => {
            if question.is_required && s.trim().is_empty() {
                errors.push(ValidationError::Required);
            }
            if let Some(max) = question.max_length {
                if s.chars().count() > max {
                    errors.push(ValidationError::TooLong { max });
                }
            }
        }
        Some(other) => errors.push(wrong_shape("text", other)),
        None => {
            if question.is_required {
                errors.push(ValidationError::Required);
            }
        }
    }
    errors
}

fn check_email(question: &Question, value: Option<&AnswerValue>) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    match value {
        Some(AnswerValue::Text(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                if question.is_required {
                    errors.push(ValidationError::Required);
                }
            } else if !looks_like_email(trimmed) {
                errors.push(ValidationError::InvalidEmail);
            }
        }
        Some(other) => errors.push(wrong_shape("text", other)),
        None => {
            if question.is_required {
                errors.push(ValidationError::Required);
            }
        }
    }
    errors
}

/// Standard structural email check: one `@` with a dotted, non-empty domain.
fn looks_like_email(s: &str) -> bool {
    let mut parts = s.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let domain = match parts.next() {
        Some(d) => d,
        None => return false,
    };
    if local.is_empty() || domain.contains('@') || s.contains(char::is_whitespace) {
        return false;
    }
    let mut labels = domain.split('.');
    domain.contains('.') && labels.all(|label| !label.is_empty())
}

fn check_number(question: &Question, value: Option<&AnswerValue>) -> Vec<ValidationError> {
    match value {
        Some(AnswerValue::Number(n)) => {
            if n.is_finite() {
                vec![]
            } else {
                vec![ValidationError::NotANumber]
            }
        }
        Some(AnswerValue::Text(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                if question.is_required {
                    // An empty string is absence, not zero.
                    vec![ValidationError::Required]
                } else {
                    vec![]
                }
            } else {
                match trimmed.parse::<f64>() {
                    Ok(n) if n.is_finite() => vec![],
                    _ => vec![ValidationError::NotANumber],
                }
            }
        }
        Some(other) => vec![wrong_shape("number", other)],
        None => {
            if question.is_required {
                vec![ValidationError::Required]
            } else {
                vec![]
            }
        }
    }
}

fn check_multi(question: &Question, value: Option<&AnswerValue>) -> Vec<ValidationError> {
    match value {
        Some(AnswerValue::List(items)) => {
            if question.is_required && items.is_empty() {
                vec![ValidationError::Required]
            } else {
                vec![]
            }
        }
        Some(other) => vec![wrong_shape("list", other)],
        None => {
            if question.is_required {
                vec![ValidationError::Required]
            } else {
                vec![]
            }
        }
    }
}

fn check_checkbox(value: Option<&AnswerValue>) -> Vec<ValidationError> {
    match value {
        Some(AnswerValue::Bool(_)) | None => vec![],
        Some(other) => vec![wrong_shape("boolean", other)],
    }
}

fn check_rank(question: &Question, value: Option<&AnswerValue>) -> Vec<ValidationError> {
    match value {
        Some(AnswerValue::List(items)) => {
            let expected: BTreeSet<&str> =
                question.options.iter().map(|o| o.value.as_str()).collect();
            let got: BTreeSet<&str> = items.iter().map(String::as_str).collect();
            if items.len() != question.options.len() || expected != got {
                vec![ValidationError::NotAPermutation]
            } else {
                vec![]
            }
        }
        Some(other) => vec![wrong_shape("list", other)],
        None => {
            if question.is_required {
                vec![ValidationError::Required]
            } else {
                vec![]
            }
        }
    }
}

fn check_scale(question: &Question, value: Option<&AnswerValue>) -> Vec<ValidationError> {
    let bounds = question.scale.as_ref();
    let in_bounds = |n: f64| -> Vec<ValidationError> {
        match bounds {
            Some(b) if n < b.min as f64 || n > b.max as f64 => {
                vec![ValidationError::OutOfRange { min: b.min, max: b.max }]
            }
            _ => vec![],
        }
    };

    match value {
        Some(AnswerValue::Number(n)) if n.is_finite() => in_bounds(*n),
        Some(AnswerValue::Number(_)) => vec![ValidationError::NotANumber],
        Some(AnswerValue::Text(s)) => match s.trim().parse::<f64>() {
            Ok(n) if n.is_finite() => in_bounds(n),
            _ => vec![ValidationError::NotANumber],
        },
        Some(other) => vec![wrong_shape("number", other)],
        None => {
            if question.is_required {
                vec![ValidationError::Required]
            } else {
                vec![]
            }
        }
    }
}

fn wrong_shape(expected: &'static str, actual: &AnswerValue) -> ValidationError {
    ValidationError::WrongShape {
        expected,
        actual: actual.shape(),
    }
}
