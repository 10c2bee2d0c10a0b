//! Answer state merger - seeds a form from stored answers plus type defaults.

use std::collections::BTreeMap;

use crate::domain::foundation::QuestionId;
use crate::domain::question::{Question, QuestionType};

use super::{Answer, AnswerValue};

/// One initial value per visible question, keyed by question id.
pub type ValueMap = BTreeMap<QuestionId, AnswerValue>;

/// Produces the initial value for every non-hidden question.
///
/// A stored answer wins verbatim. Otherwise the default is type-appropriate:
/// empty text for text/number/email/single-choice, `false` for a single
/// checkbox, an empty list for multi-select, the scale minimum for scale,
/// and for rank the **full option list in catalog order** - an unranked
/// list is meaningless, so the form starts fully ordered.
///
/// Stored answers referencing a question id outside `questions` are left
/// untouched here; callers fetch answers per step, so extras simply do not
/// seed anything. Orphans relative to the whole catalog are reported by the
/// repository layer.
pub fn build_initial_values(questions: &[Question], answers: &[Answer]) -> ValueMap {
    let mut values = ValueMap::new();

    for question in questions {
        if question.is_hidden {
            continue;
        }

        let stored = answers.iter().find(|a| a.question_id == question.id);
        let value = match stored {
            Some(answer) => answer.value.clone(),
            None => default_value(question),
        };
        values.insert(question.id, value);
    }

    values
}

/// The type-appropriate default for an unanswered question.
pub fn default_value(question: &Question) -> AnswerValue {
    match question.question_type {
        QuestionType::Checkbox => AnswerValue::Bool(false),
        QuestionType::SelectMultiple | QuestionType::CheckboxMultiple => {
            AnswerValue::List(Vec::new())
        }
        QuestionType::Rank => AnswerValue::List(question.option_values()),
        QuestionType::Scale => {
            let min = question.scale.as_ref().map(|s| s.min).unwrap_or(0);
            AnswerValue::Number(min as f64)
        }
        QuestionType::Radio
        | QuestionType::Select
        | QuestionType::TextShort
        | QuestionType::TextLong
        | QuestionType::Email
        | QuestionType::Number => AnswerValue::empty(),
    }
}
