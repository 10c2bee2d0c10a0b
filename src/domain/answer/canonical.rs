//! Type-aware canonical equality for change detection.
//!
//! The submission pipeline must not issue a write when the stored answer and
//! the submitted one are the same answer. "Same" depends on the question
//! type: multi-select answers are sets, rank answers are sequences.

use std::collections::BTreeSet;

use crate::domain::question::QuestionType;

use super::AnswerValue;

/// Returns true when `a` and `b` denote the same answer for a question of
/// the given type.
///
/// - `select_multiple` / `checkbox_multiple`: unordered set comparison.
/// - `rank`: ordered sequence comparison (order is the answer).
/// - everything else: value equality, with text/number coercion so the
///   string `"7"` and the number `7` stored by different frontends compare
///   equal.
pub fn canonically_equal(a: &AnswerValue, b: &AnswerValue, question_type: QuestionType) -> bool {
    match question_type {
        QuestionType::SelectMultiple | QuestionType::CheckboxMultiple => match (a, b) {
            (AnswerValue::List(xs), AnswerValue::List(ys)) => {
                xs.iter().collect::<BTreeSet<_>>() == ys.iter().collect::<BTreeSet<_>>()
            }
            _ => a == b,
        },
        QuestionType::Rank => a == b,
        QuestionType::Radio
        | QuestionType::Select
        | QuestionType::Checkbox
        | QuestionType::TextShort
        | QuestionType::TextLong
        | QuestionType::Email
        | QuestionType::Number
        | QuestionType::Scale => scalar_equal(a, b),
    }
}

fn scalar_equal(a: &AnswerValue, b: &AnswerValue) -> bool {
    if a == b {
        return true;
    }
    match (a, b) {
        (AnswerValue::Text(s), AnswerValue::Number(n))
        | (AnswerValue::Number(n), AnswerValue::Text(s)) => {
            s.trim().parse::<f64>().map(|parsed| parsed == *n).unwrap_or(false)
        }
        _ => false,
    }
}
