//! Points earned by one pattern application from its quiz answers.

use crate::domain::answer::{Answer, AnswerValue};
use crate::domain::question::Question;

/// Sums the points an answered quiz earns toward a pattern application.
///
/// Each weighted question contributes `option.points * question.weight` for
/// the option matching the stored answer. Unweighted questions, unanswered
/// questions, and answers matching no option (or an option without points)
/// contribute nothing.
pub fn pattern_points(questions: &[Question], answers: &[Answer]) -> f64 {
    questions
        .iter()
        .filter_map(|question| {
            let weight = question.weight?;
            let answer = answers.iter().find(|a| a.question_id == question.id)?;
            let chosen = match &answer.value {
                AnswerValue::Text(value) => question.find_option(value)?,
                _ => return None,
            };
            let points = chosen.points?;
            Some(points * weight)
        })
        .sum()
}
