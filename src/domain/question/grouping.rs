//! Pure grouping of questions into ordered wizard steps.

use super::Question;

/// Label applied when a question resolves no category and no topic.
pub const DEFAULT_GROUP_LABEL: &str = "General";

/// One ordered group of questions, keyed by category display name or topic.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionGroup {
    pub key: String,
    pub questions: Vec<Question>,
}

/// Groups questions by `key_fn`, preserving first-seen key order.
///
/// Within each group questions are sorted by `order` ascending; the sort is
/// stable, so ties keep their original input order.
pub fn group_questions<F>(questions: &[Question], key_fn: F) -> Vec<QuestionGroup>
where
    F: Fn(&Question) -> String,
{
    let mut groups: Vec<QuestionGroup> = Vec::new();

    for question in questions {
        let key = key_fn(question);
        match groups.iter_mut().find(|g| g.key == key) {
            Some(group) => group.questions.push(question.clone()),
            None => groups.push(QuestionGroup {
                key,
                questions: vec![question.clone()],
            }),
        }
    }

    for group in &mut groups {
        group.questions.sort_by_key(|q| q.order);
    }

    groups
}
