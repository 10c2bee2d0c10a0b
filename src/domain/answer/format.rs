//! Answer formatter and plain-text assessment export.

use crate::domain::question::{Question, QuestionType};

use super::AnswerValue;

/// A formatted answer: a single line or an ordered list of lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormattedAnswer {
    Text(String),
    Lines(Vec<String>),
}

impl FormattedAnswer {
    /// Returns true for blank single-line answers and empty lists.
    pub fn is_blank(&self) -> bool {
        match self {
            FormattedAnswer::Text(s) => s.is_empty(),
            FormattedAnswer::Lines(lines) => lines.is_empty(),
        }
    }
}

/// Renders a typed answer back into human-readable text for summaries.
///
/// Matches exhaustively over the question type; every variant has a defined
/// rendering.
pub fn format_answer(value: &AnswerValue, question: &Question) -> FormattedAnswer {
    if value.is_empty() {
        return FormattedAnswer::Text(String::new());
    }

    match question.question_type {
        QuestionType::Rank => match value {
            AnswerValue::List(items) => FormattedAnswer::Lines(
                items
                    .iter()
                    .enumerate()
                    .map(|(idx, raw)| {
                        let label = question
                            .find_option(raw)
                            .map(|o| o.label.as_str())
                            .unwrap_or(raw.as_str());
                        format!("{}. {}", idx + 1, label)
                    })
                    .collect(),
            ),
            other => FormattedAnswer::Text(plain_text(other)),
        },
        QuestionType::SelectMultiple | QuestionType::CheckboxMultiple => match value {
            AnswerValue::List(items) => FormattedAnswer::Lines(
                items
                    .iter()
                    .map(|raw| {
                        question
                            .find_option(raw)
                            .map(|o| o.label.clone())
                            .unwrap_or_else(|| raw.clone())
                    })
                    .collect(),
            ),
            other => FormattedAnswer::Text(plain_text(other)),
        },
        QuestionType::Scale => FormattedAnswer::Text(format_scale(value, question)),
        QuestionType::Radio | QuestionType::Select => match value {
            AnswerValue::Text(raw) => FormattedAnswer::Text(
                question
                    .find_option(raw)
                    .map(|o| o.label.clone())
                    .unwrap_or_else(|| raw.clone()),
            ),
            other => FormattedAnswer::Text(plain_text(other)),
        },
        QuestionType::Checkbox => match value {
            AnswerValue::Bool(checked) => FormattedAnswer::Text(
                if *checked { "Checked" } else { "Unchecked" }.to_string(),
            ),
            other => FormattedAnswer::Text(plain_text(other)),
        },
        QuestionType::TextShort
        | QuestionType::TextLong
        | QuestionType::Email
        | QuestionType::Number => FormattedAnswer::Text(plain_text(value)),
    }
}

fn format_scale(value: &AnswerValue, question: &Question) -> String {
    let rendered = plain_text(value);
    match &question.scale {
        Some(bounds) => match (&bounds.min_label, &bounds.max_label) {
            (Some(min_label), Some(max_label)) => format!(
                "{}/{} ({}={}, {}={})",
                rendered, bounds.max, bounds.min, min_label, bounds.max, max_label
            ),
            _ => format!("{}/{}", rendered, bounds.max),
        },
        None => rendered,
    }
}

/// Fallback string conversion.
///
/// Booleans render Yes/No; one layer of surrounding double quotes is
/// stripped to absorb a common upstream double-encoding artifact.
fn plain_text(value: &AnswerValue) -> String {
    match value {
        AnswerValue::Bool(b) => if *b { "Yes" } else { "No" }.to_string(),
        AnswerValue::Number(n) => {
            if n.fract() == 0.0 && n.abs() < 1e15 {
                format!("{}", *n as i64)
            } else {
                format!("{}", n)
            }
        }
        AnswerValue::Text(s) => {
            if s.len() >= 2 && s.starts_with('"') && s.ends_with('"') {
                s[1..s.len() - 1].to_string()
            } else {
                s.clone()
            }
        }
        AnswerValue::List(items) => items.join(", "),
    }
}

/// One section of an exported assessment summary.
#[derive(Debug, Clone)]
pub struct ExportSection {
    pub heading: String,
    pub entries: Vec<(String, FormattedAnswer)>,
}

/// Renders an assessment as plain text for download.
///
/// Section headings are only emitted when there is more than one section;
/// blank answers render as "Not answered".
pub fn export_assessment(title: &str, sections: &[ExportSection]) -> String {
    let mut text = format!("# {}\n\n", title);
    let show_headings = sections.len() > 1;

    for section in sections {
        if show_headings {
            text.push_str(&format!("## {}\n\n", section.heading));
        }

        for (question, answer) in &section.entries {
            text.push_str(&format!("### {}\n\n", question));

            if answer.is_blank() {
                text.push_str("Not answered\n\n");
                continue;
            }

            match answer {
                FormattedAnswer::Lines(lines) => {
                    for line in lines {
                        text.push_str(&format!("- {}\n", line));
                    }
                    text.push('\n');
                }
                FormattedAnswer::Text(line) => {
                    text.push_str(&format!("{}\n\n", line));
                }
            }
        }
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::question::{QuestionOption, ScaleBounds};

    #[test]
    fn empty_value_formats_as_empty_string() {
        let q = Question::new("q", QuestionType::TextShort);
        assert_eq!(
            format_answer(&AnswerValue::Text("".into()), &q),
            FormattedAnswer::Text(String::new())
        );
    }

    #[test]
    fn rank_formats_numbered_labels() {
        let q = Question::new("order", QuestionType::Rank).with_options(vec![
            QuestionOption::new("a", "Apple"),
            QuestionOption::new("b", "Banana"),
        ]);
        let value = AnswerValue::List(vec!["b".into(), "a".into()]);
        assert_eq!(
            format_answer(&value, &q),
            FormattedAnswer::Lines(vec!["1. Banana".into(), "2. Apple".into()])
        );
    }

    #[test]
    fn rank_falls_back_to_raw_value_without_matching_option() {
        let q = Question::new("order", QuestionType::Rank);
        let value = AnswerValue::List(vec!["x".into()]);
        assert_eq!(
            format_answer(&value, &q),
            FormattedAnswer::Lines(vec!["1. x".into()])
        );
    }

    #[test]
    fn multi_select_maps_values_to_labels() {
        let q = Question::new("pick", QuestionType::SelectMultiple).with_options(vec![
            QuestionOption::new("a", "Apple"),
            QuestionOption::new("b", "Banana"),
        ]);
        let value = AnswerValue::List(vec!["b".into()]);
        assert_eq!(
            format_answer(&value, &q),
            FormattedAnswer::Lines(vec!["Banana".into()])
        );
    }

    #[test]
    fn scale_renders_value_max_and_labels() {
        let q = Question::new("rate", QuestionType::Scale)
            .with_scale(ScaleBounds::new(1, 10).with_labels("Low", "High"));
        assert_eq!(
            format_answer(&AnswerValue::Number(7.0), &q),
            FormattedAnswer::Text("7/10 (1=Low, 10=High)".into())
        );
    }

    #[test]
    fn scale_without_labels_renders_value_over_max() {
        let q = Question::new("rate", QuestionType::Scale).with_scale(ScaleBounds::new(1, 5));
        assert_eq!(
            format_answer(&AnswerValue::Number(3.0), &q),
            FormattedAnswer::Text("3/5".into())
        );
    }

    #[test]
    fn single_choice_maps_to_label_with_raw_fallback() {
        let q = Question::new("pick", QuestionType::Radio)
            .with_options(vec![QuestionOption::new("y", "Yes, definitely")]);
        assert_eq!(
            format_answer(&AnswerValue::Text("y".into()), &q),
            FormattedAnswer::Text("Yes, definitely".into())
        );
        assert_eq!(
            format_answer(&AnswerValue::Text("unknown".into()), &q),
            FormattedAnswer::Text("unknown".into())
        );
    }

    #[test]
    fn checkbox_renders_checked_state() {
        let q = Question::new("agree", QuestionType::Checkbox);
        assert_eq!(
            format_answer(&AnswerValue::Bool(true), &q),
            FormattedAnswer::Text("Checked".into())
        );
        assert_eq!(
            format_answer(&AnswerValue::Bool(false), &q),
            FormattedAnswer::Text("Unchecked".into())
        );
    }

    #[test]
    fn default_conversion_strips_one_quote_layer() {
        let q = Question::new("free", QuestionType::TextShort);
        assert_eq!(
            format_answer(&AnswerValue::Text("\"quoted\"".into()), &q),
            FormattedAnswer::Text("quoted".into())
        );
    }

    #[test]
    fn export_skips_section_headings_for_single_section() {
        let sections = vec![ExportSection {
            heading: "Only".into(),
            entries: vec![("Q1".into(), FormattedAnswer::Text("A1".into()))],
        }];
        let text = export_assessment("My Assessment", &sections);
        assert!(text.starts_with("# My Assessment\n\n"));
        assert!(!text.contains("## Only"));
        assert!(text.contains("### Q1\n\nA1\n"));
    }

    #[test]
    fn export_renders_lists_and_unanswered() {
        let sections = vec![
            ExportSection {
                heading: "One".into(),
                entries: vec![(
                    "Ranked".into(),
                    FormattedAnswer::Lines(vec!["1. A".into(), "2. B".into()]),
                )],
            },
            ExportSection {
                heading: "Two".into(),
                entries: vec![("Blank".into(), FormattedAnswer::Text(String::new()))],
            },
        ];
        let text = export_assessment("T", &sections);
        assert!(text.contains("## One"));
        assert!(text.contains("- 1. A\n- 2. B\n"));
        assert!(text.contains("Not answered"));
    }
}
