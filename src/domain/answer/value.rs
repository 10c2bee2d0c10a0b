//! Typed answer values and their persisted JSON-string representation.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// The value of one answer, shaped by the question type.
///
/// Booleans back single checkboxes, strings back text and single-choice
/// types, numbers back `number`/`scale`, and lists back multi-select and
/// rank (order-significant for rank only).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Bool(bool),
    Number(f64),
    Text(String),
    List(Vec<String>),
}

impl AnswerValue {
    /// An empty text value, the default for text-like fields.
    pub fn empty() -> Self {
        AnswerValue::Text(String::new())
    }

    /// Returns true for values the submission pipeline treats as "no answer":
    /// empty text and empty lists. `Bool(false)` and `Number(0.0)` are real
    /// answers.
    pub fn is_empty(&self) -> bool {
        match self {
            AnswerValue::Text(s) => s.trim().is_empty(),
            AnswerValue::List(items) => items.is_empty(),
            AnswerValue::Bool(_) | AnswerValue::Number(_) => false,
        }
    }

    /// Short shape name used in validation messages.
    pub fn shape(&self) -> &'static str {
        match self {
            AnswerValue::Bool(_) => "boolean",
            AnswerValue::Number(_) => "number",
            AnswerValue::Text(_) => "text",
            AnswerValue::List(_) => "list",
        }
    }

    /// Serializes to the persisted representation (a JSON string).
    pub fn to_json_string(&self) -> String {
        // Serialization of these shapes cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Deserializes from the persisted representation.
    ///
    /// Lenient on purpose: legacy rows were sometimes stored as bare text
    /// rather than JSON, so unparsable input falls back to the raw string.
    pub fn from_json_str(raw: &str) -> Self {
        match serde_json::from_str::<JsonValue>(raw) {
            Ok(json) => Self::from_json(json).unwrap_or_else(|| AnswerValue::Text(raw.to_string())),
            Err(_) => AnswerValue::Text(raw.to_string()),
        }
    }

    fn from_json(json: JsonValue) -> Option<Self> {
        match json {
            JsonValue::Bool(b) => Some(AnswerValue::Bool(b)),
            JsonValue::Number(n) => n.as_f64().map(AnswerValue::Number),
            JsonValue::String(s) => Some(AnswerValue::Text(s)),
            JsonValue::Array(items) => {
                let strings: Option<Vec<String>> = items
                    .into_iter()
                    .map(|item| match item {
                        JsonValue::String(s) => Some(s),
                        JsonValue::Number(n) => Some(n.to_string()),
                        _ => None,
                    })
                    .collect();
                strings.map(AnswerValue::List)
            }
            JsonValue::Null | JsonValue::Object(_) => None,
        }
    }
}

impl From<&str> for AnswerValue {
    fn from(s: &str) -> Self {
        AnswerValue::Text(s.to_string())
    }
}

impl From<bool> for AnswerValue {
    fn from(b: bool) -> Self {
        AnswerValue::Bool(b)
    }
}

impl From<f64> for AnswerValue {
    fn from(n: f64) -> Self {
        AnswerValue::Number(n)
    }
}

impl From<Vec<&str>> for AnswerValue {
    fn from(items: Vec<&str>) -> Self {
        AnswerValue::List(items.into_iter().map(String::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_detection_per_shape() {
        assert!(AnswerValue::Text("  ".into()).is_empty());
        assert!(AnswerValue::List(vec![]).is_empty());
        assert!(!AnswerValue::Bool(false).is_empty());
        assert!(!AnswerValue::Number(0.0).is_empty());
    }

    #[test]
    fn round_trips_through_persisted_form() {
        let cases = vec![
            AnswerValue::Bool(true),
            AnswerValue::Number(7.0),
            AnswerValue::Text("hello".into()),
            AnswerValue::List(vec!["a".into(), "b".into()]),
        ];
        for value in cases {
            assert_eq!(AnswerValue::from_json_str(&value.to_json_string()), value);
        }
    }

    #[test]
    fn bare_legacy_text_falls_back_to_raw_string() {
        // Not valid JSON, but still a meaningful stored answer.
        assert_eq!(
            AnswerValue::from_json_str("plain old answer"),
            AnswerValue::Text("plain old answer".into())
        );
    }

    #[test]
    fn json_null_falls_back_to_raw_string() {
        assert_eq!(
            AnswerValue::from_json_str("null"),
            AnswerValue::Text("null".into())
        );
    }

    #[test]
    fn numeric_array_items_are_stringified() {
        assert_eq!(
            AnswerValue::from_json_str("[1,2]"),
            AnswerValue::List(vec!["1".into(), "2".into()])
        );
    }
}
