//! Question aggregate - the closed representation of a questionnaire item.
//!
//! Questions are authored externally and read-only to this core. The type
//! enumeration is closed on purpose: the validation builder, default-value
//! generator, and formatter all match exhaustively over it, so adding a
//! variant without updating them is a compile error.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Category, QuestionId};

/// The ten supported question types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    Radio,
    Select,
    SelectMultiple,
    Checkbox,
    CheckboxMultiple,
    TextShort,
    TextLong,
    Email,
    Number,
    Rank,
    Scale,
}

impl QuestionType {
    /// Returns true for types answered with an ordered or unordered list.
    pub fn is_list(&self) -> bool {
        matches!(
            self,
            QuestionType::SelectMultiple | QuestionType::CheckboxMultiple | QuestionType::Rank
        )
    }

    /// Returns true for types whose answer is one of the declared options.
    pub fn is_single_choice(&self) -> bool {
        matches!(self, QuestionType::Radio | QuestionType::Select)
    }
}

/// One selectable option of a choice-like question.
///
/// `points` feeds the pattern points calculation; options without points
/// contribute nothing to scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionOption {
    pub value: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<f64>,
}

impl QuestionOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            points: None,
        }
    }

    pub fn with_points(mut self, points: f64) -> Self {
        self.points = Some(points);
        self
    }
}

/// Bounds and endpoint labels of a scale question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleBounds {
    pub min: i64,
    pub max: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_label: Option<String>,
}

impl ScaleBounds {
    pub fn new(min: i64, max: i64) -> Self {
        Self {
            min,
            max,
            min_label: None,
            max_label: None,
        }
    }

    pub fn with_labels(mut self, min_label: impl Into<String>, max_label: impl Into<String>) -> Self {
        self.min_label = Some(min_label.into());
        self.max_label = Some(max_label.into());
        self
    }
}

/// A single questionnaire item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub text: String,
    pub question_type: QuestionType,
    /// Ordered option list; required for choice-like and rank types.
    #[serde(default)]
    pub options: Vec<QuestionOption>,
    /// Bounds for scale questions; None for every other type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<ScaleBounds>,
    pub is_required: bool,
    pub order: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    /// Free-text sub-grouping used by team-type assessments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    /// Hidden questions are excluded from validation, defaults, and
    /// submission but stay addressable by id for stored answers.
    #[serde(default)]
    pub is_hidden: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,
}

impl Question {
    /// Creates a minimal visible question; builder-style setters fill the rest.
    pub fn new(text: impl Into<String>, question_type: QuestionType) -> Self {
        Self {
            id: QuestionId::new(),
            text: text.into(),
            question_type,
            options: Vec::new(),
            scale: None,
            is_required: false,
            order: 0,
            category: None,
            topic: None,
            weight: None,
            max_length: None,
            is_hidden: false,
            help_text: None,
        }
    }

    pub fn with_id(mut self, id: QuestionId) -> Self {
        self.id = id;
        self
    }

    pub fn with_options(mut self, options: Vec<QuestionOption>) -> Self {
        self.options = options;
        self
    }

    pub fn with_scale(mut self, scale: ScaleBounds) -> Self {
        self.scale = Some(scale);
        self
    }

    pub fn required(mut self) -> Self {
        self.is_required = true;
        self
    }

    pub fn with_order(mut self, order: i32) -> Self {
        self.order = order;
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = Some(topic.into());
        self
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn hidden(mut self) -> Self {
        self.is_hidden = true;
        self
    }

    /// Resolves the grouping key: category display name, then topic, then
    /// the default "General" group.
    pub fn group_key(&self) -> String {
        if let Some(category) = self.category {
            return category.display_name().to_string();
        }
        if let Some(topic) = &self.topic {
            if !topic.trim().is_empty() {
                return topic.clone();
            }
        }
        super::DEFAULT_GROUP_LABEL.to_string()
    }

    /// Returns the option matching a stored value, if any.
    pub fn find_option(&self, value: &str) -> Option<&QuestionOption> {
        self.options.iter().find(|o| o.value == value)
    }

    /// Returns the option values in catalog order.
    pub fn option_values(&self) -> Vec<String> {
        self.options.iter().map(|o| o.value.clone()).collect()
    }
}
