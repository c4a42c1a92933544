use crate::error::QuestionError;
use serde::{Deserialize, Serialize};

/// One input prompt on a page.
///
/// The variant tag is carried in the stored JSON as `inputType`, with
/// camelCase attribute names, so documents written by the builder UI
/// deserialize directly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(
    tag = "inputType",
    rename_all = "kebab-case",
    rename_all_fields = "camelCase"
)]
pub enum Question {
    /// Numeric input. Out-of-bounds answers surface the matching outcome
    /// message in the run summary.
    Number {
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        low_outcome: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        high_outcome: Option<String>,
    },
    /// Free-text input.
    Text {
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        placeholder: Option<String>,
    },
    /// A list of choice buttons; multi-select answers are string sets.
    MultipleChoice {
        text: String,
        #[serde(default)]
        answers: Vec<String>,
        #[serde(default)]
        allow_multiple_answers: bool,
    },
    /// Check-any-that-apply; the answer is always a string set.
    Checkbox {
        text: String,
        #[serde(default)]
        options: Vec<String>,
    },
    /// Single selection from a dropdown list.
    Dropdown {
        text: String,
        #[serde(default)]
        options: Vec<String>,
    },
    /// Date picker; the answer is an ISO date string.
    Calendar { text: String },
    /// Display-only block (title plus body); never collected as an answer.
    StaticText {
        text: String,
        #[serde(default)]
        body: String,
    },
}

impl Question {
    /// The prompt text (the title, for a static block).
    pub fn text(&self) -> &str {
        match self {
            Question::Number { text, .. }
            | Question::Text { text, .. }
            | Question::MultipleChoice { text, .. }
            | Question::Checkbox { text, .. }
            | Question::Dropdown { text, .. }
            | Question::Calendar { text }
            | Question::StaticText { text, .. } => text,
        }
    }

    /// True for display-only blocks that collect no answer.
    pub fn is_static(&self) -> bool {
        matches!(self, Question::StaticText { .. })
    }

    /// The selectable labels, for the variants that offer a fixed list.
    pub fn choice_labels(&self) -> Option<&[String]> {
        match self {
            Question::MultipleChoice { answers, .. } => Some(answers),
            Question::Checkbox { options, .. } | Question::Dropdown { options, .. } => {
                Some(options)
            }
            _ => None,
        }
    }

    /// Checks the structural invariants of a single question.
    pub fn validate(&self) -> Result<(), QuestionError> {
        if !self.is_static() && self.text().trim().is_empty() {
            return Err(QuestionError::MissingText);
        }
        if let Some(labels) = self.choice_labels() {
            if labels.is_empty() {
                return Err(QuestionError::NoOptions);
            }
        }
        Ok(())
    }
}
