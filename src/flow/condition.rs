use crate::answer::Value;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Comparison symbol used by pre- and post-conditions. Defaults to `=`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Operator {
    #[default]
    #[serde(rename = "=")]
    Equal,
    #[serde(rename = ">")]
    GreaterThan,
    #[serde(rename = "<")]
    SmallerThan,
    #[serde(rename = ">=")]
    GreaterThanOrEqual,
    #[serde(rename = "<=")]
    SmallerThanOrEqual,
}

impl Operator {
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Equal => "=",
            Operator::GreaterThan => ">",
            Operator::SmallerThan => "<",
            Operator::GreaterThanOrEqual => ">=",
            Operator::SmallerThanOrEqual => "<=",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Gates entry to the page that owns it.
///
/// `question_index` points into the questions of `source_page`; when
/// `source_page` is absent the answer slot of the page currently being
/// gated is read instead, which is how documents written before the field
/// existed behave.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PreCondition {
    pub question_index: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_page: Option<usize>,
    pub expected_value: Value,
    #[serde(default)]
    pub operator: Operator,
}

impl fmt::Display for PreCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.source_page {
            Some(page) => write!(
                f,
                "question {} on page {} {} {}",
                self.question_index + 1,
                page + 1,
                self.operator,
                self.expected_value
            ),
            None => write!(
                f,
                "question {} {} {}",
                self.question_index + 1,
                self.operator,
                self.expected_value
            ),
        }
    }
}

/// The comparison half of a [`PostCondition`]; `question_index` points into
/// the owning page's own questions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RouteCondition {
    pub question_index: usize,
    pub value: Value,
    #[serde(default)]
    pub operator: Operator,
}

impl fmt::Display for RouteCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "question {} {} {}",
            self.question_index + 1,
            self.operator,
            self.value
        )
    }
}

/// Selects a branch out of the page that owns it. A page's post-conditions
/// are kept in authored order; the first satisfied one wins.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PostCondition {
    pub condition: RouteCondition,
    pub next_page_id: String,
}

impl fmt::Display for PostCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "if {}, go to page '{}'", self.condition, self.next_page_id)
    }
}
