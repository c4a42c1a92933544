use super::{PostCondition, PreCondition, Question};
use serde::{Deserialize, Serialize};

/// One screen's worth of questions plus the routing conditions attached to
/// it, identified by a stable string `id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub questions: Vec<Question>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pre_conditions: Vec<PreCondition>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub post_conditions: Vec<PostCondition>,
}

impl Page {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            questions: Vec::new(),
            pre_conditions: Vec::new(),
            post_conditions: Vec::new(),
        }
    }
}
