use super::{AnswerStore, Value};
use serde::{Deserialize, Serialize};
use std::fs;

/// One pre-recorded answer for a question slot.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ScriptedAnswer {
    pub page: usize,
    pub question: usize,
    pub value: Value,
}

/// A pre-recorded set of answers, matching the expected JSON format for
/// non-interactive runs.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct AnswerScript {
    pub answers: Vec<ScriptedAnswer>,
}

impl AnswerScript {
    /// Load an answer script from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        let script = serde_json::from_str(&content)?;
        Ok(script)
    }

    /// Copies every scripted answer into a fresh store.
    pub fn to_store(&self) -> AnswerStore {
        let mut store = AnswerStore::new();
        for answer in &self.answers {
            store.record(answer.page, answer.question, answer.value.clone());
        }
        store
    }
}
