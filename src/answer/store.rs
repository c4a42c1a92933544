use super::Value;
use ahash::AHashMap;

/// Session-scoped storage for collected answers, keyed by
/// `(page index, question index)`.
///
/// The store is owned by a single traversal session and discarded with it.
/// Recording the same slot twice replaces the earlier answer, mirroring a
/// form input being edited.
#[derive(Debug, Clone, Default)]
pub struct AnswerStore {
    answers: AHashMap<(usize, usize), Value>,
}

impl AnswerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records (or replaces) the answer for a question slot.
    pub fn record(&mut self, page: usize, question: usize, value: Value) {
        self.answers.insert((page, question), value);
    }

    /// Flips one label in a multi-select answer slot.
    ///
    /// A missing or scalar slot is replaced by a set holding just `label`;
    /// toggling a label that is already present removes it again. The set
    /// keeps selection order.
    pub fn toggle(&mut self, page: usize, question: usize, label: &str) {
        let key = (page, question);
        let mut labels = match self.answers.remove(&key) {
            Some(Value::Many(labels)) => labels,
            _ => Vec::new(),
        };
        if let Some(position) = labels.iter().position(|l| l == label) {
            labels.remove(position);
        } else {
            labels.push(label.to_string());
        }
        self.answers.insert(key, Value::Many(labels));
    }

    pub fn get(&self, page: usize, question: usize) -> Option<&Value> {
        self.answers.get(&(page, question))
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Iterates over all recorded slots in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&(usize, usize), &Value)> {
        self.answers.iter()
    }
}
