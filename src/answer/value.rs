use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

use itertools::Itertools;

/// A collected answer, or the expected value of a condition.
///
/// The untagged representation maps directly onto the stored JSON: a bare
/// number, a bare string (text, single choice, ISO date), or an array of
/// strings for multi-select answers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Value {
    Number(f64),
    Text(String),
    Many(Vec<String>),
}

// Manual implementation to handle f64
impl Eq for Value {}

// Manual implementation to handle f64 by hashing its bits
impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        core::mem::discriminant(self).hash(state);
        match self {
            Value::Number(n) => n.to_bits().hash(state),
            Value::Text(s) => s.hash(state),
            Value::Many(labels) => labels.hash(state),
        }
    }
}

impl Value {
    /// Returns the numeric payload, if this value is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// True for the empty multi-select set; scalar values are never empty.
    pub fn is_empty(&self) -> bool {
        matches!(self, Value::Many(labels) if labels.is_empty())
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<Vec<String>> for Value {
    fn from(labels: Vec<String>) -> Self {
        Value::Many(labels)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => {
                if n.fract() == 0.0 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }
            Value::Text(s) => write!(f, "{}", s),
            Value::Many(labels) => write!(f, "{}", labels.iter().join(", ")),
        }
    }
}
