//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types from the flowmaster
//! crate. Import this module to get access to the core functionality without
//! having to import each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! // Use the prelude to get easy access to all the core types.
//! use flowmaster::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! // Load a stored flow document and walk it
//! let flow_json = std::fs::read_to_string("path/to/flow.json")?;
//! let flow: Flow = serde_json::from_str(&flow_json)?;
//!
//! let findings = flow.validate();
//! assert!(findings.is_empty());
//!
//! let mut session = Session::start(&flow);
//! session.answer(0, Value::Number(7.0));
//! session.advance()?;
//!
//! println!("Route so far:\n{}", TraceFormatter::format_trace(&flow, session.trace()));
//! # Ok(())
//! # }
//! ```

// Flow model
pub use crate::flow::{Flow, Operator, Page, PostCondition, PreCondition, Question, RouteCondition};

// Answers
pub use crate::answer::{AnswerScript, AnswerStore, ScriptedAnswer, Value};

// Traversal engine and play-mode session
pub use crate::engine::{
    AnswerEntry, NextPage, PageSummary, RouteOutcome, Router, RunSummary, Session, State,
};

// Persistence collaborator
pub use crate::store::{FlowDocument, FlowStore, MemoryStore};

// Error types
pub use crate::error::{IndexError, QuestionError, StoreError, ValidationError};

// Trace formatting
pub use crate::trace::{RouteStep, RouteTrace, TraceFormatter};

// Standard library re-exports commonly used with this crate
pub use std::collections::HashMap;
pub use std::path::Path;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
