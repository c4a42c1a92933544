//! # Flowmaster - Questionnaire Flow Traversal Engine
//!
//! **Flowmaster** is the traversal and conditional-branching engine behind a
//! page-based questionnaire builder. A flow is an ordered sequence of pages,
//! each holding typed questions plus optional routing conditions:
//! pre-conditions gate whether a page may be entered, post-conditions pick
//! the branch to follow when leaving it. The engine walks that structure
//! against a session's collected answers and decides, step by step, which
//! page comes next — or that the run is over.
//!
//! ## Core Workflow
//!
//! The engine is storage-agnostic. It operates on a canonical in-memory
//! [`Flow`](flow::Flow) value. The primary workflow is:
//!
//! 1.  **Load or build a flow**: Deserialize a stored JSON document into a
//!     `Flow` (the wire format matches the builder UI's camelCase
//!     documents), or assemble one with the consuming `with_*` builders.
//! 2.  **Validate**: [`Flow::validate`](flow::Flow::validate) reports
//!     structural defects (empty prompts, dangling routes) without
//!     preventing traversal — flows are routinely incomplete mid-edit.
//! 3.  **Walk**: Start a [`Session`](engine::Session), feed it answers as
//!     the end user provides them, and call `advance` to move between
//!     pages until the terminal `End` state.
//! 4.  **Report**: Read the [`RouteTrace`](trace::RouteTrace) for why the
//!     run went where it did, and the session's
//!     [`RunSummary`](engine::RunSummary) for the end-screen listing.
//!
//! ## Quick Start
//!
//! ```rust
//! use flowmaster::prelude::*;
//!
//! fn main() -> Result<()> {
//!     // A two-page flow: the first page branches to the second when the
//!     // numeric answer is below six.
//!     let flow = Flow::new("sleep-check", "Sleep check", "Short sleep intake")
//!         .with_page(Page::new("p0", "Basics"))
//!         .with_page(Page::new("p1", "Follow-up"))
//!         .with_question(
//!             0,
//!             Question::Number {
//!                 text: "How many hours do you sleep per night?".to_string(),
//!                 min: None,
//!                 max: None,
//!                 low_outcome: None,
//!                 high_outcome: None,
//!             },
//!         )?
//!         .with_post_condition(
//!             0,
//!             PostCondition {
//!                 condition: RouteCondition {
//!                     question_index: 0,
//!                     value: Value::Number(6.0),
//!                     operator: Operator::SmallerThan,
//!                 },
//!                 next_page_id: "p1".to_string(),
//!             },
//!         )?;
//!
//!     assert!(flow.validate().is_empty());
//!
//!     let mut session = Session::start(&flow);
//!     session.answer(0, Value::Number(5.0));
//!     session.advance()?;
//!
//!     // Five hours is below six, so the follow-up page is active now.
//!     assert_eq!(session.current_page().map(|p| p.id.as_str()), Some("p1"));
//!
//!     // The follow-up page has no routes of its own: the run ends there.
//!     session.advance()?;
//!     assert!(session.is_ended());
//!
//!     Ok(())
//! }
//! ```

pub mod answer;
pub mod engine;
pub mod error;
pub mod flow;
pub mod prelude;
pub mod store;
pub mod trace;
