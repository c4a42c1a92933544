use thiserror::Error;

/// Defects in a single question definition.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuestionError {
    #[error("prompt text is empty")]
    MissingText,

    #[error("no selectable options defined")]
    NoOptions,
}

/// Structural defects found while validating a flow definition.
///
/// Validation findings are advisory: they are reported to the editor so the
/// edit can be rejected or flagged, but a flow carrying them is still
/// traversable (the engine treats e.g. a dangling route as "no match").
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("question {question_index} on page '{page_id}': {source}")]
    Question {
        page_id: String,
        question_index: usize,
        source: QuestionError,
    },

    #[error("page '{page_id}' routes to unknown page '{next_page_id}'")]
    DanglingRoute {
        page_id: String,
        next_page_id: String,
    },

    #[error("page id '{page_id}' is used by more than one page")]
    DuplicatePageId { page_id: String },

    #[error(
        "a condition on page '{page_id}' references question {question_index}, but the page holds {question_count} question(s)"
    )]
    ConditionOutOfRange {
        page_id: String,
        question_index: usize,
        question_count: usize,
    },
}

/// An out-of-range page reference passed into the engine.
///
/// Unlike a [`ValidationError`] this indicates a bug in the calling code, not
/// in user-authored flow data, and is not recoverable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("page index {index} is out of range for a flow with {page_count} page(s)")]
pub struct IndexError {
    pub index: usize,
    pub page_count: usize,
}

/// Failures in the persistence collaborator.
///
/// These never originate from the traversal engine itself; callers surface
/// them as soft, retryable conditions.
#[derive(Error, Debug, Clone)]
pub enum StoreError {
    #[error("flow '{0}' not found")]
    NotFound(String),

    #[error("flow '{0}' already exists")]
    Duplicate(String),

    #[error("flow document has no string 'id' field")]
    MissingId,

    #[error("flow document could not be decoded: {0}")]
    Codec(String),
}
