//! Scoring and catalog error types.
//!
//! Missing data is never an error here: a category or axis with no numeric
//! responses scores 0. These variants cover catalog/engine mismatches and
//! answers the collector refuses to record.

use thiserror::Error;

/// Errors raised while scoring or collecting responses.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScoringError {
    /// A category identifier that the catalog does not define.
    #[error("category not found in catalog: {0}")]
    UnknownCategory(String),

    /// A question identifier that the catalog does not define.
    #[error("question not found in catalog: {0}")]
    UnknownQuestion(String),

    /// The answer does not fit the question's kind or option count.
    #[error("invalid answer for {question_id}: {reason}")]
    InvalidAnswer { question_id: String, reason: String },

    /// A cursor position outside the catalog.
    #[error("no question at section {section}, question {question}")]
    OutOfRange { section: usize, question: usize },

    /// The collector already holds a result; restart before recording more.
    #[error("assessment is already complete")]
    AlreadyComplete,
}

/// Structural problems that make a catalog unusable.
#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("catalog defines no categories")]
    Empty,

    #[error("category '{0}' has no questions")]
    EmptyCategory(String),

    #[error("duplicate category id: {0}")]
    DuplicateCategory(String),

    #[error("duplicate question id: {0}")]
    DuplicateQuestion(String),

    #[error("question '{question_id}' has weight {weight}; weights must be finite and positive")]
    InvalidWeight { question_id: String, weight: f64 },

    #[error("free-text question '{0}' must not define options")]
    OptionsOnFreeText(String),
}
