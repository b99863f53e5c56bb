//! readiness-core: question catalog, scoring engine, and classification rules.
//!
//! This crate defines the catalog data model, the pure scoring functions that
//! turn a frozen list of responses into an assessment result, and the
//! collection state machine that accumulates those responses.

pub mod catalog;
pub mod classifier;
pub mod collector;
pub mod config;
pub mod engine;
pub mod error;
pub mod model;
pub mod narrative;
pub mod parser;
pub mod profile;
pub mod report;
pub mod scoring;

pub use engine::ScoringEngine;
pub use error::{CatalogError, ScoringError};
pub use model::{AnswerValue, Catalog, Category, Question, QuestionKind, Response};
pub use report::{AssessmentReport, AssessmentResult};
