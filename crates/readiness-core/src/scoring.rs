//! Per-category scoring.
//!
//! A category score is the weighted sum of chosen option indices over the
//! weighted sum of option counts, scaled to 0-100. Free-text and unanswered
//! questions are left out of both sides; a category with nothing numeric
//! scores 0.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::ScoringError;
use crate::model::{Catalog, Category, Response};

/// Denominator every section score is expressed against.
pub const MAX_SCORE: u32 = 100;

/// Normalized score for one catalog category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionScore {
    /// Category identifier.
    pub category_id: String,
    /// Normalized score in `0..=100`.
    pub score: u32,
    /// Always [`MAX_SCORE`].
    pub max_score: u32,
    /// Qualitative reading of the score for this category.
    pub interpretation: String,
}

/// Round half up, clamping negatives and non-finite values to 0.
pub fn round_half_up(x: f64) -> u32 {
    if !x.is_finite() || x <= 0.0 {
        return 0;
    }
    (x + 0.5).floor() as u32
}

/// Collapse a response list so the last response per question wins.
///
/// A superseding response takes the position of the one it replaces at the
/// end of the list, matching how the collector re-appends edited answers.
pub fn latest_responses(responses: &[Response]) -> Vec<&Response> {
    let last: HashMap<&str, usize> = responses
        .iter()
        .enumerate()
        .map(|(i, r)| (r.question_id.as_str(), i))
        .collect();

    responses
        .iter()
        .enumerate()
        .filter(|(i, r)| last.get(r.question_id.as_str()) == Some(i))
        .map(|(_, r)| r)
        .collect()
}

/// Responses keyed by question id, later entries superseding earlier ones.
#[derive(Debug, Clone, Default)]
pub struct ResponseIndex<'a> {
    by_question: HashMap<&'a str, &'a Response>,
}

impl<'a> ResponseIndex<'a> {
    pub fn new(responses: &'a [Response]) -> Self {
        let by_question = responses
            .iter()
            .map(|r| (r.question_id.as_str(), r))
            .collect();
        Self { by_question }
    }

    pub fn get(&self, question_id: &str) -> Option<&'a Response> {
        self.by_question.get(question_id).copied()
    }

    pub fn len(&self) -> usize {
        self.by_question.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_question.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Response> + '_ {
        self.by_question.values().copied()
    }
}

/// Score one category against an already-collapsed response index.
pub fn score_category(category: &Category, responses: &ResponseIndex<'_>) -> SectionScore {
    let mut total = 0.0f64;
    let mut max_possible = 0.0f64;

    for question in &category.questions {
        let Some(index) = responses.get(&question.id).and_then(|r| r.value.as_index()) else {
            continue;
        };
        let weight = question.weight();
        total += f64::from(index) * weight;
        max_possible += question.option_count() as f64 * weight;
    }

    let score = if max_possible > 0.0 {
        round_half_up(100.0 * total / max_possible).min(MAX_SCORE)
    } else {
        0
    };

    tracing::debug!(
        category = %category.id,
        total,
        max_possible,
        score,
        "scored category"
    );

    SectionScore {
        category_id: category.id.clone(),
        score,
        max_score: MAX_SCORE,
        interpretation: category.interpretation.for_score(score).to_string(),
    }
}

/// Score a category by id.
///
/// Fails with [`ScoringError::UnknownCategory`] when the catalog does not
/// define `category_id`.
pub fn section_score(
    catalog: &Catalog,
    category_id: &str,
    responses: &[Response],
) -> Result<SectionScore, ScoringError> {
    let category = catalog
        .category(category_id)
        .ok_or_else(|| ScoringError::UnknownCategory(category_id.to_string()))?;
    Ok(score_category(category, &ResponseIndex::new(responses)))
}

/// Score every catalog category, in catalog order.
pub fn score_all(catalog: &Catalog, responses: &ResponseIndex<'_>) -> Vec<SectionScore> {
    catalog
        .categories
        .iter()
        .map(|c| score_category(c, responses))
        .collect()
}
