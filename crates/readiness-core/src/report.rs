//! Assessment result types with JSON persistence.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::classifier::Recommendation;
use crate::model::{Catalog, Response};
use crate::profile::AxisProfile;
use crate::scoring::SectionScore;

/// The scored outcome of one completed response set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentResult {
    /// Optional respondent identifier.
    #[serde(default)]
    pub respondent: Option<String>,
    /// One score per catalog category, in catalog order.
    pub section_scores: Vec<SectionScore>,
    pub profile: AxisProfile,
    /// Rounded mean of all section scores.
    pub overall_score: u32,
    pub recommendation: Recommendation,
    pub personalized_feedback: String,
    pub next_steps: Vec<String>,
    pub career_recommendations: Vec<String>,
    pub learning_path: String,
    pub completed_at: DateTime<Utc>,
}

impl AssessmentResult {
    /// Section score for a category, if the catalog defined it.
    pub fn section(&self, category_id: &str) -> Option<&SectionScore> {
        self.section_scores
            .iter()
            .find(|s| s.category_id == category_id)
    }
}

/// Summary of a catalog (without the full question definitions).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSummary {
    pub id: String,
    pub title: String,
    pub category_count: usize,
    pub question_count: usize,
}

impl From<&Catalog> for CatalogSummary {
    fn from(catalog: &Catalog) -> Self {
        Self {
            id: catalog.id.clone(),
            title: catalog.title.clone(),
            category_count: catalog.categories.len(),
            question_count: catalog.total_questions(),
        }
    }
}

/// A saved assessment: the result plus the responses that produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    pub catalog: CatalogSummary,
    /// The frozen response list that was scored.
    pub responses: Vec<Response>,
    pub result: AssessmentResult,
}

impl AssessmentReport {
    pub fn new(catalog: &Catalog, responses: Vec<Response>, result: AssessmentResult) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            catalog: CatalogSummary::from(catalog),
            responses,
            result,
        }
    }

    /// Number of distinct questions answered.
    pub fn answered(&self) -> usize {
        crate::scoring::latest_responses(&self.responses).len()
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: AssessmentReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }
}
