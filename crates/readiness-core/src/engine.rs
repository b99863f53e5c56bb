//! Assessment scoring orchestrator.
//!
//! Turns a frozen response list into an [`AssessmentResult`]: section
//! scores, axis profile, overall score, recommendation tier, and guidance.
//! The engine holds no state beyond a borrowed catalog.

use chrono::{DateTime, Utc};

use crate::classifier::classify;
use crate::error::ScoringError;
use crate::model::{Catalog, Response};
use crate::narrative::generate_guidance;
use crate::profile::{axis_profile, AxisProfile};
use crate::report::AssessmentResult;
use crate::scoring::{round_half_up, score_all, section_score, ResponseIndex, SectionScore};

/// Scores response sets against one catalog.
#[derive(Debug, Clone, Copy)]
pub struct ScoringEngine<'a> {
    catalog: &'a Catalog,
}

impl<'a> ScoringEngine<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Score a single category by id.
    pub fn section_score(
        &self,
        category_id: &str,
        responses: &[Response],
    ) -> Result<SectionScore, ScoringError> {
        section_score(self.catalog, category_id, responses)
    }

    /// Compute the six-axis profile.
    pub fn axis_profile(&self, responses: &[Response]) -> AxisProfile {
        axis_profile(self.catalog, &ResponseIndex::new(responses))
    }

    /// Score a completed response list, stamped with the current time.
    pub fn evaluate(&self, responses: &[Response]) -> AssessmentResult {
        self.evaluate_at(responses, Utc::now())
    }

    /// Score a completed response list with an explicit completion time.
    pub fn evaluate_at(
        &self,
        responses: &[Response],
        completed_at: DateTime<Utc>,
    ) -> AssessmentResult {
        let index = ResponseIndex::new(responses);
        tracing::debug!(
            responses = responses.len(),
            distinct = index.len(),
            catalog = %self.catalog.id,
            "scoring assessment"
        );

        let section_scores = score_all(self.catalog, &index);
        let profile = axis_profile(self.catalog, &index);
        let overall_score = overall_score(&section_scores);
        let recommendation = classify(overall_score, &profile);
        let guidance = generate_guidance(&section_scores, &profile, recommendation);

        tracing::info!(
            overall = overall_score,
            recommendation = %recommendation,
            "assessment scored"
        );

        AssessmentResult {
            respondent: None,
            section_scores,
            profile,
            overall_score,
            recommendation,
            personalized_feedback: guidance.feedback,
            next_steps: guidance.next_steps,
            career_recommendations: guidance.careers,
            learning_path: guidance.learning_path,
            completed_at,
        }
    }
}

/// Unweighted, rounded mean of section scores; 0 for an empty list.
pub fn overall_score(scores: &[SectionScore]) -> u32 {
    if scores.is_empty() {
        return 0;
    }
    let sum: u32 = scores.iter().map(|s| s.score).sum();
    round_half_up(f64::from(sum) / scores.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::Recommendation;
    use crate::scoring::MAX_SCORE;

    fn score(value: u32) -> SectionScore {
        SectionScore {
            category_id: "c".into(),
            score: value,
            max_score: MAX_SCORE,
            interpretation: String::new(),
        }
    }

    #[test]
    fn overall_is_rounded_mean() {
        assert_eq!(overall_score(&[]), 0);
        assert_eq!(overall_score(&[score(80), score(70)]), 75);
        // 149 / 2 = 74.5 -> 75
        assert_eq!(overall_score(&[score(75), score(74)]), 75);
        // 221 / 3 = 73.67 -> 74
        assert_eq!(overall_score(&[score(74), score(73), score(74)]), 74);
    }

    #[test]
    fn evaluate_mixed_responses() {
        let catalog = Catalog::builtin();
        let responses = vec![
            Response::new("int_1", 4u32),
            Response::new("int_2", 3u32),
            Response::new("mot_2", 3u32),
            Response::new("mot_4", "A quiet studio"),
        ];
        let result = ScoringEngine::new(catalog).evaluate(&responses);
        assert_eq!(result.section_scores.len(), 5);
        assert!(result.section_scores.iter().all(|s| s.score <= 100));
        assert_eq!(result.profile.interest, 70);
        assert_eq!(result.profile.persistence, 60);
        assert_eq!(result.recommendation, Recommendation::Reconsider);
        assert!(!result.next_steps.is_empty());
    }

    #[test]
    fn evaluate_at_uses_given_timestamp() {
        let at = "2024-01-02T03:04:05Z".parse::<DateTime<Utc>>().unwrap();
        let result = ScoringEngine::new(Catalog::builtin()).evaluate_at(&[], at);
        assert_eq!(result.completed_at, at);
    }

    #[test]
    fn section_score_through_engine() {
        let engine = ScoringEngine::new(Catalog::builtin());
        assert!(engine.section_score("interest", &[]).is_ok());
        assert!(engine.section_score("nope", &[]).is_err());
    }
}
