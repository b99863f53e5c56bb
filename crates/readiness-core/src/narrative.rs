//! Template-based guidance text.
//!
//! Everything here is a pure function of the section scores, the axis
//! profile, and the recommendation tier.

use serde::{Deserialize, Serialize};

use crate::catalog::{COGNITIVE, PERSONALITY, TECHNICAL};
use crate::classifier::Recommendation;
use crate::profile::AxisProfile;
use crate::scoring::SectionScore;

/// Categories at or above this score are named as strengths.
pub const STRENGTH_THRESHOLD: u32 = 70;
/// Categories below this score are named as weaknesses.
pub const WEAKNESS_THRESHOLD: u32 = 50;

/// Generated guidance for one result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guidance {
    pub feedback: String,
    pub next_steps: Vec<String>,
    pub careers: Vec<String>,
    pub learning_path: String,
}

/// Build all guidance for a scored assessment.
pub fn generate_guidance(
    scores: &[SectionScore],
    profile: &AxisProfile,
    tier: Recommendation,
) -> Guidance {
    Guidance {
        feedback: personalized_feedback(scores, profile, tier),
        next_steps: next_steps(tier).iter().map(|s| s.to_string()).collect(),
        careers: career_recommendations(scores, profile),
        learning_path: learning_path(tier).to_string(),
    }
}

fn strengths(scores: &[SectionScore]) -> Vec<&str> {
    scores
        .iter()
        .filter(|s| s.score >= STRENGTH_THRESHOLD)
        .map(|s| s.category_id.as_str())
        .collect()
}

fn weaknesses(scores: &[SectionScore]) -> Vec<&str> {
    scores
        .iter()
        .filter(|s| s.score < WEAKNESS_THRESHOLD)
        .map(|s| s.category_id.as_str())
        .collect()
}

/// Feedback paragraph naming strengths and weaknesses.
pub fn personalized_feedback(
    scores: &[SectionScore],
    profile: &AxisProfile,
    tier: Recommendation,
) -> String {
    let strengths = strengths(scores);
    let weaknesses = weaknesses(scores);
    let mut feedback = String::new();

    match tier {
        Recommendation::Proceed => {
            feedback.push_str("You show strong potential for graphic design success! ");
            if !strengths.is_empty() {
                feedback.push_str(&format!(
                    "Your strongest areas are {}. ",
                    strengths.join(", ")
                ));
            }
            if weaknesses.is_empty() {
                feedback.push_str(
                    "You have a well-rounded profile that aligns excellently with design careers.",
                );
            } else {
                feedback.push_str(&format!(
                    "Focus on developing your {} skills to maximize your potential.",
                    weaknesses.join(" and ")
                ));
            }
        }
        Recommendation::ExploreWithCaution => {
            feedback.push_str(
                "You have some good foundations for graphic design, but there are areas that need attention. ",
            );
            if profile.interest >= 60 {
                feedback.push_str("Your interest level is promising. ");
            }
            if !weaknesses.is_empty() {
                feedback.push_str(&format!(
                    "Consider strengthening your {} before committing fully to design studies.",
                    weaknesses.join(" and ")
                ));
            }
        }
        Recommendation::Reconsider => {
            feedback.push_str(
                "Based on your responses, graphic design may not be the best fit for you right now. ",
            );
            if profile.interest < 50 {
                feedback.push_str(
                    "Your interest level suggests you might find more fulfillment in other fields. ",
                );
            }
            feedback.push_str(
                "Consider exploring related creative fields or developing foundational skills before revisiting design.",
            );
        }
    }

    feedback.trim_end().to_string()
}

const PROCEED_STEPS: &[&str] = &[
    "Start with basic design principles course (typography, color theory, layout)",
    "Learn industry-standard tools: Figma, Adobe Creative Suite",
    "Build a portfolio with 3-5 personal projects",
    "Join design communities (Dribbble, Behance, Design Twitter)",
    "Consider specializing in UI/UX, branding, or print design",
];

const EXPLORE_STEPS: &[&str] = &[
    "Take a beginner design fundamentals course",
    "Experiment with free tools like Canva and Figma",
    "Complete design challenges to test your interest",
    "Shadow a designer or take informational interviews",
    "Reassess after 3-6 months of exploration",
];

const RECONSIDER_STEPS: &[&str] = &[
    "Explore adjacent creative fields (content strategy, marketing)",
    "Develop visual literacy through design appreciation",
    "Consider design thinking for problem-solving in other fields",
    "Focus on your stronger areas of interest and aptitude",
];

/// The fixed next-step list for a tier.
pub fn next_steps(tier: Recommendation) -> &'static [&'static str] {
    match tier {
        Recommendation::Proceed => PROCEED_STEPS,
        Recommendation::ExploreWithCaution => EXPLORE_STEPS,
        Recommendation::Reconsider => RECONSIDER_STEPS,
    }
}

/// Inputs the career rules look at.
#[derive(Debug, Clone, Copy)]
pub struct CareerSignals {
    pub technical: u32,
    pub cognitive: u32,
    pub personality: u32,
    pub interest_axis: u32,
}

impl CareerSignals {
    /// Missing categories read as 0.
    pub fn from_scores(scores: &[SectionScore], profile: &AxisProfile) -> Self {
        let score_of = |id: &str| {
            scores
                .iter()
                .find(|s| s.category_id == id)
                .map(|s| s.score)
                .unwrap_or(0)
        };
        Self {
            technical: score_of(TECHNICAL),
            cognitive: score_of(COGNITIVE),
            personality: score_of(PERSONALITY),
            interest_axis: profile.interest,
        }
    }
}

/// One row of the career table. Every matching row contributes its labels.
pub struct CareerRule {
    pub labels: &'static [&'static str],
    pub condition: &'static str,
    matches: fn(&CareerSignals) -> bool,
}

impl CareerRule {
    pub fn matches(&self, signals: &CareerSignals) -> bool {
        (self.matches)(signals)
    }
}

pub const CAREER_RULES: &[CareerRule] = &[
    CareerRule {
        labels: &["UI/UX Designer", "Web Designer"],
        condition: "technical >= 70 && cognitive >= 70",
        matches: |s| s.technical >= 70 && s.cognitive >= 70,
    },
    CareerRule {
        labels: &["Brand Designer", "Creative Director"],
        condition: "personality >= 70 && interest axis >= 70",
        matches: |s| s.personality >= 70 && s.interest_axis >= 70,
    },
    CareerRule {
        labels: &["Graphic Designer", "Visual Content Creator"],
        condition: "cognitive >= 60",
        matches: |s| s.cognitive >= 60,
    },
];

/// Labels suggested when no career rule fires.
pub const DEFAULT_CAREERS: &[&str] = &[
    "Design Assistant",
    "Marketing Coordinator",
    "Content Strategist",
];

/// Career labels from [`CAREER_RULES`], or [`DEFAULT_CAREERS`].
pub fn career_recommendations(scores: &[SectionScore], profile: &AxisProfile) -> Vec<String> {
    let signals = CareerSignals::from_scores(scores, profile);
    let mut careers: Vec<String> = Vec::new();

    for rule in CAREER_RULES.iter().filter(|r| r.matches(&signals)) {
        tracing::debug!(condition = rule.condition, "career rule matched");
        for label in rule.labels {
            if !careers.iter().any(|c| c == label) {
                careers.push(label.to_string());
            }
        }
    }

    if careers.is_empty() {
        careers = DEFAULT_CAREERS.iter().map(|s| s.to_string()).collect();
    }
    careers
}

/// Learning-path label for a tier.
pub fn learning_path(tier: Recommendation) -> &'static str {
    match tier {
        Recommendation::Proceed => {
            "Professional Track: 6-12 month intensive program → Portfolio development → Job placement"
        }
        Recommendation::ExploreWithCaution => {
            "Exploration Track: 3-6 month fundamentals → Assessment → Decide on continuation"
        }
        Recommendation::Reconsider => {
            "Alternative Path: Focus on complementary skills in related creative fields"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::MAX_SCORE;

    fn score(id: &str, value: u32) -> SectionScore {
        SectionScore {
            category_id: id.into(),
            score: value,
            max_score: MAX_SCORE,
            interpretation: String::new(),
        }
    }

    fn scores(values: &[(&str, u32)]) -> Vec<SectionScore> {
        values.iter().map(|(id, v)| score(id, *v)).collect()
    }

    fn interest(value: u32) -> AxisProfile {
        AxisProfile {
            interest: value,
            ..Default::default()
        }
    }

    #[test]
    fn proceed_feedback_names_strengths_and_weaknesses() {
        let s = scores(&[("interest", 90), ("cognitive", 80), ("technical", 40)]);
        let text = personalized_feedback(&s, &interest(80), Recommendation::Proceed);
        assert!(text.contains("Your strongest areas are interest, cognitive."));
        assert!(text.contains("Focus on developing your technical skills"));
    }

    #[test]
    fn proceed_feedback_well_rounded() {
        let s = scores(&[("interest", 90), ("cognitive", 80)]);
        let text = personalized_feedback(&s, &interest(80), Recommendation::Proceed);
        assert!(text.ends_with("aligns excellently with design careers."));
    }

    #[test]
    fn explore_feedback_mentions_interest_and_joins_weaknesses() {
        let s = scores(&[("interest", 65), ("technical", 30), ("motivation", 45)]);
        let text = personalized_feedback(&s, &interest(60), Recommendation::ExploreWithCaution);
        assert!(text.contains("Your interest level is promising."));
        assert!(text.contains("Consider strengthening your technical and motivation"));

        let text = personalized_feedback(&s, &interest(59), Recommendation::ExploreWithCaution);
        assert!(!text.contains("promising"));
    }

    #[test]
    fn reconsider_feedback() {
        let text = personalized_feedback(&[], &interest(10), Recommendation::Reconsider);
        assert!(text.starts_with("Based on your responses"));
        assert!(text.contains("more fulfillment in other fields"));

        let text = personalized_feedback(&[], &interest(50), Recommendation::Reconsider);
        assert!(!text.contains("more fulfillment"));
    }

    #[test]
    fn next_steps_per_tier() {
        assert_eq!(next_steps(Recommendation::Proceed).len(), 5);
        assert_eq!(next_steps(Recommendation::ExploreWithCaution).len(), 5);
        assert_eq!(next_steps(Recommendation::Reconsider).len(), 4);
        assert_eq!(
            next_steps(Recommendation::ExploreWithCaution)[4],
            "Reassess after 3-6 months of exploration"
        );
    }

    #[test]
    fn careers_accumulate_in_rule_order() {
        let s = scores(&[("technical", 70), ("cognitive", 70), ("personality", 70)]);
        let careers = career_recommendations(&s, &interest(70));
        assert_eq!(
            careers,
            vec![
                "UI/UX Designer",
                "Web Designer",
                "Brand Designer",
                "Creative Director",
                "Graphic Designer",
                "Visual Content Creator",
            ]
        );
    }

    #[test]
    fn careers_fall_back_to_default() {
        let s = scores(&[("technical", 90), ("cognitive", 59), ("personality", 90)]);
        let careers = career_recommendations(&s, &interest(69));
        assert_eq!(careers, DEFAULT_CAREERS);
    }

    #[test]
    fn only_cognitive_rule() {
        let s = scores(&[("cognitive", 60)]);
        assert_eq!(
            career_recommendations(&s, &interest(0)),
            vec!["Graphic Designer", "Visual Content Creator"]
        );
    }

    #[test]
    fn learning_path_per_tier() {
        assert!(learning_path(Recommendation::Proceed).starts_with("Professional Track"));
        assert!(learning_path(Recommendation::ExploreWithCaution).starts_with("Exploration Track"));
        assert!(learning_path(Recommendation::Reconsider).starts_with("Alternative Path"));
    }

    #[test]
    fn guidance_is_deterministic() {
        let s = scores(&[("interest", 80), ("technical", 40)]);
        let p = interest(75);
        assert_eq!(
            generate_guidance(&s, &p, Recommendation::ExploreWithCaution),
            generate_guidance(&s, &p, Recommendation::ExploreWithCaution)
        );
    }
}
