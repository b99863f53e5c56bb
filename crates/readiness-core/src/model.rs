//! Core data model types for readiness.
//!
//! A [`Catalog`] is an ordered list of categories, each holding typed
//! questions. Responses reference questions by id and carry either an option
//! index or free text.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Weight applied to questions that do not declare one.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// Option count assumed for a numeric question that defines no options.
pub const FALLBACK_OPTION_COUNT: usize = 5;

/// How a question is answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionKind {
    /// Ordered agreement/frequency scale; the answer is an option index.
    RatingScale,
    /// Pick one option; the answer is an option index.
    SingleChoice,
    /// Open answer; never scored.
    FreeText,
}

impl QuestionKind {
    /// Whether answers of this kind feed numeric scoring.
    pub fn is_numeric(self) -> bool {
        !matches!(self, QuestionKind::FreeText)
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionKind::RatingScale => write!(f, "rating-scale"),
            QuestionKind::SingleChoice => write!(f, "single-choice"),
            QuestionKind::FreeText => write!(f, "free-text"),
        }
    }
}

impl FromStr for QuestionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "rating-scale" | "rating" | "likert" => Ok(QuestionKind::RatingScale),
            "single-choice" | "choice" | "multiple-choice" => Ok(QuestionKind::SingleChoice),
            "free-text" | "text" | "scenario" => Ok(QuestionKind::FreeText),
            other => Err(format!("unknown question kind: {other}")),
        }
    }
}

/// Psychological framework a question is drawn from. Descriptive only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Framework {
    Big5,
    Holland,
    Grit,
    GrowthMindset,
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Framework::Big5 => write!(f, "big5"),
            Framework::Holland => write!(f, "holland"),
            Framework::Grit => write!(f, "grit"),
            Framework::GrowthMindset => write!(f, "growth-mindset"),
        }
    }
}

impl FromStr for Framework {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "big5" | "big-five" => Ok(Framework::Big5),
            "holland" => Ok(Framework::Holland),
            "grit" => Ok(Framework::Grit),
            "growth-mindset" => Ok(Framework::GrowthMindset),
            other => Err(format!("unknown framework: {other}")),
        }
    }
}

/// A single catalog question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// Stable identifier, unique across the catalog.
    pub id: String,
    /// Prompt shown to the respondent.
    pub text: String,
    /// Answer kind.
    pub kind: QuestionKind,
    /// Ordered answer options. Empty for free-text questions.
    #[serde(default)]
    pub options: Vec<String>,
    /// Framework tag, kept for traceability.
    #[serde(default)]
    pub framework: Option<Framework>,
    /// Importance multiplier; `None` means [`DEFAULT_WEIGHT`].
    #[serde(default)]
    pub weight: Option<f64>,
}

impl Question {
    /// Effective weight of this question.
    pub fn weight(&self) -> f64 {
        self.weight.unwrap_or(DEFAULT_WEIGHT)
    }

    /// Number of options used as the per-question maximum when scoring.
    pub fn option_count(&self) -> usize {
        if self.options.is_empty() {
            FALLBACK_OPTION_COUNT
        } else {
            self.options.len()
        }
    }
}

/// Three-tier qualitative reading of a category score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interpretation {
    pub high: String,
    pub medium: String,
    pub low: String,
}

impl Interpretation {
    /// Scores at or above this are read as high.
    pub const HIGH_THRESHOLD: u32 = 75;
    /// Scores at or above this (and below high) are read as medium.
    pub const MEDIUM_THRESHOLD: u32 = 50;

    /// Select the text for a normalized score.
    pub fn for_score(&self, score: u32) -> &str {
        if score >= Self::HIGH_THRESHOLD {
            &self.high
        } else if score >= Self::MEDIUM_THRESHOLD {
            &self.medium
        } else {
            &self.low
        }
    }
}

/// A themed group of questions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier (e.g. "interest").
    pub id: String,
    /// Display title.
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Estimated completion time in minutes.
    #[serde(default)]
    pub time_estimate_minutes: u32,
    /// Per-tier interpretation text for this category's score.
    pub interpretation: Interpretation,
    /// Ordered, non-empty list of questions.
    pub questions: Vec<Question>,
}

impl Category {
    /// Look up a question in this category.
    pub fn question(&self, question_id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == question_id)
    }
}

/// The full, ordered question catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub categories: Vec<Category>,
}

impl Catalog {
    /// Look up a category by id.
    pub fn category(&self, category_id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == category_id)
    }

    /// Look up a question by id anywhere in the catalog.
    pub fn question(&self, question_id: &str) -> Option<&Question> {
        self.categories
            .iter()
            .find_map(|c| c.question(question_id))
    }

    /// The category that owns a question.
    pub fn category_of(&self, question_id: &str) -> Option<&Category> {
        self.categories
            .iter()
            .find(|c| c.question(question_id).is_some())
    }

    /// All questions in catalog order.
    pub fn questions(&self) -> impl Iterator<Item = &Question> {
        self.categories.iter().flat_map(|c| c.questions.iter())
    }

    pub fn total_questions(&self) -> usize {
        self.categories.iter().map(|c| c.questions.len()).sum()
    }

    /// Sum of the per-category time estimates, in minutes.
    pub fn total_time_estimate(&self) -> u32 {
        self.categories.iter().map(|c| c.time_estimate_minutes).sum()
    }
}

/// The value of a single answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    /// Zero-based option index for rating-scale and single-choice questions.
    Choice(u32),
    /// Free-form text.
    Text(String),
}

impl AnswerValue {
    /// The option index, if this is a numeric answer.
    pub fn as_index(&self) -> Option<u32> {
        match self {
            AnswerValue::Choice(i) => Some(*i),
            AnswerValue::Text(_) => None,
        }
    }
}

impl From<u32> for AnswerValue {
    fn from(index: u32) -> Self {
        AnswerValue::Choice(index)
    }
}

impl From<&str> for AnswerValue {
    fn from(text: &str) -> Self {
        AnswerValue::Text(text.to_string())
    }
}

/// One captured answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    /// Id of the answered question.
    pub question_id: String,
    pub value: AnswerValue,
    /// When the answer was captured.
    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
}

impl Response {
    /// A response captured now.
    pub fn new(question_id: impl Into<String>, value: impl Into<AnswerValue>) -> Self {
        Self::at(question_id, value, Utc::now())
    }

    /// A response captured at a given instant.
    pub fn at(
        question_id: impl Into<String>,
        value: impl Into<AnswerValue>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            question_id: question_id.into(),
            value: value.into(),
            timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_kind_display_and_parse() {
        assert_eq!(QuestionKind::RatingScale.to_string(), "rating-scale");
        assert_eq!(
            "likert".parse::<QuestionKind>().unwrap(),
            QuestionKind::RatingScale
        );
        assert_eq!(
            "Multiple-Choice".parse::<QuestionKind>().unwrap(),
            QuestionKind::SingleChoice
        );
        assert_eq!(
            "scenario".parse::<QuestionKind>().unwrap(),
            QuestionKind::FreeText
        );
        assert!("matrix".parse::<QuestionKind>().is_err());
        assert!(!QuestionKind::FreeText.is_numeric());
    }

    #[test]
    fn framework_parse() {
        assert_eq!("grit".parse::<Framework>().unwrap(), Framework::Grit);
        assert_eq!(Framework::GrowthMindset.to_string(), "growth-mindset");
        assert!("mbti".parse::<Framework>().is_err());
    }

    #[test]
    fn question_defaults() {
        let q = Question {
            id: "q".into(),
            text: "?".into(),
            kind: QuestionKind::RatingScale,
            options: vec![],
            framework: None,
            weight: None,
        };
        assert_eq!(q.weight(), DEFAULT_WEIGHT);
        assert_eq!(q.option_count(), FALLBACK_OPTION_COUNT);
    }

    #[test]
    fn interpretation_tiers() {
        let i = Interpretation {
            high: "h".into(),
            medium: "m".into(),
            low: "l".into(),
        };
        assert_eq!(i.for_score(100), "h");
        assert_eq!(i.for_score(75), "h");
        assert_eq!(i.for_score(74), "m");
        assert_eq!(i.for_score(50), "m");
        assert_eq!(i.for_score(49), "l");
        assert_eq!(i.for_score(0), "l");
    }

    #[test]
    fn answer_value_untagged_serde() {
        let r: Response =
            serde_json::from_str(r#"{"question_id":"int_1","value":3}"#).unwrap();
        assert_eq!(r.value, AnswerValue::Choice(3));

        let r: Response = serde_json::from_str(
            r#"{"question_id":"essay","value":"I kept iterating","timestamp":"2024-05-01T10:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(r.value.as_index(), None);
        assert_eq!(r.timestamp.to_rfc3339(), "2024-05-01T10:00:00+00:00");
    }
}
