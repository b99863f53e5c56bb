//! Six-axis aptitude profile.
//!
//! Responses are partitioned by the category that owns their question. Each
//! partition is averaged on a `value * 20` scale, which maps the 0-4 option
//! range onto roughly 0-100.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::catalog::{COGNITIVE, INTEREST, MOTIVATION, PERSONALITY, TECHNICAL};
use crate::model::Catalog;
use crate::scoring::{round_half_up, ResponseIndex, MAX_SCORE};

/// Multiplier from option index to axis points.
pub const AXIS_SCALE: f64 = 20.0;

/// Six independent 0-100 aptitude measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AxisProfile {
    /// Persistence / grit, from the motivation partition.
    pub persistence: u32,
    /// Natural interest, from the interest partition.
    pub interest: u32,
    /// Current skill level, from the technical partition.
    pub skill: u32,
    /// Cognitive aptitude, from the cognitive partition.
    pub cognitive: u32,
    /// Trainability: mean of the personality and cognitive partitions.
    pub trainability: u32,
    /// Real-world job fit: mean of the personality and technical partitions.
    pub job_fit: u32,
}

impl AxisProfile {
    /// Axes as `(label, value)` pairs in display order.
    pub fn axes(&self) -> [(&'static str, u32); 6] {
        [
            ("Persistence", self.persistence),
            ("Interest", self.interest),
            ("Skill", self.skill),
            ("Cognitive", self.cognitive),
            ("Trainability", self.trainability),
            ("Job Fit", self.job_fit),
        ]
    }
}

/// Per-category averages feeding the axes.
#[derive(Debug, Default)]
struct Partitions {
    sums: HashMap<String, (f64, usize)>,
}

impl Partitions {
    fn collect(catalog: &Catalog, responses: &ResponseIndex<'_>) -> Self {
        let mut sums: HashMap<String, (f64, usize)> = HashMap::new();
        for response in responses.iter() {
            let Some(category) = catalog.category_of(&response.question_id) else {
                tracing::warn!(
                    question_id = %response.question_id,
                    "response references a question outside the catalog, ignoring"
                );
                continue;
            };
            let Some(index) = response.value.as_index() else {
                continue;
            };
            let entry = sums.entry(category.id.clone()).or_insert((0.0, 0));
            entry.0 += f64::from(index) * AXIS_SCALE;
            entry.1 += 1;
        }
        Self { sums }
    }

    /// Rounded mean for a category, capped at 100; 0 when it has no numeric
    /// responses.
    fn average(&self, category_id: &str) -> u32 {
        match self.sums.get(category_id) {
            Some(&(sum, count)) if count > 0 => {
                round_half_up(sum / count as f64).min(MAX_SCORE)
            }
            _ => 0,
        }
    }
}

fn mean_of(a: u32, b: u32) -> u32 {
    round_half_up(f64::from(a + b) / 2.0)
}

/// Compute the axis profile for a collapsed response set.
pub fn axis_profile(catalog: &Catalog, responses: &ResponseIndex<'_>) -> AxisProfile {
    let partitions = Partitions::collect(catalog, responses);

    let personality = partitions.average(PERSONALITY);
    let cognitive = partitions.average(COGNITIVE);
    let technical = partitions.average(TECHNICAL);

    let profile = AxisProfile {
        persistence: partitions.average(MOTIVATION),
        interest: partitions.average(INTEREST),
        skill: technical,
        cognitive,
        // TODO: derived axes average unrelated partitions; replace with a
        // validated mapping once one exists.
        trainability: mean_of(personality, cognitive),
        job_fit: mean_of(personality, technical),
    };

    tracing::debug!(?profile, "computed axis profile");
    profile
}
