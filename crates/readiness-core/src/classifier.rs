//! Recommendation tiers and the ordered rule table that selects one.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::profile::AxisProfile;

/// Overall fit, ordered from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Recommendation {
    Reconsider,
    ExploreWithCaution,
    Proceed,
}

impl Recommendation {
    /// Banner headline for this tier.
    pub fn headline(self) -> &'static str {
        match self {
            Recommendation::Proceed => "Yes, you should pursue Graphic Design!",
            Recommendation::ExploreWithCaution => "Maybe - explore with caution",
            Recommendation::Reconsider => "Consider alternative paths",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recommendation::Proceed => write!(f, "proceed"),
            Recommendation::ExploreWithCaution => write!(f, "explore-with-caution"),
            Recommendation::Reconsider => write!(f, "reconsider"),
        }
    }
}

impl FromStr for Recommendation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "proceed" | "yes" => Ok(Recommendation::Proceed),
            "explore-with-caution" | "explore" | "maybe" => Ok(Recommendation::ExploreWithCaution),
            "reconsider" | "no" => Ok(Recommendation::Reconsider),
            other => Err(format!("unknown recommendation: {other}")),
        }
    }
}

/// One row of the classification table.
pub struct Rule {
    /// Tier selected when the rule matches.
    pub tier: Recommendation,
    /// Human-readable condition, used in logs.
    pub condition: &'static str,
    matches: fn(u32, &AxisProfile) -> bool,
}

impl Rule {
    pub fn matches(&self, overall: u32, profile: &AxisProfile) -> bool {
        (self.matches)(overall, profile)
    }
}

/// Evaluated top to bottom; the first matching rule wins.
pub const RULES: &[Rule] = &[
    Rule {
        tier: Recommendation::Proceed,
        condition: "overall >= 75 && interest >= 70 && persistence >= 60",
        matches: |overall, p| overall >= 75 && p.interest >= 70 && p.persistence >= 60,
    },
    Rule {
        tier: Recommendation::Reconsider,
        condition: "overall < 50 || interest < 40 || persistence < 30",
        matches: |overall, p| overall < 50 || p.interest < 40 || p.persistence < 30,
    },
];

/// Tier used when no rule in [`RULES`] matches.
pub const FALLBACK: Recommendation = Recommendation::ExploreWithCaution;

/// Select exactly one tier for an overall score and axis profile.
pub fn classify(overall: u32, profile: &AxisProfile) -> Recommendation {
    match RULES.iter().find(|r| r.matches(overall, profile)) {
        Some(rule) => {
            tracing::debug!(tier = %rule.tier, condition = rule.condition, "classification rule matched");
            rule.tier
        }
        None => {
            tracing::debug!(tier = %FALLBACK, "no classification rule matched, using fallback");
            FALLBACK
        }
    }
}
