use serde::{Deserialize, Serialize};

/// How a course's duration text is compared with the profile's time tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationMatching {
    /// Read the month count from the duration and compare it with the tier's preferred length.
    #[default]
    MonthCount,
    /// Award the bonus when the duration text contains the tier's digit anywhere.
    Substring,
}

/// Points awarded per rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub level_match: i32,
    pub interest_match: i32,
    pub goal_match: i32,
    pub time_match: i32,
    pub budget_match: i32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            level_match: 3,
            interest_match: 2,
            goal_match: 2,
            time_match: 1,
            budget_match: 2,
        }
    }
}

/// Ranking configuration. The defaults reproduce the public site's behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub max_results: usize,
    pub duration_matching: DurationMatching,
    pub weights: ScoringWeights,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_results: 3,
            duration_matching: DurationMatching::default(),
            weights: ScoringWeights::default(),
        }
    }
}
