mod config;
mod rules;

pub use config::{DurationMatching, EngineConfig, ScoringWeights};

use super::catalog::CourseCatalog;
use super::domain::{Course, UserProfile};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Stateless ranker that applies the scoring rules to every course in a catalog.
#[derive(Debug, Clone, Default)]
pub struct RecommendationEngine {
    config: EngineConfig,
}

impl RecommendationEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Score every course, in catalog order.
    pub fn score(&self, profile: &UserProfile, catalog: &CourseCatalog) -> Vec<ScoredCourse> {
        catalog
            .courses()
            .iter()
            .map(|course| {
                let (components, score) = rules::score_course(profile, course, &self.config);
                ScoredCourse {
                    course: course.clone(),
                    score,
                    components,
                }
            })
            .collect()
    }

    /// Highest scores first; the sort is stable so ties keep catalog order.
    pub fn rank(&self, profile: &UserProfile, catalog: &CourseCatalog) -> Vec<ScoredCourse> {
        let mut scored = self.score(profile, catalog);
        scored.sort_by(|a, b| b.score.cmp(&a.score));
        scored.truncate(self.config.max_results);

        for entry in &scored {
            debug!(
                course_id = %entry.course.id.0,
                score = entry.score,
                rules = entry.components.len(),
                "ranked course"
            );
        }

        scored
    }

    /// Top courses for the profile, without their scores.
    pub fn recommend(&self, profile: &UserProfile, catalog: &CourseCatalog) -> Vec<Course> {
        self.rank(profile, catalog)
            .into_iter()
            .map(|entry| entry.course)
            .collect()
    }
}

/// Rank `catalog` for `profile` with the default rules.
pub fn recommend(profile: &UserProfile, catalog: &CourseCatalog) -> Vec<Course> {
    RecommendationEngine::default().recommend(profile, catalog)
}

/// Rule that contributed points to a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreFactor {
    LevelMatch,
    InterestMatch,
    GoalMatch,
    TimeMatch,
    BudgetMatch,
}

/// Discrete contribution to a course score, kept for audits and debugging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: ScoreFactor,
    pub points: i32,
    pub note: String,
}

/// Course paired with its transient score for one profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredCourse {
    pub course: Course,
    pub score: i32,
    pub components: Vec<ScoreComponent>,
}

impl ScoredCourse {
    pub fn points_for(&self, factor: ScoreFactor) -> i32 {
        self.components
            .iter()
            .filter(|component| component.factor == factor)
            .map(|component| component.points)
            .sum()
    }
}
