//! Profile intake, catalog, ranking engine, and the front ends that present results.

pub mod catalog;
pub mod domain;
pub mod engine;
pub mod forms;
pub mod intake;
pub mod page;
pub mod ports;
pub mod router;
pub mod service;
pub mod views;

#[cfg(test)]
mod tests;

pub use catalog::{CatalogError, CourseCatalog, STANDARD_CATALOG_VERSION};
pub use domain::{
    BudgetTier, Course, CourseId, EducationLevel, ExperienceLevel, ProfileSubmission, Tier,
    TimeAvailability, UserProfile, INTEREST_OPTIONS,
};
pub use engine::{
    recommend, DurationMatching, EngineConfig, RecommendationEngine, ScoreComponent, ScoreFactor,
    ScoredCourse, ScoringWeights,
};
pub use forms::ProfileForm;
pub use intake::{IntakePolicy, ProfileGuard, ProfileViolation};
pub use page::HtmlPage;
pub use ports::{ProfileSource, RecommendationResult, ResultSink, SinkError, SourceError};
pub use router::recommendation_router;
pub use service::{RecommendationService, RecommendationServiceError};
pub use views::{JsonView, TextReport};
