use std::sync::Arc;

use tracing::info;

use super::catalog::CourseCatalog;
use super::domain::ProfileSubmission;
use super::engine::{EngineConfig, RecommendationEngine};
use super::intake::{ProfileGuard, ProfileViolation};
use super::ports::{ProfileSource, RecommendationResult, ResultSink, SinkError, SourceError};

/// Service composing the intake guard, the catalog, and the ranking engine.
pub struct RecommendationService {
    guard: ProfileGuard,
    engine: RecommendationEngine,
    catalog: Arc<CourseCatalog>,
}

impl RecommendationService {
    pub fn new(catalog: Arc<CourseCatalog>, config: EngineConfig) -> Self {
        Self::with_guard(ProfileGuard::default(), catalog, config)
    }

    pub fn with_guard(guard: ProfileGuard, catalog: Arc<CourseCatalog>, config: EngineConfig) -> Self {
        Self {
            guard,
            engine: RecommendationEngine::new(config),
            catalog,
        }
    }

    /// Service over the built-in catalog with default rules.
    pub fn standard() -> Self {
        Self::new(Arc::new(CourseCatalog::standard()), EngineConfig::default())
    }

    pub fn catalog(&self) -> &CourseCatalog {
        &self.catalog
    }

    pub fn guard(&self) -> &ProfileGuard {
        &self.guard
    }

    /// Validate a submission and rank the catalog for it.
    pub fn submit(
        &self,
        submission: ProfileSubmission,
    ) -> Result<RecommendationResult, RecommendationServiceError> {
        let profile = self.guard.profile_from_submission(submission)?;
        let recommendations = self.engine.recommend(&profile, &self.catalog);

        info!(
            experience = %profile.experience,
            interests = profile.interests.len(),
            catalog_version = self.catalog.version(),
            top = recommendations.first().map(|course| course.id.0.as_str()).unwrap_or("-"),
            "recommendations generated"
        );

        Ok(RecommendationResult {
            profile,
            catalog_version: self.catalog.version().to_string(),
            recommendations,
        })
    }

    /// Pull a submission from `source` and rank it.
    pub fn collect<S>(&self, source: &S) -> Result<RecommendationResult, RecommendationServiceError>
    where
        S: ProfileSource + ?Sized,
    {
        let submission = source.submission()?;
        self.submit(submission)
    }

    /// Full pipeline: collect from `source`, rank, and present through `sink`.
    pub fn deliver<S, R>(
        &self,
        source: &S,
        sink: &R,
    ) -> Result<R::Output, RecommendationServiceError>
    where
        S: ProfileSource + ?Sized,
        R: ResultSink + ?Sized,
    {
        let result = self.collect(source)?;
        let output = sink.render(&result)?;
        Ok(output)
    }
}

/// Error raised by the recommendation service.
#[derive(Debug, thiserror::Error)]
pub enum RecommendationServiceError {
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error(transparent)]
    Profile(#[from] ProfileViolation),
    #[error(transparent)]
    Sink(#[from] SinkError),
}
