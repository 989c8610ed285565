use serde::{Deserialize, Serialize};

use super::domain::{Course, ProfileSubmission, UserProfile};

/// Outcome of one submission: the validated profile and its ranked courses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationResult {
    pub profile: UserProfile,
    pub catalog_version: String,
    pub recommendations: Vec<Course>,
}

impl RecommendationResult {
    /// Course shown with the "best option" badge.
    pub fn best_match(&self) -> Option<&Course> {
        self.recommendations.first()
    }
}

/// Front end that gathers a user's answers (HTML form, JSON body, CLI flags).
pub trait ProfileSource {
    fn submission(&self) -> Result<ProfileSubmission, SourceError>;
}

impl ProfileSource for ProfileSubmission {
    fn submission(&self) -> Result<ProfileSubmission, SourceError> {
        Ok(self.clone())
    }
}

/// Front end that presents a recommendation result.
pub trait ResultSink {
    type Output;

    fn render(&self, result: &RecommendationResult) -> Result<Self::Output, SinkError>;
}

/// Raised when a source cannot produce a submission at all.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("invalid value for {field}: {detail}")]
    InvalidField { field: &'static str, detail: String },
}

/// Raised when a sink fails to present a result.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("failed to write recommendations: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode recommendations: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("failed to format recommendations")]
    Format(#[from] std::fmt::Error),
}
