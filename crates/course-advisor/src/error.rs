use crate::config::ConfigError;
use crate::mcp::McpServeError;
use crate::recommendations::{CatalogError, ProfileViolation, RecommendationServiceError};
use crate::telemetry::TelemetryError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Encode(serde_json::Error),
    Server(axum::Error),
    Catalog(CatalogError),
    Profile(ProfileViolation),
    Recommendation(RecommendationServiceError),
    Mcp(McpServeError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Encode(err) => write!(f, "encoding error: {}", err),
            AppError::Server(err) => write!(f, "server error: {}", err),
            AppError::Catalog(err) => write!(f, "catalog error: {}", err),
            AppError::Profile(err) => write!(f, "invalid profile: {}", err),
            AppError::Recommendation(err) => write!(f, "recommendation error: {}", err),
            AppError::Mcp(err) => write!(f, "mcp error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Encode(err) => Some(err),
            AppError::Server(err) => Some(err),
            AppError::Catalog(err) => Some(err),
            AppError::Profile(err) => Some(err),
            AppError::Recommendation(err) => Some(err),
            AppError::Mcp(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::Profile(_)
            | AppError::Recommendation(RecommendationServiceError::Source(_)) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Encode(_)
            | AppError::Server(_)
            | AppError::Catalog(_)
            | AppError::Recommendation(_)
            | AppError::Mcp(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}

impl From<axum::Error> for AppError {
    fn from(value: axum::Error) -> Self {
        Self::Server(value)
    }
}

impl From<CatalogError> for AppError {
    fn from(value: CatalogError) -> Self {
        Self::Catalog(value)
    }
}

impl From<ProfileViolation> for AppError {
    fn from(value: ProfileViolation) -> Self {
        Self::Profile(value)
    }
}

impl From<RecommendationServiceError> for AppError {
    fn from(value: RecommendationServiceError) -> Self {
        match value {
            RecommendationServiceError::Profile(violation) => Self::Profile(violation),
            other => Self::Recommendation(other),
        }
    }
}

impl From<McpServeError> for AppError {
    fn from(value: McpServeError) -> Self {
        Self::Mcp(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_errors_map_to_unprocessable_entity() {
        let response = AppError::from(ProfileViolation::MissingGoals).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let response =
            AppError::from(CatalogError::DuplicateId("1".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn serde_failures_are_encoding_errors() {
        let err = serde_json::from_str::<serde_json::Value>("{").expect_err("truncated json");
        let err = AppError::from(err);
        assert!(matches!(err, AppError::Encode(_)));
        assert!(err.to_string().starts_with("encoding error: "));
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn service_profile_errors_are_unwrapped() {
        let err = AppError::from(RecommendationServiceError::Profile(
            ProfileViolation::MissingName,
        ));
        assert!(matches!(err, AppError::Profile(ProfileViolation::MissingName)));
        assert_eq!(err.to_string(), "invalid profile: el nombre es obligatorio");
    }
}
