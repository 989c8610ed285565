use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use course_advisor::recommendations::{recommendation_router, RecommendationService};
use serde_json::json;
use std::sync::Arc;

pub(crate) fn with_recommendation_routes(
    service: Arc<RecommendationService>,
    brand: &str,
) -> axum::Router {
    recommendation_router(service, brand)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use course_advisor::config::McpConfig;
    use course_advisor::mcp::{mcp_router, CourseRecommenderServer};
    use metrics_exporter_prometheus::PrometheusBuilder;
    use std::sync::atomic::{AtomicBool, Ordering};
    use tower::ServiceExt;

    fn state(ready: bool) -> AppState {
        let recorder = PrometheusBuilder::new().build_recorder();
        AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: Arc::new(recorder.handle()),
        }
    }

    fn app(state: AppState) -> axum::Router {
        with_recommendation_routes(Arc::new(RecommendationService::standard()), "00lar Corp")
            .layer(Extension(state))
    }

    async fn status_of(router: axum::Router, uri: &str) -> StatusCode {
        router
            .oneshot(Request::get(uri).body(Body::empty()).expect("request"))
            .await
            .expect("router responds")
            .status()
    }

    #[tokio::test]
    async fn health_is_always_ok() {
        let Json(body) = healthcheck().await;
        assert_eq!(body, json!({ "status": "ok" }));
        assert_eq!(status_of(app(state(false)), "/health").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn readiness_follows_the_flag() {
        let state = state(false);
        assert_eq!(
            status_of(app(state.clone()), "/ready").await,
            StatusCode::SERVICE_UNAVAILABLE
        );

        state.readiness.store(true, Ordering::Release);
        assert_eq!(status_of(app(state), "/ready").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn recommendation_routes_are_merged() {
        assert_eq!(status_of(app(state(true)), "/").await, StatusCode::OK);
        assert_eq!(
            status_of(app(state(true)), "/api/v1/courses").await,
            StatusCode::OK
        );
        assert_eq!(status_of(app(state(true)), "/metrics").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn default_mcp_paths_merge_with_app_routes() {
        let app = with_recommendation_routes(Arc::new(RecommendationService::standard()), "00lar Corp")
            .merge(mcp_router(
                CourseRecommenderServer::default(),
                &McpConfig::default(),
            ))
            .layer(Extension(state(true)));

        assert_eq!(status_of(app.clone(), "/health").await, StatusCode::OK);
        assert_ne!(status_of(app, "/mcp").await, StatusCode::NOT_FOUND);
    }
}
