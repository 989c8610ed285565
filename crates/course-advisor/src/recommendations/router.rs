use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use serde_json::json;
use tracing::warn;

use super::domain::ProfileSubmission;
use super::forms::ProfileForm;
use super::page::{render_form_page, HtmlPage};
use super::service::{RecommendationService, RecommendationServiceError};
use super::views::{CatalogView, JsonView, ProfileOptionsView};

/// Shared state for the recommendation routes.
#[derive(Clone)]
pub struct RecommendationState {
    service: Arc<RecommendationService>,
    brand: Arc<str>,
}

impl RecommendationState {
    pub fn new(service: Arc<RecommendationService>, brand: &str) -> Self {
        Self {
            service,
            brand: Arc::from(brand),
        }
    }
}

/// Router exposing the profile form, results page, and JSON endpoints.
pub fn recommendation_router(service: Arc<RecommendationService>, brand: &str) -> Router {
    let state = RecommendationState::new(service, brand);

    Router::new()
        .route("/", get(form_handler))
        .route("/recommendations", post(submit_form_handler))
        .route("/api/v1/recommendations", post(submit_json_handler))
        .route("/api/v1/courses", get(catalog_handler))
        .route("/api/v1/profile/options", get(options_handler))
        .with_state(state)
}

pub(crate) async fn form_handler(State(state): State<RecommendationState>) -> Html<String> {
    Html(render_form_page(
        &state.brand,
        &ProfileForm::default(),
        state.service.guard().policy(),
        None,
    ))
}

pub(crate) async fn submit_form_handler(
    State(state): State<RecommendationState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Response {
    let form = ProfileForm::from_pairs(pairs);
    let sink = HtmlPage {
        brand: state.brand.to_string(),
    };

    match state.service.deliver(&form, &sink) {
        Ok(page) => (StatusCode::OK, Html(page)).into_response(),
        Err(
            error @ (RecommendationServiceError::Profile(_)
            | RecommendationServiceError::Source(_)),
        ) => {
            let page = render_form_page(
                &state.brand,
                &form,
                state.service.guard().policy(),
                Some(&error.to_string()),
            );
            (StatusCode::UNPROCESSABLE_ENTITY, Html(page)).into_response()
        }
        Err(other) => internal_error(other),
    }
}

pub(crate) async fn submit_json_handler(
    State(state): State<RecommendationState>,
    Json(submission): Json<ProfileSubmission>,
) -> Response {
    match state.service.deliver(&submission, &JsonView) {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(
            error @ (RecommendationServiceError::Profile(_)
            | RecommendationServiceError::Source(_)),
        ) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
        Err(other) => internal_error(other),
    }
}

pub(crate) async fn catalog_handler(State(state): State<RecommendationState>) -> Response {
    Json(CatalogView::from(state.service.catalog())).into_response()
}

pub(crate) async fn options_handler(State(state): State<RecommendationState>) -> Response {
    let policy = state.service.guard().policy();
    Json(ProfileOptionsView::new(
        policy.min_interests(),
        policy.age_range(),
    ))
    .into_response()
}

fn internal_error(error: RecommendationServiceError) -> Response {
    warn!(%error, "failed to present recommendations");
    let payload = json!({
        "error": error.to_string(),
    });
    (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
}
