use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::recommendations::{
    recommendation_router, BudgetTier, CourseCatalog, EducationLevel, ExperienceLevel,
    ProfileSubmission, RecommendationService, TimeAvailability, UserProfile,
};

pub(super) const BRAND: &str = "00lar Corp";

/// Beginner looking for a programming job on a small budget.
pub(super) fn job_seeker() -> UserProfile {
    UserProfile {
        name: "Lucía".to_string(),
        age: 24,
        education: EducationLevel::University,
        experience: ExperienceLevel::Beginner,
        interests: vec!["Programación".to_string()],
        goals: "busco trabajo".to_string(),
        time_available: TimeAvailability::Moderate,
        budget: BudgetTier::Low,
    }
}

/// Advanced user interested in security with time and money to spare.
pub(super) fn security_specialist() -> UserProfile {
    UserProfile {
        name: "Mateo".to_string(),
        age: 35,
        education: EducationLevel::Postgraduate,
        experience: ExperienceLevel::Advanced,
        interests: vec!["Ciberseguridad".to_string()],
        goals: "sin objetivo claro".to_string(),
        time_available: TimeAvailability::Plenty,
        budget: BudgetTier::High,
    }
}

pub(super) fn submission() -> ProfileSubmission {
    ProfileSubmission {
        name: "Ana Torres".to_string(),
        age: Some(22),
        education: "Bachillerato".to_string(),
        experience: "Principiante".to_string(),
        interests: vec!["Programación".to_string(), "Marketing".to_string()],
        goals: "Encontrar trabajo en programación".to_string(),
        time_available: "Tiempo moderado".to_string(),
        budget: "Medio".to_string(),
    }
}

pub(super) fn form_pairs() -> Vec<(&'static str, &'static str)> {
    vec![
        ("name", "Ana Torres"),
        ("age", "22"),
        ("education", "Bachillerato"),
        ("experience", "Principiante"),
        ("interests", "Programación"),
        ("interests", "Marketing"),
        ("goals", "Encontrar trabajo en programación"),
        ("time_available", "Tiempo moderado"),
        ("budget", "Medio"),
    ]
}

/// URL-encode `pairs` as an `application/x-www-form-urlencoded` body.
pub(super) fn encode_form(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| format!("{}={}", encode_component(key), encode_component(value)))
        .collect::<Vec<_>>()
        .join("&")
}

fn encode_component(raw: &str) -> String {
    let mut encoded = String::new();
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char)
            }
            b' ' => encoded.push('+'),
            other => encoded.push_str(&format!("%{other:02X}")),
        }
    }
    encoded
}

pub(super) fn standard_service() -> Arc<RecommendationService> {
    Arc::new(RecommendationService::standard())
}

pub(super) fn router() -> axum::Router {
    recommendation_router(standard_service(), BRAND)
}

pub(super) fn catalog() -> CourseCatalog {
    CourseCatalog::standard()
}

pub(super) fn titles(courses: &[crate::recommendations::Course]) -> Vec<&str> {
    courses.iter().map(|course| course.title.as_str()).collect()
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1 << 20)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) async fn read_text_body(response: Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), 1 << 20)
        .await
        .expect("read body");
    String::from_utf8(body.to_vec()).expect("utf-8 body")
}
