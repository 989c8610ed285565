use serde::Serialize;
use std::fmt::Write as _;

use super::catalog::CourseCatalog;
use super::domain::{
    BudgetTier, Course, EducationLevel, ExperienceLevel, Tier, TimeAvailability, UserProfile,
    INTEREST_OPTIONS,
};
use super::ports::{RecommendationResult, ResultSink, SinkError};

/// One paragraph of the "why these courses" section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RationaleEntry {
    pub heading: &'static str,
    pub detail: String,
}

/// Explanations tying the recommendations back to the profile answers.
pub fn rationale(profile: &UserProfile) -> Vec<RationaleEntry> {
    vec![
        RationaleEntry {
            heading: "Basado en tu experiencia",
            detail: format!(
                "Hemos seleccionado cursos que se adaptan a tu nivel de experiencia actual ({}), \
                 asegurando que puedas aprender a tu ritmo sin sentirte abrumado.",
                profile.experience.label().to_lowercase()
            ),
        },
        RationaleEntry {
            heading: "Alineado con tus intereses",
            detail: format!(
                "Los cursos están relacionados con tus áreas de interés: {}. \
                 Esto te mantendrá motivado durante todo el proceso de aprendizaje.",
                profile.interests.join(", ")
            ),
        },
        RationaleEntry {
            heading: "Adaptado a tu tiempo",
            detail: format!(
                "Considerando que tienes {}, estos cursos te permitirán progresar de manera \
                 consistente sin comprometer otras responsabilidades.",
                profile.time_available.label().to_lowercase()
            ),
        },
        RationaleEntry {
            heading: "Dentro de tu presupuesto",
            detail: format!(
                "Todos los cursos están dentro de tu rango de presupuesto ({}), ofreciendo la \
                 mejor relación calidad-precio para tu inversión.",
                profile.budget.label().to_lowercase()
            ),
        },
    ]
}

/// Labelled choice for a select box or API client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionView {
    pub value: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<&'static str>,
}

/// Allowed values for every enumerated profile field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileOptionsView {
    pub education: Vec<OptionView>,
    pub experience: Vec<OptionView>,
    pub interests: Vec<&'static str>,
    pub time_available: Vec<OptionView>,
    pub budget: Vec<OptionView>,
    pub min_interests: usize,
    pub min_age: u8,
    pub max_age: u8,
}

impl ProfileOptionsView {
    pub fn new(min_interests: usize, (min_age, max_age): (u8, u8)) -> Self {
        Self {
            education: plain_options::<EducationLevel>(),
            experience: plain_options::<ExperienceLevel>(),
            interests: INTEREST_OPTIONS.to_vec(),
            time_available: TimeAvailability::ALL
                .iter()
                .map(|tier| OptionView {
                    value: tier.label(),
                    hint: Some(tier.hint()),
                })
                .collect(),
            budget: BudgetTier::ALL
                .iter()
                .map(|tier| OptionView {
                    value: tier.label(),
                    hint: Some(tier.hint()),
                })
                .collect(),
            min_interests,
            min_age,
            max_age,
        }
    }
}

fn plain_options<T: Tier>() -> Vec<OptionView> {
    T::ALL
        .iter()
        .map(|tier| OptionView {
            value: tier.label(),
            hint: None,
        })
        .collect()
}

/// Catalog listing exposed over the API.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogView<'a> {
    pub version: &'a str,
    pub courses: &'a [Course],
}

impl<'a> From<&'a CourseCatalog> for CatalogView<'a> {
    fn from(catalog: &'a CourseCatalog) -> Self {
        Self {
            version: catalog.version(),
            courses: catalog.courses(),
        }
    }
}

/// JSON body returned for a successful submission.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationResponse<'a> {
    pub profile: &'a UserProfile,
    pub catalog_version: &'a str,
    pub recommendations: &'a [Course],
    pub rationale: Vec<RationaleEntry>,
}

/// Sink producing the JSON API representation.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonView;

impl ResultSink for JsonView {
    type Output = serde_json::Value;

    fn render(&self, result: &RecommendationResult) -> Result<Self::Output, SinkError> {
        let response = RecommendationResponse {
            profile: &result.profile,
            catalog_version: &result.catalog_version,
            recommendations: &result.recommendations,
            rationale: rationale(&result.profile),
        };
        Ok(serde_json::to_value(response)?)
    }
}

/// Sink producing a plain-text report for terminals.
#[derive(Debug, Clone, Default)]
pub struct TextReport {
    pub brand: String,
}

impl ResultSink for TextReport {
    type Output = String;

    fn render(&self, result: &RecommendationResult) -> Result<Self::Output, SinkError> {
        let mut out = String::new();
        self.write_report(result, &mut out)?;
        Ok(out)
    }
}

impl TextReport {
    fn write_report(&self, result: &RecommendationResult, out: &mut String) -> std::fmt::Result {
        let profile = &result.profile;

        writeln!(out, "{}", self.brand)?;
        writeln!(out, "¡Hola {}!", profile.name)?;
        writeln!(
            out,
            "Experiencia: {} | Intereses: {} | Tiempo: {} | Presupuesto: {}",
            profile.experience,
            profile.interests.join(", "),
            profile.time_available,
            profile.budget
        )?;

        writeln!(out, "\nCursos recomendados para ti")?;
        if result.recommendations.is_empty() {
            writeln!(out, "- ninguno disponible")?;
        }
        for (index, course) in result.recommendations.iter().enumerate() {
            let badge = if index == 0 { " ⭐ MEJOR OPCIÓN" } else { "" };
            writeln!(
                out,
                "{}. {} {} ({}){}",
                index + 1,
                course.icon,
                course.title,
                course.category,
                badge
            )?;
            writeln!(
                out,
                "   {} | {} | {}",
                course.duration, course.level, course.price
            )?;
            writeln!(out, "   {}", course.description)?;
            writeln!(out, "   tags: {}", course.tags.join(", "))?;
        }

        writeln!(out, "\n¿Por qué estos cursos son perfectos para ti?")?;
        for entry in rationale(profile) {
            writeln!(out, "- {}: {}", entry.heading, entry.detail)?;
        }

        Ok(())
    }
}
