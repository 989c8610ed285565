use crate::infra::load_catalog;
use clap::Args;
use course_advisor::config::AppConfig;
use course_advisor::error::AppError;
use course_advisor::recommendations::{
    EngineConfig, JsonView, ProfileSource, ProfileSubmission, RecommendationService, SourceError,
    TextReport,
};
use course_advisor::recommendations::views::CatalogView;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct RecommendArgs {
    /// Full name shown in the greeting
    #[arg(long)]
    pub(crate) name: String,
    /// Age in years (16-100)
    #[arg(long)]
    pub(crate) age: i64,
    /// Highest education level, e.g. Bachillerato or university
    #[arg(long)]
    pub(crate) education: String,
    /// Experience with technology: Principiante, Intermedio, Avanzado (or beginner, ...)
    #[arg(long, default_value = "Principiante")]
    pub(crate) experience: String,
    /// Area of interest; repeat the flag for each one
    #[arg(long = "interest")]
    pub(crate) interests: Vec<String>,
    /// Main goal in free text
    #[arg(long)]
    pub(crate) goals: String,
    /// Poco tiempo, Tiempo moderado, or Mucho tiempo
    #[arg(long = "time", default_value = "Tiempo moderado")]
    pub(crate) time_available: String,
    /// Bajo, Medio, or Alto
    #[arg(long, default_value = "Medio")]
    pub(crate) budget: String,
    /// CSV catalog to rank instead of the built-in courses
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Brand shown in the report header (defaults to APP_BRAND)
    #[arg(long)]
    pub(crate) brand: Option<String>,
    /// Print the JSON API representation instead of the text report
    #[arg(long)]
    pub(crate) json: bool,
}

impl ProfileSource for RecommendArgs {
    fn submission(&self) -> Result<ProfileSubmission, SourceError> {
        Ok(ProfileSubmission {
            name: self.name.clone(),
            age: Some(self.age),
            education: self.education.clone(),
            experience: self.experience.clone(),
            interests: self.interests.clone(),
            goals: self.goals.clone(),
            time_available: self.time_available.clone(),
            budget: self.budget.clone(),
        })
    }
}

#[derive(Args, Debug, Default)]
pub(crate) struct CatalogArgs {
    /// CSV catalog to list instead of the built-in courses
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Print the catalog as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let catalog = load_catalog(args.catalog.as_deref())?;
    let service = RecommendationService::new(Arc::new(catalog), EngineConfig::default());

    if args.json {
        let body = service.deliver(&args, &JsonView)?;
        println!("{body:#}");
    } else {
        let brand = resolve_brand(args.brand.clone())?;
        let report = service.deliver(&args, &TextReport { brand })?;
        print!("{report}");
    }

    Ok(())
}

fn resolve_brand(flag: Option<String>) -> Result<String, AppError> {
    match flag {
        Some(brand) => Ok(brand),
        None => Ok(AppConfig::load()?.site.brand),
    }
}

pub(crate) fn run_catalog(args: CatalogArgs) -> Result<(), AppError> {
    let catalog = load_catalog(args.catalog.as_deref())?;

    if args.json {
        let body = serde_json::to_value(CatalogView::from(&catalog))?;
        println!("{body:#}");
        return Ok(());
    }

    println!("Catalog {} ({} courses)", catalog.version(), catalog.len());
    for course in catalog.courses() {
        println!(
            "- [{}] {} {} | {} | {} | {} | {}",
            course.id.0,
            course.icon,
            course.title,
            course.category,
            course.level,
            course.duration,
            course.price
        );
        println!("    tags: {}", course.tags.join(", "));
    }

    Ok(())
}
