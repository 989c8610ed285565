use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::domain::{parse_price, Course, CourseId, ExperienceLevel, Tier};

/// Version tag of the built-in course table.
pub const STANDARD_CATALOG_VERSION: &str = "standard-v1";

/// Ordered, versioned table of courses handed to the engine.
///
/// Declaration order matters: it breaks ties between equally scored courses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseCatalog {
    version: String,
    courses: Vec<Course>,
}

/// Errors raised while building a catalog from external data.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read course catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid course catalog CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("duplicate course id '{0}'")]
    DuplicateId(String),
    #[error("course '{id}' has unknown level '{level}'")]
    UnknownLevel { id: String, level: String },
    #[error("course '{id}' has unparseable price '{price}'")]
    InvalidPrice { id: String, price: String },
    #[error("course '{id}' is missing a title")]
    MissingTitle { id: String },
}

impl CourseCatalog {
    /// Build a catalog, rejecting duplicate ids and prices the engine cannot read.
    pub fn new(version: impl Into<String>, courses: Vec<Course>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for course in &courses {
            if !seen.insert(course.id.clone()) {
                return Err(CatalogError::DuplicateId(course.id.0.clone()));
            }
            if course.title.trim().is_empty() {
                return Err(CatalogError::MissingTitle {
                    id: course.id.0.clone(),
                });
            }
            if course.price_amount().is_none() {
                return Err(CatalogError::InvalidPrice {
                    id: course.id.0.clone(),
                    price: course.price.clone(),
                });
            }
        }

        Ok(Self {
            version: version.into(),
            courses,
        })
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    pub fn get(&self, id: &CourseId) -> Option<&Course> {
        self.courses.iter().find(|course| &course.id == id)
    }

    /// The six courses offered on the public site.
    pub fn standard() -> Self {
        let courses = STANDARD_COURSES
            .iter()
            .map(|template| template.to_course())
            .collect();
        Self {
            version: STANDARD_CATALOG_VERSION.to_string(),
            courses,
        }
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let version = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("custom")
            .to_string();
        let file = std::fs::File::open(path)?;
        Self::from_reader(file, version)
    }

    /// Read `id,title,description,duration,level,price,category,tags,icon` rows.
    /// Tags are separated by `|`.
    pub fn from_reader<R: Read>(
        reader: R,
        version: impl Into<String>,
    ) -> Result<Self, CatalogError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut courses = Vec::new();
        for row in csv_reader.deserialize::<CatalogRow>() {
            courses.push(row?.into_course()?);
        }

        Self::new(version, courses)
    }
}

#[derive(Debug, Deserialize)]
struct CatalogRow {
    id: String,
    title: String,
    #[serde(default)]
    description: String,
    duration: String,
    level: String,
    price: String,
    category: String,
    #[serde(default)]
    tags: String,
    #[serde(default)]
    icon: String,
}

impl CatalogRow {
    fn into_course(self) -> Result<Course, CatalogError> {
        let level = ExperienceLevel::parse(&self.level).ok_or_else(|| {
            CatalogError::UnknownLevel {
                id: self.id.clone(),
                level: self.level.clone(),
            }
        })?;

        if parse_price(&self.price).is_none() {
            return Err(CatalogError::InvalidPrice {
                id: self.id,
                price: self.price,
            });
        }

        let tags = self
            .tags
            .split('|')
            .map(|tag| tag.trim().to_lowercase())
            .filter(|tag| !tag.is_empty())
            .collect();

        Ok(Course {
            id: CourseId(self.id),
            title: self.title,
            description: self.description,
            duration: self.duration,
            level,
            price: self.price,
            category: self.category,
            tags,
            icon: self.icon,
        })
    }
}

struct CourseTemplate {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    duration: &'static str,
    level: ExperienceLevel,
    price: &'static str,
    category: &'static str,
    tags: &'static [&'static str],
    icon: &'static str,
}

impl CourseTemplate {
    fn to_course(&self) -> Course {
        Course {
            id: CourseId(self.id.to_string()),
            title: self.title.to_string(),
            description: self.description.to_string(),
            duration: self.duration.to_string(),
            level: self.level,
            price: self.price.to_string(),
            category: self.category.to_string(),
            tags: self.tags.iter().map(|tag| tag.to_string()).collect(),
            icon: self.icon.to_string(),
        }
    }
}

const STANDARD_COURSES: [CourseTemplate; 6] = [
    CourseTemplate {
        id: "1",
        title: "Desarrollo Web Full Stack",
        description: "Aprende HTML, CSS, JavaScript, React, Node.js y bases de datos para crear aplicaciones web completas.",
        duration: "6 meses",
        level: ExperienceLevel::Beginner,
        price: "$1,200",
        category: "Programación",
        tags: &["web", "javascript", "react", "nodejs"],
        icon: "🌐",
    },
    CourseTemplate {
        id: "2",
        title: "Data Science y Machine Learning",
        description: "Domina Python, estadísticas, análisis de datos y algoritmos de machine learning.",
        duration: "8 meses",
        level: ExperienceLevel::Intermediate,
        price: "$1,800",
        category: "Ciencia de Datos",
        tags: &["python", "data", "ml", "ai"],
        icon: "📊",
    },
    CourseTemplate {
        id: "3",
        title: "Diseño UX/UI Avanzado",
        description: "Crea experiencias de usuario excepcionales con herramientas modernas de diseño.",
        duration: "4 meses",
        level: ExperienceLevel::Intermediate,
        price: "$900",
        category: "Diseño",
        tags: &["ux", "ui", "design", "figma"],
        icon: "🎨",
    },
    CourseTemplate {
        id: "4",
        title: "Marketing Digital",
        description: "Estrategias de marketing online, SEO, redes sociales y publicidad digital.",
        duration: "3 meses",
        level: ExperienceLevel::Beginner,
        price: "$600",
        category: "Marketing",
        tags: &["marketing", "seo", "social", "ads"],
        icon: "📈",
    },
    CourseTemplate {
        id: "5",
        title: "Desarrollo Móvil con React Native",
        description: "Crea aplicaciones móviles multiplataforma con React Native.",
        duration: "5 meses",
        level: ExperienceLevel::Intermediate,
        price: "$1,000",
        category: "Programación",
        tags: &["mobile", "react", "javascript", "app"],
        icon: "📱",
    },
    CourseTemplate {
        id: "6",
        title: "Ciberseguridad",
        description: "Aprende a proteger sistemas y redes contra amenazas cibernéticas.",
        duration: "6 meses",
        level: ExperienceLevel::Advanced,
        price: "$1,500",
        category: "Seguridad",
        tags: &["security", "cyber", "networking", "ethical-hacking"],
        icon: "🔒",
    },
];
