use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Identifier wrapper for catalog entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseId(pub String);

/// Shared behavior of the fixed three-valued selections on the profile form.
pub trait Tier: Copy + Sized + 'static {
    const FIELD: &'static str;
    const ALL: &'static [Self];

    fn label(self) -> &'static str;
    fn alias(self) -> &'static str;

    /// Match a user-facing label or its English alias, ignoring case and padding.
    fn parse(raw: &str) -> Option<Self> {
        let needle = raw.trim();
        Self::ALL.iter().copied().find(|tier| {
            tier.label().eq_ignore_ascii_case(needle)
                || tier.label().to_lowercase() == needle.to_lowercase()
                || tier.alias().eq_ignore_ascii_case(needle)
        })
    }
}

macro_rules! tier_serde {
    ($ty:ty) => {
        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.label())
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                <$ty as Tier>::parse(&raw).ok_or_else(|| {
                    serde::de::Error::custom(format!(
                        "unknown {} '{}'",
                        <$ty as Tier>::FIELD,
                        raw
                    ))
                })
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

/// Self-reported experience with technology; also the level of a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl Tier for ExperienceLevel {
    const FIELD: &'static str = "experience";
    const ALL: &'static [Self] = &[Self::Beginner, Self::Intermediate, Self::Advanced];

    fn label(self) -> &'static str {
        match self {
            ExperienceLevel::Beginner => "Principiante",
            ExperienceLevel::Intermediate => "Intermedio",
            ExperienceLevel::Advanced => "Avanzado",
        }
    }

    fn alias(self) -> &'static str {
        match self {
            ExperienceLevel::Beginner => "beginner",
            ExperienceLevel::Intermediate => "intermediate",
            ExperienceLevel::Advanced => "advanced",
        }
    }
}

tier_serde!(ExperienceLevel);

/// Daily study time the user can commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeAvailability {
    Little,
    Moderate,
    Plenty,
}

impl TimeAvailability {
    pub const fn hint(self) -> &'static str {
        match self {
            TimeAvailability::Little => "1-2 horas/día",
            TimeAvailability::Moderate => "3-4 horas/día",
            TimeAvailability::Plenty => "5+ horas/día",
        }
    }

    /// Course length, in months, that suits this amount of study time.
    pub const fn preferred_months(self) -> u32 {
        match self {
            TimeAvailability::Little => 3,
            TimeAvailability::Moderate => 5,
            TimeAvailability::Plenty => 8,
        }
    }
}

impl Tier for TimeAvailability {
    const FIELD: &'static str = "time_available";
    const ALL: &'static [Self] = &[Self::Little, Self::Moderate, Self::Plenty];

    fn label(self) -> &'static str {
        match self {
            TimeAvailability::Little => "Poco tiempo",
            TimeAvailability::Moderate => "Tiempo moderado",
            TimeAvailability::Plenty => "Mucho tiempo",
        }
    }

    fn alias(self) -> &'static str {
        match self {
            TimeAvailability::Little => "little",
            TimeAvailability::Moderate => "moderate",
            TimeAvailability::Plenty => "plenty",
        }
    }
}

tier_serde!(TimeAvailability);

/// Spending bracket for a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BudgetTier {
    Low,
    Medium,
    High,
}

impl BudgetTier {
    pub const fn hint(self) -> &'static str {
        match self {
            BudgetTier::Low => "$0 - $500",
            BudgetTier::Medium => "$500 - $1,500",
            BudgetTier::High => "$1,500+",
        }
    }

    /// Whether a numeric price falls in the bracket this tier rewards.
    pub const fn accepts(self, price: u32) -> bool {
        match self {
            BudgetTier::Low => price < 1000,
            BudgetTier::Medium => price >= 1000 && price < 1500,
            BudgetTier::High => price >= 1500,
        }
    }
}

impl Tier for BudgetTier {
    const FIELD: &'static str = "budget";
    const ALL: &'static [Self] = &[Self::Low, Self::Medium, Self::High];

    fn label(self) -> &'static str {
        match self {
            BudgetTier::Low => "Bajo",
            BudgetTier::Medium => "Medio",
            BudgetTier::High => "Alto",
        }
    }

    fn alias(self) -> &'static str {
        match self {
            BudgetTier::Low => "low",
            BudgetTier::Medium => "medium",
            BudgetTier::High => "high",
        }
    }
}

tier_serde!(BudgetTier);

/// Highest completed education level. Collected for display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EducationLevel {
    Secondary,
    HighSchool,
    Technical,
    University,
    Postgraduate,
}

impl Tier for EducationLevel {
    const FIELD: &'static str = "education";
    const ALL: &'static [Self] = &[
        Self::Secondary,
        Self::HighSchool,
        Self::Technical,
        Self::University,
        Self::Postgraduate,
    ];

    fn label(self) -> &'static str {
        match self {
            EducationLevel::Secondary => "Secundaria",
            EducationLevel::HighSchool => "Bachillerato",
            EducationLevel::Technical => "Técnico",
            EducationLevel::University => "Universitario",
            EducationLevel::Postgraduate => "Postgrado",
        }
    }

    fn alias(self) -> &'static str {
        match self {
            EducationLevel::Secondary => "secondary",
            EducationLevel::HighSchool => "high_school",
            EducationLevel::Technical => "technical",
            EducationLevel::University => "university",
            EducationLevel::Postgraduate => "postgraduate",
        }
    }
}

tier_serde!(EducationLevel);

/// Interests offered as checkboxes on the profile form, in display order.
pub const INTEREST_OPTIONS: [&str; 8] = [
    "Programación",
    "Diseño",
    "Marketing",
    "Data Science",
    "Ciberseguridad",
    "Emprendimiento",
    "Creatividad",
    "Tecnología",
];

/// Raw, unvalidated answers as they arrive from a form, JSON body, or CLI flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSubmission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub age: Option<i64>,
    #[serde(default)]
    pub education: String,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub goals: String,
    #[serde(default, alias = "timeAvailable")]
    pub time_available: String,
    #[serde(default)]
    pub budget: String,
}

impl Default for ProfileSubmission {
    /// Initial state of the profile form.
    fn default() -> Self {
        Self {
            name: String::new(),
            age: Some(18),
            education: String::new(),
            experience: ExperienceLevel::Beginner.label().to_string(),
            interests: Vec::new(),
            goals: String::new(),
            time_available: TimeAvailability::Moderate.label().to_string(),
            budget: BudgetTier::Medium.label().to_string(),
        }
    }
}

/// A complete, validated profile; the only input the engine accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub age: u8,
    pub education: EducationLevel,
    pub experience: ExperienceLevel,
    pub interests: Vec<String>,
    pub goals: String,
    pub time_available: TimeAvailability,
    pub budget: BudgetTier,
}

/// Catalog entry. Immutable once a catalog is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    pub title: String,
    pub description: String,
    /// Free text such as "6 meses".
    pub duration: String,
    pub level: ExperienceLevel,
    /// Currency label such as "$1,200".
    pub price: String,
    pub category: String,
    pub tags: Vec<String>,
    pub icon: String,
}

impl Course {
    /// Price with the currency symbol and thousands separators removed.
    pub fn price_amount(&self) -> Option<u32> {
        parse_price(&self.price)
    }

    /// First run of digits in the duration text, read as a month count.
    pub fn duration_months(&self) -> Option<u32> {
        let digits: String = self
            .duration
            .chars()
            .skip_while(|ch| !ch.is_ascii_digit())
            .take_while(char::is_ascii_digit)
            .collect();
        digits.parse().ok()
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|candidate| candidate == tag)
    }
}

pub(crate) fn parse_price(raw: &str) -> Option<u32> {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|ch| *ch != '$' && *ch != ',')
        .collect();
    cleaned.trim().parse().ok()
}
