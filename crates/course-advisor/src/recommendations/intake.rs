use super::domain::{
    BudgetTier, EducationLevel, ExperienceLevel, ProfileSubmission, Tier, TimeAvailability,
    UserProfile,
};

/// Reasons a submission cannot become a `UserProfile`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileViolation {
    #[error("el nombre es obligatorio")]
    MissingName,
    #[error("la edad es obligatoria")]
    MissingAge,
    #[error("la edad debe estar entre {min} y {max} (recibido {found})")]
    AgeOutOfRange { min: u8, max: u8, found: i64 },
    #[error("selecciona tu nivel de educación")]
    MissingEducation,
    #[error("selecciona al menos {required} intereses (seleccionados {found})")]
    TooFewInterests { required: usize, found: usize },
    #[error("describe tu objetivo principal")]
    MissingGoals,
    #[error("valor no válido para {field}: '{value}'")]
    InvalidSelection { field: &'static str, value: String },
}

const DEFAULT_MIN_INTERESTS: usize = 2;
const DEFAULT_MIN_AGE: u8 = 16;
const DEFAULT_MAX_AGE: u8 = 100;

/// Thresholds enforced before a profile reaches the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntakePolicy {
    min_interests: usize,
    min_age: u8,
    max_age: u8,
}

impl IntakePolicy {
    pub fn new(min_interests: usize, min_age: u8, max_age: u8) -> Self {
        let (min_age, max_age) = if min_age <= max_age {
            (min_age, max_age)
        } else {
            (DEFAULT_MIN_AGE, DEFAULT_MAX_AGE)
        };

        Self {
            min_interests,
            min_age,
            max_age,
        }
    }

    pub fn min_interests(&self) -> usize {
        self.min_interests
    }

    pub fn age_range(&self) -> (u8, u8) {
        (self.min_age, self.max_age)
    }
}

impl Default for IntakePolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_INTERESTS, DEFAULT_MIN_AGE, DEFAULT_MAX_AGE)
    }
}

/// Guard responsible for producing `UserProfile` instances.
#[derive(Debug, Clone, Default)]
pub struct ProfileGuard {
    policy: IntakePolicy,
}

impl ProfileGuard {
    pub fn with_policy(policy: IntakePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &IntakePolicy {
        &self.policy
    }

    /// Convert a raw submission into a validated profile. Checks run in form order
    /// and the first failure is reported.
    pub fn profile_from_submission(
        &self,
        submission: ProfileSubmission,
    ) -> Result<UserProfile, ProfileViolation> {
        let name = submission.name.trim().to_string();
        if name.is_empty() {
            return Err(ProfileViolation::MissingName);
        }

        let age = self.check_age(submission.age)?;

        if submission.education.trim().is_empty() {
            return Err(ProfileViolation::MissingEducation);
        }
        let education = select::<EducationLevel>(&submission.education)?;
        let experience = select::<ExperienceLevel>(&submission.experience)?;

        let interests = normalize_interests(submission.interests);
        if interests.len() < self.policy.min_interests {
            return Err(ProfileViolation::TooFewInterests {
                required: self.policy.min_interests,
                found: interests.len(),
            });
        }

        let goals = submission.goals.trim().to_string();
        if goals.is_empty() {
            return Err(ProfileViolation::MissingGoals);
        }

        let time_available = select::<TimeAvailability>(&submission.time_available)?;
        let budget = select::<BudgetTier>(&submission.budget)?;

        Ok(UserProfile {
            name,
            age,
            education,
            experience,
            interests,
            goals,
            time_available,
            budget,
        })
    }

    fn check_age(&self, age: Option<i64>) -> Result<u8, ProfileViolation> {
        let found = age.ok_or(ProfileViolation::MissingAge)?;
        let (min, max) = self.policy.age_range();
        if found < i64::from(min) || found > i64::from(max) {
            return Err(ProfileViolation::AgeOutOfRange { min, max, found });
        }
        u8::try_from(found).map_err(|_| ProfileViolation::AgeOutOfRange { min, max, found })
    }
}

fn select<T: Tier>(raw: &str) -> Result<T, ProfileViolation> {
    T::parse(raw).ok_or_else(|| ProfileViolation::InvalidSelection {
        field: T::FIELD,
        value: raw.to_string(),
    })
}

/// Trim, drop blanks, and keep the first occurrence of each interest.
fn normalize_interests(raw: Vec<String>) -> Vec<String> {
    let mut interests: Vec<String> = Vec::with_capacity(raw.len());
    for interest in raw {
        let trimmed = interest.trim();
        if trimmed.is_empty() || interests.iter().any(|existing| existing == trimmed) {
            continue;
        }
        interests.push(trimmed.to_string());
    }
    interests
}
