use super::domain::ProfileSubmission;
use super::ports::{ProfileSource, SourceError};

/// Field values posted by the HTML profile form.
///
/// Interests arrive as repeated `interests` keys, one per checked box, so the
/// body is read as ordered key/value pairs rather than a flat struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileForm {
    pub name: String,
    pub age: String,
    pub education: String,
    pub experience: String,
    pub interests: Vec<String>,
    pub goals: String,
    pub time_available: String,
    pub budget: String,
}

impl Default for ProfileForm {
    fn default() -> Self {
        Self::from_submission(&ProfileSubmission::default())
    }
}

impl ProfileForm {
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut form = Self {
            name: String::new(),
            age: String::new(),
            education: String::new(),
            experience: String::new(),
            interests: Vec::new(),
            goals: String::new(),
            time_available: String::new(),
            budget: String::new(),
        };

        for (key, value) in pairs {
            let value = value.into();
            match key.as_ref() {
                "name" => form.name = value,
                "age" => form.age = value,
                "education" => form.education = value,
                "experience" => form.experience = value,
                "interests" | "interests[]" => form.interests.push(value),
                "goals" => form.goals = value,
                "time_available" | "timeAvailable" => form.time_available = value,
                "budget" => form.budget = value,
                _ => {}
            }
        }

        form
    }

    pub fn from_submission(submission: &ProfileSubmission) -> Self {
        Self {
            name: submission.name.clone(),
            age: submission
                .age
                .map(|age| age.to_string())
                .unwrap_or_default(),
            education: submission.education.clone(),
            experience: submission.experience.clone(),
            interests: submission.interests.clone(),
            goals: submission.goals.clone(),
            time_available: submission.time_available.clone(),
            budget: submission.budget.clone(),
        }
    }

    pub fn is_checked(&self, interest: &str) -> bool {
        self.interests.iter().any(|selected| selected == interest)
    }
}

impl ProfileSource for ProfileForm {
    fn submission(&self) -> Result<ProfileSubmission, SourceError> {
        let raw_age = self.age.trim();
        let age = if raw_age.is_empty() {
            None
        } else {
            Some(
                raw_age
                    .parse::<i64>()
                    .map_err(|err| SourceError::InvalidField {
                        field: "age",
                        detail: format!("'{raw_age}' is not a whole number ({err})"),
                    })?,
            )
        };

        Ok(ProfileSubmission {
            name: self.name.clone(),
            age,
            education: self.education.clone(),
            experience: self.experience.clone(),
            interests: self.interests.clone(),
            goals: self.goals.clone(),
            time_available: self.time_available.clone(),
            budget: self.budget.clone(),
        })
    }
}
