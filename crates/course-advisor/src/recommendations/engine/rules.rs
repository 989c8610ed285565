use super::super::domain::{Course, TimeAvailability, UserProfile};
use super::config::{DurationMatching, EngineConfig};
use super::{ScoreComponent, ScoreFactor};

/// Goal keyword paired with the course category it favors.
const GOAL_CATEGORIES: [(&str, &str); 3] = [
    ("trabajo", "Programación"),
    ("emprendimiento", "Marketing"),
    ("creatividad", "Diseño"),
];

pub(crate) fn score_course(
    profile: &UserProfile,
    course: &Course,
    config: &EngineConfig,
) -> (Vec<ScoreComponent>, i32) {
    let weights = &config.weights;
    let mut components = Vec::new();
    let mut total_score = 0;

    if course.level == profile.experience {
        components.push(ScoreComponent {
            factor: ScoreFactor::LevelMatch,
            points: weights.level_match,
            note: format!("course level {} matches experience", course.level),
        });
        total_score += weights.level_match;
    }

    for interest in &profile.interests {
        let tag = interest.to_lowercase();
        if course.has_tag(&tag) {
            components.push(ScoreComponent {
                factor: ScoreFactor::InterestMatch,
                points: weights.interest_match,
                note: format!("interest '{interest}' matches tag '{tag}'"),
            });
            total_score += weights.interest_match;
        }
    }

    for (keyword, category) in GOAL_CATEGORIES {
        if profile.goals.contains(keyword) && course.category == category {
            components.push(ScoreComponent {
                factor: ScoreFactor::GoalMatch,
                points: weights.goal_match,
                note: format!("goal mentions '{keyword}' and course is {category}"),
            });
            total_score += weights.goal_match;
        }
    }

    if duration_fits(course, profile.time_available, config.duration_matching) {
        components.push(ScoreComponent {
            factor: ScoreFactor::TimeMatch,
            points: weights.time_match,
            note: format!(
                "duration '{}' suits {}",
                course.duration, profile.time_available
            ),
        });
        total_score += weights.time_match;
    }

    if let Some(price) = course.price_amount() {
        if profile.budget.accepts(price) {
            components.push(ScoreComponent {
                factor: ScoreFactor::BudgetMatch,
                points: weights.budget_match,
                note: format!("price {price} within {} budget", profile.budget),
            });
            total_score += weights.budget_match;
        }
    }

    (components, total_score)
}

fn duration_fits(course: &Course, time: TimeAvailability, matching: DurationMatching) -> bool {
    let months = time.preferred_months();
    match matching {
        DurationMatching::MonthCount => course.duration_months() == Some(months),
        DurationMatching::Substring => course.duration.contains(&months.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course_with_duration(duration: &str) -> Course {
        let mut course = crate::recommendations::CourseCatalog::standard().courses()[0].clone();
        course.duration = duration.to_string();
        course
    }

    #[test]
    fn month_count_ignores_unrelated_digits() {
        let course = course_with_duration("15 meses");
        assert!(!duration_fits(
            &course,
            TimeAvailability::Moderate,
            DurationMatching::MonthCount
        ));
        assert!(duration_fits(
            &course,
            TimeAvailability::Moderate,
            DurationMatching::Substring
        ));
    }

    #[test]
    fn both_strategies_agree_on_plain_durations() {
        let course = course_with_duration("8 meses");
        for matching in [DurationMatching::MonthCount, DurationMatching::Substring] {
            assert!(duration_fits(&course, TimeAvailability::Plenty, matching));
            assert!(!duration_fits(&course, TimeAvailability::Little, matching));
        }
    }
}
