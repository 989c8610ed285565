use course_advisor::recommendations::{
    recommend, BudgetTier, CourseCatalog, EducationLevel, ExperienceLevel, RecommendationEngine,
    Tier, TimeAvailability, UserProfile, INTEREST_OPTIONS,
};
use proptest::prelude::*;

fn profile(
    experience: ExperienceLevel,
    interests: &[&str],
    goals: &str,
    time_available: TimeAvailability,
    budget: BudgetTier,
) -> UserProfile {
    UserProfile {
        name: "Prueba".to_string(),
        age: 30,
        education: EducationLevel::Technical,
        experience,
        interests: interests.iter().map(|interest| interest.to_string()).collect(),
        goals: goals.to_string(),
        time_available,
        budget,
    }
}

#[test]
fn beginner_job_seeker_is_pointed_at_full_stack() {
    let catalog = CourseCatalog::standard();
    let courses = recommend(
        &profile(
            ExperienceLevel::Beginner,
            &["Programación"],
            "busco trabajo",
            TimeAvailability::Moderate,
            BudgetTier::Low,
        ),
        &catalog,
    );

    assert_eq!(courses.len(), 3);
    assert_eq!(courses[0].title, "Desarrollo Web Full Stack");
}

#[test]
fn advanced_security_profile_is_pointed_at_cybersecurity() {
    let catalog = CourseCatalog::standard();
    let courses = recommend(
        &profile(
            ExperienceLevel::Advanced,
            &["Ciberseguridad"],
            "sin objetivo claro",
            TimeAvailability::Plenty,
            BudgetTier::High,
        ),
        &catalog,
    );

    assert_eq!(courses[0].title, "Ciberseguridad");
}

#[test]
fn entrepreneur_with_low_budget_is_pointed_at_marketing() {
    let catalog = CourseCatalog::standard();
    let courses = recommend(
        &profile(
            ExperienceLevel::Beginner,
            &["Marketing", "Emprendimiento"],
            "emprendimiento propio",
            TimeAvailability::Little,
            BudgetTier::Low,
        ),
        &catalog,
    );

    // level 3 + tag 2 + goal 2 + "3 meses" 1 + $600 2
    assert_eq!(courses[0].title, "Marketing Digital");
    let ranked = RecommendationEngine::default().rank(
        &profile(
            ExperienceLevel::Beginner,
            &["Marketing", "Emprendimiento"],
            "emprendimiento propio",
            TimeAvailability::Little,
            BudgetTier::Low,
        ),
        &catalog,
    );
    assert_eq!(ranked[0].score, 10);
}

fn arb_profile() -> impl Strategy<Value = UserProfile> {
    (
        prop::sample::select(ExperienceLevel::ALL.to_vec()),
        prop::sample::subsequence(INTEREST_OPTIONS.to_vec(), 0..=INTEREST_OPTIONS.len()),
        prop::sample::select(vec![
            "busco trabajo",
            "emprendimiento y creatividad",
            "aprender algo nuevo",
            "",
        ]),
        prop::sample::select(TimeAvailability::ALL.to_vec()),
        prop::sample::select(BudgetTier::ALL.to_vec()),
    )
        .prop_map(|(experience, interests, goals, time_available, budget)| {
            profile(experience, &interests, goals, time_available, budget)
        })
}

proptest! {
    #[test]
    fn returns_min_of_three_and_catalog_size(profile in arb_profile(), size in 0usize..=6) {
        let courses = CourseCatalog::standard().courses()[..size].to_vec();
        let catalog = CourseCatalog::new("slice", courses).expect("valid catalog");
        let ranked = recommend(&profile, &catalog);
        prop_assert_eq!(ranked.len(), size.min(3));
    }

    #[test]
    fn ranking_is_sorted_and_stable(profile in arb_profile()) {
        let catalog = CourseCatalog::standard();
        let engine = RecommendationEngine::default();
        let scored = engine.score(&profile, &catalog);
        let ranked = engine.rank(&profile, &catalog);

        for pair in ranked.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
            if pair[0].score == pair[1].score {
                let first = catalog.courses().iter().position(|c| c.id == pair[0].course.id);
                let second = catalog.courses().iter().position(|c| c.id == pair[1].course.id);
                prop_assert!(first < second);
            }
        }

        // Nothing left out scores higher than the last course shown.
        if let Some(last) = ranked.last() {
            let shown: Vec<_> = ranked.iter().map(|entry| entry.course.id.clone()).collect();
            for entry in scored.iter().filter(|entry| !shown.contains(&entry.course.id)) {
                prop_assert!(entry.score <= last.score);
            }
        }
    }

    #[test]
    fn ranking_is_deterministic(profile in arb_profile()) {
        let catalog = CourseCatalog::standard();
        prop_assert_eq!(recommend(&profile, &catalog), recommend(&profile, &catalog));
    }

    #[test]
    fn one_matching_interest_adds_two_points(profile in arb_profile(), index in 0usize..6) {
        let catalog = CourseCatalog::standard();
        let engine = RecommendationEngine::default();
        let course = &catalog.courses()[index];
        let tag = course.tags[0].clone();
        prop_assume!(!profile.interests.iter().any(|interest| interest.to_lowercase() == tag));

        let mut extended = profile.clone();
        extended.interests.push(tag.to_uppercase());

        let before = engine.score(&profile, &catalog)[index].score;
        let after = engine.score(&extended, &catalog)[index].score;
        prop_assert_eq!(after - before, 2);
    }

    #[test]
    fn level_match_is_worth_exactly_three(profile in arb_profile(), index in 0usize..6) {
        let catalog = CourseCatalog::standard();
        let engine = RecommendationEngine::default();
        let level = catalog.courses()[index].level;

        let mut matching = profile.clone();
        matching.experience = level;
        let mut other = profile;
        other.experience = ExperienceLevel::ALL
            .iter()
            .copied()
            .find(|candidate| *candidate != level)
            .expect("three levels");

        let with_match = engine.score(&matching, &catalog)[index].score;
        let without = engine.score(&other, &catalog)[index].score;
        prop_assert_eq!(with_match - without, 3);
    }
}
