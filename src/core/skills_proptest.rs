//! Property-based tests for skill rotation

#[cfg(test)]
mod tests {
    use crate::core::skills::*;
    use proptest::prelude::*;

    fn skill_level() -> impl Strategy<Value = SkillLevel> {
        prop_oneof![
            Just(SkillLevel::Beginner),
            Just(SkillLevel::LowerIntermediate),
            Just(SkillLevel::MiddleIntermediate),
            Just(SkillLevel::UpperIntermediate),
            Just(SkillLevel::Advanced),
        ]
    }

    fn sorted(skills: &[SkillLevel]) -> Vec<&'static str> {
        let mut labels: Vec<&'static str> = skills.iter().map(SkillLevel::label).collect();
        labels.sort_unstable();
        labels
    }

    proptest! {
        #[test]
        fn test_rotate_preserves_length_and_multiset(
            skills in prop::collection::vec(skill_level(), 0..20)
        ) {
            let rotated = rotate(&skills);
            prop_assert_eq!(rotated.len(), skills.len());
            prop_assert_eq!(sorted(&rotated), sorted(&skills));
        }

        #[test]
        fn test_rotate_shifts_by_one(
            skills in prop::collection::vec(skill_level(), 1..20)
        ) {
            let rotated = rotate(&skills);
            prop_assert_eq!(rotated[0], skills[skills.len() - 1]);
            for i in 1..skills.len() {
                prop_assert_eq!(rotated[i], skills[i - 1]);
            }
        }

        #[test]
        fn test_rotate_period_equals_length(
            skills in prop::collection::vec(skill_level(), 0..20)
        ) {
            let mut current = skills.clone();
            for _ in 0..skills.len() {
                current = rotate(&current);
            }
            prop_assert_eq!(current, skills);
        }

        #[test]
        fn test_initial_skills_depend_only_on_mode(extended in any::<bool>()) {
            let a = Assignment::derive(&RosterSource::default(), Mode::from_extended(extended));
            let b = Assignment::derive(
                &RosterSource::from_names(&["w", "x", "y", "z"], "v"),
                Mode::from_extended(extended),
            );
            prop_assert_eq!(a.skills, b.skills);
        }
    }
}
