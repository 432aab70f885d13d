//! Property-based tests for catalog validation using proptest.

use proptest::prelude::*;

use super::{builtin_planets, builtin_questions, CatalogError, PlanetCatalog, QuizBank};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Any ordering of a valid catalog validates and comes back sorted by position.
    #[test]
    fn prop_catalog_order_independent(seed in any::<u64>()) {
        use rand::seq::SliceRandom;
        use rand::SeedableRng;

        let mut planets = builtin_planets();
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(seed);
        planets.shuffle(&mut rng);

        let catalog = PlanetCatalog::new(planets).unwrap();
        let positions: Vec<u32> = catalog.all().iter().map(|p| p.position).collect();
        prop_assert_eq!(positions, (0..=8).collect::<Vec<_>>());
    }

    /// Moving any planet onto another's position breaks the contiguity invariant.
    #[test]
    fn prop_position_collision_rejected(from in 1usize..9, to in 0u32..9) {
        let mut planets = builtin_planets();
        prop_assume!(planets[from].position != to);
        planets[from].position = to;

        let result = PlanetCatalog::new(planets);
        prop_assert!(
            matches!(
                result,
                Err(CatalogError::BadPositions { .. }) | Err(CatalogError::MissingSun)
            ),
            "unexpected result {:?}",
            result.map(|c| c.len())
        );
    }

    /// A correct answer that is not among the options is always rejected.
    #[test]
    fn prop_answer_must_be_option(index in 0usize..15, answer in "[a-z]{12}") {
        let mut questions = builtin_questions();
        questions[index].correct_answer = answer;
        let expected_id = questions[index].id;

        let rejected = matches!(
            QuizBank::new(questions),
            Err(CatalogError::AnswerNotInOptions { id, .. }) if id == expected_id
        );
        prop_assert!(rejected);
    }
}
