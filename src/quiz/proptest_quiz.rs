//! Property-based tests for quiz sampling and scoring using proptest.

use std::collections::HashSet;

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::*;

fn any_filter() -> impl Strategy<Value = DifficultyFilter> {
    prop::sample::select(DifficultyFilter::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Samples hold min(limit, pool) distinct questions that all match the filter.
    #[test]
    fn prop_sample_size_and_uniqueness(
        seed in any::<u64>(),
        filter in any_filter(),
        limit in 0usize..20,
    ) {
        let bank = QuizBank::builtin();
        let pool = bank.all().iter().filter(|q| filter.matches(q.difficulty)).count();
        let sample = draw_sample(&bank, filter, &mut ChaCha8Rng::seed_from_u64(seed), limit);

        prop_assert_eq!(sample.len(), pool.min(limit));
        let ids: HashSet<u32> = sample.iter().map(|q| q.id).collect();
        prop_assert_eq!(ids.len(), sample.len());
        prop_assert!(sample.iter().all(|q| filter.matches(q.difficulty)));
    }

    /// The final score equals the number of correct selections, and
    /// Complete is reached exactly once however the time is sliced.
    #[test]
    fn prop_score_matches_correct_answers(
        seed in any::<u64>(),
        filter in any_filter(),
        picks in prop::collection::vec(0usize..4, 10),
        dt in 0.05f32..2.0,
    ) {
        let bank = QuizBank::builtin();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut run = QuizRun::new(&bank, filter, &mut rng, &QuizSettings::default());
        prop_assert!(run.start());

        let mut expected = 0;
        let mut completions = 0;
        for pick in picks.iter().take(run.sample().len()) {
            let question = run.current_question().unwrap().clone();
            let option = &question.options[*pick % question.options.len()];
            if question.is_correct(option) {
                expected += 1;
            }
            prop_assert_ne!(run.select_answer(option), AnswerOutcome::Ignored);
            // Re-selecting never changes anything.
            prop_assert_eq!(run.select_answer(option), AnswerOutcome::Ignored);

            while run.has_pending_advance() {
                if run.tick(dt) == TickOutcome::Completed {
                    completions += 1;
                }
            }
        }

        prop_assert_eq!(run.score(), expected);
        prop_assert_eq!(completions, 1);
        prop_assert_eq!(run.phase(), QuizPhase::Complete);
    }

    /// Reset always yields a fresh, unstarted run.
    #[test]
    fn prop_reset_is_fresh(seed in any::<u64>(), answered in 0usize..5) {
        let bank = QuizBank::builtin();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut run = QuizRun::new(&bank, DifficultyFilter::Mixed, &mut rng, &QuizSettings::default());
        run.start();
        for _ in 0..answered {
            let answer = run.current_question().unwrap().correct_answer.clone();
            run.select_answer(&answer);
            run.tick(ADVANCE_DELAY_SECS);
        }

        run.try_again(&bank, &mut rng);
        prop_assert_eq!(run.phase(), QuizPhase::NotStarted);
        prop_assert_eq!(run.score(), 0);
        prop_assert_eq!(run.index(), 0);
        prop_assert!(!run.is_answered());
        prop_assert!(!run.has_pending_advance());
        prop_assert_eq!(run.sample().len(), SAMPLE_LIMIT);
    }
}
