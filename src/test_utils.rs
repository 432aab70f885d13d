//! Test utilities for catalog, quiz and shell tests.
//!
//! Provides small fixtures with known answers and helpers for building
//! headless Bevy apps.

/// Fixtures for building catalogs, question banks and deterministic RNGs.
pub mod fixtures {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use crate::catalog::{Difficulty, QuizQuestion};

    /// Deterministic RNG for sampling tests.
    pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(seed)
    }

    /// A question whose correct answer is always `"right"`.
    pub fn question(id: u32, difficulty: Difficulty) -> QuizQuestion {
        QuizQuestion {
            id,
            question: format!("Question {id}?"),
            options: vec![
                "right".to_string(),
                "wrong".to_string(),
                "also wrong".to_string(),
                "still wrong".to_string(),
            ],
            correct_answer: "right".to_string(),
            explanation: format!("Because of {id}."),
            difficulty,
            planet_id: None,
        }
    }

    /// `count` questions cycling through easy, medium and hard.
    pub fn questions(count: u32) -> Vec<QuizQuestion> {
        (1..=count)
            .map(|id| {
                let difficulty = match id % 3 {
                    1 => Difficulty::Easy,
                    2 => Difficulty::Medium,
                    _ => Difficulty::Hard,
                };
                question(id, difficulty)
            })
            .collect()
    }
}

/// Assertions shared by quiz tests.
pub mod assertions {
    use crate::quiz::{QuizPhase, QuizRun};

    /// A run that has just been drawn: nothing answered, nothing pending.
    pub fn assert_fresh(run: &QuizRun) {
        assert_eq!(run.phase(), QuizPhase::NotStarted, "phase");
        assert_eq!(run.index(), 0, "index");
        assert_eq!(run.score(), 0, "score");
        assert_eq!(run.selected(), None, "selected");
        assert!(!run.is_answered(), "answered");
        assert!(!run.has_pending_advance(), "pending advance");
    }
}

/// Utilities for creating headless Bevy apps for testing.
pub mod bevy_test {
    use bevy::prelude::*;

    use crate::catalog::QuizBank;
    use crate::quiz::{QuizPlugin, QuizRng};
    use crate::shell::ShellPlugin;

    /// Create a minimal Bevy app for testing without rendering.
    ///
    /// This app uses MinimalPlugins for a lightweight test environment.
    pub fn headless_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app
    }

    /// Headless app with the shell and quiz engine over `bank`, seeded.
    pub fn quiz_app(bank: QuizBank, seed: u64) -> App {
        let mut app = headless_app();
        app.insert_resource(bank)
            .insert_resource(QuizRng::seeded(seed))
            .add_plugins((ShellPlugin, QuizPlugin));
        app.update();
        app
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Difficulty, QuizBank};
    use crate::quiz::QuizRun;

    #[test]
    fn test_fixture_questions_are_valid() {
        let bank = QuizBank::new(fixtures::questions(9)).expect("valid bank");
        assert_eq!(bank.len(), 9);
        let easy = bank.all().iter().filter(|q| q.difficulty == Difficulty::Easy).count();
        assert_eq!(easy, 3);
    }

    #[test]
    fn test_quiz_app_draws_initial_run() {
        let bank = QuizBank::new(fixtures::questions(12)).expect("valid bank");
        let app = bevy_test::quiz_app(bank, 5);
        let run = app.world().resource::<QuizRun>();
        assert_eq!(run.sample().len(), 10);
        assertions::assert_fresh(run);
    }
}
