//! Common test utilities for integration tests.

#![allow(dead_code)]

use std::time::Duration;

use bevy::ecs::message::Message;
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use solar_explorer::catalog::{Difficulty, QuizBank, QuizQuestion};
use solar_explorer::quiz::{QuizPlugin, QuizRng};
use solar_explorer::shell::ShellPlugin;

/// Virtual seconds per `app.update()` in apps from [`quiz_app`].
pub const FRAME: Duration = Duration::from_millis(100);

/// Create a minimal app whose clock advances by [`FRAME`] per update.
pub fn minimal_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(TimeUpdateStrategy::ManualDuration(FRAME));
    app
}

/// A question whose correct answer is `"right"`.
pub fn question(id: u32, difficulty: Difficulty) -> QuizQuestion {
    QuizQuestion {
        id,
        question: format!("Question {id}?"),
        options: vec!["right".into(), "wrong".into(), "nope".into(), "never".into()],
        correct_answer: "right".into(),
        explanation: format!("Explanation {id}."),
        difficulty,
        planet_id: None,
    }
}

/// A bank of `count` easy questions.
pub fn easy_bank(count: u32) -> QuizBank {
    QuizBank::new((1..=count).map(|id| question(id, Difficulty::Easy)).collect())
        .expect("fixture bank is valid")
}

/// Shell and quiz engine over `bank`, with the initial run already drawn.
pub fn quiz_app(bank: QuizBank, seed: u64) -> App {
    let mut app = minimal_app();
    app.insert_resource(bank)
        .insert_resource(QuizRng::seeded(seed))
        .add_plugins((ShellPlugin, QuizPlugin));
    app.update();
    app
}

/// Queue a message and run one frame.
pub fn send<M: Message>(app: &mut App, message: M) {
    app.world_mut().write_message(message);
    app.update();
}

/// Run `frames` updates.
pub fn run_frames(app: &mut App, frames: usize) {
    for _ in 0..frames {
        app.update();
    }
}
