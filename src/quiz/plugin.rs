//! Bevy wiring for the quiz engine.

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::catalog::QuizBank;
use crate::types::AppSet;

use super::{AnswerOutcome, DifficultyFilter, QuizRun, QuizSettings, TickOutcome};

/// Seedable RNG used for drawing quiz samples.
#[derive(Resource)]
pub struct QuizRng(pub ChaCha8Rng);

impl QuizRng {
    pub fn seeded(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl Default for QuizRng {
    fn default() -> Self {
        Self::seeded(rand::thread_rng().r#gen())
    }
}

/// Requests to the quiz engine. Only [`handle_quiz_commands`] consumes these.
#[derive(Message, Clone, Debug, PartialEq)]
pub enum QuizCommand {
    Start,
    SelectAnswer(String),
    SetDifficulty(DifficultyFilter),
    TryAgain,
    /// The quiz panel was closed; pending work is discarded.
    Leave,
}

/// Feedback for transient notifications.
#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizNotice {
    Correct,
    Wrong,
}

/// Plugin owning the active [`QuizRun`].
pub struct QuizPlugin;

impl Plugin for QuizPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<QuizSettings>()
            .init_resource::<QuizRng>()
            .init_resource::<QuizBank>()
            .init_resource::<QuizRun>()
            .add_message::<QuizCommand>()
            .add_message::<QuizNotice>()
            .add_systems(Startup, draw_initial_run)
            .add_systems(
                Update,
                (handle_quiz_commands, tick_quiz)
                    .chain()
                    .in_set(AppSet::Commands),
            );
    }
}

fn draw_initial_run(
    mut run: ResMut<QuizRun>,
    bank: Res<QuizBank>,
    settings: Res<QuizSettings>,
    mut rng: ResMut<QuizRng>,
) {
    *run = QuizRun::new(&bank, run.filter(), &mut rng.0, &settings);
    info!("Quiz ready with {} of {} questions", run.sample().len(), bank.len());
}

/// Apply queued quiz commands in order.
pub fn handle_quiz_commands(
    mut commands: MessageReader<QuizCommand>,
    mut notices: MessageWriter<QuizNotice>,
    mut run: ResMut<QuizRun>,
    bank: Res<QuizBank>,
    mut rng: ResMut<QuizRng>,
) {
    for command in commands.read() {
        match command {
            QuizCommand::Start => {
                if run.start() {
                    info!(
                        "Quiz started: {} questions ({})",
                        run.sample().len(),
                        run.filter().label()
                    );
                }
            }
            QuizCommand::SelectAnswer(option) => match run.select_answer(option) {
                AnswerOutcome::Correct => {
                    notices.write(QuizNotice::Correct);
                }
                AnswerOutcome::Wrong => {
                    notices.write(QuizNotice::Wrong);
                }
                AnswerOutcome::Ignored => {
                    debug!("Ignored answer '{option}'");
                }
            },
            QuizCommand::SetDifficulty(filter) => {
                run.set_difficulty(*filter, &bank, &mut rng.0);
                debug!("Quiz difficulty set to {}", filter.label());
            }
            QuizCommand::TryAgain => run.try_again(&bank, &mut rng.0),
            QuizCommand::Leave => run.leave(&bank, &mut rng.0),
        }
    }
}

fn tick_quiz(mut run: ResMut<QuizRun>, time: Res<Time>) {
    if !run.has_pending_advance() {
        return;
    }
    if run.tick(time.delta_secs()) == TickOutcome::Completed {
        let summary = run.summary();
        info!(
            "Quiz complete: {}/{} ({:.0}%)",
            summary.score, summary.total, summary.percentage
        );
    }
}
