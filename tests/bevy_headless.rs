//! Headless Bevy integration tests for the shell and quiz engine.
//!
//! Commands go in as messages exactly as the UI and keyboard send them.

mod common;

use bevy::prelude::*;
use solar_explorer::catalog::{PlanetCatalog, QuizBank};
use solar_explorer::detail::{DetailPlugin, DetailViewState};
use solar_explorer::quiz::{
    DifficultyFilter, QuizCommand, QuizPhase, QuizRun, ScoreTier, ADVANCE_DELAY_SECS,
};
use solar_explorer::shell::{ShellCommand, ShellState};
use solar_explorer::types::Panel;

use common::{easy_bank, quiz_app, run_frames, send, FRAME};

/// Frames needed for the auto-advance to fire, with one to spare.
fn advance_frames() -> usize {
    (ADVANCE_DELAY_SECS / FRAME.as_secs_f32()).ceil() as usize + 1
}

fn run(app: &App) -> &QuizRun {
    app.world().resource::<QuizRun>()
}

#[test]
fn test_initial_run_is_drawn_at_startup() {
    let app = quiz_app(QuizBank::builtin(), 1);
    let run = run(&app);
    assert_eq!(run.phase(), QuizPhase::NotStarted);
    assert_eq!(run.filter(), DifficultyFilter::Mixed);
    assert_eq!(run.sample().len(), 10);
}

#[test]
fn test_answer_then_auto_advance() {
    let mut app = quiz_app(easy_bank(5), 2);
    send(&mut app, QuizCommand::Start);
    assert_eq!(run(&app).phase(), QuizPhase::InProgress);

    send(&mut app, QuizCommand::SelectAnswer("right".into()));
    assert_eq!(run(&app).score(), 1);
    assert!(run(&app).is_answered());
    assert_eq!(run(&app).index(), 0);

    run_frames(&mut app, advance_frames());
    assert_eq!(run(&app).index(), 1);
    assert!(!run(&app).is_answered());
    assert_eq!(run(&app).score(), 1);
}

#[test]
fn test_second_answer_is_ignored() {
    let mut app = quiz_app(easy_bank(5), 3);
    send(&mut app, QuizCommand::Start);
    send(&mut app, QuizCommand::SelectAnswer("wrong".into()));
    send(&mut app, QuizCommand::SelectAnswer("right".into()));
    assert_eq!(run(&app).score(), 0);
    assert_eq!(run(&app).selected(), Some("wrong"));
}

#[test]
fn test_full_run_completes_once() {
    let mut app = quiz_app(easy_bank(3), 4);
    send(&mut app, QuizCommand::Start);

    for _ in 0..3 {
        send(&mut app, QuizCommand::SelectAnswer("right".into()));
        run_frames(&mut app, advance_frames());
    }

    let run = run(&app);
    assert_eq!(run.phase(), QuizPhase::Complete);
    let summary = run.summary();
    assert_eq!((summary.score, summary.total), (3, 3));
    assert_eq!(summary.tier, ScoreTier::Expert);

    // Nothing left to advance.
    run_frames(&mut app, advance_frames());
    assert_eq!(app.world().resource::<QuizRun>().phase(), QuizPhase::Complete);
}

#[test]
fn test_leaving_quiz_discards_pending_advance() {
    let mut app = quiz_app(easy_bank(5), 5);
    send(&mut app, ShellCommand::Navigate(Panel::Quiz));
    send(&mut app, QuizCommand::SetDifficulty(DifficultyFilter::Easy));
    send(&mut app, QuizCommand::Start);
    assert_eq!(run(&app).phase(), QuizPhase::InProgress);

    // Answer and leave in the same frame.
    app.world_mut().write_message(QuizCommand::SelectAnswer("right".into()));
    app.world_mut().write_message(ShellCommand::Navigate(Panel::Scene));
    app.update();

    run_frames(&mut app, advance_frames());
    let run = run(&app);
    assert_eq!(run.phase(), QuizPhase::NotStarted);
    assert_eq!(run.index(), 0);
    assert_eq!(run.score(), 0);
    assert!(!run.has_pending_advance());
    assert_eq!(run.filter(), DifficultyFilter::Mixed);
    assert_eq!(app.world().resource::<ShellState>().visible_panel(), Panel::Scene);
}

#[test]
fn test_toggles_do_not_reset_quiz() {
    let mut app = quiz_app(easy_bank(5), 6);
    send(&mut app, ShellCommand::Navigate(Panel::Quiz));
    send(&mut app, QuizCommand::Start);
    send(&mut app, QuizCommand::SelectAnswer("right".into()));

    send(&mut app, ShellCommand::ToggleTheme);
    send(&mut app, ShellCommand::ToggleScale);

    assert_eq!(run(&app).phase(), QuizPhase::InProgress);
    assert_eq!(run(&app).score(), 1);
}

#[test]
fn test_set_difficulty_redraws() {
    let mut app = quiz_app(QuizBank::builtin(), 7);
    send(&mut app, QuizCommand::SetDifficulty(DifficultyFilter::Easy));

    let run = run(&app);
    assert_eq!(run.filter(), DifficultyFilter::Easy);
    let mut ids: Vec<u32> = run.sample().iter().map(|q| q.id).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![1, 2, 5, 15]);
}

#[test]
fn test_try_again_after_completion() {
    let mut app = quiz_app(easy_bank(2), 8);
    send(&mut app, QuizCommand::Start);
    for _ in 0..2 {
        send(&mut app, QuizCommand::SelectAnswer("wrong".into()));
        run_frames(&mut app, advance_frames());
    }
    assert_eq!(run(&app).phase(), QuizPhase::Complete);
    assert_eq!(run(&app).summary().tier, ScoreTier::KeepExploring);

    send(&mut app, QuizCommand::TryAgain);
    let run = run(&app);
    assert_eq!(run.phase(), QuizPhase::NotStarted);
    assert_eq!(run.score(), 0);
    assert_eq!(run.sample().len(), 2);
}

#[test]
fn test_select_planet_opens_detail() {
    let mut app = quiz_app(QuizBank::builtin(), 9);
    send(&mut app, ShellCommand::SelectPlanet("saturn".into()));
    let shell = app.world().resource::<ShellState>();
    assert_eq!(shell.visible_panel(), Panel::Detail);
    assert_eq!(shell.selected_planet.as_deref(), Some("saturn"));
}

#[test]
fn test_unknown_planet_stays_on_detail() {
    let mut app = quiz_app(QuizBank::builtin(), 10);
    app.insert_resource(PlanetCatalog::builtin())
        .add_plugins(DetailPlugin);

    send(&mut app, ShellCommand::SelectPlanet("pluto".into()));
    run_frames(&mut app, 3);

    let shell = app.world().resource::<ShellState>();
    assert_eq!(shell.visible_panel(), Panel::Detail);
    assert_eq!(shell.selected_planet.as_deref(), Some("pluto"));

    let detail = app.world().resource::<DetailViewState>();
    assert_eq!(detail.planet_id.as_deref(), Some("pluto"));
    assert!(detail.resolve(app.world().resource::<PlanetCatalog>()).is_none());

    send(&mut app, ShellCommand::Navigate(Panel::Scene));
    assert_eq!(app.world().resource::<ShellState>().visible_panel(), Panel::Scene);
}
