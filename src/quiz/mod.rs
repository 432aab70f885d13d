//! Quiz engine: question sampling, scoring and the auto-advance state machine.
//!
//! A run moves `NotStarted -> InProgress -> Complete`. Inside `InProgress` a
//! question is either open or answered; answering schedules an advance that
//! is driven by [`QuizRun::tick`]. Every transition is a plain method so the
//! engine can be exercised without an app.

mod plugin;
mod timer;

#[cfg(test)]
mod proptest_quiz;

use bevy::prelude::*;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::catalog::{Difficulty, QuizBank, QuizQuestion};

pub use plugin::{handle_quiz_commands, QuizCommand, QuizNotice, QuizPlugin, QuizRng};
pub use timer::ScheduledAdvance;

/// Maximum number of questions in a run.
pub const SAMPLE_LIMIT: usize = 10;

/// Seconds between answering and moving on.
pub const ADVANCE_DELAY_SECS: f32 = 1.5;

/// Quiz tuning.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct QuizSettings {
    pub sample_size: usize,
    pub advance_delay: f32,
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            sample_size: SAMPLE_LIMIT,
            advance_delay: ADVANCE_DELAY_SECS,
        }
    }
}

/// Which questions a run draws from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DifficultyFilter {
    Easy,
    Medium,
    Hard,
    #[default]
    Mixed,
}

impl DifficultyFilter {
    pub const ALL: [DifficultyFilter; 4] = [
        DifficultyFilter::Easy,
        DifficultyFilter::Medium,
        DifficultyFilter::Hard,
        DifficultyFilter::Mixed,
    ];

    pub fn matches(self, difficulty: Difficulty) -> bool {
        match self {
            DifficultyFilter::Easy => difficulty == Difficulty::Easy,
            DifficultyFilter::Medium => difficulty == Difficulty::Medium,
            DifficultyFilter::Hard => difficulty == Difficulty::Hard,
            DifficultyFilter::Mixed => true,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DifficultyFilter::Easy => "Easy",
            DifficultyFilter::Medium => "Medium",
            DifficultyFilter::Hard => "Hard",
            DifficultyFilter::Mixed => "Mixed",
        }
    }

    pub fn blurb(self) -> &'static str {
        match self {
            DifficultyFilter::Easy => "For beginners",
            DifficultyFilter::Medium => "Some knowledge required",
            DifficultyFilter::Hard => "For space experts",
            DifficultyFilter::Mixed => "All difficulty levels",
        }
    }
}

/// Filter the bank, shuffle with `rng` and keep at most `limit` questions.
///
/// A short pool yields a short sample; an empty pool yields an empty one.
pub fn draw_sample(
    bank: &QuizBank,
    filter: DifficultyFilter,
    rng: &mut impl Rng,
    limit: usize,
) -> Vec<QuizQuestion> {
    let mut pool: Vec<QuizQuestion> = bank
        .all()
        .iter()
        .filter(|q| filter.matches(q.difficulty))
        .cloned()
        .collect();
    pool.shuffle(rng);
    pool.truncate(limit);
    pool
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum QuizPhase {
    #[default]
    NotStarted,
    InProgress,
    Complete,
}

/// Result of [`QuizRun::select_answer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// Not accepted: wrong phase, already answered, or not one of the options.
    Ignored,
    Correct,
    Wrong,
}

/// Result of [`QuizRun::tick`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Idle,
    /// Moved on to the next question.
    Advanced,
    /// The last question was answered; the run is now complete.
    Completed,
}

/// How an option button should look.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionFeedback {
    /// Question still open.
    Neutral,
    /// The right answer, shown once answered.
    Correct,
    /// The user's pick, and it was wrong.
    WrongSelected,
    /// Any other option after answering.
    Dimmed,
}

/// A single quiz attempt.
#[derive(Resource, Clone, Debug)]
pub struct QuizRun {
    filter: DifficultyFilter,
    sample: Vec<QuizQuestion>,
    index: usize,
    score: u32,
    selected: Option<String>,
    phase: QuizPhase,
    pending: ScheduledAdvance,
    limit: usize,
    advance_delay: f32,
}

impl Default for QuizRun {
    fn default() -> Self {
        Self::empty(&QuizSettings::default())
    }
}

impl QuizRun {
    /// A run with no questions, used until a bank has been drawn from.
    pub fn empty(settings: &QuizSettings) -> Self {
        Self {
            filter: DifficultyFilter::default(),
            sample: Vec::new(),
            index: 0,
            score: 0,
            selected: None,
            phase: QuizPhase::NotStarted,
            pending: ScheduledAdvance::default(),
            limit: settings.sample_size,
            advance_delay: settings.advance_delay,
        }
    }

    /// Draw a fresh run.
    pub fn new(
        bank: &QuizBank,
        filter: DifficultyFilter,
        rng: &mut impl Rng,
        settings: &QuizSettings,
    ) -> Self {
        let mut run = Self {
            filter,
            ..Self::empty(settings)
        };
        run.reset(bank, rng);
        run
    }

    /// Re-draw with the current filter and clear all progress in one step.
    pub fn reset(&mut self, bank: &QuizBank, rng: &mut impl Rng) {
        self.pending.cancel();
        self.sample = draw_sample(bank, self.filter, rng, self.limit);
        self.index = 0;
        self.score = 0;
        self.selected = None;
        self.phase = QuizPhase::NotStarted;
    }

    /// Change the filter and re-draw. Allowed from any phase.
    pub fn set_difficulty(&mut self, filter: DifficultyFilter, bank: &QuizBank, rng: &mut impl Rng) {
        self.filter = filter;
        self.reset(bank, rng);
    }

    pub fn try_again(&mut self, bank: &QuizBank, rng: &mut impl Rng) {
        self.reset(bank, rng);
    }

    /// Navigating away: the pending advance is discarded, progress is lost and
    /// the filter goes back to mixed.
    pub fn leave(&mut self, bank: &QuizBank, rng: &mut impl Rng) {
        self.filter = DifficultyFilter::Mixed;
        self.reset(bank, rng);
    }

    /// Returns false if the run is not waiting to start or has no questions.
    pub fn start(&mut self) -> bool {
        if self.phase != QuizPhase::NotStarted || self.sample.is_empty() {
            return false;
        }
        self.phase = QuizPhase::InProgress;
        true
    }

    pub fn select_answer(&mut self, option: &str) -> AnswerOutcome {
        if self.phase != QuizPhase::InProgress || self.selected.is_some() {
            return AnswerOutcome::Ignored;
        }
        let Some(question) = self.sample.get(self.index) else {
            return AnswerOutcome::Ignored;
        };
        if !question.options.iter().any(|o| o == option) {
            return AnswerOutcome::Ignored;
        }

        let correct = question.is_correct(option);
        self.selected = Some(option.to_string());
        if correct {
            self.score += 1;
        }
        self.pending.schedule(self.advance_delay);

        if correct {
            AnswerOutcome::Correct
        } else {
            AnswerOutcome::Wrong
        }
    }

    /// Drive the scheduled advance by `dt` seconds.
    pub fn tick(&mut self, dt: f32) -> TickOutcome {
        if self.phase != QuizPhase::InProgress || !self.pending.tick(dt) {
            return TickOutcome::Idle;
        }

        if self.index + 1 < self.sample.len() {
            self.index += 1;
            self.selected = None;
            TickOutcome::Advanced
        } else {
            self.phase = QuizPhase::Complete;
            TickOutcome::Completed
        }
    }

    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    pub fn filter(&self) -> DifficultyFilter {
        self.filter
    }

    pub fn sample(&self) -> &[QuizQuestion] {
        &self.sample
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn is_answered(&self) -> bool {
        self.selected.is_some()
    }

    pub fn has_pending_advance(&self) -> bool {
        self.pending.is_pending()
    }

    /// The question on screen, only while in progress.
    pub fn current_question(&self) -> Option<&QuizQuestion> {
        match self.phase {
            QuizPhase::InProgress => self.sample.get(self.index),
            _ => None,
        }
    }

    /// `(index + 1) / len`, or 0 for an empty run.
    pub fn progress(&self) -> f32 {
        if self.sample.is_empty() {
            0.0
        } else {
            (self.index + 1) as f32 / self.sample.len() as f32
        }
    }

    pub fn option_feedback(&self, option: &str) -> OptionFeedback {
        let (Some(question), Some(selected)) = (self.current_question(), self.selected()) else {
            return OptionFeedback::Neutral;
        };
        if question.is_correct(option) {
            OptionFeedback::Correct
        } else if selected == option {
            OptionFeedback::WrongSelected
        } else {
            OptionFeedback::Dimmed
        }
    }

    /// The explanation, once the current question has been answered.
    pub fn explanation(&self) -> Option<&str> {
        if !self.is_answered() {
            return None;
        }
        self.current_question().map(|q| q.explanation.as_str())
    }

    pub fn summary(&self) -> ScoreSummary {
        ScoreSummary::new(self.score, self.sample.len())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreTier {
    Expert,
    Great,
    Good,
    KeepExploring,
}

impl ScoreTier {
    pub fn from_percentage(percentage: f32) -> Self {
        if percentage >= 90.0 {
            ScoreTier::Expert
        } else if percentage >= 70.0 {
            ScoreTier::Great
        } else if percentage >= 50.0 {
            ScoreTier::Good
        } else {
            ScoreTier::KeepExploring
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            ScoreTier::Expert => "Amazing! You're a solar system expert!",
            ScoreTier::Great => "Great job! You know a lot about planets!",
            ScoreTier::Good => "Good effort! Keep learning about space!",
            ScoreTier::KeepExploring => "Keep exploring the solar system to learn more!",
        }
    }

    /// Severity color as sRGB bytes, greener for better scores.
    pub fn color(self) -> [u8; 3] {
        match self {
            ScoreTier::Expert => [74, 222, 128],
            ScoreTier::Great => [34, 197, 94],
            ScoreTier::Good => [250, 204, 21],
            ScoreTier::KeepExploring => [248, 113, 113],
        }
    }
}

/// Final result of a run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScoreSummary {
    pub score: u32,
    pub total: usize,
    pub percentage: f32,
    pub tier: ScoreTier,
}

impl ScoreSummary {
    pub fn new(score: u32, total: usize) -> Self {
        let percentage = if total == 0 {
            0.0
        } else {
            score as f32 * 100.0 / total as f32
        };
        Self {
            score,
            total,
            percentage,
            tier: ScoreTier::from_percentage(percentage),
        }
    }
}
