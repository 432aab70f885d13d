//! Quiz panel: difficulty selection, questions and the final score.
//!
//! The panel only renders [`QuizRun`] and emits [`QuizCommand`]s; all state
//! changes happen in the quiz plugin.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::catalog::PlanetCatalog;
use crate::quiz::{DifficultyFilter, OptionFeedback, QuizCommand, QuizPhase, QuizRun};
use crate::shell::{ShellCommand, ShellState};
use crate::types::Panel;

use super::detail_panel::paint_planet_disc;
use super::icons;
use super::theme::{Palette, colors, difficulty_color, option_fill, rgb};

const CONTENT_WIDTH: f32 = 720.0;
const THUMBNAIL_RADIUS: f32 = 48.0;

/// Text shown above the progress bar.
pub fn progress_label(run: &QuizRun) -> String {
    format!("Question {} of {}", run.index() + 1, run.sample().len())
}

pub fn quiz_panel_system(
    mut contexts: EguiContexts,
    shell: Res<ShellState>,
    run: Res<QuizRun>,
    catalog: Res<PlanetCatalog>,
    mut quiz_commands: MessageWriter<QuizCommand>,
    mut shell_commands: MessageWriter<ShellCommand>,
) {
    if shell.visible_panel() != Panel::Quiz {
        return;
    }
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };
    let palette = Palette::for_theme(shell.night_mode);

    egui::CentralPanel::default()
        .frame(
            egui::Frame::NONE
                .fill(palette.panel_bg)
                .inner_margin(egui::Margin::same(24)),
        )
        .show(ctx, |ui| {
            let back = egui::Button::new(icons::icon_colored(icons::BACK, 22.0, colors::TEXT))
                .fill(palette.active)
                .corner_radius(18.0)
                .min_size(egui::vec2(40.0, 40.0));
            if ui.add(back).on_hover_text("Back to Solar System (Esc)").clicked() {
                shell_commands.write(ShellCommand::Navigate(Panel::Scene));
            }

            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.set_max_width(CONTENT_WIDTH);
                    ui.label(
                        egui::RichText::new("Solar System Quiz")
                            .size(28.0)
                            .strong()
                            .color(colors::TEXT),
                    );
                    ui.label(
                        egui::RichText::new("Test your knowledge about our planetary neighbors!")
                            .color(colors::MUTED),
                    );
                    ui.add_space(24.0);

                    match run.phase() {
                        QuizPhase::NotStarted => {
                            render_setup(ui, &run, &palette, &mut quiz_commands)
                        }
                        QuizPhase::InProgress => render_question(
                            ui,
                            &run,
                            &catalog,
                            &palette,
                            &mut quiz_commands,
                        ),
                        QuizPhase::Complete => render_complete(
                            ui,
                            &run,
                            &palette,
                            &mut quiz_commands,
                            &mut shell_commands,
                        ),
                    }
                });
            });
        });
}

fn render_setup(
    ui: &mut egui::Ui,
    run: &QuizRun,
    palette: &Palette,
    quiz_commands: &mut MessageWriter<QuizCommand>,
) {
    ui.label(egui::RichText::new("Select difficulty level:").size(20.0).color(colors::TEXT));
    ui.add_space(16.0);

    egui::Grid::new("difficulty")
        .num_columns(2)
        .spacing(egui::vec2(12.0, 12.0))
        .show(ui, |ui| {
            for (i, filter) in DifficultyFilter::ALL.into_iter().enumerate() {
                let fill = if run.filter() == filter {
                    difficulty_color(filter)
                } else {
                    palette.card_bg
                };
                let text = egui::RichText::new(format!("{}\n{}", filter.label(), filter.blurb()))
                    .size(15.0)
                    .color(colors::TEXT);
                let button = egui::Button::new(text)
                    .fill(fill)
                    .corner_radius(8.0)
                    .min_size(egui::vec2(CONTENT_WIDTH / 2.0 - 12.0, 64.0));
                if ui.add(button).clicked() {
                    quiz_commands.write(QuizCommand::SetDifficulty(filter));
                }
                if i % 2 == 1 {
                    ui.end_row();
                }
            }
        });
    ui.add_space(24.0);

    let empty = run.sample().is_empty();
    let start = egui::Button::new(
        egui::RichText::new("Start Quiz")
            .size(18.0)
            .strong()
            .color(colors::ON_ACCENT),
    )
    .fill(colors::ACCENT)
    .corner_radius(8.0)
    .min_size(egui::vec2(180.0, 44.0));
    let response = ui.add_enabled(!empty, start);
    if empty {
        response.on_disabled_hover_text("No questions for this difficulty");
    } else if response.clicked() {
        quiz_commands.write(QuizCommand::Start);
    }
}

fn render_question(
    ui: &mut egui::Ui,
    run: &QuizRun,
    catalog: &PlanetCatalog,
    palette: &Palette,
    quiz_commands: &mut MessageWriter<QuizCommand>,
) {
    let Some(question) = run.current_question() else {
        return;
    };

    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(progress_label(run)).color(colors::MUTED));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(egui::RichText::new(format!("Score: {}", run.score())).color(colors::MUTED));
        });
    });
    ui.add(
        egui::ProgressBar::new(run.progress())
            .fill(colors::ACCENT)
            .desired_height(8.0),
    );
    ui.add_space(20.0);

    ui.label(
        egui::RichText::new(&question.question)
            .size(20.0)
            .strong()
            .color(colors::TEXT),
    );
    ui.add_space(12.0);

    if let Some(planet) = question.planet_id.as_deref().and_then(|id| catalog.get(id)) {
        let size = egui::vec2(THUMBNAIL_RADIUS * 2.0, THUMBNAIL_RADIUS * 2.0);
        let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
        painter.circle_stroke(
            response.rect.center(),
            THUMBNAIL_RADIUS - 2.0,
            egui::Stroke::new(4.0, palette.active),
        );
        paint_planet_disc(&painter, response.rect.center(), THUMBNAIL_RADIUS - 6.0, planet);
        ui.add_space(12.0);
    }

    for option in &question.options {
        let feedback = run.option_feedback(option);
        let mut text = egui::RichText::new(option).size(16.0).color(colors::TEXT);
        let mark = match feedback {
            OptionFeedback::Correct => Some((icons::CORRECT, colors::CORRECT_MARK)),
            OptionFeedback::WrongSelected => Some((icons::WRONG, colors::WRONG_MARK)),
            _ => None,
        };
        if feedback == OptionFeedback::Dimmed {
            text = text.color(colors::TEXT.gamma_multiply(0.7));
        }

        let mut job = egui::text::LayoutJob::default();
        if let Some((icon, color)) = mark {
            icons::icon_colored(icon, 16.0, color).append_to(
                &mut job,
                ui.style(),
                egui::FontSelection::Default,
                egui::Align::Center,
            );
            egui::RichText::new("  ").append_to(
                &mut job,
                ui.style(),
                egui::FontSelection::Default,
                egui::Align::Center,
            );
        }
        text.append_to(&mut job, ui.style(), egui::FontSelection::Default, egui::Align::Center);

        let button = egui::Button::new(job)
            .fill(option_fill(feedback, palette))
            .corner_radius(8.0)
            .min_size(egui::vec2(ui.available_width(), 44.0));
        // Answered options stay visible but inert.
        if ui.add_enabled(!run.is_answered(), button).clicked() {
            quiz_commands.write(QuizCommand::SelectAnswer(option.clone()));
        }
        ui.add_space(6.0);
    }

    if let Some(explanation) = run.explanation() {
        ui.add_space(10.0);
        egui::Frame::NONE
            .fill(palette.card_bg.gamma_multiply(0.6))
            .corner_radius(8.0)
            .inner_margin(egui::Margin::same(12))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal_wrapped(|ui| {
                    ui.label(
                        egui::RichText::new("Explanation:")
                            .strong()
                            .color(colors::ACCENT),
                    );
                    ui.label(egui::RichText::new(explanation).color(colors::MUTED));
                });
            });
    }
}

fn render_complete(
    ui: &mut egui::Ui,
    run: &QuizRun,
    palette: &Palette,
    quiz_commands: &mut MessageWriter<QuizCommand>,
    shell_commands: &mut MessageWriter<ShellCommand>,
) {
    let summary = run.summary();

    ui.label(icons::icon_colored(icons::AWARD, 80.0, colors::ACCENT));
    ui.add_space(8.0);
    ui.label(
        egui::RichText::new("Quiz Complete!")
            .size(24.0)
            .strong()
            .color(colors::TEXT),
    );
    ui.label(
        egui::RichText::new(format!(
            "Your score: {} out of {}",
            summary.score, summary.total
        ))
        .size(20.0)
        .strong()
        .color(rgb(summary.tier.color())),
    );
    ui.label(egui::RichText::new(summary.tier.message()).color(colors::MUTED));
    ui.add_space(24.0);

    ui.horizontal(|ui| {
        // Center the two buttons.
        let buttons_width = 2.0 * 220.0 + ui.spacing().item_spacing.x;
        ui.add_space(((ui.available_width() - buttons_width) / 2.0).max(0.0));

        let retry = egui::Button::new(
            egui::RichText::new(format!("{}  Try Again", icons::RETRY))
                .size(16.0)
                .color(colors::TEXT),
        )
        .fill(palette.active)
        .corner_radius(8.0)
        .min_size(egui::vec2(220.0, 44.0));
        if ui.add(retry).clicked() {
            quiz_commands.write(QuizCommand::TryAgain);
        }

        let explore = egui::Button::new(
            egui::RichText::new(format!("{}  Explore Solar System", icons::PLANET))
                .size(16.0)
                .color(colors::ON_ACCENT),
        )
        .fill(colors::ACCENT)
        .corner_radius(8.0)
        .min_size(egui::vec2(220.0, 44.0));
        if ui.add(explore).clicked() {
            shell_commands.write(ShellCommand::Navigate(Panel::Scene));
        }
    });
}
