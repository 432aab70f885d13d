//! Short-lived answer notifications shown at the top of the screen.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::quiz::QuizNotice;

use super::icons;
use super::theme::colors;

/// Seconds a toast stays on screen.
pub const TOAST_LIFETIME: f32 = 2.0;

/// Seconds of fade-out at the end of the lifetime.
const FADE_SECS: f32 = 0.5;

/// Toasts kept at once; older ones are dropped first.
const MAX_TOASTS: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Toast {
    pub notice: QuizNotice,
    pub remaining: f32,
}

impl Toast {
    /// Opacity in `0..=1`, falling off over the last [`FADE_SECS`].
    pub fn alpha(&self) -> f32 {
        (self.remaining / FADE_SECS).clamp(0.0, 1.0)
    }

    pub fn text(&self) -> &'static str {
        match self.notice {
            QuizNotice::Correct => "Correct answer!",
            QuizNotice::Wrong => "Wrong answer!",
        }
    }
}

/// Live toasts, newest last.
#[derive(Resource, Default, Debug)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
}

impl ToastState {
    pub fn push(&mut self, notice: QuizNotice) {
        self.toasts.push(Toast {
            notice,
            remaining: TOAST_LIFETIME,
        });
        if self.toasts.len() > MAX_TOASTS {
            let excess = self.toasts.len() - MAX_TOASTS;
            self.toasts.drain(..excess);
        }
    }

    pub fn tick(&mut self, dt: f32) {
        for toast in &mut self.toasts {
            toast.remaining -= dt;
        }
        self.toasts.retain(|t| t.remaining > 0.0);
    }
}

/// Collect notices from the quiz engine and age existing toasts.
pub fn update_toasts(
    mut notices: MessageReader<QuizNotice>,
    mut state: ResMut<ToastState>,
    time: Res<Time>,
) {
    state.tick(time.delta_secs());
    for notice in notices.read() {
        state.push(*notice);
    }
}

pub fn toast_system(mut contexts: EguiContexts, state: Res<ToastState>) {
    if state.toasts.is_empty() {
        return;
    }
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::Area::new(egui::Id::new("quiz_toasts"))
        .anchor(egui::Align2::CENTER_TOP, egui::vec2(0.0, 72.0))
        .order(egui::Order::Foreground)
        .interactable(false)
        .show(ctx, |ui| {
            for toast in &state.toasts {
                let alpha = toast.alpha();
                let (icon, accent) = match toast.notice {
                    QuizNotice::Correct => (icons::SUCCESS, colors::CORRECT),
                    QuizNotice::Wrong => (icons::FAILURE, colors::WRONG),
                };
                egui::Frame::NONE
                    .fill(egui::Color32::from_rgb(255, 255, 255).gamma_multiply(alpha))
                    .corner_radius(8.0)
                    .inner_margin(egui::Margin::symmetric(16, 8))
                    .stroke(egui::Stroke::new(1.0, accent.gamma_multiply(alpha)))
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.label(icons::icon_colored(icon, 18.0, accent.gamma_multiply(alpha)));
                            ui.label(
                                egui::RichText::new(toast.text())
                                    .size(15.0)
                                    .color(egui::Color32::from_gray(30).gamma_multiply(alpha)),
                            );
                        });
                    });
                ui.add_space(6.0);
            }
        });
    // Keep fading while nothing else triggers a repaint.
    ctx.request_repaint();
}
