//! Body labels using egui for text rendering.
//!
//! Names are painted at the projected label anchor of each body. The frame
//! only carries labels while orbits are shown.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::camera::MainCamera;
use crate::render::CurrentFrame;
use crate::shell::ShellState;
use crate::types::Panel;

/// Settings for label rendering.
#[derive(Resource)]
pub struct LabelSettings {
    pub font_size: f32,
    /// Extra screen-space offset, in pixels, above the projected anchor.
    pub offset: f32,
}

impl Default for LabelSettings {
    fn default() -> Self {
        Self {
            font_size: 14.0,
            offset: 4.0,
        }
    }
}

/// Draw labels for all celestial bodies.
pub fn draw_body_labels(
    mut contexts: EguiContexts,
    frame: Res<CurrentFrame>,
    camera: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    settings: Res<LabelSettings>,
    shell: Res<ShellState>,
) {
    if shell.visible_panel() != Panel::Scene {
        return;
    }
    let Ok((camera, camera_transform)) = camera.single() else {
        return;
    };
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let painter = ctx.layer_painter(egui::LayerId::new(
        egui::Order::Background,
        egui::Id::new("body_labels"),
    ));
    let font = egui::FontId::proportional(settings.font_size);

    for label in frame.0.bodies.iter().filter_map(|b| b.label.as_ref()) {
        let Ok(screen_pos) = camera.world_to_viewport(camera_transform, label.position) else {
            continue;
        };
        let pos = egui::pos2(screen_pos.x, screen_pos.y - settings.offset);

        // Shadow
        painter.text(
            pos + egui::vec2(1.0, 1.0),
            egui::Align2::CENTER_BOTTOM,
            &label.text,
            font.clone(),
            egui::Color32::from_rgba_unmultiplied(0, 0, 0, 180),
        );
        painter.text(
            pos,
            egui::Align2::CENTER_BOTTOM,
            &label.text,
            font.clone(),
            egui::Color32::WHITE,
        );
    }
}
