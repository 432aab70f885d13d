//! UI module providing the egui-based interface.
//!
//! A navigation bar sits on top; below it either the 3D scene shows through
//! or a full panel (planet detail, quiz) covers it.

mod detail_panel;
pub mod icons;
mod navbar;
mod quiz_panel;
pub mod theme;
mod toasts;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

pub use toasts::{Toast, ToastState};

/// Plugin that adds all UI systems.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<icons::FontsInitialized>()
            .init_resource::<ToastState>()
            // Notices arrive from quiz command handling.
            .add_systems(Update, toasts::update_toasts.after(crate::quiz::handle_quiz_commands))
            // Font initialization MUST run before any UI systems that use icons
            .add_systems(EguiPrimaryContextPass, icons::setup_fonts)
            .add_systems(
                EguiPrimaryContextPass,
                (
                    // Top panel before the central ones
                    navbar::navbar_system,
                    detail_panel::detail_panel_system,
                    quiz_panel::quiz_panel_system,
                    toasts::toast_system,
                )
                    .chain()
                    .after(icons::setup_fonts)
                    .run_if(|init: Res<icons::FontsInitialized>| init.0),
            );
    }
}
