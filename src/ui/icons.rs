//! Phosphor icon definitions for the UI.
//!
//! Provides icon constants using the Phosphor icon font.
//! Icons are initialized via `setup_fonts` when the app starts.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

/// Resource to track if fonts have been initialized.
#[derive(Resource, Default)]
pub struct FontsInitialized(pub bool);

/// System to initialize Phosphor icon fonts.
/// Runs in EguiPrimaryContextPass where the egui context is guaranteed to be ready.
pub fn setup_fonts(mut contexts: EguiContexts, mut initialized: ResMut<FontsInitialized>) {
    if initialized.0 {
        return;
    }

    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);

    ctx.set_fonts(fonts);
    initialized.0 = true;

    info!("Phosphor icon fonts initialized");
}

/// Icon glyph as rich text with a size and color.
pub fn icon_colored(icon: &str, size: f32, color: egui::Color32) -> egui::RichText {
    egui::RichText::new(icon).size(size).color(color)
}

// Browse all icons at https://phosphoricons.com/

// Navigation
pub const BACK: &str = egui_phosphor::regular::ARROW_LEFT;
pub const PLANET: &str = egui_phosphor::regular::GLOBE;

// View toggles
/// Orbits shown
pub const ORBITS_ON: &str = egui_phosphor::regular::EYE;
/// Orbits hidden
pub const ORBITS_OFF: &str = egui_phosphor::regular::EYE_SLASH;
pub const SCALE: &str = egui_phosphor::regular::SCALES;
/// Switch to day mode
pub const DAY: &str = egui_phosphor::regular::SUN;
/// Switch to night mode
pub const NIGHT: &str = egui_phosphor::regular::MOON;

// Detail cards
pub const DIAMETER: &str = egui_phosphor::regular::RULER;
pub const TEMPERATURE: &str = egui_phosphor::regular::THERMOMETER;
pub const PERIOD: &str = egui_phosphor::regular::CLOCK;
pub const MOONS: &str = egui_phosphor::regular::PLANET;
pub const INFO: &str = egui_phosphor::regular::INFO;

// Quiz
pub const CORRECT: &str = egui_phosphor::regular::CHECK;
pub const WRONG: &str = egui_phosphor::regular::X;
pub const AWARD: &str = egui_phosphor::regular::TROPHY;
pub const RETRY: &str = egui_phosphor::regular::ARROWS_CLOCKWISE;
pub const SUCCESS: &str = egui_phosphor::regular::CHECK_CIRCLE;
pub const FAILURE: &str = egui_phosphor::regular::X_CIRCLE;
