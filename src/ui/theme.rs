//! Day and night color palettes for the panels.

use bevy_egui::egui::Color32;

use crate::quiz::{DifficultyFilter, OptionFeedback};

/// Colors that depend on the theme.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub nav_bg: Color32,
    pub panel_bg: Color32,
    pub card_bg: Color32,
    /// Fill of the selected nav button or tab.
    pub active: Color32,
}

impl Palette {
    pub const DAY: Palette = Palette {
        nav_bg: Color32::from_rgb(49, 46, 129),
        panel_bg: Color32::from_rgba_premultiplied(44, 41, 116, 230),
        card_bg: Color32::from_rgb(55, 48, 163),
        active: Color32::from_rgb(67, 56, 202),
    };

    pub const NIGHT: Palette = Palette {
        nav_bg: Color32::from_rgb(31, 41, 55),
        panel_bg: Color32::from_rgba_premultiplied(15, 22, 35, 235),
        card_bg: Color32::from_rgb(45, 55, 72),
        active: Color32::from_rgb(75, 85, 99),
    };

    pub fn for_theme(night_mode: bool) -> Self {
        if night_mode { Self::NIGHT } else { Self::DAY }
    }
}

/// Theme-independent colors.
pub mod colors {
    use bevy_egui::egui::Color32;

    pub const ACCENT: Color32 = Color32::from_rgb(250, 204, 21);
    pub const ON_ACCENT: Color32 = Color32::from_rgb(49, 46, 129);
    pub const TEXT: Color32 = Color32::WHITE;
    pub const MUTED: Color32 = Color32::from_rgb(209, 213, 219);
    pub const CORRECT: Color32 = Color32::from_rgb(22, 163, 74);
    pub const CORRECT_MARK: Color32 = Color32::from_rgb(134, 239, 172);
    pub const WRONG: Color32 = Color32::from_rgb(220, 38, 38);
    pub const WRONG_MARK: Color32 = Color32::from_rgb(252, 165, 165);
    pub const TEMP_COLD: Color32 = Color32::from_rgb(59, 130, 246);
    pub const TEMP_HOT: Color32 = Color32::from_rgb(239, 68, 68);
}

/// Fill for a quiz option button.
pub fn option_fill(feedback: OptionFeedback, palette: &Palette) -> Color32 {
    match feedback {
        OptionFeedback::Neutral => palette.card_bg,
        OptionFeedback::Correct => colors::CORRECT,
        OptionFeedback::WrongSelected => colors::WRONG,
        OptionFeedback::Dimmed => palette.card_bg.gamma_multiply(0.7),
    }
}

/// Highlight for the chosen difficulty card.
pub fn difficulty_color(filter: DifficultyFilter) -> Color32 {
    match filter {
        DifficultyFilter::Easy => Color32::from_rgb(22, 163, 74),
        DifficultyFilter::Medium => Color32::from_rgb(202, 138, 4),
        DifficultyFilter::Hard => Color32::from_rgb(220, 38, 38),
        DifficultyFilter::Mixed => Color32::from_rgb(147, 51, 234),
    }
}

/// Linear blend in sRGB space, `t` clamped to `0..=1`.
pub fn lerp_color(from: Color32, to: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
    Color32::from_rgb(mix(from.r(), to.r()), mix(from.g(), to.g()), mix(from.b(), to.b()))
}

pub fn rgb(color: [u8; 3]) -> Color32 {
    let [r, g, b] = color;
    Color32::from_rgb(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palettes_differ() {
        assert_ne!(Palette::for_theme(false), Palette::for_theme(true));
        assert_eq!(Palette::for_theme(true), Palette::NIGHT);
    }

    #[test]
    fn test_lerp_color_endpoints() {
        assert_eq!(lerp_color(colors::TEMP_COLD, colors::TEMP_HOT, 0.0), colors::TEMP_COLD);
        assert_eq!(lerp_color(colors::TEMP_COLD, colors::TEMP_HOT, 1.0), colors::TEMP_HOT);
        assert_eq!(lerp_color(colors::TEMP_COLD, colors::TEMP_HOT, 7.0), colors::TEMP_HOT);
    }

    #[test]
    fn test_option_fill() {
        let palette = Palette::DAY;
        assert_eq!(option_fill(OptionFeedback::Correct, &palette), colors::CORRECT);
        assert_eq!(option_fill(OptionFeedback::WrongSelected, &palette), colors::WRONG);
        assert_eq!(option_fill(OptionFeedback::Neutral, &palette), palette.card_bg);
        assert_ne!(option_fill(OptionFeedback::Dimmed, &palette), palette.card_bg);
    }
}
