//! Planet detail view state and the text shown on its tabs.

use std::f32::consts::TAU;

use bevy::prelude::*;

use crate::catalog::{Planet, PlanetCatalog};
use crate::shell::{handle_shell_commands, ShellState};
use crate::types::AppSet;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DetailTab {
    #[default]
    Overview,
    FunFacts,
    Composition,
}

impl DetailTab {
    pub const ALL: [DetailTab; 3] = [DetailTab::Overview, DetailTab::FunFacts, DetailTab::Composition];

    pub fn label(self) -> &'static str {
        match self {
            DetailTab::Overview => "Overview",
            DetailTab::FunFacts => "Fun Facts",
            DetailTab::Composition => "Composition",
        }
    }
}

/// Which planet the detail panel shows and on which tab.
#[derive(Resource, Clone, Debug, Default, PartialEq)]
pub struct DetailViewState {
    pub planet_id: Option<String>,
    pub tab: DetailTab,
    /// Spin of the preview globe in radians, `0..TAU`.
    pub preview_angle: f32,
}

impl DetailViewState {
    /// Show `id`. Switching to a different planet starts on the overview.
    pub fn enter(&mut self, id: &str) {
        if self.planet_id.as_deref() != Some(id) {
            self.planet_id = Some(id.to_string());
            self.tab = DetailTab::Overview;
            self.preview_angle = 0.0;
        }
    }

    pub fn turn_preview(&mut self, delta: f32) {
        self.preview_angle = (self.preview_angle + delta).rem_euclid(TAU);
    }

    /// The planet to show, or `None` when nothing is selected or the id is
    /// unknown. `None` renders the "Planet not found" fallback.
    pub fn resolve<'a>(&self, catalog: &'a PlanetCatalog) -> Option<&'a Planet> {
        self.planet_id.as_deref().and_then(|id| catalog.get(id))
    }
}

/// Plugin keeping [`DetailViewState`] in step with the shell's selection.
pub struct DetailPlugin;

impl Plugin for DetailPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DetailViewState>().add_systems(
            Update,
            sync_detail_selection
                .in_set(AppSet::Commands)
                .after(handle_shell_commands),
        );
    }
}

fn sync_detail_selection(shell: Res<ShellState>, mut detail: ResMut<DetailViewState>) {
    if !shell.is_changed() {
        return;
    }
    if let Some(id) = &shell.selected_planet {
        detail.enter(id);
    }
}

/// Group the integer part with commas and keep up to three decimals,
/// dropping trailing zeros: `149.6 -> "149.6"`, `12756.0 -> "12,756"`.
pub fn format_thousands(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    let negative = rounded < 0.0;
    let abs = rounded.abs();
    let whole = abs.trunc() as u64;
    let frac = ((abs - abs.trunc()) * 1000.0).round() as u64;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let mut out = String::new();
    if negative && (whole > 0 || frac > 0) {
        out.push('-');
    }
    out.push_str(&grouped);
    if frac > 0 {
        let decimals = format!("{frac:03}");
        out.push('.');
        out.push_str(decimals.trim_end_matches('0'));
    }
    out
}

/// A plain number without a trailing `.0`.
pub fn format_plain(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

pub fn format_diameter(planet: &Planet) -> String {
    format!("{} km", format_thousands(planet.diameter))
}

pub fn format_orbital_period(planet: &Planet) -> String {
    if planet.orbital_period == 0.0 {
        "N/A".to_string()
    } else {
        format!("{} Earth days", format_thousands(planet.orbital_period))
    }
}

pub fn format_distance(planet: &Planet) -> String {
    if planet.distance_from_sun == 0.0 {
        "N/A".to_string()
    } else {
        format!("{} million km", format_thousands(planet.distance_from_sun))
    }
}

pub fn format_rotation_period(planet: &Planet) -> String {
    let days = format_plain(planet.rotation_period.abs());
    if planet.is_retrograde() {
        format!("{days} Earth days (retrograde)")
    } else {
        format!("{days} Earth days")
    }
}

pub fn format_temperature(celsius: f64) -> String {
    format!("{}°C", format_plain(celsius))
}

pub fn format_rings(planet: &Planet) -> &'static str {
    if planet.has_rings { "Yes" } else { "No" }
}

pub fn format_mass(planet: &Planet) -> String {
    format!("{} kg", planet.mass)
}

/// Label/value pairs for the overview's "More Details" list.
pub fn detail_rows(planet: &Planet) -> Vec<(&'static str, String)> {
    vec![
        ("Mass", format_mass(planet)),
        ("Distance from Sun", format_distance(planet)),
        ("Rotation Period", format_rotation_period(planet)),
        ("Has Rings", format_rings(planet).to_string()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_resets_tab_on_new_planet() {
        let mut state = DetailViewState::default();
        state.enter("mars");
        state.tab = DetailTab::Composition;

        state.enter("mars");
        assert_eq!(state.tab, DetailTab::Composition);

        state.enter("venus");
        assert_eq!(state.tab, DetailTab::Overview);
        assert_eq!(state.planet_id.as_deref(), Some("venus"));
    }

    #[test]
    fn test_preview_angle_wraps_and_resets() {
        let mut state = DetailViewState::default();
        state.enter("mars");
        state.turn_preview(-0.5);
        assert!((state.preview_angle - (TAU - 0.5)).abs() < 1e-5);
        state.turn_preview(1.0);
        assert!((state.preview_angle - 0.5).abs() < 1e-5);

        state.enter("mars");
        assert!((state.preview_angle - 0.5).abs() < 1e-5);
        state.enter("venus");
        assert_eq!(state.preview_angle, 0.0);
    }

    #[test]
    fn test_resolve_unknown_id_is_none() {
        let catalog = PlanetCatalog::builtin();
        let mut state = DetailViewState::default();
        assert!(state.resolve(&catalog).is_none());

        state.enter("pluto");
        assert!(state.resolve(&catalog).is_none());

        state.enter("earth");
        assert_eq!(state.resolve(&catalog).map(|p| p.name.as_str()), Some("Earth"));
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0.0), "0");
        assert_eq!(format_thousands(999.0), "999");
        assert_eq!(format_thousands(12756.0), "12,756");
        assert_eq!(format_thousands(1_392_700.0), "1,392,700");
        assert_eq!(format_thousands(149.6), "149.6");
        assert_eq!(format_thousands(365.25), "365.25");
        assert_eq!(format_thousands(-1234.5), "-1,234.5");
    }

    #[test]
    fn test_format_plain() {
        assert_eq!(format_plain(15.0), "15");
        assert_eq!(format_plain(-63.0), "-63");
        assert_eq!(format_plain(0.99), "0.99");
    }

    #[test]
    fn test_sun_has_no_orbit_or_distance() {
        let catalog = PlanetCatalog::builtin();
        let sun = catalog.sun();
        assert_eq!(format_orbital_period(sun), "N/A");
        assert_eq!(format_distance(sun), "N/A");
    }

    #[test]
    fn test_retrograde_rotation() {
        let catalog = PlanetCatalog::builtin();
        let venus = catalog.get("venus").unwrap();
        assert!(format_rotation_period(venus).ends_with("(retrograde)"));
        assert!(!format_rotation_period(venus).contains('-'));

        let earth = catalog.get("earth").unwrap();
        assert!(!format_rotation_period(earth).contains("retrograde"));
    }

    #[test]
    fn test_rings_yes_no() {
        let catalog = PlanetCatalog::builtin();
        assert_eq!(format_rings(catalog.get("saturn").unwrap()), "Yes");
        assert_eq!(format_rings(catalog.get("earth").unwrap()), "No");
    }

    #[test]
    fn test_temperature_format() {
        assert_eq!(format_temperature(-195.0), "-195°C");
        assert_eq!(format_temperature(15.0), "15°C");
    }
}
