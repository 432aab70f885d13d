//! Top-level shell: which panel is shown, which planet is selected, and the
//! global view toggles.
//!
//! All navigation arrives as [`ShellCommand`] messages and is applied by a
//! single system, so the scene and panels never change views directly.

use bevy::prelude::*;

use crate::quiz::QuizCommand;
use crate::types::{AppSet, Panel, ScaleMode};

/// Requests that change the shell state.
#[derive(Message, Clone, Debug, PartialEq, Eq)]
pub enum ShellCommand {
    /// A planet was activated; show its details.
    SelectPlanet(String),
    Navigate(Panel),
    ToggleOrbits,
    ToggleScale,
    ToggleTheme,
}

/// Session UI state, lost on exit.
#[derive(Resource, Clone, Debug, PartialEq, Eq)]
pub struct ShellState {
    pub panel: Panel,
    pub selected_planet: Option<String>,
    pub show_orbits: bool,
    pub scale_mode: ScaleMode,
    pub night_mode: bool,
}

impl Default for ShellState {
    fn default() -> Self {
        Self {
            panel: Panel::Scene,
            selected_planet: None,
            show_orbits: true,
            scale_mode: ScaleMode::Visual,
            night_mode: false,
        }
    }
}

impl ShellState {
    /// Apply a command and return the panel that was visible before it, if
    /// the visible panel changed.
    pub fn apply(&mut self, command: ShellCommand) -> Option<Panel> {
        let before = self.visible_panel();
        match command {
            ShellCommand::SelectPlanet(id) => {
                self.selected_planet = Some(id);
                self.panel = Panel::Detail;
            }
            ShellCommand::Navigate(panel) => self.panel = panel,
            ShellCommand::ToggleOrbits => self.show_orbits = !self.show_orbits,
            ShellCommand::ToggleScale => self.scale_mode = self.scale_mode.toggled(),
            ShellCommand::ToggleTheme => self.night_mode = !self.night_mode,
        }
        (self.visible_panel() != before).then_some(before)
    }

    /// The panel actually rendered. Detail without a selection falls back to
    /// the scene.
    pub fn visible_panel(&self) -> Panel {
        match (self.panel, &self.selected_planet) {
            (Panel::Detail, None) => Panel::Scene,
            (panel, _) => panel,
        }
    }
}

/// Plugin owning [`ShellState`].
pub struct ShellPlugin;

impl Plugin for ShellPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ShellState>()
            .add_message::<ShellCommand>()
            .add_message::<QuizCommand>()
            // input -> command handling -> scene composition, every frame
            .configure_sets(
                Update,
                (AppSet::Input, AppSet::Commands, AppSet::Scene).chain(),
            )
            .add_systems(
                Update,
                handle_shell_commands
                    .in_set(AppSet::Commands)
                    .before(crate::quiz::handle_quiz_commands),
            );
    }
}

/// Apply queued shell commands. Leaving the quiz tells the quiz engine to
/// drop its run.
pub fn handle_shell_commands(
    mut commands: MessageReader<ShellCommand>,
    mut quiz_commands: MessageWriter<QuizCommand>,
    mut shell: ResMut<ShellState>,
) {
    for command in commands.read() {
        let Some(previous) = shell.apply(command.clone()) else {
            continue;
        };
        let current = shell.visible_panel();
        info!("Panel: {} -> {}", previous.label(), current.label());
        if previous == Panel::Quiz {
            quiz_commands.write(QuizCommand::Leave);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_planet_opens_detail() {
        let mut shell = ShellState::default();
        let previous = shell.apply(ShellCommand::SelectPlanet("mars".into()));
        assert_eq!(previous, Some(Panel::Scene));
        assert_eq!(shell.visible_panel(), Panel::Detail);
        assert_eq!(shell.selected_planet.as_deref(), Some("mars"));
    }

    #[test]
    fn test_detail_without_selection_shows_scene() {
        let mut shell = ShellState::default();
        assert_eq!(shell.apply(ShellCommand::Navigate(Panel::Detail)), None);
        assert_eq!(shell.panel, Panel::Detail);
        assert_eq!(shell.visible_panel(), Panel::Scene);
    }

    #[test]
    fn test_toggles_are_independent() {
        let mut shell = ShellState::default();
        shell.apply(ShellCommand::ToggleOrbits);
        assert!(!shell.show_orbits);
        assert_eq!(shell.scale_mode, ScaleMode::Visual);
        assert!(!shell.night_mode);

        shell.apply(ShellCommand::ToggleScale);
        shell.apply(ShellCommand::ToggleTheme);
        assert!(!shell.show_orbits);
        assert_eq!(shell.scale_mode, ScaleMode::Realistic);
        assert!(shell.night_mode);
    }

    #[test]
    fn test_toggle_keeps_panel() {
        let mut shell = ShellState::default();
        shell.apply(ShellCommand::Navigate(Panel::Quiz));
        assert_eq!(shell.apply(ShellCommand::ToggleTheme), None);
        assert_eq!(shell.visible_panel(), Panel::Quiz);
    }

    #[test]
    fn test_navigate_back_keeps_selection() {
        let mut shell = ShellState::default();
        shell.apply(ShellCommand::SelectPlanet("earth".into()));
        shell.apply(ShellCommand::Navigate(Panel::Scene));
        assert_eq!(shell.visible_panel(), Panel::Scene);
        assert_eq!(shell.selected_planet.as_deref(), Some("earth"));
    }
}
