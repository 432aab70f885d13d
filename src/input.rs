//! Keyboard shortcuts.
//!
//! Every shortcut is translated into a [`ShellCommand`] so the keyboard and
//! the navigation bar share one code path.

use bevy::prelude::*;
use bevy_egui::EguiContexts;

use crate::shell::ShellCommand;
use crate::types::{AppSet, Panel};

/// Plugin providing keyboard input handling.
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, keyboard_shortcuts.in_set(AppSet::Input));
    }
}

/// Map a key to the shell command it triggers.
pub fn shortcut_command(key: KeyCode) -> Option<ShellCommand> {
    match key {
        KeyCode::Digit1 | KeyCode::Escape => Some(ShellCommand::Navigate(Panel::Scene)),
        KeyCode::Digit2 => Some(ShellCommand::Navigate(Panel::Quiz)),
        KeyCode::KeyO => Some(ShellCommand::ToggleOrbits),
        KeyCode::KeyS => Some(ShellCommand::ToggleScale),
        KeyCode::KeyN => Some(ShellCommand::ToggleTheme),
        _ => None,
    }
}

/// Handle keyboard shortcuts for navigation and view toggles.
fn keyboard_shortcuts(
    keys: Res<ButtonInput<KeyCode>>,
    mut contexts: EguiContexts,
    mut shell_commands: MessageWriter<ShellCommand>,
) {
    // Text fields and focused widgets keep their keys.
    if let Ok(ctx) = contexts.ctx_mut()
        && ctx.wants_keyboard_input()
    {
        return;
    }

    for key in keys.get_just_pressed() {
        if let Some(command) = shortcut_command(*key) {
            debug!("Shortcut {:?} -> {:?}", key, command);
            shell_commands.write(command);
        }
    }
}
