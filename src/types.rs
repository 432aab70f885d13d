//! Shared UI-state types and ordering sets.

use bevy::prelude::*;

/// How orbit radii and body sizes are derived from the catalog.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScaleMode {
    /// Evenly spaced orbits and exaggerated bodies.
    #[default]
    Visual,
    /// Orbits grow with the square of the position index.
    Realistic,
}

impl ScaleMode {
    pub fn toggled(self) -> Self {
        match self {
            ScaleMode::Visual => ScaleMode::Realistic,
            ScaleMode::Realistic => ScaleMode::Visual,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScaleMode::Visual => "Visual Scale",
            ScaleMode::Realistic => "Realistic Scale",
        }
    }
}

/// Top-level panel owned by the shell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Panel {
    #[default]
    Scene,
    Detail,
    Quiz,
}

impl Panel {
    pub fn label(self) -> &'static str {
        match self {
            Panel::Scene => "Solar System",
            Panel::Detail => "Planet Details",
            Panel::Quiz => "Quiz",
        }
    }
}

/// System sets ordering a frame: input becomes commands, commands mutate
/// state, then the scene is composed from that state.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum AppSet {
    /// Keyboard and pointer handling that writes messages.
    Input,
    /// Shell and quiz command consumers.
    Commands,
    /// Clock advance and scene composition.
    Scene,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_mode_toggle_round_trips() {
        assert_eq!(ScaleMode::Visual.toggled(), ScaleMode::Realistic);
        assert_eq!(ScaleMode::Visual.toggled().toggled(), ScaleMode::Visual);
    }

    #[test]
    fn test_defaults() {
        assert_eq!(ScaleMode::default(), ScaleMode::Visual);
        assert_eq!(Panel::default(), Panel::Scene);
    }
}
