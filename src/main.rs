//! Solar System Explorer
//!
//! A desktop application for exploring the solar system and testing what
//! you learned with a short quiz.

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use solar_explorer::camera::CameraPlugin;
use solar_explorer::catalog::CatalogPlugin;
use solar_explorer::detail::DetailPlugin;
use solar_explorer::input::InputPlugin;
use solar_explorer::quiz::QuizPlugin;
use solar_explorer::render::ScenePlugin;
use solar_explorer::shell::ShellPlugin;
use solar_explorer::time::TimePlugin;
use solar_explorer::ui::UiPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Solar System Explorer".into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin::default())
        // Catalogs first: everything below reads them
        .add_plugins(CatalogPlugin::default())
        .add_plugins((
            ShellPlugin,
            TimePlugin,
            CameraPlugin,
            ScenePlugin,
            DetailPlugin,
            QuizPlugin,
            InputPlugin,
            UiPlugin,
        ))
        .run();
}
