//! Rendering systems for the solar system scene.
//!
//! This module composes the per-tick scene frame and applies it to the Sun,
//! planets, orbit rings and labels, plus the starfield and lighting.

mod background;
pub mod bodies;
pub mod frame;
pub mod highlight;
mod labels;
mod orbits;
pub mod sync;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

use self::background::BackgroundPlugin;
use self::bodies::CelestialBodyPlugin;
use self::frame::SceneFrame;
use self::highlight::{detect_hover, select_on_click};
use self::labels::draw_body_labels;
use self::orbits::{draw_orbit_rings, OrbitPathPlugin};
use self::sync::{apply_scene_frame, compose_scene_frame, tick_spins};
use crate::time::advance_clock;
use crate::types::AppSet;

// Re-export for use in other modules
pub use self::background::{LightingPreset, StarfieldSettings};
pub use self::bodies::CelestialBody;
pub use self::highlight::HoveredBody;
pub use self::labels::LabelSettings;
pub use self::orbits::OrbitRingSettings;

/// The most recently composed frame.
#[derive(Resource, Default, Debug)]
pub struct CurrentFrame(pub SceneFrame);

/// Plugin aggregating all scene rendering.
pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((CelestialBodyPlugin, BackgroundPlugin, OrbitPathPlugin))
            .init_resource::<CurrentFrame>()
            .init_resource::<HoveredBody>()
            .init_resource::<LabelSettings>()
            .add_systems(
                Update,
                (detect_hover, select_on_click).chain().in_set(AppSet::Input),
            )
            // 1. spin bodies, 2. compose from clock + toggles, 3. write transforms,
            // 4. draw orbit rings from the composed frame
            .add_systems(
                Update,
                (
                    tick_spins,
                    compose_scene_frame,
                    apply_scene_frame,
                    draw_orbit_rings,
                )
                    .chain()
                    .in_set(AppSet::Scene)
                    .after(advance_clock),
            )
            .add_systems(EguiPrimaryContextPass, draw_body_labels);
    }
}
