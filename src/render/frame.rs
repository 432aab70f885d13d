//! Declarative per-tick scene description.
//!
//! `compose_frame` turns the catalog, view toggles and animation state into a
//! [`SceneFrame`]. Bevy systems only copy the frame onto entities, so all
//! placement rules are testable without a renderer.

use std::collections::HashMap;

use bevy::prelude::*;

use crate::catalog::{Planet, PlanetCatalog};
use crate::orbit::{body_radius, orbit_position, placement_radius, OrbitPhase, SpinState};
use crate::time::AnimationClock;
use crate::types::ScaleMode;

/// Radians per second of the slow whole-scene yaw.
pub const SCENE_ROTATION_SPEED: f32 = 0.05;

/// Height of a label above the top of its body.
pub const LABEL_CLEARANCE: f32 = 0.5;

/// Sun glow radius relative to the Sun itself.
pub const SUN_GLOW_FACTOR: f32 = 1.2;

/// View toggles that influence composition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SceneSettings {
    pub scale_mode: ScaleMode,
    pub show_orbits: bool,
}

/// Flat ring around a ringed planet, as multiples of the body radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingGeometry {
    pub inner: f32,
    pub outer: f32,
    pub opacity: f32,
    /// sRGB override; `None` uses the planet's own color.
    pub color: Option<[u8; 3]>,
}

/// Ring shape for a planet, if it has one. Saturn's is wider and tinted.
pub fn ring_geometry(planet: &Planet) -> Option<RingGeometry> {
    if !planet.has_rings {
        return None;
    }
    if planet.id == "saturn" {
        Some(RingGeometry {
            inner: 1.4,
            outer: 2.0,
            opacity: 0.8,
            color: Some([0xE4, 0xD1, 0x91]),
        })
    } else {
        Some(RingGeometry {
            inner: 1.2,
            outer: 1.5,
            opacity: 0.6,
            color: None,
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LabelPlacement {
    pub text: String,
    pub position: Vec3,
}

/// Where and how one body is drawn this tick.
#[derive(Clone, Debug, PartialEq)]
pub struct BodyPlacement {
    pub id: String,
    /// World-space center, scene yaw included.
    pub position: Vec3,
    pub radius: f32,
    /// Self-rotation about the body's Y axis, scene yaw included.
    pub spin: f32,
    /// Orbit circle radius, when orbits are shown.
    pub orbit_ring: Option<f32>,
    pub label: Option<LabelPlacement>,
    /// Planetary ring radii `(inner, outer)` in world units.
    pub rings: Option<(f32, f32)>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SceneFrame {
    /// Whole-scene yaw in radians.
    pub rotation: f32,
    /// Sun first, then planets by position.
    pub bodies: Vec<BodyPlacement>,
}

impl SceneFrame {
    pub fn body(&self, id: &str) -> Option<&BodyPlacement> {
        self.bodies.iter().find(|b| b.id == id)
    }
}

/// Build the frame for the current tick. Bodies missing from `phases` or
/// `spins` use a zero phase and zero spin.
pub fn compose_frame(
    catalog: &PlanetCatalog,
    settings: &SceneSettings,
    clock: &AnimationClock,
    phases: &HashMap<String, OrbitPhase>,
    spins: &HashMap<String, SpinState>,
) -> SceneFrame {
    let rotation = clock.elapsed * SCENE_ROTATION_SPEED;
    let yaw = Quat::from_rotation_y(rotation);

    let bodies = catalog
        .all()
        .iter()
        .map(|planet| {
            let radius = body_radius(planet, settings.scale_mode);
            let spin = spins.get(&planet.id).copied().unwrap_or_default().angle;

            let (local, orbit_ring) = if planet.is_sun() {
                (Vec3::ZERO, None)
            } else {
                let orbit = placement_radius(planet.position, settings.scale_mode);
                let phase = phases.get(&planet.id).copied().unwrap_or_default();
                let angle = phase.angle_at(clock.elapsed, planet.orbit_speed);
                (
                    orbit_position(orbit, angle),
                    settings.show_orbits.then_some(orbit),
                )
            };
            let position = yaw * local;

            let label = (settings.show_orbits && !planet.is_sun()).then(|| LabelPlacement {
                text: planet.name.clone(),
                position: position + Vec3::Y * (radius + LABEL_CLEARANCE),
            });

            BodyPlacement {
                id: planet.id.clone(),
                position,
                radius,
                spin: rotation + spin,
                orbit_ring,
                label,
                rings: ring_geometry(planet).map(|g| (g.inner * radius, g.outer * radius)),
            }
        })
        .collect();

    SceneFrame { rotation, bodies }
}
