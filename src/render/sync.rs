//! Per-tick composition and its application to entities.

use std::collections::HashMap;

use bevy::prelude::*;

use crate::catalog::PlanetCatalog;
use crate::orbit::{OrbitPhase, SpinState};
use crate::render::bodies::CelestialBody;
use crate::render::frame::{compose_frame, SceneSettings};
use crate::render::highlight::{HoveredBody, HOVER_SCALE};
use crate::render::CurrentFrame;
use crate::shell::ShellState;
use crate::time::AnimationClock;

/// Advance every body's self-rotation by one tick.
pub fn tick_spins(catalog: Res<PlanetCatalog>, mut bodies: Query<(&CelestialBody, &mut SpinState)>) {
    for (body, mut spin) in bodies.iter_mut() {
        if let Some(planet) = catalog.get(&body.id) {
            spin.tick(planet.rotation_speed);
        }
    }
}

/// Compose this tick's [`SceneFrame`](crate::render::frame::SceneFrame).
pub fn compose_scene_frame(
    catalog: Res<PlanetCatalog>,
    shell: Res<ShellState>,
    clock: Res<AnimationClock>,
    bodies: Query<(&CelestialBody, &OrbitPhase, &SpinState)>,
    mut frame: ResMut<CurrentFrame>,
) {
    let mut phases = HashMap::new();
    let mut spins = HashMap::new();
    for (body, phase, spin) in bodies.iter() {
        phases.insert(body.id.clone(), *phase);
        spins.insert(body.id.clone(), *spin);
    }

    let settings = SceneSettings {
        scale_mode: shell.scale_mode,
        show_orbits: shell.show_orbits,
    };
    frame.0 = compose_frame(&catalog, &settings, &clock, &phases, &spins);
}

/// Copy placements onto body transforms. The hovered body is drawn slightly larger.
pub fn apply_scene_frame(
    frame: Res<CurrentFrame>,
    hovered: Res<HoveredBody>,
    mut bodies: Query<(Entity, &CelestialBody, &mut Transform)>,
) {
    for (entity, body, mut transform) in bodies.iter_mut() {
        let Some(placement) = frame.0.body(&body.id) else {
            continue;
        };
        let hover = if hovered.entity == Some(entity) {
            HOVER_SCALE
        } else {
            1.0
        };
        transform.translation = placement.position;
        transform.rotation = Quat::from_rotation_y(placement.spin);
        transform.scale = Vec3::splat(placement.radius * hover);
    }
}
