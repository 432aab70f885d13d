//! Illustrative orbit placement.
//!
//! Planets travel on circles in the XZ plane. Nothing here is Keplerian: the
//! radius is a function of the catalog position index only and the angle grows
//! linearly with elapsed animation time.

use bevy::prelude::*;
use rand::Rng;

use crate::catalog::Planet;
use crate::types::ScaleMode;

/// Gap between neighbouring orbits in visual mode.
pub const VISUAL_ORBIT_SPACING: f32 = 4.0;

/// Multiplier on `position²` in realistic mode.
pub const REALISTIC_ORBIT_FACTOR: f32 = 1.5;

/// Body radius multiplier applied to `Planet::size` in visual mode.
pub const VISUAL_SIZE_FACTOR: f32 = 1.2;

/// Body radius multiplier applied to `Planet::real_size` in realistic mode.
pub const REALISTIC_SIZE_FACTOR: f32 = 0.3;

/// Orbit radius for an orbital position index `>= 1`.
pub fn orbit_radius(position: u32, mode: ScaleMode) -> f32 {
    let p = position as f32;
    match mode {
        ScaleMode::Realistic => p * p * REALISTIC_ORBIT_FACTOR,
        ScaleMode::Visual => p * VISUAL_ORBIT_SPACING,
    }
}

/// Distance from the origin at which a body is placed. The Sun stays at 0.
pub fn placement_radius(position: u32, mode: ScaleMode) -> f32 {
    if position == 0 {
        0.0
    } else {
        orbit_radius(position, mode)
    }
}

/// Render radius of a body's sphere.
pub fn body_radius(planet: &Planet, mode: ScaleMode) -> f32 {
    match mode {
        ScaleMode::Realistic => planet.real_size * REALISTIC_SIZE_FACTOR,
        ScaleMode::Visual => planet.size * VISUAL_SIZE_FACTOR,
    }
}

/// Orbit angle after `elapsed` seconds.
#[inline]
pub fn orbit_angle(base_angle: f32, elapsed: f32, orbit_speed: f32) -> f32 {
    base_angle + elapsed * orbit_speed
}

/// Point on a circle of `radius` in the XZ plane. Angle 0 lies on +Z.
#[inline]
pub fn orbit_position(radius: f32, angle: f32) -> Vec3 {
    Vec3::new(angle.sin() * radius, 0.0, angle.cos() * radius)
}

/// Starting angle of a body on its orbit, fixed once the scene is spawned.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct OrbitPhase {
    pub base_angle: f32,
}

impl OrbitPhase {
    pub fn new(base_angle: f32) -> Self {
        Self { base_angle }
    }

    /// Uniformly random phase in `[0, 2π)`.
    pub fn random(rng: &mut impl Rng) -> Self {
        Self::new(rng.gen_range(0.0..std::f32::consts::TAU))
    }

    pub fn angle_at(&self, elapsed: f32, orbit_speed: f32) -> f32 {
        orbit_angle(self.base_angle, elapsed, orbit_speed)
    }
}

/// Accumulated self-rotation of a body. Never wrapped.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct SpinState {
    pub angle: f32,
}

impl SpinState {
    /// Advance by one animation tick.
    pub fn tick(&mut self, rotation_speed: f32) {
        self.angle += rotation_speed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PlanetCatalog;
    use approx::assert_relative_eq;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_visual_radii() {
        assert_eq!(orbit_radius(1, ScaleMode::Visual), 4.0);
        assert_eq!(orbit_radius(3, ScaleMode::Visual), 12.0);
        assert_eq!(orbit_radius(8, ScaleMode::Visual), 32.0);
    }

    #[test]
    fn test_realistic_radii() {
        assert_eq!(orbit_radius(1, ScaleMode::Realistic), 1.5);
        assert_eq!(orbit_radius(3, ScaleMode::Realistic), 13.5);
        assert_eq!(orbit_radius(8, ScaleMode::Realistic), 96.0);
    }

    #[test]
    fn test_sun_placed_at_origin() {
        assert_eq!(placement_radius(0, ScaleMode::Visual), 0.0);
        assert_eq!(placement_radius(0, ScaleMode::Realistic), 0.0);
        assert_eq!(placement_radius(2, ScaleMode::Visual), 8.0);
    }

    #[test]
    fn test_body_radius_per_mode() {
        let catalog = PlanetCatalog::builtin();
        let earth = catalog.get("earth").unwrap();
        assert_relative_eq!(body_radius(earth, ScaleMode::Visual), 1.8);
        assert_relative_eq!(body_radius(earth, ScaleMode::Realistic), 0.3);

        let jupiter = catalog.get("jupiter").unwrap();
        assert_relative_eq!(body_radius(jupiter, ScaleMode::Realistic), 3.36, epsilon = 1e-5);
    }

    #[test]
    fn test_orbit_position_axes() {
        let p = orbit_position(10.0, 0.0);
        assert_relative_eq!(p.x, 0.0);
        assert_relative_eq!(p.z, 10.0);

        let p = orbit_position(10.0, FRAC_PI_2);
        assert_relative_eq!(p.x, 10.0, epsilon = 1e-5);
        assert_relative_eq!(p.z, 0.0, epsilon = 1e-5);
        assert_eq!(p.y, 0.0);
    }

    #[test]
    fn test_orbit_angle_linear_in_time() {
        let phase = OrbitPhase::new(PI);
        assert_relative_eq!(phase.angle_at(0.0, 0.04), PI);
        assert_relative_eq!(phase.angle_at(10.0, 0.04), PI + 0.4, epsilon = 1e-6);
        assert_relative_eq!(phase.angle_at(20.0, 0.04), PI + 0.8, epsilon = 1e-6);
    }

    #[test]
    fn test_random_phase_in_range() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let phase = OrbitPhase::random(&mut rng);
            assert!((0.0..std::f32::consts::TAU).contains(&phase.base_angle));
        }
    }

    #[test]
    fn test_spin_accumulates_without_wrapping() {
        let mut spin = SpinState::default();
        for _ in 0..1000 {
            spin.tick(0.04);
        }
        assert_relative_eq!(spin.angle, 40.0, epsilon = 1e-3);
        assert!(spin.angle > std::f32::consts::TAU);

        let mut retro = SpinState::default();
        retro.tick(-0.002);
        assert!(retro.angle < 0.0);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Radii grow strictly with position in both modes.
        #[test]
        fn prop_radius_monotonic(p in 1u32..100) {
            for mode in [ScaleMode::Visual, ScaleMode::Realistic] {
                prop_assert!(orbit_radius(p + 1, mode) > orbit_radius(p, mode));
            }
        }

        /// Every orbit position lies on its circle.
        #[test]
        fn prop_position_on_circle(r in 0.1f32..200.0, angle in -100.0f32..100.0) {
            let p = orbit_position(r, angle);
            prop_assert!((p.length() - r).abs() < r * 1e-4);
            prop_assert_eq!(p.y, 0.0);
        }
    }
}
