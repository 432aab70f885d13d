//! Orbit ring rendering using Bevy Gizmos.
//!
//! Rings are circles in the XZ plane centred on the Sun, tinted with the
//! planet's color. Circles about the origin are unaffected by the scene yaw,
//! so they are drawn straight from the frame's radii.

use bevy::prelude::*;

use crate::catalog::PlanetCatalog;
use crate::render::bodies::body_color;
use crate::render::CurrentFrame;
use crate::shell::ShellState;
use crate::types::Panel;

/// Plugin providing orbit ring settings.
pub struct OrbitPathPlugin;

impl Plugin for OrbitPathPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<OrbitRingSettings>();
    }
}

/// Settings for orbit ring rendering.
#[derive(Resource)]
pub struct OrbitRingSettings {
    /// Number of line segments per circle.
    pub segments: u32,
    /// Alpha value for ring color.
    pub alpha: f32,
}

impl Default for OrbitRingSettings {
    fn default() -> Self {
        Self {
            segments: 64,
            alpha: 0.3,
        }
    }
}

/// Closed polyline approximating a circle of `radius` in the XZ plane.
pub fn ring_points(radius: f32, segments: u32) -> Vec<Vec3> {
    let segments = segments.max(3);
    (0..=segments)
        .map(|i| {
            let angle = (i as f32 / segments as f32) * std::f32::consts::TAU;
            Vec3::new(angle.sin() * radius, 0.0, angle.cos() * radius)
        })
        .collect()
}

pub fn draw_orbit_rings(
    mut gizmos: Gizmos,
    frame: Res<CurrentFrame>,
    catalog: Res<PlanetCatalog>,
    settings: Res<OrbitRingSettings>,
    shell: Res<ShellState>,
) {
    if shell.visible_panel() != Panel::Scene {
        return;
    }

    for body in &frame.0.bodies {
        let Some(radius) = body.orbit_ring else {
            continue;
        };
        let Some(planet) = catalog.get(&body.id) else {
            continue;
        };
        let color = body_color(planet).with_alpha(settings.alpha);
        gizmos.linestrip(ring_points(radius, settings.segments), color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ring_is_closed() {
        let points = ring_points(8.0, 64);
        assert_eq!(points.len(), 65);
        let first = points[0];
        let last = points[points.len() - 1];
        assert_relative_eq!(first.distance(last), 0.0, epsilon = 1e-4);
    }

    #[test]
    fn test_ring_points_on_circle() {
        for p in ring_points(12.0, 16) {
            assert_relative_eq!(p.length(), 12.0, epsilon = 1e-4);
            assert_eq!(p.y, 0.0);
        }
    }

    #[test]
    fn test_degenerate_segment_count_clamped() {
        assert_eq!(ring_points(1.0, 0).len(), 4);
    }
}
