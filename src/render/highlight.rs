//! Hover detection and click selection for celestial bodies.
//!
//! Bodies are picked by casting the cursor ray against their spheres. A click
//! on a body asks the shell to open its details; the scene never navigates
//! on its own.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_egui::EguiContexts;

use crate::camera::MainCamera;
use crate::render::bodies::CelestialBody;
use crate::shell::{ShellCommand, ShellState};
use crate::types::Panel;

/// Scale applied to the body under the cursor.
pub const HOVER_SCALE: f32 = 1.1;

/// Resource tracking the currently hovered body.
#[derive(Resource, Default)]
pub struct HoveredBody {
    /// Entity of the currently hovered body, if any.
    pub entity: Option<Entity>,
}

/// Distance along a normalized ray to the first hit on a sphere.
pub fn ray_sphere_distance(origin: Vec3, direction: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let to_center = center - origin;
    let along = to_center.dot(direction);
    let miss_sq = to_center.length_squared() - along * along;
    let radius_sq = radius * radius;
    if miss_sq > radius_sq {
        return None;
    }
    let half_chord = (radius_sq - miss_sq).sqrt();
    let near = along - half_chord;
    let far = along + half_chord;
    if far < 0.0 {
        None
    } else if near >= 0.0 {
        Some(near)
    } else {
        // Origin is inside the sphere.
        Some(0.0)
    }
}

/// Detect which celestial body the mouse is hovering over.
pub fn detect_hover(
    window_query: Query<&Window, With<PrimaryWindow>>,
    camera_query: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    bodies: Query<(Entity, &GlobalTransform), With<CelestialBody>>,
    shell: Res<ShellState>,
    mut contexts: EguiContexts,
    mut hovered: ResMut<HoveredBody>,
) {
    hovered.entity = None;

    if shell.visible_panel() != Panel::Scene {
        return;
    }
    if let Ok(ctx) = contexts.ctx_mut()
        && ctx.is_pointer_over_area()
    {
        return;
    }

    let Ok(window) = window_query.single() else {
        return;
    };
    let Some(cursor_pos) = window.cursor_position() else {
        return;
    };
    let Ok((camera, camera_transform)) = camera_query.single() else {
        return;
    };
    let Ok(ray) = camera.viewport_to_world(camera_transform, cursor_pos) else {
        return;
    };

    let mut closest: Option<(Entity, f32)> = None;
    for (entity, transform) in bodies.iter() {
        let (scale, _, center) = transform.to_scale_rotation_translation();
        let Some(dist) = ray_sphere_distance(ray.origin, *ray.direction, center, scale.x) else {
            continue;
        };
        if closest.is_none_or(|(_, d)| dist < d) {
            closest = Some((entity, dist));
        }
    }

    hovered.entity = closest.map(|(e, _)| e);
}

/// Turn a left click on the hovered body into a selection request.
pub fn select_on_click(
    mouse: Res<ButtonInput<MouseButton>>,
    hovered: Res<HoveredBody>,
    bodies: Query<&CelestialBody>,
    mut shell_commands: MessageWriter<ShellCommand>,
) {
    if !mouse.just_pressed(MouseButton::Left) {
        return;
    }
    let Some(body) = hovered.entity.and_then(|e| bodies.get(e).ok()) else {
        return;
    };
    info!("Selected {}", body.name);
    shell_commands.write(ShellCommand::SelectPlanet(body.id.clone()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ray_hits_sphere_front() {
        let d = ray_sphere_distance(Vec3::new(0.0, 0.0, 10.0), Vec3::NEG_Z, Vec3::ZERO, 2.0);
        assert_relative_eq!(d.unwrap(), 8.0, epsilon = 1e-5);
    }

    #[test]
    fn test_ray_misses_offset_sphere() {
        let d = ray_sphere_distance(Vec3::new(0.0, 0.0, 10.0), Vec3::NEG_Z, Vec3::new(5.0, 0.0, 0.0), 2.0);
        assert_eq!(d, None);
    }

    #[test]
    fn test_sphere_behind_ray_ignored() {
        let d = ray_sphere_distance(Vec3::new(0.0, 0.0, 10.0), Vec3::Z, Vec3::ZERO, 2.0);
        assert_eq!(d, None);
    }

    #[test]
    fn test_origin_inside_sphere() {
        let d = ray_sphere_distance(Vec3::ZERO, Vec3::X, Vec3::ZERO, 2.0);
        assert_eq!(d, Some(0.0));
    }
}
