//! Camera system for the solar system scene.
//!
//! A perspective camera orbits the Sun: left-drag rotates, the scroll wheel
//! zooms, and the distance stays within [`MIN_DISTANCE`, `MAX_DISTANCE`].

use bevy::{
    input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll},
    prelude::*,
};
use bevy_egui::EguiContexts;

use crate::shell::ShellState;
use crate::types::{AppSet, Panel};

/// Closest allowed distance to the origin.
pub const MIN_DISTANCE: f32 = 5.0;

/// Furthest allowed distance from the origin.
pub const MAX_DISTANCE: f32 = 100.0;

/// Vertical field of view in degrees.
pub const FOV_DEGREES: f32 = 60.0;

/// Zoom speed multiplier for scroll wheel.
pub const ZOOM_SPEED: f32 = 0.1;

/// Radians of rotation per pixel of drag.
pub const ROTATE_SPEED: f32 = 0.005;

/// Keeps the camera off the poles.
const MAX_PITCH: f32 = 1.5;

/// Marker component for the main camera.
#[derive(Component)]
pub struct MainCamera;

/// Spherical coordinates of the camera around the origin.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct OrbitCamera {
    pub yaw: f32,
    /// Elevation above the orbit plane.
    pub pitch: f32,
    pub distance: f32,
}

impl Default for OrbitCamera {
    /// Looking down from (0, 20, 25).
    fn default() -> Self {
        let offset = Vec3::new(0.0, 20.0, 25.0);
        Self {
            yaw: 0.0,
            pitch: (offset.y / offset.z).atan(),
            distance: offset.length(),
        }
    }
}

impl OrbitCamera {
    /// Multiply the distance by `1 - scroll * ZOOM_SPEED`, clamped.
    pub fn zoom(&mut self, scroll: f32) {
        let factor = (1.0 - scroll * ZOOM_SPEED).max(0.1);
        self.distance = (self.distance * factor).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    pub fn rotate(&mut self, delta: Vec2) {
        self.yaw -= delta.x * ROTATE_SPEED;
        self.pitch = (self.pitch + delta.y * ROTATE_SPEED).clamp(-MAX_PITCH, MAX_PITCH);
    }

    pub fn transform(&self) -> Transform {
        let horizontal = self.distance * self.pitch.cos();
        let position = Vec3::new(
            horizontal * self.yaw.sin(),
            self.distance * self.pitch.sin(),
            horizontal * self.yaw.cos(),
        );
        Transform::from_translation(position).looking_at(Vec3::ZERO, Vec3::Y)
    }
}

/// Plugin providing camera functionality.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<OrbitCamera>()
            .add_systems(Startup, setup_camera)
            .add_systems(
                Update,
                (camera_zoom, camera_rotate, apply_orbit_camera)
                    .chain()
                    .in_set(AppSet::Input),
            );
    }
}

/// Spawn the main camera with perspective projection.
fn setup_camera(mut commands: Commands, orbit: Res<OrbitCamera>) {
    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: FOV_DEGREES.to_radians(),
            far: 1000.0,
            ..default()
        }),
        orbit.transform(),
        MainCamera,
    ));
}

/// Whether scene camera controls should react to the pointer.
fn scene_has_pointer(shell: &ShellState, contexts: &mut EguiContexts) -> bool {
    if shell.visible_panel() != Panel::Scene {
        return false;
    }
    match contexts.ctx_mut() {
        Ok(ctx) => !ctx.wants_pointer_input(),
        Err(_) => true,
    }
}

/// Handle mouse scroll wheel for zoom.
fn camera_zoom(
    mouse_scroll: Res<AccumulatedMouseScroll>,
    shell: Res<ShellState>,
    mut contexts: EguiContexts,
    mut orbit: ResMut<OrbitCamera>,
) {
    if mouse_scroll.delta.y == 0.0 || !scene_has_pointer(&shell, &mut contexts) {
        return;
    }
    orbit.zoom(mouse_scroll.delta.y);
}

/// Handle left mouse button drag for rotation.
fn camera_rotate(
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mouse_motion: Res<AccumulatedMouseMotion>,
    shell: Res<ShellState>,
    mut contexts: EguiContexts,
    mut orbit: ResMut<OrbitCamera>,
) {
    if !mouse_buttons.pressed(MouseButton::Left) || mouse_motion.delta == Vec2::ZERO {
        return;
    }
    if !scene_has_pointer(&shell, &mut contexts) {
        return;
    }
    orbit.rotate(mouse_motion.delta);
}

fn apply_orbit_camera(
    orbit: Res<OrbitCamera>,
    mut camera_query: Query<&mut Transform, With<MainCamera>>,
) {
    if !orbit.is_changed() {
        return;
    }
    let Ok(mut transform) = camera_query.single_mut() else {
        return;
    };
    *transform = orbit.transform();
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_position() {
        let t = OrbitCamera::default().transform();
        assert_relative_eq!(t.translation.x, 0.0, epsilon = 1e-4);
        assert_relative_eq!(t.translation.y, 20.0, epsilon = 1e-3);
        assert_relative_eq!(t.translation.z, 25.0, epsilon = 1e-3);
    }

    #[test]
    fn test_zoom_clamped() {
        let mut orbit = OrbitCamera::default();
        for _ in 0..100 {
            orbit.zoom(5.0);
        }
        assert_eq!(orbit.distance, MIN_DISTANCE);
        for _ in 0..100 {
            orbit.zoom(-5.0);
        }
        assert_eq!(orbit.distance, MAX_DISTANCE);
    }

    #[test]
    fn test_rotate_preserves_distance() {
        let mut orbit = OrbitCamera::default();
        orbit.rotate(Vec2::new(300.0, -120.0));
        assert_relative_eq!(orbit.transform().translation.length(), orbit.distance, epsilon = 1e-3);
    }

    #[test]
    fn test_pitch_clamped() {
        let mut orbit = OrbitCamera::default();
        orbit.rotate(Vec2::new(0.0, 10_000.0));
        assert_eq!(orbit.pitch, MAX_PITCH);
    }
}
