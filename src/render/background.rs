//! Background rendering for the solar system visualization.
//!
//! Provides the starfield, the Sun's point light and the day/night lighting
//! presets.

use bevy::prelude::*;
use rand::Rng;

use crate::shell::ShellState;

/// Plugin providing background visual elements.
pub struct BackgroundPlugin;

impl Plugin for BackgroundPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<StarfieldSettings>()
            .insert_resource(ClearColor(LightingPreset::DAY.clear_color()))
            .add_systems(Startup, (spawn_starfield, spawn_lighting))
            .add_systems(Update, apply_theme);
    }
}

/// Stars are scattered in a spherical shell around the origin.
#[derive(Resource, Clone, Debug)]
pub struct StarfieldSettings {
    pub count: usize,
    /// Inner radius of the shell.
    pub radius: f32,
    /// Shell thickness.
    pub depth: f32,
    pub star_size: f32,
}

impl Default for StarfieldSettings {
    fn default() -> Self {
        Self {
            count: 2000,
            radius: 100.0,
            depth: 50.0,
            star_size: 0.15,
        }
    }
}

/// Light levels for one theme.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightingPreset {
    pub ambient_brightness: f32,
    pub sun_intensity: f32,
    /// Window background, sRGB.
    pub background: [u8; 3],
}

impl LightingPreset {
    pub const DAY: LightingPreset = LightingPreset {
        ambient_brightness: 250.0,
        sun_intensity: 20_000_000.0,
        background: [30, 27, 75],
    };

    pub const NIGHT: LightingPreset = LightingPreset {
        ambient_brightness: 50.0,
        sun_intensity: 10_000_000.0,
        background: [17, 24, 39],
    };

    pub fn for_theme(night_mode: bool) -> Self {
        if night_mode { Self::NIGHT } else { Self::DAY }
    }

    pub fn clear_color(&self) -> Color {
        let [r, g, b] = self.background;
        Color::srgb_u8(r, g, b)
    }
}

/// Marker for the light at the Sun's position.
#[derive(Component)]
pub struct SunLight;

/// Uniformly distributed point in a spherical shell.
pub fn random_star_position(rng: &mut impl Rng, radius: f32, depth: f32) -> Vec3 {
    // Rejection-sample a direction from the unit cube.
    let dir = loop {
        let v = Vec3::new(
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
        );
        let len_sq = v.length_squared();
        if len_sq > 1e-4 && len_sq <= 1.0 {
            break v / len_sq.sqrt();
        }
    };
    dir * (radius + rng.gen_range(0.0..=depth))
}

fn spawn_starfield(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    settings: Res<StarfieldSettings>,
) {
    let star_material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        emissive: LinearRgba::WHITE * 0.5,
        unlit: true,
        ..default()
    });
    let star_mesh = meshes.add(Sphere::new(settings.star_size).mesh().uv(8, 6));

    let mut rng = rand::thread_rng();
    for _ in 0..settings.count {
        let pos = random_star_position(&mut rng, settings.radius, settings.depth);
        let scale = rng.gen_range(0.5..1.5);
        commands.spawn((
            Mesh3d(star_mesh.clone()),
            MeshMaterial3d(star_material.clone()),
            Transform::from_translation(pos).with_scale(Vec3::splat(scale)),
        ));
    }

    info!("Spawned {} background stars", settings.count);
}

fn spawn_lighting(mut commands: Commands) {
    let preset = LightingPreset::DAY;
    commands.insert_resource(GlobalAmbientLight {
        color: Color::WHITE,
        brightness: preset.ambient_brightness,
        ..default()
    });

    // The Sun lights the planets from the origin.
    commands.spawn((
        PointLight {
            intensity: preset.sun_intensity,
            range: 500.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::default(),
        SunLight,
    ));

    info!("Scene lighting initialized");
}

fn apply_theme(
    shell: Res<ShellState>,
    mut clear_color: ResMut<ClearColor>,
    mut ambient: ResMut<GlobalAmbientLight>,
    mut lights: Query<&mut PointLight, With<SunLight>>,
) {
    if !shell.is_changed() {
        return;
    }
    let preset = LightingPreset::for_theme(shell.night_mode);
    clear_color.0 = preset.clear_color();
    ambient.brightness = preset.ambient_brightness;
    for mut light in lights.iter_mut() {
        light.intensity = preset.sun_intensity;
    }
}
