//! Spawning of the Sun and planets.
//!
//! Each body is a unit sphere scaled by its render radius, so switching scale
//! mode only touches transforms. Rings and the Sun's glow are children and
//! inherit that scale.

use bevy::prelude::*;

use crate::catalog::{Planet, PlanetCatalog};
use crate::orbit::{OrbitPhase, SpinState};
use crate::render::frame::{ring_geometry, SUN_GLOW_FACTOR};

/// Component marking a catalog body in the scene.
#[derive(Component, Clone, Debug)]
pub struct CelestialBody {
    /// Catalog id.
    pub id: String,
    pub name: String,
}

/// Marker for a planetary ring mesh.
#[derive(Component)]
pub struct PlanetRing;

/// Marker for the translucent shell around the Sun.
#[derive(Component)]
pub struct SunGlow;

/// Plugin providing celestial body spawning functionality.
pub struct CelestialBodyPlugin;

impl Plugin for CelestialBodyPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlanetCatalog>()
            .add_systems(Startup, spawn_solar_system);
    }
}

/// Catalog color as a Bevy color.
pub fn body_color(planet: &Planet) -> Color {
    let [r, g, b] = planet.rgb();
    Color::srgb_u8(r, g, b)
}

fn spawn_solar_system(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    catalog: Res<PlanetCatalog>,
) {
    let sphere = meshes.add(Sphere::new(1.0).mesh().uv(32, 32));
    let mut rng = rand::thread_rng();

    for planet in catalog.all() {
        let color = body_color(planet);
        let material = if planet.is_sun() {
            // The Sun is the light source; it is not shaded itself.
            materials.add(StandardMaterial {
                base_color: color,
                emissive: color.to_linear() * 2.0,
                unlit: true,
                ..default()
            })
        } else {
            materials.add(StandardMaterial {
                base_color: color,
                metallic: 0.1,
                perceptual_roughness: 0.8,
                ..default()
            })
        };

        let phase = if planet.is_sun() {
            OrbitPhase::default()
        } else {
            OrbitPhase::random(&mut rng)
        };

        let mut body = commands.spawn((
            Mesh3d(sphere.clone()),
            MeshMaterial3d(material),
            Transform::default(),
            CelestialBody {
                id: planet.id.clone(),
                name: planet.name.clone(),
            },
            phase,
            SpinState::default(),
        ));

        if let Some(ring) = ring_geometry(planet) {
            let ring_color = match ring.color {
                Some([r, g, b]) => Color::srgb_u8(r, g, b),
                None => color,
            };
            let mesh = meshes.add(Annulus::new(ring.inner, ring.outer).mesh().resolution(64));
            let material = materials.add(StandardMaterial {
                base_color: ring_color.with_alpha(ring.opacity),
                alpha_mode: AlphaMode::Blend,
                double_sided: true,
                cull_mode: None,
                unlit: true,
                ..default()
            });
            body.with_children(|parent| {
                parent.spawn((
                    Mesh3d(mesh),
                    MeshMaterial3d(material),
                    // Annulus meshes lie in XY; lay the ring flat in the orbit plane.
                    Transform::from_rotation(Quat::from_rotation_x(std::f32::consts::FRAC_PI_2)),
                    PlanetRing,
                ));
            });
        }

        if planet.is_sun() {
            let glow = materials.add(StandardMaterial {
                base_color: Color::srgba_u8(0xFD, 0xB8, 0x13, 51),
                alpha_mode: AlphaMode::Blend,
                unlit: true,
                ..default()
            });
            body.with_children(|parent| {
                parent.spawn((
                    Mesh3d(sphere.clone()),
                    MeshMaterial3d(glow),
                    Transform::from_scale(Vec3::splat(SUN_GLOW_FACTOR)),
                    SunGlow,
                ));
            });
        }
    }

    info!("Spawned {} celestial bodies", catalog.len());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_color_from_catalog() {
        let catalog = PlanetCatalog::builtin();
        let mars = catalog.get("mars").unwrap();
        let [r, g, b] = mars.rgb();
        assert_eq!(body_color(mars), Color::srgb_u8(r, g, b));
    }
}
