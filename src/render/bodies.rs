//! Sun and section planet spawning.
//!
//! Each planet body hangs off an [`OrbitPivot`] at the origin and is
//! registered in [`SectionAnchors`] so navigation can find it later.

use std::path::Path;

use bevy::prelude::*;

use crate::navigation::{SectionAnchors, SectionBody};
use crate::orbit::{OrbitPivot, OrbitSettings, Spin};
use crate::sections::{ORDERED_SECTIONS, SectionId};

/// Radius of the sun sphere.
pub const SUN_RADIUS: f32 = 1.0;

/// Marks the sun. Clicking it returns to the hub.
#[derive(Component)]
pub struct Sun;

/// Grow-in animation played once when the scene first appears.
#[derive(Component, Clone, Debug)]
pub struct Appear {
    /// Seconds to wait before growing.
    pub delay: f32,
    pub elapsed: f32,
    /// Current uniform scale.
    pub scale: f32,
}

impl Appear {
    pub const START_SCALE: f32 = 0.3;
    /// Remaining scale gap fraction per second.
    pub const EASE_BASE: f32 = 0.001;

    /// Staggered by navigation order so planets pop in one after another.
    pub fn for_section(id: SectionId) -> Self {
        Self {
            delay: 0.5 + 0.2 * id.index() as f32,
            elapsed: 0.0,
            scale: Self::START_SCALE,
        }
    }

    /// Advance by `dt` seconds and return the new scale.
    pub fn advance(&mut self, dt: f32) -> f32 {
        self.elapsed += dt;
        if self.elapsed >= self.delay {
            let factor = crate::camera::framing::ease_factor(Self::EASE_BASE, dt);
            self.scale += (1.0 - self.scale) * factor;
        }
        self.scale
    }

    pub fn is_done(&self) -> bool {
        1.0 - self.scale < 1e-3
    }
}

/// Plugin spawning the scene bodies.
pub struct BodiesPlugin;

impl Plugin for BodiesPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_scene)
            .add_systems(Update, animate_appear);
    }
}

/// Load an albedo texture only if the asset file is present.
fn optional_texture(asset_server: &AssetServer, path: &'static str) -> Option<Handle<Image>> {
    Path::new("assets")
        .join(path)
        .exists()
        .then(|| asset_server.load(path))
}

/// Spawn the sun, its light, and one planet per section.
fn spawn_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut anchors: ResMut<SectionAnchors>,
    asset_server: Res<AssetServer>,
    orbit: Res<OrbitSettings>,
) {
    let sun_color = Color::srgb(1.0, 0.78, 0.35);
    commands.spawn((
        Mesh3d(meshes.add(Sphere::new(SUN_RADIUS).mesh().uv(64, 32))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: sun_color,
            emissive: sun_color.to_linear() * 4.0,
            ..default()
        })),
        Transform::default(),
        Spin {
            speed: orbit.sun_spin,
        },
        Sun,
    ));
    commands.spawn((
        PointLight {
            intensity: 4_000_000.0,
            range: 100.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::default(),
    ));

    let mut textured = 0;
    for id in ORDERED_SECTIONS {
        let placement = id.placement();
        let appearance = id.appearance();

        let texture = optional_texture(&asset_server, appearance.albedo);
        textured += usize::from(texture.is_some());
        let material = materials.add(StandardMaterial {
            base_color: if texture.is_some() {
                Color::WHITE
            } else {
                appearance.bevy_color()
            },
            base_color_texture: texture,
            perceptual_roughness: 0.9,
            ..default()
        });

        let appear = if orbit.reduced_motion {
            Appear {
                scale: 1.0,
                ..Appear::for_section(id)
            }
        } else {
            Appear::for_section(id)
        };

        let body = commands
            .spawn((
                Mesh3d(meshes.add(Sphere::new(placement.size).mesh().uv(48, 24))),
                MeshMaterial3d(material),
                Transform::from_xyz(placement.radius, 0.0, 0.0)
                    .with_scale(Vec3::splat(appear.scale)),
                SectionBody {
                    id,
                    size: placement.size,
                },
                Spin {
                    speed: orbit.planet_spin,
                },
                appear,
            ))
            .id();

        commands
            .spawn((
                Transform::from_rotation(Quat::from_rotation_y(placement.angle)),
                Visibility::default(),
                OrbitPivot {
                    angle: placement.angle,
                    speed: placement.orbit_speed,
                },
            ))
            .add_child(body);

        anchors.register(id, body);
    }

    info!(
        "Spawned {} section bodies ({} textured)",
        ORDERED_SECTIONS.len(),
        textured
    );
}

/// Grow planets in after their staggered delay.
fn animate_appear(
    mut commands: Commands,
    time: Res<Time>,
    mut bodies: Query<(Entity, &mut Appear, &mut Transform)>,
) {
    let dt = time.delta_secs();
    for (entity, mut appear, mut transform) in &mut bodies {
        let scale = appear.advance(dt);
        transform.scale = Vec3::splat(scale);
        if appear.is_done() {
            transform.scale = Vec3::ONE;
            commands.entity(entity).remove::<Appear>();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appear_stagger() {
        assert_eq!(Appear::for_section(SectionId::About).delay, 0.5);
        let faq = Appear::for_section(SectionId::Faq);
        assert!((faq.delay - 1.7).abs() < 1e-6);
        assert_eq!(faq.scale, Appear::START_SCALE);
    }

    #[test]
    fn test_appear_waits_then_grows() {
        let mut appear = Appear::for_section(SectionId::Rules);
        let dt = 1.0 / 60.0;
        // Still inside the 0.7 s delay
        for _ in 0..30 {
            assert_eq!(appear.advance(dt), Appear::START_SCALE);
        }
        let mut last = appear.scale;
        for _ in 0..300 {
            let scale = appear.advance(dt);
            assert!(scale >= last && scale <= 1.0);
            last = scale;
        }
        assert!(appear.is_done());
    }
}
