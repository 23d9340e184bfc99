//! Camera for the landing scene.
//!
//! A single perspective camera starts at the hub home position. The
//! [`rig`] moves it between sections; [`framing`] holds the math deciding
//! where it should go.

pub mod framing;
pub mod rig;

#[cfg(test)]
mod proptest_framing;

use bevy::post_process::bloom::Bloom;
use bevy::prelude::*;

use crate::types::NavigationSet;

pub use self::framing::{FramingSettings, Lens};
pub use self::rig::{CameraRig, RigPhase, RigSettings, RigSignal};

/// Marker component for the main camera.
#[derive(Component)]
pub struct MainCamera;

/// Plugin providing the camera and its rig.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FramingSettings>()
            .init_resource::<RigSettings>()
            .init_resource::<CameraRig>()
            .add_message::<RigSignal>()
            .add_systems(Startup, setup_camera)
            .add_systems(Update, rig::drive_camera_rig.in_set(NavigationSet::Rig));
    }
}

/// Spawn the main camera at the hub home position.
///
/// Bloom makes the emissive sun glow against the dark backdrop.
fn setup_camera(mut commands: Commands, settings: Res<RigSettings>) {
    commands.spawn((
        Camera3d::default(),
        Bloom::NATURAL,
        Projection::from(PerspectiveProjection {
            fov: settings.fov_y_degrees.to_radians(),
            near: 0.1,
            far: 1000.0,
            ..default()
        }),
        Transform::from_translation(settings.home_position)
            .looking_at(settings.home_look_at, Vec3::Y),
        MainCamera,
    ));
}
