//! Orbit animation.
//!
//! Each planet hangs off a pivot entity at the origin; rotating the pivot
//! about +Y carries the planet around the sun. Planets and the sun also spin
//! about their own axis.

use bevy::prelude::*;

use crate::navigation::{Mode, NavigationState};
use crate::types::NavigationSet;

/// Whether planets keep orbiting outside the hub.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OrbitPolicy {
    /// Orbits pause as soon as a warp starts and resume back at the hub.
    #[default]
    FreezeOutsideHub,
    /// Orbits never pause; the camera rig tracks the moving planet.
    AlwaysOrbit,
}

/// Orbit and spin tuning.
#[derive(Resource, Clone, Debug)]
pub struct OrbitSettings {
    pub policy: OrbitPolicy,
    /// Planet self-rotation (radians per second).
    pub planet_spin: f32,
    /// Sun self-rotation (radians per second).
    pub sun_spin: f32,
    /// Disables self-rotation and the appear animation.
    pub reduced_motion: bool,
}

impl Default for OrbitSettings {
    fn default() -> Self {
        Self {
            policy: OrbitPolicy::default(),
            planet_spin: 0.3,
            sun_spin: 0.05,
            reduced_motion: false,
        }
    }
}

impl OrbitSettings {
    /// Whether orbits advance in `mode`.
    pub fn orbits_in(&self, mode: Mode) -> bool {
        match self.policy {
            OrbitPolicy::AlwaysOrbit => true,
            OrbitPolicy::FreezeOutsideHub => mode == Mode::Hub,
        }
    }
}

/// Pivot at the origin carrying one planet around the sun.
#[derive(Component, Clone, Debug)]
pub struct OrbitPivot {
    /// Current orbital angle about +Y (radians).
    pub angle: f32,
    /// Angular speed (radians per second).
    pub speed: f32,
}

/// Self-rotation about the local +Y axis.
#[derive(Component, Clone, Debug)]
pub struct Spin {
    /// Radians per second.
    pub speed: f32,
}

/// Position of a planet at `radius` after rotating by `angle` about +Y.
pub fn orbit_position(radius: f32, angle: f32) -> Vec3 {
    Quat::from_rotation_y(angle) * Vec3::new(radius, 0.0, 0.0)
}

/// Plugin advancing orbits and spins.
pub struct OrbitPlugin;

impl Plugin for OrbitPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<OrbitSettings>().add_systems(
            Update,
            (advance_orbits, spin_bodies).before(NavigationSet::Input),
        );
    }
}

/// Rotate every pivot by its angular speed.
pub fn advance_orbits(
    time: Res<Time>,
    settings: Res<OrbitSettings>,
    nav: Res<NavigationState>,
    mut pivots: Query<(&mut OrbitPivot, &mut Transform)>,
) {
    if !settings.orbits_in(nav.mode()) {
        return;
    }
    let dt = time.delta_secs();
    for (mut pivot, mut transform) in &mut pivots {
        pivot.angle = (pivot.angle + pivot.speed * dt).rem_euclid(std::f32::consts::TAU);
        transform.rotation = Quat::from_rotation_y(pivot.angle);
    }
}

/// Spin bodies about their local axis.
pub fn spin_bodies(
    time: Res<Time>,
    settings: Res<OrbitSettings>,
    mut bodies: Query<(&Spin, &mut Transform)>,
) {
    if settings.reduced_motion {
        return;
    }
    let dt = time.delta_secs();
    for (spin, mut transform) in &mut bodies {
        transform.rotate_local_y(spin.speed * dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;
    use std::time::Duration;

    #[test]
    fn test_orbit_position() {
        let p = orbit_position(2.0, 0.0);
        assert_relative_eq!(p.x, 2.0, epsilon = 1e-6);
        let q = orbit_position(2.0, FRAC_PI_2);
        // Rotating +X about +Y by 90 degrees lands on -Z
        assert_relative_eq!(q.z, -2.0, epsilon = 1e-5);
        assert_relative_eq!(q.length(), 2.0, epsilon = 1e-5);
    }

    #[test]
    fn test_policy_gates_orbits() {
        let freeze = OrbitSettings::default();
        assert!(freeze.orbits_in(Mode::Hub));
        assert!(!freeze.orbits_in(Mode::Panel));
        assert!(!freeze.orbits_in(Mode::WarpingTo));

        let always = OrbitSettings {
            policy: OrbitPolicy::AlwaysOrbit,
            ..default()
        };
        assert!(always.orbits_in(Mode::Panel));
    }

    fn orbit_app(settings: OrbitSettings, nav: NavigationState) -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .insert_resource(bevy::time::TimeUpdateStrategy::ManualDuration(
                Duration::from_millis(100),
            ))
            .insert_resource(settings)
            .insert_resource(nav)
            .add_systems(Update, (advance_orbits, spin_bodies));
        app
    }

    #[test]
    fn test_pivot_advances_in_hub() {
        let mut app = orbit_app(OrbitSettings::default(), NavigationState::new());
        let pivot = app
            .world_mut()
            .spawn((OrbitPivot { angle: 0.0, speed: 1.0 }, Transform::default()))
            .id();

        for _ in 0..5 {
            app.update();
        }
        let angle = app.world().get::<OrbitPivot>(pivot).unwrap().angle;
        assert!(angle > 0.0, "pivot should have moved, got {angle}");
        let rotation = app.world().get::<Transform>(pivot).unwrap().rotation;
        assert!(rotation.angle_between(Quat::from_rotation_y(angle)) < 1e-5);
    }

    #[test]
    fn test_pivot_frozen_in_panel() {
        let mut nav = NavigationState::new();
        nav.pick(crate::sections::SectionId::About, Vec3::X).unwrap();
        let mut app = orbit_app(OrbitSettings::default(), nav);
        let pivot = app
            .world_mut()
            .spawn((OrbitPivot { angle: 0.5, speed: 1.0 }, Transform::default()))
            .id();

        for _ in 0..5 {
            app.update();
        }
        assert_eq!(app.world().get::<OrbitPivot>(pivot).unwrap().angle, 0.5);
    }

    #[test]
    fn test_reduced_motion_stops_spin() {
        let settings = OrbitSettings {
            reduced_motion: true,
            ..default()
        };
        let mut app = orbit_app(settings, NavigationState::new());
        let body = app
            .world_mut()
            .spawn((Spin { speed: 1.0 }, Transform::default()))
            .id();
        for _ in 0..3 {
            app.update();
        }
        assert_eq!(app.world().get::<Transform>(body).unwrap().rotation, Quat::IDENTITY);
    }
}
