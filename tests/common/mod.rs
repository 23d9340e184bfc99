//! Common test utilities for integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::time::Duration;

use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::input::touch::TouchPhase;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;
use bevy::transform::TransformPlugin;

use orrery::camera::framing::FramingSettings;
use orrery::camera::rig::{self, CameraRig, RigSettings};
use orrery::camera::MainCamera;
use orrery::experience::ExperienceState;
use orrery::input::InputPlugin;
use orrery::navigation::{
    LiveTarget, NavigationPlugin, NavigationRequest, NavigationState, SectionAnchors, SectionBody,
    TargetResolver,
};
use orrery::orbit::{OrbitPivot, OrbitPlugin, orbit_position};
use orrery::sections::{ORDERED_SECTIONS, SectionId, all_placements};
use orrery::types::NavigationSet;

/// Fixed frame time for headless apps.
pub const FRAME: Duration = Duration::from_micros(16_667);

/// Resolver over a fixed table.
#[derive(Default)]
pub struct TableResolver(pub HashMap<SectionId, LiveTarget>);

impl TargetResolver for TableResolver {
    fn resolve(&self, section: SectionId) -> Option<LiveTarget> {
        self.0.get(&section).copied()
    }
}

/// Every section at its initial orbital position.
pub fn initial_positions() -> TableResolver {
    TableResolver(
        all_placements()
            .iter()
            .map(|p| {
                let target = LiveTarget {
                    position: orbit_position(p.radius, p.angle),
                    radius: p.size,
                };
                (p.id, target)
            })
            .collect(),
    )
}

/// Headless app with navigation, orbits, the input adapters and the camera
/// rig, but no rendering or windowing. Bodies are spawned without meshes.
///
/// Raw device input is registered by hand instead of through Bevy's input
/// plugin, so key presses stay put until the test releases them.
pub fn headless_app() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin, TransformPlugin))
        .insert_resource(TimeUpdateStrategy::ManualDuration(FRAME))
        .insert_state(ExperienceState::Interactive)
        .add_message::<MouseWheel>()
        .add_message::<TouchInput>()
        .init_resource::<ButtonInput<KeyCode>>()
        .add_plugins((NavigationPlugin, OrbitPlugin, InputPlugin))
        .init_resource::<FramingSettings>()
        .init_resource::<RigSettings>()
        .init_resource::<CameraRig>()
        .add_systems(Update, rig::drive_camera_rig.in_set(NavigationSet::Rig));

    let home = app.world().resource::<RigSettings>().home_position;
    app.world_mut().spawn((
        Transform::from_translation(home).looking_at(Vec3::ZERO, Vec3::Y),
        MainCamera,
    ));

    for id in ORDERED_SECTIONS {
        let placement = id.placement();
        let body = app
            .world_mut()
            .spawn((
                Transform::from_xyz(placement.radius, 0.0, 0.0),
                SectionBody {
                    id,
                    size: placement.size,
                },
            ))
            .id();
        app.world_mut()
            .spawn((
                Transform::from_rotation(Quat::from_rotation_y(placement.angle)),
                OrbitPivot {
                    angle: placement.angle,
                    speed: placement.orbit_speed,
                },
            ))
            .add_child(body);
        app.world_mut()
            .resource_mut::<SectionAnchors>()
            .register(id, body);
    }

    // Propagate transforms once before any navigation
    app.update();
    app
}

pub fn send(app: &mut App, request: NavigationRequest) {
    app.world_mut()
        .resource_mut::<Messages<NavigationRequest>>()
        .write(request);
}

/// Press `key` for a single frame.
pub fn tap_key(app: &mut App, key: KeyCode) {
    app.world_mut().resource_mut::<ButtonInput<KeyCode>>().press(key);
    app.update();
    app.world_mut().resource_mut::<ButtonInput<KeyCode>>().reset_all();
}

/// Write one pixel-unit wheel message. Negative `y` scrolls down.
pub fn scroll(app: &mut App, y: f32) {
    app.world_mut().resource_mut::<Messages<MouseWheel>>().write(MouseWheel {
        unit: MouseScrollUnit::Pixel,
        x: 0.0,
        y,
        window: Entity::PLACEHOLDER,
    });
}

/// Write one touch message for finger `id`.
pub fn touch(app: &mut App, id: u64, phase: TouchPhase, position: Vec2) {
    app.world_mut().resource_mut::<Messages<TouchInput>>().write(TouchInput {
        phase,
        position,
        window: Entity::PLACEHOLDER,
        force: None,
        id,
    });
}

pub fn nav(app: &App) -> &NavigationState {
    app.world().resource::<NavigationState>()
}

pub fn camera_translation(app: &mut App) -> Vec3 {
    let mut query = app
        .world_mut()
        .query_filtered::<&Transform, With<MainCamera>>();
    query
        .single(app.world())
        .map(|t| t.translation)
        .unwrap_or(Vec3::NAN)
}

/// World position of a section body as of the last transform propagation.
pub fn body_position(app: &App, id: SectionId) -> Vec3 {
    let entity = app
        .world()
        .resource::<SectionAnchors>()
        .entity(id)
        .expect("section registered");
    app.world()
        .get::<GlobalTransform>(entity)
        .expect("body has a global transform")
        .translation()
}

/// Update until `done` holds or `max_frames` pass; returns frames taken.
pub fn run_until(app: &mut App, max_frames: usize, done: impl Fn(&NavigationState) -> bool) -> Option<usize> {
    for frame in 1..=max_frames {
        app.update();
        if done(nav(app)) {
            return Some(frame);
        }
    }
    None
}
