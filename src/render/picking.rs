//! Scene click picking.
//!
//! A click casts a ray from the cursor through the main camera. The nearest
//! planet hit becomes a pick request; hitting the sun is a back request.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use super::bodies::{SUN_RADIUS, Sun};
use crate::camera::MainCamera;
use crate::experience::ExperienceState;
use crate::input::ChromeRegions;
use crate::navigation::{NavigationRequest, SectionBody, anchors::live_target};
use crate::sections::SectionId;
use crate::types::NavigationSet;

/// What a click landed on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PickTarget {
    Section { id: SectionId, position: Vec3 },
    Sun,
}

impl PickTarget {
    pub fn request(self) -> NavigationRequest {
        match self {
            PickTarget::Section { id, position } => NavigationRequest::Pick {
                section: id,
                world_position: position,
            },
            PickTarget::Sun => NavigationRequest::Back,
        }
    }
}

/// Distance along a ray to its first intersection with a sphere.
///
/// `direction` must be normalized. Returns `None` on a miss or when the
/// sphere lies entirely behind the origin.
pub fn ray_sphere_distance(origin: Vec3, direction: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = origin - center;
    let b = oc.dot(direction);
    let c = oc.length_squared() - radius * radius;
    let discriminant = b * b - c;
    if discriminant < 0.0 {
        return None;
    }
    let root = discriminant.sqrt();
    let near = -b - root;
    let far = -b + root;
    if near >= 0.0 {
        Some(near)
    } else if far >= 0.0 {
        // Origin inside the sphere
        Some(0.0)
    } else {
        None
    }
}

/// Nearest candidate hit by the ray.
pub fn nearest_hit(
    origin: Vec3,
    direction: Vec3,
    candidates: impl IntoIterator<Item = (PickTarget, Vec3, f32)>,
) -> Option<PickTarget> {
    candidates
        .into_iter()
        .filter_map(|(target, center, radius)| {
            ray_sphere_distance(origin, direction, center, radius).map(|d| (target, d))
        })
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(target, _)| target)
}

pub(super) struct PickingPlugin;

impl Plugin for PickingPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            pick_on_click
                .in_set(NavigationSet::Input)
                .run_if(in_state(ExperienceState::Interactive)),
        );
    }
}

fn pick_on_click(
    buttons: Res<ButtonInput<MouseButton>>,
    window: Query<&Window, With<PrimaryWindow>>,
    camera: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    chrome: Res<ChromeRegions>,
    bodies: Query<(&GlobalTransform, &SectionBody)>,
    sun: Query<&GlobalTransform, With<Sun>>,
    mut requests: MessageWriter<NavigationRequest>,
) {
    if !buttons.just_pressed(MouseButton::Left) {
        return;
    }
    let Ok(window) = window.single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    if chrome.contains(cursor) {
        return;
    }
    let Ok((camera, camera_transform)) = camera.single() else {
        return;
    };
    let Ok(ray) = camera.viewport_to_world(camera_transform, cursor) else {
        return;
    };

    let planets = bodies.iter().filter_map(|(transform, body)| {
        let live = live_target(transform, body)?;
        Some((
            PickTarget::Section {
                id: body.id,
                position: live.position,
            },
            live.position,
            live.radius,
        ))
    });
    let suns = sun
        .iter()
        .map(|transform| (PickTarget::Sun, transform.translation(), SUN_RADIUS));

    if let Some(target) = nearest_hit(ray.origin, *ray.direction, planets.chain(suns)) {
        debug!("Clicked {target:?}");
        requests.write(target.request());
    }
}
