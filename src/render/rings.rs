//! Orbit rings drawn with Bevy gizmos.
//!
//! One circle per section radius in the XZ plane. Rings fade in at the hub
//! and out everywhere else.

use bevy::prelude::*;

use crate::camera::framing::ease_factor;
use crate::navigation::{Mode, NavigationState};
use crate::sections::all_placements;

/// Settings and live opacity for orbit rings.
#[derive(Resource)]
pub struct RingSettings {
    /// Opacity while at the hub.
    pub hub_opacity: f32,
    /// Line segments per ring.
    pub segments: usize,
    /// Remaining opacity gap fraction per second.
    pub fade_base: f32,
    pub opacity: f32,
}

impl Default for RingSettings {
    fn default() -> Self {
        Self {
            hub_opacity: 0.35,
            segments: 128,
            fade_base: 0.01,
            opacity: 0.0,
        }
    }
}

impl RingSettings {
    /// Opacity the rings ease toward in `mode`.
    pub fn target_opacity(&self, mode: Mode) -> f32 {
        if mode == Mode::Hub {
            self.hub_opacity
        } else {
            0.0
        }
    }
}

pub(super) struct RingPlugin;

impl Plugin for RingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RingSettings>()
            .add_systems(Update, draw_rings);
    }
}

/// Closed polyline approximating a circle of `radius` in the XZ plane.
pub fn ring_points(radius: f32, segments: usize) -> Vec<Vec3> {
    let segments = segments.max(3);
    (0..=segments)
        .map(|i| {
            let theta = i as f32 / segments as f32 * std::f32::consts::TAU;
            Vec3::new(radius * theta.cos(), 0.0, radius * theta.sin())
        })
        .collect()
}

fn draw_rings(
    mut gizmos: Gizmos,
    time: Res<Time>,
    nav: Res<NavigationState>,
    mut settings: ResMut<RingSettings>,
) {
    let target = settings.target_opacity(nav.mode());
    let factor = ease_factor(settings.fade_base, time.delta_secs());
    settings.opacity += (target - settings.opacity) * factor;

    if settings.opacity < 0.01 {
        return;
    }
    for placement in all_placements() {
        let color = placement.id.appearance().bevy_color().with_alpha(settings.opacity);
        gizmos.linestrip(ring_points(placement.radius, settings.segments), color);
    }
}
