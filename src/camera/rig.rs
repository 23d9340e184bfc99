//! Per-frame camera rig.
//!
//! Each frame the rig eases the camera toward the goal implied by the current
//! navigation mode and reports arrival through a [`RigSignal`]. It never
//! mutates [`NavigationState`] itself.

use bevy::prelude::*;

use super::MainCamera;
use super::framing::{FramingSettings, Lens, ease_factor, framing_position, off_center_aim};
use crate::navigation::{
    AnchorResolver, LiveTarget, Mode, NavigationState, SectionAnchors, SectionBody, TargetResolver,
};
use crate::sections::SectionId;

/// Completion events sent from the rig to the navigation state owner.
#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RigSignal {
    /// The camera framed the section it was warping to.
    WarpArrived(SectionId),
    /// The camera is back at the hub home position.
    ReturnArrived,
}

/// Tuning for camera motion and arrival detection.
#[derive(Resource, Clone, Debug)]
pub struct RigSettings {
    /// Remaining-distance fraction per second while warping.
    pub warp_ease_base: f32,
    /// Remaining-distance fraction per second while holding a panel.
    pub panel_ease_base: f32,
    /// Warp counts as arrived within this distance of the goal.
    pub warp_arrival_distance: f32,
    /// Warp counts as arrived after this many seconds regardless of distance.
    pub warp_timeout_secs: f32,
    /// Return counts as arrived within this distance of home.
    pub return_arrival_distance: f32,
    /// Camera position at the hub.
    pub home_position: Vec3,
    /// Point the camera looks at from home.
    pub home_look_at: Vec3,
    /// Vertical field of view (degrees) used when the camera has no
    /// perspective projection to read from.
    pub fov_y_degrees: f32,
}

impl Default for RigSettings {
    fn default() -> Self {
        Self {
            warp_ease_base: 0.00003,
            // Roughly 3% per frame at 60 fps
            panel_ease_base: 0.16,
            warp_arrival_distance: 0.08,
            warp_timeout_secs: 1.2,
            return_arrival_distance: 0.02,
            home_position: Vec3::new(0.0, 3.0, 11.0),
            home_look_at: Vec3::ZERO,
            fov_y_degrees: 50.0,
        }
    }
}

/// Rig progress through a warp.
///
/// Arrival is level-triggered (checked every frame) but must be reported
/// once, so the rig parks in an `Awaiting*` phase after signalling until the
/// mode moves on.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum RigPhase {
    #[default]
    Idle,
    Warping {
        section: SectionId,
        elapsed: f32,
    },
    AwaitingPanel {
        section: SectionId,
    },
    Returning,
    AwaitingHub,
}

/// Camera rig controller state.
#[derive(Resource, Clone, Debug, Default)]
pub struct CameraRig {
    phase: RigPhase,
}

impl CameraRig {
    pub fn phase(&self) -> RigPhase {
        self.phase
    }

    /// Advance the camera one frame.
    ///
    /// `live` is the current bounds of the active section's body, if it can
    /// be resolved. Returns a signal the first frame arrival is detected.
    pub fn step(
        &mut self,
        nav: &NavigationState,
        live: Option<LiveTarget>,
        camera: &mut Transform,
        lens: Lens,
        framing: &FramingSettings,
        settings: &RigSettings,
        dt: f32,
    ) -> Option<RigSignal> {
        match (nav.mode(), nav.current_section()) {
            (Mode::WarpingTo, Some(section)) => {
                self.warp_step(section, nav.target(), live, camera, lens, framing, settings, dt)
            }
            (Mode::Panel, Some(_)) => {
                self.phase = RigPhase::Idle;
                if let Some(live) = live {
                    let goal = framing_position(live.position, Some(live.radius), lens, framing);
                    let factor = ease_factor(settings.panel_ease_base, dt);
                    ease_toward(camera, goal, live.position, lens, framing.subject_bias, factor);
                }
                None
            }
            (Mode::WarpingBack, _) => self.return_step(camera, settings, dt),
            _ => {
                self.phase = RigPhase::Idle;
                None
            }
        }
    }

    fn warp_step(
        &mut self,
        section: SectionId,
        stored: Option<Vec3>,
        live: Option<LiveTarget>,
        camera: &mut Transform,
        lens: Lens,
        framing: &FramingSettings,
        settings: &RigSettings,
        dt: f32,
    ) -> Option<RigSignal> {
        let elapsed = match self.phase {
            RigPhase::AwaitingPanel { section: s } if s == section => return None,
            RigPhase::Warping { section: s, elapsed } if s == section => elapsed + dt,
            // New warp, or retargeted mid-flight
            _ => dt,
        };
        self.phase = RigPhase::Warping { section, elapsed };

        // Prefer the body's live position; fall back to the pick-time point
        let subject = live.map(|l| l.position).or(stored);
        let mut arrived = elapsed > settings.warp_timeout_secs;

        if let Some(subject) = subject {
            let goal = framing_position(subject, live.map(|l| l.radius), lens, framing);
            let factor = ease_factor(settings.warp_ease_base, dt);
            ease_toward(camera, goal, subject, lens, framing.subject_bias, factor);
            arrived |= camera.translation.distance(goal) < settings.warp_arrival_distance;
        }

        if !arrived {
            return None;
        }
        self.phase = RigPhase::AwaitingPanel { section };
        Some(RigSignal::WarpArrived(section))
    }

    fn return_step(
        &mut self,
        camera: &mut Transform,
        settings: &RigSettings,
        dt: f32,
    ) -> Option<RigSignal> {
        if self.phase == RigPhase::AwaitingHub {
            return None;
        }
        self.phase = RigPhase::Returning;

        let factor = ease_factor(settings.warp_ease_base, dt);
        camera.translation = camera.translation.lerp(settings.home_position, factor);
        let home = Transform::from_translation(camera.translation)
            .looking_at(settings.home_look_at, Vec3::Y)
            .rotation;
        camera.rotation = camera.rotation.slerp(home, factor);

        if camera.translation.distance(settings.home_position) >= settings.return_arrival_distance {
            return None;
        }
        self.phase = RigPhase::AwaitingHub;
        Some(RigSignal::ReturnArrived)
    }
}

/// Drive the main camera from the navigation state.
pub fn drive_camera_rig(
    time: Res<Time>,
    nav: Res<NavigationState>,
    anchors: Res<SectionAnchors>,
    bodies: Query<(&'static GlobalTransform, &'static SectionBody)>,
    framing: Res<FramingSettings>,
    settings: Res<RigSettings>,
    mut rig: ResMut<CameraRig>,
    mut camera: Query<(&mut Transform, Option<&Projection>), With<MainCamera>>,
    mut signals: MessageWriter<RigSignal>,
) {
    let Ok((mut transform, projection)) = camera.single_mut() else {
        return;
    };

    let lens = match projection {
        Some(Projection::Perspective(p)) => Lens::new(p.fov, p.aspect_ratio),
        _ => Lens::from_degrees(settings.fov_y_degrees, 16.0 / 9.0),
    };
    let live = nav
        .current_section()
        .and_then(|section| AnchorResolver::new(&anchors, &bodies).resolve(section));

    let dt = time.delta_secs();
    if let Some(signal) = rig.step(&nav, live, &mut transform, lens, &framing, &settings, dt) {
        debug!("Camera rig: {signal:?} in {} mode", nav.mode());
        signals.write(signal);
    }
}

/// Ease position toward `goal` and orientation toward an off-center aim at
/// `subject`.
fn ease_toward(
    camera: &mut Transform,
    goal: Vec3,
    subject: Vec3,
    lens: Lens,
    bias: Vec2,
    factor: f32,
) {
    camera.translation = camera.translation.lerp(goal, factor);
    let aim = off_center_aim(camera.translation, Vec3::Y, lens, subject, bias);
    camera.rotation = camera.rotation.slerp(aim.rotation, factor);
}
