//! Input adapters for keyboard, mouse wheel and touch swipes.
//!
//! Each adapter turns raw device input into a [`NavigationRequest`]. The
//! decision logic lives in plain functions and small state types so it can
//! be tested without an app; the systems at the bottom only feed them.

use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::input::touch::{TouchInput, TouchPhase};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::experience::ExperienceState;
use crate::navigation::{Mode, NavigationRequest, NavigationState, StepDirection};
use crate::types::NavigationSet;

/// Thresholds for wheel and swipe navigation.
#[derive(Resource, Clone, Debug)]
pub struct InputSettings {
    /// Minimum scroll magnitude (pixels) that counts as a navigation gesture.
    pub wheel_threshold: f32,
    /// Seconds after a wheel navigation during which further wheel input is
    /// ignored.
    pub wheel_debounce_secs: f64,
    /// Pixels per line for wheels reporting in lines.
    pub line_pixels: f32,
    /// Vertical swipe distance (pixels) that navigates.
    pub swipe_distance: f32,
    /// Vertical swipe speed (pixels per millisecond) that navigates.
    pub swipe_velocity: f32,
}

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            wheel_threshold: 50.0,
            wheel_debounce_secs: 1.2,
            line_pixels: 100.0,
            swipe_distance: 50.0,
            swipe_velocity: 0.5,
        }
    }
}

/// Screen rectangles covered by overlay chrome this frame, in logical
/// window coordinates. Gestures starting inside them belong to the overlay.
#[derive(Resource, Default, Debug)]
pub struct ChromeRegions {
    rects: Vec<Rect>,
}

impl ChromeRegions {
    pub fn clear(&mut self) {
        self.rects.clear();
    }

    pub fn push(&mut self, rect: Rect) {
        self.rects.push(rect);
    }

    pub fn contains(&self, point: Vec2) -> bool {
        self.rects.iter().any(|r| r.contains(point))
    }
}

/// Map a key press to a request for the current mode.
///
/// Escape only means something in panel mode. Arrow keys step through the
/// sections and are swallowed while a warp is in flight.
pub fn keyboard_request(key: KeyCode, mode: Mode) -> Option<NavigationRequest> {
    if mode.is_warping() {
        return None;
    }
    match key {
        KeyCode::Escape if mode == Mode::Panel => Some(NavigationRequest::Back),
        KeyCode::ArrowDown => Some(NavigationRequest::Step(StepDirection::Forward)),
        KeyCode::ArrowUp => Some(NavigationRequest::Step(StepDirection::Backward)),
        _ => None,
    }
}

/// Wheel gesture filter with a debounce window.
#[derive(Resource, Default, Debug)]
pub struct WheelGate {
    last_navigation: Option<f64>,
}

impl WheelGate {
    /// Feed one wheel delta (pixels, positive scrolls down) at time `now`
    /// (seconds). Returns the step to take, if any.
    pub fn feed(
        &mut self,
        delta_y: f32,
        now: f64,
        locked: bool,
        settings: &InputSettings,
    ) -> Option<StepDirection> {
        if locked || delta_y.abs() < settings.wheel_threshold {
            return None;
        }
        if self
            .last_navigation
            .is_some_and(|last| now - last < settings.wheel_debounce_secs)
        {
            return None;
        }
        self.last_navigation = Some(now);
        Some(if delta_y > 0.0 {
            StepDirection::Forward
        } else {
            StepDirection::Backward
        })
    }
}

/// Convert a Bevy wheel event into a pixel delta where positive scrolls
/// down the page.
pub fn wheel_pixels(unit: MouseScrollUnit, y: f32, settings: &InputSettings) -> f32 {
    match unit {
        MouseScrollUnit::Line => -y * settings.line_pixels,
        MouseScrollUnit::Pixel => -y,
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct SwipeStart {
    id: u64,
    y: f32,
    time: f64,
}

/// Tracks one vertical swipe from touch start to touch end.
#[derive(Resource, Default, Debug)]
pub struct SwipeTracker {
    start: Option<SwipeStart>,
}

impl SwipeTracker {
    /// Record a touch start unless it began over chrome.
    pub fn begin(&mut self, id: u64, position: Vec2, now: f64, over_chrome: bool) {
        if over_chrome {
            return;
        }
        self.start = Some(SwipeStart {
            id,
            y: position.y,
            time: now,
        });
    }

    /// Finish the swipe for touch `id` and decide whether it navigates.
    ///
    /// Either the distance or the speed threshold alone is enough.
    pub fn end(
        &mut self,
        id: u64,
        position: Vec2,
        now: f64,
        locked: bool,
        settings: &InputSettings,
    ) -> Option<StepDirection> {
        let start = self.start.filter(|s| s.id == id)?;
        self.start = None;
        if locked {
            return None;
        }

        // Finger moving up the screen scrolls forward
        let delta = start.y - position.y;
        let elapsed_ms = ((now - start.time) * 1000.0).max(1.0) as f32;
        let velocity = delta.abs() / elapsed_ms;

        if delta.abs() > settings.swipe_distance || velocity > settings.swipe_velocity {
            Some(if delta > 0.0 {
                StepDirection::Forward
            } else {
                StepDirection::Backward
            })
        } else {
            None
        }
    }

    pub fn cancel(&mut self, id: u64) {
        if self.start.is_some_and(|s| s.id == id) {
            self.start = None;
        }
    }

    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }
}

/// Plugin registering the input adapters.
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InputSettings>()
            .init_resource::<ChromeRegions>()
            .init_resource::<WheelGate>()
            .init_resource::<SwipeTracker>()
            .add_systems(
                Update,
                (keyboard_navigation, wheel_navigation, touch_navigation)
                    .in_set(NavigationSet::Input)
                    .run_if(in_state(ExperienceState::Interactive)),
            );
    }
}

fn keyboard_navigation(
    keys: Res<ButtonInput<KeyCode>>,
    nav: Res<NavigationState>,
    mut requests: MessageWriter<NavigationRequest>,
) {
    for key in keys.get_just_pressed() {
        if let Some(request) = keyboard_request(*key, nav.mode()) {
            requests.write(request);
            // One navigation per frame
            return;
        }
    }
}

fn wheel_navigation(
    mut wheel: MessageReader<MouseWheel>,
    time: Res<Time<Real>>,
    nav: Res<NavigationState>,
    settings: Res<InputSettings>,
    chrome: Res<ChromeRegions>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut gate: ResMut<WheelGate>,
    mut requests: MessageWriter<NavigationRequest>,
) {
    let over_chrome = windows
        .single()
        .ok()
        .and_then(|w| w.cursor_position())
        .is_some_and(|p| chrome.contains(p));
    let now = time.elapsed_secs_f64();

    for event in wheel.read() {
        if over_chrome {
            continue;
        }
        let delta = wheel_pixels(event.unit, event.y, &settings);
        if let Some(direction) = gate.feed(delta, now, nav.is_locked(), &settings) {
            debug!("Wheel {delta:.0}px -> {direction:?}");
            requests.write(NavigationRequest::Step(direction));
        }
    }
}

fn touch_navigation(
    mut touches: MessageReader<TouchInput>,
    time: Res<Time<Real>>,
    nav: Res<NavigationState>,
    settings: Res<InputSettings>,
    chrome: Res<ChromeRegions>,
    mut tracker: ResMut<SwipeTracker>,
    mut requests: MessageWriter<NavigationRequest>,
) {
    let now = time.elapsed_secs_f64();
    for touch in touches.read() {
        match touch.phase {
            TouchPhase::Started => {
                tracker.begin(touch.id, touch.position, now, chrome.contains(touch.position));
            }
            TouchPhase::Ended => {
                if let Some(direction) =
                    tracker.end(touch.id, touch.position, now, nav.is_locked(), &settings)
                {
                    debug!("Swipe -> {direction:?}");
                    requests.write(NavigationRequest::Step(direction));
                }
            }
            TouchPhase::Canceled => tracker.cancel(touch.id),
            TouchPhase::Moved => {}
        }
    }
}
