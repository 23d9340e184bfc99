//! Experience lifecycle: loading, interactive, or unsupported.
//!
//! Rendering capability is checked once at startup. Without a render device
//! the whole scene is replaced by a static fallback view for the rest of the
//! session.

use bevy::prelude::*;
use bevy::render::renderer::RenderDevice;

use crate::navigation::SectionAnchors;
use crate::sections::SECTION_COUNT;

/// Top-level lifecycle of the landing experience.
#[derive(States, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ExperienceState {
    /// Scene is being built; loading screen visible.
    #[default]
    Loading,
    /// Scene mounted and accepting input.
    Interactive,
    /// No 3D rendering available. Terminal.
    Unsupported,
}

/// Result of the startup rendering check.
#[derive(Resource, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderCapability {
    Available,
    Missing,
}

impl RenderCapability {
    pub fn classify(has_render_device: bool) -> Self {
        if has_render_device {
            RenderCapability::Available
        } else {
            RenderCapability::Missing
        }
    }
}

/// Minimum time the loading screen stays up.
#[derive(Resource)]
pub struct LoadingTimer(pub Timer);

impl Default for LoadingTimer {
    fn default() -> Self {
        Self(Timer::from_seconds(0.5, TimerMode::Once))
    }
}

/// Plugin driving the lifecycle state.
pub struct ExperiencePlugin;

impl Plugin for ExperiencePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<ExperienceState>()
            .init_resource::<LoadingTimer>()
            .add_systems(Startup, detect_render_capability)
            .add_systems(
                Update,
                finish_loading.run_if(in_state(ExperienceState::Loading)),
            )
            .add_systems(OnEnter(ExperienceState::Interactive), || {
                info!("Experience interactive");
            });
    }
}

fn detect_render_capability(
    mut commands: Commands,
    device: Option<Res<RenderDevice>>,
    mut next: ResMut<NextState<ExperienceState>>,
) {
    let capability = RenderCapability::classify(device.is_some());
    match capability {
        RenderCapability::Available => info!("Render device available"),
        RenderCapability::Missing => {
            warn!("No render device; showing fallback view");
            next.set(ExperienceState::Unsupported);
        }
    }
    commands.insert_resource(capability);
}

/// Leave the loading screen once the minimum delay has passed and every
/// section body is registered.
pub fn finish_loading(
    time: Res<Time>,
    capability: Option<Res<RenderCapability>>,
    anchors: Res<SectionAnchors>,
    mut timer: ResMut<LoadingTimer>,
    mut next: ResMut<NextState<ExperienceState>>,
) {
    timer.0.tick(time.delta());
    if capability.as_deref() != Some(&RenderCapability::Available) {
        return;
    }
    if timer.0.is_finished() && anchors.len() == SECTION_COUNT {
        next.set(ExperienceState::Interactive);
    }
}
