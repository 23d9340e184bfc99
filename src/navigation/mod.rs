//! Navigation between the hub and section panels.
//!
//! [`NavigationState`] is the single source of truth for the view mode. It is
//! mutated only by the systems in this module: input adapters and overlay
//! widgets send [`NavigationRequest`] messages, the camera rig sends
//! [`RigSignal`] messages, and both are applied here in a fixed order each
//! frame (see [`NavigationSet`]).

pub mod anchors;
pub mod state;

#[cfg(test)]
mod proptest_navigation;

use bevy::prelude::*;

use crate::camera::rig::RigSignal;
use crate::sections::SectionId;
use crate::types::NavigationSet;

pub use self::anchors::{AnchorResolver, LiveTarget, SectionAnchors, SectionBody, TargetResolver};
pub use self::state::{Mode, NavigationError, NavigationState, StepDirection, Transition};

/// A request to change what the experience is showing.
#[derive(Message, Clone, Copy, Debug, PartialEq)]
pub enum NavigationRequest {
    /// Select a section whose body was seen at `world_position`.
    Pick {
        section: SectionId,
        world_position: Vec3,
    },
    /// Select a section at wherever its body is now, even mid-warp.
    PickSection(SectionId),
    /// Return to the hub.
    Back,
    /// Select the section at an index in navigation order.
    GoToIndex(usize),
    /// Move one section forward or backward.
    Step(StepDirection),
}

/// Plugin owning the navigation state and its transitions.
pub struct NavigationPlugin;

impl Plugin for NavigationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<NavigationState>()
            .init_resource::<SectionAnchors>()
            .add_message::<NavigationRequest>()
            .add_message::<RigSignal>()
            .configure_sets(
                Update,
                (
                    NavigationSet::Input,
                    NavigationSet::Apply,
                    NavigationSet::Rig,
                    NavigationSet::Complete,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (
                    (anchors::prune_anchors, apply_navigation_requests)
                        .chain()
                        .in_set(NavigationSet::Apply),
                    apply_rig_signals.in_set(NavigationSet::Complete),
                ),
            );
    }
}

/// Apply pending navigation requests in arrival order.
fn apply_navigation_requests(
    mut requests: MessageReader<NavigationRequest>,
    mut state: ResMut<NavigationState>,
    anchors: Res<SectionAnchors>,
    bodies: Query<(&'static GlobalTransform, &'static SectionBody)>,
) {
    let resolver = AnchorResolver::new(&anchors, &bodies);

    for request in requests.read() {
        let result = match *request {
            NavigationRequest::Pick {
                section,
                world_position,
            } => state.pick(section, world_position),
            NavigationRequest::PickSection(section) => state.pick_section(section, &resolver),
            NavigationRequest::Back => state.back(),
            NavigationRequest::GoToIndex(index) => state.navigate_to_index(index, &resolver),
            NavigationRequest::Step(direction) => state.step(direction, &resolver),
        };
        report(result, request);
    }
}

/// Apply completion signals from the camera rig.
fn apply_rig_signals(mut signals: MessageReader<RigSignal>, mut state: ResMut<NavigationState>) {
    for signal in signals.read() {
        let result = match *signal {
            RigSignal::WarpArrived(section) => state.warp_arrived(section),
            RigSignal::ReturnArrived => state.return_arrived(),
        };
        report(result, signal);
    }
}

fn report(result: Result<Transition, NavigationError>, cause: &impl std::fmt::Debug) {
    match result {
        Ok(Transition::Warping(section)) => debug!("Warping to {}", section.name()),
        Ok(Transition::Returning) => debug!("Returning to hub"),
        Ok(Transition::Arrived(section)) => info!("Viewing {}", section.name()),
        Ok(Transition::Home) => info!("Back at hub"),
        Ok(Transition::Unchanged) => {}
        Err(err) if err.is_defect() => warn!("Rejected {cause:?}: {err}"),
        Err(err) => debug!("Dropped {cause:?}: {err}"),
    }
}
