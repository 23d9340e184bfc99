//! Shared scheduling types.

use bevy::prelude::*;

/// System sets ordering one frame of navigation.
///
/// Requests raised by input adapters are applied before the camera rig reads
/// the navigation state, so a pick registered this frame moves the camera on
/// the same frame. Rig completion signals are applied last.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum NavigationSet {
    /// Keyboard, wheel, touch and scene-click adapters emit requests.
    Input,
    /// The navigation state owner applies requests.
    Apply,
    /// The camera rig eases toward the current goal.
    Rig,
    /// Rig completion signals are applied to the navigation state.
    Complete,
}
