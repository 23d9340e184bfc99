//! Scene presentation: sun, planets, orbit rings, labels and click picking.
//!
//! Consumes the navigation state and emits pick/back requests; never
//! mutates navigation directly.

pub mod bodies;
mod labels;
pub mod picking;
mod rings;

use bevy::prelude::*;

use self::bodies::BodiesPlugin;
use self::labels::LabelPlugin;
use self::picking::PickingPlugin;
use self::rings::RingPlugin;

pub use self::bodies::{Appear, Sun};
pub use self::labels::LabelSettings;
pub use self::picking::PickTarget;
pub use self::rings::RingSettings;

/// Plugin aggregating scene rendering.
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((BodiesPlugin, RingPlugin, LabelPlugin, PickingPlugin));
    }
}
