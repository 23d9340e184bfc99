//! Test utilities for navigation and camera tests.
//!
//! Provides fixtures for resolving section positions without a running app
//! and assertions for checking where points land on screen.

use std::collections::HashMap;

use bevy::prelude::*;

use crate::navigation::{LiveTarget, TargetResolver};
use crate::sections::SectionId;

/// Fixtures for creating test navigation inputs.
pub mod fixtures {
    use super::*;
    use crate::orbit::orbit_position;
    use crate::sections::all_placements;

    /// Resolver backed by a fixed table. Sections missing from the table are
    /// unresolvable, like a body that has not been spawned yet.
    #[derive(Default, Clone, Debug)]
    pub struct FixedResolver {
        pub targets: HashMap<SectionId, LiveTarget>,
    }

    impl FixedResolver {
        pub fn with(mut self, section: SectionId, position: Vec3, radius: f32) -> Self {
            self.targets.insert(section, LiveTarget { position, radius });
            self
        }
    }

    impl TargetResolver for FixedResolver {
        fn resolve(&self, section: SectionId) -> Option<LiveTarget> {
            self.targets.get(&section).copied()
        }
    }

    /// Every section at its initial orbital position with full scale.
    pub fn orbit_resolver() -> FixedResolver {
        all_placements()
            .iter()
            .fold(FixedResolver::default(), |resolver, p| {
                resolver.with(p.id, orbit_position(p.radius, p.angle), p.size)
            })
    }
}

/// Assertions for screen-space checks.
pub mod assertions {
    use super::*;
    use crate::camera::framing::Lens;

    /// Project `point` into normalized device coordinates for a camera at
    /// `eye` with orientation `rotation`. `None` if the point is behind it.
    pub fn project_to_ndc(eye: Vec3, rotation: Quat, lens: Lens, point: Vec3) -> Option<Vec2> {
        let local = rotation.inverse() * (point - eye);
        let depth = -local.z;
        if depth <= 0.0 {
            return None;
        }
        Some(Vec2::new(
            local.x / depth / lens.tan_half_x(),
            local.y / depth / lens.tan_half_y(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::assertions::project_to_ndc;
    use super::*;
    use crate::camera::framing::Lens;

    #[test]
    fn test_projection_center_and_edges() {
        let lens = Lens::from_degrees(50.0, 1.5);
        let eye = Vec3::ZERO;
        let rotation = Quat::IDENTITY;

        let center = project_to_ndc(eye, rotation, lens, Vec3::new(0.0, 0.0, -5.0)).unwrap();
        assert!(center.length() < 1e-6);

        let top = Vec3::new(0.0, 5.0 * lens.tan_half_y(), -5.0);
        let ndc = project_to_ndc(eye, rotation, lens, top).unwrap();
        assert!((ndc.y - 1.0).abs() < 1e-5);

        assert!(project_to_ndc(eye, rotation, lens, Vec3::Z).is_none());
    }
}
