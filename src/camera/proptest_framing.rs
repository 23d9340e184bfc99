//! Property-based tests for camera framing using proptest.
//!
//! These tests project the framed body back through the computed camera to
//! check the framing holds across sizes, lenses and view angles.

use bevy::prelude::*;
use proptest::prelude::*;

use super::framing::{FramingSettings, Lens, distance_for_frame, off_center_aim, view_direction};
use crate::test_utils::assertions::project_to_ndc;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The body's silhouette spans exactly `fill` of the shorter axis.
    ///
    /// Edge points are taken perpendicular to the view axis, one step along
    /// camera-up and one along camera-right.
    #[test]
    fn prop_fill_fraction_on_shorter_axis(
        radius in 0.05f32..5.0,
        fill in 0.1f32..1.0,
        fov_deg in 20.0f32..90.0,
        aspect in 0.4f32..2.5,
    ) {
        let lens = Lens::from_degrees(fov_deg, aspect);
        let dist = distance_for_frame(radius, lens, fill);

        let eye = Vec3::new(0.0, 0.0, dist);
        let rotation = Quat::IDENTITY;
        let top = project_to_ndc(eye, rotation, lens, Vec3::Y * radius).unwrap();
        let side = project_to_ndc(eye, rotation, lens, Vec3::X * radius).unwrap();

        let shorter = top.y.max(side.x);
        prop_assert!((shorter - fill).abs() < 1e-3, "shorter-axis fill {} != {}", shorter, fill);
        prop_assert!(top.y <= fill + 1e-3);
        prop_assert!(side.x <= fill + 1e-3);
    }

    /// The target projects to the requested screen offset.
    #[test]
    fn prop_off_center_aim_hits_bias(
        bias_x in -0.9f32..0.9,
        bias_y in -0.9f32..0.9,
        azimuth in -3.1f32..3.1,
        elevation in -1.2f32..1.2,
        dist in 0.5f32..30.0,
        aspect in 0.5f32..2.5,
    ) {
        let lens = Lens::from_degrees(50.0, aspect);
        let target = Vec3::new(3.0, 0.0, -1.0);
        let eye = target + view_direction(azimuth, elevation) * dist;
        let bias = Vec2::new(bias_x, bias_y);

        let aim = off_center_aim(eye, Vec3::Y, lens, target, bias);
        let ndc = project_to_ndc(eye, aim.rotation, lens, target).unwrap();

        prop_assert!((ndc - bias).length() < 1e-3, "projected {:?}, wanted {:?}", ndc, bias);
    }

    /// Default framing keeps the body fully on screen at its bias.
    ///
    /// Checks the four silhouette edges one radius out along camera-right
    /// and camera-up.
    #[test]
    fn prop_default_framing_keeps_body_visible(
        radius in 0.1f32..2.0,
        aspect in 0.5f32..2.5,
    ) {
        let settings = FramingSettings::default();
        let lens = Lens::from_degrees(50.0, aspect);
        let subject = Vec3::new(4.9, 0.0, 0.0);
        let eye = super::framing::framing_position(subject, Some(radius), lens, &settings);
        let aim = off_center_aim(eye, Vec3::Y, lens, subject, settings.subject_bias);

        let right = aim.rotation * Vec3::X;
        let up = aim.rotation * Vec3::Y;
        for offset in [right, -right, up, -up] {
            let edge = project_to_ndc(eye, aim.rotation, lens, subject + offset * radius).unwrap();
            prop_assert!(
                edge.x.abs() <= 1.0 && edge.y.abs() <= 1.0,
                "edge {:?} off screen (aspect {})", edge, aspect
            );
        }
    }
}
