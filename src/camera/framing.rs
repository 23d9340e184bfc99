//! Camera framing math.
//!
//! Pure functions for placing the camera so a section body fills a chosen
//! share of the view and sits off-center on screen. Angles are radians
//! internally; [`FramingSettings`] takes degrees.

use bevy::prelude::*;

/// Perspective lens parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lens {
    /// Vertical field of view (radians).
    pub fov_y: f32,
    /// Width over height.
    pub aspect: f32,
}

impl Lens {
    pub fn new(fov_y: f32, aspect: f32) -> Self {
        Self { fov_y, aspect }
    }

    pub fn from_degrees(fov_y_degrees: f32, aspect: f32) -> Self {
        Self::new(fov_y_degrees.to_radians(), aspect)
    }

    /// Horizontal field of view (radians).
    pub fn fov_x(&self) -> f32 {
        2.0 * (self.tan_half_y() * self.aspect).atan()
    }

    pub fn tan_half_y(&self) -> f32 {
        (self.fov_y * 0.5).tan()
    }

    pub fn tan_half_x(&self) -> f32 {
        self.tan_half_y() * self.aspect
    }
}

/// Settings controlling how a section is framed in panel mode.
#[derive(Resource, Clone, Debug)]
pub struct FramingSettings {
    /// Share of the shorter frustum axis the body's diameter should span.
    pub fill: f32,
    /// Camera azimuth around the body (degrees, from +Z toward +X).
    pub azimuth_degrees: f32,
    /// Camera elevation above the orbital plane (degrees).
    pub elevation_degrees: f32,
    /// Extra distance as a multiple of body radius.
    pub radius_margin: f32,
    /// Where the body should appear on screen, in normalized device
    /// coordinates (+x right, +y up).
    pub subject_bias: Vec2,
    /// Offset from the stored target when the body's size is unknown.
    pub fallback_offset: Vec3,
}

impl Default for FramingSettings {
    fn default() -> Self {
        Self {
            fill: 0.58,
            azimuth_degrees: 35.0,
            elevation_degrees: 18.0,
            radius_margin: 0.15,
            // Left of center, clear of the content panel on the right
            subject_bias: Vec2::new(-0.32, 0.18),
            fallback_offset: Vec3::new(1.2, 1.0, 2.5),
        }
    }
}

impl FramingSettings {
    /// Unit vector from the body toward the camera.
    pub fn view_direction(&self) -> Vec3 {
        view_direction(
            self.azimuth_degrees.to_radians(),
            self.elevation_degrees.to_radians(),
        )
    }
}

/// Frame-rate independent easing factor.
///
/// `base` is the fraction of the remaining distance left after one second.
pub fn ease_factor(base: f32, dt: f32) -> f32 {
    1.0 - base.powf(dt)
}

/// Unit direction for an azimuth/elevation pair (radians).
///
/// Azimuth 0 points along +Z; positive azimuth turns toward +X.
pub fn view_direction(azimuth: f32, elevation: f32) -> Vec3 {
    let (sin_el, cos_el) = elevation.sin_cos();
    let (sin_az, cos_az) = azimuth.sin_cos();
    Vec3::new(cos_el * sin_az, sin_el, cos_el * cos_az)
}

/// Distance at which a sphere of `radius` spans `fill` of the view.
///
/// Computed per axis and the larger distance kept, so the body is never
/// cropped on the narrower axis.
pub fn distance_for_frame(radius: f32, lens: Lens, fill: f32) -> f32 {
    let fill = fill.clamp(f32::EPSILON, 1.0);
    let dist_y = radius / (fill * lens.tan_half_y());
    let dist_x = radius / (fill * lens.tan_half_x());
    dist_x.max(dist_y)
}

/// Camera position that frames `subject`.
///
/// With a known radius the camera sits along the configured view direction
/// at the frame-filling distance plus a margin; otherwise at the fixed
/// fallback offset.
pub fn framing_position(
    subject: Vec3,
    radius: Option<f32>,
    lens: Lens,
    settings: &FramingSettings,
) -> Vec3 {
    match radius {
        Some(r) => {
            let dist = distance_for_frame(r, lens, settings.fill) + r * settings.radius_margin;
            subject + settings.view_direction() * dist
        }
        None => subject + settings.fallback_offset,
    }
}

/// Aim that places a target at a chosen screen position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OffCenterAim {
    /// Point the camera looks straight at.
    pub look_at: Vec3,
    /// Camera orientation (Bevy convention: forward is local -Z).
    pub rotation: Quat,
}

/// Aim the camera so `target` appears at `bias` in normalized device
/// coordinates instead of dead center.
pub fn off_center_aim(eye: Vec3, up: Vec3, lens: Lens, target: Vec3, bias: Vec2) -> OffCenterAim {
    let to_target = target - eye;
    let dist = to_target.length();
    if !(dist > f32::EPSILON) {
        return OffCenterAim {
            look_at: target,
            rotation: Quat::IDENTITY,
        };
    }

    let toward = basis_rotation(to_target / dist, up);

    // Direction of the target in camera space when it sits at `bias`
    let in_view = Vec3::new(
        bias.x * lens.tan_half_x(),
        bias.y * lens.tan_half_y(),
        -1.0,
    )
    .normalize();
    let offset = Quat::from_rotation_arc(Vec3::NEG_Z, in_view);

    let rotation = toward * offset.inverse();
    OffCenterAim {
        look_at: eye + rotation * Vec3::NEG_Z * dist,
        rotation,
    }
}

/// Orientation looking along `forward` with `up` as the up hint.
pub fn basis_rotation(forward: Vec3, up: Vec3) -> Quat {
    let right = forward.cross(up);
    let right = if right.length_squared() > 1e-8 {
        right.normalize()
    } else {
        forward.any_orthonormal_vector()
    };
    let true_up = right.cross(forward);
    Quat::from_mat3(&Mat3::from_cols(right, true_up, -forward)).normalize()
}
