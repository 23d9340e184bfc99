//! Planet labels using egui for text rendering.
//!
//! Draws each section's label above its planet at the hub, faded in with the
//! planet's appear animation.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, EguiPrimaryContextPass, egui};

use super::bodies::Appear;
use crate::camera::MainCamera;
use crate::experience::ExperienceState;
use crate::navigation::{Mode, NavigationState, SectionBody, anchors::live_target};

pub(super) struct LabelPlugin;

impl Plugin for LabelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LabelSettings>().add_systems(
            EguiPrimaryContextPass,
            draw_section_labels.run_if(in_state(ExperienceState::Interactive)),
        );
    }
}

/// Settings for label rendering.
#[derive(Resource)]
pub struct LabelSettings {
    pub visible: bool,
    /// World-space gap between the planet's top and the label.
    pub lift: f32,
    pub font_size: f32,
}

impl Default for LabelSettings {
    fn default() -> Self {
        Self {
            visible: true,
            lift: 0.25,
            font_size: 14.0,
        }
    }
}

/// Label opacity for a planet at appear scale `scale`.
pub fn label_alpha(scale: f32) -> f32 {
    ((scale - Appear::START_SCALE) / (1.0 - Appear::START_SCALE)).clamp(0.0, 1.0)
}

fn draw_section_labels(
    mut contexts: EguiContexts,
    nav: Res<NavigationState>,
    settings: Res<LabelSettings>,
    bodies: Query<(&GlobalTransform, &SectionBody, Option<&Appear>)>,
    camera: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
) {
    if !settings.visible || nav.mode() != Mode::Hub {
        return;
    }
    let Ok((camera, camera_transform)) = camera.single() else {
        return;
    };
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::Area::new(egui::Id::new("section_labels"))
        .fixed_pos(egui::pos2(0.0, 0.0))
        .order(egui::Order::Background)
        .interactable(false)
        .show(ctx, |ui| {
            let painter = ui.painter();
            for (transform, body, appear) in &bodies {
                let Some(live) = live_target(transform, body) else {
                    continue;
                };
                let anchor = live.position + Vec3::Y * (live.radius + settings.lift);
                let Ok(screen) = camera.world_to_viewport(camera_transform, anchor) else {
                    continue;
                };

                let alpha = appear.map_or(1.0, |a| label_alpha(a.scale));
                if alpha <= 0.0 {
                    continue;
                }
                let appearance = body.id.appearance();
                let [r, g, b] = appearance.color;
                let pos = egui::pos2(screen.x, screen.y);
                let font = egui::FontId::proportional(settings.font_size);

                painter.text(
                    pos + egui::vec2(1.0, 1.0),
                    egui::Align2::CENTER_BOTTOM,
                    appearance.label,
                    font.clone(),
                    egui::Color32::from_rgba_unmultiplied(0, 0, 0, (180.0 * alpha) as u8),
                );
                painter.text(
                    pos,
                    egui::Align2::CENTER_BOTTOM,
                    appearance.label,
                    font,
                    egui::Color32::from_rgba_unmultiplied(r, g, b, (240.0 * alpha) as u8),
                );
            }
        });
}
