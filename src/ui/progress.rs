//! Progress indicator: one dot per section plus a scroll hint.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use super::{accent, chrome_rect, colors, icons};
use crate::input::ChromeRegions;
use crate::navigation::{Mode, NavigationRequest, NavigationState};
use crate::sections::{ORDERED_SECTIONS, SECTION_COUNT};

const DOT_RADIUS: f32 = 5.0;
const ACTIVE_DOT_RADIUS: f32 = 8.0;
const DOT_SPACING: f32 = 28.0;

/// Request issued by clicking the dot at `index`, if any.
pub fn dot_request(nav: &NavigationState, index: usize) -> Option<NavigationRequest> {
    if nav.is_locked() || nav.section_index() == Some(index) {
        return None;
    }
    Some(NavigationRequest::GoToIndex(index))
}

/// Whether to show the "scroll for more" hint.
pub fn show_scroll_hint(nav: &NavigationState) -> bool {
    nav.mode() == Mode::Hub
}

/// Renders the dots down the left edge and the hub scroll hint.
pub fn progress_system(
    mut contexts: EguiContexts,
    nav: Res<NavigationState>,
    mut chrome: ResMut<ChromeRegions>,
    mut requests: MessageWriter<NavigationRequest>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };
    let screen = ctx.viewport_rect();
    let column_height = DOT_SPACING * SECTION_COUNT as f32;
    let origin = egui::pos2(screen.left() + 20.0, screen.center().y - column_height * 0.5);

    let area = egui::Area::new(egui::Id::new("progress_dots"))
        .fixed_pos(origin)
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            ui.spacing_mut().item_spacing.y = 0.0;
            for (index, section) in ORDERED_SECTIONS.iter().enumerate() {
                let active = nav.section_index() == Some(index);
                let (rect, response) = ui.allocate_exact_size(
                    egui::vec2(ACTIVE_DOT_RADIUS * 2.0 + 4.0, DOT_SPACING),
                    egui::Sense::click(),
                );
                let color = accent(*section);
                let radius = if active { ACTIVE_DOT_RADIUS } else { DOT_RADIUS };
                let fill = if active || response.hovered() {
                    color
                } else {
                    color.gamma_multiply(0.5)
                };
                ui.painter().circle_filled(rect.center(), radius, fill);

                if active {
                    ui.painter().text(
                        rect.right_center() + egui::vec2(8.0, 0.0),
                        egui::Align2::LEFT_CENTER,
                        section.appearance().label,
                        egui::FontId::proportional(13.0),
                        colors::TEXT,
                    );
                }

                let response = response.on_hover_text(section.appearance().label);
                if !response.clicked() {
                    continue;
                }
                if let Some(request) = dot_request(&nav, index) {
                    requests.write(request);
                }
            }
        });
    chrome.push(chrome_rect(area.response.rect));

    if show_scroll_hint(&nav) {
        egui::Area::new(egui::Id::new("scroll_hint"))
            .anchor(egui::Align2::CENTER_BOTTOM, egui::vec2(0.0, -24.0))
            .interactable(false)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(egui::RichText::new("Гүйлгэх").size(12.0).color(colors::MUTED));
                    ui.label(icons::icon_colored(icons::SCROLL_HINT, 20.0, colors::MUTED));
                });
            });
    }
}
