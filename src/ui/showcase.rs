//! Content panel for the section on display.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use super::{accent, chrome_rect, colors, icons};
use crate::input::ChromeRegions;
use crate::navigation::{Mode, NavigationRequest, NavigationState};

/// Renders the right-hand content panel while in panel mode.
pub fn showcase_system(
    mut contexts: EguiContexts,
    nav: Res<NavigationState>,
    mut chrome: ResMut<ChromeRegions>,
    mut requests: MessageWriter<NavigationRequest>,
) {
    if nav.mode() != Mode::Panel {
        return;
    }
    let Some(section) = nav.current_section() else {
        return;
    };
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let content = section.content();
    let width = (ctx.viewport_rect().width() * 0.38).clamp(280.0, 480.0);

    let response = egui::SidePanel::right("showcase")
        .resizable(false)
        .exact_width(width)
        .frame(
            egui::Frame::NONE
                .fill(colors::PANEL_BG)
                .inner_margin(egui::Margin::same(20))
                .stroke(egui::Stroke::new(1.0, accent(section).gamma_multiply(0.5))),
        )
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(content.title)
                        .size(24.0)
                        .strong()
                        .color(accent(section)),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let close = ui.add(
                        egui::Button::new(icons::icon_colored(icons::CLOSE, 18.0, colors::TEXT))
                            .frame(false),
                    );
                    if close.clicked() {
                        requests.write(NavigationRequest::Back);
                    }
                });
            });

            ui.add_space(12.0);
            ui.label(
                egui::RichText::new(content.description)
                    .size(15.0)
                    .color(colors::TEXT),
            );
            ui.add_space(16.0);

            for line in content.details {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new("•").color(accent(section)));
                    ui.label(egui::RichText::new(*line).size(14.0).color(colors::MUTED));
                });
                ui.add_space(4.0);
            }
        });

    chrome.push(chrome_rect(response.response.rect));
}
