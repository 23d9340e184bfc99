//! Loading screen and the unsupported-rendering fallback view.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use super::{colors, icons};
use crate::experience::LoadingTimer;
use crate::navigation::SectionAnchors;
use crate::sections::SECTION_COUNT;

pub fn loading_screen(
    mut contexts: EguiContexts,
    timer: Res<LoadingTimer>,
    anchors: Res<SectionAnchors>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };
    // Bodies count for most of the bar; the minimum delay covers the rest
    let progress = 0.8 * anchors.len() as f32 / SECTION_COUNT as f32 + 0.2 * timer.0.fraction();

    egui::CentralPanel::default()
        .frame(egui::Frame::NONE.fill(egui::Color32::from_rgb(3, 4, 12)))
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(ui.available_height() * 0.4);
                ui.label(icons::icon_colored(icons::LOADING, 40.0, colors::TEXT));
                ui.add_space(12.0);
                ui.add(egui::ProgressBar::new(progress).desired_width(220.0));
            });
        });
}

pub fn unsupported_view(mut contexts: EguiContexts) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::CentralPanel::default()
        .frame(egui::Frame::NONE.fill(egui::Color32::from_rgb(3, 4, 12)))
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(ui.available_height() * 0.35);
                ui.label(icons::icon_colored(icons::WARNING, 40.0, colors::WARNING));
                ui.add_space(12.0);
                ui.label(
                    egui::RichText::new("3D дэмжигдэхгүй байна")
                        .size(22.0)
                        .strong()
                        .color(colors::TEXT),
                );
                ui.add_space(8.0);
                ui.label(
                    egui::RichText::new(
                        "Таны төхөөрөмж 3D дүрслэлийг дэмжихгүй байна. \
                         Өөр хөтөч эсвэл төхөөрөмж ашиглана уу.",
                    )
                    .size(14.0)
                    .color(colors::MUTED),
                );
            });
        });
}
