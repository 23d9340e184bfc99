//! Top navigation bar: home button and one button per section.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use super::{accent, chrome_rect, colors, icons};
use crate::input::ChromeRegions;
use crate::navigation::{Mode, NavigationRequest, NavigationState};
use crate::sections::{ORDERED_SECTIONS, SectionId};

/// Request issued by clicking a section's button.
///
/// Clicking the section already on display goes back to the hub. Any other
/// click picks the section, retargeting a warp in flight.
pub fn section_button_request(nav: &NavigationState, section: SectionId) -> NavigationRequest {
    if nav.mode() == Mode::Panel && nav.current_section() == Some(section) {
        NavigationRequest::Back
    } else {
        NavigationRequest::PickSection(section)
    }
}

/// Renders the top bar.
pub fn top_bar_system(
    mut contexts: EguiContexts,
    nav: Res<NavigationState>,
    mut chrome: ResMut<ChromeRegions>,
    mut requests: MessageWriter<NavigationRequest>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let response = egui::TopBottomPanel::top("top_bar")
        .frame(
            egui::Frame::NONE
                .fill(colors::BAR_BG)
                .inner_margin(egui::Margin::symmetric(16, 8)),
        )
        .show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                ui.spacing_mut().item_spacing.x = 12.0;

                let home = ui
                    .add_enabled(
                        nav.mode() == Mode::Panel || nav.mode() == Mode::WarpingTo,
                        egui::Button::new(icons::icon_colored(icons::HOME, 18.0, colors::TEXT))
                            .frame(false),
                    )
                    .on_hover_text("Нүүр");
                if home.clicked() {
                    requests.write(NavigationRequest::Back);
                }

                ui.separator();

                for section in ORDERED_SECTIONS {
                    let active = nav.current_section() == Some(section);
                    let text = egui::RichText::new(section.appearance().label).size(14.0).color(
                        if active {
                            accent(section)
                        } else {
                            colors::TEXT
                        },
                    );
                    let button = ui.add(
                        egui::Button::new(if active { text.strong() } else { text })
                            .frame(false),
                    );
                    if button.clicked() {
                        requests.write(section_button_request(&nav, section));
                    }
                }
            });
        });

    chrome.push(chrome_rect(response.response.rect));
}
