//! Overlay chrome built with egui.
//!
//! Overlays read [`NavigationState`](crate::navigation::NavigationState) and
//! emit [`NavigationRequest`](crate::navigation::NavigationRequest)s. Every
//! overlay records its screen rectangle in [`ChromeRegions`] so scene input
//! under it is left alone.

mod fallback;
pub mod icons;
pub mod progress;
mod showcase;
pub mod top_bar;

use bevy::prelude::*;
use bevy_egui::{EguiPrimaryContextPass, egui};

use crate::experience::ExperienceState;
use crate::input::ChromeRegions;

/// Colors shared by the overlays.
pub(crate) mod colors {
    use bevy_egui::egui::Color32;

    pub const BAR_BG: Color32 = Color32::from_rgba_premultiplied(8, 10, 22, 220);
    pub const PANEL_BG: Color32 = Color32::from_rgba_premultiplied(12, 14, 30, 235);
    pub const TEXT: Color32 = Color32::from_rgb(226, 232, 240);
    pub const MUTED: Color32 = Color32::from_rgb(148, 163, 184);
    pub const WARNING: Color32 = Color32::from_rgb(251, 191, 36);
}

/// Convert an egui rectangle (logical points) to a Bevy rectangle.
pub(crate) fn chrome_rect(rect: egui::Rect) -> Rect {
    Rect::new(rect.min.x, rect.min.y, rect.max.x, rect.max.y)
}

/// Section accent color for egui.
pub(crate) fn accent(id: crate::sections::SectionId) -> egui::Color32 {
    let [r, g, b] = id.appearance().color;
    egui::Color32::from_rgb(r, g, b)
}

/// Plugin that adds all overlay systems.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<icons::FontsInitialized>()
            // Font initialization must run before any overlay that uses icons
            .add_systems(EguiPrimaryContextPass, icons::setup_fonts)
            .add_systems(
                EguiPrimaryContextPass,
                (
                    reset_chrome,
                    (
                        top_bar::top_bar_system,
                        showcase::showcase_system,
                        progress::progress_system,
                    ),
                )
                    .chain()
                    .after(icons::setup_fonts)
                    .run_if(in_state(ExperienceState::Interactive))
                    .run_if(|init: Res<icons::FontsInitialized>| init.0),
            )
            .add_systems(
                EguiPrimaryContextPass,
                (
                    fallback::loading_screen.run_if(in_state(ExperienceState::Loading)),
                    fallback::unsupported_view.run_if(in_state(ExperienceState::Unsupported)),
                )
                    .after(icons::setup_fonts),
            );
    }
}

fn reset_chrome(mut chrome: ResMut<ChromeRegions>) {
    chrome.clear();
}
