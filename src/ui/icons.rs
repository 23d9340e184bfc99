//! Phosphor icon definitions for the overlay.
//!
//! Icons are installed into the egui font set by [`setup_fonts`] on the first
//! overlay pass.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

/// Whether the icon font has been installed.
#[derive(Resource, Default)]
pub struct FontsInitialized(pub bool);

/// Install the Phosphor icon font.
/// Runs in EguiPrimaryContextPass where the egui context is guaranteed to be ready.
pub fn setup_fonts(mut contexts: EguiContexts, mut initialized: ResMut<FontsInitialized>) {
    if initialized.0 {
        return;
    }

    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);

    ctx.set_fonts(fonts);
    initialized.0 = true;

    info!("Phosphor icon fonts initialized");
}

/// Icon glyph sized and tinted for a label or button.
pub fn icon_colored(icon: &str, size: f32, color: egui::Color32) -> egui::RichText {
    egui::RichText::new(icon).size(size).color(color)
}

/// Home (back to hub)
pub const HOME: &str = egui_phosphor::regular::HOUSE;
/// Close/X icon
pub const CLOSE: &str = egui_phosphor::regular::X;
/// Scroll hint
pub const SCROLL_HINT: &str = egui_phosphor::regular::CARET_DOUBLE_DOWN;
/// Warning/alert icon
pub const WARNING: &str = egui_phosphor::regular::WARNING;
/// Loading spinner glyph
pub const LOADING: &str = egui_phosphor::regular::PLANET;
