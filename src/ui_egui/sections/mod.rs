//! Page sections. Each one is a pure function of the state it is handed;
//! user input comes back out as [`PageAction`](super::app::PageAction)s.

pub mod about;
pub mod contact;
pub mod events;
pub mod footer;
pub mod gallery;
pub mod hero;
pub mod navbar;
pub mod schedule;

use crate::ui_egui::theme::FestivalTheme;
use egui::{RichText, Ui};

const SECTION_PADDING: f32 = 48.0;
const CONTENT_MAX_WIDTH: f32 = 1200.0;

/// Shared vertical rhythm and horizontal centering for a section body.
pub(crate) fn section_frame(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui)) {
    let side = ((ui.available_width() - CONTENT_MAX_WIDTH) / 2.0).max(24.0);
    egui::Frame::none()
        .inner_margin(egui::Margin::symmetric(side, SECTION_PADDING))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add_contents(ui);
        });
}

pub(crate) fn section_title(ui: &mut Ui, theme: &FestivalTheme, title: &str) {
    ui.label(
        RichText::new(title.to_uppercase())
            .size(30.0)
            .strong()
            .color(theme.text_primary),
    );
    let (rect, _) = ui.allocate_exact_size(egui::vec2(80.0, 3.0), egui::Sense::hover());
    ui.painter().rect_filled(rect, 2.0, theme.primary);
    ui.add_space(24.0);
}

/// Bordered translucent card used by events, schedule and countdown boxes.
pub(crate) fn card(theme: &FestivalTheme) -> egui::Frame {
    egui::Frame::none()
        .fill(theme.surface)
        .stroke(egui::Stroke::new(1.0, theme.border))
        .rounding(12.0)
        .inner_margin(egui::Margin::same(20.0))
}

/// Small uppercase caption in the primary accent.
pub(crate) fn caption(theme: &FestivalTheme, text: &str) -> RichText {
    RichText::new(text.to_uppercase())
        .size(11.0)
        .color(theme.primary)
}
