//! One card per event track.

use super::{card, section_frame, section_title};
use crate::models::festival::{EventTrack, FestivalContent};
use crate::ui_egui::theme::FestivalTheme;
use egui::{RichText, Ui};

pub fn render(ui: &mut Ui, theme: &FestivalTheme, content: &FestivalContent, narrow: bool) {
    section_frame(ui, |ui| {
        section_title(ui, theme, "Events");

        let per_row = if narrow { 2 } else { 4 };
        for row in content.tracks.chunks(per_row) {
            ui.columns(per_row, |columns| {
                for (column, track) in columns.iter_mut().zip(row) {
                    render_track(column, theme, track);
                }
            });
            ui.add_space(16.0);
        }
    });
}

fn render_track(ui: &mut Ui, theme: &FestivalTheme, track: &EventTrack) {
    let from = theme.accent_or_primary(&track.accent.0);
    let to = theme.accent_or_primary(&track.accent.1);

    card(theme).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(
            RichText::new(track.category.label().to_uppercase())
                .size(20.0)
                .strong()
                .color(theme.text_primary),
        );
        ui.add_space(8.0);
        ui.label(RichText::new(&track.description).size(14.0));
        ui.add_space(20.0);

        // Two-tone accent bar standing in for the gradient underline
        let (rect, _) = ui.allocate_exact_size(egui::vec2(80.0, 4.0), egui::Sense::hover());
        let (left, right) = (
            egui::Rect::from_min_max(rect.min, rect.center_bottom()),
            egui::Rect::from_min_max(rect.center_top(), rect.max),
        );
        ui.painter().rect_filled(left, 2.0, from);
        ui.painter().rect_filled(right, 2.0, to);
    });
}
