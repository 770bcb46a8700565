//! "About the Event" copy with a grid of photos from previous editions.

use super::{section_frame, section_title};
use crate::models::festival::FestivalContent;
use crate::ui_egui::theme::FestivalTheme;
use egui::{RichText, Ui};

const PREVIEW_HEIGHT: f32 = 170.0;

pub fn render(ui: &mut Ui, theme: &FestivalTheme, content: &FestivalContent, narrow: bool) {
    section_frame(ui, |ui| {
        if narrow {
            render_copy(ui, theme, content);
            ui.add_space(24.0);
            render_previews(ui, theme, content);
        } else {
            ui.columns(2, |columns| {
                render_copy(&mut columns[0], theme, content);
                render_previews(&mut columns[1], theme, content);
            });
        }
    });
}

fn render_copy(ui: &mut Ui, theme: &FestivalTheme, content: &FestivalContent) {
    section_title(ui, theme, "About the Event");
    for paragraph in &content.about {
        ui.label(RichText::new(paragraph).size(16.0).color(theme.text_secondary));
        ui.add_space(12.0);
    }
}

fn render_previews(ui: &mut Ui, theme: &FestivalTheme, content: &FestivalContent) {
    egui::Grid::new("about_previews")
        .num_columns(2)
        .spacing(egui::vec2(12.0, 12.0))
        .show(ui, |ui| {
            let cell_width = (ui.available_width() - 12.0) / 2.0;
            for (i, image) in content.about_images.iter().enumerate() {
                ui.add(
                    egui::Image::new(image.uri.as_str())
                        .fit_to_exact_size(egui::vec2(cell_width, PREVIEW_HEIGHT))
                        .rounding(8.0),
                )
                .on_hover_text(RichText::new(&image.caption).color(theme.primary));
                if i % 2 == 1 {
                    ui.end_row();
                }
            }
        });
}
