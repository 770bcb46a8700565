//! Auto-rotating gallery. Only the active image is drawn; the indicator row
//! below lets visitors jump to any slide.

use super::{section_frame, section_title};
use crate::models::carousel::CarouselState;
use crate::ui_egui::app::PageAction;
use crate::ui_egui::theme::FestivalTheme;
use egui::{RichText, Ui};

const SLIDE_HEIGHT: f32 = 420.0;
const INDICATOR_SIZE: egui::Vec2 = egui::vec2(32.0, 8.0);

pub fn render(
    ui: &mut Ui,
    theme: &FestivalTheme,
    carousel: &CarouselState,
    actions: &mut Vec<PageAction>,
) {
    section_frame(ui, |ui| {
        section_title(ui, theme, "Gallery");

        egui::Frame::none()
            .stroke(egui::Stroke::new(1.0, theme.border))
            .rounding(16.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                let active = carousel.current();
                ui.add(
                    egui::Image::new(active.uri.as_str())
                        .fit_to_exact_size(egui::vec2(ui.available_width(), SLIDE_HEIGHT))
                        .rounding(16.0),
                )
                .on_hover_text(RichText::new(&active.caption));

                ui.add_space(12.0);
                ui.vertical_centered(|ui| {
                    render_indicators(ui, theme, carousel, actions);
                });
                ui.add_space(12.0);
            });
    });
}

fn render_indicators(
    ui: &mut Ui,
    theme: &FestivalTheme,
    carousel: &CarouselState,
    actions: &mut Vec<PageAction>,
) {
    let spacing = 8.0;
    let total_width =
        carousel.len() as f32 * INDICATOR_SIZE.x + (carousel.len() as f32 - 1.0) * spacing;

    ui.allocate_ui(egui::vec2(total_width, INDICATOR_SIZE.y), |ui| {
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = spacing;
            for (index, image) in carousel.images().iter().enumerate() {
                let (rect, response) = ui.allocate_exact_size(INDICATOR_SIZE, egui::Sense::click());
                let fill = if carousel.is_active(index) {
                    theme.primary
                } else {
                    theme.indicator_idle
                };
                ui.painter().rect_filled(rect, INDICATOR_SIZE.y / 2.0, fill);

                if response
                    .on_hover_text(format!("Go to slide {}: {}", index + 1, image.caption))
                    .clicked()
                {
                    actions.push(PageAction::SelectSlide(index));
                }
            }
        });
    });
}
