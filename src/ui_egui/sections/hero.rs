//! Full-width hero banner with the festival name and call to action.

use crate::models::festival::{FestivalContent, Section};
use crate::ui_egui::app::PageAction;
use crate::ui_egui::theme::FestivalTheme;
use egui::{RichText, Ui};

const HERO_MIN_HEIGHT: f32 = 520.0;

pub fn render(
    ui: &mut Ui,
    theme: &FestivalTheme,
    content: &FestivalContent,
    actions: &mut Vec<PageAction>,
) {
    let height = (ui.ctx().screen_rect().height() * 0.9).max(HERO_MIN_HEIGHT);

    egui::Frame::none()
        .fill(egui::Color32::from_rgb(6, 8, 10))
        .show(ui, |ui| {
            ui.set_min_height(height);
            ui.vertical_centered(|ui| {
                ui.add_space(height * 0.3);
                ui.label(
                    RichText::new(content.name.to_uppercase())
                        .size(64.0)
                        .strong()
                        .color(theme.text_primary),
                );
                ui.add_space(16.0);
                ui.set_max_width(640.0);
                ui.label(RichText::new(&content.tagline).size(17.0).color(theme.text_secondary));
                ui.add_space(40.0);

                let button = egui::Button::new(
                    RichText::new("JOIN THE BATTLE")
                        .size(18.0)
                        .strong()
                        .color(egui::Color32::BLACK),
                )
                .fill(theme.primary)
                .rounding(8.0)
                .min_size(egui::vec2(240.0, 56.0));

                if ui.add(button).clicked() {
                    actions.push(PageAction::scroll_to(Section::Contact));
                }
            });
        });
}
