//! Closing strip with the copyright line and a link back to the top.

use super::caption;
use crate::models::festival::{FestivalContent, Section};
use crate::ui_egui::app::PageAction;
use crate::ui_egui::theme::FestivalTheme;
use chrono::{Datelike, Local};
use egui::{RichText, Ui};

pub fn render(
    ui: &mut Ui,
    theme: &FestivalTheme,
    content: &FestivalContent,
    actions: &mut Vec<PageAction>,
) {
    ui.separator();
    egui::Frame::none()
        .inner_margin(egui::Margin::symmetric(24.0, 24.0))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!(
                    "© {} {} · {}",
                    Local::now().year(),
                    content.name,
                    content.contact.venue
                ));

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let back = RichText::new("Back to top").color(theme.primary);
                    if ui.add(egui::Button::new(back).frame(false)).clicked() {
                        actions.push(PageAction::scroll_to(Section::Home));
                    }
                    ui.add_space(32.0);
                    ui.label(caption(theme, &content.motto));
                });
            });
        });
}
