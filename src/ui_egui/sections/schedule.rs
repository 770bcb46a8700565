//! Three-day schedule next to the live countdown.

use super::{caption, card, section_frame, section_title};
use crate::models::countdown::CountdownState;
use crate::models::festival::FestivalContent;
use crate::ui_egui::theme::FestivalTheme;
use egui::{RichText, Ui};

pub fn render(
    ui: &mut Ui,
    theme: &FestivalTheme,
    content: &FestivalContent,
    countdown: CountdownState,
    narrow: bool,
) {
    section_frame(ui, |ui| {
        section_title(ui, theme, "Schedule");

        if narrow {
            render_days(ui, theme, content);
            ui.add_space(24.0);
            render_countdown(ui, theme, content, countdown);
        } else {
            ui.columns(2, |columns| {
                render_days(&mut columns[0], theme, content);
                render_countdown(&mut columns[1], theme, content, countdown);
            });
        }
    });
}

fn render_days(ui: &mut Ui, theme: &FestivalTheme, content: &FestivalContent) {
    for day in &content.schedule {
        card(theme).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(caption(theme, &format!("📅 {} · {}", day.day, day.date)));
            ui.add_space(6.0);
            ui.label(RichText::new(&day.info).strong().color(theme.text_primary));
        });
        ui.add_space(16.0);
    }
}

fn render_countdown(
    ui: &mut Ui,
    theme: &FestivalTheme,
    content: &FestivalContent,
    countdown: CountdownState,
) {
    card(theme).rounding(16.0).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.vertical_centered(|ui| {
            ui.label(caption(theme, "Countdown"));
            ui.add_space(16.0);
        });

        ui.columns(4, |columns| {
            for (column, (value, label)) in columns.iter_mut().zip(countdown.display_units()) {
                egui::Frame::none()
                    .fill(egui::Color32::from_black_alpha(153))
                    .stroke(egui::Stroke::new(1.0, theme.border))
                    .rounding(8.0)
                    .inner_margin(egui::Margin::same(12.0))
                    .show(column, |ui| {
                        ui.set_width(ui.available_width());
                        ui.vertical_centered(|ui| {
                            ui.label(
                                RichText::new(value)
                                    .size(36.0)
                                    .strong()
                                    .color(theme.text_primary),
                            );
                            ui.label(caption(theme, label));
                        });
                    });
            }
        });

        ui.add_space(20.0);
        ui.vertical_centered(|ui| {
            let note = if countdown.done {
                "The arena is open!"
            } else {
                content.arena_note.as_str()
            };
            ui.label(note);
        });
    });
}
