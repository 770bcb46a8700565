//! Registration form plus venue contact details.

use super::{caption, section_frame, section_title};
use crate::models::festival::FestivalContent;
use crate::models::registration::{Category, RegistrationForm};
use crate::ui_egui::app::PageAction;
use crate::ui_egui::theme::FestivalTheme;
use egui::{RichText, Ui};

pub fn render(
    ui: &mut Ui,
    theme: &FestivalTheme,
    content: &FestivalContent,
    form: &mut RegistrationForm,
    narrow: bool,
    actions: &mut Vec<PageAction>,
) {
    section_frame(ui, |ui| {
        if narrow {
            render_form(ui, theme, form, actions);
            ui.add_space(24.0);
            render_details(ui, theme, content);
        } else {
            ui.columns(2, |columns| {
                render_form(&mut columns[0], theme, form, actions);
                render_details(&mut columns[1], theme, content);
            });
        }
    });
}

fn field_label(ui: &mut Ui, theme: &FestivalTheme, text: &str) {
    ui.add_space(10.0);
    ui.label(caption(theme, text));
    ui.add_space(4.0);
}

fn render_form(
    ui: &mut Ui,
    theme: &FestivalTheme,
    form: &mut RegistrationForm,
    actions: &mut Vec<PageAction>,
) {
    section_title(ui, theme, "Register");

    field_label(ui, theme, "Full Name");
    ui.add(
        egui::TextEdit::singleline(&mut form.name)
            .hint_text("Your name")
            .desired_width(f32::INFINITY),
    );

    field_label(ui, theme, "Email");
    ui.add(
        egui::TextEdit::singleline(&mut form.email)
            .hint_text("you@example.com")
            .desired_width(f32::INFINITY),
    );

    field_label(ui, theme, "Phone");
    ui.add(
        egui::TextEdit::singleline(&mut form.phone)
            .hint_text("98765 43210")
            .desired_width(f32::INFINITY),
    );

    field_label(ui, theme, "Category");
    egui::ComboBox::from_id_source("registration_category")
        .selected_text(form.category.label())
        .width(ui.available_width())
        .show_ui(ui, |ui| {
            for category in Category::ALL {
                ui.selectable_value(&mut form.category, category, category.label());
            }
        });

    field_label(ui, theme, "Team / Notes");
    ui.add(
        egui::TextEdit::multiline(&mut form.notes)
            .hint_text("Team name, preferred games, etc.")
            .desired_rows(4)
            .desired_width(f32::INFINITY),
    );

    ui.add_space(16.0);
    let submit = egui::Button::new(
        RichText::new("SUBMIT")
            .strong()
            .color(egui::Color32::BLACK),
    )
    .fill(theme.primary)
    .rounding(6.0)
    .min_size(egui::vec2(140.0, 44.0));

    if ui.add(submit).clicked() {
        actions.push(PageAction::SubmitRegistration);
    }
}

fn render_details(ui: &mut Ui, theme: &FestivalTheme, content: &FestivalContent) {
    ui.add_space(72.0);
    let contact = &content.contact;
    for (icon, text) in [
        ("📍", contact.venue.as_str()),
        ("✉", contact.email.as_str()),
        ("📞", contact.phone.as_str()),
    ] {
        ui.horizontal(|ui| {
            ui.label(RichText::new(icon).color(theme.primary));
            ui.label(text);
        });
        ui.add_space(8.0);
    }
}
