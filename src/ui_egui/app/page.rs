use super::navigation::ScrollNavigator;
use super::FestivalApp;
use super::PageAction;
use crate::models::festival::Section;
use crate::ui_egui::sections::{about, contact, events, footer, gallery, hero, schedule};
use egui::{Align, Ui};

/// Lay out one section and, if a scroll to it is pending, bring its top edge into view.
fn anchor_section(
    ui: &mut Ui,
    navigator: &mut ScrollNavigator,
    section: Section,
    add_contents: impl FnOnce(&mut Ui),
) {
    let rect = ui
        .scope(|ui| {
            ui.set_width(ui.available_width());
            add_contents(ui);
        })
        .response
        .rect;

    if navigator.take_if(section) {
        ui.scroll_to_rect(rect, Some(Align::TOP));
    }
}

impl FestivalApp {
    pub(super) fn render_page(
        &mut self,
        ctx: &egui::Context,
        narrow: bool,
        actions: &mut Vec<PageAction>,
    ) {
        let frame = egui::Frame::none().fill(self.theme.background);

        egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    let theme = &self.theme;
                    let content = &self.content;
                    let navigator = &mut self.navigator;

                    anchor_section(ui, navigator, Section::Home, |ui| {
                        hero::render(ui, theme, content, actions)
                    });
                    anchor_section(ui, navigator, Section::About, |ui| {
                        about::render(ui, theme, content, narrow)
                    });
                    anchor_section(ui, navigator, Section::Events, |ui| {
                        events::render(ui, theme, content, narrow)
                    });
                    anchor_section(ui, navigator, Section::Gallery, |ui| {
                        gallery::render(ui, theme, self.carousel.state(), actions)
                    });
                    anchor_section(ui, navigator, Section::Schedule, |ui| {
                        schedule::render(ui, theme, content, self.countdown.state(), narrow)
                    });
                    anchor_section(ui, navigator, Section::Contact, |ui| {
                        contact::render(
                            ui,
                            theme,
                            content,
                            &mut self.state.registration,
                            narrow,
                            actions,
                        )
                    });

                    footer::render(ui, theme, content, actions);
                });
        });
    }
}
