//! Fixed top bar with the festival logo and section links.

use super::caption;
use crate::models::festival::{FestivalContent, Section};
use crate::ui_egui::app::PageAction;
use crate::ui_egui::theme::FestivalTheme;
use egui::{RichText, Ui};

const NAVBAR_HEIGHT: f32 = 64.0;

/// Split "SPARK 2K25" into the part drawn white and the trailing tag drawn in orange.
pub fn logo_parts(name: &str) -> (&str, &str) {
    match name.trim().rsplit_once(' ') {
        Some((head, tag)) => (head, tag),
        None => (name.trim(), ""),
    }
}

pub fn render(
    ctx: &egui::Context,
    theme: &FestivalTheme,
    content: &FestivalContent,
    narrow: bool,
    menu_open: bool,
    actions: &mut Vec<PageAction>,
) {
    let frame = egui::Frame::none()
        .fill(egui::Color32::from_black_alpha(230))
        .stroke(egui::Stroke::new(1.0, theme.border))
        .inner_margin(egui::Margin::symmetric(24.0, 8.0));

    egui::TopBottomPanel::top("navbar")
        .frame(frame)
        .min_height(NAVBAR_HEIGHT)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                render_logo(ui, theme, content);

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if narrow {
                        let icon = if menu_open { "✕" } else { "☰" };
                        if ui
                            .button(RichText::new(icon).size(20.0).color(theme.primary))
                            .on_hover_text("Toggle Menu")
                            .clicked()
                        {
                            actions.push(PageAction::ToggleMenu);
                        }
                    } else {
                        // Right-to-left layout, so add links in reverse
                        for section in Section::ALL.iter().rev() {
                            nav_link(ui, theme, *section, actions);
                        }
                    }
                });
            });

            if narrow && menu_open {
                ui.separator();
                ui.vertical(|ui| {
                    for section in Section::ALL {
                        nav_link(ui, theme, section, actions);
                    }
                });
            }
        });
}

fn render_logo(ui: &mut Ui, theme: &FestivalTheme, content: &FestivalContent) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(36.0, 36.0), egui::Sense::hover());
    ui.painter().rect_filled(rect, 6.0, theme.primary);
    let right_half = egui::Rect::from_min_max(rect.center_top(), rect.max);
    let right_rounding = egui::Rounding {
        nw: 0.0,
        sw: 0.0,
        ne: 6.0,
        se: 6.0,
    };
    ui.painter()
        .rect_filled(right_half, right_rounding, theme.highlight);

    let (head, tag) = logo_parts(&content.name);
    ui.vertical(|ui| {
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 6.0;
            ui.label(RichText::new(head).size(20.0).strong().color(theme.text_primary));
            if !tag.is_empty() {
                ui.label(RichText::new(tag).size(20.0).strong().color(theme.highlight));
            }
        });
        ui.label(caption(theme, &content.venue).size(10.0));
    });
}

fn nav_link(ui: &mut Ui, theme: &FestivalTheme, section: Section, actions: &mut Vec<PageAction>) {
    let label = RichText::new(section.nav_label().to_uppercase())
        .size(13.0)
        .strong()
        .color(theme.text_secondary);
    if ui.add(egui::Button::new(label).frame(false)).clicked() {
        actions.push(PageAction::scroll_to(section));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logo_splits_trailing_tag() {
        assert_eq!(logo_parts("SPARK 2K25"), ("SPARK", "2K25"));
        assert_eq!(logo_parts("Tech Fest 2026"), ("Tech Fest", "2026"));
        assert_eq!(logo_parts(" SPARK "), ("SPARK", ""));
    }
}
