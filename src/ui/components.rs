//! Reusable UI components

use crate::theme::{self, Palette};
use crate::types::Post;
use eframe::egui;

/// Render one post as a card. The shadow deepens while hovered.
pub fn post_card(ui: &mut egui::Ui, post: &Post, p: &Palette) -> egui::Response {
    let hover_id = ui.id().with(("post_hover", post.id));
    let was_hovered = ui.ctx().data(|d| d.get_temp::<bool>(hover_id)).unwrap_or(false);

    let response = theme::card_frame(p, was_hovered)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.add(
                egui::Label::new(
                    egui::RichText::new(&post.title)
                        .size(theme::FONT_HEADING)
                        .strong()
                        .color(p.text_primary),
                )
                .wrap(),
            );
            ui.add_space(8.0);
            ui.add(
                egui::Label::new(
                    egui::RichText::new(&post.body)
                        .size(theme::FONT_BODY)
                        .color(p.text_primary),
                )
                .wrap(),
            );
        })
        .response;

    let hovered = response.hovered();
    if hovered != was_hovered {
        ui.ctx().data_mut(|d| d.insert_temp(hover_id, hovered));
        ui.ctx().request_repaint();
    }
    response
}

/// Centered icon + message used for the loading, error and empty states
pub fn status_message(ui: &mut egui::Ui, icon: Option<&str>, text: &str, color: egui::Color32) {
    ui.vertical_centered(|ui| {
        ui.add_space(32.0);
        match icon {
            Some(icon) => {
                ui.label(
                    egui::RichText::new(icon)
                        .size(theme::STATUS_ICON_SIZE)
                        .color(color),
                );
            }
            None => {
                ui.add(egui::Spinner::new().size(theme::STATUS_ICON_SIZE).color(color));
            }
        }
        ui.add_space(8.0);
        ui.add(
            egui::Label::new(egui::RichText::new(text).size(theme::FONT_STATUS).color(color))
                .wrap(),
        );
    });
}
