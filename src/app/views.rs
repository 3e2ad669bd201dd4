//! View rendering (header, post list, status states)

use super::App;
use crate::settings::ThemeChoice;
use crate::theme;
use crate::types::{Body, LoadState};
use crate::ui::components::{post_card, status_message};
use crate::utils::count_label;
use eframe::egui;

/// Lay out `add_contents` in a column centered horizontally and capped at
/// `MAX_CONTENT_WIDTH`.
fn centered_column<R>(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> R {
    let avail = ui.available_rect_before_wrap();
    let width = avail.width().min(theme::MAX_CONTENT_WIDTH);
    let rect = egui::Rect::from_min_size(
        egui::pos2(avail.center().x - width / 2.0, avail.min.y),
        egui::vec2(width, avail.height()),
    );
    ui.scope_builder(egui::UiBuilder::new().max_rect(rect), |ui| {
        ui.set_width(width);
        add_contents(ui)
    })
    .inner
}

impl App {
    /// Collect keystrokes typed while nothing has keyboard focus and feed
    /// them into the search query.
    pub(crate) fn capture_typing(&mut self, ctx: &egui::Context) {
        if ctx.wants_keyboard_input() {
            return;
        }

        let mut typed_text = String::new();
        let mut backspace = false;
        ctx.input(|i| {
            for event in &i.events {
                if let egui::Event::Text(text) = event {
                    if !text.is_empty() && text.chars().all(|c| !c.is_control()) {
                        typed_text.push_str(text);
                    }
                }
                if let egui::Event::Key { key: egui::Key::Backspace, pressed: true, .. } = event {
                    backspace = true;
                }
            }
        });

        if !typed_text.is_empty() {
            self.view.search_query_mut().push_str(&typed_text);
            self.focus_search = true;
            self.view.apply_filters();
        }
        if backspace && !self.view.search_query().is_empty() {
            self.view.search_query_mut().pop();
            self.focus_search = true;
            self.view.apply_filters();
        }
    }

    pub(crate) fn render_header(&mut self, ui: &mut egui::Ui) {
        let p = theme::palette(ui.visuals().dark_mode);

        centered_column(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new("Posts")
                        .size(theme::FONT_TITLE)
                        .strong()
                        .color(p.text_primary),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let (icon, tip) = match self.theme {
                        ThemeChoice::System => (egui_phosphor::regular::MONITOR, "Theme: system"),
                        ThemeChoice::Light => (egui_phosphor::regular::SUN, "Theme: light"),
                        ThemeChoice::Dark => (egui_phosphor::regular::MOON, "Theme: dark"),
                    };
                    if ui
                        .add(egui::Button::new(egui::RichText::new(icon).size(16.0)).frame(false))
                        .on_hover_text(tip)
                        .clicked()
                    {
                        self.theme = match self.theme {
                            ThemeChoice::System => ThemeChoice::Light,
                            ThemeChoice::Light => ThemeChoice::Dark,
                            ThemeChoice::Dark => ThemeChoice::System,
                        };
                        ui.ctx().set_theme(self.theme);
                    }

                    if *self.view.load_state() == LoadState::Ready {
                        ui.label(
                            egui::RichText::new(count_label(
                                self.view.filtered_count(),
                                self.view.total_count(),
                            ))
                            .size(theme::FONT_SMALL)
                            .color(p.text_dim),
                        );
                    }
                });
            });

            ui.add_space(12.0);

            let search_frame_resp = theme::input_frame(p).show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.spacing_mut().item_spacing.x = 4.0;
                    ui.label(
                        egui::RichText::new(egui_phosphor::regular::MAGNIFYING_GLASS)
                            .size(14.0)
                            .color(p.text_dim),
                    );
                    let search_id = ui.make_persistent_id("search_box");
                    let search_response = ui.add(
                        egui::TextEdit::singleline(self.view.search_query_mut())
                            .id(search_id)
                            .hint_text("Search posts by title...")
                            .frame(false)
                            .desired_width(ui.available_width() - 20.0),
                    );
                    if self.focus_search {
                        self.focus_search = false;
                        search_response.request_focus();
                        if let Some(mut state) = egui::TextEdit::load_state(ui.ctx(), search_id) {
                            let ccursor = egui::text::CCursor::new(self.view.search_query().chars().count());
                            state.cursor.set_char_range(Some(egui::text::CCursorRange::one(ccursor)));
                            state.store(ui.ctx(), search_id);
                        }
                    }
                    if search_response.changed() {
                        self.view.apply_filters();
                    }
                });
            });

            // Clear button overlaid on right side of search frame
            if !self.view.search_query().is_empty() {
                let frame_rect = search_frame_resp.response.rect;
                let btn_rect = egui::Rect::from_center_size(
                    egui::pos2(frame_rect.right() - 14.0, frame_rect.center().y),
                    egui::vec2(16.0, 16.0),
                );
                let clear_resp = ui.interact(btn_rect, ui.id().with("search_clear"), egui::Sense::click());
                let color = if clear_resp.hovered() { p.text_primary } else { p.text_dim };
                ui.painter().text(
                    btn_rect.center(),
                    egui::Align2::CENTER_CENTER,
                    egui_phosphor::regular::X,
                    egui::FontId::proportional(12.0),
                    color,
                );
                if clear_resp.clicked() {
                    self.view.set_search_query("");
                }
            }
        });
    }

    pub(crate) fn render_body(&mut self, ui: &mut egui::Ui) {
        let p = theme::palette(ui.visuals().dark_mode);
        let has_query = !self.view.search_query().is_empty();
        let mut clear_search = false;

        centered_column(ui, |ui| match self.view.body() {
            Body::Loading => {
                status_message(ui, None, "Loading posts...", p.status_loading);
            }
            Body::Error(message) => {
                status_message(
                    ui,
                    Some(egui_phosphor::regular::WARNING_CIRCLE),
                    &format!("Error: {}", message),
                    p.status_error,
                );
            }
            Body::Empty => {
                status_message(
                    ui,
                    Some(egui_phosphor::regular::FUNNEL_X),
                    "No posts found.",
                    p.status_empty,
                );
                if has_query {
                    ui.vertical_centered(|ui| {
                        ui.add_space(12.0);
                        if ui.button("Clear search").clicked() {
                            clear_search = true;
                        }
                    });
                }
            }
            Body::Posts(posts) => {
                egui::ScrollArea::vertical()
                    .auto_shrink([false; 2])
                    .show(ui, |ui| {
                        for (i, post) in posts.iter().enumerate() {
                            if i > 0 {
                                ui.add_space(theme::CARD_SPACING);
                            }
                            post_card(ui, post, p);
                        }
                        ui.add_space(theme::CARD_SPACING);
                    });
            }
        });

        if clear_search {
            self.view.set_search_query("");
        }
    }
}
