//! Centralized theme constants for Posts Viewer
//! Colors follow the tailwind gray scale; one palette per egui theme.

use egui::Color32;

// =============================================================================
// COLORS - Palettes
// =============================================================================
pub struct Palette {
    pub bg_page: Color32,
    pub bg_card: Color32,
    pub bg_input: Color32,
    pub border_input: Color32,
    pub text_primary: Color32,
    pub text_dim: Color32,
    pub status_loading: Color32,
    pub status_error: Color32,
    pub status_empty: Color32,
    pub shadow: Color32,
}

pub const LIGHT: Palette = Palette {
    bg_page: Color32::from_rgb(0xf3, 0xf4, 0xf6),      // gray-100
    bg_card: Color32::WHITE,
    bg_input: Color32::WHITE,
    border_input: Color32::from_rgb(0xd1, 0xd5, 0xdb), // gray-300
    text_primary: Color32::from_rgb(0x11, 0x18, 0x27), // gray-900
    text_dim: Color32::from_rgb(0x6b, 0x72, 0x80),     // gray-500
    status_loading: Color32::from_rgb(0x25, 0x63, 0xeb), // blue-600
    status_error: Color32::from_rgb(0xdc, 0x26, 0x26), // red-600
    status_empty: Color32::from_rgb(0x6b, 0x72, 0x80), // gray-500
    shadow: Color32::from_black_alpha(40),
};

pub const DARK: Palette = Palette {
    bg_page: Color32::from_rgb(0x11, 0x18, 0x27),      // gray-900
    bg_card: Color32::from_rgb(0x1f, 0x29, 0x37),      // gray-800
    bg_input: Color32::from_rgb(0x1f, 0x29, 0x37),     // gray-800
    border_input: Color32::from_rgb(0x37, 0x41, 0x51), // gray-700
    text_primary: Color32::from_rgb(0xf3, 0xf4, 0xf6), // gray-100
    text_dim: Color32::from_rgb(0x9c, 0xa3, 0xaf),     // gray-400
    status_loading: Color32::from_rgb(0x25, 0x63, 0xeb), // blue-600
    status_error: Color32::from_rgb(0xdc, 0x26, 0x26), // red-600
    status_empty: Color32::from_rgb(0x6b, 0x72, 0x80), // gray-500
    shadow: Color32::from_black_alpha(90),
};

pub fn palette(dark_mode: bool) -> &'static Palette {
    if dark_mode {
        &DARK
    } else {
        &LIGHT
    }
}

// =============================================================================
// TYPOGRAPHY - Font Sizes
// =============================================================================
pub const FONT_TITLE: f32 = 28.0;
pub const FONT_HEADING: f32 = 20.0;
pub const FONT_BODY: f32 = 15.0;
pub const FONT_STATUS: f32 = 16.0;
pub const FONT_SMALL: f32 = 12.0;

// =============================================================================
// DIMENSIONS
// =============================================================================
pub const MAX_CONTENT_WIDTH: f32 = 768.0;
pub const PAGE_PADDING: i8 = 16;
pub const CARD_PADDING: i8 = 16;
pub const CARD_SPACING: f32 = 16.0;
pub const HEADER_GAP: f32 = 24.0;
pub const STATUS_ICON_SIZE: f32 = 40.0;

// =============================================================================
// CORNER RADIUS
// =============================================================================
pub const RADIUS_DEFAULT: f32 = 4.0;

// =============================================================================
// HELPER - Apply global visuals
// =============================================================================
pub fn apply_visuals(ctx: &egui::Context) {
    ctx.set_visuals_of(egui::Theme::Dark, visuals_for(&DARK, egui::Visuals::dark()));
    ctx.set_visuals_of(egui::Theme::Light, visuals_for(&LIGHT, egui::Visuals::light()));

    ctx.style_mut(|style| {
        style.interaction.selectable_labels = false;
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.button_padding = egui::vec2(12.0, 6.0);
        style.spacing.scroll.bar_width = 6.0;
    });
}

fn visuals_for(p: &Palette, base: egui::Visuals) -> egui::Visuals {
    egui::Visuals {
        panel_fill: p.bg_page,
        window_fill: p.bg_card,
        extreme_bg_color: p.bg_input,
        override_text_color: Some(p.text_primary),
        interact_cursor: Some(egui::CursorIcon::PointingHand),
        ..base
    }
}

// =============================================================================
// HELPER - Frames
// =============================================================================
pub fn card_frame(p: &Palette, hovered: bool) -> egui::Frame {
    let shadow = if hovered {
        egui::epaint::Shadow { offset: [0, 6], blur: 16, spread: 0, color: p.shadow }
    } else {
        egui::epaint::Shadow { offset: [0, 1], blur: 4, spread: 0, color: p.shadow }
    };
    egui::Frame::new()
        .fill(p.bg_card)
        .corner_radius(RADIUS_DEFAULT)
        .inner_margin(egui::Margin::same(CARD_PADDING))
        .shadow(shadow)
}

pub fn input_frame(p: &Palette) -> egui::Frame {
    egui::Frame::new()
        .fill(p.bg_input)
        .stroke(egui::Stroke::new(1.0, p.border_input))
        .corner_radius(RADIUS_DEFAULT)
        .inner_margin(egui::Margin::symmetric(8, 8))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_follows_mode() {
        assert_eq!(palette(true).bg_page, DARK.bg_page);
        assert_eq!(palette(false).bg_page, LIGHT.bg_page);
        assert_ne!(DARK.text_primary, LIGHT.text_primary);
    }
}
