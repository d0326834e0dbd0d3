//! # Styling Module
//!
//! Global egui style and colour helpers for the dashboard.
//!
//! ## Key Functions:
//! - `setup_dashboard_style()` - Configure global egui styling
//! - `hex_to_color32()` - Convert the domain's `#rrggbb` colours
//! - `card_frame()` - Frame used by the summary cards and form groups

use eframe::egui;

pub const TEXT_DARK: egui::Color32 = egui::Color32::from_rgb(30, 41, 59);
pub const TEXT_MUTED: egui::Color32 = egui::Color32::from_rgb(100, 116, 139);
pub const ERROR_RED: egui::Color32 = egui::Color32::from_rgb(220, 38, 38);
pub const SUCCESS_GREEN: egui::Color32 = egui::Color32::from_rgb(22, 163, 74);

/// Setup the dashboard look for the entire application
pub fn setup_dashboard_style(ctx: &egui::Context) {
    ctx.set_style({
        let mut style = (*ctx.style()).clone();

        style.visuals = egui::Visuals::light();
        style.visuals.panel_fill = egui::Color32::from_rgb(241, 245, 249);
        style.visuals.extreme_bg_color = egui::Color32::WHITE;

        style.text_styles.insert(
            egui::TextStyle::Heading,
            egui::FontId::new(24.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Body,
            egui::FontId::new(15.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Button,
            egui::FontId::new(15.0, egui::FontFamily::Proportional),
        );

        style.spacing.button_padding = egui::vec2(10.0, 6.0);
        style.spacing.item_spacing = egui::vec2(8.0, 8.0);
        style.visuals.widgets.inactive.rounding = egui::Rounding::same(6.0);
        style.visuals.widgets.active.rounding = egui::Rounding::same(6.0);
        style.visuals.widgets.hovered.rounding = egui::Rounding::same(6.0);

        style
    });
}

/// `#rrggbb` to `Color32`; anything unparsable becomes gray
pub fn hex_to_color32(hex: &str) -> egui::Color32 {
    let digits = hex.trim_start_matches('#');
    if digits.len() != 6 {
        return egui::Color32::GRAY;
    }

    let channel = |range: std::ops::Range<usize>| {
        digits.get(range).and_then(|s| u8::from_str_radix(s, 16).ok())
    };
    match (channel(0..2), channel(2..4), channel(4..6)) {
        (Some(r), Some(g), Some(b)) => egui::Color32::from_rgb(r, g, b),
        _ => egui::Color32::GRAY,
    }
}

/// White rounded card with a soft border
pub fn card_frame() -> egui::Frame {
    egui::Frame::none()
        .fill(egui::Color32::WHITE)
        .rounding(egui::Rounding::same(10.0))
        .stroke(egui::Stroke::new(1.0, egui::Color32::from_rgb(226, 232, 240)))
        .inner_margin(egui::Margin::same(12.0))
}
