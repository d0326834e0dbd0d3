//! # Stats Cards
//!
//! Status banner and the three summary cards under the gauge.

use backend::format_brl;
use eframe::egui;
use shared::{DashboardStatus, SalesSummary};

use super::styling::{card_frame, hex_to_color32, TEXT_DARK, TEXT_MUTED};

pub fn render_status(ui: &mut egui::Ui, status: &DashboardStatus) {
    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new(&status.label)
                .font(egui::FontId::new(28.0, egui::FontFamily::Proportional))
                .strong()
                .color(hex_to_color32(status.level.hex_color())),
        );
    });
}

pub fn render_summary_cards(ui: &mut egui::Ui, summary: &SalesSummary) {
    ui.columns(3, |columns| {
        stat_card(&mut columns[0], "Faturamento atual", &format_brl(summary.total_revenue));
        stat_card(&mut columns[1], "Média diária", &format_brl(summary.daily_average));
        stat_card(&mut columns[2], "Dias trabalhados", &summary.days_worked.to_string());
    });
}

fn stat_card(ui: &mut egui::Ui, title: &str, value: &str) {
    card_frame().show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new(title).color(TEXT_MUTED));
            ui.label(
                egui::RichText::new(value)
                    .font(egui::FontId::new(22.0, egui::FontFamily::Proportional))
                    .strong()
                    .color(TEXT_DARK),
            );
        });
    });
}
