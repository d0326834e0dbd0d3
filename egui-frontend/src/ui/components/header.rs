//! # Header Module
//!
//! Title bar with the logo path field and the export buttons.

use eframe::egui;

use super::styling::{ERROR_RED, SUCCESS_GREEN, TEXT_DARK};
use crate::ui::app_state::SalesDashboardApp;

impl SalesDashboardApp {
    /// Render the header
    pub fn render_header(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add(
                egui::Label::new(
                    egui::RichText::new("Dashboard de Vendas KRS")
                        .font(egui::FontId::new(26.0, egui::FontFamily::Proportional))
                        .strong()
                        .color(TEXT_DARK),
                )
                .selectable(false),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("📄 Exportar CSV").clicked() {
                    self.export_sales();
                }
                if ui.button("🖼 Exportar SVG").clicked() {
                    self.export_gauge();
                }

                ui.add_space(20.0);

                if ui.button("Carregar logo").clicked() {
                    self.load_logo();
                }
                let response = ui.add(
                    egui::TextEdit::singleline(&mut self.logo_path_input)
                        .hint_text("Caminho do logo (PNG/JPEG)")
                        .desired_width(260.0),
                );
                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    self.load_logo();
                }
            });
        });
    }

    /// Render error and success messages
    pub fn render_messages(&self, ui: &mut egui::Ui) {
        if let Some(error) = &self.error_message {
            ui.colored_label(ERROR_RED, format!("❌ {}", error));
        }
        if let Some(success) = &self.success_message {
            ui.colored_label(SUCCESS_GREEN, format!("✅ {}", success));
        }
    }
}
