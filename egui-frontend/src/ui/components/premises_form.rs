//! # Premises Form
//!
//! Reference month navigation, revenue goal and the four percentages, with
//! the currency amounts they translate to.

use backend::{format_brl, format_percentage};
use eframe::egui;
use shared::GaugeThresholds;

use super::styling::{card_frame, TEXT_MUTED};
use crate::ui::app_state::SalesDashboardApp;

impl SalesDashboardApp {
    pub fn render_premises_form(&mut self, ui: &mut egui::Ui, thresholds: &GaugeThresholds) {
        card_frame().show(ui, |ui| {
            ui.heading("Premissas");
            ui.add_space(6.0);

            ui.horizontal(|ui| {
                ui.label("Mês");
                if ui.button("◀").clicked() {
                    self.shift_month(-1);
                }
                let response = ui.add(egui::TextEdit::singleline(&mut self.month_input).desired_width(80.0));
                if response.lost_focus() {
                    self.commit_month_input();
                }
                if ui.button("▶").clicked() {
                    self.shift_month(1);
                }
            });

            let mut edited = self.session.premises().clone();

            egui::Grid::new("premises_grid")
                .num_columns(3)
                .spacing([12.0, 6.0])
                .show(ui, |ui| {
                    ui.label("Meta de faturamento");
                    ui.add(egui::DragValue::new(&mut edited.monthly_revenue_goal).speed(100.0).prefix("R$ "));
                    ui.label("");
                    ui.end_row();

                    percentage_row(ui, "Essencial (custo fixo)", &mut edited.fixed_cost_pct, thresholds.fixed);
                    percentage_row(ui, "Necessário (custo variável)", &mut edited.variable_cost_pct, thresholds.variable);
                    percentage_row(ui, "Bom (pró-labore)", &mut edited.pro_labore_pct, thresholds.pro_labore);
                    percentage_row(ui, "Meta de lucro", &mut edited.profit_goal_pct, thresholds.profit_target);
                });

            ui.add_space(6.0);
            ui.label(
                egui::RichText::new(format!("Ponto de equilíbrio: {}", format_brl(thresholds.break_even))).strong(),
            );
            ui.label(egui::RichText::new(format!("Meta: {}", format_brl(thresholds.goal))).strong());
            ui.label(
                egui::RichText::new(format!(
                    "Escala do gráfico até {} ({} da meta)",
                    format_brl(thresholds.gauge_max),
                    format_percentage(shared::GAUGE_HEADROOM_FACTOR * 100.0)
                ))
                .small()
                .color(TEXT_MUTED),
            );

            if edited != *self.session.premises() {
                self.apply_premises(edited);
            }
        });
    }
}

fn percentage_row(ui: &mut egui::Ui, label: &str, value: &mut f64, amount: f64) {
    ui.label(label);
    ui.add(egui::DragValue::new(value).speed(0.5).suffix(" %"));
    ui.label(egui::RichText::new(format_brl(amount)).color(TEXT_MUTED));
    ui.end_row();
}
