//! # Sales Table
//!
//! Entry form for daily sales and the month's list, newest day last.

use backend::format_brl;
use eframe::egui;
use egui_extras::{Column, TableBuilder};

use super::styling::{card_frame, TEXT_MUTED};
use crate::ui::app_state::SalesDashboardApp;

impl SalesDashboardApp {
    pub fn render_sales_table(&mut self, ui: &mut egui::Ui) {
        card_frame().show(ui, |ui| {
            ui.heading("Vendas diárias");
            ui.add_space(6.0);

            ui.horizontal(|ui| {
                ui.label("Dia");
                ui.add(egui::TextEdit::singleline(&mut self.sale_day_input).desired_width(40.0));
                ui.label("Valor");
                let value_response = ui.add(
                    egui::TextEdit::singleline(&mut self.sale_value_input)
                        .hint_text("0,00")
                        .desired_width(110.0),
                );
                let submitted = value_response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                if ui.button("➕ Adicionar").clicked() || submitted {
                    self.submit_sale();
                }
            });

            ui.add_space(6.0);

            let sales = self.session.sales().to_vec();
            if sales.is_empty() {
                ui.label(egui::RichText::new("Nenhuma venda registrada neste mês").color(TEXT_MUTED));
                return;
            }

            let mut to_remove: Option<String> = None;

            TableBuilder::new(ui)
                .striped(true)
                .resizable(false)
                .vscroll(false)
                .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                .column(Column::exact(50.0)) // DIA
                .column(Column::remainder()) // VALOR
                .column(Column::exact(36.0)) // remove
                .header(24.0, |mut header| {
                    header.col(|ui| {
                        ui.strong("Dia");
                    });
                    header.col(|ui| {
                        ui.strong("Valor");
                    });
                    header.col(|_ui| {});
                })
                .body(|body| {
                    body.rows(24.0, sales.len(), |mut row| {
                        let sale = &sales[row.index()];
                        row.col(|ui| {
                            ui.label(sale.day.to_string());
                        });
                        row.col(|ui| {
                            ui.label(format_brl(sale.value));
                        });
                        row.col(|ui| {
                            if ui.small_button("🗑").on_hover_text("Remover venda").clicked() {
                                to_remove = Some(sale.id.clone());
                            }
                        });
                    });
                });

            if let Some(sale_id) = to_remove {
                self.remove_sale(&sale_id);
            }

            ui.separator();
            let total = self.backend.sales_service.total_revenue(self.session.sales());
            ui.label(egui::RichText::new(format!("Total acumulado: {}", format_brl(total))).strong());
        });
    }
}
