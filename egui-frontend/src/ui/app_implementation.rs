use eframe::egui;

use crate::ui::app_state::SalesDashboardApp;
use crate::ui::*;

impl eframe::App for SalesDashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        setup_dashboard_style(ctx);

        // Clear messages after a delay
        if let Some(remaining) = self.expire_messages(std::time::Instant::now()) {
            ctx.request_repaint_after(remaining);
        }

        let snapshot = self.snapshot();

        egui::TopBottomPanel::top("header")
            .frame(egui::Frame::none().fill(egui::Color32::WHITE).inner_margin(egui::Margin::symmetric(16.0, 10.0)))
            .show(ctx, |ui| {
                self.render_header(ui);
            });

        egui::SidePanel::left("inputs")
            .resizable(true)
            .default_width(380.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.add_space(8.0);
                    self.render_premises_form(ui, &snapshot.thresholds);
                    ui.add_space(10.0);
                    self.render_sales_table(ui);
                });
            });

        // Premises or sales may have changed above
        let snapshot = self.snapshot();

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_messages(ui);

            ui.add_space(10.0);
            let logo_uri = self.logo_uri();
            self.gauge_renderer.render(
                ui,
                &snapshot.gauge,
                self.backend.dashboard_service.gauge_layout(),
                logo_uri.as_deref(),
            );

            ui.add_space(10.0);
            render_status(ui, &snapshot.status);
            ui.add_space(10.0);
            render_summary_cards(ui, &snapshot.summary);
        });
    }
}
