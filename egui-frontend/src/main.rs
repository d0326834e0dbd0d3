use eframe::egui;
use log::{error, info};

mod ui;

use ui::SalesDashboardApp;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();
    info!("Starting Sales Dashboard egui application");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([900.0, 600.0])
            .with_title("Dashboard de Vendas KRS")
            .with_resizable(true),
        ..Default::default()
    };

    info!("Launching egui window");
    eframe::run_native(
        "Dashboard de Vendas KRS",
        options,
        Box::new(|cc| match SalesDashboardApp::new(cc) {
            Ok(app) => {
                info!("Successfully initialized Sales Dashboard app");
                Ok(Box::new(app))
            }
            Err(e) => {
                error!("Failed to initialize app: {}", e);
                Err(format!("Failed to initialize app: {:#}", e).into())
            }
        }),
    )
}
