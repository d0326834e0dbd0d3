//! # Backend
//!
//! Contains all non-UI logic for the sales goal dashboard.
//!
//! - **Domain**: thresholds, status, gauge geometry, sales and month history
//! - **Config**: read-only YAML settings
//!
//! There is no storage layer: all data lives in the in-memory
//! `DashboardSession` for the lifetime of the process.

pub mod config;
pub mod domain;

pub use config::*;
pub use domain::*;

use anyhow::Result;
use log::info;

/// Holds every service the UI talks to
#[derive(Debug, Clone)]
pub struct Backend {
    pub config: AppConfig,
    pub premises_service: PremisesService,
    pub sales_service: SalesService,
    pub dashboard_service: DashboardService,
    pub export_service: ExportService,
}

impl Backend {
    /// Build the backend from the configuration on disk
    pub fn new() -> Result<Self> {
        let config = AppConfig::load()?;
        Ok(Self::with_config(config))
    }

    pub fn with_config(config: AppConfig) -> Self {
        let sales_service = SalesService::with_config(config.sales.clone());
        let gauge_service = GaugeService::with_layout(config.gauge_layout.clone());

        info!("🚀 Backend ready (exports go to {})", config.export_directory().display());

        Self {
            premises_service: PremisesService::new(),
            dashboard_service: DashboardService::new(gauge_service, sales_service.clone()),
            export_service: ExportService::new(config.export_directory()),
            sales_service,
            config,
        }
    }

    /// Fresh session for the current month with the configured premises
    pub fn new_session(&self) -> DashboardSession {
        DashboardSession::new(self.premises_service.default_premises(&self.config.default_premises))
    }
}
