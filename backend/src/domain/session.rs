//! In-memory dashboard session.
//!
//! Holds the premises being edited, the current month's sales, the history
//! of previously visited months and the logo shown at the gauge centre.
//! Nothing here outlives the process.

use log::info;
use shared::{DailySale, FinancialPremises};
use std::path::{Path, PathBuf};

use super::models::{MonthTransition, SalesHistory};
use super::sales_service::SalesService;

#[derive(Debug, Clone)]
pub struct DashboardSession {
    premises: FinancialPremises,
    sales: Vec<DailySale>,
    history: SalesHistory,
    logo_path: Option<PathBuf>,
}

impl DashboardSession {
    pub fn new(premises: FinancialPremises) -> Self {
        Self {
            premises,
            sales: Vec::new(),
            history: SalesHistory::new(),
            logo_path: None,
        }
    }

    pub fn premises(&self) -> &FinancialPremises {
        &self.premises
    }

    /// Sales of the current reference month, sorted by day
    pub fn sales(&self) -> &[DailySale] {
        &self.sales
    }

    pub fn history(&self) -> &SalesHistory {
        &self.history
    }

    pub fn logo_path(&self) -> Option<&Path> {
        self.logo_path.as_deref()
    }

    /// Replace the premises. When the reference month changes, the current
    /// sales are archived under the old month and the new month's sales are
    /// loaded, both computed from the state before the switch.
    ///
    /// Returns true when a month switch happened.
    pub fn update_premises(&mut self, premises: FinancialPremises) -> bool {
        let transition = MonthTransition::plan(
            &self.history,
            &self.premises.reference_month,
            &self.sales,
            &premises.reference_month,
        );

        let switched = match transition {
            Some(transition) => {
                info!(
                    "📅 Switching month {} -> {} (archived {} sales, loaded {})",
                    transition.from_month,
                    transition.to_month,
                    self.sales.len(),
                    transition.loaded_sales.len()
                );
                self.history = transition.history;
                self.sales = transition.loaded_sales;
                true
            }
            None => false,
        };

        self.premises = premises;
        switched
    }

    pub fn add_sale(&mut self, sales_service: &SalesService, day: u32, value: f64) {
        self.sales = sales_service.add_sale(&self.sales, day, value);
    }

    pub fn remove_sale(&mut self, sales_service: &SalesService, sale_id: &str) {
        self.sales = sales_service.remove_sale(&self.sales, sale_id);
    }

    pub fn set_logo_path(&mut self, logo_path: Option<PathBuf>) {
        self.logo_path = logo_path;
    }
}
