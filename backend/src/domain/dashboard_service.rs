//! Dashboard orchestration: premises + sales -> everything the UI draws.
//!
//! Data flows one way (premises and sales total, then thresholds, then status
//! and geometry). Nothing is cached; the UI calls `build_snapshot` whenever
//! it needs fresh output.

use log::debug;
use shared::{DailySale, DashboardSnapshot, FinancialPremises, GaugeLayout};

use super::gauge_geometry::GaugeService;
use super::sales_service::SalesService;
use super::status_classifier::classify_status;
use super::threshold_calculator::compute_thresholds;

#[derive(Debug, Clone, Default)]
pub struct DashboardService {
    gauge_service: GaugeService,
    sales_service: SalesService,
}

impl DashboardService {
    pub fn new(gauge_service: GaugeService, sales_service: SalesService) -> Self {
        Self {
            gauge_service,
            sales_service,
        }
    }

    pub fn gauge_layout(&self) -> &GaugeLayout {
        self.gauge_service.layout()
    }

    pub fn build_snapshot(&self, premises: &FinancialPremises, sales: &[DailySale]) -> DashboardSnapshot {
        let thresholds = compute_thresholds(premises);
        let summary = self.sales_service.summarize(sales);
        let status = classify_status(summary.total_revenue, &thresholds);
        let gauge = self.gauge_service.compute_gauge(&thresholds, summary.total_revenue);

        debug!(
            "Snapshot for {}: revenue={:.2} status={} needle={:.2}",
            premises.reference_month, summary.total_revenue, status.label, gauge.needle.angle
        );

        DashboardSnapshot {
            thresholds,
            status,
            gauge,
            summary,
        }
    }
}
