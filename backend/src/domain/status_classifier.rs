//! Status classifier.
//!
//! Maps the accumulated revenue onto one of five ordered status levels using
//! cascading strict `<` checks in ascending threshold order. The first match
//! wins and the last branch is unconditional, so every input gets exactly one
//! level, even when degenerate premises leave the thresholds out of order.

use shared::{DashboardStatus, GaugeThresholds, StatusLevel};

/// Classify the accumulated revenue against the thresholds
pub fn classify_status(total_revenue: f64, thresholds: &GaugeThresholds) -> DashboardStatus {
    classify_level(total_revenue, thresholds).into()
}

pub fn classify_level(total_revenue: f64, thresholds: &GaugeThresholds) -> StatusLevel {
    if total_revenue < thresholds.fixed {
        StatusLevel::Essencial
    } else if total_revenue < thresholds.variable_cutoff() {
        StatusLevel::Necessario
    } else if total_revenue < thresholds.break_even {
        StatusLevel::Bom
    } else if total_revenue < thresholds.goal {
        StatusLevel::QuaseLa
    } else {
        StatusLevel::Otimo
    }
}
