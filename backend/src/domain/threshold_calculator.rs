//! Premises-to-thresholds calculator.
//!
//! Converts the percentage premises into absolute currency cutoffs. The gauge
//! always spans 0..125% of the revenue goal; that headroom is fixed.

use shared::{FinancialPremises, GaugeThresholds, GAUGE_HEADROOM_FACTOR};

/// Derive the absolute thresholds for a set of premises.
///
/// Percentages are used as given: they are not clamped and need not sum to
/// 100. A zero or negative goal yields a non-renderable gauge
/// (`gauge_max <= 0`), which the geometry generator guards against.
pub fn compute_thresholds(premises: &FinancialPremises) -> GaugeThresholds {
    let goal = premises.monthly_revenue_goal;

    let fixed = percentage_of(goal, premises.fixed_cost_pct);
    let variable = percentage_of(goal, premises.variable_cost_pct);
    let pro_labore = percentage_of(goal, premises.pro_labore_pct);

    GaugeThresholds {
        fixed,
        variable,
        pro_labore,
        break_even: fixed + variable + pro_labore,
        goal,
        gauge_max: goal * GAUGE_HEADROOM_FACTOR,
        profit_target: percentage_of(goal, premises.profit_goal_pct),
    }
}

fn percentage_of(amount: f64, pct: f64) -> f64 {
    amount * pct / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn premises(goal: f64, fixed: f64, variable: f64, pro_labore: f64) -> FinancialPremises {
        FinancialPremises {
            reference_month: "2024-01".to_string(),
            fixed_cost_pct: fixed,
            variable_cost_pct: variable,
            pro_labore_pct: pro_labore,
            profit_goal_pct: 20.0,
            monthly_revenue_goal: goal,
        }
    }

    #[test]
    fn test_default_premises_thresholds() {
        let thresholds = compute_thresholds(&premises(100_000.0, 25.0, 45.0, 10.0));

        assert_eq!(thresholds.fixed, 25_000.0);
        assert_eq!(thresholds.variable, 45_000.0);
        assert_eq!(thresholds.pro_labore, 10_000.0);
        assert_eq!(thresholds.break_even, 80_000.0);
        assert_eq!(thresholds.goal, 100_000.0);
        assert_eq!(thresholds.gauge_max, 125_000.0);
        assert_eq!(thresholds.profit_target, 20_000.0);
        assert_eq!(thresholds.variable_cutoff(), 70_000.0);
    }

    #[test]
    fn test_zero_goal_is_not_renderable() {
        let thresholds = compute_thresholds(&premises(0.0, 25.0, 45.0, 10.0));
        assert_eq!(thresholds.gauge_max, 0.0);
        assert_eq!(thresholds.break_even, 0.0);
        assert!(!thresholds.is_renderable());
    }

    #[test]
    fn test_percentages_are_not_clamped() {
        // Break-even above the goal is accepted as-is
        let thresholds = compute_thresholds(&premises(1_000.0, 60.0, 50.0, -5.0));
        assert_eq!(thresholds.fixed, 600.0);
        assert_eq!(thresholds.variable, 500.0);
        assert_eq!(thresholds.pro_labore, -50.0);
        assert_eq!(thresholds.break_even, 1_050.0);
        assert!(thresholds.break_even > thresholds.goal);
    }

    #[test]
    fn test_negative_goal_degenerates() {
        let thresholds = compute_thresholds(&premises(-500.0, 25.0, 45.0, 10.0));
        assert_eq!(thresholds.gauge_max, -625.0);
        assert!(!thresholds.is_renderable());
    }
}
