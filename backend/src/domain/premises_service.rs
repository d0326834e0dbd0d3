//! Premises domain logic: reference month handling and premise validation.
//!
//! Amounts and percentages are taken as the user typed them. Only the month
//! key has a format, and only non-finite numbers are rejected.

use chrono::{Datelike, Months, NaiveDate};
use log::debug;
use shared::FinancialPremises;

use super::models::{PremisesDefaults, PremisesValidationError};

const MONTH_FORMAT: &str = "%Y-%m";

#[derive(Debug, Clone, Default)]
pub struct PremisesService;

impl PremisesService {
    pub fn new() -> Self {
        Self
    }

    /// The current local month as "YYYY-MM"
    pub fn current_reference_month(&self) -> String {
        chrono::Local::now().format(MONTH_FORMAT).to_string()
    }

    /// Startup premises for the current month
    pub fn default_premises(&self, defaults: &PremisesDefaults) -> FinancialPremises {
        FinancialPremises {
            reference_month: self.current_reference_month(),
            fixed_cost_pct: defaults.fixed_cost_pct,
            variable_cost_pct: defaults.variable_cost_pct,
            pro_labore_pct: defaults.pro_labore_pct,
            profit_goal_pct: defaults.profit_goal_pct,
            monthly_revenue_goal: defaults.monthly_revenue_goal,
        }
    }

    /// Parse a "YYYY-MM" key into the first day of that month
    pub fn validate_reference_month(&self, month: &str) -> Result<NaiveDate, PremisesValidationError> {
        let invalid = || PremisesValidationError::InvalidReferenceMonth(month.to_string());

        let bytes = month.as_bytes();
        if bytes.len() != 7 || bytes[4] != b'-' {
            return Err(invalid());
        }

        NaiveDate::parse_from_str(&format!("{}-01", month), "%Y-%m-%d").map_err(|_| invalid())
    }

    /// Check the month key and that every amount is a finite number
    pub fn validate_premises(&self, premises: &FinancialPremises) -> Result<(), PremisesValidationError> {
        self.validate_reference_month(&premises.reference_month)?;

        let amounts = [
            ("meta de faturamento", premises.monthly_revenue_goal),
            ("essencial", premises.fixed_cost_pct),
            ("necessário", premises.variable_cost_pct),
            ("bom", premises.pro_labore_pct),
            ("meta de lucro", premises.profit_goal_pct),
        ];
        for (field, value) in amounts {
            if !value.is_finite() {
                return Err(PremisesValidationError::NonFiniteAmount { field });
            }
        }

        Ok(())
    }

    /// Move a month key by `delta` months, rolling over years
    pub fn shift_month(&self, month: &str, delta: i32) -> Result<String, PremisesValidationError> {
        let first_day = self.validate_reference_month(month)?;
        let steps = Months::new(delta.unsigned_abs());

        let shifted = if delta >= 0 {
            first_day.checked_add_months(steps)
        } else {
            first_day.checked_sub_months(steps)
        };
        let shifted = shifted.ok_or_else(|| PremisesValidationError::MonthOutOfRange(month.to_string()))?;

        let result = shifted.format(MONTH_FORMAT).to_string();
        debug!("Shifted month {} by {} to {}", month, delta, result);
        Ok(result)
    }

    /// Number of days in the month, for hints only; sale days are never
    /// rejected for exceeding it.
    pub fn days_in_month(&self, month: &str) -> Result<u32, PremisesValidationError> {
        let first_day = self.validate_reference_month(month)?;
        let next = first_day
            .checked_add_months(Months::new(1))
            .ok_or_else(|| PremisesValidationError::MonthOutOfRange(month.to_string()))?;
        Ok(next.pred_opt().map_or(31, |last| last.day()))
    }
}
