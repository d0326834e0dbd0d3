//! Daily sales domain logic for the dashboard.
//!
//! This module owns the sale form validation, value parsing and the
//! operations on a month's ordered sale list. Every operation returns a new
//! list; callers decide when to swap it into the session.

use log::{debug, info};
use serde::{Deserialize, Serialize};
use shared::{DailySale, SaleFormValidation, SaleValidationError, SalesSummary};

/// Configuration for the daily sale form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SalesConfig {
    pub min_day: u32,
    pub max_day: u32,
    pub currency_symbol: String,
}

impl Default for SalesConfig {
    fn default() -> Self {
        Self {
            min_day: 1,
            max_day: 31,
            currency_symbol: "R$".to_string(),
        }
    }
}

/// Sales service that handles all daily-sale business logic
#[derive(Debug, Clone)]
pub struct SalesService {
    config: SalesConfig,
}

impl SalesService {
    pub fn new() -> Self {
        Self {
            config: SalesConfig::default(),
        }
    }

    pub fn with_config(config: SalesConfig) -> Self {
        Self { config }
    }

    /// Validate the raw day and value inputs of the sale form
    pub fn validate_sale_form(&self, day_input: &str, value_input: &str) -> SaleFormValidation {
        let mut errors = Vec::new();

        let cleaned_day = match self.parse_day(day_input) {
            Ok(day) => Some(day),
            Err(error) => {
                errors.push(error);
                None
            }
        };

        let cleaned_value = match self.clean_and_parse_value(value_input) {
            Ok(value) => Some(value),
            Err(error) => {
                errors.push(error);
                None
            }
        };

        SaleFormValidation {
            is_valid: errors.is_empty(),
            errors,
            cleaned_day,
            cleaned_value,
        }
    }

    /// Parse the day input; it must be an integer within the configured range
    pub fn parse_day(&self, day_input: &str) -> Result<u32, SaleValidationError> {
        let trimmed = day_input.trim();
        if trimmed.is_empty() {
            return Err(SaleValidationError::EmptyDay);
        }

        let day = trimmed
            .parse::<i64>()
            .map_err(|e| SaleValidationError::InvalidDay(e.to_string()))?;

        if day < self.config.min_day as i64 || day > self.config.max_day as i64 {
            return Err(SaleValidationError::DayOutOfRange(day));
        }

        Ok(day as u32)
    }

    /// Clean and parse a value input.
    ///
    /// Accepts `1234.56`, `1234,56` and `1.234,56`, with or without the
    /// currency symbol. Zero and negative values are valid sales.
    pub fn clean_and_parse_value(&self, value_input: &str) -> Result<f64, SaleValidationError> {
        let cleaned: String = value_input
            .trim()
            .replace(&self.config.currency_symbol, "")
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();

        if cleaned.is_empty() {
            return Err(SaleValidationError::EmptyValue);
        }

        // Comma is the decimal separator in pt-BR; dots are then thousands
        let normalized = if cleaned.contains(',') {
            cleaned.replace('.', "").replace(',', ".")
        } else {
            cleaned
        };

        let value = normalized
            .parse::<f64>()
            .map_err(|e| SaleValidationError::InvalidValueFormat(e.to_string()))?;

        if !value.is_finite() {
            return Err(SaleValidationError::NonFiniteValue);
        }

        Ok(value)
    }

    /// Add a sale, keeping the list sorted by day. Entries on the same day
    /// keep their insertion order.
    pub fn add_sale(&self, sales: &[DailySale], day: u32, value: f64) -> Vec<DailySale> {
        self.insert_sale(sales, DailySale::new(day, value))
    }

    pub fn insert_sale(&self, sales: &[DailySale], sale: DailySale) -> Vec<DailySale> {
        info!("➕ Adding sale on day {} with value {:.2}", sale.day, sale.value);
        let mut updated = sales.to_vec();
        updated.push(sale);
        updated.sort_by_key(|s| s.day);
        updated
    }

    /// Remove the sale with the given id; unknown ids leave the list as-is
    pub fn remove_sale(&self, sales: &[DailySale], sale_id: &str) -> Vec<DailySale> {
        let updated: Vec<DailySale> = sales.iter().filter(|s| s.id != sale_id).cloned().collect();
        if updated.len() == sales.len() {
            debug!("No sale with id {} to remove", sale_id);
        } else {
            info!("🗑️ Removed sale {}", sale_id);
        }
        updated
    }

    /// Day suggested for the next entry: one past the latest recorded day
    pub fn next_suggested_day(&self, sales: &[DailySale]) -> u32 {
        sales
            .iter()
            .map(|s| s.day)
            .max()
            .map_or(1, |day| day.saturating_add(1))
    }

    pub fn total_revenue(&self, sales: &[DailySale]) -> f64 {
        sales.iter().map(|s| s.value).sum()
    }

    /// Total, per-entry average and number of entries
    pub fn summarize(&self, sales: &[DailySale]) -> SalesSummary {
        let total_revenue = self.total_revenue(sales);
        let days_worked = sales.len();
        let daily_average = if days_worked > 0 {
            total_revenue / days_worked as f64
        } else {
            0.0
        };

        SalesSummary {
            total_revenue,
            daily_average,
            days_worked,
        }
    }

    /// First error message of a validation, for inline display
    pub fn get_first_error_message(&self, validation: &SaleFormValidation) -> Option<String> {
        validation.errors.first().map(|e| e.to_string())
    }
}

impl Default for SalesService {
    fn default() -> Self {
        Self::new()
    }
}
