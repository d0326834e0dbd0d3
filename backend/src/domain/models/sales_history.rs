//! Month-keyed sales history.
//!
//! Holds the sales recorded for every month visited during the session. The
//! month swap is planned from a snapshot of the current state and applied in
//! one step, so the sales being archived are always the pre-switch ones.

use serde::{Deserialize, Serialize};
use shared::DailySale;
use std::collections::BTreeMap;

/// Sales recorded per reference month ("YYYY-MM")
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesHistory {
    months: BTreeMap<String, Vec<DailySale>>,
}

impl SalesHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sales archived for a month; months never visited have none
    pub fn get_or_default(&self, month: &str) -> Vec<DailySale> {
        self.months.get(month).cloned().unwrap_or_default()
    }

    pub fn contains(&self, month: &str) -> bool {
        self.months.contains_key(month)
    }

    /// Store (or overwrite) the sales for a month
    pub fn archive(&mut self, month: &str, sales: Vec<DailySale>) {
        self.months.insert(month.to_string(), sales);
    }

    /// Copy of this history with `month` archived
    pub fn with_archived(&self, month: &str, sales: Vec<DailySale>) -> Self {
        let mut history = self.clone();
        history.archive(month, sales);
        history
    }

    /// Archived months in ascending order
    pub fn months(&self) -> impl Iterator<Item = &str> {
        self.months.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.months.len()
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }
}

/// The state after switching the reference month, computed up front
#[derive(Debug, Clone, PartialEq)]
pub struct MonthTransition {
    pub from_month: String,
    pub to_month: String,
    /// History with the outgoing month's sales archived
    pub history: SalesHistory,
    /// Sales shown for the incoming month
    pub loaded_sales: Vec<DailySale>,
}

impl MonthTransition {
    /// Plan a switch from `current_month` to `new_month`. Returns `None`
    /// when the month does not change.
    ///
    /// Both outputs derive from the same pre-transition snapshot: the loaded
    /// sales are read from `history` before the outgoing month is archived.
    pub fn plan(
        history: &SalesHistory,
        current_month: &str,
        current_sales: &[DailySale],
        new_month: &str,
    ) -> Option<Self> {
        if current_month == new_month {
            return None;
        }

        let loaded_sales = history.get_or_default(new_month);
        let archived = history.with_archived(current_month, current_sales.to_vec());

        Some(Self {
            from_month: current_month.to_string(),
            to_month: new_month.to_string(),
            history: archived,
            loaded_sales,
        })
    }
}
