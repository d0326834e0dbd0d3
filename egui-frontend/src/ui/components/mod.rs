//! # UI Components Module
//!
//! ## Module Organization:
//! - `header` - Title, logo path field, export buttons and messages
//! - `premises_form` - Reference month and financial premises
//! - `sales_table` - Daily sale entry and list
//! - `gauge` - Semicircular gauge painting
//! - `stats_cards` - Status banner and summary cards
//! - `styling` - Global style and colour helpers

pub mod gauge;
pub mod header;
pub mod premises_form;
pub mod sales_table;
pub mod stats_cards;
pub mod styling;

pub use stats_cards::{render_status, render_summary_cards};
pub use styling::setup_dashboard_style;
