//! # Domain Module
//!
//! Contains all business logic for the sales goal dashboard, independent of
//! any UI framework.
//!
//! ## Module Organization
//!
//! - **threshold_calculator**: premises -> absolute currency thresholds
//! - **status_classifier**: accumulated revenue -> status level
//! - **gauge_geometry**: thresholds + revenue -> bands, needle and markers
//! - **sales_service**: daily sale form validation and list operations
//! - **premises_service**: reference month handling and premise validation
//! - **session**: in-memory premises, sales and month history
//! - **dashboard_service**: one-call snapshot for the UI
//! - **export_service**: SVG and CSV export
//! - **formatting**: R$ and percentage display strings
//!
//! ## Business Rules
//!
//! - The gauge spans 0..125% of the monthly revenue goal
//! - Status boundaries are strict `<` checks in ascending order
//! - Degenerate premises produce degenerate but finite geometry
//! - Switching months archives the outgoing sales before loading the new ones

pub mod dashboard_service;
pub mod export_service;
pub mod formatting;
pub mod gauge_geometry;
pub mod models;
pub mod premises_service;
pub mod sales_service;
pub mod session;
pub mod status_classifier;
pub mod threshold_calculator;

pub use dashboard_service::*;
pub use export_service::*;
pub use formatting::*;
pub use gauge_geometry::*;
pub use models::*;
pub use premises_service::*;
pub use sales_service::*;
pub use session::*;
pub use status_classifier::*;
pub use threshold_calculator::*;
