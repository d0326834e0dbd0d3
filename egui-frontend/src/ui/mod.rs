//! # UI Module
//!
//! Central import point for the dashboard UI. Other modules can simply
//! `use crate::ui::*`.

pub mod app_implementation;
pub mod app_state;
pub mod components;

pub use app_state::*;
pub use components::*;
