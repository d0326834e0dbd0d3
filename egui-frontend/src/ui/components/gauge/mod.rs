//! # Gauge Module
//!
//! Paints the semicircular sales gauge from a precomputed `GaugeGeometry`.
//!
//! ## Key Components:
//! - `transform.rs` - View box to screen mapping and annulus tessellation
//! - `renderer.rs` - Band, marker, needle and logo painting with egui primitives
//!
//! All geometry arrives in view box units from the backend; this module only
//! maps and draws it, so the on-screen gauge and the exported SVG agree.

pub mod renderer;
pub mod transform;

pub use renderer::GaugeRenderer;
