//! # Gauge Geometry Generator
//!
//! Turns thresholds plus the current revenue into the geometry of a
//! half-circle gauge: four band sectors, band label anchors, the needle and
//! the break-even/goal markers.
//!
//! ## Angle convention
//! Angles are in degrees. 180° is the left end of the gauge (value 0) and 0°
//! is the right end (value = gauge max). Points use a y-down frame, so a
//! point at angle θ and radius r sits at `(cx + r·cos(−θ), cy + r·sin(−θ))`.
//!
//! ## Degenerate inputs
//! When the gauge max is zero, negative or not finite every band collapses
//! onto the 180° boundary and the needle and markers rest at 180°. No output
//! value is ever NaN or infinite for finite inputs.

use shared::{
    ArcPath, BandKind, GaugeBand, GaugeGeometry, GaugeLayout, GaugeThresholds, MarkerGeometry,
    NeedleGeometry, Point, TextAnchor,
};

/// Full sweep of the gauge in degrees
pub const HALF_CIRCLE: f64 = 180.0;

pub const BREAK_EVEN_LABEL: &str = "Ponto de Equilíbrio";
pub const GOAL_LABEL: &str = "Meta";

/// Computes gauge geometry within a fixed drawing layout
#[derive(Debug, Clone)]
pub struct GaugeService {
    layout: GaugeLayout,
}

impl GaugeService {
    pub fn new() -> Self {
        Self {
            layout: GaugeLayout::default(),
        }
    }

    pub fn with_layout(layout: GaugeLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &GaugeLayout {
        &self.layout
    }

    /// Compute the complete gauge geometry. Pure: identical inputs always
    /// yield identical output.
    pub fn compute_gauge(&self, thresholds: &GaugeThresholds, current_revenue: f64) -> GaugeGeometry {
        let boundaries = band_boundaries(thresholds);

        let bands = BandKind::ALL.map(|kind| {
            let index = band_index(kind);
            self.band(kind, boundaries[index], boundaries[index + 1])
        });

        GaugeGeometry {
            bands,
            needle: self.needle(needle_angle(current_revenue, thresholds.gauge_max)),
            break_even_marker: self.marker(BREAK_EVEN_LABEL, thresholds.break_even, thresholds.gauge_max),
            goal_marker: self.marker(GOAL_LABEL, thresholds.goal, thresholds.gauge_max),
        }
    }

    fn band(&self, kind: BandKind, start_angle: f64, end_angle: f64) -> GaugeBand {
        GaugeBand {
            kind,
            start_angle,
            end_angle,
            arc: arc_path(&self.layout, start_angle, end_angle),
            label_position: band_label_position(&self.layout, start_angle, end_angle),
        }
    }

    fn needle(&self, angle: f64) -> NeedleGeometry {
        let layout = &self.layout;
        let length = layout.inner_radius + layout.needle_overlap;

        NeedleGeometry {
            angle,
            pivot: Point::new(layout.center_x, layout.center_y),
            base_radius: layout.needle_base_radius,
            tip: polar_point(layout, length, angle),
            base_left: polar_point(layout, layout.needle_base_radius, angle - 90.0),
            base_right: polar_point(layout, layout.needle_base_radius, angle + 90.0),
        }
    }

    fn marker(&self, label: &str, value: f64, gauge_max: f64) -> MarkerGeometry {
        let layout = &self.layout;
        let angle = value_to_angle(value, gauge_max);

        MarkerGeometry {
            label: label.to_string(),
            value,
            angle,
            tick_start: polar_point(layout, layout.outer_radius, angle),
            tick_end: polar_point(layout, layout.outer_radius + layout.marker_tick_length, angle),
            label_position: polar_point(layout, layout.outer_radius + layout.marker_label_offset, angle),
            text_anchor: marker_anchor(angle),
        }
    }
}

impl Default for GaugeService {
    fn default() -> Self {
        Self::new()
    }
}

fn band_index(kind: BandKind) -> usize {
    match kind {
        BandKind::Essencial => 0,
        BandKind::Necessario => 1,
        BandKind::Bom => 2,
        BandKind::Otimo => 3,
    }
}

/// Fraction of the gauge span a value represents, 0 when the span is not
/// positive. Not clamped.
pub fn value_fraction(value: f64, gauge_max: f64) -> f64 {
    if !(gauge_max.is_finite() && gauge_max > 0.0) {
        return 0.0;
    }
    let fraction = value / gauge_max;
    if fraction.is_finite() {
        fraction
    } else {
        0.0
    }
}

/// Angle for a value, unclamped (markers may fall outside 0..180)
pub fn value_to_angle(value: f64, gauge_max: f64) -> f64 {
    HALF_CIRCLE - value_fraction(value, gauge_max) * HALF_CIRCLE
}

/// Needle angle: revenue clamped to `0..=gauge_max`, so it never points past
/// either end of the gauge.
pub fn needle_angle(current_revenue: f64, gauge_max: f64) -> f64 {
    if !(gauge_max.is_finite() && gauge_max > 0.0) || current_revenue.is_nan() {
        return HALF_CIRCLE;
    }
    value_to_angle(current_revenue.clamp(0.0, gauge_max), gauge_max)
}

/// The five band boundaries from 180° down to 0°. The last band takes
/// whatever is left so the gauge always ends exactly at 0°.
pub fn band_boundaries(thresholds: &GaugeThresholds) -> [f64; 5] {
    if !thresholds.is_renderable() {
        return [HALF_CIRCLE; 5];
    }

    let fixed_angle = value_fraction(thresholds.fixed, thresholds.gauge_max) * HALF_CIRCLE;
    let variable_angle = value_fraction(thresholds.variable, thresholds.gauge_max) * HALF_CIRCLE;
    let pro_labore_angle = value_fraction(thresholds.pro_labore, thresholds.gauge_max) * HALF_CIRCLE;

    let fixed_end = HALF_CIRCLE - fixed_angle;
    let variable_end = fixed_end - variable_angle;
    let pro_labore_end = variable_end - pro_labore_angle;

    [HALF_CIRCLE, fixed_end, variable_end, pro_labore_end, 0.0]
}

/// Point at `radius` from the gauge centre along `angle_degrees`
pub fn polar_point(layout: &GaugeLayout, radius: f64, angle_degrees: f64) -> Point {
    let radians = (-angle_degrees).to_radians();
    Point::new(
        layout.center_x + radius * radians.cos(),
        layout.center_y + radius * radians.sin(),
    )
}

/// Annular sector between the inner and outer radius
pub fn arc_path(layout: &GaugeLayout, start_angle: f64, end_angle: f64) -> ArcPath {
    ArcPath {
        outer_start: polar_point(layout, layout.outer_radius, start_angle),
        outer_end: polar_point(layout, layout.outer_radius, end_angle),
        inner_end: polar_point(layout, layout.inner_radius, end_angle),
        inner_start: polar_point(layout, layout.inner_radius, start_angle),
        inner_radius: layout.inner_radius,
        outer_radius: layout.outer_radius,
        large_arc: start_angle - end_angle > HALF_CIRCLE,
    }
}

/// Midpoint of the band's span, halfway between the two radii
pub fn band_label_position(layout: &GaugeLayout, start_angle: f64, end_angle: f64) -> Point {
    let mid_angle = (start_angle + end_angle) / 2.0;
    let mid_radius = (layout.inner_radius + layout.outer_radius) / 2.0;
    polar_point(layout, mid_radius, mid_angle)
}

/// Labels on the left half end at the tick, labels on the right start there
pub fn marker_anchor(angle: f64) -> TextAnchor {
    if angle > 90.0 {
        TextAnchor::End
    } else {
        TextAnchor::Start
    }
}
