//! View box mapping and band tessellation.
//!
//! egui has no arc primitive, so each band is split into thin annular
//! slices. Every slice is a convex quad and can be filled directly with
//! `Shape::convex_polygon`.

use backend::polar_point;
use eframe::egui;
use shared::{GaugeLayout, Point};

/// Maximum angular width of one tessellated slice, in degrees
pub const SLICE_DEGREES: f64 = 2.0;

const FULL_TURN: f64 = 360.0;

/// Uniform scale + offset that fits the layout's view box inside a rect
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBoxTransform {
    pub scale: f32,
    pub offset: egui::Vec2,
}

impl ViewBoxTransform {
    /// Fit the view box into `rect`, keeping its aspect ratio and centring it
    pub fn fit(layout: &GaugeLayout, rect: egui::Rect) -> Self {
        let view_width = layout.view_box_width as f32;
        let view_height = layout.view_box_height as f32;

        let scale = if view_width > 0.0 && view_height > 0.0 {
            (rect.width() / view_width).min(rect.height() / view_height)
        } else {
            1.0
        };

        let offset = rect.center().to_vec2() - egui::vec2(view_width, view_height) * scale / 2.0;
        Self { scale, offset }
    }

    pub fn to_screen(&self, point: Point) -> egui::Pos2 {
        egui::pos2(
            point.x as f32 * self.scale + self.offset.x,
            point.y as f32 * self.scale + self.offset.y,
        )
    }

    pub fn scale_length(&self, length: f64) -> f32 {
        length as f32 * self.scale
    }
}

/// Slices of the ring between two angles, as [outer a, outer b, inner b, inner a]
///
/// Sweeps beyond one full turn are cut to a full turn; the ring is already
/// covered and the slice count stays bounded.
pub fn annulus_quads(layout: &GaugeLayout, start_angle: f64, end_angle: f64) -> Vec<[Point; 4]> {
    let raw_sweep = end_angle - start_angle;
    if !raw_sweep.is_finite() || raw_sweep.abs() < f64::EPSILON {
        return Vec::new();
    }

    let sweep = raw_sweep.clamp(-FULL_TURN, FULL_TURN);
    let end_angle = if sweep == raw_sweep { end_angle } else { start_angle + sweep };

    let slices = (sweep.abs() / SLICE_DEGREES).ceil().max(1.0) as usize;
    let step = sweep / slices as f64;

    let angle_at = |i: usize| if i == slices { end_angle } else { start_angle + step * i as f64 };

    (0..slices)
        .map(|i| {
            let (a, b) = (angle_at(i), angle_at(i + 1));
            [
                polar_point(layout, layout.outer_radius, a),
                polar_point(layout, layout.outer_radius, b),
                polar_point(layout, layout.inner_radius, b),
                polar_point(layout, layout.inner_radius, a),
            ]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_fit_centres_view_box_in_wide_rect() {
        let layout = GaugeLayout::default();
        let rect = egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(1200.0, 350.0));
        let transform = ViewBoxTransform::fit(&layout, rect);

        assert_eq!(transform.scale, 1.0);
        assert_eq!(transform.to_screen(Point::new(0.0, 0.0)), egui::pos2(300.0, 0.0));
        assert_eq!(transform.to_screen(Point::new(600.0, 350.0)), egui::pos2(900.0, 350.0));
    }

    #[test]
    fn test_fit_scales_down_to_narrow_rect() {
        let layout = GaugeLayout::default();
        let rect = egui::Rect::from_min_size(egui::pos2(10.0, 20.0), egui::vec2(300.0, 1000.0));
        let transform = ViewBoxTransform::fit(&layout, rect);

        assert_eq!(transform.scale, 0.5);
        assert_eq!(transform.scale_length(220.0), 110.0);
        let top_left = transform.to_screen(Point::new(0.0, 0.0));
        assert_eq!(top_left.x, 10.0);
        assert_eq!(top_left.y, 20.0 + (1000.0 - 175.0) / 2.0);
    }

    #[test]
    fn test_annulus_quads_cover_the_band() {
        let layout = GaugeLayout::default();
        let quads = annulus_quads(&layout, 180.0, 144.0);
        assert_eq!(quads.len(), 18);

        let first = quads[0];
        assert!(close(first[0].x, 80.0) && close(first[0].y, 260.0));
        assert!(close(first[3].x, 180.0) && close(first[3].y, 260.0));

        let expected_end = polar_point(&layout, layout.outer_radius, 144.0);
        let last = quads[quads.len() - 1];
        assert_eq!(last[1], expected_end);

        // Consecutive slices share their edge
        for pair in quads.windows(2) {
            assert_eq!(pair[0][1], pair[1][0]);
            assert_eq!(pair[0][2], pair[1][3]);
        }
    }

    #[test]
    fn test_annulus_quads_empty_for_zero_sweep() {
        let layout = GaugeLayout::default();
        assert!(annulus_quads(&layout, 180.0, 180.0).is_empty());
        assert!(annulus_quads(&layout, f64::NAN, 0.0).is_empty());
    }

    #[test]
    fn test_annulus_quads_bounded_for_huge_sweeps() {
        let layout = GaugeLayout::default();
        let quads = annulus_quads(&layout, 180.0, -1e9);
        assert_eq!(quads.len(), 180);
        assert_eq!(quads[quads.len() - 1][1], polar_point(&layout, layout.outer_radius, -180.0));
        assert_eq!(annulus_quads(&layout, -1e12, 1e12).len(), 180);
    }

    #[test]
    fn test_huge_percentage_gauge_tessellates_in_bounded_slices() {
        let premises = shared::FinancialPremises {
            reference_month: "2024-01".to_string(),
            fixed_cost_pct: 1e6,
            monthly_revenue_goal: 100_000.0,
            ..shared::FinancialPremises::default()
        };
        let snapshot = backend::DashboardService::default().build_snapshot(&premises, &[]);
        let layout = GaugeLayout::default();

        let total: usize = snapshot
            .gauge
            .bands
            .iter()
            .map(|band| annulus_quads(&layout, band.start_angle, band.end_angle).len())
            .sum();
        assert!(total <= 4 * 180, "{total} slices for one frame");
    }

    #[test]
    fn test_annulus_quads_small_sweep_is_one_slice() {
        let layout = GaugeLayout::default();
        assert_eq!(annulus_quads(&layout, 1.5, 0.0).len(), 1);
    }
}
