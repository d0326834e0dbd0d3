//! # Gauge Renderer
//!
//! Draws the gauge with egui's painting primitives: tessellated bands, white
//! separators, band labels, the two reference markers, the logo at the gauge
//! centre and the half-transparent needle on top.

use eframe::egui;
use shared::{BandKind, GaugeGeometry, GaugeLayout, MarkerGeometry, TextAnchor};

use super::transform::{annulus_quads, ViewBoxTransform};
use crate::ui::components::styling::hex_to_color32;

/// Configuration for gauge appearance, in view box units
#[derive(Debug, Clone)]
pub struct GaugeRenderConfig {
    /// Width of the white lines between bands
    pub separator_width: f32,
    pub band_label_font_size: f32,
    pub marker_font_size: f32,
    /// Bands narrower than this (degrees) get no label
    pub min_label_sweep: f64,
    /// Logo size relative to the inner radius
    pub logo_scale: f32,
    /// Needle opacity, 0-255
    pub needle_alpha: u8,
}

impl Default for GaugeRenderConfig {
    fn default() -> Self {
        Self {
            separator_width: 2.0,
            band_label_font_size: 12.0,
            marker_font_size: 12.0,
            min_label_sweep: 8.0,
            logo_scale: 1.2,
            needle_alpha: 128,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct GaugeRenderer {
    config: GaugeRenderConfig,
}

impl GaugeRenderer {
    pub fn new() -> Self {
        Self {
            config: GaugeRenderConfig::default(),
        }
    }

    /// Paint the gauge into the full available width, keeping the layout's aspect ratio
    pub fn render(&self, ui: &mut egui::Ui, gauge: &GaugeGeometry, layout: &GaugeLayout, logo_uri: Option<&str>) {
        let width = ui.available_width();
        let aspect = if layout.view_box_width > 0.0 {
            (layout.view_box_height / layout.view_box_width) as f32
        } else {
            0.6
        };
        let height = (width * aspect).min(ui.available_height().max(120.0));

        let (rect, _response) = ui.allocate_exact_size(egui::vec2(width, height), egui::Sense::hover());
        let transform = ViewBoxTransform::fit(layout, rect);
        let painter = ui.painter_at(rect);

        self.paint_bands(&painter, &transform, gauge, layout);
        self.paint_marker(&painter, &transform, &gauge.break_even_marker, egui::Color32::from_rgb(51, 51, 51), 2.0);
        self.paint_marker(
            &painter,
            &transform,
            &gauge.goal_marker,
            hex_to_color32(BandKind::Otimo.hex_color()),
            3.0,
        );

        if let Some(uri) = logo_uri {
            let side = transform.scale_length(layout.inner_radius) * self.config.logo_scale;
            let centre = transform.to_screen(shared::Point::new(layout.center_x, layout.center_y));
            let logo_rect = egui::Rect::from_center_size(centre - egui::vec2(0.0, side / 2.5), egui::vec2(side, side * 0.6));
            egui::Image::new(uri.to_string()).paint_at(ui, logo_rect);
        }

        self.paint_needle(&painter, &transform, gauge);
    }

    fn paint_bands(&self, painter: &egui::Painter, transform: &ViewBoxTransform, gauge: &GaugeGeometry, layout: &GaugeLayout) {
        for band in &gauge.bands {
            let color = hex_to_color32(band.kind.hex_color());
            for quad in annulus_quads(layout, band.start_angle, band.end_angle) {
                let points = quad.iter().map(|p| transform.to_screen(*p)).collect();
                painter.add(egui::Shape::convex_polygon(points, color, egui::Stroke::NONE));
            }
        }

        // Radial separators at every band boundary
        let separator = egui::Stroke::new(self.config.separator_width * transform.scale, egui::Color32::WHITE);
        for band in &gauge.bands {
            painter.line_segment(
                [transform.to_screen(band.arc.outer_start), transform.to_screen(band.arc.inner_start)],
                separator,
            );
        }

        let font = egui::FontId::proportional(self.config.band_label_font_size * transform.scale);
        for band in gauge.bands.iter().filter(|b| b.sweep() >= self.config.min_label_sweep) {
            painter.text(
                transform.to_screen(band.label_position),
                egui::Align2::CENTER_CENTER,
                band.kind.label(),
                font.clone(),
                egui::Color32::WHITE,
            );
        }
    }

    fn paint_marker(
        &self,
        painter: &egui::Painter,
        transform: &ViewBoxTransform,
        marker: &MarkerGeometry,
        color: egui::Color32,
        width: f32,
    ) {
        painter.line_segment(
            [transform.to_screen(marker.tick_start), transform.to_screen(marker.tick_end)],
            egui::Stroke::new(width * transform.scale, color),
        );
        painter.text(
            transform.to_screen(marker.label_position),
            anchor_align(marker.text_anchor),
            marker.label.to_uppercase(),
            egui::FontId::proportional(self.config.marker_font_size * transform.scale),
            color,
        );
    }

    fn paint_needle(&self, painter: &egui::Painter, transform: &ViewBoxTransform, gauge: &GaugeGeometry) {
        let needle = &gauge.needle;
        let color = egui::Color32::from_rgba_unmultiplied(30, 41, 59, self.config.needle_alpha);

        let triangle = vec![
            transform.to_screen(needle.base_left),
            transform.to_screen(needle.tip),
            transform.to_screen(needle.base_right),
        ];
        painter.add(egui::Shape::convex_polygon(triangle, color, egui::Stroke::NONE));
        painter.circle_filled(
            transform.to_screen(needle.pivot),
            transform.scale_length(needle.base_radius),
            color,
        );
    }
}

/// Screen alignment matching the SVG `text-anchor` of a marker label
pub fn anchor_align(anchor: TextAnchor) -> egui::Align2 {
    match anchor {
        TextAnchor::Start => egui::Align2::LEFT_CENTER,
        TextAnchor::Middle => egui::Align2::CENTER_CENTER,
        TextAnchor::End => egui::Align2::RIGHT_CENTER,
    }
}
