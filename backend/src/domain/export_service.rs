//! Export service for the dashboard.
//!
//! Renders the gauge as a standalone SVG document from the computed geometry
//! and writes the month's sales as CSV. Files land in the configured export
//! directory, named after the reference month.

use anyhow::{Context, Result};
use log::info;
use shared::{fmt_coord, DailySale, DashboardSnapshot, GaugeLayout, MarkerGeometry, Point};
use std::fs;
use std::path::{Path, PathBuf};

use super::formatting::format_brl;

const NEEDLE_COLOR: &str = "#1e293b";
const BREAK_EVEN_COLOR: &str = "#333333";
const GOAL_COLOR: &str = "#22c55e";

#[derive(Debug, Clone)]
pub struct ExportService {
    export_directory: PathBuf,
}

impl ExportService {
    pub fn new(export_directory: PathBuf) -> Self {
        Self { export_directory }
    }

    pub fn export_directory(&self) -> &Path {
        &self.export_directory
    }

    /// Render the gauge as an SVG document sized to the layout's view box
    pub fn render_gauge_svg(&self, snapshot: &DashboardSnapshot, layout: &GaugeLayout) -> String {
        let gauge = &snapshot.gauge;
        let mut svg = String::new();

        svg.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n",
            w = fmt_coord(layout.view_box_width),
            h = fmt_coord(layout.view_box_height),
        ));

        for band in &gauge.bands {
            svg.push_str(&format!(
                "  <path d=\"{}\" fill=\"{}\" stroke=\"white\" stroke-width=\"2\"/>\n",
                band.arc.svg_path_data(),
                band.kind.hex_color()
            ));
        }

        for band in &gauge.bands {
            svg.push_str(&format!(
                "  <text x=\"{}\" y=\"{}\" text-anchor=\"middle\" dominant-baseline=\"middle\" fill=\"white\" font-size=\"12\" font-weight=\"bold\">{}</text>\n",
                fmt_coord(band.label_position.x),
                fmt_coord(band.label_position.y),
                band.kind.label()
            ));
        }

        svg.push_str(&marker_svg(&gauge.break_even_marker, BREAK_EVEN_COLOR, 2));
        svg.push_str(&marker_svg(&gauge.goal_marker, GOAL_COLOR, 3));

        let needle = &gauge.needle;
        svg.push_str("  <g opacity=\"0.5\">\n");
        svg.push_str(&format!(
            "    <circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\"/>\n",
            fmt_coord(needle.pivot.x),
            fmt_coord(needle.pivot.y),
            fmt_coord(needle.base_radius),
            NEEDLE_COLOR
        ));
        svg.push_str(&format!(
            "    <path d=\"M {} L {} L {} Z\" fill=\"{}\"/>\n",
            point_pair(needle.base_left),
            point_pair(needle.tip),
            point_pair(needle.base_right),
            NEEDLE_COLOR
        ));
        svg.push_str("  </g>\n");

        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" text-anchor=\"middle\" fill=\"{}\" font-size=\"16\" font-weight=\"bold\">{} · {}</text>\n",
            fmt_coord(layout.center_x),
            fmt_coord(layout.view_box_height - 10.0),
            snapshot.status.level.hex_color(),
            snapshot.status.label,
            format_brl(snapshot.summary.total_revenue)
        ));

        svg.push_str("</svg>\n");
        svg
    }

    /// Write the gauge SVG as `gauge-<month>.svg`
    pub fn export_gauge_svg(&self, reference_month: &str, snapshot: &DashboardSnapshot, layout: &GaugeLayout) -> Result<PathBuf> {
        let path = self.export_directory.join(format!("gauge-{}.svg", reference_month));
        self.write_file(&path, self.render_gauge_svg(snapshot, layout).as_bytes())?;
        info!("🖼️ EXPORT: Gauge written to {}", path.display());
        Ok(path)
    }

    /// Sales as CSV with columns `id,dia,valor`
    pub fn render_sales_csv(&self, sales: &[DailySale]) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(["id", "dia", "valor"])?;
        for sale in sales {
            writer.write_record([sale.id.clone(), sale.day.to_string(), format!("{:.2}", sale.value)])?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| anyhow::anyhow!("Failed to flush CSV writer: {}", e.error()))?;
        String::from_utf8(bytes).context("CSV output is not valid UTF-8")
    }

    /// Write the month's sales as `vendas-<month>.csv`
    pub fn export_sales_csv(&self, reference_month: &str, sales: &[DailySale]) -> Result<PathBuf> {
        let path = self.export_directory.join(format!("vendas-{}.csv", reference_month));
        let content = self.render_sales_csv(sales)?;
        self.write_file(&path, content.as_bytes())?;
        info!("📄 EXPORT: {} sales written to {}", sales.len(), path.display());
        Ok(path)
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> Result<()> {
        fs::create_dir_all(&self.export_directory).with_context(|| {
            format!("Failed to create export directory {}", self.export_directory.display())
        })?;
        fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
    }
}

fn point_pair(point: Point) -> String {
    format!("{} {}", fmt_coord(point.x), fmt_coord(point.y))
}

fn marker_svg(marker: &MarkerGeometry, color: &str, stroke_width: u32) -> String {
    format!(
        "  <line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>\n  <text x=\"{}\" y=\"{}\" text-anchor=\"{}\" dominant-baseline=\"middle\" fill=\"{}\" font-size=\"12\" font-weight=\"bold\">{}</text>\n",
        fmt_coord(marker.tick_start.x),
        fmt_coord(marker.tick_start.y),
        fmt_coord(marker.tick_end.x),
        fmt_coord(marker.tick_end.y),
        color,
        stroke_width,
        fmt_coord(marker.label_position.x),
        fmt_coord(marker.label_position.y),
        marker.text_anchor.as_svg(),
        color,
        marker.label.to_uppercase()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dashboard_service::DashboardService;
    use shared::FinancialPremises;

    fn snapshot(goal: f64, sales: &[DailySale]) -> DashboardSnapshot {
        let premises = FinancialPremises {
            reference_month: "2024-01".to_string(),
            monthly_revenue_goal: goal,
            ..FinancialPremises::default()
        };
        DashboardService::default().build_snapshot(&premises, sales)
    }

    #[test]
    fn test_render_gauge_svg_contents() {
        let service = ExportService::new(PathBuf::from("."));
        let snapshot = snapshot(100_000.0, &[DailySale::new(1, 80_000.0)]);
        let svg = service.render_gauge_svg(&snapshot, &GaugeLayout::default());

        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"600\" height=\"350\""));
        assert_eq!(svg.matches("<path d=\"M ").count(), 5);
        assert!(svg.contains("fill=\"#ef4444\""));
        assert!(svg.contains("fill=\"#22c55e\""));
        assert!(svg.contains(">NECESSÁRIO</text>"));
        assert!(svg.contains(">PONTO DE EQUILÍBRIO</text>"));
        assert!(svg.contains(">META</text>"));
        assert!(svg.contains("QUASE LÁ (LUCRO) · R$ 80.000,00"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_render_gauge_svg_zero_goal_has_no_nan() {
        let service = ExportService::new(PathBuf::from("."));
        let svg = service.render_gauge_svg(&snapshot(0.0, &[]), &GaugeLayout::default());
        assert!(!svg.contains("NaN"));
        assert!(!svg.contains("inf"));
    }

    #[test]
    fn test_render_sales_csv() {
        let service = ExportService::new(PathBuf::from("."));
        let sales = vec![
            DailySale { id: "a".to_string(), day: 1, value: 1500.0 },
            DailySale { id: "b".to_string(), day: 3, value: -20.5 },
        ];
        let csv = service.render_sales_csv(&sales).unwrap();
        assert_eq!(csv, "id,dia,valor\na,1,1500.00\nb,3,-20.50\n");
    }

    #[test]
    fn test_export_files_are_written() {
        let temp_dir = tempfile::tempdir().unwrap();
        let export_dir = temp_dir.path().join("exports");
        let service = ExportService::new(export_dir.clone());
        let sales = vec![DailySale::new(2, 1_000.0)];

        let csv_path = service.export_sales_csv("2024-03", &sales).unwrap();
        assert_eq!(csv_path, export_dir.join("vendas-2024-03.csv"));
        let content = fs::read_to_string(&csv_path).unwrap();
        assert!(content.starts_with("id,dia,valor\n"));
        assert!(content.contains(",2,1000.00"));

        let svg_path = service
            .export_gauge_svg("2024-03", &snapshot(100_000.0, &sales), &GaugeLayout::default())
            .unwrap();
        assert_eq!(svg_path, export_dir.join("gauge-2024-03.svg"));
        assert!(fs::read_to_string(svg_path).unwrap().contains("<svg"));
    }
}
