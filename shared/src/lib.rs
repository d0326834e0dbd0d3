use serde::{Deserialize, Serialize};
use std::fmt;

/// Share of the revenue goal covered by the gauge (125%)
pub const GAUGE_HEADROOM_FACTOR: f64 = 1.25;

/// Financial premises for one reference month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialPremises {
    /// Reference month in "YYYY-MM" format
    pub reference_month: String,
    /// Essencial: fixed costs as % of the revenue goal
    pub fixed_cost_pct: f64,
    /// Necessário: variable costs as % of the revenue goal
    pub variable_cost_pct: f64,
    /// Bom: partners' pro-labore as % of the revenue goal
    pub pro_labore_pct: f64,
    /// Meta: profit the company aims for, as % of the revenue goal
    pub profit_goal_pct: f64,
    /// Monthly revenue goal in R$
    pub monthly_revenue_goal: f64,
}

impl Default for FinancialPremises {
    fn default() -> Self {
        Self {
            reference_month: chrono::Local::now().format("%Y-%m").to_string(),
            fixed_cost_pct: 25.0,
            variable_cost_pct: 45.0,
            pro_labore_pct: 10.0,
            profit_goal_pct: 20.0,
            monthly_revenue_goal: 100_000.0,
        }
    }
}

/// A single day's sale entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySale {
    pub id: String,
    /// Day of the month (1-31, not checked against the month length)
    pub day: u32,
    /// Sale value in R$ (may be zero or negative)
    pub value: f64,
}

impl DailySale {
    /// Create a sale with a freshly generated id
    pub fn new(day: u32, value: f64) -> Self {
        Self {
            id: Self::generate_id(),
            day,
            value,
        }
    }

    pub fn generate_id() -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

/// Absolute currency thresholds derived from the premises
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GaugeThresholds {
    pub fixed: f64,
    pub variable: f64,
    pub pro_labore: f64,
    /// fixed + variable + pro_labore
    pub break_even: f64,
    /// The monthly revenue goal (100% reference)
    pub goal: f64,
    /// goal × 1.25
    pub gauge_max: f64,
    /// goal × profit_goal_pct / 100, informational only
    pub profit_target: f64,
}

impl GaugeThresholds {
    /// Upper bound of the NECESSÁRIO zone
    pub fn variable_cutoff(&self) -> f64 {
        self.fixed + self.variable
    }

    /// A gauge can only be drawn proportionally when its span is positive
    pub fn is_renderable(&self) -> bool {
        self.gauge_max.is_finite() && self.gauge_max > 0.0
    }
}

/// Discrete status of the accumulated revenue, worst to best
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StatusLevel {
    Essencial,
    Necessario,
    Bom,
    QuaseLa,
    Otimo,
}

impl StatusLevel {
    pub fn label(&self) -> &'static str {
        match self {
            StatusLevel::Essencial => "ESSENCIAL",
            StatusLevel::Necessario => "NECESSÁRIO",
            StatusLevel::Bom => "BOM",
            StatusLevel::QuaseLa => "QUASE LÁ (LUCRO)",
            StatusLevel::Otimo => "ÓTIMO (META ATINGIDA)",
        }
    }

    /// 0 (worst) to 4 (best)
    pub fn severity(&self) -> u8 {
        match self {
            StatusLevel::Essencial => 0,
            StatusLevel::Necessario => 1,
            StatusLevel::Bom => 2,
            StatusLevel::QuaseLa => 3,
            StatusLevel::Otimo => 4,
        }
    }

    /// Display colour as a hex string
    pub fn hex_color(&self) -> &'static str {
        match self {
            StatusLevel::Essencial => "#ef4444",
            StatusLevel::Necessario => "#ca8a04",
            StatusLevel::Bom => "#2563eb",
            StatusLevel::QuaseLa => "#22c55e",
            StatusLevel::Otimo => "#15803d",
        }
    }
}

impl fmt::Display for StatusLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Status classification result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStatus {
    pub level: StatusLevel,
    pub label: String,
    pub severity: u8,
}

impl From<StatusLevel> for DashboardStatus {
    fn from(level: StatusLevel) -> Self {
        Self {
            level,
            label: level.label().to_string(),
            severity: level.severity(),
        }
    }
}

/// One of the four angular segments of the gauge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BandKind {
    /// Fixed costs
    Essencial,
    /// Variable costs
    Necessario,
    /// Pro-labore
    Bom,
    /// Whatever remains up to the gauge maximum
    Otimo,
}

impl BandKind {
    pub const ALL: [BandKind; 4] = [
        BandKind::Essencial,
        BandKind::Necessario,
        BandKind::Bom,
        BandKind::Otimo,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            BandKind::Essencial => "ESSENCIAL",
            BandKind::Necessario => "NECESSÁRIO",
            BandKind::Bom => "BOM",
            BandKind::Otimo => "ÓTIMO",
        }
    }

    pub fn hex_color(&self) -> &'static str {
        match self {
            BandKind::Essencial => "#ef4444", // red-500
            BandKind::Necessario => "#eab308", // yellow-500
            BandKind::Bom => "#3b82f6", // blue-500
            BandKind::Otimo => "#22c55e", // green-500
        }
    }
}

/// Point in the gauge's y-down drawing frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Horizontal text anchoring for labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

impl TextAnchor {
    pub fn as_svg(&self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

/// Annular sector: outer arc from `outer_start` to `outer_end`, radial line
/// inward, inner arc back to `inner_start`, closed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcPath {
    pub outer_start: Point,
    pub outer_end: Point,
    pub inner_end: Point,
    pub inner_start: Point,
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub large_arc: bool,
}

impl ArcPath {
    /// SVG path data (`d` attribute) for the sector
    pub fn svg_path_data(&self) -> String {
        let large_arc = if self.large_arc { 1 } else { 0 };
        format!(
            "M {} {} A {} {} 0 {} 1 {} {} L {} {} A {} {} 0 {} 0 {} {} Z",
            fmt_coord(self.outer_start.x),
            fmt_coord(self.outer_start.y),
            fmt_coord(self.outer_radius),
            fmt_coord(self.outer_radius),
            large_arc,
            fmt_coord(self.outer_end.x),
            fmt_coord(self.outer_end.y),
            fmt_coord(self.inner_end.x),
            fmt_coord(self.inner_end.y),
            fmt_coord(self.inner_radius),
            fmt_coord(self.inner_radius),
            large_arc,
            fmt_coord(self.inner_start.x),
            fmt_coord(self.inner_start.y),
        )
    }
}

/// Format a coordinate with at most 3 decimals and no trailing zeros
pub fn fmt_coord(value: f64) -> String {
    let formatted = format!("{:.3}", value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" | "" => "0".to_string(),
        other => other.to_string(),
    }
}

/// A gauge band with its angular span in degrees (180 = left, 0 = right)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GaugeBand {
    pub kind: BandKind,
    pub start_angle: f64,
    pub end_angle: f64,
    pub arc: ArcPath,
    pub label_position: Point,
}

impl GaugeBand {
    /// Angular width of the band in degrees
    pub fn sweep(&self) -> f64 {
        self.start_angle - self.end_angle
    }
}

/// Needle drawn as a triangle from its base to the tip
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NeedleGeometry {
    pub angle: f64,
    pub pivot: Point,
    pub base_radius: f64,
    pub tip: Point,
    pub base_left: Point,
    pub base_right: Point,
}

/// Radial tick plus label for a threshold (break-even, goal)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerGeometry {
    pub label: String,
    pub value: f64,
    pub angle: f64,
    pub tick_start: Point,
    pub tick_end: Point,
    pub label_position: Point,
    pub text_anchor: TextAnchor,
}

/// Complete gauge geometry for one set of inputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaugeGeometry {
    pub bands: [GaugeBand; 4],
    pub needle: NeedleGeometry,
    pub break_even_marker: MarkerGeometry,
    pub goal_marker: MarkerGeometry,
}

/// Drawing frame and dimensions of the gauge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaugeLayout {
    pub view_box_width: f64,
    pub view_box_height: f64,
    pub center_x: f64,
    pub center_y: f64,
    pub inner_radius: f64,
    pub outer_radius: f64,
    /// Length of the radial marker ticks beyond the outer radius
    pub marker_tick_length: f64,
    /// Distance of marker labels beyond the outer radius
    pub marker_label_offset: f64,
    /// How far the needle reaches past the inner radius
    pub needle_overlap: f64,
    pub needle_base_radius: f64,
}

impl Default for GaugeLayout {
    fn default() -> Self {
        Self {
            view_box_width: 600.0,
            view_box_height: 350.0,
            center_x: 300.0,
            center_y: 260.0,
            inner_radius: 120.0,
            outer_radius: 220.0,
            marker_tick_length: 15.0,
            marker_label_offset: 25.0,
            needle_overlap: 20.0,
            needle_base_radius: 15.0,
        }
    }
}

/// Aggregates over the current month's sales
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SalesSummary {
    pub total_revenue: f64,
    pub daily_average: f64,
    /// Number of recorded entries
    pub days_worked: usize,
}

/// Everything the dashboard renders for one set of inputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub thresholds: GaugeThresholds,
    pub status: DashboardStatus,
    pub gauge: GaugeGeometry,
    pub summary: SalesSummary,
}

/// Result of validating the daily sale form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleFormValidation {
    pub is_valid: bool,
    pub errors: Vec<SaleValidationError>,
    pub cleaned_day: Option<u32>,
    pub cleaned_value: Option<f64>,
}

/// Specific validation errors for the daily sale form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
pub enum SaleValidationError {
    #[error("Informe o dia da venda")]
    EmptyDay,
    #[error("Dia inválido: {0}")]
    InvalidDay(String),
    #[error("O dia deve estar entre 1 e 31 (recebido {0})")]
    DayOutOfRange(i64),
    #[error("Informe o valor da venda")]
    EmptyValue,
    #[error("Valor inválido: {0}")]
    InvalidValueFormat(String),
    #[error("O valor da venda precisa ser um número finito")]
    NonFiniteValue,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_premises() {
        let premises = FinancialPremises::default();
        assert_eq!(premises.reference_month.len(), 7);
        assert_eq!(&premises.reference_month[4..5], "-");
        assert_eq!(premises.fixed_cost_pct, 25.0);
        assert_eq!(premises.variable_cost_pct, 45.0);
        assert_eq!(premises.pro_labore_pct, 10.0);
        assert_eq!(premises.profit_goal_pct, 20.0);
        assert_eq!(premises.monthly_revenue_goal, 100_000.0);
    }

    #[test]
    fn test_daily_sale_ids_are_unique() {
        let a = DailySale::new(1, 10.0);
        let b = DailySale::new(1, 10.0);
        assert_ne!(a.id, b.id);
        assert!(uuid::Uuid::parse_str(&a.id).is_ok());
    }

    #[test]
    fn test_status_levels_are_ordered_by_severity() {
        let levels = [
            StatusLevel::Essencial,
            StatusLevel::Necessario,
            StatusLevel::Bom,
            StatusLevel::QuaseLa,
            StatusLevel::Otimo,
        ];
        for (index, level) in levels.iter().enumerate() {
            assert_eq!(level.severity() as usize, index);
        }
        assert!(StatusLevel::Essencial < StatusLevel::Otimo);
        assert_eq!(DashboardStatus::from(StatusLevel::QuaseLa).label, "QUASE LÁ (LUCRO)");
    }

    #[test]
    fn test_status_serializes_with_level_and_label() {
        let status = DashboardStatus::from(StatusLevel::Bom);
        let json = serde_json::to_value(&status).unwrap();
        assert_eq!(json["level"], "Bom");
        assert_eq!(json["label"], "BOM");
        assert_eq!(json["severity"], 2);
    }

    #[test]
    fn test_fmt_coord() {
        assert_eq!(fmt_coord(300.0), "300");
        assert_eq!(fmt_coord(80.5), "80.5");
        assert_eq!(fmt_coord(1.23456), "1.235");
        assert_eq!(fmt_coord(-0.0001), "0");
        assert_eq!(fmt_coord(-12.25), "-12.25");
    }

    #[test]
    fn test_svg_path_data_layout() {
        let arc = ArcPath {
            outer_start: Point::new(80.0, 260.0),
            outer_end: Point::new(300.0, 40.0),
            inner_end: Point::new(300.0, 140.0),
            inner_start: Point::new(180.0, 260.0),
            inner_radius: 120.0,
            outer_radius: 220.0,
            large_arc: false,
        };
        assert_eq!(
            arc.svg_path_data(),
            "M 80 260 A 220 220 0 0 1 300 40 L 300 140 A 120 120 0 0 0 180 260 Z"
        );
    }

    #[test]
    fn test_thresholds_helpers() {
        let thresholds = GaugeThresholds {
            fixed: 25.0,
            variable: 45.0,
            pro_labore: 10.0,
            break_even: 80.0,
            goal: 100.0,
            gauge_max: 125.0,
            profit_target: 20.0,
        };
        assert_eq!(thresholds.variable_cutoff(), 70.0);
        assert!(thresholds.is_renderable());

        let empty = GaugeThresholds { gauge_max: 0.0, ..thresholds };
        assert!(!empty.is_renderable());
    }

    #[test]
    fn test_sale_validation_error_messages() {
        assert_eq!(
            SaleValidationError::DayOutOfRange(40).to_string(),
            "O dia deve estar entre 1 e 31 (recebido 40)"
        );
        assert_eq!(SaleValidationError::EmptyValue.to_string(), "Informe o valor da venda");
    }
}
