//! # App State Module
//!
//! This module defines the central application state and every action the
//! panels trigger on it.
//!
//! ## Key Types:
//! - `SalesDashboardApp` - Main application state struct
//!
//! ## State Management:
//! Business data lives in the backend `DashboardSession`. This struct only adds
//! the raw text of the form inputs and the user feedback messages. The
//! dashboard snapshot is rebuilt from the session on every frame, so nothing
//! derived is ever cached here.

use anyhow::{bail, Context, Result};
use backend::{Backend, DashboardSession};
use log::{info, warn};
use shared::{DashboardSnapshot, FinancialPremises};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::ui::components::gauge::GaugeRenderer;

const LOGO_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// How long an error or success message stays visible
pub const MESSAGE_TIMEOUT: Duration = Duration::from_secs(5);

/// Main application struct for the egui sales dashboard
pub struct SalesDashboardApp {
    pub backend: Backend,
    pub session: DashboardSession,
    pub gauge_renderer: GaugeRenderer,

    // Form states
    pub month_input: String,
    pub sale_day_input: String,
    pub sale_value_input: String,
    pub logo_path_input: String,

    // UI state
    pub error_message: Option<String>,
    pub success_message: Option<String>,
    pub message_shown_at: Option<Instant>,
}

impl SalesDashboardApp {
    /// Create the app, loading configuration and installing image loaders
    pub fn new(cc: &eframe::CreationContext<'_>) -> Result<Self> {
        info!("🚀 Initializing SalesDashboardApp");

        // Image loaders for the logo
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let backend = Backend::new()?;
        Ok(Self::with_backend(backend))
    }

    pub fn with_backend(backend: Backend) -> Self {
        let session = backend.new_session();
        let gauge_renderer = GaugeRenderer::new();
        let month_input = session.premises().reference_month.clone();
        let sale_day_input = backend.sales_service.next_suggested_day(session.sales()).to_string();

        Self {
            backend,
            session,
            gauge_renderer,
            month_input,
            sale_day_input,
            sale_value_input: String::new(),
            logo_path_input: String::new(),
            error_message: None,
            success_message: None,
            message_shown_at: None,
        }
    }

    /// Current dashboard state derived from the session
    pub fn snapshot(&self) -> DashboardSnapshot {
        self.backend
            .dashboard_service
            .build_snapshot(self.session.premises(), self.session.sales())
    }

    /// Validate and apply edited premises; a month change swaps the sale list
    pub fn apply_premises(&mut self, premises: FinancialPremises) {
        if let Err(e) = self.backend.premises_service.validate_premises(&premises) {
            warn!("❌ Rejected premises: {}", e);
            self.set_error(e.to_string());
            self.month_input = self.session.premises().reference_month.clone();
            return;
        }

        if self.session.update_premises(premises) {
            self.month_input = self.session.premises().reference_month.clone();
            self.refresh_suggested_day();
            self.set_success(format!("Mês de referência: {}", self.month_input));
        }
    }

    /// Apply whatever is typed in the month field
    pub fn commit_month_input(&mut self) {
        let month = self.month_input.trim().to_string();
        if month == self.session.premises().reference_month {
            return;
        }

        let mut premises = self.session.premises().clone();
        premises.reference_month = month;
        self.apply_premises(premises);
    }

    /// Move the reference month back or forward
    pub fn shift_month(&mut self, delta: i32) {
        let current = self.session.premises().reference_month.clone();
        match self.backend.premises_service.shift_month(&current, delta) {
            Ok(month) => {
                let mut premises = self.session.premises().clone();
                premises.reference_month = month;
                self.apply_premises(premises);
            }
            Err(e) => self.set_error(e.to_string()),
        }
    }

    /// Validate the sale form and add the entry
    pub fn submit_sale(&mut self) {
        let validation = self
            .backend
            .sales_service
            .validate_sale_form(&self.sale_day_input, &self.sale_value_input);

        match (validation.cleaned_day, validation.cleaned_value) {
            (Some(day), Some(value)) if validation.is_valid => {
                self.session.add_sale(&self.backend.sales_service, day, value);
                self.sale_value_input.clear();
                self.refresh_suggested_day();
                self.clear_messages();
            }
            _ => {
                let message = self
                    .backend
                    .sales_service
                    .get_first_error_message(&validation)
                    .unwrap_or_else(|| "Venda inválida".to_string());
                self.set_error(message);
            }
        }
    }

    pub fn remove_sale(&mut self, sale_id: &str) {
        self.session.remove_sale(&self.backend.sales_service, sale_id);
        self.refresh_suggested_day();
    }

    /// Use the typed path as the logo; an empty field removes it
    pub fn load_logo(&mut self) {
        if self.logo_path_input.trim().is_empty() {
            self.session.set_logo_path(None);
            return;
        }

        match validate_logo_path(&self.logo_path_input) {
            Ok(path) => {
                info!("🖼️ Logo set to {}", path.display());
                self.session.set_logo_path(Some(path));
                self.set_success("Logo carregado".to_string());
            }
            Err(e) => self.set_error(format!("{:#}", e)),
        }
    }

    /// URI of the current logo for the egui image loaders
    pub fn logo_uri(&self) -> Option<String> {
        self.session.logo_path().map(logo_uri)
    }

    pub fn export_gauge(&mut self) {
        let snapshot = self.snapshot();
        let month = self.session.premises().reference_month.clone();
        let layout = self.backend.dashboard_service.gauge_layout().clone();

        match self.backend.export_service.export_gauge_svg(&month, &snapshot, &layout) {
            Ok(path) => self.set_success(format!("Gráfico exportado para {}", path.display())),
            Err(e) => self.set_error(format!("Falha ao exportar o gráfico: {:#}", e)),
        }
    }

    pub fn export_sales(&mut self) {
        let month = self.session.premises().reference_month.clone();

        match self.backend.export_service.export_sales_csv(&month, self.session.sales()) {
            Ok(path) => self.set_success(format!("Vendas exportadas para {}", path.display())),
            Err(e) => self.set_error(format!("Falha ao exportar as vendas: {:#}", e)),
        }
    }

    fn refresh_suggested_day(&mut self) {
        self.sale_day_input = self
            .backend
            .sales_service
            .next_suggested_day(self.session.sales())
            .to_string();
    }

    /// Clear any error or success messages
    pub fn clear_messages(&mut self) {
        self.error_message = None;
        self.success_message = None;
        self.message_shown_at = None;
    }

    pub fn set_error(&mut self, message: String) {
        self.success_message = None;
        self.error_message = Some(message);
        self.message_shown_at = Some(Instant::now());
    }

    pub fn set_success(&mut self, message: String) {
        self.error_message = None;
        self.success_message = Some(message);
        self.message_shown_at = Some(Instant::now());
    }

    /// Time left before the current message expires; clears it once expired
    pub fn expire_messages(&mut self, now: Instant) -> Option<Duration> {
        let shown_at = self.message_shown_at?;
        let elapsed = now.saturating_duration_since(shown_at);
        if elapsed >= MESSAGE_TIMEOUT {
            self.clear_messages();
            None
        } else {
            Some(MESSAGE_TIMEOUT - elapsed)
        }
    }
}

/// Check that the path points at an existing PNG or JPEG file
pub fn validate_logo_path(input: &str) -> Result<PathBuf> {
    let path = PathBuf::from(input.trim());

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_default();
    if !LOGO_EXTENSIONS.contains(&extension.as_str()) {
        bail!("O logo deve ser um arquivo PNG ou JPEG");
    }

    let metadata = std::fs::metadata(&path)
        .with_context(|| format!("Arquivo de logo não encontrado: {}", path.display()))?;
    if !metadata.is_file() {
        bail!("{} não é um arquivo", path.display());
    }

    Ok(path)
}

pub fn logo_uri(path: &Path) -> String {
    format!("file://{}", path.display())
}

#[cfg(test)]
mod tests {
    use super::*;
    use backend::AppConfig;

    fn app_with_export_dir(dir: &Path) -> SalesDashboardApp {
        let config = AppConfig {
            export_directory: Some(dir.to_path_buf()),
            ..AppConfig::default()
        };
        SalesDashboardApp::with_backend(Backend::with_config(config))
    }

    #[test]
    fn test_submit_sale_adds_and_suggests_next_day() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut app = app_with_export_dir(temp_dir.path());
        assert_eq!(app.sale_day_input, "1");

        app.sale_day_input = "3".to_string();
        app.sale_value_input = "1.500,00".to_string();
        app.submit_sale();

        assert_eq!(app.session.sales().len(), 1);
        assert_eq!(app.session.sales()[0].value, 1500.0);
        assert_eq!(app.sale_day_input, "4");
        assert!(app.sale_value_input.is_empty());
        assert!(app.error_message.is_none());
        assert_eq!(app.snapshot().summary.total_revenue, 1500.0);
    }

    #[test]
    fn test_submit_invalid_sale_reports_first_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut app = app_with_export_dir(temp_dir.path());

        app.sale_day_input = "40".to_string();
        app.sale_value_input = "abc".to_string();
        app.submit_sale();

        assert!(app.session.sales().is_empty());
        assert_eq!(
            app.error_message.as_deref(),
            Some("O dia deve estar entre 1 e 31 (recebido 40)")
        );
    }

    #[test]
    fn test_month_navigation_swaps_sales() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut app = app_with_export_dir(temp_dir.path());
        let start_month = app.session.premises().reference_month.clone();

        app.sale_value_input = "100".to_string();
        app.submit_sale();
        app.shift_month(1);

        assert_ne!(app.session.premises().reference_month, start_month);
        assert_eq!(app.month_input, app.session.premises().reference_month);
        assert!(app.session.sales().is_empty());
        assert_eq!(app.sale_day_input, "1");

        app.shift_month(-1);
        assert_eq!(app.session.premises().reference_month, start_month);
        assert_eq!(app.session.sales().len(), 1);
    }

    #[test]
    fn test_invalid_month_input_is_rejected() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut app = app_with_export_dir(temp_dir.path());
        let start_month = app.session.premises().reference_month.clone();

        app.month_input = "2024-13".to_string();
        app.commit_month_input();

        assert!(app.error_message.is_some());
        assert_eq!(app.session.premises().reference_month, start_month);
        assert_eq!(app.month_input, start_month);
    }

    #[test]
    fn test_exports_write_files() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut app = app_with_export_dir(temp_dir.path());
        let month = app.session.premises().reference_month.clone();

        app.export_sales();
        app.export_gauge();

        assert!(app.error_message.is_none());
        assert!(temp_dir.path().join(format!("vendas-{}.csv", month)).exists());
        assert!(temp_dir.path().join(format!("gauge-{}.svg", month)).exists());
    }

    #[test]
    fn test_messages_expire_after_timeout() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut app = app_with_export_dir(temp_dir.path());
        app.set_error("Falha".to_string());
        let shown_at = app.message_shown_at.unwrap();

        let remaining = app.expire_messages(shown_at + Duration::from_secs(1));
        assert_eq!(remaining, Some(Duration::from_secs(4)));
        assert_eq!(app.error_message.as_deref(), Some("Falha"));

        assert_eq!(app.expire_messages(shown_at + MESSAGE_TIMEOUT), None);
        assert!(app.error_message.is_none());
        assert!(app.message_shown_at.is_none());
    }

    #[test]
    fn test_expire_without_message_is_noop() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut app = app_with_export_dir(temp_dir.path());
        assert_eq!(app.expire_messages(Instant::now()), None);
        assert!(app.success_message.is_none());
    }

    #[test]
    fn test_validate_logo_path() {
        let temp_dir = tempfile::tempdir().unwrap();
        let logo = temp_dir.path().join("logo.PNG");
        std::fs::write(&logo, b"not really a png").unwrap();

        assert_eq!(validate_logo_path(logo.to_str().unwrap()).unwrap(), logo);
        assert!(validate_logo_path(temp_dir.path().join("missing.png").to_str().unwrap()).is_err());
        assert!(validate_logo_path(temp_dir.path().join("logo.gif").to_str().unwrap()).is_err());
        assert_eq!(logo_uri(Path::new("/tmp/logo.png")), "file:///tmp/logo.png");
    }

    #[test]
    fn test_empty_logo_path_clears_logo() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut app = app_with_export_dir(temp_dir.path());
        app.session.set_logo_path(Some(PathBuf::from("/tmp/logo.png")));

        app.logo_path_input = "  ".to_string();
        app.load_logo();
        assert!(app.logo_uri().is_none());
    }
}
