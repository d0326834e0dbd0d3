//! # Application Configuration
//!
//! Read-only settings loaded from a YAML file at startup.
//!
//! ## Lookup order
//! 1. The path in `SALES_DASHBOARD_CONFIG`, if set
//! 2. `config.yaml` in the platform config directory
//!
//! A missing file means defaults. Missing keys fall back to their defaults.
//!
//! ## YAML Format
//!
//! ```yaml
//! default_premises:
//!   monthly_revenue_goal: 150000
//!   fixed_cost_pct: 30
//! gauge_layout:
//!   outer_radius: 200
//! export_directory: /home/me/relatorios
//! ```

use anyhow::{Context, Result};
use directories::ProjectDirs;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use shared::GaugeLayout;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{PremisesDefaults, SalesConfig};

pub const CONFIG_ENV_VAR: &str = "SALES_DASHBOARD_CONFIG";
const CONFIG_FILE_NAME: &str = "config.yaml";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub default_premises: PremisesDefaults,
    pub gauge_layout: GaugeLayout,
    pub sales: SalesConfig,
    /// Where exports are written; the working directory when unset
    pub export_directory: Option<PathBuf>,
}

impl AppConfig {
    /// Load from the configured location, or defaults when there is no file
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from_path(&path),
            None => {
                warn!("⚠️ No config directory available, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            if !path.trim().is_empty() {
                return Some(PathBuf::from(path));
            }
        }
        ProjectDirs::from("br", "KRS", "sales-dashboard").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!("📋 No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_yaml(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;

        info!("📋 Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).context("Failed to parse YAML config")
    }

    pub fn export_directory(&self) -> PathBuf {
        self.export_directory.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from_path(&temp_dir.path().join("absent.yaml")).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.export_directory(), PathBuf::from("."));
    }

    #[test]
    fn test_partial_yaml_keeps_other_defaults() {
        let config = AppConfig::from_yaml(
            "default_premises:\n  monthly_revenue_goal: 150000\ngauge_layout:\n  outer_radius: 200\nexport_directory: /tmp/relatorios\n",
        )
        .unwrap();

        assert_eq!(config.default_premises.monthly_revenue_goal, 150_000.0);
        assert_eq!(config.default_premises.fixed_cost_pct, 25.0);
        assert_eq!(config.gauge_layout.outer_radius, 200.0);
        assert_eq!(config.gauge_layout.inner_radius, 120.0);
        assert_eq!(config.sales, SalesConfig::default());
        assert_eq!(config.export_directory(), PathBuf::from("/tmp/relatorios"));
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.yaml");
        fs::write(&path, "sales:\n  max_day: 28\n").unwrap();

        let config = AppConfig::load_from_path(&path).unwrap();
        assert_eq!(config.sales.max_day, 28);
        assert_eq!(config.sales.min_day, 1);
    }

    #[test]
    fn test_malformed_yaml_is_an_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.yaml");
        fs::write(&path, "gauge_layout: [not, a, map]\n").unwrap();

        let error = AppConfig::load_from_path(&path).unwrap_err();
        assert!(error.to_string().contains("Invalid config file"));
    }

    #[test]
    fn test_empty_yaml_gives_defaults() {
        assert_eq!(AppConfig::from_yaml("  \n").unwrap(), AppConfig::default());
    }
}
