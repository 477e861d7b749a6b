//! Application configuration
//!
//! One file carries everything: API access, submission pacing, master sheet
//! column names and the department task templates. Both TOML and the JSON
//! layout of the older `monday_config.json` files are accepted.

pub mod departments;
pub mod settings;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

pub use departments::{DEFAULT_DEPARTMENT, Department, department_slug};
pub use settings::{ApiConfig, SheetSettings, SubitemColumns, SubmissionConfig};

/// Full application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub submission: SubmissionConfig,
    pub subitem_columns: SubitemColumns,
    pub settings: SheetSettings,
    pub departments: BTreeMap<String, Department>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            submission: SubmissionConfig::default(),
            subitem_columns: SubitemColumns::default(),
            settings: SheetSettings::default(),
            departments: departments::default_departments(),
        }
    }
}

impl AppConfig {
    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, the user config file
    /// (`~/.config/launchboard/config.toml`) is used when present, otherwise
    /// built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::from_file(path);
        }

        match default_config_path() {
            Some(path) if path.exists() => {
                log::debug!("Loading config from {}", path.display());
                Self::from_file(&path)
            }
            _ => {
                log::debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load from a file, picking the parser by extension
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let config = if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        }
        .with_context(|| format!("Invalid config file: {}", path.display()))?;

        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse TOML config")?;
        Ok(config.with_fallback_departments())
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content).context("Failed to parse JSON config")?;
        Ok(config.with_fallback_departments())
    }

    /// A config file that names no departments still gets the built-in one
    fn with_fallback_departments(mut self) -> Self {
        if self.departments.is_empty() {
            self.departments = departments::default_departments();
        }
        self
    }

    /// Look up a department by name (case-insensitive)
    pub fn department(&self, name: &str) -> Result<(&str, &Department)> {
        self.departments
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name.trim()))
            .map(|(key, dept)| (key.as_str(), dept))
            .with_context(|| {
                format!(
                    "Department '{}' not found in configuration. Available: {}",
                    name,
                    self.department_names().join(", ")
                )
            })
    }

    pub fn department_names(&self) -> Vec<&str> {
        self.departments.keys().map(String::as_str).collect()
    }

    /// Resolve the department named on the command line, or the default one
    pub fn department_or_default(&self, name: Option<&str>) -> Result<(&str, &Department)> {
        self.department(name.unwrap_or(DEFAULT_DEPARTMENT))
    }
}

/// `~/.config/launchboard/config.toml` (platform equivalent elsewhere)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("launchboard").join("config.toml"))
}
