//! Configuration management for the maintenance console
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::client::http::parse_endpoint;
use crate::constants::{
    CONFIG_FILE_NAME, CONFIG_GENERATED, DEFAULT_ENDPOINT, MODULE_LIST_DEFAULT_WIDTH, MODULE_LIST_MAX_WIDTH,
    MODULE_LIST_MIN_WIDTH,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Comment written above each key of the generated configuration file
const FIELD_COMMENTS: &[(&str, &str)] = &[
    ("endpoint", "Base URL of the maintenance REST service"),
    ("request_timeout_seconds", "Timeout applied to every request, 1 to 300 seconds"),
    ("mouse_enabled", "Enable mouse support"),
    (
        "refresh_interval_seconds",
        "Reload modules and loggers every N seconds (0 = manual refresh only)",
    ),
    ("module_list_width", "Module list width in columns, 15 to 60"),
    ("enabled", "Write logs to a file in the data directory"),
    ("level", "Minimum level: error, warn, info, debug or trace"),
];

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

/// Maintenance service connection
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Base URL of the maintenance REST service
    pub endpoint: String,
    /// Timeout applied to every request, in seconds
    pub request_timeout_seconds: u64,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Enable mouse support
    pub mouse_enabled: bool,
    /// Reload modules and loggers every N seconds (0 = manual refresh only)
    pub refresh_interval_seconds: u64,
    /// Module list width in columns
    pub module_list_width: u16,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Write logs to a file in the data directory
    pub enabled: bool,
    /// Minimum level: "error", "warn", "info", "debug" or "trace"
    pub level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            request_timeout_seconds: 10,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            mouse_enabled: false,
            refresh_interval_seconds: 5,
            module_list_width: MODULE_LIST_DEFAULT_WIDTH,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
        }
    }
}

impl ServerConfig {
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl LoggingConfig {
    /// Parsed `level`, if it names a known level.
    #[must_use]
    pub fn level_filter(&self) -> Option<log::LevelFilter> {
        self.level.parse().ok()
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file();

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Option<PathBuf> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from(CONFIG_FILE_NAME);
        if current_dir_config.exists() {
            return Some(current_dir_config);
        }

        // 2. Check XDG config directory
        let xdg_config = Self::get_default_config_path().ok()?;
        xdg_config.exists().then_some(xdg_config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        parse_endpoint(&self.server.endpoint).context("Invalid server.endpoint")?;

        if self.server.request_timeout_seconds == 0 || self.server.request_timeout_seconds > 300 {
            anyhow::bail!(
                "request_timeout_seconds must be between 1 and 300, got {}",
                self.server.request_timeout_seconds
            );
        }

        if self.ui.refresh_interval_seconds > 3600 {
            anyhow::bail!("refresh_interval_seconds cannot exceed 3600 (1 hour)");
        }

        if self.ui.module_list_width < MODULE_LIST_MIN_WIDTH || self.ui.module_list_width > MODULE_LIST_MAX_WIDTH {
            anyhow::bail!(
                "module_list_width must be between {} and {} columns, got {}",
                MODULE_LIST_MIN_WIDTH,
                MODULE_LIST_MAX_WIDTH,
                self.ui.module_list_width
            );
        }

        if self.logging.level_filter().is_none() {
            anyhow::bail!("Invalid logging level '{}'", self.logging.level);
        }

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        let header = format!(
            "# Maintenance Console Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &annotate(&toml_content);

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        log::info!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Write the defaults to `path` when no configuration file exists yet.
    ///
    /// Returns whether a file was written. Problems are logged and never stop
    /// startup, including a platform without a config directory (`None`).
    pub fn ensure_default_config(path: Option<&Path>) -> bool {
        let Some(path) = path else {
            log::warn!("Could not determine config directory, skipping default configuration");
            return false;
        };
        if path.exists() || Path::new(CONFIG_FILE_NAME).exists() {
            return false;
        }

        match Self::generate_default_config(path) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("Could not write default configuration: {e:#}");
                false
            }
        }
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join("maintenance-console"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}

/// Put each key's description above it
fn annotate(toml_content: &str) -> String {
    let mut annotated = String::with_capacity(toml_content.len() * 2);
    for line in toml_content.lines() {
        let key = line.split('=').next().unwrap_or_default().trim();
        if let Some((_, comment)) = FIELD_COMMENTS.iter().find(|(name, _)| *name == key) {
            annotated.push_str("# ");
            annotated.push_str(comment);
            annotated.push('\n');
        }
        annotated.push_str(line);
        annotated.push('\n');
    }
    annotated
}
