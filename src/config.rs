//! Configuration management for Tasky
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{APP_NAME, CONFIG_FILE_NAME, CONFIG_GENERATED, LOCAL_CONFIG_FILE_NAME};
use crate::icons::IconTheme;
use crate::utils::datetime;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub display: DisplayConfig,
    pub swipe: SwipeConfig,
    pub notifications: NotificationsConfig,
    pub logging: LoggingConfig,
    pub storage: StorageConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Enable mouse support (click and drag-to-swipe)
    pub mouse_enabled: bool,
    /// Icon theme: "ascii", "unicode" or "emoji"
    pub icon_theme: IconTheme,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// chrono format for day headers
    pub header_date_format: String,
    /// Show todo descriptions in list rows
    pub show_descriptions: bool,
    /// Refuse to show the list when a todo has an unreadable date,
    /// instead of collecting such todos under "Unscheduled"
    pub strict_dates: bool,
}

/// Swipe gesture configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SwipeConfig {
    /// Fraction of the row width a drag must pass to complete
    pub threshold: f32,
    /// Row widths per second above which a release completes
    pub velocity_threshold: f32,
    /// Fraction of the row width moved by one h/l key press
    pub key_step: f32,
    /// Milliseconds without a key press before a keyboard swipe is released
    pub settle_ms: u64,
    /// Delay in milliseconds before a row slides back after a cancelled delete
    pub reset_delay_ms: u64,
}

/// Reminder configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationsConfig {
    /// Schedule reminders when todos are toggled
    pub enabled: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Write logs to a file in the data directory
    pub enabled: bool,
}

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StorageConfig {
    /// Database file; defaults to the XDG data directory
    pub database_path: Option<PathBuf>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            mouse_enabled: true,
            icon_theme: IconTheme::Unicode,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            header_date_format: datetime::HEADER_DATE_FORMAT.to_string(),
            show_descriptions: true,
            strict_dates: false,
        }
    }
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            threshold: 0.5,
            velocity_threshold: 2.0,
            key_step: 0.25,
            settle_ms: 400,
            reset_delay_ms: 150,
        }
    }
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

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
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from(LOCAL_CONFIG_FILE_NAME);
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join(APP_NAME).join(CONFIG_FILE_NAME);
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        // Validate swipe settings
        if !(self.swipe.threshold > 0.0 && self.swipe.threshold <= 1.0) {
            anyhow::bail!("swipe.threshold must be in (0, 1], got {}", self.swipe.threshold);
        }
        if !(self.swipe.key_step > 0.0 && self.swipe.key_step <= 1.0) {
            anyhow::bail!("swipe.key_step must be in (0, 1], got {}", self.swipe.key_step);
        }
        if self.swipe.velocity_threshold <= 0.0 || !self.swipe.velocity_threshold.is_finite() {
            anyhow::bail!(
                "swipe.velocity_threshold must be a positive number, got {}",
                self.swipe.velocity_threshold
            );
        }
        if self.swipe.reset_delay_ms > 10_000 {
            anyhow::bail!("swipe.reset_delay_ms cannot exceed 10000 (10 seconds)");
        }

        // Validate header format by formatting a known day with it
        if self.display.header_date_format.trim().is_empty() {
            anyhow::bail!("display.header_date_format cannot be empty");
        }
        let sample = chrono::NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or(chrono::NaiveDate::MIN);
        let mut rendered = String::new();
        if std::fmt::Write::write_fmt(
            &mut rendered,
            format_args!("{}", sample.format(&self.display.header_date_format)),
        )
        .is_err()
        {
            anyhow::bail!("Invalid header_date_format '{}'", self.display.header_date_format);
        }

        Ok(())
    }

    /// Database path to use, falling back to the XDG data directory
    pub fn database_path(&self) -> Result<PathBuf> {
        match &self.storage.database_path {
            Some(path) => Ok(path.clone()),
            None => Ok(Self::get_data_dir()?.join("todos.db")),
        }
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# Tasky Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join(APP_NAME))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Get the XDG data directory path
    pub fn get_data_dir() -> Result<PathBuf> {
        dirs::data_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
            .map(|dir| dir.join(APP_NAME))
    }
}
