//! Application logging.
//!
//! Everything goes through the `log` facade. [`Logger::install`] sets up a
//! `fern` dispatch that always feeds an in-memory buffer (shown in the logs
//! dialog) and, when enabled in the config, appends to a log file in the data
//! directory.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use chrono::Local;
use log::LevelFilter;

use crate::config::Config;
use crate::constants::LOG_FILE_NAME;

/// Target used by [`Logger::log`]; such records are already in the buffer
pub const UI_LOG_TARGET: &str = "tasky::ui";

/// Entries kept in memory before the oldest are dropped
pub const MAX_LOG_ENTRIES: usize = 1000;

/// Shared logger that can be used across the application
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<Vec<String>>>,
    log_file: Option<PathBuf>,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(Vec::new())),
            log_file: None,
        }
    }

    /// Create a logger, writing to the default log file when `enabled`
    pub fn from_config(enabled: bool) -> Result<Self> {
        let mut logger = Self::new();
        if enabled {
            logger.log_file = Some(Self::get_log_file_path()?);
        }
        Ok(logger)
    }

    /// Same as [`Logger::from_config`] but writing to an explicit file
    pub fn with_log_file<P: AsRef<Path>>(path: P) -> Self {
        Self {
            log_file: Some(path.as_ref().to_path_buf()),
            ..Self::new()
        }
    }

    /// Whether file logging is on
    pub fn is_enabled(&self) -> bool {
        self.log_file.is_some()
    }

    pub fn log_file(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }

    /// Default log file location
    pub fn get_log_file_path() -> Result<PathBuf> {
        Ok(Config::get_data_dir()?.join(LOG_FILE_NAME))
    }

    /// Add a log entry
    pub fn log(&self, message: String) {
        log::info!(target: UI_LOG_TARGET, "{}", message);
        push_entry(&self.logs, message);
    }

    /// Get all logs sorted by date (newest first)
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            let mut sorted_logs = logs.clone();
            sorted_logs.reverse();
            sorted_logs
        } else {
            Vec::new()
        }
    }

    /// Clear all logs
    pub fn clear(&self) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.clear();
        }
    }

    /// Build the fern dispatch without installing it
    pub fn dispatch(&self, level: LevelFilter) -> Result<fern::Dispatch> {
        let logs = Arc::clone(&self.logs);
        let memory = fern::Dispatch::new()
            .filter(|metadata| metadata.target() != UI_LOG_TARGET)
            .chain(fern::Output::call(move |record| {
                push_entry(&logs, format!("{} {}: {}", record.level(), record.target(), record.args()));
            }));

        let mut root = fern::Dispatch::new()
            .level(level)
            .level_for("sqlx", LevelFilter::Warn)
            .level_for("sea_orm", LevelFilter::Warn)
            .chain(memory);

        if let Some(path) = &self.log_file {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
            }
            let file = fern::log_file(path).with_context(|| format!("Failed to open log file: {}", path.display()))?;
            root = root.chain(
                fern::Dispatch::new()
                    .format(|out, message, record| {
                        out.finish(format_args!(
                            "[{} {} {}] {}",
                            Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                            record.level(),
                            record.target(),
                            message
                        ))
                    })
                    .chain(file),
            );
        }

        Ok(root)
    }

    /// Install as the global `log` backend. Can only succeed once per process.
    pub fn install(&self, level: LevelFilter) -> Result<()> {
        self.dispatch(level)?
            .apply()
            .context("A global logger is already installed")?;
        Ok(())
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

fn push_entry(logs: &Mutex<Vec<String>>, message: String) {
    let timestamp = Local::now().format("%H:%M:%S%.3f").to_string();
    if let Ok(mut logs) = logs.lock() {
        if logs.len() >= MAX_LOG_ENTRIES {
            logs.remove(0);
        }
        logs.push(format!("[{}] {}", timestamp, message));
    }
}
