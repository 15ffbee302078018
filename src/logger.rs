//! Application logging.
//!
//! Everything logs through the `log` macros. [`Logger::from_config`] installs a
//! `fern` dispatch that always feeds an in-memory buffer (shown in the
//! application log dialog) and, when enabled, a log file in the data
//! directory.

use anyhow::{Context, Result};
use chrono::Local;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::config::LoggingConfig;
use crate::constants::LOG_FILE_NAME;

/// Keeps the most recent entries only.
pub const MAX_BUFFERED_ENTRIES: usize = 2_000;

/// Shared handle to the in-memory log buffer
#[derive(Clone)]
pub struct Logger {
    entries: Arc<Mutex<Vec<String>>>,
}

/// `log::Log` sink writing into a [`Logger`]'s buffer.
struct MemorySink {
    entries: Arc<Mutex<Vec<String>>>,
}

impl log::Log for MemorySink {
    fn enabled(&self, _metadata: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push(record.args().to_string());
            if entries.len() > MAX_BUFFERED_ENTRIES {
                let overflow = entries.len() - MAX_BUFFERED_ENTRIES;
                entries.drain(..overflow);
            }
        }
    }

    fn flush(&self) {}
}

impl Logger {
    /// Empty buffer that is not attached to the `log` facade.
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Install the global `log` dispatch described by `config`.
    ///
    /// # Errors
    /// Fails if the log file cannot be opened or a global logger is already
    /// installed.
    pub fn from_config(config: &LoggingConfig) -> Result<Self> {
        let logger = Self::new();
        let level = config.level_filter().unwrap_or(log::LevelFilter::Info);

        let memory: Box<dyn log::Log> = Box::new(MemorySink {
            entries: Arc::clone(&logger.entries),
        });

        let mut dispatch = fern::Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "[{}] {:<5} {}",
                    Local::now().format("%H:%M:%S%.3f"),
                    record.level(),
                    message
                ))
            })
            .level(level)
            // Terminal and HTTP internals are noisy below warn
            .level_for("reqwest", log::LevelFilter::Warn)
            .level_for("hyper", log::LevelFilter::Warn)
            .chain(memory);

        if config.enabled {
            let path = Self::get_log_file_path()?;
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
            }
            let file = fern::log_file(&path).with_context(|| format!("Failed to open log file: {}", path.display()))?;
            dispatch = dispatch.chain(file);
        }

        dispatch.apply().context("A global logger is already installed")?;
        Ok(logger)
    }

    /// Get all logs sorted by date (newest first)
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(entries) = self.entries.lock() {
            entries.iter().rev().cloned().collect()
        } else {
            Vec::new()
        }
    }

    /// Location of the log file used when file logging is enabled
    pub fn get_log_file_path() -> Result<PathBuf> {
        dirs::data_local_dir()
            .or_else(dirs::cache_dir)
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
            .map(|dir| dir.join("maintenance-console").join(LOG_FILE_NAME))
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}
