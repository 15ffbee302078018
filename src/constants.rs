//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

// Connection defaults
pub const DEFAULT_ENDPOINT: &str = "http://localhost:80/";
pub const CONFIG_FILE_NAME: &str = "maintenance-console.toml";
pub const LOG_FILE_NAME: &str = "maintenance-console.log";

// Success Messages
pub const SUCCESS_MODULE_STARTED: &str = "✅ Start requested for module";
pub const SUCCESS_MODULE_STOPPED: &str = "✅ Stop requested for module";
pub const SUCCESS_MODULE_REINCARNATED: &str = "✅ Reincarnation requested for module";
pub const SUCCESS_WARNINGS_CONFIRMED: &str = "✅ Warnings confirmed for module";
pub const SUCCESS_ENDPOINT_CHANGED: &str = "✅ Endpoint changed to";

// Error Messages
pub const ERROR_MODULE_START_FAILED: &str = "❌ Failed to start module";
pub const ERROR_MODULE_STOP_FAILED: &str = "❌ Failed to stop module";
pub const ERROR_MODULE_REINCARNATE_FAILED: &str = "❌ Failed to reincarnate module";
pub const ERROR_CONFIRM_WARNING_FAILED: &str = "❌ Failed to confirm warnings for module";
pub const ERROR_MODULE_UPDATE_FAILED: &str = "❌ Failed to update module";
pub const ERROR_FETCH_MODULES_FAILED: &str = "❌ Failed to fetch modules";
pub const ERROR_FETCH_LOGGERS_FAILED: &str = "❌ Failed to fetch loggers";
pub const ERROR_LOG_LEVEL_FAILED: &str = "❌ Failed to change log level";
pub const ERROR_ENDPOINT_REJECTED: &str = "❌ Endpoint rejected";

// Module detail texts
pub const TEXT_NO_WARNINGS: &str = "No warnings.";
pub const TEXT_NO_DEPENDENCIES: &str = "This module has no dependencies.";
pub const TEXT_NO_NOTIFICATIONS: &str = "No notifications detected.";
pub const TEXT_NO_INNER_EXCEPTION: &str = "No inner exception found.";
pub const TEXT_NO_MODULE_SELECTED: &str = "Select a module to see its details.";
pub const TEXT_NO_LOGGERS: &str = "No loggers reported.";

// Dialog titles
pub const DIALOG_TITLE_NOTIFICATION: &str = "Notification details";
pub const DIALOG_TITLE_ENDPOINT: &str = "Maintenance endpoint";
pub const DIALOG_TITLE_APP_LOGS: &str = "Application Logs - Press 'Esc', 'G' or 'q' to close";

// Config
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";

// UI Layout Constants
/// Minimum module list width in columns
pub const MODULE_LIST_MIN_WIDTH: u16 = 15;
/// Maximum module list width in columns
pub const MODULE_LIST_MAX_WIDTH: u16 = 60;
/// Default module list width in columns
pub const MODULE_LIST_DEFAULT_WIDTH: u16 = 32;
