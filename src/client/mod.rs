//! Remote client facade for the runtime host's maintenance API.
//!
//! Every remote call the dashboard makes goes through [`MaintenanceClient`].
//! Implementations do no caching and no retries; a failed call is reported to
//! the caller and nothing else happens.

use async_trait::async_trait;

use crate::models::{LogLevel, LoggerModel, ServerModuleModel};

pub mod http;

pub use http::HttpMaintenanceClient;

/// Errors surfaced by the maintenance API.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Invalid endpoint '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Request rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Operations offered by the runtime host's maintenance service.
#[async_trait]
pub trait MaintenanceClient: Send + Sync {
    /// Base address all requests are resolved against.
    fn endpoint(&self) -> String;

    /// Point subsequent requests at a new base address.
    ///
    /// # Errors
    /// Returns [`ClientError::InvalidEndpoint`] if `url` is not an absolute
    /// http(s) URL. The previous endpoint stays active in that case.
    fn update_endpoint(&self, url: &str) -> Result<(), ClientError>;

    async fn fetch_modules(&self) -> Result<Vec<ServerModuleModel>, ClientError>;
    async fn start_module(&self, name: &str) -> Result<(), ClientError>;
    async fn stop_module(&self, name: &str) -> Result<(), ClientError>;
    async fn reincarnate_module(&self, name: &str) -> Result<(), ClientError>;
    async fn confirm_warning(&self, name: &str) -> Result<(), ClientError>;

    /// Persist a module's configuration; returns the module as accepted.
    async fn update_module(&self, module: &ServerModuleModel) -> Result<ServerModuleModel, ClientError>;

    async fn fetch_loggers(&self) -> Result<Vec<LoggerModel>, ClientError>;
    async fn set_log_level(&self, logger_name: &str, level: LogLevel) -> Result<(), ClientError>;
}
