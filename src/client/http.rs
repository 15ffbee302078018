//! reqwest implementation of the maintenance facade.

use async_trait::async_trait;
use log::debug;
use reqwest::{Client, Method, Response, Url};
use serde::de::DeserializeOwned;
use serde_json::json;
use std::sync::RwLock;
use std::time::Duration;

use super::{ClientError, MaintenanceClient};
use crate::models::{LogLevel, LoggerModel, ServerModuleModel};

/// HTTP client talking to the maintenance REST service.
pub struct HttpMaintenanceClient {
    http: Client,
    base_url: RwLock<Url>,
}

impl HttpMaintenanceClient {
    /// Build a client for `endpoint` with a per-request timeout.
    ///
    /// # Errors
    /// Fails if the endpoint is not a valid http(s) URL or the HTTP client
    /// cannot be constructed.
    pub fn new(endpoint: &str, request_timeout: Duration) -> Result<Self, ClientError> {
        let base_url = parse_endpoint(endpoint)?;
        let http = Client::builder()
            .timeout(request_timeout)
            .build()
            .map_err(|e| ClientError::Network(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self {
            http,
            base_url: RwLock::new(base_url),
        })
    }

    fn base_url(&self) -> Url {
        match self.base_url.read() {
            Ok(url) => url.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    async fn send(&self, method: Method, segments: &[&str], body: Option<serde_json::Value>) -> Result<Response, ClientError> {
        let url = build_url(&self.base_url(), segments)?;
        debug!("{} {}", method, url);

        let mut request = self.http.request(method, url);
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await.map_err(|e| ClientError::Network(e.to_string()))?;
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ClientError::Rejected {
                status: status.as_u16(),
                body,
            })
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, ClientError> {
        let response = self.send(Method::GET, segments, None).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ClientError::InvalidData(e.to_string()))
    }

    async fn post_command(&self, name: &str, command: &str) -> Result<(), ClientError> {
        self.send(Method::POST, &["modules", name, command], None).await?;
        Ok(())
    }
}

#[async_trait]
impl MaintenanceClient for HttpMaintenanceClient {
    fn endpoint(&self) -> String {
        self.base_url().to_string()
    }

    fn update_endpoint(&self, url: &str) -> Result<(), ClientError> {
        let parsed = parse_endpoint(url)?;
        match self.base_url.write() {
            Ok(mut current) => *current = parsed,
            Err(poisoned) => *poisoned.into_inner() = parsed,
        }
        Ok(())
    }

    async fn fetch_modules(&self) -> Result<Vec<ServerModuleModel>, ClientError> {
        self.get_json(&["modules"]).await
    }

    async fn start_module(&self, name: &str) -> Result<(), ClientError> {
        self.post_command(name, "start").await
    }

    async fn stop_module(&self, name: &str) -> Result<(), ClientError> {
        self.post_command(name, "stop").await
    }

    async fn reincarnate_module(&self, name: &str) -> Result<(), ClientError> {
        self.post_command(name, "reincarnate").await
    }

    async fn confirm_warning(&self, name: &str) -> Result<(), ClientError> {
        self.post_command(name, "confirm").await
    }

    async fn update_module(&self, module: &ServerModuleModel) -> Result<ServerModuleModel, ClientError> {
        let body = serde_json::to_value(module).map_err(|e| ClientError::InvalidData(e.to_string()))?;
        let response = self.send(Method::POST, &["modules", module.name.as_str()], Some(body)).await?;
        let text = response.text().await.map_err(|e| ClientError::Network(e.to_string()))?;

        // Older hosts answer 200 with an empty body
        if text.trim().is_empty() {
            return Ok(module.clone());
        }
        serde_json::from_str(&text).map_err(|e| ClientError::InvalidData(e.to_string()))
    }

    async fn fetch_loggers(&self) -> Result<Vec<LoggerModel>, ClientError> {
        self.get_json(&["loggers"]).await
    }

    async fn set_log_level(&self, logger_name: &str, level: LogLevel) -> Result<(), ClientError> {
        let body = json!({ "Level": i32::from(level) });
        self.send(Method::PUT, &["loggers", logger_name, "level"], Some(body)).await?;
        Ok(())
    }
}

/// Parse and check a base address for the maintenance service.
///
/// # Errors
/// Returns [`ClientError::InvalidEndpoint`] for unparsable URLs and for
/// schemes other than http and https.
pub fn parse_endpoint(url: &str) -> Result<Url, ClientError> {
    let invalid = |reason: String| ClientError::InvalidEndpoint {
        url: url.to_string(),
        reason,
    };

    let parsed = Url::parse(url.trim()).map_err(|e| invalid(e.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(invalid(format!("unsupported scheme '{other}'"))),
    }
}

/// Append path segments to a base address, percent-encoding each segment.
///
/// # Errors
/// Returns [`ClientError::InvalidEndpoint`] if the base cannot carry a path.
pub fn build_url(base: &Url, segments: &[&str]) -> Result<Url, ClientError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|()| ClientError::InvalidEndpoint {
            url: base.to_string(),
            reason: "endpoint cannot be a base URL".to_string(),
        })?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}
