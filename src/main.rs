use anyhow::{Context, Result};
use maintenance_console::client::HttpMaintenanceClient;
use maintenance_console::config::Config;
use maintenance_console::logger::Logger;
use maintenance_console::ui;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load().context("Failed to load configuration")?;
    let logger = Logger::from_config(&config.logging)?;

    // First run: leave a default configuration file to edit
    Config::ensure_default_config(Config::get_default_config_path().ok().as_deref());

    let client = HttpMaintenanceClient::new(&config.server.endpoint, config.server.request_timeout())
        .context("Failed to create maintenance client")?;
    log::info!("Maintenance console starting against {}", config.server.endpoint);

    // Run the TUI application
    ui::run_app(config, Arc::new(client), logger).await?;

    Ok(())
}
