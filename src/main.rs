mod domain;
mod error;
mod validation;
mod form;
mod repository;
mod messages;
mod clients;

mod app_system;
mod presentation;

#[cfg(test)]
mod mock_framework;

mod dashboard_actor;

use std::sync::Arc;

use anyhow::Context;
use tracing::{error, info};

use crate::app_system::{setup_tracing, ApiConfig, DashboardSystem};
use crate::presentation::{stdin_lines, Console, ConsoleConfirmation};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = ApiConfig::from_env().context("Failed to load configuration")?;
    info!(base_url = %config.base_url, "Starting student dashboard");

    let input = stdin_lines();
    let confirmation = Arc::new(ConsoleConfirmation::new(input.clone()));
    let system = DashboardSystem::new(&config, confirmation).context("Failed to start dashboard")?;

    let console = Console::new(system.client.clone(), input);
    if let Err(e) = console.run().await {
        error!(error = %e, "Console stopped unexpectedly");
    }

    system.shutdown().await.map_err(anyhow::Error::msg)?;

    info!("Application completed successfully");
    Ok(())
}
