use std::sync::Arc;

use tracing::{error, info};

use super::ApiConfig;
use crate::clients::DashboardClient;
use crate::dashboard_actor::{DashboardActor, DeleteConfirmation};
use crate::error::TransportError;
use crate::repository::{HttpStudentRepository, StudentRepository};

const DASHBOARD_BUFFER: usize = 32;

/// Wires the repository, the dashboard actor and its client together.
///
/// Responsible for starting the actor and handling shutdown.
pub struct DashboardSystem {
    pub client: DashboardClient,
    handle: tokio::task::JoinHandle<()>,
}

impl DashboardSystem {
    /// Starts against the HTTP backend described by `config`.
    pub fn new(config: &ApiConfig, confirmation: Arc<dyn DeleteConfirmation>) -> Result<Self, TransportError> {
        info!(base_url = %config.base_url, "Starting dashboard system");
        let repository = HttpStudentRepository::new(config)?;
        Ok(Self::with_repository(Arc::new(repository), confirmation))
    }

    pub fn with_repository(
        repository: Arc<dyn StudentRepository>,
        confirmation: Arc<dyn DeleteConfirmation>,
    ) -> Self {
        let (actor, client) = DashboardActor::new(DASHBOARD_BUFFER, repository, confirmation);
        let handle = tokio::spawn(actor.run());
        Self { client, handle }
    }

    /// Drops the client, which closes the actor's channel, and waits for it to stop.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");
        drop(self.client);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(format!("Actor task failed: {:?}", e));
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
