use crate::clients::HttpGateway;
use crate::config::DashboardConfig;
use crate::notify::TracingSink;
use dashboard_core::{
    DashboardContext, DashboardController, DashboardHandle, NotificationSink, ProductGateway,
};
use std::sync::Arc;
use tracing::info;

/// Runtime orchestrator for the dashboard.
///
/// Owns the controller task and exposes its handle. Start it with
/// explicit collaborators ([`DashboardSystem::start`]) or from
/// configuration with the production HTTP gateway and tracing sink
/// ([`DashboardSystem::from_config`]).
pub struct DashboardSystem {
    /// Handle for driving the running controller.
    pub dashboard: DashboardHandle,

    /// Join handle of the controller task, kept for graceful shutdown.
    task: tokio::task::JoinHandle<()>,
}

impl DashboardSystem {
    /// Spawns the controller with the given collaborators injected.
    pub fn start(gateway: Arc<dyn ProductGateway>, notifier: Arc<dyn NotificationSink>) -> Self {
        let (controller, dashboard) = DashboardController::new(32);
        let task = tokio::spawn(controller.run(DashboardContext { gateway, notifier }));
        Self { dashboard, task }
    }

    /// Production wiring: HTTP gateway against the configured base URL,
    /// notifications into the log.
    pub fn from_config(config: &DashboardConfig) -> Self {
        info!(base_url = %config.api_base_url, "Connecting dashboard to product API");
        Self::start(
            Arc::new(HttpGateway::new(&config.api_base_url)),
            Arc::new(TracingSink),
        )
    }

    /// Gracefully shuts the dashboard down.
    ///
    /// Dropping the handle closes the command channel; the controller
    /// drains remaining commands and exits its loop, and we await the
    /// task so nothing is lost.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down dashboard...");
        drop(self.dashboard);
        self.task
            .await
            .map_err(|e| format!("Dashboard controller task failed: {e}"))
    }
}
