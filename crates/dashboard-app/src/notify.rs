//! Notification sink backed by the tracing pipeline.
//!
//! In this binary the "toast" is a log line; a GUI frontend would swap in
//! its own [`NotificationSink`] without touching the controller.

use dashboard_core::{NotificationSink, Severity};
use tracing::{error, info};

/// Routes user-facing notifications into the structured log.
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn notify(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Success => info!("{message}"),
            Severity::Error => error!("{message}"),
        }
    }
}
