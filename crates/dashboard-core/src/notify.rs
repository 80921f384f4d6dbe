//! # Notification Sink
//!
//! The collaborator that surfaces success/failure messages to the user
//! (toast, log line, status bar). The controller only decides *what* to
//! report; presentation belongs to the implementation. Calls are
//! fire-and-forget, the controller never consumes a return value.

/// Whether a notification reports a completed operation or a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// Fire-and-forget feedback channel toward the user.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, severity: Severity, message: &str);
}
