//! # Controller Channel Errors
//!
//! These are the only errors a [`DashboardHandle`](crate::handle::DashboardHandle)
//! call can return, and both mean the controller task itself is gone.
//! Operation-level failures (validation rejections, remote errors) are
//! reported through the notification sink and carried in
//! [`SubmitOutcome`](crate::message::SubmitOutcome) values instead, so a
//! failed CRUD call can never crash or poison the application.

/// Failure to exchange a message with the controller task.
#[derive(Debug, thiserror::Error)]
pub enum ControllerError {
    #[error("Controller closed")]
    ControllerClosed,
    #[error("Controller dropped response channel")]
    ControllerGone,
}
