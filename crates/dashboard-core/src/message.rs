//! # Dashboard Commands
//!
//! The message types exchanged between the [`DashboardHandle`] and the
//! [`DashboardController`]. Every command carries a oneshot responder, so
//! callers get a typed answer without the controller ever sharing its
//! state.
//!
//! Commands map one-to-one onto user actions in the dashboard view: the
//! initial load, opening and closing dialogs, keystrokes into the form,
//! submitting, and the per-row delete button.
//!
//! [`DashboardHandle`]: crate::handle::DashboardHandle
//! [`DashboardController`]: crate::controller::DashboardController

use crate::controller::DashboardSnapshot;
use crate::form::FormField;
use crate::gateway::GatewayError;
use crate::model::ProductId;
use crate::validate::ValidationError;
use tokio::sync::oneshot;

/// One-shot response channel back to the caller.
pub type Response<T> = oneshot::Sender<T>;

/// A user action sent to the controller task.
#[derive(Debug)]
pub enum DashboardCommand {
    /// Replace the collection store with a fresh remote read. Responds with
    /// `true` when the load succeeded.
    LoadProducts { respond_to: Response<bool> },

    /// Open the create dialog over an empty form. Rejected (`false`) when a
    /// dialog is already open.
    OpenCreate { respond_to: Response<bool> },

    /// Open the edit dialog pre-filled from the product with this id.
    /// Rejected (`false`) when a dialog is already open or the id is
    /// unknown.
    OpenEdit {
        id: ProductId,
        respond_to: Response<bool>,
    },

    /// Store a raw field value verbatim in the form buffer.
    EditField {
        field: FormField,
        value: String,
        respond_to: Response<()>,
    },

    /// Close the open dialog, discarding the form buffer. No remote call.
    CancelDialog { respond_to: Response<()> },

    /// Run the validation gate and, on pass, the remote create/update.
    SubmitDialog { respond_to: Response<SubmitOutcome> },

    /// Delete a product; not gated by dialog state. Responds with `true`
    /// when the remote call succeeded.
    DeleteProduct {
        id: ProductId,
        respond_to: Response<bool>,
    },

    /// Read-only copy of the current view state.
    Snapshot {
        respond_to: Response<DashboardSnapshot>,
    },
}

/// What happened to a submit request.
///
/// Failures are values, not errors: the dialog stays open on `Rejected`
/// and `RemoteFailed`, and the caller can re-submit after the user fixes
/// the form or the backend recovers.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The remote call succeeded, the store was updated and the dialog
    /// closed.
    Saved,
    /// The validation gate rejected the form; no remote call was made.
    Rejected(ValidationError),
    /// The remote call failed; the store is unchanged.
    RemoteFailed(GatewayError),
    /// Submit arrived while no dialog was open.
    NoDialogOpen,
}
