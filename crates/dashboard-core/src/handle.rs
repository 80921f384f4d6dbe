//! # Dashboard Handle
//!
//! The type-safe client half of the controller. It holds only the sender
//! end of the command channel, so it is cheap to clone and can be shared
//! across tasks (one per view, one for a background refresh, ...). Every
//! method awaits the controller's answer over a oneshot channel.

use crate::controller::DashboardSnapshot;
use crate::error::ControllerError;
use crate::form::FormField;
use crate::message::{DashboardCommand, SubmitOutcome};
use crate::model::ProductId;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

/// Cloneable, async interface to a running [`DashboardController`].
///
/// [`DashboardController`]: crate::controller::DashboardController
#[derive(Clone)]
pub struct DashboardHandle {
    sender: mpsc::Sender<DashboardCommand>,
}

impl DashboardHandle {
    pub fn new(sender: mpsc::Sender<DashboardCommand>) -> Self {
        Self { sender }
    }

    /// Replaces the collection store with a fresh remote read. Returns
    /// `true` when the load succeeded.
    #[instrument(skip(self))]
    pub async fn load_products(&self) -> Result<bool, ControllerError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(DashboardCommand::LoadProducts { respond_to })
            .await
            .map_err(|_| ControllerError::ControllerClosed)?;
        response.await.map_err(|_| ControllerError::ControllerGone)
    }

    /// Opens the create dialog. Returns `false` when a dialog is already
    /// open.
    pub async fn open_create(&self) -> Result<bool, ControllerError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(DashboardCommand::OpenCreate { respond_to })
            .await
            .map_err(|_| ControllerError::ControllerClosed)?;
        response.await.map_err(|_| ControllerError::ControllerGone)
    }

    /// Opens the edit dialog for a product already in the store. Returns
    /// `false` when a dialog is already open or the id is unknown.
    pub async fn open_edit(&self, id: ProductId) -> Result<bool, ControllerError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(DashboardCommand::OpenEdit { id, respond_to })
            .await
            .map_err(|_| ControllerError::ControllerClosed)?;
        response.await.map_err(|_| ControllerError::ControllerGone)
    }

    /// Stores a raw field value in the form buffer, verbatim.
    pub async fn edit_field(
        &self,
        field: FormField,
        value: impl Into<String>,
    ) -> Result<(), ControllerError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(DashboardCommand::EditField {
                field,
                value: value.into(),
                respond_to,
            })
            .await
            .map_err(|_| ControllerError::ControllerClosed)?;
        response.await.map_err(|_| ControllerError::ControllerGone)
    }

    /// Closes the open dialog without a remote call.
    pub async fn cancel(&self) -> Result<(), ControllerError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(DashboardCommand::CancelDialog { respond_to })
            .await
            .map_err(|_| ControllerError::ControllerClosed)?;
        response.await.map_err(|_| ControllerError::ControllerGone)
    }

    /// Submits the open dialog through the validation gate and the remote
    /// gateway.
    #[instrument(skip(self))]
    pub async fn submit(&self) -> Result<SubmitOutcome, ControllerError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(DashboardCommand::SubmitDialog { respond_to })
            .await
            .map_err(|_| ControllerError::ControllerClosed)?;
        response.await.map_err(|_| ControllerError::ControllerGone)
    }

    /// Deletes a product, regardless of dialog state. Returns `true` when
    /// the remote call succeeded.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: ProductId) -> Result<bool, ControllerError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(DashboardCommand::DeleteProduct { id, respond_to })
            .await
            .map_err(|_| ControllerError::ControllerClosed)?;
        response.await.map_err(|_| ControllerError::ControllerGone)
    }

    /// Fetches a read-only copy of the current view state.
    pub async fn snapshot(&self) -> Result<DashboardSnapshot, ControllerError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(DashboardCommand::Snapshot { respond_to })
            .await
            .map_err(|_| ControllerError::ControllerClosed)?;
        response.await.map_err(|_| ControllerError::ControllerGone)
    }
}
