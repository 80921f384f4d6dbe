//! # Dashboard Controller
//!
//! The controller is the "server" half of the dashboard: it exclusively
//! owns the collection store, the form buffer and the dialog state, and
//! processes [`DashboardCommand`]s sequentially from an mpsc channel. One
//! logical writer, no locks.
//!
//! # Architecture Note
//! Sequential processing is also what guards against duplicate
//! submissions: a double-clicked "create" queues two `SubmitDialog`
//! commands, but the second one is handled only after the first finished
//! and closed the dialog, so it finds `Idle` and is rejected without a
//! remote call. No in-flight boolean is needed.
//!
//! ## Context Injection
//! The remote gateway and the notification sink are injected at `run()`
//! time, not at construction time. Construction stays collaborator-free,
//! and tests wire in a mock gateway and a recording sink the same way the
//! app wires in the HTTP gateway and the tracing sink.
//!
//! ## Operations
//!
//! * **LoadProducts**: remote read-all, wholesale store replacement. On
//!   failure the store keeps its previous contents (empty on the first
//!   load) and the failure is reported. Callable again as a retry.
//! * **OpenCreate / OpenEdit**: dialog transitions out of `Idle` only.
//!   Opening create clears the form; opening edit copies the target
//!   product's fields into it.
//! * **EditField**: verbatim assignment, no per-keystroke validation.
//! * **CancelDialog**: discard the form, back to `Idle`, no remote call.
//! * **SubmitDialog**: validation gate first; on pass, remote
//!   create/update; on success the store is updated with the server's
//!   canonical record and the dialog closes; on any failure the dialog
//!   stays open and the store is untouched.
//! * **DeleteProduct**: straight to the gateway, store updated only on
//!   success.
//! * **Snapshot**: clone of the current view state for the UI and tests.

use crate::dialog::DialogState;
use crate::form::FormBuffer;
use crate::gateway::ProductGateway;
use crate::handle::DashboardHandle;
use crate::message::{DashboardCommand, SubmitOutcome};
use crate::model::Product;
use crate::notify::{NotificationSink, Severity};
use crate::store::CollectionStore;
use crate::validate::validate;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Collaborators injected into the controller at `run()` time.
pub struct DashboardContext {
    pub gateway: Arc<dyn ProductGateway>,
    pub notifier: Arc<dyn NotificationSink>,
}

/// Read-only copy of the controller's state, for rendering and assertions.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSnapshot {
    pub products: Vec<Product>,
    pub dialog: DialogState,
    pub form: FormBuffer,
    /// True until the first `LoadProducts` completes, success or failure.
    pub loading: bool,
}

/// The dashboard's single logical writer.
///
/// Owns all mutable view state and the receiver end of the command
/// channel. Create one with [`DashboardController::new`], then spawn
/// [`run`](DashboardController::run) with the production or test context.
pub struct DashboardController {
    receiver: mpsc::Receiver<DashboardCommand>,
    store: CollectionStore,
    form: FormBuffer,
    dialog: DialogState,
    loading: bool,
}

impl DashboardController {
    /// Creates the controller and its associated handle.
    ///
    /// `buffer_size` is the capacity of the command channel; callers wait
    /// when it is full.
    pub fn new(buffer_size: usize) -> (Self, DashboardHandle) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let controller = Self {
            receiver,
            store: CollectionStore::new(),
            form: FormBuffer::default(),
            dialog: DialogState::Idle,
            loading: true,
        };
        (controller, DashboardHandle::new(sender))
    }

    /// Runs the command loop until every handle has been dropped.
    pub async fn run(mut self, context: DashboardContext) {
        info!("Dashboard controller started");

        while let Some(command) = self.receiver.recv().await {
            match command {
                DashboardCommand::LoadProducts { respond_to } => {
                    debug!("LoadProducts");
                    let ok = match context.gateway.list_products().await {
                        Ok(products) => {
                            info!(count = products.len(), "Catalog loaded");
                            self.store.replace_all(products);
                            true
                        }
                        Err(e) => {
                            warn!(error = %e, "Catalog load failed");
                            context
                                .notifier
                                .notify(Severity::Error, "Error fetching products");
                            false
                        }
                    };
                    self.loading = false;
                    let _ = respond_to.send(ok);
                }
                DashboardCommand::OpenCreate { respond_to } => {
                    let ok = if self.dialog.is_idle() {
                        debug!("OpenCreate");
                        self.form.clear();
                        self.dialog = DialogState::CreateOpen;
                        true
                    } else {
                        warn!(state = ?self.dialog, "OpenCreate ignored, dialog already open");
                        false
                    };
                    let _ = respond_to.send(ok);
                }
                DashboardCommand::OpenEdit { id, respond_to } => {
                    let ok = if !self.dialog.is_idle() {
                        warn!(state = ?self.dialog, "OpenEdit ignored, dialog already open");
                        false
                    } else if let Some(product) = self.store.get(&id) {
                        debug!(%id, "OpenEdit");
                        self.form = FormBuffer::from_product(product);
                        self.dialog = DialogState::EditOpen(id);
                        true
                    } else {
                        warn!(%id, "OpenEdit ignored, product not in store");
                        false
                    };
                    let _ = respond_to.send(ok);
                }
                DashboardCommand::EditField {
                    field,
                    value,
                    respond_to,
                } => {
                    self.form.set(field, value);
                    let _ = respond_to.send(());
                }
                DashboardCommand::CancelDialog { respond_to } => {
                    debug!(state = ?self.dialog, "CancelDialog");
                    self.close_dialog();
                    let _ = respond_to.send(());
                }
                DashboardCommand::SubmitDialog { respond_to } => {
                    let outcome = self.submit(&context).await;
                    let _ = respond_to.send(outcome);
                }
                DashboardCommand::DeleteProduct { id, respond_to } => {
                    debug!(%id, "DeleteProduct");
                    let ok = match context.gateway.delete_product(&id).await {
                        Ok(()) => {
                            self.store.remove(&id);
                            info!(%id, remaining = self.store.len(), "Product deleted");
                            context.notifier.notify(Severity::Success, "Product deleted");
                            true
                        }
                        Err(e) => {
                            warn!(%id, error = %e, "Delete failed");
                            context
                                .notifier
                                .notify(Severity::Error, "Error deleting product");
                            false
                        }
                    };
                    let _ = respond_to.send(ok);
                }
                DashboardCommand::Snapshot { respond_to } => {
                    let _ = respond_to.send(self.snapshot());
                }
            }
        }

        info!(products = self.store.len(), "Dashboard controller shut down");
    }

    async fn submit(&mut self, context: &DashboardContext) -> SubmitOutcome {
        let target = match &self.dialog {
            DialogState::Idle => {
                warn!("Submit with no dialog open");
                return SubmitOutcome::NoDialogOpen;
            }
            DialogState::CreateOpen => None,
            DialogState::EditOpen(id) => Some(id.clone()),
        };

        // Validation gate: failure aborts before any remote call, the
        // dialog stays open and the form is unchanged.
        let payload = match validate(&self.form) {
            Ok(payload) => payload,
            Err(e) => {
                warn!(error = %e, "Validation rejected submission");
                context.notifier.notify(Severity::Error, &e.to_string());
                return SubmitOutcome::Rejected(e);
            }
        };

        match target {
            None => match context.gateway.create_product(&payload).await {
                Ok(created) => {
                    // Insert the server's record, not the raw form: it
                    // carries the assigned id the form never had.
                    info!(id = %created.id, "Product created");
                    self.store.insert(created);
                    context.notifier.notify(Severity::Success, "Product created");
                    self.close_dialog();
                    SubmitOutcome::Saved
                }
                Err(e) => {
                    warn!(error = %e, "Create failed");
                    context
                        .notifier
                        .notify(Severity::Error, "Error creating product");
                    SubmitOutcome::RemoteFailed(e)
                }
            },
            Some(id) => match context.gateway.update_product(&id, &payload).await {
                Ok(updated) => {
                    info!(%id, "Product updated");
                    self.store.replace(&id, updated);
                    context.notifier.notify(Severity::Success, "Product updated");
                    self.close_dialog();
                    SubmitOutcome::Saved
                }
                Err(e) => {
                    warn!(%id, error = %e, "Update failed");
                    context
                        .notifier
                        .notify(Severity::Error, "Error updating product");
                    SubmitOutcome::RemoteFailed(e)
                }
            },
        }
    }

    /// Discards the form buffer and returns to `Idle`, clearing the
    /// editing target with it.
    fn close_dialog(&mut self) {
        self.form.clear();
        self.dialog = DialogState::Idle;
    }

    fn snapshot(&self) -> DashboardSnapshot {
        DashboardSnapshot {
            products: self.store.products().to_vec(),
            dialog: self.dialog.clone(),
            form: self.form.clone(),
            loading: self.loading,
        }
    }
}
