//! # Dashboard Core
//!
//! Client-side CRUD controller for a remote product catalog. The crate
//! keeps a local mirror of the remote collection in sync through a remote
//! gateway, validates drafts before they ever reach the network, and
//! reports every success or failure through a notification sink.
//!
//! ## Architecture Overview
//!
//! The crate separates concerns into three layers:
//!
//! 1. **State Layer** ([`CollectionStore`], [`FormBuffer`], [`DialogState`])
//!    - the view state, owned exclusively by the controller.
//! 2. **Runtime Layer** ([`DashboardController`]) - sequential command
//!    processing in its own Tokio task.
//! 3. **Interface Layer** ([`DashboardHandle`]) - type-safe, cloneable
//!    async API for the view.
//!
//! External collaborators sit behind two traits and are injected at
//! `run()` time: [`ProductGateway`] (the remote HTTP API) and
//! [`NotificationSink`] (toast/log feedback to the user).
//!
//! ## Concurrency Model
//!
//! The controller is the only writer of the view state. It processes
//! commands one at a time, so there are no locks, no torn updates, and a
//! duplicate submit is rejected naturally because the first one already
//! closed the dialog.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use dashboard_core::mock::{MockGateway, RecordingSink};
//! use dashboard_core::{
//!     DashboardContext, DashboardController, FormField, Product, ProductId, SubmitOutcome,
//! };
//!
//! #[tokio::main]
//! async fn main() {
//!     // Script the remote API: the create call answers with the server's
//!     // canonical record, including the assigned id.
//!     let gateway = Arc::new(MockGateway::new());
//!     gateway.expect_create().return_ok(Product::new(
//!         ProductId::from("p1"),
//!         "Lamp",
//!         "A desk lamp",
//!         19.5,
//!         "Home",
//!         "https://example.com/lamp.png",
//!     ));
//!     let notifier = Arc::new(RecordingSink::new());
//!
//!     // Spawn the controller and drive it through its handle.
//!     let (controller, dashboard) = DashboardController::new(8);
//!     tokio::spawn(controller.run(DashboardContext {
//!         gateway: gateway.clone(),
//!         notifier,
//!     }));
//!
//!     dashboard.open_create().await.unwrap();
//!     dashboard.edit_field(FormField::Name, "Lamp").await.unwrap();
//!     dashboard
//!         .edit_field(FormField::Description, "A desk lamp")
//!         .await
//!         .unwrap();
//!     dashboard.edit_field(FormField::Price, "19.5").await.unwrap();
//!     dashboard.edit_field(FormField::Category, "Home").await.unwrap();
//!     dashboard
//!         .edit_field(FormField::Image, "https://example.com/lamp.png")
//!         .await
//!         .unwrap();
//!
//!     let outcome = dashboard.submit().await.unwrap();
//!     assert_eq!(outcome, SubmitOutcome::Saved);
//!
//!     let snapshot = dashboard.snapshot().await.unwrap();
//!     assert_eq!(snapshot.products.len(), 1);
//!     assert_eq!(snapshot.products[0].id, ProductId::from("p1"));
//!     gateway.verify();
//! }
//! ```
//!
//! ## Error Handling
//!
//! Three disjoint failure families, per the taxonomy in [`message`]:
//!
//! - [`ValidationError`] - local, pre-network, always recoverable.
//! - [`GatewayError`] - any remote failure; never mutates the store.
//! - [`ControllerError`] - the controller task itself is gone; the only
//!   error a handle call can return.
//!
//! ## Testing
//!
//! [`mock::MockGateway`] scripts the remote API with an
//! expectation-builder and [`mock::RecordingSink`] captures notifications.
//! See the [`mock`] module for patterns.

pub mod controller;
pub mod dialog;
pub mod error;
pub mod form;
pub mod gateway;
pub mod handle;
pub mod message;
pub mod mock;
pub mod model;
pub mod notify;
pub mod store;
pub mod validate;

// Re-export core types for convenience
pub use controller::{DashboardContext, DashboardController, DashboardSnapshot};
pub use dialog::DialogState;
pub use error::ControllerError;
pub use form::{FormBuffer, FormField};
pub use gateway::{GatewayError, ProductGateway};
pub use handle::DashboardHandle;
pub use message::{DashboardCommand, Response, SubmitOutcome};
pub use model::{Product, ProductId, ProductPayload};
pub use notify::{NotificationSink, Severity};
pub use store::CollectionStore;
pub use validate::{validate, ValidationError};
