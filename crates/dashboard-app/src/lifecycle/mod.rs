//! # Lifecycle & Orchestration
//!
//! Starting the dashboard means wiring three pieces together: the
//! controller task, the gateway it calls, and the sink it reports through.
//! [`DashboardSystem`] is the conductor: it spawns the controller with its
//! collaborators injected and coordinates graceful shutdown (drop the
//! handle, await the task).
//!
//! Collaborators are injected at start, so tests hand in the mock gateway
//! and a recording sink while `main` hands in the HTTP gateway and the
//! tracing sink, both through the same entry point.

pub mod system;
pub mod tracing;

pub use system::*;
pub use tracing::*;
