//! Observability setup for the dashboard.
//!
//! Structured logging with the `tracing` crate, configured via `RUST_LOG`:
//!
//! ```bash
//! RUST_LOG=info cargo run      # compact workflow log
//! RUST_LOG=debug cargo run     # full command payloads and request URLs
//! ```
//!
//! The compact format hides module paths; the controller and the gateway
//! attach structured fields (ids, counts, statuses) to every event
//! instead.

pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
