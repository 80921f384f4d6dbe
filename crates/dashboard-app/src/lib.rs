//! # Dashboard App
//!
//! Production wiring around `dashboard-core`: the reqwest-backed HTTP
//! gateway, configuration, the tracing-backed notification sink, and the
//! lifecycle orchestrator that spawns the controller. The [`lifecycle`]
//! module is the entry point; `main.rs` is a scripted walk through the
//! CRUD flow.

pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod notify;
