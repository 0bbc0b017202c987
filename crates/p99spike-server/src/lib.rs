//! p99spike server library entry.
//!
//! Wires config, shared state, and the demo and operational routes into an
//! axum router. Consumed by the binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod demo;
pub mod ops;
pub mod router;
