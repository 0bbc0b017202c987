//! p99spike core: the response payloads, fixed demo constants, and error
//! surface shared by the server crate and its tests.
//!
//! Carries no runtime or HTTP dependencies.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod message;

/// Shared result type.
pub use error::{P99Error, Result};
pub use message::{Health, Message};
