//! JumpingFox core: domain models, the request metrics counter, and the
//! in-memory data store.
//!
//! This crate carries no HTTP or runtime dependencies so it can be reused by
//! the gateway, by load-generation tooling, and by tests. All state is
//! volatile; the store reseeds itself on construction and nothing survives a
//! process restart.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `ApiError`/`Result` so production
//! processes do not crash on malformed input or bad traffic.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod metrics;
pub mod model;
pub mod store;

/// Shared result type.
pub use error::{ApiError, Result};
