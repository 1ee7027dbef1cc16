//! JumpingFox gateway library entry.
//!
//! This crate wires the config layer, the in-memory store, the request
//! counter, and the HTTP handlers into the demo API service. It is intended
//! to be consumed by the binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod handlers;
pub mod ops;
pub mod response;
pub mod router;
