//! Top-level facade crate for JumpingFox.
//!
//! Re-exports the core types and the gateway library so users can depend on a
//! single crate.

pub mod core {
    pub use jumpingfox_core::*;
}

pub mod gateway {
    pub use jumpingfox_gateway::*;
}
