//! Host and Rule Ports
//!
//! Boundary contracts between rules and the analysis host:
//!
//! - [`Runner`] - the capability set a host serves to a running check
//! - [`Rule`] - what every rule exposes back to the host

/// Rule contract
pub mod rule;
/// Host capability contract
pub mod runner;

pub use rule::Rule;
pub use runner::{Runner, decode_typed_config};
