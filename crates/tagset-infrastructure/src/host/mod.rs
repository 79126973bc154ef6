//! Offline Host
//!
//! Serves a configuration document exported from a host through the
//! [`Runner`](tagset_domain::Runner) port, so that rules can run outside
//! the analysis process and in tests.

mod builder;
mod document;
mod evaluator;
mod runner;

pub use builder::{BlockBuilder, DocumentBuilder};
pub use document::{ConfigDocument, Variable};
pub use evaluator::evaluate;
pub use runner::DocumentRunner;
