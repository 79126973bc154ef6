//! # tagset
//!
//! Tag compliance checks for infrastructure-as-code declarations.
//!
//! This crate is the public face of the workspace. It re-exports the
//! layers and holds the diagnostic output formats used by the `tagset`
//! binary.
//!
//! ## Example
//!
//! ```ignore
//! use tagset::infrastructure::{ConfigDocument, ConfigLoader, DocumentRunner};
//! use tagset::rules::RuleSet;
//!
//! let config = ConfigLoader::new().load()?;
//! let document = ConfigDocument::from_path("plan.json".as_ref())?;
//! let mut runner = DocumentRunner::new(document, config.clone());
//! let report = RuleSet::builtin().check(&mut runner, |r| config.is_enabled(r.name(), r.enabled()));
//! ```
//!
//! ## Architecture
//!
//! - `domain` - boundary types, the `Rule` and `Runner` ports, domain errors
//! - `rules` - tag extraction, requirement checks and the shipped rules
//! - `infrastructure` - configuration, logging and the offline host

pub mod output;

/// Domain layer - boundary types and ports
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use tagset_domain::*;
}

/// Rules layer - the shipped rules and the rule set
///
/// Re-exports from the rules crate for convenience
pub mod rules {
    pub use tagset_rules::*;
}

/// Infrastructure layer - config, logging and the offline host
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use tagset_infrastructure::*;
}

pub use output::{IssueRecord, OutputFormat, has_errors, render};
