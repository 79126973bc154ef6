//! Lint Configuration
//!
//! The lint configuration file carries one `[rule.<name>]` table per rule
//! and an optional `[logging]` table. Rule tables are opaque here: the
//! offline host hands them to rules, which decode them into their own
//! typed records.

mod lint;
mod loader;

pub use lint::{LintConfig, LoggingConfig, RuleSection};
pub use loader::{CONFIG_ENV_PREFIX, ConfigLoader, DEFAULT_CONFIG_FILENAME};
