//! # tagset infrastructure
//!
//! Ambient services around the rules:
//!
//! - `config` - lint configuration file loading (Figment: defaults, TOML,
//!   environment)
//! - `logging` - tracing subscriber setup
//! - `host` - [`DocumentRunner`], an offline host serving a JSON
//!   configuration document through the [`Runner`](tagset_domain::Runner)
//!   port

pub mod config;
pub mod error;
pub mod host;
pub mod logging;

pub use config::{ConfigLoader, LintConfig, LoggingConfig, RuleSection};
pub use error::{Error, Result};
pub use host::{BlockBuilder, ConfigDocument, DocumentBuilder, DocumentRunner, Variable};
pub use logging::{init_logging, parse_log_level};
