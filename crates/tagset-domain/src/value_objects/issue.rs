//! Issues
//!
//! An [`Issue`] is the sole observable output of a check: the owning rule,
//! a message, and the exact range that triggered it.

use super::range::Range;
use crate::ports::Rule;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity level reported for a rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Notice,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "ERROR"),
            Self::Warning => write!(f, "WARNING"),
            Self::Notice => write!(f, "NOTICE"),
        }
    }
}

/// Identity of the rule that owns an issue
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RuleRef {
    /// Rule name (e.g., `ensure_default_tags`)
    pub name: String,
    /// Rule severity at emission time
    pub severity: Severity,
    /// Documentation link for the rule
    pub link: String,
}

impl RuleRef {
    /// Capture the identity of `rule`
    pub fn of(rule: &dyn Rule) -> Self {
        Self {
            name: rule.name().to_string(),
            severity: rule.severity(),
            link: rule.link(),
        }
    }
}

/// A single reported finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Owning rule
    pub rule: RuleRef,
    /// Human-readable message
    pub message: String,
    /// Attribute or block range that produced the finding
    pub range: Range,
}

impl Issue {
    /// Build an issue owned by `rule`
    pub fn new<S: Into<String>>(rule: &dyn Rule, message: S, range: Range) -> Self {
        Self {
            rule: RuleRef::of(rule),
            message: message.into(),
            range,
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: [{}] {}: {}",
            self.range, self.rule.severity, self.rule.name, self.message
        )
    }
}
