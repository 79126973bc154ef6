//! Requirement Checker
//!
//! Two checks over a resolved [`TagMap`]:
//!
//! - presence: which required tag names are missing, in configuration order
//! - allowed values: which constrained tags carry a value outside their
//!   allow-list, one finding per offending tag

use crate::extractor::TagMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Allowed values for one tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagConstraint {
    /// Tag name
    pub tag: String,
    /// Accepted values, in configuration order
    pub allowed_values: Vec<String>,
}

impl TagConstraint {
    pub fn new<S: Into<String>>(tag: S, allowed_values: &[&str]) -> Self {
        Self {
            tag: tag.into(),
            allowed_values: allowed_values.iter().map(|v| (*v).to_string()).collect(),
        }
    }

    /// Whether `value` is on the allow-list
    pub fn allows(&self, value: &str) -> bool {
        self.allowed_values.iter().any(|v| v == value)
    }
}

/// A tag whose value is not on its allow-list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueViolation<'a> {
    pub tag: &'a str,
    pub value: &'a str,
    pub allowed_values: &'a [String],
}

impl fmt::Display for ValueViolation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Tag value {} is not allowed for tag {} (valid values are {})",
            self.value,
            self.tag,
            self.allowed_values.join(", ")
        )
    }
}

/// Required tag names absent from `tags`, in the order of `required`
pub fn missing_tags<'a>(required: &'a [String], tags: &TagMap) -> Vec<&'a str> {
    required
        .iter()
        .filter(|name| !tags.contains_key(name.as_str()))
        .map(String::as_str)
        .collect()
}

/// `The <subject> is missing the following tags: "a", "b".`
pub fn missing_tags_message(subject: &str, missing: &[&str]) -> String {
    let quoted: Vec<String> = missing.iter().map(|name| format!("\"{name}\"")).collect();
    format!(
        "The {subject} is missing the following tags: {}.",
        quoted.join(", ")
    )
}

/// Constrained tags in `tags` whose value is not allowed
///
/// Follows the order of `constraints`. Only the first constraint naming a
/// tag applies; tags without a constraint are always allowed.
pub fn disallowed_values<'a>(
    constraints: &'a [TagConstraint],
    tags: &'a TagMap,
) -> Vec<ValueViolation<'a>> {
    let mut seen: Vec<&str> = Vec::new();
    let mut violations = Vec::new();

    for constraint in constraints {
        if seen.contains(&constraint.tag.as_str()) {
            continue;
        }
        seen.push(&constraint.tag);

        let Some(value) = tags.get(&constraint.tag) else {
            continue;
        };
        if !constraint.allows(value) {
            violations.push(ValueViolation {
                tag: &constraint.tag,
                value,
                allowed_values: &constraint.allowed_values,
            });
        }
    }

    violations
}
