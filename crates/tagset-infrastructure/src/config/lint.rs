use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (`trace`, `debug`, `info`, `warn`, `error`)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

/// One `[rule.<name>]` table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleSection {
    /// Explicit enablement; the rule's default applies when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Remaining rule-specific keys
    #[serde(flatten)]
    pub body: serde_json::Map<String, serde_json::Value>,
}

/// Whole lint configuration file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LintConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Rule tables keyed by rule name
    #[serde(default, rename = "rule")]
    pub rules: BTreeMap<String, RuleSection>,
}

impl LintConfig {
    /// Rule-specific body of the rule `name`, without the `enabled` key
    pub fn rule_body(&self, name: &str) -> Option<serde_json::Value> {
        self.rules
            .get(name)
            .map(|section| serde_json::Value::Object(section.body.clone()))
    }

    /// Whether the rule `name` runs, given its default enablement
    pub fn is_enabled(&self, name: &str, default: bool) -> bool {
        self.rules
            .get(name)
            .and_then(|section| section.enabled)
            .unwrap_or(default)
    }

    /// Add or replace a rule table
    pub fn with_rule(mut self, name: &str, enabled: bool, body: serde_json::Value) -> Self {
        let body = match body {
            serde_json::Value::Object(map) => map,
            _ => serde_json::Map::new(),
        };
        self.rules.insert(
            name.to_string(),
            RuleSection {
                enabled: Some(enabled),
                body,
            },
        );
        self
    }
}
