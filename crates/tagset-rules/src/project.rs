//! Ruleset metadata

/// Ruleset name announced to the host
pub const RULESET_NAME: &str = "tagset-ruleset";

/// Ruleset version
pub const VERSION: &str = "1.0.0";

/// Documentation link for the rule `name` at the current version
pub fn reference_link(name: &str) -> String {
    format!("https://github.com/tagset/tagset-ruleset/blob/v{VERSION}/docs/rules/{name}.md")
}
