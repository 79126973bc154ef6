//! Tests for lint configuration loading

use serde_json::json;
use std::fs;
use tagset_infrastructure::{ConfigLoader, LintConfig};
use tempfile::TempDir;

const CONFIG: &str = r#"
[logging]
level = "debug"

[rule.ensure_default_tags]
enabled = true
tags = ["team", "application"]
exclude = ["aws_instance"]

[rule.validate_tags]
tags = [
  { tag = "team", allowed_values = ["platform-engineering", "voyage-optimization"] },
]
"#;

#[test]
fn test_load_from_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(".tagset.toml");
    fs::write(&path, CONFIG).unwrap();

    let config = ConfigLoader::new()
        .with_env_prefix("TAGSET_TEST_UNUSED")
        .with_config_path(&path)
        .load()
        .unwrap();

    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.rules.len(), 2);
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let temp = TempDir::new().unwrap();
    let result = ConfigLoader::new()
        .with_config_path(temp.path().join("absent.toml"))
        .load();
    assert!(result.is_err());
}

#[test]
fn test_rule_body_excludes_enabled_flag() {
    let config = ConfigLoader::from_toml_str(CONFIG).unwrap();

    assert_eq!(
        config.rule_body("ensure_default_tags"),
        Some(json!({"tags": ["team", "application"], "exclude": ["aws_instance"]}))
    );
    assert_eq!(
        config.rule_body("validate_tags"),
        Some(json!({"tags": [{
            "tag": "team",
            "allowed_values": ["platform-engineering", "voyage-optimization"]
        }]}))
    );
    assert_eq!(config.rule_body("aws_resource_missing_tags"), None);
}

#[test]
fn test_enablement_falls_back_to_rule_default() {
    let config = ConfigLoader::from_toml_str(CONFIG).unwrap();

    assert!(config.is_enabled("ensure_default_tags", false));
    assert!(!config.is_enabled("validate_tags", false));
    assert!(config.is_enabled("validate_tags", true));
    assert!(!config.is_enabled("unknown_rule", false));
}

#[test]
fn test_invalid_log_level_is_rejected() {
    let result = ConfigLoader::from_toml_str("[logging]\nlevel = \"loud\"\n");
    assert!(result.is_err());
}

#[test]
fn test_defaults_without_rules() {
    let config = ConfigLoader::from_toml_str("").unwrap();
    assert_eq!(config, LintConfig::default());
    assert_eq!(config.logging.level, "warn");
}
