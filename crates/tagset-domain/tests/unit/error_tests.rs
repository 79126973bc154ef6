//! Unit tests for domain error types

use tagset_domain::Error;

#[test]
fn test_config_decode_error() {
    let error = Error::config_decode("ensure_default_tags", "missing field `tags`");
    match &error {
        Error::ConfigDecode { rule, message } => {
            assert_eq!(rule, "ensure_default_tags");
            assert_eq!(message, "missing field `tags`");
        }
        _ => panic!("Expected ConfigDecode error"),
    }
    assert!(error.to_string().contains("ensure_default_tags"));
}

#[test]
fn test_only_evaluation_errors_are_recoverable() {
    assert!(Error::evaluation("unknown variable").is_evaluation());
    assert!(!Error::host_query("connection reset").is_evaluation());
    assert!(!Error::host_emission("closed").is_evaluation());
    assert!(!Error::config_decode("r", "bad").is_evaluation());
}

#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let error: Error = json_err.into();
    assert!(matches!(error, Error::Json { .. }));
}
