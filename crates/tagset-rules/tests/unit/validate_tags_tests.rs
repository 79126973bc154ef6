//! Tests for validate_tags

use crate::test_utils::{RecordingRunner, messages, runner_with_rule, tags_expr_range};
use serde_json::{Value, json};
use tagset_domain::{ExprNode, Rule};
use tagset_infrastructure::{ConfigDocument, DocumentBuilder, DocumentRunner, LintConfig};
use tagset_rules::ValidateTagsRule;

const CLOUD_CREW: &str =
    "Tag value cloud-crew is not allowed for tag team (valid values are platform-engineering, voyage-optimization)";

fn team_constraint() -> Value {
    json!({"tags": [{
        "tag": "team",
        "allowed_values": ["platform-engineering", "voyage-optimization"]
    }]})
}

#[test]
fn test_disallowed_resource_tag_value() {
    let document = DocumentBuilder::new("main.tf")
        .resource("aws_instance", "web", |r| r.tags(&[("team", "cloud-crew")]))
        .build();
    let resource = document.resources[0].clone();
    let mut runner = runner_with_rule(document, "validate_tags", team_constraint());

    ValidateTagsRule::new().check(&mut runner).unwrap();

    let issues = runner.issues();
    assert_eq!(messages(issues), vec![CLOUD_CREW]);
    assert_eq!(issues[0].range, tags_expr_range(&resource));
    assert_eq!(issues[0].rule.name, "validate_tags");
}

#[test]
fn test_disallowed_value_from_variable() {
    let document = DocumentBuilder::new("main.tf")
        .resource("aws_instance", "web", |r| {
            r.tags_expr(ExprNode::Object(
                [("team".to_string(), ExprNode::var("team"))].into(),
            ))
        })
        .variable("team", "cloud-crew")
        .build();
    let mut runner = runner_with_rule(document, "validate_tags", team_constraint());

    ValidateTagsRule::new().check(&mut runner).unwrap();

    assert_eq!(messages(runner.issues()), vec![CLOUD_CREW]);
}

#[test]
fn test_disallowed_provider_default_tag_value() {
    let document = DocumentBuilder::new("main.tf")
        .provider("aws", |p| p.default_tags(|t| t.tags(&[("team", "cloud-crew")])))
        .build();
    let provider = document.providers[0].clone();
    let mut runner = runner_with_rule(document, "validate_tags", team_constraint());

    ValidateTagsRule::new().check(&mut runner).unwrap();

    let issues = runner.issues();
    assert_eq!(messages(issues), vec![CLOUD_CREW]);
    assert_eq!(issues[0].range, tags_expr_range(&provider));
}

#[test]
fn test_allowed_and_unconstrained_values_pass() {
    let document = DocumentBuilder::new("main.tf")
        .resource("aws_instance", "web", |r| {
            r.tags(&[("team", "voyage-optimization"), ("env", "anything")])
        })
        .resource("aws_s3_bucket", "logs", |r| r.tags(&[("env", "prod")]))
        .build();
    let mut runner = runner_with_rule(document, "validate_tags", team_constraint());

    ValidateTagsRule::new().check(&mut runner).unwrap();

    assert!(runner.issues().is_empty());
}

#[test]
fn test_resource_without_tags_is_not_checked() {
    let document = DocumentBuilder::new("main.tf")
        .provider("aws", |p| p)
        .resource("aws_instance", "web", |r| r)
        .build();
    let mut runner = runner_with_rule(document, "validate_tags", team_constraint());

    ValidateTagsRule::new().check(&mut runner).unwrap();

    assert!(runner.issues().is_empty());
}

#[test]
fn test_excluded_resource_kind_is_not_checked() {
    let document = DocumentBuilder::new("main.tf")
        .resource("aws_instance", "web", |r| r.tags(&[("team", "cloud-crew")]))
        .resource("aws_s3_bucket", "logs", |r| r.tags(&[("team", "cloud-crew")]))
        .build();
    let mut config = team_constraint();
    config["exclude"] = json!(["aws_instance"]);
    let bucket = document.resources[1].clone();
    let mut runner = runner_with_rule(document, "validate_tags", config);

    ValidateTagsRule::new().check(&mut runner).unwrap();

    let issues = runner.issues();
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].range, tags_expr_range(&bucket));
}

#[test]
fn test_excluded_resource_kind_is_never_queried() {
    let document = DocumentBuilder::new("main.tf")
        .resource("aws_instance", "web", |r| r.tags(&[("team", "cloud-crew")]))
        .build();
    let mut config = team_constraint();
    config["exclude"] = json!(["aws_instance"]);
    let mut runner = runner_with_rule(document, "validate_tags", config);
    let mut recording = RecordingRunner::new(&mut runner);

    ValidateTagsRule::new().check(&mut recording).unwrap();

    assert!(recording.queried_resource("aws_s3_bucket"));
    assert!(!recording.queried_resource("aws_instance"));
    assert!(runner.issues().is_empty());
}

#[test]
fn test_disallowed_values_on_data_and_streaming_resources() {
    let document = DocumentBuilder::new("main.tf")
        .resource("aws_redshift_cluster", "warehouse", |r| {
            r.tags(&[("team", "cloud-crew")])
        })
        .resource("aws_msk_cluster", "events", |r| r.tags(&[("team", "cloud-crew")]))
        .resource("aws_opensearch_domain", "search", |r| {
            r.tags(&[("team", "voyage-optimization")])
        })
        .build();
    let mut runner = runner_with_rule(document, "validate_tags", team_constraint());

    ValidateTagsRule::new().check(&mut runner).unwrap();

    assert_eq!(messages(runner.issues()), vec![CLOUD_CREW, CLOUD_CREW]);
}

#[test]
fn test_tag_named_var_is_checked() {
    let document = ConfigDocument::from_json_str(
        r#"{
            "resources": [{
                "type": "resource",
                "labels": ["aws_instance", "web"],
                "body": {
                    "attributes": {
                        "tags": {
                            "name": "tags",
                            "expr": {"node": {"object": {"var": {"literal": "cloud-crew"}}}}
                        }
                    }
                }
            }]
        }"#,
    )
    .unwrap();
    let config = LintConfig::default().with_rule(
        "validate_tags",
        true,
        json!({"tags": [{"tag": "var", "allowed_values": ["ok"]}]}),
    );
    let mut runner = DocumentRunner::new(document, config);

    ValidateTagsRule::new().check(&mut runner).unwrap();

    assert_eq!(
        messages(runner.issues()),
        vec!["Tag value cloud-crew is not allowed for tag var (valid values are ok)"]
    );
}

#[test]
fn test_one_issue_per_offending_tag_in_constraint_order() {
    let document = DocumentBuilder::new("main.tf")
        .resource("aws_instance", "web", |r| {
            r.tags(&[("team", "cloud-crew"), ("env", "qa")])
        })
        .build();
    let config = json!({"tags": [
        {"tag": "env", "allowed_values": ["prod", "dev"]},
        {"tag": "team", "allowed_values": ["platform-engineering"]},
        {"tag": "env", "allowed_values": ["qa"]},
    ]});
    let mut runner = runner_with_rule(document, "validate_tags", config);

    ValidateTagsRule::new().check(&mut runner).unwrap();

    assert_eq!(
        messages(runner.issues()),
        vec![
            "Tag value qa is not allowed for tag env (valid values are prod, dev)",
            "Tag value cloud-crew is not allowed for tag team (valid values are platform-engineering)",
        ]
    );
}

#[test]
fn test_malformed_configuration_fails_check() {
    let document = DocumentBuilder::new("main.tf").build();
    let mut runner = runner_with_rule(document, "validate_tags", json!({"tags": ["team"]}));

    let err = ValidateTagsRule::new().check(&mut runner).unwrap_err();

    assert!(matches!(err, tagset_domain::Error::ConfigDecode { .. }));
}
