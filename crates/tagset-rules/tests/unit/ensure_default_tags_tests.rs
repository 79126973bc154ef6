//! Tests for ensure_default_tags

use crate::test_utils::{EchoRule, RecordingRunner, messages, runner_with_rule, tags_expr_range};
use serde_json::json;
use tagset_domain::Rule;
use tagset_infrastructure::{DocumentBuilder, DocumentRunner};
use tagset_rules::{EnsureDefaultTagsConfig, EnsureDefaultTagsRule, ResourceMissingTagsConfig};

fn run(runner: &mut DocumentRunner) {
    EnsureDefaultTagsRule::new().check(runner).unwrap();
}

#[test]
fn test_provider_with_required_default_tags_passes() {
    let document = DocumentBuilder::new("main.tf")
        .provider("aws", |p| {
            p.default_tags(|t| t.tags(&[("team", "platform-engineering")]))
        })
        .build();
    let mut runner = runner_with_rule(document, "ensure_default_tags", json!({"tags": ["team"]}));

    run(&mut runner);

    assert!(runner.issues().is_empty());
}

#[test]
fn test_provider_missing_one_default_tag() {
    let document = DocumentBuilder::new("main.tf")
        .provider("aws", |p| {
            p.default_tags(|t| t.tags(&[("team", "platform-engineering")]))
        })
        .build();
    let provider = document.providers[0].clone();
    let mut runner = runner_with_rule(
        document,
        "ensure_default_tags",
        json!({"tags": ["team", "application"]}),
    );

    run(&mut runner);

    let issues = runner.issues();
    assert_eq!(
        messages(issues),
        vec![r#"The provider is missing the following tags: "application"."#]
    );
    assert_eq!(issues[0].rule.name, "ensure_default_tags");
    assert_eq!(issues[0].range, tags_expr_range(&provider));
}

#[test]
fn test_missing_tags_listed_in_configuration_order() {
    let document = DocumentBuilder::new("main.tf")
        .provider("aws", |p| p.default_tags(|t| t.tags(&[("owner", "ops")])))
        .build();
    let mut runner = runner_with_rule(
        document,
        "ensure_default_tags",
        json!({"tags": ["team", "application", "owner", "cost_center"]}),
    );

    run(&mut runner);

    assert_eq!(
        messages(runner.issues()),
        vec![r#"The provider is missing the following tags: "team", "application", "cost_center"."#]
    );
}

#[test]
fn test_tagged_resource_without_provider_defaults_passes() {
    let document = DocumentBuilder::new("main.tf")
        .provider("aws", |p| p)
        .resource("aws_instance", "web", |r| {
            r.tags(&[("team", "platform-engineering")])
        })
        .build();
    let mut runner = runner_with_rule(document, "ensure_default_tags", json!({"tags": ["team"]}));

    run(&mut runner);

    assert!(runner.issues().is_empty());
}

#[test]
fn test_untagged_resource_and_provider_without_defaults_reports_both() {
    let document = DocumentBuilder::new("main.tf")
        .provider("aws", |p| p)
        .resource("aws_instance", "web", |r| r)
        .build();
    let provider_range = document.providers[0].def_range.clone();
    let resource_range = document.resources[0].def_range.clone();
    let mut runner = runner_with_rule(document, "ensure_default_tags", json!({"tags": ["team"]}));

    run(&mut runner);

    let issues = runner.issues();
    assert_eq!(
        messages(issues),
        vec![
            "default_tags is missing",
            r#"The resource is missing the following tags: "team"."#,
        ]
    );
    assert_eq!(issues[0].range, provider_range);
    assert_eq!(issues[1].range, resource_range);
    assert!(issues.iter().all(|i| i.rule.name == "ensure_default_tags"));
}

#[test]
fn test_missing_defaults_dropped_when_resources_are_tagged() {
    let document = DocumentBuilder::new("main.tf")
        .provider("aws", |p| p)
        .provider("aws", |p| p.attribute("alias", tagset_domain::ExprNode::string("east")))
        .resource("aws_s3_bucket", "logs", |r| {
            r.tags(&[("team", "platform-engineering"), ("application", "logs")])
        })
        .build();
    let mut runner = runner_with_rule(
        document,
        "ensure_default_tags",
        json!({"tags": ["team", "application"]}),
    );

    run(&mut runner);

    assert!(runner.issues().is_empty());
}

#[test]
fn test_excluded_resource_kind_is_never_checked() {
    let document = DocumentBuilder::new("main.tf")
        .provider("aws", |p| p)
        .resource("aws_instance", "web", |r| r)
        .build();
    let mut runner = runner_with_rule(
        document,
        "ensure_default_tags",
        json!({"tags": ["team"], "exclude": ["aws_instance"]}),
    );

    run(&mut runner);

    assert!(runner.issues().is_empty());
}

#[test]
fn test_excluded_resource_kind_is_never_queried() {
    let document = DocumentBuilder::new("main.tf")
        .provider("aws", |p| p)
        .resource("aws_instance", "web", |r| r)
        .resource("aws_s3_bucket", "logs", |r| r)
        .build();
    let mut runner = runner_with_rule(
        document,
        "ensure_default_tags",
        json!({"tags": ["team"], "exclude": ["aws_instance"]}),
    );
    let mut recording = RecordingRunner::new(&mut runner);

    EnsureDefaultTagsRule::new().check(&mut recording).unwrap();

    assert!(recording.queried_resource("aws_s3_bucket"));
    assert!(!recording.queried_resource("aws_instance"));
    assert_eq!(
        messages(runner.issues()),
        vec![
            "default_tags is missing",
            r#"The resource is missing the following tags: "team"."#,
        ]
    );
}

#[test]
fn test_untagged_redshift_cluster_is_reported_with_missing_defaults() {
    let document = DocumentBuilder::new("main.tf")
        .provider("aws", |p| p)
        .resource("aws_redshift_cluster", "warehouse", |r| r)
        .resource("aws_msk_cluster", "events", |r| {
            r.tags(&[("team", "platform-engineering")])
        })
        .build();
    let cluster_range = document.resources[0].def_range.clone();
    let mut runner = runner_with_rule(document, "ensure_default_tags", json!({"tags": ["team"]}));

    run(&mut runner);

    let issues = runner.issues();
    assert_eq!(
        messages(issues),
        vec![
            "default_tags is missing",
            r#"The resource is missing the following tags: "team"."#,
        ]
    );
    assert_eq!(issues[1].range, cluster_range);
}

#[test]
fn test_no_provider_and_excluded_resource_yields_nothing() {
    let document = DocumentBuilder::new("main.tf")
        .resource("aws_instance", "web", |r| r)
        .build();
    let mut runner = runner_with_rule(
        document,
        "ensure_default_tags",
        json!({"tags": ["team"], "exclude": ["aws_instance"]}),
    );

    run(&mut runner);

    assert!(runner.issues().is_empty());
}

#[test]
fn test_unresolvable_default_tags_are_skipped() {
    let document = DocumentBuilder::new("main.tf")
        .provider("aws", |p| {
            p.default_tags(|t| t.tags_expr(tagset_domain::ExprNode::var("unknown")))
        })
        .build();
    let mut runner = runner_with_rule(document, "ensure_default_tags", json!({"tags": ["team"]}));

    run(&mut runner);

    assert!(runner.issues().is_empty());
}

#[test]
fn test_missing_configuration_fails_check() {
    let document = DocumentBuilder::new("main.tf")
        .provider("aws", |p| p)
        .build();
    let mut runner = DocumentRunner::new(document, Default::default());

    let err = EnsureDefaultTagsRule::new().check(&mut runner).unwrap_err();

    assert!(matches!(err, tagset_domain::Error::ConfigDecode { .. }));
    assert!(runner.issues().is_empty());
}

#[test]
fn test_delegate_failure_propagates_without_output() {
    let document = DocumentBuilder::new("main.tf")
        .provider("aws", |p| p)
        .build();
    let mut runner = runner_with_rule(document, "ensure_default_tags", json!({"tags": ["team"]}));
    let rule = EnsureDefaultTagsRule::with_delegate(Box::new(EchoRule::failing("echo_delegate")));

    assert!(rule.check(&mut runner).is_err());
    assert!(runner.issues().is_empty());
}

#[test]
fn test_delegate_receives_composite_configuration() {
    let document = DocumentBuilder::new("main.tf")
        .provider("aws", |p| p)
        .build();
    let mut runner = runner_with_rule(
        document,
        "ensure_default_tags",
        json!({"tags": ["team", "application"]}),
    );
    let rule = EnsureDefaultTagsRule::with_delegate(Box::new(EchoRule::new("echo_delegate")));

    rule.check(&mut runner).unwrap();

    assert_eq!(
        messages(runner.issues()),
        vec!["default_tags is missing", "echo team", "echo application"]
    );
    assert!(
        runner
            .issues()
            .iter()
            .all(|i| i.rule.name == "ensure_default_tags")
    );
}

#[test]
fn test_delegate_not_run_when_every_provider_has_defaults() {
    let document = DocumentBuilder::new("main.tf")
        .provider("aws", |p| p.default_tags(|t| t.tags(&[("team", "a")])))
        .build();
    let mut runner = runner_with_rule(document, "ensure_default_tags", json!({"tags": ["team"]}));
    let rule = EnsureDefaultTagsRule::with_delegate(Box::new(EchoRule::failing("echo_delegate")));

    rule.check(&mut runner).unwrap();

    assert!(runner.issues().is_empty());
}

#[test]
fn test_delegate_configuration_mapping() {
    let config = EnsureDefaultTagsConfig {
        tags: vec!["team".to_string(), "application".to_string()],
        exclude: ["aws_s3_bucket".to_string(), "aws_instance".to_string()].into(),
    };

    let mapped = ResourceMissingTagsConfig::from(&config);

    assert_eq!(mapped.tags, config.tags);
    assert_eq!(mapped.exclude, vec!["aws_instance", "aws_s3_bucket"]);
}

#[test]
fn test_rule_metadata() {
    let rule = EnsureDefaultTagsRule::new();
    assert_eq!(rule.name(), "ensure_default_tags");
    assert!(!rule.enabled());
    assert_eq!(rule.severity(), tagset_domain::Severity::Warning);
    assert!(rule.link().ends_with("/docs/rules/ensure_default_tags.md"));
}
