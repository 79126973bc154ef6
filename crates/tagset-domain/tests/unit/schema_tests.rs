//! Unit tests for declared query shapes

use tagset_domain::{BlockQuery, BlockSchema, BodySchema};

#[test]
fn test_schema_builder_declares_nested_shape() {
    let schema = BodySchema::new().block(
        BlockSchema::new("default_tags").with_body(BodySchema::new().attribute("tags")),
    );

    let nested = schema.block_schema("default_tags").unwrap();
    let body = nested.body.as_ref().unwrap();
    assert!(body.attribute_schema("tags").is_some());
    assert!(!body.attribute_schema("tags").unwrap().required);
    assert!(schema.attribute_schema("tags").is_none());
}

#[test]
fn test_block_query_display() {
    assert_eq!(BlockQuery::provider("aws").to_string(), "provider \"aws\"");
    assert_eq!(
        BlockQuery::resource("aws_instance").to_string(),
        "resource \"aws_instance\""
    );
}
