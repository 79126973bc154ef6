//! Tests for the document builder

use tagset_domain::Pos;
use tagset_infrastructure::DocumentBuilder;

#[test]
fn test_builder_assigns_distinct_ranges() {
    let document = DocumentBuilder::new("main.tf")
        .provider("aws", |p| {
            p.attribute("region", tagset_domain::ExprNode::string("eu-west-1"))
                .default_tags(|t| t.tags(&[("team", "platform-engineering")]))
        })
        .resource("aws_instance", "web", |r| r)
        .build();

    let provider = &document.providers[0];
    assert_eq!(provider.def_range.filename, "main.tf");
    assert_eq!(provider.def_range.start, Pos::new(1, 1));

    let region = provider.body.attribute("region").unwrap();
    assert_eq!(region.range.start.line, 2);
    assert!(region.expr.range.start.column > region.range.start.column);

    let default_tags = &provider.body.blocks[0];
    assert_eq!(default_tags.kind, "default_tags");
    let tags = default_tags.body.attribute("tags").unwrap();
    assert_eq!(tags.range.start.line, 4);

    let resource = &document.resources[0];
    assert_eq!(resource.labels, vec!["aws_instance", "web"]);
    assert!(resource.def_range.start.line > tags.range.start.line);
}
