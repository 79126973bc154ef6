use super::document::ConfigDocument;
use super::evaluator::{conform, evaluate};
use crate::config::LintConfig;
use tagset_domain::{
    Block, BlockQuery, Body, BodySchema, Error, Expression, Issue, Range, Result, Rule, Runner,
    ValueShape,
};
use tracing::trace;

/// Runner serving a [`ConfigDocument`] and a [`LintConfig`]
///
/// Emitted issues are recorded in order and can be read back with
/// [`DocumentRunner::issues`].
#[derive(Debug, Clone, Default)]
pub struct DocumentRunner {
    document: ConfigDocument,
    config: LintConfig,
    issues: Vec<Issue>,
}

impl DocumentRunner {
    pub fn new(document: ConfigDocument, config: LintConfig) -> Self {
        Self {
            document,
            config,
            issues: Vec::new(),
        }
    }

    pub fn document(&self) -> &ConfigDocument {
        &self.document
    }

    pub fn config(&self) -> &LintConfig {
        &self.config
    }

    /// Issues emitted so far
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn into_issues(self) -> Vec<Issue> {
        self.issues
    }
}

impl Runner for DocumentRunner {
    fn query_blocks(&self, query: &BlockQuery, schema: &BodySchema) -> Result<Vec<Block>> {
        validate_schema(schema)?;

        let (blocks, label) = match query {
            BlockQuery::Provider(name) => (&self.document.providers, name),
            BlockQuery::Resource(kind) => (&self.document.resources, kind),
        };
        let matched = blocks
            .iter()
            .filter(|b| b.first_label() == Some(label.as_str()))
            .map(|b| project_block(b, schema))
            .collect::<Result<Vec<_>>>()?;

        trace!(%query, matched = matched.len(), "Served block query");
        Ok(matched)
    }

    fn evaluate_expr(&self, expr: &Expression, wanted: ValueShape) -> Result<serde_json::Value> {
        conform(evaluate(&expr.node, &self.document.variables)?, wanted)
    }

    fn emit_issue(&mut self, rule: &dyn Rule, message: &str, range: &Range) -> Result<()> {
        self.issues.push(Issue::new(rule, message, range.clone()));
        Ok(())
    }

    fn decode_rule_config(&self, rule_name: &str) -> Result<serde_json::Value> {
        self.config
            .rule_body(rule_name)
            .ok_or_else(|| Error::config_decode(rule_name, "no configuration section for rule"))
    }
}

fn validate_schema(schema: &BodySchema) -> Result<()> {
    if let Some(attribute) = schema.attributes.iter().find(|a| a.name.is_empty()) {
        return Err(Error::host_query(format!(
            "malformed schema: attribute with empty name {attribute:?}"
        )));
    }
    for block in &schema.blocks {
        if block.kind.is_empty() {
            return Err(Error::host_query("malformed schema: block with empty type"));
        }
        if let Some(body) = &block.body {
            validate_schema(body)?;
        }
    }
    Ok(())
}

/// Copy of `block` holding only what `schema` declares
fn project_block(block: &Block, schema: &BodySchema) -> Result<Block> {
    Ok(Block {
        kind: block.kind.clone(),
        labels: block.labels.clone(),
        body: project_body(block, schema)?,
        def_range: block.def_range.clone(),
    })
}

fn project_body(block: &Block, schema: &BodySchema) -> Result<Body> {
    let mut body = Body::default();

    for declared in &schema.attributes {
        match block.body.attribute(&declared.name) {
            Some(attribute) => {
                body.attributes
                    .insert(declared.name.clone(), attribute.clone());
            }
            None if declared.required => {
                return Err(Error::host_query(format!(
                    "{}: missing required attribute \"{}\"",
                    block.def_range, declared.name
                )));
            }
            None => {}
        }
    }

    for nested in &block.body.blocks {
        let Some(declared) = schema.block_schema(&nested.kind) else {
            continue;
        };
        let nested_schema = declared.body.clone().unwrap_or_default();
        body.blocks.push(project_block(nested, &nested_schema)?);
    }

    Ok(body)
}
