//! Programmatic document construction
//!
//! Lays blocks out one element per line, as if the document had been
//! written by hand, so every block header, attribute and expression gets a
//! distinct range.

use super::document::{ConfigDocument, Variable};
use std::collections::BTreeMap;
use tagset_domain::{Attribute, Block, Body, ExprNode, Expression, Pos, Range};

const INDENT: usize = 2;

/// Builds a [`ConfigDocument`] for one file
#[derive(Debug, Clone)]
pub struct DocumentBuilder {
    filename: String,
    next_line: usize,
    document: ConfigDocument,
}

impl DocumentBuilder {
    pub fn new<S: Into<String>>(filename: S) -> Self {
        Self {
            filename: filename.into(),
            next_line: 1,
            document: ConfigDocument::default(),
        }
    }

    /// Add a `provider "<name>"` block
    pub fn provider<F>(mut self, name: &str, build: F) -> Self
    where
        F: FnOnce(BlockBuilder) -> BlockBuilder,
    {
        let block = self.top_level("provider", vec![name.to_string()], build);
        self.document.providers.push(block);
        self
    }

    /// Add a `resource "<kind>" "<name>"` block
    pub fn resource<F>(mut self, kind: &str, name: &str, build: F) -> Self
    where
        F: FnOnce(BlockBuilder) -> BlockBuilder,
    {
        let block = self.top_level("resource", vec![kind.to_string(), name.to_string()], build);
        self.document.resources.push(block);
        self
    }

    /// Declare a variable with a default value
    pub fn variable<V: Into<serde_json::Value>>(mut self, name: &str, default: V) -> Self {
        self.document.variables.insert(
            name.to_string(),
            Variable {
                default: Some(default.into()),
            },
        );
        self.next_line += 1;
        self
    }

    pub fn build(self) -> ConfigDocument {
        self.document
    }

    fn top_level<F>(&mut self, kind: &str, labels: Vec<String>, build: F) -> Block
    where
        F: FnOnce(BlockBuilder) -> BlockBuilder,
    {
        let opened = BlockBuilder::open(&self.filename, self.next_line, 0, kind, labels);
        let (block, next_line) = build(opened).close();
        self.next_line = next_line + 1;
        block
    }
}

/// Builds the body of one block
#[derive(Debug, Clone)]
pub struct BlockBuilder {
    filename: String,
    line: usize,
    depth: usize,
    block: Block,
}

impl BlockBuilder {
    fn open(filename: &str, line: usize, depth: usize, kind: &str, labels: Vec<String>) -> Self {
        let header_len = kind.len() + labels.iter().map(|l| l.len() + 3).sum::<usize>();
        let column = depth * INDENT + 1;
        Self {
            filename: filename.to_string(),
            line: line + 1,
            depth,
            block: Block {
                kind: kind.to_string(),
                labels,
                body: Body::default(),
                def_range: Range::new(
                    filename,
                    Pos::new(line, column),
                    Pos::new(line, column + header_len),
                ),
            },
        }
    }

    fn close(self) -> (Block, usize) {
        (self.block, self.line + 1)
    }

    /// Add `name = <expression>` on its own line
    pub fn attribute(mut self, name: &str, node: ExprNode) -> Self {
        let line = self.line;
        let column = (self.depth + 1) * INDENT + 1;
        let expr_column = column + name.len() + 3;
        let expr_len = serde_json::to_string(&node).map_or(1, |text| text.len());
        let end = Pos::new(line, expr_column + expr_len);

        self.block.body.attributes.insert(
            name.to_string(),
            Attribute {
                name: name.to_string(),
                expr: Expression {
                    range: Range::new(&self.filename, Pos::new(line, expr_column), end),
                    node,
                },
                range: Range::new(&self.filename, Pos::new(line, column), end),
            },
        );
        self.line += 1;
        self
    }

    /// Add a literal `tags = { ... }` attribute
    pub fn tags(self, pairs: &[(&str, &str)]) -> Self {
        let fields: BTreeMap<String, ExprNode> = pairs
            .iter()
            .map(|(name, value)| ((*name).to_string(), ExprNode::string(*value)))
            .collect();
        self.attribute("tags", ExprNode::Object(fields))
    }

    /// Add a `tags` attribute with an arbitrary expression
    pub fn tags_expr(self, node: ExprNode) -> Self {
        self.attribute("tags", node)
    }

    /// Add a nested block
    pub fn block<F>(mut self, kind: &str, build: F) -> Self
    where
        F: FnOnce(BlockBuilder) -> BlockBuilder,
    {
        let opened = BlockBuilder::open(&self.filename, self.line, self.depth + 1, kind, Vec::new());
        let (nested, next_line) = build(opened).close();
        self.block.body.blocks.push(nested);
        self.line = next_line;
        self
    }

    /// Add a nested `default_tags` block
    pub fn default_tags<F>(self, build: F) -> Self
    where
        F: FnOnce(BlockBuilder) -> BlockBuilder,
    {
        self.block("default_tags", build)
    }
}
