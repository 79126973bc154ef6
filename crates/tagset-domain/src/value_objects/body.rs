//! Configuration tree nodes
//!
//! A [`Block`] is what the host returns for a block query: its type label,
//! its labels, the attributes and nested blocks that matched the declared
//! schema, and the range of its definition header.

use super::range::Range;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Host-side representation of an unevaluated expression
///
/// Rules never inspect this; they hand the whole [`Expression`] back to the
/// host for evaluation. Every node is a single-key object naming its kind,
/// so object keys are never mistaken for node kinds:
///
/// ```json
/// {"object": {"team": {"var": "team"}, "var": {"literal": "tag named var"}}}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExprNode {
    /// Reference to an input variable (`var.<name>`), without the prefix
    Var(String),
    /// Object constructor whose values are themselves expressions
    Object(BTreeMap<String, ExprNode>),
    /// Any other literal value
    Literal(serde_json::Value),
}

impl ExprNode {
    /// Reference the variable `name`
    pub fn var<S: Into<String>>(name: S) -> Self {
        Self::Var(name.into())
    }

    /// String literal
    pub fn string<S: Into<String>>(value: S) -> Self {
        Self::Literal(serde_json::Value::String(value.into()))
    }
}

/// An attribute's expression together with its source range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expression {
    /// Range of the expression text (right-hand side of the attribute)
    #[serde(default)]
    pub range: Range,
    /// Unevaluated expression
    pub node: ExprNode,
}

/// A `name = expression` attribute
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    /// Attribute name
    pub name: String,
    /// Attribute value expression
    pub expr: Expression,
    /// Range of the whole attribute, name included
    #[serde(default)]
    pub range: Range,
}

/// Attributes and nested blocks of a block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Attributes keyed by name
    #[serde(default)]
    pub attributes: BTreeMap<String, Attribute>,
    /// Nested blocks in source order
    #[serde(default)]
    pub blocks: Vec<Block>,
}

impl Body {
    /// Look up an attribute by name
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.get(name)
    }

    /// Nested blocks of the given type, in source order
    pub fn blocks_of_type<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a Block> + 'a {
        self.blocks.iter().filter(move |b| b.kind == kind)
    }
}

/// A configuration block (provider, resource, or nested sub-block)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Block type (`provider`, `resource`, `default_tags`, ...)
    #[serde(rename = "type")]
    pub kind: String,
    /// Block labels (`["aws"]`, `["aws_instance", "web"]`, ...)
    #[serde(default)]
    pub labels: Vec<String>,
    /// Matched attributes and nested blocks
    #[serde(default)]
    pub body: Body,
    /// Range of the block header (`resource "aws_instance" "web"`)
    #[serde(default)]
    pub def_range: Range,
}

impl Block {
    /// First label, the provider name or resource kind
    pub fn first_label(&self) -> Option<&str> {
        self.labels.first().map(String::as_str)
    }
}
