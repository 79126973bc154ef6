//! Declared query shapes
//!
//! Hosts only extract what a rule declares, so schemas must name exactly the
//! attributes and sub-blocks a rule reads.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which top-level blocks a query targets
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "name")]
pub enum BlockQuery {
    /// `provider "<name>"` blocks
    Provider(String),
    /// `resource "<kind>" "..."` blocks
    Resource(String),
}

impl BlockQuery {
    /// Query `provider "<name>"` blocks
    pub fn provider<S: Into<String>>(name: S) -> Self {
        Self::Provider(name.into())
    }

    /// Query resources of the given kind
    pub fn resource<S: Into<String>>(kind: S) -> Self {
        Self::Resource(kind.into())
    }
}

impl fmt::Display for BlockQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Provider(name) => write!(f, "provider \"{name}\""),
            Self::Resource(kind) => write!(f, "resource \"{kind}\""),
        }
    }
}

/// Declared attribute
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeSchema {
    /// Attribute name
    pub name: String,
    /// Whether the host should fail the query when the attribute is absent
    #[serde(default)]
    pub required: bool,
}

/// Declared nested block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockSchema {
    /// Block type
    #[serde(rename = "type")]
    pub kind: String,
    /// Shape of the nested body; `None` extracts the block without contents
    #[serde(default)]
    pub body: Option<BodySchema>,
}

impl BlockSchema {
    /// Declare a nested block of type `kind` with an empty body
    pub fn new<S: Into<String>>(kind: S) -> Self {
        Self {
            kind: kind.into(),
            body: None,
        }
    }

    /// Declare the nested body shape
    pub fn with_body(mut self, body: BodySchema) -> Self {
        self.body = Some(body);
        self
    }
}

/// Declared shape of a block body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BodySchema {
    /// Attributes to extract
    #[serde(default)]
    pub attributes: Vec<AttributeSchema>,
    /// Nested blocks to extract
    #[serde(default)]
    pub blocks: Vec<BlockSchema>,
}

impl BodySchema {
    /// Empty schema
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare an optional attribute
    pub fn attribute<S: Into<String>>(mut self, name: S) -> Self {
        self.attributes.push(AttributeSchema {
            name: name.into(),
            required: false,
        });
        self
    }

    /// Declare a nested block
    pub fn block(mut self, block: BlockSchema) -> Self {
        self.blocks.push(block);
        self
    }

    /// Find a declared attribute
    pub fn attribute_schema(&self, name: &str) -> Option<&AttributeSchema> {
        self.attributes.iter().find(|a| a.name == name)
    }

    /// Find a declared nested block
    pub fn block_schema(&self, kind: &str) -> Option<&BlockSchema> {
        self.blocks.iter().find(|b| b.kind == kind)
    }
}

/// Shape a rule expects an expression to evaluate to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueShape {
    /// A single string
    String,
    /// A mapping of string keys to string values
    MapOfString,
}

impl fmt::Display for ValueShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => write!(f, "string"),
            Self::MapOfString => write!(f, "map(string)"),
        }
    }
}
