use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tagset_domain::Block;

/// Input variable declaration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Variable {
    /// Default value used when resolving `var.<name>`
    #[serde(default)]
    pub default: Option<serde_json::Value>,
}

/// Exported configuration tree
///
/// ```json
/// {
///   "providers": [{ "type": "provider", "labels": ["aws"], "body": { ... } }],
///   "resources": [{ "type": "resource", "labels": ["aws_instance", "web"] }],
///   "variables": { "team": { "default": "platform-engineering" } }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigDocument {
    #[serde(default)]
    pub providers: Vec<Block>,
    #[serde(default)]
    pub resources: Vec<Block>,
    #[serde(default)]
    pub variables: BTreeMap<String, Variable>,
}

impl ConfigDocument {
    /// Parse a document from JSON text
    pub fn from_json_str(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }

    /// Read and parse a document file
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content).map_err(|e| Error::Document {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}
