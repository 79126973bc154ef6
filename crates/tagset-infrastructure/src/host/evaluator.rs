//! Expression evaluation for the offline host
//!
//! Supports literals, object constructors and `var.<name>` references
//! resolved against variable defaults.

use super::document::Variable;
use std::collections::BTreeMap;
use tagset_domain::{Error, ExprNode, Result, ValueShape};

/// Evaluate `node`, resolving references against `variables`
pub fn evaluate(node: &ExprNode, variables: &BTreeMap<String, Variable>) -> Result<serde_json::Value> {
    match node {
        ExprNode::Literal(value) => Ok(value.clone()),
        ExprNode::Var(name) => variables
            .get(name)
            .and_then(|v| v.default.clone())
            .ok_or_else(|| Error::evaluation(format!("var.{name} has no known value"))),
        ExprNode::Object(fields) => fields
            .iter()
            .map(|(key, field)| Ok((key.clone(), evaluate(field, variables)?)))
            .collect::<Result<serde_json::Map<_, _>>>()
            .map(serde_json::Value::Object),
    }
}

/// Check that `value` has the `wanted` shape
pub(super) fn conform(value: serde_json::Value, wanted: ValueShape) -> Result<serde_json::Value> {
    let conforms = match (&value, wanted) {
        (serde_json::Value::String(_), ValueShape::String) => true,
        (serde_json::Value::Object(map), ValueShape::MapOfString) => {
            map.values().all(serde_json::Value::is_string)
        }
        _ => false,
    };
    if conforms {
        Ok(value)
    } else {
        Err(Error::evaluation(format!("value {value} is not a {wanted}")))
    }
}
