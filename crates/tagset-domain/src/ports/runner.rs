//! Runner Port
//!
//! The four capabilities a host offers a running check. Composition works by
//! decorating this trait: a wrapper may forward some members and override
//! others, and is passed to a rule's `check` in place of the host's runner.

use crate::error::{Error, Result};
use crate::ports::rule::Rule;
use crate::value_objects::{Block, BlockQuery, BodySchema, Expression, Range, ValueShape};
use serde::de::DeserializeOwned;

/// Host capability set available during `Rule::check`
pub trait Runner {
    /// Retrieve the top-level blocks matching `query`, restricted to `schema`
    ///
    /// Only attributes and nested blocks declared in `schema` are present in
    /// the returned bodies.
    fn query_blocks(&self, query: &BlockQuery, schema: &BodySchema) -> Result<Vec<Block>>;

    /// Resolve `expr` to a value of the `wanted` shape
    ///
    /// Returns [`Error::Evaluation`] when the value cannot be resolved or
    /// does not have the requested shape.
    fn evaluate_expr(&self, expr: &Expression, wanted: ValueShape) -> Result<serde_json::Value>;

    /// Report one issue owned by `rule`
    fn emit_issue(&mut self, rule: &dyn Rule, message: &str, range: &Range) -> Result<()>;

    /// Raw configuration section of the rule named `rule_name`
    fn decode_rule_config(&self, rule_name: &str) -> Result<serde_json::Value>;
}

/// Decode a rule's configuration section into its typed record
pub fn decode_typed_config<T: DeserializeOwned>(
    runner: &dyn Runner,
    rule_name: &str,
) -> Result<T> {
    let body = runner.decode_rule_config(rule_name)?;
    serde_json::from_value(body).map_err(|e| Error::config_decode(rule_name, e.to_string()))
}
