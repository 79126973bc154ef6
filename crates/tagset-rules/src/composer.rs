//! Rule Composer
//!
//! [`CapturingRunner`] decorates a host runner so that one rule can run
//! another rule's full check and decide afterwards what to surface:
//!
//! - `query_blocks` and `evaluate_expr` are forwarded to the wrapped runner
//! - `emit_issue` is buffered in order instead of reaching the host
//! - `decode_rule_config` answers from a configuration record supplied at
//!   construction for one rule name, and forwards every other name
//!
//! The supplied record is captured per call, so concurrent passes never see
//! each other's configuration.

use serde::Serialize;
use tagset_domain::{
    Block, BlockQuery, BodySchema, Expression, Issue, Range, Result, Rule, Runner, ValueShape,
};
use tracing::debug;

/// Runner decorator that buffers issues and substitutes rule configuration
pub struct CapturingRunner<'a> {
    inner: &'a dyn Runner,
    config_override: Option<(String, serde_json::Value)>,
    issues: Vec<Issue>,
}

impl<'a> CapturingRunner<'a> {
    /// Wrap `inner`, buffering every emitted issue
    pub fn new(inner: &'a dyn Runner) -> Self {
        Self {
            inner,
            config_override: None,
            issues: Vec::new(),
        }
    }

    /// Answer configuration requests for `rule_name` with `config`
    pub fn with_rule_config<T: Serialize>(mut self, rule_name: &str, config: &T) -> Result<Self> {
        let body = serde_json::to_value(config)?;
        self.config_override = Some((rule_name.to_string(), body));
        Ok(self)
    }

    /// Issues buffered so far
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    /// Consume the decorator and return the buffered issues in emission order
    pub fn into_issues(self) -> Vec<Issue> {
        self.issues
    }
}

impl Runner for CapturingRunner<'_> {
    fn query_blocks(&self, query: &BlockQuery, schema: &BodySchema) -> Result<Vec<Block>> {
        self.inner.query_blocks(query, schema)
    }

    fn evaluate_expr(&self, expr: &Expression, wanted: ValueShape) -> Result<serde_json::Value> {
        self.inner.evaluate_expr(expr, wanted)
    }

    fn emit_issue(&mut self, rule: &dyn Rule, message: &str, range: &Range) -> Result<()> {
        self.issues.push(Issue::new(rule, message, range.clone()));
        Ok(())
    }

    fn decode_rule_config(&self, rule_name: &str) -> Result<serde_json::Value> {
        match &self.config_override {
            Some((name, body)) if name == rule_name => {
                debug!(rule = rule_name, "Serving substituted rule configuration");
                Ok(body.clone())
            }
            _ => self.inner.decode_rule_config(rule_name),
        }
    }
}
