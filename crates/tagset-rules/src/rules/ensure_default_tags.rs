use super::default_tags_schema;
use crate::aws::{ResourceMissingTagsConfig, ResourceMissingTagsRule};
use crate::composer::CapturingRunner;
use crate::extractor::extract_tags;
use crate::project::reference_link;
use crate::reporter::{report, report_all};
use crate::requirements::{missing_tags, missing_tags_message};
use crate::{AWS_PROVIDER, DEFAULT_TAGS_BLOCK};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tagset_domain::{
    Block, BlockQuery, Issue, Result, Rule, Runner, Severity, decode_typed_config,
};
use tracing::{debug, info};

/// Configuration of `ensure_default_tags`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnsureDefaultTagsConfig {
    /// Tags the provider defaults must carry, in reporting order
    pub tags: Vec<String>,
    /// Resource kinds the resource-level check skips
    #[serde(default)]
    pub exclude: BTreeSet<String>,
}

impl From<&EnsureDefaultTagsConfig> for ResourceMissingTagsConfig {
    fn from(config: &EnsureDefaultTagsConfig) -> Self {
        Self {
            tags: config.tags.clone(),
            exclude: config.exclude.iter().cloned().collect(),
        }
    }
}

/// Requires `default_tags` on every `aws` provider
///
/// Missing required tags inside a provider's `default_tags` are reported
/// directly. Providers with no `default_tags` block at all are collected,
/// and only reported together with resource-level findings from the
/// delegate rule, run under this rule's tag list and exclusions. When the
/// delegate finds nothing, the collected provider findings are dropped.
pub struct EnsureDefaultTagsRule {
    delegate: Box<dyn Rule>,
}

impl Default for EnsureDefaultTagsRule {
    fn default() -> Self {
        Self::new()
    }
}

impl EnsureDefaultTagsRule {
    pub const NAME: &'static str = "ensure_default_tags";

    pub fn new() -> Self {
        Self::with_delegate(Box::new(ResourceMissingTagsRule::new()))
    }

    /// Compose with a different resource-level rule
    ///
    /// The delegate receives a [`ResourceMissingTagsConfig`] built from this
    /// rule's configuration when it decodes its own.
    pub fn with_delegate(delegate: Box<dyn Rule>) -> Self {
        Self { delegate }
    }

    fn verify_required_tags(
        &self,
        runner: &mut dyn Runner,
        config: &EnsureDefaultTagsConfig,
        block: &Block,
    ) -> Result<()> {
        let Some(tagged) = extract_tags(runner, &block.body)?.resolved() else {
            return Ok(());
        };

        let missing = missing_tags(&config.tags, &tagged.tags);
        if missing.is_empty() {
            return Ok(());
        }
        report(
            runner,
            self,
            &missing_tags_message("provider", &missing),
            &tagged.attribute.expr.range,
        )
    }

    fn run_delegate(
        &self,
        runner: &dyn Runner,
        config: &EnsureDefaultTagsConfig,
    ) -> Result<Vec<Issue>> {
        let delegate_config = ResourceMissingTagsConfig::from(config);
        let mut capture =
            CapturingRunner::new(runner).with_rule_config(self.delegate.name(), &delegate_config)?;
        self.delegate.check(&mut capture)?;
        Ok(capture.into_issues())
    }
}

impl Rule for EnsureDefaultTagsRule {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn enabled(&self) -> bool {
        false
    }

    fn severity(&self) -> Severity {
        Severity::Warning
    }

    fn link(&self) -> String {
        reference_link(self.name())
    }

    fn check(&self, runner: &mut dyn Runner) -> Result<()> {
        let config: EnsureDefaultTagsConfig = decode_typed_config(runner, self.name())?;
        let providers =
            runner.query_blocks(&BlockQuery::provider(AWS_PROVIDER), &default_tags_schema())?;

        let mut missing_defaults: Vec<Issue> = Vec::new();
        for provider in &providers {
            let mut default_tags = provider.body.blocks_of_type(DEFAULT_TAGS_BLOCK).peekable();
            if default_tags.peek().is_none() {
                missing_defaults.push(Issue::new(
                    self,
                    "default_tags is missing",
                    provider.def_range.clone(),
                ));
                continue;
            }

            for block in default_tags {
                self.verify_required_tags(runner, &config, block)?;
            }
        }

        if missing_defaults.is_empty() {
            return Ok(());
        }

        let resource_issues = self.run_delegate(runner, &config)?;
        if resource_issues.is_empty() {
            debug!(
                providers = missing_defaults.len(),
                "Providers lack default_tags but every resource is tagged"
            );
            return Ok(());
        }

        info!(
            providers = missing_defaults.len(),
            resources = resource_issues.len(),
            "Reporting missing provider and resource tags"
        );
        report_all(runner, self, &missing_defaults)?;
        report_all(runner, self, &resource_issues)
    }
}
