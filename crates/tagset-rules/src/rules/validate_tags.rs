use super::default_tags_schema;
use crate::aws::{TAGGABLE_RESOURCES, unknown_kinds};
use crate::extractor::extract_tags;
use crate::project::reference_link;
use crate::reporter::report;
use crate::requirements::{TagConstraint, disallowed_values};
use crate::{AWS_PROVIDER, DEFAULT_TAGS_BLOCK, TAGS_ATTRIBUTE};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tagset_domain::{
    Block, BlockQuery, BodySchema, Result, Rule, Runner, Severity, decode_typed_config,
};
use tracing::{debug, warn};

/// Configuration of `validate_tags`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidateTagsConfig {
    /// Allowed values per tag
    pub tags: Vec<TagConstraint>,
    /// Resource kinds to skip
    #[serde(default)]
    pub exclude: BTreeSet<String>,
}

/// Restricts tag values to configured allow-lists
///
/// Checks `default_tags` of every `aws` provider and the `tags` of every
/// taggable resource whose kind is not excluded.
#[derive(Debug, Default)]
pub struct ValidateTagsRule;

impl ValidateTagsRule {
    pub const NAME: &'static str = "validate_tags";

    pub fn new() -> Self {
        Self
    }

    fn verify_valid_tags(
        &self,
        runner: &mut dyn Runner,
        config: &ValidateTagsConfig,
        block: &Block,
    ) -> Result<()> {
        let Some(tagged) = extract_tags(runner, &block.body)?.resolved() else {
            return Ok(());
        };

        for violation in disallowed_values(&config.tags, &tagged.tags) {
            report(
                runner,
                self,
                &violation.to_string(),
                &tagged.attribute.expr.range,
            )?;
        }
        Ok(())
    }
}

impl Rule for ValidateTagsRule {
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
        let config: ValidateTagsConfig = decode_typed_config(runner, self.name())?;
        for kind in unknown_kinds(&config.exclude) {
            warn!(rule = self.name(), kind, "Excluded kind is not a taggable resource");
        }

        let providers =
            runner.query_blocks(&BlockQuery::provider(AWS_PROVIDER), &default_tags_schema())?;
        for provider in &providers {
            for block in provider.body.blocks_of_type(DEFAULT_TAGS_BLOCK) {
                self.verify_valid_tags(runner, &config, block)?;
            }
        }

        let schema = BodySchema::new().attribute(TAGS_ATTRIBUTE);
        for kind in TAGGABLE_RESOURCES {
            if config.exclude.contains(*kind) {
                debug!(kind, "Resource kind excluded");
                continue;
            }

            let resources = runner.query_blocks(&BlockQuery::resource(*kind), &schema)?;
            for resource in &resources {
                self.verify_valid_tags(runner, &config, resource)?;
            }
        }

        Ok(())
    }
}
