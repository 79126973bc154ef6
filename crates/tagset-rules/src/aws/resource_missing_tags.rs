use super::resources::{TAGGABLE_RESOURCES, unknown_kinds};
use crate::extractor::{TagLookup, TagMap, extract_tags};
use crate::reporter::report;
use crate::requirements::{missing_tags, missing_tags_message};
use crate::{AWS_PROVIDER, DEFAULT_TAGS_BLOCK, TAGS_ATTRIBUTE};
use serde::{Deserialize, Serialize};
use tagset_domain::{
    BlockQuery, BlockSchema, BodySchema, Result, Rule, Runner, Severity, decode_typed_config,
};
use tracing::{debug, warn};

const ALIAS_ATTRIBUTE: &str = "alias";

/// Configuration of `aws_resource_missing_tags`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceMissingTagsConfig {
    /// Tags every resource must carry
    pub tags: Vec<String>,
    /// Resource kinds to skip
    #[serde(default)]
    pub exclude: Vec<String>,
}

/// Reports taggable resources missing required tags
///
/// A resource's effective tags are the default tags of the un-aliased `aws`
/// provider overlaid with its own `tags`. A resource without a `tags`
/// attribute is checked against the defaults alone and reported at its
/// definition range.
#[derive(Debug, Default)]
pub struct ResourceMissingTagsRule;

impl ResourceMissingTagsRule {
    pub const NAME: &'static str = "aws_resource_missing_tags";

    pub fn new() -> Self {
        Self
    }

    fn provider_default_tags(&self, runner: &dyn Runner) -> Result<TagMap> {
        let schema = BodySchema::new().attribute(ALIAS_ATTRIBUTE).block(
            BlockSchema::new(DEFAULT_TAGS_BLOCK)
                .with_body(BodySchema::new().attribute(TAGS_ATTRIBUTE)),
        );
        let providers = runner.query_blocks(&BlockQuery::provider(AWS_PROVIDER), &schema)?;

        let mut defaults = TagMap::new();
        for provider in providers
            .iter()
            .filter(|p| p.body.attribute(ALIAS_ATTRIBUTE).is_none())
        {
            for block in provider.body.blocks_of_type(DEFAULT_TAGS_BLOCK) {
                if let TagLookup::Resolved(tagged) = extract_tags(runner, &block.body)? {
                    defaults.extend(tagged.tags);
                }
            }
        }
        Ok(defaults)
    }
}

impl Rule for ResourceMissingTagsRule {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn enabled(&self) -> bool {
        false
    }

    fn severity(&self) -> Severity {
        Severity::Notice
    }

    fn link(&self) -> String {
        format!(
            "https://github.com/terraform-linters/tflint-ruleset-aws/blob/master/docs/rules/{}.md",
            Self::NAME
        )
    }

    fn check(&self, runner: &mut dyn Runner) -> Result<()> {
        let config: ResourceMissingTagsConfig = decode_typed_config(runner, self.name())?;
        for kind in unknown_kinds(&config.exclude) {
            warn!(rule = self.name(), kind, "Excluded kind is not a taggable resource");
        }
        let defaults = self.provider_default_tags(runner)?;
        let schema = BodySchema::new().attribute(TAGS_ATTRIBUTE);

        for kind in TAGGABLE_RESOURCES {
            if config.exclude.iter().any(|e| e == kind) {
                debug!(kind, "Resource kind excluded");
                continue;
            }

            let resources = runner.query_blocks(&BlockQuery::resource(*kind), &schema)?;
            for resource in &resources {
                let (tags, range) = match extract_tags(runner, &resource.body)? {
                    TagLookup::Absent => (defaults.clone(), resource.def_range.clone()),
                    TagLookup::Unavailable => continue,
                    TagLookup::Resolved(tagged) => {
                        let mut merged = defaults.clone();
                        merged.extend(tagged.tags);
                        (merged, tagged.attribute.expr.range.clone())
                    }
                };

                let missing = missing_tags(&config.tags, &tags);
                if !missing.is_empty() {
                    report(
                        runner,
                        self,
                        &missing_tags_message("resource", &missing),
                        &range,
                    )?;
                }
            }
        }

        Ok(())
    }
}
