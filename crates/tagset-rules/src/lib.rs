//! Tag Compliance Rules
//!
//! Rules that inspect provider and resource blocks served by an analysis
//! host and verify that mandatory tags are present and, where configured,
//! restricted to allow-listed values.
//!
//! # Building blocks
//!
//! - [`extractor`] - resolves a block's `tags` attribute into a [`TagMap`]
//! - [`requirements`] - presence and allowed-value checks over a tag map
//! - [`reporter`] - issue emission on behalf of a rule
//! - [`composer`] - [`CapturingRunner`], a runner decorator that lets one
//!   rule drive another under borrowed configuration and buffer its output
//!
//! # Rules
//!
//! - `ensure_default_tags` - provider `default_tags` presence, composed with
//!   the resource-level `aws_resource_missing_tags` rule
//! - `validate_tags` - allowed tag values on providers and resources
//!
//! ```ignore
//! use tagset_rules::RuleSet;
//!
//! let ruleset = RuleSet::builtin();
//! let report = ruleset.check(&mut runner, |rule| config.is_enabled(rule.name(), rule.enabled()));
//! ```

pub mod aws;
pub mod composer;
pub mod extractor;
pub mod project;
pub mod reporter;
pub mod requirements;
pub mod rules;
pub mod ruleset;

pub use aws::{ResourceMissingTagsConfig, ResourceMissingTagsRule};
pub use composer::CapturingRunner;
pub use extractor::{TagLookup, TagMap, TaggedAttribute, extract_tags};
pub use requirements::{TagConstraint, ValueViolation, disallowed_values, missing_tags};
pub use rules::{
    EnsureDefaultTagsConfig, EnsureDefaultTagsRule, ValidateTagsConfig, ValidateTagsRule,
};
pub use ruleset::{CheckReport, RuleFailure, RuleSet};

/// Provider whose blocks the rules inspect
pub const AWS_PROVIDER: &str = "aws";

/// Provider sub-block carrying default tags
pub const DEFAULT_TAGS_BLOCK: &str = "default_tags";

/// Attribute carrying a tag mapping
pub const TAGS_ATTRIBUTE: &str = "tags";
