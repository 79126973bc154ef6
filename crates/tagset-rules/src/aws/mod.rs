//! AWS resource catalogue and the resource-level tag presence rule
//!
//! `aws_resource_missing_tags` belongs to the AWS ruleset rather than this
//! one. It is kept here as a standalone [`Rule`](tagset_domain::Rule) so
//! that `ensure_default_tags` can drive it through a
//! [`CapturingRunner`](crate::CapturingRunner).

mod resource_missing_tags;
mod resources;

pub use resource_missing_tags::{ResourceMissingTagsConfig, ResourceMissingTagsRule};
pub use resources::{TAGGABLE_RESOURCES, is_taggable, unknown_kinds};
