//! Tagset rules

mod ensure_default_tags;
mod validate_tags;

pub use ensure_default_tags::{EnsureDefaultTagsConfig, EnsureDefaultTagsRule};
pub use validate_tags::{ValidateTagsConfig, ValidateTagsRule};

use crate::{DEFAULT_TAGS_BLOCK, TAGS_ATTRIBUTE};
use tagset_domain::{BlockSchema, BodySchema};

/// `default_tags { tags = ... }` inside a provider block
pub(crate) fn default_tags_schema() -> BodySchema {
    BodySchema::new().block(
        BlockSchema::new(DEFAULT_TAGS_BLOCK).with_body(BodySchema::new().attribute(TAGS_ATTRIBUTE)),
    )
}
