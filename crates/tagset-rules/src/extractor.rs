//! Tag Extractor
//!
//! Locates the `tags` attribute of a block body and asks the host to
//! resolve it into a mapping of tag name to tag value. Resolution is all or
//! nothing: a value that is not a plain string-to-string mapping yields
//! [`TagLookup::Unavailable`], never a partial map.

use crate::TAGS_ATTRIBUTE;
use std::collections::BTreeMap;
use tagset_domain::{Attribute, Body, Result, Runner, ValueShape};
use tracing::{debug, warn};

/// Resolved tags keyed by name
pub type TagMap = BTreeMap<String, String>;

/// A `tags` attribute and the mapping it resolved to
#[derive(Debug, Clone, PartialEq)]
pub struct TaggedAttribute<'a> {
    /// The attribute, kept for its ranges
    pub attribute: &'a Attribute,
    /// Resolved tags
    pub tags: TagMap,
}

/// Outcome of looking up a block's tags
#[derive(Debug, Clone, PartialEq)]
pub enum TagLookup<'a> {
    /// The block has no `tags` attribute; nothing to check
    Absent,
    /// The attribute exists but did not resolve to a string map; skipped
    Unavailable,
    /// The attribute resolved to a concrete mapping
    Resolved(TaggedAttribute<'a>),
}

impl<'a> TagLookup<'a> {
    /// The resolved attribute, if any
    pub fn resolved(self) -> Option<TaggedAttribute<'a>> {
        match self {
            Self::Resolved(tagged) => Some(tagged),
            Self::Absent | Self::Unavailable => None,
        }
    }
}

/// Resolve the `tags` attribute of `body`
///
/// Evaluation failures are recovered as [`TagLookup::Unavailable`]. Any
/// other host failure is returned.
pub fn extract_tags<'a>(runner: &dyn Runner, body: &'a Body) -> Result<TagLookup<'a>> {
    let Some(attribute) = body.attribute(TAGS_ATTRIBUTE) else {
        return Ok(TagLookup::Absent);
    };

    let value = match runner.evaluate_expr(&attribute.expr, ValueShape::MapOfString) {
        Ok(value) => value,
        Err(e) if e.is_evaluation() => {
            warn!(range = %attribute.expr.range, error = %e, "Skipping unresolvable tags");
            return Ok(TagLookup::Unavailable);
        }
        Err(e) => return Err(e),
    };

    match string_map(value) {
        Some(tags) => Ok(TagLookup::Resolved(TaggedAttribute { attribute, tags })),
        None => {
            debug!(range = %attribute.expr.range, "Tags did not resolve to a string map");
            Ok(TagLookup::Unavailable)
        }
    }
}

fn string_map(value: serde_json::Value) -> Option<TagMap> {
    let serde_json::Value::Object(object) = value else {
        return None;
    };
    object
        .into_iter()
        .map(|(key, value)| match value {
            serde_json::Value::String(s) => Some((key, s)),
            _ => None,
        })
        .collect()
}
