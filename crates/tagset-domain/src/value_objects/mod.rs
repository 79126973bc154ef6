//! Value Objects
//!
//! Immutable values exchanged with the analysis host. Blocks, attributes and
//! expressions are read-only views of the host's configuration tree; issues
//! are the only artifact a check produces.

/// Configuration blocks, attributes and expressions
pub mod body;
/// Diagnostics and severities
pub mod issue;
/// Source locations
pub mod range;
/// Declared shapes for block queries and evaluation
pub mod schema;

pub use body::{Attribute, Block, Body, ExprNode, Expression};
pub use issue::{Issue, RuleRef, Severity};
pub use range::{Pos, Range};
pub use schema::{AttributeSchema, BlockQuery, BlockSchema, BodySchema, ValueShape};
