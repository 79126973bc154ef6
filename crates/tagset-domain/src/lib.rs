//! # tagset domain
//!
//! Boundary types shared by every tagset crate.
//!
//! The analysis host owns parsing and expression evaluation. This crate only
//! describes what crosses the boundary:
//!
//! - `ports` - the [`Runner`] capability set a host serves and the [`Rule`]
//!   contract a rule exposes back to it
//! - `value_objects` - configuration blocks, schemas, source ranges and issues
//! - `error` - the failure taxonomy for host interactions

/// Error types for host interactions
pub mod error;
/// Host and rule contracts
pub mod ports;
/// Configuration tree, schema and diagnostic value types
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::{Rule, Runner, decode_typed_config};
pub use value_objects::{
    Attribute, AttributeSchema, Block, BlockQuery, BlockSchema, Body, BodySchema, ExprNode,
    Expression, Issue, Pos, Range, RuleRef, Severity, ValueShape,
};
