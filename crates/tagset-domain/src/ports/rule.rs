//! Rule Port

use crate::error::Result;
use crate::ports::runner::Runner;
use crate::value_objects::Severity;

/// A lint rule served to the host
///
/// `check` runs once per analysis pass. All configuration is read through
/// the runner inside `check`, so a rule value carries no per-pass state and
/// may be shared between concurrent passes.
pub trait Rule: Send + Sync {
    /// Unique rule name, also the key of its configuration section
    fn name(&self) -> &str;

    /// Whether the rule runs when the configuration does not mention it
    fn enabled(&self) -> bool;

    /// Severity attached to emitted issues
    fn severity(&self) -> Severity;

    /// Documentation link
    fn link(&self) -> String;

    /// Inspect the configuration tree and emit issues through `runner`
    fn check(&self, runner: &mut dyn Runner) -> Result<()>;
}
