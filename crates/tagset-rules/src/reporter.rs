//! Issue emission on behalf of a rule

use tagset_domain::{Issue, Range, Result, Rule, Runner};
use tracing::debug;

/// Emit one issue owned by `rule` through whichever runner is active
pub fn report(runner: &mut dyn Runner, rule: &dyn Rule, message: &str, range: &Range) -> Result<()> {
    debug!(rule = rule.name(), %range, message, "Emitting issue");
    runner.emit_issue(rule, message, range)
}

/// Re-emit collected issues under `rule`'s identity, in order
pub fn report_all<'i, I>(runner: &mut dyn Runner, rule: &dyn Rule, issues: I) -> Result<()>
where
    I: IntoIterator<Item = &'i Issue>,
{
    for issue in issues {
        report(runner, rule, &issue.message, &issue.range)?;
    }
    Ok(())
}
