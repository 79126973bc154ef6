//! Rule Set
//!
//! Registry of the rules this crate serves and the pass that runs them.
//! Each rule runs behind a [`CapturingRunner`]; its issues reach the host
//! only after its check succeeds, so a failing rule never leaves partial
//! output behind.

use crate::composer::CapturingRunner;
use crate::project::{RULESET_NAME, VERSION};
use crate::reporter::report_all;
use crate::rules::{EnsureDefaultTagsRule, ValidateTagsRule};
use tagset_domain::{Error, Result, Rule, Runner};
use tracing::{error, info};

/// A rule whose check failed during a pass
#[derive(Debug)]
pub struct RuleFailure {
    /// Name of the failed rule
    pub rule: String,
    /// Failure returned by the check or by the host on emission
    pub error: Error,
}

/// Summary of one pass over a rule set
#[derive(Debug, Default)]
pub struct CheckReport {
    /// Rules that ran, in registration order
    pub executed: Vec<String>,
    /// Rules that failed
    pub failures: Vec<RuleFailure>,
    /// Issues delivered to the host
    pub emitted: usize,
}

impl CheckReport {
    /// True if every executed rule succeeded
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Named, versioned collection of rules
pub struct RuleSet {
    name: String,
    version: String,
    rules: Vec<Box<dyn Rule>>,
}

impl RuleSet {
    /// Create an empty rule set
    pub fn new<N: Into<String>, V: Into<String>>(name: N, version: V) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            rules: Vec::new(),
        }
    }

    /// The rules shipped by this crate
    pub fn builtin() -> Self {
        let mut ruleset = Self::new(RULESET_NAME, VERSION);
        ruleset.register(Box::new(EnsureDefaultTagsRule::new()));
        ruleset.register(Box::new(ValidateTagsRule::new()));
        ruleset
    }

    /// Add a rule
    pub fn register(&mut self, rule: Box<dyn Rule>) {
        self.rules.push(rule);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// All registered rules
    pub fn rules(&self) -> &[Box<dyn Rule>] {
        &self.rules
    }

    /// Get a rule by name
    pub fn get(&self, name: &str) -> Option<&dyn Rule> {
        self.rules.iter().find(|r| r.name() == name).map(|r| &**r)
    }

    /// Names of all registered rules
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Run every rule selected by `is_enabled` against `runner`
    pub fn check<F>(&self, runner: &mut dyn Runner, is_enabled: F) -> CheckReport
    where
        F: Fn(&dyn Rule) -> bool,
    {
        let mut report = CheckReport::default();

        for rule in self.rules.iter().map(|r| &**r) {
            if !is_enabled(rule) {
                continue;
            }
            report.executed.push(rule.name().to_string());

            match run_rule(runner, rule) {
                Ok(emitted) => {
                    info!(rule = rule.name(), emitted, "Rule finished");
                    report.emitted += emitted;
                }
                Err(e) => {
                    error!(rule = rule.name(), error = %e, "Rule failed");
                    report.failures.push(RuleFailure {
                        rule: rule.name().to_string(),
                        error: e,
                    });
                }
            }
        }

        report
    }
}

fn run_rule(runner: &mut dyn Runner, rule: &dyn Rule) -> Result<usize> {
    let issues = {
        let mut capture = CapturingRunner::new(runner);
        rule.check(&mut capture)?;
        capture.into_issues()
    };
    report_all(runner, rule, &issues)?;
    Ok(issues.len())
}
