//! Diagnostic output
//!
//! Two formats: one line per issue (`file:line:col: [SEVERITY] rule: message`)
//! or a JSON array of [`IssueRecord`]s.

use serde::Serialize;
use std::fmt::Write as _;
use tagset_domain::{Issue, Severity};

/// Output format selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Source range as printed in JSON output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RangeRecord {
    pub file: String,
    pub start_line: usize,
    pub start_column: usize,
    pub end_line: usize,
    pub end_column: usize,
}

/// One issue as printed in JSON output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssueRecord {
    pub rule: String,
    pub severity: Severity,
    pub message: String,
    pub range: RangeRecord,
}

impl From<&Issue> for IssueRecord {
    fn from(issue: &Issue) -> Self {
        Self {
            rule: issue.rule.name.clone(),
            severity: issue.rule.severity,
            message: issue.message.clone(),
            range: RangeRecord {
                file: issue.range.filename.clone(),
                start_line: issue.range.start.line,
                start_column: issue.range.start.column,
                end_line: issue.range.end.line,
                end_column: issue.range.end.column,
            },
        }
    }
}

/// Render `issues` in `format`
pub fn render(issues: &[Issue], format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(issues.iter().fold(String::new(), |mut out, issue| {
            let _ = writeln!(out, "{issue}");
            out
        })),
        OutputFormat::Json => {
            let records: Vec<IssueRecord> = issues.iter().map(IssueRecord::from).collect();
            serde_json::to_string_pretty(&records)
        }
    }
}

/// Whether any issue carries error severity
pub fn has_errors(issues: &[Issue]) -> bool {
    issues.iter().any(|i| i.rule.severity == Severity::Error)
}
