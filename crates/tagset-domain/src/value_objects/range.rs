//! Source ranges
//!
//! Positions are 1-based for lines and columns, 0-based for bytes, matching
//! what editors expect when rendering underlines.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single position in a source file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    /// 1-based line number
    pub line: usize,
    /// 1-based column number
    pub column: usize,
    /// 0-based byte offset
    #[serde(default)]
    pub byte: usize,
}

impl Pos {
    /// Create a position without a byte offset
    pub fn new(line: usize, column: usize) -> Self {
        Self {
            line,
            column,
            byte: 0,
        }
    }
}

/// A span of source text within one file
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Range {
    /// File the span belongs to
    pub filename: String,
    /// Inclusive start position
    pub start: Pos,
    /// Exclusive end position
    pub end: Pos,
}

impl Range {
    /// Create a range in `filename` from `start` to `end`
    pub fn new<S: Into<String>>(filename: S, start: Pos, end: Pos) -> Self {
        Self {
            filename: filename.into(),
            start,
            end,
        }
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}",
            self.filename, self.start.line, self.start.column
        )
    }
}
