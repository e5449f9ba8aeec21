//! Offset to line/column conversion for reporting.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A position in rendered source (0-indexed line and column, columns in chars).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }
}

/// Displays 1-indexed `line:column`, the way editors show it.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}

/// Starting offset of each line of a source text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineMap {
    /// line_starts[0] is always 0
    line_starts: Vec<u32>,
}

impl LineMap {
    pub fn build(source: &str) -> Self {
        let mut line_starts = vec![0u32];

        for (i, ch) in source.char_indices() {
            if ch == '\n' {
                line_starts.push((i + 1) as u32);
            } else if ch == '\r' {
                let next_idx = i + 1;
                // \r\n is handled by the \n
                if source.as_bytes().get(next_idx) != Some(&b'\n') {
                    line_starts.push(next_idx as u32);
                }
            }
        }

        LineMap { line_starts }
    }

    pub fn offset_to_position(&self, offset: u32, source: &str) -> Position {
        let line = match self.line_starts.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert_point) => insert_point.saturating_sub(1),
        };

        let line_start = self.line_starts.get(line).copied().unwrap_or(0);
        let clamped_end = (offset as usize).min(source.len());
        let start = (line_start as usize).min(clamped_end);
        let column = source
            .get(start..clamped_end)
            .map_or(0, |slice| slice.chars().count() as u32);

        Position::new(line as u32, column)
    }
}
