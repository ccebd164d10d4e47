//! Context-window extraction.

use serde::{Deserialize, Serialize};

/// Location of the cursor within a text buffer.
///
/// `line` is a zero-based line index. `column` is part of the contract and
/// carried for future per-column truncation, but extraction is line-based
/// today; callers must not rely on column-level precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CursorPosition {
    pub line: usize,
    pub column: usize,
}

impl CursorPosition {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Extract the trailing slice of `buffer` that ends at the cursor line.
///
/// Takes the lines from `max(0, cursor.line - window)` through the cursor's
/// own line, rejoined with newlines. A cursor past the end of the buffer
/// clamps to the last line rather than failing; an empty buffer yields an
/// empty string. Pure function, no side effects.
pub fn extract_context(buffer: &str, cursor: CursorPosition, window: usize) -> String {
    let lines: Vec<&str> = buffer.split('\n').collect();
    let end = lines.len().min(cursor.line.saturating_add(1));
    let start = cursor.line.saturating_sub(window).min(end);
    lines[start..end].join("\n")
}
