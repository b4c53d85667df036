//! Incremental line/column tracking.
//!
//! The cooking layer feeds every token's text through a [`LineTracker`] in
//! source order, so positions are computed in one pass without building a
//! line table up front. Lines break on `\n` only (`\r\n` counts once; a lone
//! `\r` does not break). Columns count code points, not bytes.

use memchr::{memchr_iter, memrchr};

/// A 1-based line and column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineCol {
    pub line: u32,
    pub column: u32,
}

impl LineCol {
    /// Position of the first character of a source.
    pub const START: LineCol = LineCol { line: 1, column: 1 };
}

/// Running position at the end of the text seen so far.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineTracker {
    current: LineCol,
}

impl LineTracker {
    pub fn new() -> Self {
        Self {
            current: LineCol::START,
        }
    }

    /// Position of the next character to be consumed.
    #[inline]
    pub fn position(&self) -> LineCol {
        self.current
    }

    /// Move past `text`.
    pub fn advance(&mut self, text: &str) {
        let bytes = text.as_bytes();
        match memrchr(b'\n', bytes) {
            Some(last) => {
                let breaks = saturating_u32(memchr_iter(b'\n', bytes).count());
                self.current.line = self.current.line.saturating_add(breaks);
                self.current.column = 1 + count_chars(&text[last + 1..]);
            }
            None => {
                self.current.column = self.current.column.saturating_add(count_chars(text));
            }
        }
    }
}

impl Default for LineTracker {
    fn default() -> Self {
        Self::new()
    }
}

fn count_chars(text: &str) -> u32 {
    // ASCII fast path: one byte per column.
    if text.is_ascii() {
        saturating_u32(text.len())
    } else {
        saturating_u32(text.chars().count())
    }
}

fn saturating_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
