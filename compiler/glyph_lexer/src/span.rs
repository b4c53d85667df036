//! Source location spans.
//!
//! A span carries both the byte range of a token and the line/column of its
//! first character, so diagnostics never need a second pass over the source.

use std::fmt;

use glyph_lexer_core::LineCol;

/// Source location span.
///
/// - `start`, `end`: byte offsets, `end` exclusive
/// - `line`, `column`: 1-based position of `start`; `column` counts code
///   points from the start of the line
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Span {
    pub start: u32,
    pub end: u32,
    pub line: u32,
    pub column: u32,
}

impl Span {
    /// Create a span starting at `at`.
    #[inline]
    pub const fn new(start: u32, end: u32, at: LineCol) -> Self {
        Span {
            start,
            end,
            line: at.line,
            column: at.column,
        }
    }

    /// Length of the span in bytes.
    #[inline]
    pub const fn len(&self) -> u32 {
        self.end - self.start
    }

    /// Check if span is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Check if an offset is within this span.
    #[inline]
    pub fn contains(&self, offset: u32) -> bool {
        offset >= self.start && offset < self.end
    }

    /// Check if another span is fully contained within this span.
    #[inline]
    pub fn contains_span(&self, other: Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Line and column of the first character.
    #[inline]
    pub const fn position(&self) -> LineCol {
        LineCol {
            line: self.line,
            column: self.column,
        }
    }

    /// Convert to a `std::ops::Range` for slicing the source.
    #[inline]
    pub fn to_range(&self) -> std::ops::Range<usize> {
        self.start as usize..self.end as usize
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}@{}:{}", self.start, self.end, self.line, self.column)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
