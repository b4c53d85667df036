//! Byte cursor over a borrowed source string.
//!
//! The cursor advances byte-by-byte. Reads past the end of the source return
//! `0x00`, so lookahead (`peek`, `peek2`) never needs an explicit bounds check
//! at the call site. EOF is `pos >= source_len`; a `0x00` read before that is
//! an interior NUL in the source.
//!
//! Positions handed out by the cursor always sit on UTF-8 boundaries as long
//! as callers advance over non-ASCII input with [`Cursor::advance_char`]. The
//! memchr-based skipping methods only stop on ASCII bytes, which are always
//! boundaries.

/// The smaller of two memchr hits.
///
/// Combines results from separate memchr calls when more needles are needed
/// than `memchr3` supports.
fn earliest_of(a: Option<usize>, b: Option<usize>) -> Option<usize> {
    match (a, b) {
        (Some(x), Some(y)) => Some(x.min(y)),
        (Some(x), None) | (None, Some(x)) => Some(x),
        (None, None) => None,
    }
}

/// Cheap, `Copy` cursor over source bytes.
///
/// Copying the cursor is the snapshot mechanism: the scanner clones it before
/// a speculative scan (backtick identifiers) and restores it on mismatch.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    source: &'a str,
    /// Current read position (byte index into `source`).
    pos: u32,
    /// Cached `source.len()`.
    source_len: u32,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at position 0.
    ///
    /// Sources longer than `u32::MAX` bytes are truncated to that length;
    /// the cooking layer rejects them before a cursor is ever built.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            pos: 0,
            source_len: u32::try_from(source.len()).unwrap_or(u32::MAX),
        }
    }

    #[inline]
    fn byte_at(&self, pos: u32) -> u8 {
        self.source.as_bytes().get(pos as usize).copied().unwrap_or(0)
    }

    /// Returns the byte at the current position, or `0x00` at EOF.
    ///
    /// Interior NUL bytes also return `0x00`; use [`is_eof()`](Self::is_eof)
    /// to tell them apart.
    #[inline]
    pub fn current(&self) -> u8 {
        self.byte_at(self.pos)
    }

    /// One byte of lookahead.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.byte_at(self.pos + 1)
    }

    /// Two bytes of lookahead.
    #[inline]
    pub fn peek2(&self) -> u8 {
        self.byte_at(self.pos + 2)
    }

    /// Decode the code point at the current position.
    ///
    /// Returns `None` at EOF.
    #[inline]
    pub fn current_char(&self) -> Option<char> {
        self.source
            .get(self.pos as usize..)
            .and_then(|rest| rest.chars().next())
    }

    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos += n;
    }

    /// Advance past one full UTF-8 code point.
    ///
    /// No-op at EOF.
    #[inline]
    pub fn advance_char(&mut self) {
        let width = Self::utf8_char_width(self.current());
        if !self.is_eof() {
            self.advance_n(width);
        }
    }

    /// Width of the UTF-8 sequence led by `byte`. Continuation and invalid
    /// lead bytes count as 1 so the cursor always makes progress.
    #[inline]
    pub fn utf8_char_width(byte: u8) -> u32 {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    /// Returns `true` once every source byte has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Length of the source in bytes.
    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// Returns `true` if the unconsumed input starts with `prefix`.
    ///
    /// An empty prefix never matches.
    #[inline]
    pub fn starts_with(&self, prefix: &[u8]) -> bool {
        !prefix.is_empty()
            && self
                .source
                .as_bytes()
                .get(self.pos as usize..)
                .is_some_and(|rest| rest.starts_with(prefix))
    }

    /// Extract `start..end` of the source.
    ///
    /// Returns `""` if the range is out of bounds or splits a code point.
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        self.source
            .get(start as usize..end as usize)
            .unwrap_or_default()
    }

    /// Extract the source from `start` to the current position.
    pub fn slice_from(&self, start: u32) -> &'a str {
        self.slice(start, self.pos)
    }

    /// Byte-level `take_while`.
    ///
    /// Stops at EOF even if `pred(0)` is `true`.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while !self.is_eof() && pred(self.current()) {
            self.pos += 1;
        }
    }

    /// Advance while `pred` accepts the current code point.
    #[inline]
    pub fn eat_chars_while(&mut self, pred: impl Fn(char) -> bool) {
        while let Some(c) = self.current_char() {
            if !pred(c) {
                break;
            }
            self.advance_n(char_len(c));
        }
    }

    /// Advance past horizontal whitespace: space, tab, vertical tab, form feed.
    #[inline]
    pub fn eat_whitespace(&mut self) {
        self.eat_while(|b| matches!(b, b' ' | b'\t' | 0x0B | 0x0C));
    }

    /// Advance to the next `\n` or `\r`, or to EOF.
    ///
    /// Used by the line-comment scanner. The line terminator is not consumed.
    pub fn eat_until_newline_or_eof(&mut self) {
        let offset = memchr::memchr2(b'\n', b'\r', self.remaining());
        self.jump(offset);
    }

    /// Advance past ordinary string content to the next interesting byte.
    /// Returns the byte found, or 0 for EOF.
    ///
    /// Interesting bytes: the closing `quote`, `\`, `\n`, `\r`, and
    /// `marker_lead` (the first byte of the interpolation marker; pass `\`
    /// when interpolation is off).
    pub fn skip_to_string_delim(&mut self, quote: u8, marker_lead: u8) -> u8 {
        let remaining = self.remaining();
        let primary = memchr::memchr3(quote, b'\\', b'\n', remaining);
        let secondary = memchr::memchr2(b'\r', marker_lead, remaining);
        self.jump(earliest_of(primary, secondary))
    }

    /// Advance to the next occurrence of either byte, or to EOF.
    /// Returns the byte found, or 0 for EOF.
    ///
    /// Used by the block-comment scanner with the first bytes of the open
    /// and close markers.
    pub fn skip_to_either(&mut self, a: u8, b: u8) -> u8 {
        let offset = memchr::memchr2(a, b, self.remaining());
        self.jump(offset)
    }

    fn remaining(&self) -> &'a [u8] {
        self.source
            .as_bytes()
            .get(self.pos as usize..)
            .unwrap_or_default()
    }

    /// Move by a memchr offset (or to EOF) and return the byte landed on.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offsets are bounded by source_len which fits in u32"
    )]
    fn jump(&mut self, offset: Option<usize>) -> u8 {
        if let Some(off) = offset {
            self.pos += off as u32;
            self.current()
        } else {
            self.pos = self.source_len;
            0
        }
    }
}

/// UTF-8 width of `c` as a `u32`.
#[inline]
#[allow(
    clippy::cast_possible_truncation,
    reason = "len_utf8 is at most 4"
)]
pub(crate) fn char_len(c: char) -> u32 {
    c.len_utf8() as u32
}

#[cfg(test)]
mod tests;
