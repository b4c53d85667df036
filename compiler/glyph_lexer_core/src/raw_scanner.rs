//! Hand-written raw scanner producing `(RawTag, len)` pairs.
//!
//! The scanner operates on a [`Cursor`] and produces [`RawToken`] values
//! without heap allocation, except for the interpolation frame stack. It does
//! not resolve keywords, validate escapes, or compute line numbers; those are
//! deferred to the cooking layer.
//!
//! # State
//!
//! - `comment_depth`: nesting depth of the block comment being scanned.
//!   Only ever non-zero between tokens after an unterminated comment.
//! - `interpolations`: one frame per open interpolation. A frame is pushed
//!   when string scanning meets the interpolation marker (emitting
//!   `StringHead` or `StringMiddle`) and popped when the matching closer is
//!   met at depth 0, at which point string scanning resumes with the quote
//!   style saved in the frame.
//!
//! Errors are encoded as `RawTag` variants, not as `Result::Err`.

use crate::cursor::{char_len, Cursor};
use crate::scan_config::ScanConfig;
use crate::tag::{RawTag, RawToken};

/// Quote style of the string being scanned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Quote {
    byte: u8,
    /// `"""`-delimited: spans lines, closes on three quotes.
    triple: bool,
}

impl Quote {
    fn len(self) -> u32 {
        if self.triple {
            3
        } else {
            1
        }
    }
}

/// One open interpolation.
#[derive(Clone, Copy, Debug)]
struct InterpolationFrame {
    /// Quote style of the enclosing string, restored at the closer.
    quote: Quote,
    /// Unmatched openers (same kind as the marker's) inside the expression.
    depth: u32,
}

/// Interpolation syntax derived once from the configured marker.
#[derive(Clone, Copy, Debug)]
struct Interpolation {
    marker: &'static [u8],
    marker_len: u32,
    open: u8,
    close: u8,
}

impl Interpolation {
    fn from_config(config: &ScanConfig) -> Option<Self> {
        let marker = config.interpolation_marker?.as_bytes();
        Some(Self {
            marker,
            marker_len: u32::try_from(marker.len()).ok()?,
            open: *marker.last()?,
            close: config.interpolation_close()?,
        })
    }
}

/// Scanner state for one tokenization call.
///
/// Produces one token at a time as a `(tag, length)` pair.
pub struct RawScanner<'a> {
    cursor: Cursor<'a>,
    config: ScanConfig,
    interpolation: Option<Interpolation>,
    interpolations: Vec<InterpolationFrame>,
    comment_depth: u32,
}

impl<'a> RawScanner<'a> {
    /// Create a scanner at the cursor's position.
    ///
    /// An interpolation marker whose last byte is not `(`, `[` or `{`
    /// disables interpolation; the cooking layer validates configs before
    /// they get here.
    pub fn new(cursor: Cursor<'a>, config: ScanConfig) -> Self {
        Self {
            cursor,
            interpolation: Interpolation::from_config(&config),
            config,
            interpolations: Vec::new(),
            comment_depth: 0,
        }
    }

    /// Depth of the block comment in progress (0 unless the last comment
    /// was unterminated).
    #[inline]
    pub fn comment_depth(&self) -> u32 {
        self.comment_depth
    }

    /// Produce the next raw token.
    ///
    /// Returns `RawTag::Eof` with `len == 0` when the source is exhausted.
    /// Subsequent calls after EOF continue to return `Eof`.
    pub fn next_token(&mut self) -> RawToken {
        let start = self.cursor.pos();
        if self.cursor.is_eof() {
            return RawToken {
                tag: RawTag::Eof,
                len: 0,
            };
        }
        let b = self.cursor.current();
        if b == 0 {
            return self.single(start, RawTag::InteriorNull);
        }
        if self.at_line_comment() {
            return self.line_comment(start);
        }
        if self.at_block_comment() {
            return self.block_comment(start);
        }
        if b.is_ascii() {
            if (self.config.is_ident_start)(char::from(b)) {
                return self.identifier(start);
            }
            return self.ascii(start, b);
        }
        self.non_ascii(start)
    }

    fn token(&self, start: u32, tag: RawTag) -> RawToken {
        RawToken {
            tag,
            len: self.cursor.pos() - start,
        }
    }

    /// Single-byte token: advance one byte and emit the given tag.
    fn single(&mut self, start: u32, tag: RawTag) -> RawToken {
        self.cursor.advance();
        self.token(start, tag)
    }

    fn ascii(&mut self, start: u32, b: u8) -> RawToken {
        match b {
            b' ' | b'\t' | 0x0B | 0x0C => self.whitespace(start),
            b'\r' => self.carriage_return(start),
            b'\n' => self.single(start, RawTag::Newline),
            b'0'..=b'9' => self.number(start),
            b'`' if self.config.backtick_identifiers => self.backtick(start),
            _ if self.config.string_quotes.contains(&b) => self.string(start, b),
            b'(' => self.open_delimiter(start, b, RawTag::LeftParen),
            b'[' => self.open_delimiter(start, b, RawTag::LeftBracket),
            b'{' => self.open_delimiter(start, b, RawTag::LeftBrace),
            b')' => self.close_delimiter(start, b, RawTag::RightParen),
            b']' => self.close_delimiter(start, b, RawTag::RightBracket),
            b'}' => self.close_delimiter(start, b, RawTag::RightBrace),
            b'.' => self.dot(start),
            b',' => self.single(start, RawTag::Comma),
            b':' => self.single(start, RawTag::Colon),
            b';' => self.single(start, RawTag::Semicolon),
            b'@' => self.single(start, RawTag::At),
            b'#' => self.single(start, RawTag::Hash),
            b'$' => self.single(start, RawTag::Dollar),
            b'\\' => self.single(start, RawTag::Backslash),
            b'`' => self.single(start, RawTag::Backtick),
            _ if is_operator_byte(b) => self.operator(start),
            // Control characters, DEL, and quotes the grammar doesn't use.
            _ => self.single(start, RawTag::InvalidChar),
        }
    }

    fn non_ascii(&mut self, start: u32) -> RawToken {
        let Some(c) = self.cursor.current_char() else {
            return self.token(start, RawTag::Eof);
        };
        // U+FEFF is checked first: the Swift head ranges include it.
        if c == '\u{FEFF}' || c.is_whitespace() {
            self.cursor.advance_n(char_len(c));
            return self.token(start, RawTag::Whitespace);
        }
        if (self.config.is_ident_start)(c) {
            return self.identifier(start);
        }
        self.cursor.advance_n(char_len(c));
        self.token(start, RawTag::InvalidChar)
    }

    // ─── Whitespace & Newlines ─────────────────────────────────────

    fn whitespace(&mut self, start: u32) -> RawToken {
        self.cursor.eat_whitespace();
        self.token(start, RawTag::Whitespace)
    }

    fn carriage_return(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume '\r'
        if self.cursor.current() == b'\n' {
            self.cursor.advance();
            self.token(start, RawTag::Newline)
        } else {
            self.token(start, RawTag::Whitespace)
        }
    }

    // ─── Comments ──────────────────────────────────────────────────

    fn at_line_comment(&self) -> bool {
        self.config
            .line_comment
            .is_some_and(|marker| self.cursor.starts_with(marker.as_bytes()))
    }

    fn at_block_comment(&self) -> bool {
        self.config
            .block_comment
            .is_some_and(|syntax| self.cursor.starts_with(syntax.open.as_bytes()))
    }

    fn line_comment(&mut self, start: u32) -> RawToken {
        let marker_len = self.config.line_comment.map_or(0, str::len);
        self.cursor.advance_n(u32::try_from(marker_len).unwrap_or(0));
        self.cursor.eat_until_newline_or_eof();
        self.token(start, RawTag::LineComment)
    }

    /// Scan a block comment with an explicit depth counter.
    ///
    /// With nesting on, each opener increments `comment_depth` and each
    /// closer decrements it; the token ends when depth returns to 0. At EOF
    /// the depth is left as-is and `UnterminatedBlockComment` is returned.
    fn block_comment(&mut self, start: u32) -> RawToken {
        let Some(syntax) = self.config.block_comment else {
            return self.single(start, RawTag::InvalidChar);
        };
        let open = syntax.open.as_bytes();
        let close = syntax.close.as_bytes();
        let open_len = u32::try_from(open.len()).unwrap_or(0);
        let close_len = u32::try_from(close.len()).unwrap_or(0);
        let open_lead = open.first().copied().unwrap_or(0);
        let close_lead = close.first().copied().unwrap_or(0);

        self.cursor.advance_n(open_len);
        self.comment_depth = 1;
        loop {
            self.cursor.skip_to_either(open_lead, close_lead);
            if self.cursor.is_eof() {
                return self.token(start, RawTag::UnterminatedBlockComment);
            }
            if self.cursor.starts_with(close) {
                self.cursor.advance_n(close_len);
                self.comment_depth -= 1;
                if self.comment_depth == 0 {
                    return self.token(start, RawTag::BlockComment);
                }
            } else if self.config.allow_nested_block_comments && self.cursor.starts_with(open) {
                self.cursor.advance_n(open_len);
                self.comment_depth += 1;
            } else {
                self.cursor.advance();
            }
        }
    }

    // ─── Identifiers ───────────────────────────────────────────────

    /// An identifier, or a string prefix when a quote follows directly.
    fn identifier(&mut self, start: u32) -> RawToken {
        self.cursor.advance_char(); // first char, already classified
        self.cursor.eat_chars_while(self.config.is_ident_continue);
        let next = self.cursor.current();
        if self.config.string_quotes.contains(&next)
            && self.config.is_string_prefix(self.cursor.slice_from(start))
        {
            return self.string(start, next);
        }
        self.token(start, RawTag::Ident)
    }

    /// `` `name` `` when followed by an identifier and a closing backtick,
    /// otherwise a lone backtick.
    fn backtick(&mut self, start: u32) -> RawToken {
        let snapshot = self.cursor;
        self.cursor.advance(); // consume '`'
        if self
            .cursor
            .current_char()
            .is_some_and(self.config.is_ident_start)
        {
            self.cursor.advance_char();
            self.cursor.eat_chars_while(self.config.is_ident_continue);
            if self.cursor.current() == b'`' {
                self.cursor.advance();
                return self.token(start, RawTag::EscapedIdent);
            }
        }
        self.cursor = snapshot;
        self.single(start, RawTag::Backtick)
    }

    // ─── Operators & Punctuation ───────────────────────────────────

    fn operator(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        self.eat_operator_tail(false);
        self.token(start, RawTag::Operator)
    }

    /// Extend an operator run. Stops before a comment opener so `+//x`
    /// scans as `+` then a line comment.
    fn eat_operator_tail(&mut self, allow_dots: bool) {
        loop {
            let b = self.cursor.current();
            let continues = is_operator_byte(b) || (allow_dots && b == b'.');
            if !continues || self.at_line_comment() || self.at_block_comment() {
                break;
            }
            self.cursor.advance();
        }
    }

    /// `.` alone is punctuation; `..` starts a dot operator (`...`, `..<`).
    fn dot(&mut self, start: u32) -> RawToken {
        if self.cursor.peek() == b'.' {
            self.cursor.advance_n(2);
            self.eat_operator_tail(true);
            return self.token(start, RawTag::Operator);
        }
        self.single(start, RawTag::Dot)
    }

    fn open_delimiter(&mut self, start: u32, b: u8, tag: RawTag) -> RawToken {
        if let (Some(interp), Some(frame)) = (self.interpolation, self.interpolations.last_mut()) {
            if interp.open == b {
                frame.depth += 1;
            }
        }
        self.single(start, tag)
    }

    /// A closer of the marker's kind at depth 0 ends the innermost
    /// interpolation and resumes scanning its string.
    fn close_delimiter(&mut self, start: u32, b: u8, tag: RawTag) -> RawToken {
        let resumes = match (self.interpolation, self.interpolations.last_mut()) {
            (Some(interp), Some(frame)) if interp.close == b => {
                if frame.depth == 0 {
                    Some(frame.quote)
                } else {
                    frame.depth -= 1;
                    None
                }
            }
            _ => None,
        };
        if let Some(quote) = resumes {
            self.interpolations.pop();
            self.cursor.advance(); // consume closer
            return self.string_body(start, quote, true);
        }
        self.single(start, tag)
    }

    // ─── Numeric Literals ──────────────────────────────────────────

    /// Digits with `_` separators, an optional fraction (`.` must be followed
    /// by a digit, so `1..5` and `x.0.y` split correctly), an optional
    /// exponent, or a `0x`/`0o`/`0b` prefixed form. Values are not checked.
    fn number(&mut self, start: u32) -> RawToken {
        let first = self.cursor.current();
        self.cursor.advance();

        if first == b'0' {
            match self.cursor.current() {
                b'x' | b'X' if self.cursor.peek().is_ascii_hexdigit() => {
                    self.cursor.advance();
                    self.cursor.eat_while(|b| b.is_ascii_hexdigit() || b == b'_');
                    return self.token(start, RawTag::Number);
                }
                b'o' | b'O' | b'b' | b'B' if self.cursor.peek().is_ascii_digit() => {
                    self.cursor.advance();
                    self.eat_decimal_digits();
                    return self.token(start, RawTag::Number);
                }
                _ => {}
            }
        }

        self.eat_decimal_digits();
        if self.cursor.current() == b'.' && self.cursor.peek().is_ascii_digit() {
            self.cursor.advance(); // consume '.'
            self.eat_decimal_digits();
        }
        self.eat_exponent();
        self.token(start, RawTag::Number)
    }

    fn eat_decimal_digits(&mut self) {
        self.cursor.eat_while(|b| b.is_ascii_digit() || b == b'_');
    }

    fn eat_exponent(&mut self) {
        if !matches!(self.cursor.current(), b'e' | b'E') {
            return;
        }
        let signed = matches!(self.cursor.peek(), b'+' | b'-');
        let digit = if signed {
            self.cursor.peek2()
        } else {
            self.cursor.peek()
        };
        if digit.is_ascii_digit() {
            self.cursor.advance_n(if signed { 2 } else { 1 });
            self.eat_decimal_digits();
        }
    }

    // ─── String Literals ───────────────────────────────────────────

    fn string(&mut self, start: u32, byte: u8) -> RawToken {
        if !self.interpolations.is_empty() && !self.config.nested_string_literals {
            return self.single(start, RawTag::UnbalancedInterpolation);
        }
        let quote = Quote {
            byte,
            triple: self.config.multiline_strings
                && self.cursor.peek() == byte
                && self.cursor.peek2() == byte,
        };
        self.cursor.advance_n(quote.len());
        self.string_body(start, quote, false)
    }

    /// Scan string content up to the closing quote or the next
    /// interpolation marker (pushing a frame).
    ///
    /// `resumed` is set when scanning continues after an interpolation's
    /// closer, which selects the middle/tail tags over head/whole-string.
    fn string_body(&mut self, start: u32, quote: Quote, resumed: bool) -> RawToken {
        let (suspended, closed, unterminated) = if resumed {
            (
                RawTag::StringMiddle,
                RawTag::StringTail,
                RawTag::UnterminatedStringTail,
            )
        } else {
            (RawTag::StringHead, RawTag::String, RawTag::UnterminatedString)
        };
        let marker_lead = self
            .interpolation
            .and_then(|interp| interp.marker.first().copied())
            .unwrap_or(b'\\');
        loop {
            let b = self.cursor.skip_to_string_delim(quote.byte, marker_lead);
            if self.cursor.is_eof() {
                return self.token(start, unterminated);
            }
            if let Some(interp) = self.interpolation {
                if self.cursor.starts_with(interp.marker) {
                    self.cursor.advance_n(interp.marker_len);
                    self.interpolations.push(InterpolationFrame { quote, depth: 0 });
                    return self.token(start, suspended);
                }
            }
            match b {
                b'\\' => {
                    self.cursor.advance(); // consume '\'
                    let continues = quote.triple || self.config.escaped_newline_continues;
                    match self.cursor.current() {
                        // Reported as unterminated on the next pass.
                        b'\n' | b'\r' if !continues => {}
                        b'\r' if self.cursor.peek() == b'\n' => self.cursor.advance_n(2),
                        _ => self.cursor.advance_char(),
                    }
                }
                b'\n' | b'\r' if !quote.triple => {
                    return self.token(start, unterminated);
                }
                _ if b == quote.byte => {
                    if !quote.triple {
                        self.cursor.advance();
                        return self.token(start, closed);
                    }
                    if self.cursor.starts_with(&[b, b, b]) {
                        self.cursor.advance_n(3);
                        return self.token(start, closed);
                    }
                    self.cursor.advance();
                }
                // Newline in a triple-quoted string, or a marker lead byte
                // that did not start the full marker.
                _ => self.cursor.advance(),
            }
        }
    }
}

impl Iterator for RawScanner<'_> {
    type Item = RawToken;

    fn next(&mut self) -> Option<RawToken> {
        let tok = self.next_token();
        if tok.tag == RawTag::Eof {
            None
        } else {
            Some(tok)
        }
    }
}

/// Operator characters.
#[inline]
fn is_operator_byte(b: u8) -> bool {
    matches!(
        b,
        b'/' | b'=' | b'-' | b'+' | b'!' | b'*' | b'%' | b'<' | b'>' | b'&' | b'|' | b'^' | b'~' | b'?'
    )
}

/// Convenience function: scan a source string and collect all raw tokens.
///
/// Returns every token except the final `Eof`. For streaming access,
/// construct a [`RawScanner`] directly.
pub fn scan_all(source: &str, config: ScanConfig) -> Vec<RawToken> {
    RawScanner::new(Cursor::new(source), config).collect()
}
