//! The token stream.
//!
//! [`Lexer`] drives a [`RawScanner`] and cooks each raw token into a
//! [`Token`]:
//!
//! ```text
//! source → RawScanner → (RawTag, len) → Lexer::cook → Token
//! ```
//!
//! Most tags map one-to-one. A `StringHead` starts an interpolated string:
//! the lexer keeps pulling raw tokens, cooking each into the current
//! interpolation's sub-sequence, until the matching `StringMiddle` or
//! `StringTail`. Nested interpolated strings re-enter the same path, guarded
//! by [`ensure_sufficient_stack`].
//!
//! Line and column numbers come from a single [`LineTracker`] that only ever
//! moves forward; every position request is made in source order.

use std::borrow::Cow;
use std::iter::FusedIterator;

use glyph_lexer_core::{
    Cursor, LineCol, LineTracker, RawScanner, RawTag, RawToken, CLOSING_DELIMITER_LEN,
};
use glyph_stack::ensure_sufficient_stack;
use tracing::{debug, trace};

use crate::config::{ErrorMode, LexerConfig};
use crate::cook_escape::{unescape, BadEscape};
use crate::keywords::KeywordTable;
use crate::lex_error::{LexError, LexErrorContext, LexFailure};
use crate::span::Span;
use crate::token::{StringPart, Token, TokenFlags, TokenKind};

/// An interpolation being assembled.
#[derive(Clone, Copy, Debug)]
struct OpenInterpolation {
    /// Span of the enclosing string's opening quote.
    quote: Span,
    /// Span of the marker that opened it.
    marker: Span,
}

/// Lazy, fused token stream over one source text.
///
/// Yields tokens left to right and ends with a single `EndOfInput` token.
/// The first `Err` ends the stream: structural errors always do, and
/// recoverable errors do in [`ErrorMode::Strict`]. In
/// [`ErrorMode::BestEffort`] recoverable errors are collected in
/// [`recovered_errors`](Self::recovered_errors) instead.
///
/// Created by [`tokenize`](crate::tokenize).
pub struct Lexer<'src> {
    source: &'src str,
    scanner: RawScanner<'src>,
    config: LexerConfig,
    keywords: KeywordTable,
    /// Start of the next raw token.
    offset: u32,
    tracker: LineTracker,
    /// Offset `tracker` has been advanced to.
    tracked: u32,
    interpolations: Vec<OpenInterpolation>,
    recovered: Vec<LexError>,
    emitted: usize,
    finished: bool,
}

impl<'src> Lexer<'src> {
    /// Create a lexer. The config must already be validated and the source
    /// must fit in `u32` offsets.
    pub(crate) fn new(source: &'src str, config: LexerConfig) -> Self {
        Self {
            source,
            scanner: RawScanner::new(Cursor::new(source), config.scan),
            keywords: KeywordTable::new(config.keywords),
            config,
            offset: 0,
            tracker: LineTracker::new(),
            tracked: 0,
            interpolations: Vec::new(),
            recovered: Vec::new(),
            emitted: 0,
            finished: false,
        }
    }

    /// Errors recovered from so far (best-effort mode only).
    pub fn recovered_errors(&self) -> &[LexError] {
        &self.recovered
    }

    /// Drain the stream.
    ///
    /// On error, the [`LexFailure`] carries every token produced before it.
    #[tracing::instrument(level = "debug", skip_all, fields(len = self.source.len()))]
    pub fn tokenize_all(mut self) -> Result<Vec<Token<'src>>, LexFailure<'src>> {
        let mut tokens = Vec::new();
        for result in &mut self {
            match result {
                Ok(token) => tokens.push(token),
                Err(error) => return Err(LexFailure { error, tokens }),
            }
        }
        Ok(tokens)
    }

    // ─── Raw Input ─────────────────────────────────────────────────

    /// Pull the next raw token; returns it with its start offset.
    fn next_raw(&mut self) -> (RawToken, u32) {
        let raw = self.scanner.next_token();
        let start = self.offset;
        self.offset += raw.len;
        trace!(tag = raw.tag.name(), start, len = raw.len, "raw token");
        (raw, start)
    }

    #[inline]
    fn slice(&self, start: u32, end: u32) -> &'src str {
        self.source
            .get(start as usize..end as usize)
            .unwrap_or_default()
    }

    /// Line and column of `offset`. Offsets must be requested in
    /// non-decreasing order.
    fn position_at(&mut self, offset: u32) -> LineCol {
        if offset > self.tracked {
            let text = self.slice(self.tracked, offset);
            self.tracker.advance(text);
            self.tracked = offset;
        }
        self.tracker.position()
    }

    fn span(&mut self, start: u32, end: u32) -> Span {
        let at = self.position_at(start);
        Span::new(start, end, at)
    }

    fn context(&self) -> LexErrorContext {
        match self.interpolations.last() {
            Some(open) => LexErrorContext::InsideInterpolation {
                start: open.marker.start,
                depth: u32::try_from(self.interpolations.len()).unwrap_or(u32::MAX),
            },
            None => LexErrorContext::TopLevel,
        }
    }

    /// Apply the error-mode policy to a recoverable error.
    fn recover(&mut self, error: LexError) -> Result<(), LexError> {
        match self.config.error_mode {
            ErrorMode::Strict => Err(error),
            ErrorMode::BestEffort => {
                debug!(%error, "recovered");
                self.recovered.push(error);
                Ok(())
            }
        }
    }

    // ─── Cooking ───────────────────────────────────────────────────

    /// Cook one raw token (anything but `Eof`).
    fn cook(&mut self, raw: RawToken, start: u32) -> Result<Token<'src>, LexError> {
        let end = start + raw.len;
        let kind = match raw.tag {
            RawTag::Ident => {
                if self.keywords.contains(self.slice(start, end)) {
                    TokenKind::Keyword
                } else {
                    TokenKind::Identifier
                }
            }
            RawTag::EscapedIdent => {
                return Ok(self.token(TokenKind::Identifier, start, end, TokenFlags::ESCAPED_IDENT));
            }
            RawTag::Number => TokenKind::NumberLiteral,
            RawTag::String => return self.simple_string(start, end),
            RawTag::StringHead => {
                return ensure_sufficient_stack(|| self.interpolated_string(start, end));
            }
            RawTag::Operator => TokenKind::Operator,
            RawTag::Whitespace | RawTag::Newline => TokenKind::Whitespace,
            RawTag::LineComment => TokenKind::LineComment,
            RawTag::BlockComment => TokenKind::BlockComment,
            RawTag::Eof => TokenKind::EndOfInput,
            tag if tag.is_error() => return self.raw_error(tag, start, end),
            // A middle or tail with no open interpolation.
            tag if tag.is_string_segment() => {
                return Err(self.unbalanced_interpolation(start, end));
            }
            tag if tag.is_punctuation() => TokenKind::Punctuation,
            _ => TokenKind::Invalid,
        };
        Ok(self.token(kind, start, end, TokenFlags::empty()))
    }

    fn token(&mut self, kind: TokenKind<'src>, start: u32, end: u32, flags: TokenFlags) -> Token<'src> {
        Token {
            kind,
            lexeme: self.slice(start, end),
            span: self.span(start, end),
            flags,
        }
    }

    fn raw_error(&mut self, tag: RawTag, start: u32, end: u32) -> Result<Token<'src>, LexError> {
        match tag {
            RawTag::InvalidChar | RawTag::InteriorNull => self.invalid_character(start, end),
            RawTag::UnterminatedString => Err(self.unterminated_string(start, end)),
            RawTag::UnterminatedBlockComment => Err(self.unterminated_block_comment(start, end)),
            _ => Err(self.unbalanced_interpolation(start, end)),
        }
    }

    fn invalid_character(&mut self, start: u32, end: u32) -> Result<Token<'src>, LexError> {
        let found = self.slice(start, end).chars().next().unwrap_or('\0');
        let span = self.span(start, end);
        let context = self.context();
        self.recover(LexError::invalid_character(span, found, context))?;
        Ok(Token {
            kind: TokenKind::Invalid,
            lexeme: self.slice(start, end),
            span,
            flags: TokenFlags::HAS_ERROR,
        })
    }

    // ─── Strings ───────────────────────────────────────────────────

    /// Offset and length of the opening quote of the string token at
    /// `start..end`, after any prefix, with the flags the quote and prefix
    /// imply.
    fn opening_quote(&self, start: u32, end: u32) -> (u32, u32, TokenFlags) {
        let scan = &self.config.scan;
        let quote_start = start + scan.string_prefix_len(self.slice(start, end));
        let quote_len = scan.quote_len(self.slice(quote_start, end));
        let mut flags = multiline_flag(quote_len);
        if self.config.escapes.is_raw_prefix(self.slice(start, quote_start)) {
            flags |= TokenFlags::RAW_STRING;
        }
        (quote_start, quote_len, flags)
    }

    /// A string literal without interpolation.
    fn simple_string(&mut self, start: u32, end: u32) -> Result<Token<'src>, LexError> {
        let lexeme = self.slice(start, end);
        let (quote_start, quote_len, mut flags) = self.opening_quote(start, end);
        let span = self.span(start, end);
        let mut parts = Vec::new();
        self.push_text(&mut parts, &mut flags, start, quote_start + quote_len, end - quote_len)?;
        Ok(Token {
            kind: TokenKind::StringLiteral(parts),
            lexeme,
            span,
            flags,
        })
    }

    /// A string literal from its `StringHead` through the matching
    /// `StringTail`, cooking every embedded token on the way.
    fn interpolated_string(&mut self, start: u32, head_end: u32) -> Result<Token<'src>, LexError> {
        let (quote_start, quote_len, flags) = self.opening_quote(start, head_end);
        let marker_len = self
            .config
            .scan
            .interpolation_marker
            .map_or(0, |marker| u32::try_from(marker.len()).unwrap_or(0));
        let at = self.position_at(start);
        let quote = self.span(quote_start, quote_start + quote_len);
        let mut flags = flags | TokenFlags::INTERPOLATED;
        let mut parts = Vec::new();

        let mut marker_start = head_end - marker_len;
        self.push_text(&mut parts, &mut flags, start, quote.end, marker_start)?;

        let end = loop {
            let marker = self.span(marker_start, marker_start + marker_len);
            self.interpolations.push(OpenInterpolation { quote, marker });
            let mut tokens = Vec::new();
            let (segment, segment_start) = loop {
                let (raw, offset) = self.next_raw();
                match raw.tag {
                    RawTag::StringMiddle | RawTag::StringTail => break (raw, offset),
                    RawTag::UnterminatedStringTail => {
                        let context = LexErrorContext::InsideString { start };
                        return Err(LexError::unterminated_string(quote, context, offset + raw.len));
                    }
                    // A nested string ran to a newline or EOF; the closer
                    // is missing.
                    RawTag::UnterminatedString => {
                        return Err(self.unbalanced_interpolation(offset, offset + raw.len));
                    }
                    RawTag::Eof => return Err(self.unterminated_interpolation()),
                    _ => tokens.push(self.cook(raw, offset)?),
                }
            };
            self.interpolations.pop();

            let closer_end = segment_start + CLOSING_DELIMITER_LEN;
            let segment_end = segment_start + segment.len;
            parts.push(StringPart::Interpolation {
                span: Span::new(marker_start, closer_end, marker.position()),
                tokens,
            });

            if segment.tag == RawTag::StringTail {
                self.push_text(&mut parts, &mut flags, start, closer_end, segment_end - quote_len)?;
                break segment_end;
            }
            marker_start = segment_end - marker_len;
            self.push_text(&mut parts, &mut flags, start, closer_end, marker_start)?;
        };

        Ok(Token {
            kind: TokenKind::StringLiteral(parts),
            lexeme: self.slice(start, end),
            span: Span::new(start, end, at),
            flags,
        })
    }

    /// Cook `text_start..text_end` into a `Text` part; empty text adds
    /// nothing. `string_start` is where the string token begins, for error
    /// context.
    fn push_text(
        &mut self,
        parts: &mut Vec<StringPart<'src>>,
        flags: &mut TokenFlags,
        string_start: u32,
        text_start: u32,
        text_end: u32,
    ) -> Result<(), LexError> {
        if text_end <= text_start {
            return Ok(());
        }
        let span = self.span(text_start, text_end);
        let raw = self.slice(text_start, text_end);
        if flags.contains(TokenFlags::RAW_STRING) {
            parts.push(StringPart::Text {
                raw,
                value: Cow::Borrowed(raw),
                span,
            });
            return Ok(());
        }
        let mut bad = Vec::new();
        let continuation =
            flags.contains(TokenFlags::MULTILINE) || self.config.scan.escaped_newline_continues;
        let value = unescape(raw, text_start, &self.config.escapes, continuation, &mut bad);
        for BadEscape { start, end, escape } in bad {
            let span = self.span(start, end);
            self.recover(LexError::invalid_escape(span, escape, string_start))?;
            *flags |= TokenFlags::HAS_ERROR;
        }
        parts.push(StringPart::Text { raw, value, span });
        Ok(())
    }

    // ─── Structural Errors ─────────────────────────────────────────

    /// The span is the opening quote, after any prefix.
    fn unterminated_string(&mut self, start: u32, end: u32) -> LexError {
        let (quote_start, quote_len, _) = self.opening_quote(start, end);
        let span = self.span(quote_start, quote_start + quote_len.min(end - quote_start));
        LexError::unterminated_string(span, LexErrorContext::InsideString { start }, end)
    }

    /// End of input with an interpolation still open. The span is the
    /// opening quote of the innermost string.
    fn unterminated_interpolation(&mut self) -> LexError {
        let context = self.context();
        let span = match self.interpolations.last() {
            Some(open) => open.quote,
            None => self.span(self.offset, self.offset),
        };
        LexError::unterminated_string(span, context, self.offset)
    }

    fn unterminated_block_comment(&mut self, start: u32, end: u32) -> LexError {
        let open_len = self
            .config
            .scan
            .block_comment
            .map_or(0, |syntax| u32::try_from(syntax.open.len()).unwrap_or(0));
        let span = self.span(start, start + open_len.min(end - start));
        LexError::unterminated_block_comment(span, self.scanner.comment_depth(), end)
    }

    /// The span is the innermost open interpolation marker, or the
    /// offending token when none is open.
    fn unbalanced_interpolation(&mut self, start: u32, end: u32) -> LexError {
        let context = self.context();
        let span = match self.interpolations.last() {
            Some(open) => open.marker,
            None => self.span(start, end),
        };
        LexError::unbalanced_interpolation(span, context, end)
    }

    fn end_of_input(&mut self, start: u32) -> Token<'src> {
        self.token(TokenKind::EndOfInput, start, start, TokenFlags::empty())
    }
}

fn multiline_flag(quote_len: u32) -> TokenFlags {
    if quote_len > 1 {
        TokenFlags::MULTILINE
    } else {
        TokenFlags::empty()
    }
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Result<Token<'src>, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let (raw, start) = self.next_raw();
        let result = if raw.tag == RawTag::Eof {
            self.finished = true;
            debug!(
                tokens = self.emitted + 1,
                recovered = self.recovered.len(),
                "token stream complete"
            );
            Ok(self.end_of_input(start))
        } else {
            self.cook(raw, start)
        };
        match &result {
            Ok(_) => self.emitted += 1,
            Err(error) => {
                self.finished = true;
                debug!(%error, stopped_at = error.stopped_at, "lexing stopped");
            }
        }
        Some(result)
    }
}

impl FusedIterator for Lexer<'_> {}
