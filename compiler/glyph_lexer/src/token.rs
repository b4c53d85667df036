//! Cooked tokens.
//!
//! A [`Token`] borrows its lexeme from the source. String literals own their
//! parts: literal text (with escapes resolved) and the token sub-sequence of
//! every embedded interpolation.

use std::borrow::Cow;

use bitflags::bitflags;

use crate::span::Span;

bitflags! {
    /// Per-token metadata.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct TokenFlags: u8 {
        /// A recoverable error was reported for this token (best-effort mode).
        const HAS_ERROR = 1 << 0;
        /// Backtick-quoted identifier, never a keyword.
        const ESCAPED_IDENT = 1 << 1;
        /// Triple-quoted string literal.
        const MULTILINE = 1 << 2;
        /// String literal with at least one interpolation.
        const INTERPOLATED = 1 << 3;
        /// Raw string literal (`r"..."`); escapes are not processed.
        const RAW_STRING = 1 << 4;
    }
}

/// A lexical unit with its source text and location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token<'src> {
    pub kind: TokenKind<'src>,
    /// Exact source text consumed.
    pub lexeme: &'src str,
    pub span: Span,
    pub flags: TokenFlags,
}

impl Token<'_> {
    /// Whitespace, newline or comment.
    #[inline]
    pub fn is_trivia(&self) -> bool {
        self.kind.is_trivia()
    }

    #[inline]
    pub fn has_error(&self) -> bool {
        self.flags.contains(TokenFlags::HAS_ERROR)
    }
}

/// Token classification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenKind<'src> {
    Identifier,
    /// Identifier found in the configured keyword list.
    Keyword,
    NumberLiteral,
    StringLiteral(Vec<StringPart<'src>>),
    Operator,
    Punctuation,
    LineComment,
    BlockComment,
    /// Spaces, tabs, newlines and other white space.
    Whitespace,
    /// Text matching no rule; only produced in best-effort mode.
    Invalid,
    EndOfInput,
}

impl TokenKind<'_> {
    #[inline]
    pub fn is_trivia(&self) -> bool {
        matches!(
            self,
            Self::Whitespace | Self::LineComment | Self::BlockComment
        )
    }

    /// Human-readable name for diagnostics and trace output.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Identifier => "identifier",
            Self::Keyword => "keyword",
            Self::NumberLiteral => "number literal",
            Self::StringLiteral(_) => "string literal",
            Self::Operator => "operator",
            Self::Punctuation => "punctuation",
            Self::LineComment => "line comment",
            Self::BlockComment => "block comment",
            Self::Whitespace => "whitespace",
            Self::Invalid => "invalid",
            Self::EndOfInput => "end of input",
        }
    }

    /// Parts of a string literal, or `None` for any other kind.
    pub fn string_parts(&self) -> Option<&[StringPart<'_>]> {
        match self {
            Self::StringLiteral(parts) => Some(parts),
            _ => None,
        }
    }
}

/// One piece of a string literal, in source order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StringPart<'src> {
    /// Literal text between delimiters. Never empty.
    Text {
        /// Text as written.
        raw: &'src str,
        /// Text with escapes resolved; borrowed when there were none.
        value: Cow<'src, str>,
        span: Span,
    },
    /// An embedded expression, from the marker through the closing
    /// delimiter. `tokens` includes trivia but no `EndOfInput`.
    Interpolation { span: Span, tokens: Vec<Token<'src>> },
}

impl StringPart<'_> {
    pub fn span(&self) -> Span {
        match self {
            Self::Text { span, .. } | Self::Interpolation { span, .. } => *span,
        }
    }
}
