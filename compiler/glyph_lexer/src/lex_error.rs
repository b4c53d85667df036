//! Lexer error types.
//!
//! Errors follow a WHERE+WHAT+WHY shape:
//! - WHERE: `span` locating the offending construct, and `stopped_at`, the
//!   offset where scanning gave up
//! - WHAT: `kind` describing what went wrong
//! - WHY: `context` explaining what the lexer was inside of
//!
//! [`LexError::help`] supplies a one-line fix hint for rendering.

use crate::span::Span;
use crate::token::Token;

/// A lexer error with full context for diagnostic rendering.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{kind} at {span}")]
pub struct LexError {
    /// WHAT went wrong.
    pub kind: LexErrorKind,
    /// WHERE the error occurred.
    pub span: Span,
    /// WHY we were checking (lexing context at the point of error).
    pub context: LexErrorContext,
    /// Byte offset where scanning stopped.
    pub stopped_at: u32,
}

/// What kind of lexer error occurred.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexErrorKind {
    // === Structural (always end the stream) ===
    /// End of input inside a block comment. `depth` is how many comments
    /// were still open.
    #[error("unterminated block comment ({depth} still open)")]
    UnterminatedBlockComment { depth: u32 },
    /// End of input, or a newline in a single-line string, before the
    /// closing quote.
    #[error("unterminated string literal")]
    UnterminatedStringLiteral,
    /// A quote inside an interpolation that cannot start a nested string,
    /// or a string continuation with no open interpolation.
    #[error("unbalanced string interpolation")]
    UnbalancedInterpolation,

    // === Recoverable ===
    /// A code point that starts no token.
    #[error("invalid character {found:?}")]
    InvalidCharacter { found: char },
    /// An escape sequence outside the configured escape set.
    #[error("invalid escape sequence `\\{escape}`")]
    InvalidEscape { escape: char },
}

/// Lexing context at the point of error: the WHY.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum LexErrorContext {
    /// Top-level scanning (not inside any literal).
    #[default]
    TopLevel,
    /// Inside a string literal opened at `start`.
    InsideString { start: u32 },
    /// Inside an interpolation whose marker starts at `start`; `depth` is
    /// the number of interpolations open (1 for the outermost).
    InsideInterpolation { start: u32, depth: u32 },
    /// Inside a block comment.
    InsideBlockComment,
}

impl LexError {
    /// Create an unterminated block comment error. `span` covers the
    /// outermost opener.
    #[cold]
    pub fn unterminated_block_comment(span: Span, depth: u32, stopped_at: u32) -> Self {
        Self {
            kind: LexErrorKind::UnterminatedBlockComment { depth },
            span,
            context: LexErrorContext::InsideBlockComment,
            stopped_at,
        }
    }

    /// Create an unterminated string error. `span` covers the opening quote.
    #[cold]
    pub fn unterminated_string(span: Span, context: LexErrorContext, stopped_at: u32) -> Self {
        Self {
            kind: LexErrorKind::UnterminatedStringLiteral,
            span,
            context,
            stopped_at,
        }
    }

    /// Create an unbalanced interpolation error. `span` covers the
    /// interpolation marker when one is open.
    #[cold]
    pub fn unbalanced_interpolation(span: Span, context: LexErrorContext, stopped_at: u32) -> Self {
        Self {
            kind: LexErrorKind::UnbalancedInterpolation,
            span,
            context,
            stopped_at,
        }
    }

    /// Create an invalid character error.
    #[cold]
    pub fn invalid_character(span: Span, found: char, context: LexErrorContext) -> Self {
        Self {
            kind: LexErrorKind::InvalidCharacter { found },
            span,
            context,
            stopped_at: span.end,
        }
    }

    /// Create an invalid escape error inside the string opened at
    /// `string_start`.
    #[cold]
    pub fn invalid_escape(span: Span, escape: char, string_start: u32) -> Self {
        Self {
            kind: LexErrorKind::InvalidEscape { escape },
            span,
            context: LexErrorContext::InsideString {
                start: string_start,
            },
            stopped_at: span.end,
        }
    }

    /// Whether best-effort mode may continue past this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self.kind,
            LexErrorKind::InvalidCharacter { .. } | LexErrorKind::InvalidEscape { .. }
        )
    }

    /// Short, actionable fix hint.
    pub fn help(&self) -> &'static str {
        match self.kind {
            LexErrorKind::UnterminatedBlockComment { depth } if depth > 1 => {
                "nested block comments each need their own closing marker"
            }
            LexErrorKind::UnterminatedBlockComment { .. } => "add the closing comment marker",
            LexErrorKind::UnterminatedStringLiteral => match self.context {
                LexErrorContext::InsideInterpolation { .. } => {
                    "close the interpolation and then the string"
                }
                _ => "add the closing quote; use a triple-quoted string to span lines",
            },
            LexErrorKind::UnbalancedInterpolation => {
                "close the interpolation before starting another string"
            }
            LexErrorKind::InvalidCharacter { found: '\0' } => "remove the null byte",
            LexErrorKind::InvalidCharacter { .. } => {
                "this character cannot appear outside a string or comment"
            }
            LexErrorKind::InvalidEscape { .. } => "escape the backslash itself as `\\\\`",
        }
    }
}

/// The error that stopped [`Lexer::tokenize_all`](crate::Lexer::tokenize_all),
/// with every token produced before it.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("{error} (after {} tokens)", .tokens.len())]
pub struct LexFailure<'src> {
    pub error: LexError,
    pub tokens: Vec<Token<'src>>,
}
