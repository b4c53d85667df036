//! Configurable source tokenizer for Glyph.
//!
//! Splits source text into [`Token`]s: identifiers (Unicode-aware through
//! pluggable predicates), keywords, numbers, string literals with nested
//! interpolation, operators, punctuation, comments (nested block comments
//! included) and whitespace. Every byte of the input belongs to exactly one
//! top-level token, so concatenating the lexemes reproduces the source.
//!
//! # Architecture
//!
//! ```text
//! glyph_lexer_core::RawScanner  →  (RawTag, len)  →  Lexer (cooking)  →  Token
//! ```
//!
//! The raw scanner handles the grammar-level state (comment depth,
//! interpolation stack) and encodes errors as tags. This crate adds spans,
//! keyword resolution, escape processing, interpolation structure, typed
//! errors and the [`ErrorMode`] policy.
//!
//! ```
//! use glyph_lexer::{tokenize, LexerConfig, StringPart, TokenKind};
//!
//! let source = r#"let n = "I have \(numberOfApples) apples.""#;
//! let tokens = tokenize(source, &LexerConfig::swift())?.tokenize_all()?;
//! let string = tokens
//!     .iter()
//!     .find_map(|t| t.kind.string_parts())
//!     .unwrap_or_default();
//! assert_eq!(string.len(), 3);
//! assert!(matches!(string[1], StringPart::Interpolation { .. }));
//! assert_eq!(tokens.last().map(|t| &t.kind), Some(&TokenKind::EndOfInput));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod config;
mod cook_escape;
mod keywords;
mod lex_error;
mod lexer;
mod span;
mod token;

pub use config::{ConfigError, ErrorMode, EscapeRules, LexerConfig};
pub use glyph_lexer_core::{
    ascii_ident_continue, ascii_ident_start, swift_ident_continue, swift_ident_start,
    xid_ident_continue, xid_ident_start, BlockCommentSyntax, LineCol, ScanConfig,
};
pub use keywords::{PYTHON_KEYWORDS, SWIFT_KEYWORDS};
pub use lex_error::{LexError, LexErrorContext, LexErrorKind, LexFailure};
pub use lexer::Lexer;
pub use span::Span;
pub use token::{StringPart, Token, TokenFlags, TokenKind};

/// Start tokenizing `text`.
///
/// Validates `config` and the input size up front; everything after that is
/// reported through the returned [`Lexer`].
pub fn tokenize<'src>(text: &'src str, config: &LexerConfig) -> Result<Lexer<'src>, ConfigError> {
    config.validate()?;
    if u32::try_from(text.len()).is_err() {
        return Err(ConfigError::SourceTooLarge { len: text.len() });
    }
    Ok(Lexer::new(text, *config))
}

#[cfg(test)]
mod tests;
