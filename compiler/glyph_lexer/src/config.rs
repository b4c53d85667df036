//! Lexer configuration and presets.
//!
//! [`LexerConfig`] wraps the raw scanner's [`ScanConfig`] with the settings
//! the cooking layer needs: the keyword list, the escape set and the
//! error-mode policy. Configs are plain `Copy` values built from `'static`
//! tables; [`LexerConfig::validate`] runs once per [`tokenize`](crate::tokenize)
//! call.

use glyph_lexer_core::{closing_delimiter, ScanConfig};

use crate::keywords::{PYTHON_KEYWORDS, SWIFT_KEYWORDS};

/// What to do with recoverable errors (invalid characters, bad escapes).
///
/// Structural errors (unterminated comments or strings, unbalanced
/// interpolation) end the token stream in both modes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorMode {
    /// The first error of any kind ends the stream.
    Strict,
    /// Recoverable errors flag their token with `HAS_ERROR` and are kept in
    /// [`Lexer::recovered_errors`](crate::Lexer::recovered_errors).
    BestEffort,
}

/// Escape sequences accepted inside string literals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EscapeRules {
    /// `(letter, value)` pairs: `('n', '\n')` accepts `\n`.
    pub simple: &'static [(char, char)],
    /// Accept `\u{XXXX}` (1-8 hex digits naming a Unicode scalar value).
    pub unicode_braced: bool,
    /// Accept `\xHH` (exactly two hex digits).
    pub hex: bool,
    /// Accept `\uHHHH` and `\UHHHHHHHH`.
    pub unicode_fixed: bool,
    /// Accept `\ooo` (one to three octal digits).
    pub octal: bool,
    /// Accept `\N{NAME}`. There is no name table, so the sequence is kept
    /// as written.
    pub named: bool,
    /// Keep unrecognized escapes as written instead of reporting them.
    pub keep_unknown: bool,
    /// Prefix letter that turns escape processing off (`r"\d"`).
    pub raw_prefix: Option<char>,
}

impl EscapeRules {
    pub const SWIFT: EscapeRules = EscapeRules {
        simple: &[
            ('0', '\0'),
            ('\\', '\\'),
            ('t', '\t'),
            ('n', '\n'),
            ('r', '\r'),
            ('"', '"'),
            ('\'', '\''),
        ],
        unicode_braced: true,
        hex: false,
        unicode_fixed: false,
        octal: false,
        named: false,
        keep_unknown: false,
        raw_prefix: None,
    };

    pub const PYTHON: EscapeRules = EscapeRules {
        simple: &[
            ('\\', '\\'),
            ('\'', '\''),
            ('"', '"'),
            ('a', '\u{07}'),
            ('b', '\u{08}'),
            ('f', '\u{0C}'),
            ('n', '\n'),
            ('r', '\r'),
            ('t', '\t'),
            ('v', '\u{0B}'),
        ],
        unicode_braced: false,
        hex: true,
        unicode_fixed: true,
        octal: true,
        named: true,
        keep_unknown: true,
        raw_prefix: Some('r'),
    };

    /// Value of a simple escape letter.
    #[inline]
    pub fn resolve(&self, letter: char) -> Option<char> {
        self.simple
            .iter()
            .find_map(|&(from, to)| (from == letter).then_some(to))
    }

    /// Whether a string prefix such as `rb` disables escapes.
    pub fn is_raw_prefix(&self, prefix: &str) -> bool {
        self.raw_prefix
            .is_some_and(|raw| prefix.chars().any(|c| c.eq_ignore_ascii_case(&raw)))
    }
}

/// Complete lexer configuration. There is no `Default`; start from a preset.
#[derive(Clone, Copy, Debug)]
pub struct LexerConfig {
    pub scan: ScanConfig,
    pub keywords: &'static [&'static str],
    pub escapes: EscapeRules,
    pub error_mode: ErrorMode,
}

impl LexerConfig {
    /// Swift: `//` and nested `/* */` comments, `"` and `"""` strings with
    /// `\(...)` interpolation, backtick identifiers. Strict.
    pub const fn swift() -> Self {
        Self {
            scan: ScanConfig::swift(),
            keywords: SWIFT_KEYWORDS,
            escapes: EscapeRules::SWIFT,
            error_mode: ErrorMode::Strict,
        }
    }

    /// Python: `#` comments, `"`/`'` strings with triple-quoted forms, XID
    /// identifiers. Strict.
    pub const fn python() -> Self {
        Self {
            scan: ScanConfig::python(),
            keywords: PYTHON_KEYWORDS,
            escapes: EscapeRules::PYTHON,
            error_mode: ErrorMode::Strict,
        }
    }

    #[must_use]
    pub const fn with_error_mode(mut self, error_mode: ErrorMode) -> Self {
        self.error_mode = error_mode;
        self
    }

    /// Check that the markers and quotes describe an unambiguous grammar.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let scan = &self.scan;

        if scan.line_comment.is_some_and(str::is_empty) {
            return Err(ConfigError::EmptyMarker {
                what: "line comment",
            });
        }

        if let Some(block) = scan.block_comment {
            if block.open.is_empty() || block.close.is_empty() {
                return Err(ConfigError::EmptyMarker {
                    what: "block comment",
                });
            }
            if block.open == block.close {
                return Err(ConfigError::IdenticalBlockCommentMarkers { marker: block.open });
            }
        }

        if let Some(&byte) = scan
            .string_quotes
            .iter()
            .find(|&&b| !b.is_ascii_punctuation() || b == b'\\')
        {
            return Err(ConfigError::InvalidQuote { byte });
        }

        if let Some(&prefix) = scan
            .string_prefixes
            .iter()
            .find(|p| p.is_empty() || !p.bytes().all(|b| b.is_ascii_alphabetic()))
        {
            return Err(ConfigError::InvalidStringPrefix { prefix });
        }

        if let Some(marker) = scan.interpolation_marker {
            let bytes = marker.as_bytes();
            let Some(&last) = bytes.last() else {
                return Err(ConfigError::EmptyMarker {
                    what: "interpolation",
                });
            };
            if closing_delimiter(last).is_none() {
                return Err(ConfigError::InterpolationWithoutOpener { marker });
            }
            let conflicting = bytes.iter().any(|b| {
                !b.is_ascii() || matches!(b, b'\n' | b'\r') || scan.string_quotes.contains(b)
            });
            if conflicting {
                return Err(ConfigError::InterpolationMarkerConflict { marker });
            }
        }

        Ok(())
    }
}

/// Rejected configuration or input.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{what} marker must not be empty")]
    EmptyMarker { what: &'static str },

    #[error("block comment open and close markers are both `{marker}`")]
    IdenticalBlockCommentMarkers { marker: &'static str },

    #[error("string quote byte {byte:#04x} must be ASCII punctuation other than `\\`")]
    InvalidQuote { byte: u8 },

    #[error("interpolation marker `{marker}` must end with `(`, `[` or `{{`")]
    InterpolationWithoutOpener { marker: &'static str },

    #[error("interpolation marker `{marker}` must be ASCII without quotes or newlines")]
    InterpolationMarkerConflict { marker: &'static str },

    #[error("string prefix `{prefix}` must be non-empty ASCII letters")]
    InvalidStringPrefix { prefix: &'static str },

    #[error("source is {len} bytes; at most {} are supported", u32::MAX)]
    SourceTooLarge { len: usize },
}
