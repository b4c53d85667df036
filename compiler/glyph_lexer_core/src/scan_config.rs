//! Scanner configuration: the grammar knobs the raw scanner consults.
//!
//! Everything that differs between related grammars lives here so the
//! scanning engine itself never changes. There is no `Default`: callers
//! pick a preset or spell every field out.

use crate::ident;

/// Block comment delimiters, e.g. `/*` and `*/`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BlockCommentSyntax {
    pub open: &'static str,
    pub close: &'static str,
}

/// Grammar knobs for [`RawScanner`](crate::RawScanner).
#[derive(Clone, Copy, Debug)]
pub struct ScanConfig {
    /// Can `c` begin an identifier?
    pub is_ident_start: fn(char) -> bool,
    /// Can `c` appear after the first identifier character?
    pub is_ident_continue: fn(char) -> bool,
    /// Line comment marker (`//`, `#`), or `None` for no line comments.
    pub line_comment: Option<&'static str>,
    /// Block comment markers, or `None` for no block comments.
    pub block_comment: Option<BlockCommentSyntax>,
    /// Whether an opener inside a block comment nests.
    pub allow_nested_block_comments: bool,
    /// Bytes that open and close a string literal.
    pub string_quotes: &'static [u8],
    /// Whether a tripled quote (`"""`) opens a multi-line string.
    pub multiline_strings: bool,
    /// Words that may directly precede a quote as part of the literal
    /// (`r"..."`, `rb'...'`). Matched ignoring ASCII case.
    pub string_prefixes: &'static [&'static str],
    /// Whether a backslash before a newline continues a single-line string.
    pub escaped_newline_continues: bool,
    /// Marker that opens an interpolation inside a string (`\(`, `${`).
    ///
    /// Its last byte must be `(`, `[` or `{`; the matching closer ends the
    /// interpolation.
    pub interpolation_marker: Option<&'static str>,
    /// Whether a quote inside an interpolation starts a nested string.
    ///
    /// When `false`, such a quote is an unbalanced-interpolation error.
    pub nested_string_literals: bool,
    /// Whether `` `name` `` is an escaped identifier.
    pub backtick_identifiers: bool,
}

impl ScanConfig {
    /// Swift lexical structure.
    pub const fn swift() -> Self {
        Self {
            is_ident_start: ident::swift_ident_start,
            is_ident_continue: ident::swift_ident_continue,
            line_comment: Some("//"),
            block_comment: Some(BlockCommentSyntax {
                open: "/*",
                close: "*/",
            }),
            allow_nested_block_comments: true,
            string_quotes: b"\"",
            multiline_strings: true,
            string_prefixes: &[],
            escaped_newline_continues: false,
            interpolation_marker: Some("\\("),
            nested_string_literals: true,
            backtick_identifiers: true,
        }
    }

    /// Python lexical structure (no block comments, no interpolation).
    pub const fn python() -> Self {
        Self {
            is_ident_start: ident::xid_ident_start,
            is_ident_continue: ident::xid_ident_continue,
            line_comment: Some("#"),
            block_comment: None,
            allow_nested_block_comments: false,
            string_quotes: b"\"'",
            multiline_strings: true,
            string_prefixes: &["r", "u", "b", "f", "br", "rb", "fr", "rf"],
            escaped_newline_continues: true,
            interpolation_marker: None,
            nested_string_literals: false,
            backtick_identifiers: false,
        }
    }

    /// Closing delimiter of the interpolation marker, if interpolation is on
    /// and the marker ends in a recognised opener.
    pub fn interpolation_close(&self) -> Option<u8> {
        let open = *self.interpolation_marker?.as_bytes().last()?;
        closing_delimiter(open)
    }

    /// Is `word` one of the configured string prefixes?
    pub fn is_string_prefix(&self, word: &str) -> bool {
        self.string_prefixes
            .iter()
            .any(|prefix| prefix.eq_ignore_ascii_case(word))
    }

    /// Byte length of the prefix before a string token's opening quote.
    pub fn string_prefix_len(&self, lexeme: &str) -> u32 {
        lexeme
            .bytes()
            .position(|b| self.string_quotes.contains(&b))
            .and_then(|len| u32::try_from(len).ok())
            .unwrap_or(0)
    }

    /// Byte length of the opening quote of a string token (1 or 3).
    ///
    /// `lexeme` starts at the quote, after any prefix.
    pub fn quote_len(&self, lexeme: &str) -> u32 {
        match lexeme.as_bytes() {
            [a, b, c, ..] if self.multiline_strings && a == b && b == c => 3,
            _ => 1,
        }
    }
}

/// Byte length of every closer [`closing_delimiter`] returns.
pub const CLOSING_DELIMITER_LEN: u32 = 1;

/// Closer for an opening delimiter byte.
pub fn closing_delimiter(open: u8) -> Option<u8> {
    match open {
        b'(' => Some(b')'),
        b'[' => Some(b']'),
        b'{' => Some(b'}'),
        _ => None,
    }
}
