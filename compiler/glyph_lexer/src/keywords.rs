//! Keyword resolution.
//!
//! The raw scanner emits every word as `Ident`; the cooker checks each one
//! against the configured keyword list. The list is a plain slice in the
//! configuration and is hashed once per [`Lexer`](crate::Lexer).

use rustc_hash::FxHashSet;

/// Swift reserved words (declarations, statements, expressions and types).
pub const SWIFT_KEYWORDS: &[&str] = &[
    // Declarations
    "associatedtype",
    "class",
    "deinit",
    "enum",
    "extension",
    "fileprivate",
    "func",
    "import",
    "init",
    "inout",
    "internal",
    "let",
    "open",
    "operator",
    "private",
    "precedencegroup",
    "protocol",
    "public",
    "rethrows",
    "static",
    "struct",
    "subscript",
    "typealias",
    "var",
    // Statements
    "break",
    "case",
    "catch",
    "continue",
    "default",
    "defer",
    "do",
    "else",
    "fallthrough",
    "for",
    "guard",
    "if",
    "in",
    "repeat",
    "return",
    "throw",
    "switch",
    "where",
    "while",
    // Expressions and types
    "Any",
    "as",
    "await",
    "false",
    "is",
    "nil",
    "self",
    "Self",
    "super",
    "throws",
    "true",
    "try",
];

/// Python hard keywords.
pub const PYTHON_KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global",
    "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return",
    "try", "while", "with", "yield",
];

/// Hashed view of a keyword list.
#[derive(Clone, Debug)]
pub(crate) struct KeywordTable {
    words: FxHashSet<&'static str>,
}

impl KeywordTable {
    pub(crate) fn new(words: &'static [&'static str]) -> Self {
        Self {
            words: words.iter().copied().collect(),
        }
    }

    #[inline]
    pub(crate) fn contains(&self, text: &str) -> bool {
        self.words.contains(text)
    }
}
