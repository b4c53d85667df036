//! Raw token tags produced by the scanner.
//!
//! Tags are grouped into discriminant ranges so category checks compile to a
//! single comparison:
//!
//! | Range   | Category |
//! |---------|----------|
//! | 0-15    | identifiers & literals |
//! | 16-31   | interpolated string segments |
//! | 32-79   | operators |
//! | 80-111  | punctuation |
//! | 112-127 | trivia |
//! | 240-254 | errors |
//! | 255     | end of input |

/// Kind of a raw token. Carries no data; the text is recovered from the
/// source via the token's offset and length.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RawTag {
    // === Identifiers & Literals ===
    /// Identifier (not yet checked against a keyword table).
    Ident = 0,
    /// Backtick-quoted identifier, e.g. `` `class` ``.
    EscapedIdent = 1,
    /// Numeric literal.
    Number = 2,
    /// Complete string literal without interpolation.
    String = 3,

    // === Interpolated String Segments ===
    /// Opening quote through the first interpolation marker: `"abc \(`.
    StringHead = 16,
    /// Closing delimiter through the next marker: `) def \(`.
    StringMiddle = 17,
    /// Closing delimiter through the closing quote: `) ghi"`.
    StringTail = 18,

    // === Operators ===
    /// Maximal run of operator characters, e.g. `+`, `->`, `..<`, `??`.
    Operator = 32,

    // === Punctuation ===
    LeftParen = 80,
    RightParen = 81,
    LeftBracket = 82,
    RightBracket = 83,
    LeftBrace = 84,
    RightBrace = 85,
    Comma = 86,
    Colon = 87,
    Semicolon = 88,
    Dot = 89,
    At = 90,
    Hash = 91,
    Dollar = 92,
    Backslash = 93,
    Backtick = 94,

    // === Trivia ===
    /// Horizontal whitespace, lone `\r`, Unicode whitespace, U+FEFF.
    Whitespace = 112,
    /// `\n` or `\r\n`.
    Newline = 113,
    LineComment = 114,
    BlockComment = 115,

    // === Errors ===
    /// Code point that starts no token.
    InvalidChar = 240,
    /// U+0000 inside the source.
    InteriorNull = 241,
    /// String reached a newline (single-line) or EOF before its closing quote.
    UnterminatedString = 242,
    /// Block comment reached EOF with depth > 0.
    UnterminatedBlockComment = 243,
    /// A quote inside an interpolation while nested string literals are off.
    UnbalancedInterpolation = 244,
    /// Text after an interpolation's closer reached a newline (single-line)
    /// or EOF before the closing quote.
    UnterminatedStringTail = 245,

    // === Control ===
    Eof = 255,
}

impl RawTag {
    /// Punctuation tags (`80..=111`).
    #[inline]
    pub fn is_punctuation(self) -> bool {
        (80..=111).contains(&(self as u8))
    }

    /// Error tags (`240..=254`).
    #[inline]
    pub fn is_error(self) -> bool {
        (240..=254).contains(&(self as u8))
    }

    /// Head, middle or tail segment of an interpolated string.
    #[inline]
    pub fn is_string_segment(self) -> bool {
        (16..=31).contains(&(self as u8))
    }

    /// Human-readable name for diagnostics and trace output.
    pub fn name(self) -> &'static str {
        match self {
            Self::Ident => "identifier",
            Self::EscapedIdent => "escaped identifier",
            Self::Number => "number",
            Self::String => "string",
            Self::StringHead => "string head",
            Self::StringMiddle => "string middle",
            Self::StringTail => "string tail",
            Self::Operator => "operator",
            Self::Whitespace => "whitespace",
            Self::Newline => "newline",
            Self::LineComment => "line comment",
            Self::BlockComment => "block comment",
            Self::InvalidChar => "invalid character",
            Self::InteriorNull => "null byte",
            Self::UnterminatedString => "unterminated string",
            Self::UnterminatedBlockComment => "unterminated block comment",
            Self::UnbalancedInterpolation => "unbalanced interpolation",
            Self::UnterminatedStringTail => "unterminated string tail",
            Self::Eof => "end of input",
            _ => "punctuation",
        }
    }
}

/// One scanned token: its tag and byte length.
///
/// The offset is implicit: it is the sum of the lengths of every token
/// produced before it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RawToken {
    pub tag: RawTag,
    pub len: u32,
}

const _: () = assert!(std::mem::size_of::<RawTag>() == 1);
const _: () = assert!(std::mem::size_of::<RawToken>() == 8);
