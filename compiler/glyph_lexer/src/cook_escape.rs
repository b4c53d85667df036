//! Escape processing for string literal text.
//!
//! Operates on one text segment at a time (the text between a quote and an
//! interpolation marker, say). Invalid escapes are recorded and replaced
//! with U+FFFD rather than aborting, so best-effort mode still produces a
//! usable value. Which sequences are valid comes from [`EscapeRules`].
//!
//! Fast path: text without a backslash comes back borrowed.

use std::borrow::Cow;

use crate::config::EscapeRules;

/// An escape sequence outside the configured set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct BadEscape {
    /// Offset of the backslash.
    pub start: u32,
    /// End of the escape letter.
    pub end: u32,
    /// The letter after the backslash (`\\` for a trailing backslash).
    pub escape: char,
}

/// How one escape sequence reads.
enum Escape {
    /// A value, followed by this many bytes after the escape letter.
    Char(char, usize),
    /// Kept as written, with this many bytes after the escape letter.
    Verbatim(usize),
    Bad,
}

/// Unescape a string segment that starts at source offset `base`.
///
/// `continuation` enables line continuation: a backslash before a newline
/// removes both.
#[allow(
    clippy::cast_possible_truncation,
    reason = "source offsets bounded by u32; tokenize rejects larger sources"
)]
pub(crate) fn unescape<'src>(
    raw: &'src str,
    base: u32,
    rules: &EscapeRules,
    continuation: bool,
    bad: &mut Vec<BadEscape>,
) -> Cow<'src, str> {
    if !raw.contains('\\') {
        return Cow::Borrowed(raw);
    }

    let mut result = String::with_capacity(raw.len());
    let mut chars = raw.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some((_, '\n')) if continuation => {}
            Some((_, '\r')) if continuation => {
                chars.next_if(|&(_, c)| c == '\n');
            }
            Some((j, letter)) => {
                let after = j + letter.len_utf8();
                let rest = &raw[after..];
                let extra = match classify(rules, letter, rest) {
                    Escape::Char(value, extra) => {
                        result.push(value);
                        extra
                    }
                    Escape::Verbatim(extra) => {
                        result.push('\\');
                        result.push(letter);
                        result.push_str(&rest[..extra]);
                        extra
                    }
                    Escape::Bad => {
                        bad.push(BadEscape {
                            start: base + i as u32,
                            end: base + after as u32,
                            escape: letter,
                        });
                        result.push('\u{FFFD}');
                        0
                    }
                };
                let resume = after + extra;
                while chars.next_if(|&(k, _)| k < resume).is_some() {}
            }
            None => {
                // Trailing backslash
                bad.push(BadEscape {
                    start: base + i as u32,
                    end: base + i as u32 + 1,
                    escape: '\\',
                });
                result.push('\\');
            }
        }
    }

    Cow::Owned(result)
}

/// Read the escape whose letter is `letter`; `rest` is the text after it.
fn classify(rules: &EscapeRules, letter: char, rest: &str) -> Escape {
    let numeric = match letter {
        'u' if rules.unicode_braced && (rest.starts_with('{') || !rules.unicode_fixed) => {
            Some(braced_scalar(rest))
        }
        'u' if rules.unicode_fixed => Some(fixed_hex(rest, 4)),
        'U' if rules.unicode_fixed => Some(fixed_hex(rest, 8)),
        'x' if rules.hex => Some(fixed_hex(rest, 2)),
        '0'..='7' if rules.octal => Some(octal(letter, rest)),
        _ => None,
    };
    if let Some(scalar) = numeric {
        return scalar.map_or(Escape::Bad, |(value, len)| Escape::Char(value, len));
    }
    if letter == 'N' && rules.named {
        return braced_name(rest).map_or(Escape::Bad, Escape::Verbatim);
    }
    if let Some(value) = rules.resolve(letter) {
        return Escape::Char(value, 0);
    }
    if rules.keep_unknown {
        Escape::Verbatim(0)
    } else {
        Escape::Bad
    }
}

/// Parse `{XXXX}` (1-8 hex digits) at the start of `text`.
///
/// Returns the scalar and the number of bytes consumed, braces included.
fn braced_scalar(text: &str) -> Option<(char, usize)> {
    let body = text.strip_prefix('{')?;
    let close = body.find('}')?;
    let digits = &body[..close];
    if digits.is_empty() || digits.len() > 8 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let value = u32::from_str_radix(digits, 16).ok()?;
    Some((char::from_u32(value)?, close + 2))
}

/// Exactly `len` hex digits at the start of `text`.
fn fixed_hex(text: &str, len: usize) -> Option<(char, usize)> {
    let digits = text.get(..len)?;
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let value = u32::from_str_radix(digits, 16).ok()?;
    Some((char::from_u32(value)?, len))
}

/// Up to three octal digits, the first of which is `first`.
fn octal(first: char, text: &str) -> Option<(char, usize)> {
    let more = text
        .bytes()
        .take(2)
        .take_while(|b| matches!(b, b'0'..=b'7'))
        .count();
    let mut value = first.to_digit(8)?;
    for b in text.bytes().take(more) {
        value = value * 8 + u32::from(b - b'0');
    }
    Some((char::from_u32(value)?, more))
}

/// Length of `{NAME}` at the start of `text`, braces included.
fn braced_name(text: &str) -> Option<usize> {
    let body = text.strip_prefix('{')?;
    let close = body.find('}')?;
    let name = &body[..close];
    let valid = !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b' ' | b'-'));
    valid.then_some(close + 2)
}
