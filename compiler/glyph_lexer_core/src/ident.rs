//! Identifier classification presets.
//!
//! The scanner never hard-codes what an identifier is: it calls the
//! `is_ident_start` / `is_ident_continue` predicates from its
//! [`ScanConfig`](crate::ScanConfig). This module supplies ready-made pairs.
//!
//! | Preset | Start | Continue |
//! |--------|-------|----------|
//! | Swift  | [`swift_ident_start`] | [`swift_ident_continue`] |
//! | XID    | [`xid_ident_start`]   | [`xid_ident_continue`]   |
//! | ASCII  | [`ascii_ident_start`] | [`ascii_ident_continue`] |

/// Swift `identifier-head` code point ranges (beyond ASCII letters and `_`).
///
/// Taken from the Swift language reference's lexical structure chapter.
/// Covers CJK ideographs and the supplementary planes, which is where emoji
/// such as U+1F30E live.
static SWIFT_HEAD_RANGES: &[(u32, u32)] = &[
    (0x00A8, 0x00A8),
    (0x00AA, 0x00AA),
    (0x00AD, 0x00AD),
    (0x00AF, 0x00AF),
    (0x00B2, 0x00B5),
    (0x00B7, 0x00BA),
    (0x00BC, 0x00BE),
    (0x00C0, 0x00D6),
    (0x00D8, 0x00F6),
    (0x00F8, 0x00FF),
    (0x0100, 0x02FF),
    (0x0370, 0x167F),
    (0x1681, 0x180D),
    (0x180F, 0x1DBF),
    (0x1E00, 0x1FFF),
    (0x200B, 0x200D),
    (0x202A, 0x202E),
    (0x203F, 0x2040),
    (0x2054, 0x2054),
    (0x2060, 0x206F),
    (0x2070, 0x20CF),
    (0x2100, 0x218F),
    (0x2460, 0x24FF),
    (0x2776, 0x2793),
    (0x2C00, 0x2DFF),
    (0x2E80, 0x2FFF),
    (0x3004, 0x3007),
    (0x3021, 0x302F),
    (0x3031, 0x303F),
    (0x3040, 0xD7FF),
    (0xF900, 0xFD3D),
    (0xFD40, 0xFDCF),
    (0xFDF0, 0xFE1F),
    (0xFE30, 0xFE44),
    (0xFE47, 0xFFFD),
    (0x1_0000, 0x1_FFFD),
    (0x2_0000, 0x2_FFFD),
    (0x3_0000, 0x3_FFFD),
    (0x4_0000, 0x4_FFFD),
    (0x5_0000, 0x5_FFFD),
    (0x6_0000, 0x6_FFFD),
    (0x7_0000, 0x7_FFFD),
    (0x8_0000, 0x8_FFFD),
    (0x9_0000, 0x9_FFFD),
    (0xA_0000, 0xA_FFFD),
    (0xB_0000, 0xB_FFFD),
    (0xC_0000, 0xC_FFFD),
    (0xD_0000, 0xD_FFFD),
    (0xE_0000, 0xE_FFFD),
];

/// Combining marks allowed after the first character.
static SWIFT_CONTINUE_RANGES: &[(u32, u32)] = &[
    (0x0300, 0x036F),
    (0x1DC0, 0x1DFF),
    (0x20D0, 0x20FF),
    (0xFE20, 0xFE2F),
];

fn in_ranges(c: char, ranges: &[(u32, u32)]) -> bool {
    let cp = u32::from(c);
    ranges
        .binary_search_by(|&(lo, hi)| {
            if hi < cp {
                std::cmp::Ordering::Less
            } else if lo > cp {
                std::cmp::Ordering::Greater
            } else {
                std::cmp::Ordering::Equal
            }
        })
        .is_ok()
}

/// Swift identifier head: ASCII letters, `_`, and the Unicode head ranges.
pub fn swift_ident_start(c: char) -> bool {
    if c.is_ascii() {
        c.is_ascii_alphabetic() || c == '_'
    } else {
        in_ranges(c, SWIFT_HEAD_RANGES)
    }
}

/// Swift identifier character: a head, an ASCII digit, or a combining mark.
pub fn swift_ident_continue(c: char) -> bool {
    if c.is_ascii() {
        c.is_ascii_alphanumeric() || c == '_'
    } else {
        in_ranges(c, SWIFT_HEAD_RANGES) || in_ranges(c, SWIFT_CONTINUE_RANGES)
    }
}

/// Unicode `XID_Start` or `_` (Python, Rust and most modern grammars).
pub fn xid_ident_start(c: char) -> bool {
    c == '_' || unicode_ident::is_xid_start(c)
}

/// Unicode `XID_Continue`.
pub fn xid_ident_continue(c: char) -> bool {
    unicode_ident::is_xid_continue(c)
}

/// `[A-Za-z_]`.
pub fn ascii_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// `[A-Za-z0-9_]`.
pub fn ascii_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
