//! Low-level raw scanner for Glyph.
//!
//! Turns source text into `(tag, length)` pairs without allocating per token
//! and without interpreting escapes, keywords or positions. Everything
//! grammar-specific is read from a [`ScanConfig`].
//!
//! This crate has no `glyph_*` dependencies, so editors and highlighters can
//! use it without the cooking layer.
//!
//! ```
//! use glyph_lexer_core::{scan_all, RawTag, ScanConfig};
//!
//! let tags: Vec<RawTag> = scan_all("x /* a /* b */ */", ScanConfig::swift())
//!     .iter()
//!     .map(|t| t.tag)
//!     .collect();
//! assert_eq!(tags, [RawTag::Ident, RawTag::Whitespace, RawTag::BlockComment]);
//! ```

mod cursor;
mod ident;
mod position;
mod raw_scanner;
mod scan_config;
mod tag;

pub use cursor::Cursor;
pub use ident::{
    ascii_ident_continue, ascii_ident_start, swift_ident_continue, swift_ident_start,
    xid_ident_continue, xid_ident_start,
};
pub use position::{LineCol, LineTracker};
pub use raw_scanner::{scan_all, RawScanner};
pub use scan_config::{closing_delimiter, BlockCommentSyntax, ScanConfig, CLOSING_DELIMITER_LEN};
pub use tag::{RawTag, RawToken};
