use super::*;

// === Basic Navigation ===

#[test]
fn current_returns_first_byte() {
    let cursor = Cursor::new("abc");
    assert_eq!(cursor.current(), b'a');
}

#[test]
fn advance_moves_forward() {
    let mut cursor = Cursor::new("abc");
    cursor.advance();
    assert_eq!(cursor.current(), b'b');
    assert_eq!(cursor.pos(), 1);
}

#[test]
fn advance_through_entire_source() {
    let mut cursor = Cursor::new("hi");
    cursor.advance();
    cursor.advance();
    assert!(cursor.is_eof());
    assert_eq!(cursor.current(), 0);
}

// === Peek ===

#[test]
fn peek_and_peek2_look_ahead() {
    let cursor = Cursor::new("abc");
    assert_eq!(cursor.peek(), b'b');
    assert_eq!(cursor.peek2(), b'c');
}

#[test]
fn peek_past_end_returns_zero() {
    let cursor = Cursor::new("a");
    assert_eq!(cursor.peek(), 0);
    assert_eq!(cursor.peek2(), 0);
}

// === EOF and Interior NUL ===

#[test]
fn empty_source_is_eof() {
    let cursor = Cursor::new("");
    assert!(cursor.is_eof());
    assert_eq!(cursor.current_char(), None);
}

#[test]
fn interior_nul_is_not_eof() {
    let cursor = Cursor::new("\0x");
    assert_eq!(cursor.current(), 0);
    assert!(!cursor.is_eof());
}

// === Unicode ===

#[test]
fn current_char_decodes_multibyte() {
    let mut cursor = Cursor::new("國🌎");
    assert_eq!(cursor.current_char(), Some('國'));
    cursor.advance_char();
    assert_eq!(cursor.pos(), 3);
    assert_eq!(cursor.current_char(), Some('🌎'));
    cursor.advance_char();
    assert_eq!(cursor.pos(), 7);
    assert!(cursor.is_eof());
}

#[test]
fn advance_char_at_eof_is_noop() {
    let mut cursor = Cursor::new("");
    cursor.advance_char();
    assert_eq!(cursor.pos(), 0);
}

#[test]
fn utf8_widths() {
    assert_eq!(Cursor::utf8_char_width(b'a'), 1);
    assert_eq!(Cursor::utf8_char_width(0xC3), 2);
    assert_eq!(Cursor::utf8_char_width(0xE5), 3);
    assert_eq!(Cursor::utf8_char_width(0xF0), 4);
    assert_eq!(Cursor::utf8_char_width(0x80), 1);
}

#[test]
fn eat_chars_while_stops_on_rejected_char() {
    let mut cursor = Cursor::new("αβγ δ");
    cursor.eat_chars_while(char::is_alphabetic);
    assert_eq!(cursor.slice_from(0), "αβγ");
}

// === Slicing ===

#[test]
fn slice_returns_substring() {
    let mut cursor = Cursor::new("hello world");
    cursor.advance_n(5);
    assert_eq!(cursor.slice(0, 5), "hello");
    assert_eq!(cursor.slice_from(0), "hello");
}

#[test]
fn slice_off_char_boundary_is_empty() {
    let cursor = Cursor::new("國");
    assert_eq!(cursor.slice(0, 1), "");
}

#[test]
fn starts_with_checks_remaining_input() {
    let mut cursor = Cursor::new("a/*b");
    assert!(!cursor.starts_with(b"/*"));
    cursor.advance();
    assert!(cursor.starts_with(b"/*"));
    assert!(!cursor.starts_with(b""));
}

// === Scanning Helpers ===

#[test]
fn eat_while_stops_at_eof() {
    let mut cursor = Cursor::new("aaa");
    cursor.eat_while(|_| true);
    assert_eq!(cursor.pos(), 3);
}

#[test]
fn eat_whitespace_covers_vt_and_ff() {
    let mut cursor = Cursor::new(" \t\x0B\x0Cx");
    cursor.eat_whitespace();
    assert_eq!(cursor.current(), b'x');
}

#[test]
fn eat_until_newline_stops_before_lf() {
    let mut cursor = Cursor::new("// comment\nnext");
    cursor.eat_until_newline_or_eof();
    assert_eq!(cursor.current(), b'\n');
    assert_eq!(cursor.pos(), 10);
}

#[test]
fn eat_until_newline_stops_before_cr() {
    let mut cursor = Cursor::new("abc\r\n");
    cursor.eat_until_newline_or_eof();
    assert_eq!(cursor.current(), b'\r');
}

#[test]
fn eat_until_newline_reaches_eof() {
    let mut cursor = Cursor::new("no newline");
    cursor.eat_until_newline_or_eof();
    assert!(cursor.is_eof());
}

#[test]
fn skip_to_string_delim_finds_each_kind() {
    let cases: [(&str, u8); 5] = [
        ("abc\"", b'"'),
        ("abc\\n", b'\\'),
        ("abc\n", b'\n'),
        ("abc\r", b'\r'),
        ("abc$x", b'$'),
    ];
    for (source, expected) in cases {
        let mut cursor = Cursor::new(source);
        assert_eq!(cursor.skip_to_string_delim(b'"', b'$'), expected, "{source:?}");
        assert_eq!(cursor.pos(), 3, "{source:?}");
    }
}

#[test]
fn skip_to_string_delim_eof_returns_zero() {
    let mut cursor = Cursor::new("plain text");
    assert_eq!(cursor.skip_to_string_delim(b'"', b'\\'), 0);
    assert!(cursor.is_eof());
}

#[test]
fn skip_to_either_finds_earliest() {
    let mut cursor = Cursor::new("text */ more /*");
    assert_eq!(cursor.skip_to_either(b'/', b'*'), b'*');
    assert_eq!(cursor.pos(), 5);
}

#[test]
fn earliest_of_combinations() {
    assert_eq!(earliest_of(Some(3), Some(1)), Some(1));
    assert_eq!(earliest_of(None, Some(4)), Some(4));
    assert_eq!(earliest_of(Some(2), None), Some(2));
    assert_eq!(earliest_of(None, None), None);
}

#[test]
fn cursor_copy_is_snapshot() {
    let mut cursor = Cursor::new("abc");
    let snapshot = cursor;
    cursor.advance_n(2);
    assert_eq!(snapshot.pos(), 0);
    assert_eq!(cursor.pos(), 2);
}
