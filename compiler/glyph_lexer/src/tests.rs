use super::*;
use pretty_assertions::assert_eq;

fn assert_send<T: Send>() {}

#[test]
fn presets_validate() {
    assert_eq!(LexerConfig::swift().validate(), Ok(()));
    assert_eq!(LexerConfig::python().validate(), Ok(()));
}

#[test]
fn lexer_is_send() {
    assert_send::<Lexer<'static>>();
    assert_send::<Token<'static>>();
    assert_send::<LexError>();
}

#[test]
fn tokenize_rejects_marker_without_opener() {
    let mut config = LexerConfig::swift();
    config.scan.interpolation_marker = Some("$");
    let err = tokenize("x", &config).err();
    assert_eq!(err, Some(ConfigError::InterpolationWithoutOpener { marker: "$" }));
}

#[test]
fn tokenize_rejects_identical_block_markers() {
    let mut config = LexerConfig::swift();
    config.scan.block_comment = Some(BlockCommentSyntax {
        open: "--",
        close: "--",
    });
    let err = tokenize("x", &config).err();
    assert_eq!(
        err,
        Some(ConfigError::IdenticalBlockCommentMarkers { marker: "--" })
    );
}

#[test]
fn tokenize_rejects_empty_line_comment() {
    let mut config = LexerConfig::python();
    config.scan.line_comment = Some("");
    assert_eq!(
        tokenize("x", &config).err(),
        Some(ConfigError::EmptyMarker {
            what: "line comment"
        })
    );
}

#[test]
fn tokenize_rejects_alphanumeric_quote() {
    let mut config = LexerConfig::python();
    config.scan.string_quotes = b"q";
    assert_eq!(
        tokenize("x", &config).err(),
        Some(ConfigError::InvalidQuote { byte: b'q' })
    );
}

#[test]
fn config_error_messages() {
    assert_eq!(
        ConfigError::InterpolationWithoutOpener { marker: "$" }.to_string(),
        "interpolation marker `$` must end with `(`, `[` or `{`"
    );
    assert_eq!(
        ConfigError::SourceTooLarge { len: 5_000_000_000 }.to_string(),
        format!("source is 5000000000 bytes; at most {} are supported", u32::MAX)
    );
}

#[test]
fn empty_source_yields_only_end_of_input() {
    let tokens = tokenize("", &LexerConfig::swift())
        .expect("config is valid")
        .tokenize_all()
        .expect("empty source lexes");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EndOfInput);
    assert_eq!(tokens[0].span, Span::new(0, 0, LineCol { line: 1, column: 1 }));
}

#[test]
fn best_effort_python_keeps_going() {
    let config = LexerConfig::python().with_error_mode(ErrorMode::BestEffort);
    let mut lexer = tokenize("s = '\\x' § pass", &config).expect("config is valid");
    let tokens: Vec<Token<'_>> = lexer
        .by_ref()
        .collect::<Result<_, _>>()
        .expect("best effort keeps going");
    assert_eq!(lexer.recovered_errors().len(), 2);
    assert!(tokens[4].has_error());
    assert_eq!(tokens[6].kind, TokenKind::Invalid);
    assert_eq!(tokens[8].kind, TokenKind::Keyword);
}

#[test]
fn custom_config_with_brace_marker_and_ascii_identifiers() {
    let mut config = LexerConfig::swift();
    config.scan.interpolation_marker = Some("${");
    config.scan.is_ident_start = ascii_ident_start;
    config.scan.is_ident_continue = ascii_ident_continue;
    config.keywords = &[];

    let tokens = tokenize(r#""a${b}c" let"#, &config)
        .expect("config is valid")
        .tokenize_all()
        .expect("source lexes");
    let parts = tokens[0].kind.string_parts().expect("string literal");
    assert_eq!(parts.len(), 3);
    assert!(tokens[0].flags.contains(TokenFlags::INTERPOLATED));
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
}
