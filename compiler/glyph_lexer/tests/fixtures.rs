//! Whole-file tokenization of real Swift and Python sources.

use glyph_lexer::{tokenize, LexerConfig, LineCol, StringPart, Token, TokenFlags, TokenKind};
use pretty_assertions::assert_eq;

const WIKIPEDIA_SWIFT: &str = include_str!("fixtures/wikipedia.swift");
const SIMPLE_CLASS_SWIFT: &str = include_str!("fixtures/simple_class.swift");
const MULTIVAR_LAMBDAS_PY: &str = include_str!("fixtures/multivar_lambdas.py");

fn lex<'a>(source: &'a str, config: &LexerConfig) -> Vec<Token<'a>> {
    tokenize(source, config)
        .expect("preset config is valid")
        .tokenize_all()
        .expect("fixture should tokenize")
}

fn concat(tokens: &[Token<'_>]) -> String {
    tokens.iter().map(|t| t.lexeme).collect()
}

fn lexemes_of<'a>(tokens: &[Token<'a>], kind: &TokenKind<'_>) -> Vec<&'a str> {
    tokens
        .iter()
        .filter(|t| &t.kind == kind)
        .map(|t| t.lexeme)
        .collect()
}

fn find<'t, 'a>(tokens: &'t [Token<'a>], lexeme: &str) -> &'t Token<'a> {
    tokens
        .iter()
        .find(|t| t.lexeme == lexeme)
        .unwrap_or_else(|| panic!("no token `{lexeme}`"))
}

// === Swift: Wikipedia tour ===

#[test]
fn wikipedia_round_trips() {
    let tokens = lex(WIKIPEDIA_SWIFT, &LexerConfig::swift());
    assert_eq!(concat(&tokens), WIKIPEDIA_SWIFT);
    assert!(tokens.iter().all(|t| !t.has_error()));
    assert_eq!(tokens.last().map(|t| &t.kind), Some(&TokenKind::EndOfInput));
}

#[test]
fn wikipedia_nested_block_comment_is_one_token() {
    let tokens = lex(WIKIPEDIA_SWIFT, &LexerConfig::swift());
    let comments = lexemes_of(&tokens, &TokenKind::BlockComment);
    assert_eq!(comments.len(), 2);
    assert!(comments[1].starts_with("/* Multiline comments"));
    assert!(comments[1].contains("/* can be nested! */"));
    assert!(comments[1].ends_with("comments can be blocked out\n*/"));
}

#[test]
fn wikipedia_unicode_identifiers() {
    let tokens = lex(WIKIPEDIA_SWIFT, &LexerConfig::swift());

    let guo = find(&tokens, "國");
    assert_eq!(guo.kind, TokenKind::Identifier);
    assert_eq!(guo.span.position(), LineCol { line: 22, column: 5 });
    assert_eq!(guo.span.len(), 3);

    let globe = find(&tokens, "🌎");
    assert_eq!(globe.kind, TokenKind::Identifier);
    assert_eq!(globe.span.position(), LineCol { line: 23, column: 5 });
    assert_eq!(globe.span.len(), 4);
}

#[test]
fn wikipedia_keywords() {
    let tokens = lex(WIKIPEDIA_SWIFT, &LexerConfig::swift());
    let keywords = lexemes_of(&tokens, &TokenKind::Keyword);
    assert_eq!(keywords.iter().filter(|&&k| k == "var").count(), 6);
    assert_eq!(keywords.iter().filter(|&&k| k == "func").count(), 2);
    for expected in ["let", "if", "else", "for", "in", "return"] {
        assert!(keywords.contains(&expected), "missing keyword {expected}");
    }
    assert_eq!(find(&tokens, "print").kind, TokenKind::Identifier);
    assert_eq!(find(&tokens, "->").kind, TokenKind::Operator);
}

#[test]
fn wikipedia_interpolated_strings() {
    let tokens = lex(WIKIPEDIA_SWIFT, &LexerConfig::swift());
    let interpolated: Vec<&Token<'_>> = tokens
        .iter()
        .filter(|t| t.flags.contains(TokenFlags::INTERPOLATED))
        .collect();
    assert_eq!(interpolated.len(), 6);

    let fruit = interpolated
        .iter()
        .find(|t| t.lexeme.contains("pieces of fruit"))
        .expect("fruit summary string");
    let parts = fruit.kind.string_parts().expect("string literal");
    let StringPart::Interpolation { tokens: inner, .. } = &parts[1] else {
        panic!("expected interpolation, got {:?}", parts[1]);
    };
    let significant: Vec<&str> = inner
        .iter()
        .filter(|t| !t.is_trivia())
        .map(|t| t.lexeme)
        .collect();
    assert_eq!(
        significant,
        vec!["numberOfApples", "+", "numberOfOranges"]
    );
}

#[test]
fn wikipedia_string_starting_with_interpolation_has_no_empty_text() {
    let tokens = lex(WIKIPEDIA_SWIFT, &LexerConfig::swift());
    let string = find(&tokens, r#""\(name) is \(age) years old.""#);
    let parts = string.kind.string_parts().expect("string literal");
    assert_eq!(parts.len(), 4);
    assert!(matches!(parts[0], StringPart::Interpolation { .. }));
    assert!(matches!(
        &parts[3],
        StringPart::Text { value, .. } if value == " years old."
    ));
}

#[test]
fn wikipedia_emoji_string_is_borrowed_text() {
    let tokens = lex(WIKIPEDIA_SWIFT, &LexerConfig::swift());
    let line = WIKIPEDIA_SWIFT
        .lines()
        .nth(22)
        .expect("fixture has a line 23");
    let literal = line.split_once("= ").map(|(_, rhs)| rhs).unwrap_or_default();
    let string = find(&tokens, literal);
    let parts = string.kind.string_parts().expect("string literal");
    assert_eq!(parts.len(), 1);
    assert!(matches!(
        &parts[0],
        StringPart::Text { raw, value: std::borrow::Cow::Borrowed(_), .. }
            if *raw == &literal[1..literal.len() - 1]
    ));
}

// === Swift: class declaration ===

#[test]
fn simple_class_tokens() {
    let tokens = lex(SIMPLE_CLASS_SWIFT, &LexerConfig::swift());
    assert_eq!(concat(&tokens), SIMPLE_CLASS_SWIFT);

    let keywords = lexemes_of(&tokens, &TokenKind::Keyword);
    assert_eq!(
        keywords,
        vec!["class", "var", "var", "init", "func", "return"]
    );

    let description = tokens
        .iter()
        .find(|t| t.flags.contains(TokenFlags::INTERPOLATED))
        .expect("description string");
    let parts = description.kind.string_parts().expect("string literal");
    let texts: Vec<&str> = parts
        .iter()
        .filter_map(|p| match p {
            StringPart::Text { value, .. } => Some(value.as_ref()),
            StringPart::Interpolation { .. } => None,
        })
        .collect();
    assert_eq!(texts, vec!["This animal is named ", " and has ", " legs."]);
    assert_eq!(description.span.position(), LineCol { line: 16, column: 12 });
}

// === Python ===

#[test]
fn python_multivar_lambdas() {
    let tokens = lex(MULTIVAR_LAMBDAS_PY, &LexerConfig::python());
    assert_eq!(concat(&tokens), MULTIVAR_LAMBDAS_PY);

    let keywords = lexemes_of(&tokens, &TokenKind::Keyword);
    assert_eq!(keywords.iter().filter(|&&k| k == "lambda").count(), 3);
    assert_eq!(keywords.iter().filter(|&&k| k == "assert").count(), 7);

    let comments = lexemes_of(&tokens, &TokenKind::LineComment);
    assert_eq!(comments, vec!["# check Python actually likes it"]);

    let operators = lexemes_of(&tokens, &TokenKind::Operator);
    assert_eq!(operators.iter().filter(|&&o| o == "==").count(), 7);
    assert_eq!(operators.iter().filter(|&&o| o == "*").count(), 3);

    let var4 = tokens
        .iter()
        .rfind(|t| t.lexeme == "VAR4")
        .expect("VAR4 is used");
    assert_eq!(var4.span.position(), LineCol { line: 13, column: 8 });
}
