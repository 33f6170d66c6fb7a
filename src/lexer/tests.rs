//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Reserved words, identifiers and maximal munch
//! - Numeric and string literals
//! - Punctuators
//! - Comments and whitespace trivia
//! - Positions
//! - Error reporting and the `Unknown` state after an error

use std::sync::Arc;

use crate::{
    config::LexerConfig,
    errors::errors::ErrorImpl,
    logging::{self, Level, MemoryLogger},
};

use super::{
    lexer::{tokenize, Lexer},
    tokens::{join_tokens, Literal, TokenKind},
};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source, Some("test.js".to_string()))
        .unwrap()
        .iter()
        .map(|token| token.kind)
        .collect()
}

#[test]
fn test_tokenize_keywords() {
    let source = "var let const function return if else true false null undefined this new typeof void delete";
    let tokens = kinds(source);

    assert_eq!(
        tokens,
        vec![
            TokenKind::Var,
            TokenKind::Let,
            TokenKind::Const,
            TokenKind::Function,
            TokenKind::Return,
            TokenKind::If,
            TokenKind::Else,
            TokenKind::True,
            TokenKind::False,
            TokenKind::Null,
            TokenKind::Undefined,
            TokenKind::This,
            TokenKind::New,
            TokenKind::Typeof,
            TokenKind::Void,
            TokenKind::Delete,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_maximal_munch_keywords() {
    let tokens = tokenize("instanceof instanceofx in", None).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Instanceof);
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].lexeme, "instanceofx");
    assert_eq!(tokens[2].kind, TokenKind::In);
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo $bar _baz123 CamelCase", None).unwrap();

    let names: Vec<&str> = tokens[..4].iter().map(|t| t.lexeme.as_str()).collect();
    assert_eq!(names, vec!["foo", "$bar", "_baz123", "CamelCase"]);
    assert!(tokens[..4].iter().all(|t| t.kind == TokenKind::Identifier));
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_escaped_identifier() {
    let tokens = tokenize(r"\u0061bc", None).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].lexeme, r"\u0061bc");
    assert_eq!(tokens[0].identifier_name(), "abc");
}

#[test]
fn test_tokenize_numbers() {
    let tokens = tokenize("42 2.5 .5 1e3 0x1A_2B 0b101 0o17 017 10n", None).unwrap();

    let values: Vec<Option<Literal>> = tokens.iter().map(|t| t.literal.clone()).collect();
    assert_eq!(
        values,
        vec![
            Some(Literal::Number(42.0)),
            Some(Literal::Number(2.5)),
            Some(Literal::Number(0.5)),
            Some(Literal::Number(1000.0)),
            Some(Literal::Number(6699.0)),
            Some(Literal::Number(5.0)),
            Some(Literal::Number(15.0)),
            Some(Literal::Number(15.0)),
            Some(Literal::BigInt("10".to_string())),
            None,
        ]
    );
    assert_eq!(tokens[4].lexeme, "0x1A_2B");
}

#[test]
fn test_tokenize_number_followed_by_identifier() {
    let error = tokenize("0a01", None).unwrap_err();

    assert_eq!(
        error.kind(),
        &ErrorImpl::NoLiteralAfterNumber { character: 'a' }
    );
    assert_eq!(error.get_position().offset, 1);
    assert_eq!(error.get_position().column, 2);
}

#[test]
fn test_tokenize_binary_literal_with_bad_digit() {
    let error = tokenize("0b102", None).unwrap_err();

    assert_eq!(error.get_position().offset, 4);
}

#[test]
fn test_tokenize_separator_after_leading_zero() {
    let error = tokenize("0_1", None).unwrap_err();

    assert_eq!(error.kind(), &ErrorImpl::DigitExpected);
    assert_eq!(error.get_position().offset, 1);
    assert_eq!(kinds("0 10_1 0.5"), vec![
        TokenKind::NumericLiteral,
        TokenKind::NumericLiteral,
        TokenKind::NumericLiteral,
        TokenKind::EOF,
    ]);
}

#[test]
fn test_tokenize_strict_radix_literals() {
    let config = LexerConfig::default().strict_radix_literals(true);
    let (tokens, errors) = Lexer::with_config("0x_1", config, logging::noop()).tokenize_all();

    assert!(tokens.is_empty());
    assert_eq!(errors[0].kind(), &ErrorImpl::DigitExpected);
    assert_eq!(errors[0].get_position().offset, 2);

    let tokens = tokenize("0x_1", None).unwrap();
    assert_eq!(tokens[0].literal, Some(Literal::Number(1.0)));
}

#[test]
fn test_tokenize_strings() {
    let tokens = tokenize(r#"'single' "double" 'it\'s' "a\nb" '\x41B\u{43}'"#, None).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::SingleQuotedString);
    assert_eq!(tokens[0].lexeme, "'single'");
    assert_eq!(tokens[0].literal, Some(Literal::String("single".to_string())));
    assert_eq!(tokens[1].kind, TokenKind::DoubleQuotedString);
    assert_eq!(tokens[1].literal, Some(Literal::String("double".to_string())));
    assert_eq!(tokens[2].literal, Some(Literal::String("it's".to_string())));
    assert_eq!(tokens[3].literal, Some(Literal::String("a\nb".to_string())));
    assert_eq!(tokens[4].literal, Some(Literal::String("ABC".to_string())));
    assert!(tokens[..5].iter().all(|token| token.kind.is_string_literal()));
    assert!(!tokens[5].kind.is_string_literal());
}

#[test]
fn test_tokenize_unterminated_string() {
    let error = tokenize("x = 'abc", None).unwrap_err();

    assert_eq!(error.kind(), &ErrorImpl::UnterminatedString);
    assert_eq!(error.get_position().offset, 4);
}

#[test]
fn test_tokenize_punctuators() {
    let tokens = kinds("a?.b ?? c ??= d >>>= e === f !== g ... => **=");

    assert_eq!(
        tokens,
        vec![
            TokenKind::Identifier,
            TokenKind::QuestionDot,
            TokenKind::Identifier,
            TokenKind::Nullish,
            TokenKind::Identifier,
            TokenKind::NullishEquals,
            TokenKind::Identifier,
            TokenKind::UnsignedShiftRightEquals,
            TokenKind::Identifier,
            TokenKind::StrictEquals,
            TokenKind::Identifier,
            TokenKind::StrictNotEquals,
            TokenKind::Identifier,
            TokenKind::Ellipsis,
            TokenKind::Arrow,
            TokenKind::StarStarEquals,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_conditional_with_fraction() {
    let tokens = kinds("a?.5:1");

    assert_eq!(
        tokens,
        vec![
            TokenKind::Identifier,
            TokenKind::Question,
            TokenKind::NumericLiteral,
            TokenKind::Colon,
            TokenKind::NumericLiteral,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_comments() {
    let tokens = kinds("a // line comment\nb /* block\ncomment */ c");

    assert_eq!(
        tokens,
        vec![
            TokenKind::Identifier,
            TokenKind::Identifier,
            TokenKind::Identifier,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_unterminated_comment() {
    let error = tokenize("a /* never closed", None).unwrap_err();

    assert_eq!(error.kind(), &ErrorImpl::UnterminatedComment);
    assert_eq!(error.get_position().offset, 2);
}

#[test]
fn test_emit_whitespace_reproduces_source() {
    let source = "let a = 1; /* c */\n  a";
    let config = LexerConfig::default().emit_whitespace(true);
    let (tokens, errors) = Lexer::with_config(source, config, logging::noop()).tokenize_all();

    assert!(errors.is_empty());
    assert!(tokens.iter().any(|t| t.kind == TokenKind::Whitespace));
    let rebuilt: String = tokens.iter().map(|t| t.lexeme.as_str()).collect();
    assert_eq!(rebuilt, source);
}

#[test]
fn test_tokenize_unicode_whitespace() {
    let tokens = kinds("a\u{00A0}b\u{FEFF}c");

    assert_eq!(
        tokens,
        vec![
            TokenKind::Identifier,
            TokenKind::Identifier,
            TokenKind::Identifier,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_token_positions() {
    let tokens = tokenize("let a\n  = 10;", None).unwrap();

    assert_eq!((tokens[0].line(), tokens[0].column()), (1, 1));
    assert_eq!((tokens[1].line(), tokens[1].column()), (1, 5));
    assert_eq!((tokens[2].line(), tokens[2].column()), (2, 3));
    assert_eq!(tokens[2].span.start.offset, 8);
    assert_eq!(tokens[3].span.end.offset, 12);
    assert_eq!(tokens[3].span.end.column, 7);
}

#[test]
fn test_join_tokens() {
    let tokens = tokenize("let x = 'hi';", None).unwrap();

    assert_eq!(
        join_tokens(&tokens),
        "Let Identifier(x) Assignment SingleQuotedString('hi') Semicolon EOF"
    );
}

#[test]
fn test_lexer_starts_at_bof_and_repeats_eof() {
    let mut lexer = Lexer::new("a");

    assert_eq!(lexer.current().kind, TokenKind::BOF);
    assert_eq!(lexer.next().kind, TokenKind::Identifier);
    assert_eq!(lexer.segment_start(), 0);
    assert_eq!(lexer.head(), 1);
    assert_eq!(lexer.next().kind, TokenKind::EOF);
    assert_eq!(lexer.next().kind, TokenKind::EOF);
    assert_eq!(lexer.current().kind, TokenKind::EOF);
    assert!(!lexer.has_errors());
}

#[test]
fn test_lexer_reports_unknown_after_error() {
    let mut lexer = Lexer::new("a # b");

    assert_eq!(lexer.next().kind, TokenKind::Identifier);

    let unknown = lexer.next();
    assert_eq!(unknown.kind, TokenKind::Unknown);
    assert_eq!(unknown.lexeme, "#");
    assert_eq!(
        lexer.errors()[0].kind(),
        &ErrorImpl::UnexpectedCharacter { character: '#' }
    );

    assert_eq!(lexer.next().kind, TokenKind::Unknown);
    assert_eq!(lexer.errors().len(), 1);
}

#[test]
fn test_tokenize_all_keeps_tokens_before_error() {
    let (tokens, errors) = Lexer::new("x = 0a01").tokenize_all();

    assert_eq!(join_tokens(&tokens), "Identifier(x) Assignment");
    assert_eq!(errors.len(), 1);
}

#[test]
fn test_tokenize_unsupported_characters() {
    assert_eq!(
        tokenize("`template`", None).unwrap_err().kind(),
        &ErrorImpl::UnexpectedCharacter { character: '`' }
    );
    assert_eq!(
        tokenize("é", None).unwrap_err().kind(),
        &ErrorImpl::UnexpectedCharacter { character: 'é' }
    );
}

#[test]
fn test_tokenize_is_repeatable() {
    let source = "const { a, b: [c, ...d] } = obj ?? {};";

    assert_eq!(tokenize(source, None).unwrap(), tokenize(source, None).unwrap());
}

#[test]
fn test_relexing_a_lexeme_gives_the_same_token() {
    let source = r#"0x1A_2B 1_000.5e-3 10n 017 .5 'a\'b' "\u0041" a\u0062c $_x instanceof"#;
    let tokens = tokenize(source, None).unwrap();
    assert_eq!(tokens.len(), 11);

    for token in tokens.iter().filter(|token| token.kind != TokenKind::EOF) {
        let relexed = tokenize(&token.lexeme, None).unwrap();

        assert_eq!(relexed.len(), 2, "re-lexing {:?}", token.lexeme);
        assert_eq!(relexed[0].kind, token.kind);
        assert_eq!(relexed[0].lexeme, token.lexeme);
        assert_eq!(relexed[0].literal, token.literal);
        assert_eq!(relexed[1].kind, TokenKind::EOF);
    }
}

#[test]
fn test_lexer_logs_errors_and_summary() {
    let logger = Arc::new(MemoryLogger::new());
    let config = LexerConfig::default().with_file_name("bad.js");
    let (_, errors) = Lexer::with_config("1 @", config, logger.clone()).tokenize_all();

    assert_eq!(errors.len(), 1);
    let warnings = logger.messages(Level::Warn);
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].starts_with("bad.js:"));
    assert_eq!(logger.messages(Level::Debug).len(), 1);
    assert_eq!(logger.flush_count(), 1);
}
