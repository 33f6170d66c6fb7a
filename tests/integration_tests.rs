//! Integration tests for the whole front end.
//!
//! These tests run source text through tokenization and parsing and compare
//! the canonical form of the resulting tree, the rendered diagnostics and the
//! log records a caller would see.

use std::{sync::Arc, thread};

use esparse::{
    ast::ast::Node,
    config::{LexerConfig, ParserConfig},
    errors::errors::ErrorImpl,
    lexer::{lexer::tokenize, tokens::join_tokens},
    logging::{FacadeLogger, Level, MemoryLogger},
    parser::parser::{parse, parse_expression_source, parse_source, parse_source_with},
    render_error,
};

fn canonical(source: &str) -> String {
    parse_source(source, Some("input.js".to_string()))
        .unwrap()
        .to_string()
}

#[test]
fn test_program_end_to_end() {
    let source = "
var total = 0, items = [1, 2, , 4];
function sum(xs, ...rest) {
  if (xs.length === 0) return 0;
  return xs[0] + sum(rest);
}
let {a, b: [c] = []} = config ?? {};
total += items.length * 2 ** 3
";

    insta::assert_snapshot!(canonical(source), @r"
    var total = 0, items = [1, 2, , 4];
    function sum(xs, ...rest) { if ((xs.length === 0)) return 0; return (xs[0] + sum(rest)); }
    let {a, b: ([c] = [])} = (config ?? {});
    (total += (items.length * (2 ** 3)));
    ");
}

#[test]
fn test_canonical_form_reparses_to_itself() {
    let sources = [
        "a || b && c",
        "x = y ? [1, , 3] : {k, [v]: 2, ...rest}",
        "new Foo(a)?.bar[0](...args)",
        "(a, b) => ({a, b})",
        "function (x, y = 1) { return x ** -y; }",
    ];

    for source in sources {
        let first = canonical(source);
        assert_eq!(canonical(&first), first, "canonical form of {:?}", source);
    }
}

#[test]
fn test_arrow_and_function_expressions() {
    insta::assert_snapshot!(
        canonical("const f = (a, [b, c] = [], ...d) => { return a; };"),
        @"const f = ((a, [b, c] = [], ...d) => { return a; });"
    );
    insta::assert_snapshot!(
        canonical("compose(x => x + 1, function (y) { return y; })"),
        @"compose(((x) => (x + 1)), function(y) { return y; });"
    );
}

#[test]
fn test_token_stream() {
    let tokens = tokenize("a?.b ?? c", None).unwrap();

    insta::assert_snapshot!(
        join_tokens(&tokens),
        @"Identifier(a) QuestionDot Identifier(b) Nullish Identifier(c) EOF"
    );
}

#[test]
fn test_parse_prepared_tokens() {
    let tokens = tokenize("if (ready) { go(); }", None).unwrap();
    let ast = parse(tokens, ParserConfig::default(), esparse::logging::noop()).unwrap();

    assert!(matches!(ast[ast.program_body()[0]], Node::IfStatement(_)));
    assert_eq!(ast.to_string(), "if (ready) { go(); }");
}

#[test]
fn test_expression_entry_point() {
    let ast = parse_expression_source("{foo, bar: 1}").unwrap();

    assert!(matches!(ast.root().map(|root| &ast[root]), Some(Node::ObjectLiteral(_))));
    assert_eq!(parse_source("{foo}", None).unwrap().to_string(), "{ foo; }");
}

#[test]
fn test_rendered_lexical_error() {
    let source = "let n = 0a01;";
    let error = parse_source(source, Some("input.js".to_string())).unwrap_err();

    insta::assert_snapshot!(render_error(&error, source, "input.js"), @r"
    Error: NoLiteralAfterNumber (unexpected `a` directly after a numeric literal)
    -> input.js
      |
    1 | let n = 0a01;
      | ---------^
    ");
}

#[test]
fn test_syntax_error_positions() {
    let error = parse_source("let a = 1;\nlet b = ;", None).unwrap_err();

    assert_eq!(
        error.kind(),
        &ErrorImpl::UnexpectedToken {
            token: ";".to_string()
        }
    );
    assert_eq!(error.get_position().line, 2);
    assert_eq!(error.get_position().column, 9);
}

#[test]
fn test_fatal_error_stops_backtracking() {
    let error = parse_source("let x = [1, 2", None).unwrap_err();

    assert!(error.is_fatal());
    assert_eq!(
        error.kind(),
        &ErrorImpl::UnexpectedEndOfInput {
            context: "array literal".to_string()
        }
    );
}

#[test]
fn test_independent_parsers_on_threads() {
    let logger = Arc::new(MemoryLogger::new());
    let sources = [
        "var a = 1;",
        "let [x, y] = [y, x];",
        "f(g(h(1)));",
        "if (a) b; else c;",
    ];

    let handles: Vec<_> = sources
        .iter()
        .map(|source| {
            let source = source.to_string();
            let logger = logger.clone();
            thread::spawn(move || {
                parse_source_with(
                    &source,
                    LexerConfig::default(),
                    ParserConfig::default(),
                    logger,
                )
                .map(|ast| ast.to_string())
            })
        })
        .collect();

    let results: Vec<String> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap().unwrap())
        .collect();

    assert_eq!(
        results,
        vec![
            "var a = 1;",
            "let [x, y] = [y, x];",
            "f(g(h(1)));",
            "if (a) b; else c;",
        ]
    );
    // One summary from each lexer and each parser.
    assert_eq!(logger.messages(Level::Debug).len(), sources.len() * 2);
    assert!(logger.messages(Level::Warn).is_empty());
}

#[test]
fn test_facade_logger_does_not_change_results() {
    let source = "let = 1; let x = 2;";
    let with_facade = parse_source_with(
        source,
        LexerConfig::default(),
        ParserConfig::default(),
        Arc::new(FacadeLogger::default()),
    )
    .unwrap();

    assert_eq!(with_facade, parse_source(source, None).unwrap());
    assert_eq!(with_facade.to_string(), "(let = 1);\nlet x = 2;");
}
