use crate::{
    ast::{
        ast::{Node, NodeId},
        statements::{
            BlockStatement, DeclarationKind, ExpressionStatement, IfStatement, ReturnStatement,
            VariableDeclaration, VariableDeclarationList,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    logging::Level,
    LOG,
};

use super::{
    expr::{parse_assignment_expr, parse_expression, parse_function},
    parser::Parser,
    patterns::parse_binding_target,
};

/// Dispatches on the leading token. A keyword production that fails with a
/// recoverable error is rewound and the same tokens are parsed again as an
/// expression statement; if that fails too, whichever error got further
/// into the input is reported.
pub fn parse_stmt(parser: &mut Parser) -> Result<NodeId, Error> {
    parser.nested(|parser| {
        let kind = parser.current_token_kind();
        let Some(handler) = parser.get_stmt_lookup().get(&kind).copied() else {
            return parse_expression_stmt(parser);
        };

        let error = match parser.speculate(handler) {
            Ok(stmt) => return Ok(stmt),
            Err(error) if error.is_fatal() => return Err(error),
            Err(error) => error,
        };

        LOG!(
            parser.logger(),
            Level::Debug,
            "{} statement failed ({}), retrying as expression at token {}",
            kind,
            error,
            parser.pos()
        );

        parse_expression_stmt(parser).map_err(|fallback| {
            if fallback.is_fatal()
                || fallback.get_position().offset > error.get_position().offset
            {
                fallback
            } else {
                error
            }
        })
    })
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Result<NodeId, Error> {
    let start = parser.get_position();
    let expression = parse_expression(parser)?;
    parser.consume_semicolon()?;

    Ok(parser.alloc(Node::ExpressionStatement(ExpressionStatement {
        expression,
        span: parser.span_from(start),
    })))
}

pub fn parse_var_decl_stmt(parser: &mut Parser) -> Result<NodeId, Error> {
    let start_token = parser.advance().clone();
    let kind = match start_token.kind {
        TokenKind::Var => DeclarationKind::Var,
        TokenKind::Let => DeclarationKind::Let,
        TokenKind::Const => DeclarationKind::Const,
        _ => {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    token: start_token.lexeme,
                },
                start_token.span.start,
            ))
        }
    };

    let mut declarations = vec![];
    loop {
        let start = parser.get_position();
        let target = parse_binding_target(parser)?;
        let is_pattern = !matches!(parser.node(target), Node::Identifier(_));

        let init = if parser.current_token_kind() == TokenKind::Assignment {
            parser.advance();
            Some(parse_assignment_expr(parser)?)
        } else {
            None
        };

        if init.is_none() && (is_pattern || kind == DeclarationKind::Const) {
            let declaration = if is_pattern {
                "destructuring declaration"
            } else {
                "const declaration"
            };
            return Err(Error::new(
                ErrorImpl::MissingInitializer {
                    declaration: declaration.to_string(),
                },
                start,
            ));
        }

        declarations.push(parser.alloc(Node::VariableDeclaration(VariableDeclaration {
            target,
            init,
            span: parser.span_from(start),
        })));

        if parser.current_token_kind() != TokenKind::Comma {
            break;
        }
        parser.advance();
    }

    parser.consume_semicolon()?;

    Ok(parser.alloc(Node::VariableDeclarationList(VariableDeclarationList {
        kind,
        declarations,
        span: parser.span_from(start_token.span.start),
    })))
}

pub fn parse_empty_stmt(parser: &mut Parser) -> Result<NodeId, Error> {
    let span = parser.expect(TokenKind::Semicolon)?.span;
    Ok(parser.alloc(Node::EmptyStatement(span)))
}

pub fn parse_if_stmt(parser: &mut Parser) -> Result<NodeId, Error> {
    let start = parser.expect(TokenKind::If)?.span.start;

    parser.expect(TokenKind::OpenParen)?;
    let test = parse_expression(parser)?;
    parser.expect(TokenKind::CloseParen)?;

    let consequent = parse_stmt(parser)?;

    let alternate = if parser.current_token_kind() == TokenKind::Else {
        parser.advance();
        Some(parse_stmt(parser)?)
    } else {
        None
    };

    Ok(parser.alloc(Node::IfStatement(IfStatement {
        test,
        consequent,
        alternate,
        span: parser.span_from(start),
    })))
}

/// `{ ... }`. Any error inside the braces is fatal.
pub fn parse_block_stmt(parser: &mut Parser) -> Result<NodeId, Error> {
    let start = parser.expect(TokenKind::OpenCurly)?.span.start;
    let mut body = vec![];

    loop {
        match parser.current_token_kind() {
            TokenKind::CloseCurly => break,
            TokenKind::EOF => return Err(parser.unexpected("block").into_fatal()),
            _ => {}
        }

        let before = parser.pos();
        body.push(parse_stmt(parser).map_err(Error::into_fatal)?);
        parser.ensure_progress(before, "block statement")?;
    }

    parser.expect(TokenKind::CloseCurly)?;

    Ok(parser.alloc(Node::BlockStatement(BlockStatement {
        body,
        span: parser.span_from(start),
    })))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<NodeId, Error> {
    let start = parser.expect(TokenKind::Return)?.span.start;

    let ends_here = matches!(
        parser.current_token_kind(),
        TokenKind::Semicolon | TokenKind::CloseCurly | TokenKind::EOF
    ) || parser.newline_before();

    let argument = if ends_here {
        None
    } else {
        Some(parse_expression(parser)?)
    };
    parser.consume_semicolon()?;

    Ok(parser.alloc(Node::ReturnStatement(ReturnStatement {
        argument,
        span: parser.span_from(start),
    })))
}

/// `function name?(params) { body }`. Everything after `function` is
/// fatal on error.
pub fn parse_fn_decl_stmt(parser: &mut Parser) -> Result<NodeId, Error> {
    let function = parse_function(parser).map_err(Error::into_fatal)?;
    Ok(parser.alloc(Node::FunctionDeclaration(function)))
}
