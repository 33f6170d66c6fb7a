use crate::{
    ast::{
        ast::{Node, NodeId},
        expressions::{
            ArrayLiteral, ArrowFunction, AssignmentExpression, AssignmentOperator, BinaryOp,
            BooleanLiteral, CallExpression, ConditionalExpression, Function, Identifier,
            MemberExpression, NewExpression, NumericLiteral, ObjectLiteral, PropertyDefinition,
            SequenceExpression, SpreadElement, StringLiteral, UnaryOp, UpdateOp,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Literal, Token, TokenKind},
    Position,
};

use super::{
    lookups::{assignment_operator, unary_operator, update_operator, Precedence},
    parser::Parser,
    patterns::{parse_formal_params, validate_assignment_pattern},
    stmt::parse_block_stmt,
};

/// Expression, including the comma operator.
pub fn parse_expression(parser: &mut Parser) -> Result<NodeId, Error> {
    let start = parser.get_position();
    let first = parse_assignment_expr(parser)?;

    if parser.current_token_kind() != TokenKind::Comma {
        return Ok(first);
    }

    let mut expressions = vec![first];
    while parser.current_token_kind() == TokenKind::Comma {
        parser.advance();
        expressions.push(parse_assignment_expr(parser)?);
    }

    Ok(parser.alloc(Node::SequenceExpression(SequenceExpression {
        expressions,
        span: parser.span_from(start),
    })))
}

/// Arrow functions, assignments and everything tighter.
pub fn parse_assignment_expr(parser: &mut Parser) -> Result<NodeId, Error> {
    parser.nested(|parser| {
        if arrow_ahead(parser) {
            return parse_arrow_function(parser);
        }

        let start = parser.get_position();
        let target = parse_conditional_expr(parser)?;

        let Some(operator) = assignment_operator(parser.current_token_kind()) else {
            return Ok(target);
        };

        validate_assignment_target(parser, target, operator, start)?;
        parser.advance();
        let value = parse_assignment_expr(parser)?;

        Ok(parser.alloc(Node::AssignmentExpression(AssignmentExpression {
            operator,
            target,
            value,
            span: parser.span_from(start),
        })))
    })
}

fn validate_assignment_target(
    parser: &Parser,
    target: NodeId,
    operator: AssignmentOperator,
    start: Position,
) -> Result<(), Error> {
    match parser.node(target) {
        Node::Identifier(_) => Ok(()),
        Node::MemberExpression(member) if !member.optional => Ok(()),
        Node::ArrayLiteral(_) | Node::ObjectLiteral(_) if operator == AssignmentOperator::Assign => {
            validate_assignment_pattern(parser.ast(), target)
        }
        _ => Err(Error::new(ErrorImpl::InvalidAssignmentTarget, start)),
    }
}

/// Whether the tokens ahead are an arrow function head: `id =>` or a
/// parenthesised list whose closing `)` is followed by `=>`.
fn arrow_ahead(parser: &Parser) -> bool {
    match parser.current_token_kind() {
        TokenKind::Identifier => parser.peek(1).kind == TokenKind::Arrow,
        TokenKind::OpenParen => {
            let mut depth = 0usize;
            let mut offset = 0;

            loop {
                match parser.peek(offset).kind {
                    TokenKind::OpenParen | TokenKind::OpenBracket | TokenKind::OpenCurly => depth += 1,
                    TokenKind::CloseParen | TokenKind::CloseBracket | TokenKind::CloseCurly => {
                        depth -= 1;
                        if depth == 0 {
                            return parser.peek(offset + 1).kind == TokenKind::Arrow;
                        }
                    }
                    TokenKind::EOF => return false,
                    _ => {}
                }
                offset += 1;
            }
        }
        _ => false,
    }
}

fn parse_arrow_function(parser: &mut Parser) -> Result<NodeId, Error> {
    let start = parser.get_position();

    let params = if parser.current_token_kind() == TokenKind::Identifier {
        vec![parse_identifier(parser)?]
    } else {
        parse_formal_params(parser)?
    };

    if parser.newline_before() {
        return Err(parser.unexpected("arrow function"));
    }
    parser.expect(TokenKind::Arrow)?;

    let (body, expression) = if parser.current_token_kind() == TokenKind::OpenCurly {
        (parse_block_stmt(parser)?, false)
    } else {
        (parse_assignment_expr(parser)?, true)
    };

    Ok(parser.alloc(Node::ArrowFunction(ArrowFunction {
        params,
        body,
        expression,
        span: parser.span_from(start),
    })))
}

pub fn parse_conditional_expr(parser: &mut Parser) -> Result<NodeId, Error> {
    let start = parser.get_position();
    let test = parse_binary_expr(parser, Precedence::Coalesce)?;

    if parser.current_token_kind() != TokenKind::Question {
        return Ok(test);
    }

    parser.advance();
    let consequent = parse_assignment_expr(parser)?;
    parser.expect(TokenKind::Colon)?;
    let alternate = parse_assignment_expr(parser)?;

    Ok(parser.alloc(Node::ConditionalExpression(ConditionalExpression {
        test,
        consequent,
        alternate,
        span: parser.span_from(start),
    })))
}

fn parse_operand(parser: &mut Parser, level: Precedence) -> Result<NodeId, Error> {
    match level.tighter() {
        Some(tighter) => parse_binary_expr(parser, tighter),
        None => parse_unary_expr(parser),
    }
}

/// Precedence climbing over one level: operands come from the next tighter
/// level and the level's operators fold left, or right for `**`.
pub fn parse_binary_expr(parser: &mut Parser, level: Precedence) -> Result<NodeId, Error> {
    let start = parser.get_position();
    let mut left = parse_operand(parser, level)?;

    while let Some((precedence, operator)) = parser.binary_operator(parser.current_token_kind()) {
        if precedence != level {
            break;
        }
        parser.advance();

        let right = if level.is_right_associative() {
            parser.nested(|parser| parse_binary_expr(parser, level))?
        } else {
            parse_operand(parser, level)?
        };

        left = parser.alloc(Node::BinaryOp(BinaryOp {
            operator,
            left,
            right,
            span: parser.span_from(start),
        }));
    }

    Ok(left)
}

pub fn parse_unary_expr(parser: &mut Parser) -> Result<NodeId, Error> {
    let token = parser.current_token().clone();

    if let Some(operator) = unary_operator(token.kind) {
        parser.advance();
        let argument = parser.nested(parse_unary_expr)?;

        return Ok(parser.alloc(Node::UnaryOp(UnaryOp {
            operator,
            argument,
            span: parser.span_from(token.span.start),
        })));
    }

    if let Some(operator) = update_operator(token.kind) {
        parser.advance();
        let argument_start = parser.get_position();
        let argument = parser.nested(parse_unary_expr)?;
        validate_update_target(parser, argument, argument_start)?;

        return Ok(parser.alloc(Node::UpdateOp(UpdateOp {
            operator,
            prefix: true,
            argument,
            span: parser.span_from(token.span.start),
        })));
    }

    parse_postfix_expr(parser)
}

fn parse_postfix_expr(parser: &mut Parser) -> Result<NodeId, Error> {
    let start = parser.get_position();
    let argument = parse_lhs_expr(parser)?;

    let Some(operator) = update_operator(parser.current_token_kind()) else {
        return Ok(argument);
    };
    // `a\n++b` is two statements.
    if parser.newline_before() {
        return Ok(argument);
    }

    validate_update_target(parser, argument, start)?;
    parser.advance();

    Ok(parser.alloc(Node::UpdateOp(UpdateOp {
        operator,
        prefix: false,
        argument,
        span: parser.span_from(start),
    })))
}

fn validate_update_target(parser: &Parser, target: NodeId, start: Position) -> Result<(), Error> {
    match parser.node(target) {
        Node::Identifier(_) => Ok(()),
        Node::MemberExpression(member) if !member.optional => Ok(()),
        _ => Err(Error::new(ErrorImpl::InvalidAssignmentTarget, start)),
    }
}

/// `new`, member access and calls.
pub fn parse_lhs_expr(parser: &mut Parser) -> Result<NodeId, Error> {
    let start = parser.get_position();
    let mut expr = if parser.current_token_kind() == TokenKind::New {
        parse_new_expr(parser)?
    } else {
        parse_primary_expr(parser)?
    };

    loop {
        expr = match parser.current_token_kind() {
            TokenKind::Dot | TokenKind::OpenBracket => parse_member_access(parser, expr, start)?,
            TokenKind::OpenParen => {
                let arguments = parse_arguments(parser)?;
                parser.alloc(Node::CallExpression(CallExpression {
                    callee: expr,
                    arguments,
                    optional: false,
                    span: parser.span_from(start),
                }))
            }
            TokenKind::QuestionDot => {
                parser.advance();
                match parser.current_token_kind() {
                    TokenKind::OpenParen => {
                        let arguments = parse_arguments(parser)?;
                        parser.alloc(Node::CallExpression(CallExpression {
                            callee: expr,
                            arguments,
                            optional: true,
                            span: parser.span_from(start),
                        }))
                    }
                    TokenKind::OpenBracket => {
                        parser.advance();
                        let property = parse_expression(parser)?;
                        parser.expect(TokenKind::CloseBracket)?;
                        member(parser, expr, property, true, true, start)
                    }
                    _ => {
                        let property = parse_identifier_name(parser)?;
                        member(parser, expr, property, false, true, start)
                    }
                }
            }
            _ => break,
        };
    }

    Ok(expr)
}

fn member(
    parser: &mut Parser,
    object: NodeId,
    property: NodeId,
    computed: bool,
    optional: bool,
    start: Position,
) -> NodeId {
    parser.alloc(Node::MemberExpression(MemberExpression {
        object,
        property,
        computed,
        optional,
        span: parser.span_from(start),
    }))
}

/// `.name` or `[expression]` after `object`.
fn parse_member_access(parser: &mut Parser, object: NodeId, start: Position) -> Result<NodeId, Error> {
    if parser.advance().kind == TokenKind::Dot {
        let property = parse_identifier_name(parser)?;
        return Ok(member(parser, object, property, false, false, start));
    }

    let property = parse_expression(parser)?;
    parser.expect(TokenKind::CloseBracket)?;
    Ok(member(parser, object, property, true, false, start))
}

fn parse_new_expr(parser: &mut Parser) -> Result<NodeId, Error> {
    let start = parser.expect(TokenKind::New)?.span.start;

    let mut callee = if parser.current_token_kind() == TokenKind::New {
        parser.nested(parse_new_expr)?
    } else {
        parse_primary_expr(parser)?
    };

    while matches!(
        parser.current_token_kind(),
        TokenKind::Dot | TokenKind::OpenBracket
    ) {
        callee = parse_member_access(parser, callee, start)?;
    }

    let arguments = if parser.current_token_kind() == TokenKind::OpenParen {
        Some(parse_arguments(parser)?)
    } else {
        None
    };

    Ok(parser.alloc(Node::NewExpression(NewExpression {
        callee,
        arguments,
        span: parser.span_from(start),
    })))
}

fn parse_arguments(parser: &mut Parser) -> Result<Vec<NodeId>, Error> {
    parser.expect(TokenKind::OpenParen)?;
    let mut arguments = vec![];

    while parser.current_token_kind() != TokenKind::CloseParen {
        let argument = if parser.current_token_kind() == TokenKind::Ellipsis {
            parse_spread_element(parser)?
        } else {
            parse_assignment_expr(parser)?
        };
        arguments.push(argument);

        if parser.current_token_kind() != TokenKind::Comma {
            break;
        }
        parser.advance();
    }

    parser.expect(TokenKind::CloseParen)?;
    Ok(arguments)
}

// PRIMARY

pub fn parse_primary_expr(parser: &mut Parser) -> Result<NodeId, Error> {
    let token = parser.current_token().clone();

    let node = match token.kind {
        // Contextual keywords are plain identifiers in expression position.
        TokenKind::Identifier | TokenKind::Let | TokenKind::Yield | TokenKind::Await => {
            return parse_identifier(parser);
        }
        TokenKind::NumericLiteral => Node::NumericLiteral(NumericLiteral {
            value: token.literal.clone().unwrap_or(Literal::Number(f64::NAN)),
            raw: token.lexeme.clone(),
            span: token.span,
        }),
        kind if kind.is_string_literal() => Node::StringLiteral(StringLiteral {
            value: match &token.literal {
                Some(Literal::String(value)) => value.clone(),
                _ => String::new(),
            },
            raw: token.lexeme.clone(),
            span: token.span,
        }),
        TokenKind::True | TokenKind::False => Node::BooleanLiteral(BooleanLiteral {
            value: token.kind == TokenKind::True,
            span: token.span,
        }),
        TokenKind::Null => Node::NullLiteral(token.span),
        TokenKind::Undefined => Node::UndefinedLiteral(token.span),
        TokenKind::This => Node::ThisExpression(token.span),
        TokenKind::OpenBracket => return parse_array_literal(parser),
        TokenKind::OpenCurly => return parse_object_literal(parser),
        TokenKind::OpenParen => return parse_grouping_expr(parser),
        TokenKind::Function => return parse_fn_expr(parser),
        _ => return Err(parser.unexpected("expression")),
    };

    parser.advance();
    Ok(parser.alloc(node))
}

fn identifier_node(token: &Token) -> Node {
    Node::Identifier(Identifier {
        name: token.identifier_name().to_string(),
        span: token.span,
    })
}

/// A plain identifier, or one of the contextual keywords usable as one.
pub fn parse_identifier(parser: &mut Parser) -> Result<NodeId, Error> {
    match parser.current_token_kind() {
        TokenKind::Identifier | TokenKind::Let | TokenKind::Yield | TokenKind::Await => {
            let node = identifier_node(parser.advance());
            Ok(parser.alloc(node))
        }
        _ => Err(parser.expected(TokenKind::Identifier)),
    }
}

/// Property names after `.` may be reserved words.
fn parse_identifier_name(parser: &mut Parser) -> Result<NodeId, Error> {
    let token = parser.current_token();
    if token.kind != TokenKind::Identifier && !token.kind.is_reserved_word() {
        return Err(parser.expected(TokenKind::Identifier));
    }

    let node = identifier_node(parser.advance());
    Ok(parser.alloc(node))
}

fn parse_grouping_expr(parser: &mut Parser) -> Result<NodeId, Error> {
    parser.expect(TokenKind::OpenParen)?;
    let expression = parse_expression(parser)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(expression)
}

fn parse_spread_element(parser: &mut Parser) -> Result<NodeId, Error> {
    let start = parser.expect(TokenKind::Ellipsis)?.span.start;
    let argument = parse_assignment_expr(parser)?;

    Ok(parser.alloc(Node::SpreadElement(SpreadElement {
        argument,
        span: parser.span_from(start),
    })))
}

/// `[a, , ...b]`. Running out of input inside the brackets is fatal.
pub fn parse_array_literal(parser: &mut Parser) -> Result<NodeId, Error> {
    let start = parser.expect(TokenKind::OpenBracket)?.span.start;
    let mut elements = vec![];
    let mut trailing_comma = false;

    loop {
        match parser.current_token_kind() {
            TokenKind::CloseBracket => break,
            TokenKind::EOF => return Err(parser.unexpected("array literal").into_fatal()),
            TokenKind::Comma => {
                parser.advance();
                elements.push(None);
                trailing_comma = false;
                continue;
            }
            _ => {}
        }

        let element = if parser.current_token_kind() == TokenKind::Ellipsis {
            parse_spread_element(parser)
        } else {
            parse_assignment_expr(parser)
        };
        elements.push(Some(parser.fatal_at_eof(element)?));
        trailing_comma = false;

        match parser.current_token_kind() {
            TokenKind::Comma => {
                parser.advance();
                trailing_comma = true;
            }
            TokenKind::CloseBracket => break,
            TokenKind::EOF => return Err(parser.unexpected("array literal").into_fatal()),
            _ => return Err(parser.expected(TokenKind::CloseBracket)),
        }
    }

    parser.expect(TokenKind::CloseBracket)?;

    Ok(parser.alloc(Node::ArrayLiteral(ArrayLiteral {
        elements,
        trailing_comma,
        span: parser.span_from(start),
    })))
}

/// `{a: 1, b, c = 2, [d]: 3, ...e}`. Running out of input inside the
/// braces is fatal.
pub fn parse_object_literal(parser: &mut Parser) -> Result<NodeId, Error> {
    let start = parser.expect(TokenKind::OpenCurly)?.span.start;
    let mut properties = vec![];

    loop {
        match parser.current_token_kind() {
            TokenKind::CloseCurly => break,
            TokenKind::EOF => return Err(parser.unexpected("object literal").into_fatal()),
            _ => {}
        }

        let property = parse_property_definition(parser);
        properties.push(parser.fatal_at_eof(property)?);

        match parser.current_token_kind() {
            TokenKind::Comma => {
                parser.advance();
            }
            TokenKind::CloseCurly => break,
            TokenKind::EOF => return Err(parser.unexpected("object literal").into_fatal()),
            _ => return Err(parser.expected(TokenKind::CloseCurly)),
        }
    }

    parser.expect(TokenKind::CloseCurly)?;

    Ok(parser.alloc(Node::ObjectLiteral(ObjectLiteral {
        properties,
        span: parser.span_from(start),
    })))
}

fn parse_property_definition(parser: &mut Parser) -> Result<NodeId, Error> {
    let token = parser.current_token().clone();
    let start = token.span.start;

    if token.kind == TokenKind::Ellipsis {
        return parse_spread_element(parser);
    }

    let (key, computed) = match token.kind {
        TokenKind::OpenBracket => {
            parser.advance();
            let key = parse_assignment_expr(parser)?;
            parser.expect(TokenKind::CloseBracket)?;
            (key, true)
        }
        kind if kind == TokenKind::NumericLiteral || kind.is_string_literal() => {
            (parse_primary_expr(parser)?, false)
        }
        _ => (parse_identifier_name(parser)?, false),
    };

    if parser.current_token_kind() == TokenKind::Colon {
        parser.advance();
        let value = parse_assignment_expr(parser)?;

        return Ok(parser.alloc(Node::PropertyDefinition(PropertyDefinition {
            key,
            value,
            computed,
            shorthand: false,
            initializer: None,
            span: parser.span_from(start),
        })));
    }

    if !matches!(
        parser.current_token_kind(),
        TokenKind::Comma | TokenKind::CloseCurly | TokenKind::Assignment
    ) {
        return Err(parser.expected(TokenKind::Colon));
    }
    if computed {
        return Err(Error::new(ErrorImpl::InvalidShorthandProperty, start));
    }
    if !matches!(
        token.kind,
        TokenKind::Identifier | TokenKind::Let | TokenKind::Yield | TokenKind::Await
    ) {
        return Err(Error::new(
            ErrorImpl::ExpectedToken {
                expected: ":".to_string(),
                found: parser.current_token().lexeme.clone(),
            },
            parser.get_position(),
        ));
    }

    let value = parser.alloc(identifier_node(&token));
    let initializer = if parser.current_token_kind() == TokenKind::Assignment {
        parser.advance();
        Some(parse_assignment_expr(parser)?)
    } else {
        None
    };

    Ok(parser.alloc(Node::PropertyDefinition(PropertyDefinition {
        key,
        value,
        computed: false,
        shorthand: true,
        initializer,
        span: parser.span_from(start),
    })))
}

// FUNCTIONS

/// `function name?(params) { body }`, shared by declarations and
/// expressions.
pub fn parse_function(parser: &mut Parser) -> Result<Function, Error> {
    let start = parser.expect(TokenKind::Function)?.span.start;

    let name = match parser.current_token_kind() {
        TokenKind::Identifier | TokenKind::Let | TokenKind::Yield | TokenKind::Await => {
            Some(parse_identifier(parser)?)
        }
        _ => None,
    };

    let params = parse_formal_params(parser)?;

    if parser.current_token_kind() != TokenKind::OpenCurly {
        return Err(parser.expected(TokenKind::OpenCurly));
    }
    let body = parse_block_stmt(parser)?;

    Ok(Function {
        name,
        params,
        body,
        span: parser.span_from(start),
    })
}

fn parse_fn_expr(parser: &mut Parser) -> Result<NodeId, Error> {
    let function = parse_function(parser)?;
    Ok(parser.alloc(Node::FunctionExpression(function)))
}
