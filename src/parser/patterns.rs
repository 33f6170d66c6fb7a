//! Binding and assignment patterns.
//!
//! Patterns are parsed with the array and object literal grammar and then
//! checked here, so `[a, {b: c = 1}, ...d]` is an `ArrayLiteral` node that
//! has been validated as a pattern.

use crate::{
    ast::{
        ast::{Ast, Node, NodeId},
        expressions::{AssignmentOperator, AssignmentPattern, RestElement},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{
    expr::{parse_array_literal, parse_assignment_expr, parse_identifier, parse_object_literal},
    parser::Parser,
};

/// Declaration targets allow only identifiers at the leaves; assignment
/// targets also allow member expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PatternKind {
    Binding,
    Assignment,
}

/// An identifier, or an array/object pattern, in a declaration or
/// parameter list.
pub fn parse_binding_target(parser: &mut Parser) -> Result<NodeId, Error> {
    let target = match parser.current_token_kind() {
        TokenKind::OpenBracket => parse_array_literal(parser)?,
        TokenKind::OpenCurly => parse_object_literal(parser)?,
        TokenKind::Identifier | TokenKind::Let | TokenKind::Yield | TokenKind::Await => {
            return parse_identifier(parser);
        }
        _ => return Err(parser.unexpected("binding target")),
    };

    validate_binding_pattern(parser.ast(), target)?;
    Ok(target)
}

/// `(a, [b, c], d = 1, ...rest)`
pub fn parse_formal_params(parser: &mut Parser) -> Result<Vec<NodeId>, Error> {
    parser.expect(TokenKind::OpenParen)?;
    let mut params = vec![];

    while parser.current_token_kind() != TokenKind::CloseParen {
        let start = parser.get_position();

        if parser.current_token_kind() == TokenKind::Ellipsis {
            parser.advance();
            let argument = parse_binding_target(parser)?;
            params.push(parser.alloc(Node::RestElement(RestElement {
                argument,
                span: parser.span_from(start),
            })));

            if parser.current_token_kind() != TokenKind::CloseParen {
                return Err(Error::new(ErrorImpl::RestElementNotLast, start));
            }
            break;
        }

        let target = parse_binding_target(parser)?;
        let param = if parser.current_token_kind() == TokenKind::Assignment {
            parser.advance();
            let default = parse_assignment_expr(parser)?;
            parser.alloc(Node::AssignmentPattern(AssignmentPattern {
                target,
                default,
                span: parser.span_from(start),
            }))
        } else {
            target
        };
        params.push(param);

        match parser.current_token_kind() {
            TokenKind::Comma => {
                parser.advance();
            }
            TokenKind::CloseParen => {}
            _ => return Err(parser.expected(TokenKind::CloseParen)),
        }
    }

    parser.expect(TokenKind::CloseParen)?;
    Ok(params)
}

pub fn validate_binding_pattern(ast: &Ast, pattern: NodeId) -> Result<(), Error> {
    check_pattern(ast, pattern, PatternKind::Binding)
}

pub fn validate_assignment_pattern(ast: &Ast, pattern: NodeId) -> Result<(), Error> {
    check_pattern(ast, pattern, PatternKind::Assignment)
}

fn invalid(ast: &Ast, id: NodeId) -> Error {
    Error::new(ErrorImpl::InvalidBindingPattern, ast[id].span().start)
}

fn check_pattern(ast: &Ast, id: NodeId, kind: PatternKind) -> Result<(), Error> {
    match &ast[id] {
        Node::Identifier(_) => Ok(()),
        Node::MemberExpression(member) if kind == PatternKind::Assignment && !member.optional => Ok(()),
        Node::AssignmentPattern(pattern) => check_pattern(ast, pattern.target, kind),
        Node::ArrayLiteral(array) => {
            for (i, element) in array.elements.iter().enumerate() {
                let Some(element) = *element else {
                    continue;
                };

                match &ast[element] {
                    Node::SpreadElement(spread) => {
                        if i + 1 != array.elements.len() || array.trailing_comma {
                            return Err(Error::new(
                                ErrorImpl::RestElementNotLast,
                                spread.span.start,
                            ));
                        }
                        check_pattern(ast, spread.argument, kind)?;
                    }
                    _ => check_element(ast, element, kind)?,
                }
            }
            Ok(())
        }
        Node::ObjectLiteral(object) => {
            for (i, property) in object.properties.iter().enumerate() {
                match &ast[*property] {
                    Node::PropertyDefinition(definition) if definition.shorthand => {}
                    Node::PropertyDefinition(definition) => {
                        check_element(ast, definition.value, kind)?
                    }
                    Node::SpreadElement(spread) => {
                        if i + 1 != object.properties.len() {
                            return Err(Error::new(
                                ErrorImpl::RestElementNotLast,
                                spread.span.start,
                            ));
                        }
                        // Object rest takes a plain target, never a nested pattern.
                        match &ast[spread.argument] {
                            Node::Identifier(_) => {}
                            Node::MemberExpression(_) if kind == PatternKind::Assignment => {}
                            _ => return Err(invalid(ast, spread.argument)),
                        }
                    }
                    _ => return Err(invalid(ast, *property)),
                }
            }
            Ok(())
        }
        _ => Err(invalid(ast, id)),
    }
}

/// A pattern element, which may carry a default (`a = 1`).
fn check_element(ast: &Ast, id: NodeId, kind: PatternKind) -> Result<(), Error> {
    match &ast[id] {
        Node::AssignmentExpression(assignment)
            if assignment.operator == AssignmentOperator::Assign =>
        {
            check_pattern(ast, assignment.target, kind)
        }
        _ => check_pattern(ast, id, kind),
    }
}
