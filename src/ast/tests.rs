use crate::{lexer::tokens::Literal, Span};

use super::{
    ast::{Ast, Node, NodeId},
    expressions::{
        ArrayLiteral, BinaryOp, BinaryOperator, Identifier, NumericLiteral, ObjectLiteral,
        PropertyDefinition,
    },
    statements::{ExpressionStatement, Program},
};

fn identifier(ast: &mut Ast, name: &str) -> NodeId {
    ast.alloc(Node::Identifier(Identifier {
        name: name.to_string(),
        span: Span::default(),
    }))
}

fn number(ast: &mut Ast, value: f64) -> NodeId {
    ast.alloc(Node::NumericLiteral(NumericLiteral {
        value: Literal::Number(value),
        raw: value.to_string(),
        span: Span::default(),
    }))
}

#[test]
fn test_alloc_returns_sequential_ids() {
    let mut ast = Ast::new();

    assert!(ast.is_empty());
    assert_eq!(identifier(&mut ast, "a"), NodeId(0));
    assert_eq!(identifier(&mut ast, "b"), NodeId(1));
    assert_eq!(ast.len(), 2);
    assert_eq!(ast[NodeId(1)].name(), "Identifier");
    assert!(ast.get(NodeId(2)).is_none());
}

#[test]
fn test_truncate_discards_speculative_nodes() {
    let mut ast = Ast::new();
    let a = identifier(&mut ast, "a");
    let mark = ast.len();
    let b = identifier(&mut ast, "b");
    ast.set_root(b);

    ast.truncate(mark);

    assert_eq!(ast.len(), 1);
    assert!(ast.get(a).is_some());
    assert!(ast.get(b).is_none());
    assert_eq!(ast.root(), None);
}

#[test]
fn test_serialize_binary_op() {
    let mut ast = Ast::new();
    let a = identifier(&mut ast, "a");
    let b = identifier(&mut ast, "b");
    let c = identifier(&mut ast, "c");
    let and = ast.alloc(Node::BinaryOp(BinaryOp {
        operator: BinaryOperator::LogicalAnd,
        left: b,
        right: c,
        span: Span::default(),
    }));
    let or = ast.alloc(Node::BinaryOp(BinaryOp {
        operator: BinaryOperator::LogicalOr,
        left: a,
        right: and,
        span: Span::default(),
    }));

    assert_eq!(ast.serialize(or), "(a || (b && c))");
}

#[test]
fn test_serialize_array_holes() {
    let mut ast = Ast::new();
    let one = number(&mut ast, 1.0);
    let three = number(&mut ast, 3.0);
    let middle = ast.alloc(Node::ArrayLiteral(ArrayLiteral {
        elements: vec![Some(one), None, Some(three)],
        trailing_comma: false,
        span: Span::default(),
    }));
    let trailing = ast.alloc(Node::ArrayLiteral(ArrayLiteral {
        elements: vec![Some(one), None],
        trailing_comma: false,
        span: Span::default(),
    }));
    let only_hole = ast.alloc(Node::ArrayLiteral(ArrayLiteral {
        elements: vec![None],
        trailing_comma: false,
        span: Span::default(),
    }));

    assert_eq!(ast.serialize(middle), "[1, , 3]");
    assert_eq!(ast.serialize(trailing), "[1, ,]");
    assert_eq!(ast.serialize(only_hole), "[,]");
}

#[test]
fn test_object_expression_statement_is_parenthesised() {
    let mut ast = Ast::new();
    let key = identifier(&mut ast, "foo");
    let value = identifier(&mut ast, "foo");
    let property = ast.alloc(Node::PropertyDefinition(PropertyDefinition {
        key,
        value,
        computed: false,
        shorthand: true,
        initializer: None,
        span: Span::default(),
    }));
    let object = ast.alloc(Node::ObjectLiteral(ObjectLiteral {
        properties: vec![property],
        span: Span::default(),
    }));
    let statement = ast.alloc(Node::ExpressionStatement(ExpressionStatement {
        expression: object,
        span: Span::default(),
    }));
    let program = ast.alloc(Node::Program(Program {
        body: vec![statement],
        span: Span::default(),
    }));
    ast.set_root(program);

    assert_eq!(ast.serialize(object), "{foo}");
    assert_eq!(ast.to_string(), "({foo});");
    assert_eq!(ast.program_body(), &[statement]);
    assert!(ast[statement].is_statement());
}
