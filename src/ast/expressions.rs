use crate::{lexer::tokens::Literal, Span};

use super::ast::NodeId;

// LITERALS

#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    /// Name with `\u` escapes decoded.
    pub name: String,
    pub span: Span,
}

/// Numeric Literal
/// Represents a number or BigInt literal. `raw` is the source lexeme.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericLiteral {
    pub value: Literal,
    pub raw: String,
    pub span: Span,
}

/// String Literal
/// `value` is the decoded contents, `raw` keeps the quotes and escapes.
#[derive(Debug, Clone, PartialEq)]
pub struct StringLiteral {
    pub value: String,
    pub raw: String,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BooleanLiteral {
    pub value: bool,
    pub span: Span,
}

/// Array Literal
/// `None` marks an elided slot (`[1, , 3]`).
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayLiteral {
    pub elements: Vec<Option<NodeId>>,
    /// The last element is followed by a comma that does not open a hole
    /// (`[a, ...b,]`).
    pub trailing_comma: bool,
    pub span: Span,
}

/// Object Literal
/// Each property is a `PropertyDefinition` or a `SpreadElement` node.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectLiteral {
    pub properties: Vec<NodeId>,
    pub span: Span,
}

/// Property Definition
///
/// `key: value`, `[key]: value`, shorthand `key` or shorthand with a default
/// `key = initializer`. A shorthand property still has its own `value`
/// identifier node, so every property has both a key and a value.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyDefinition {
    pub key: NodeId,
    pub value: NodeId,
    pub computed: bool,
    pub shorthand: bool,
    pub initializer: Option<NodeId>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpreadElement {
    pub argument: NodeId,
    pub span: Span,
}

/// `...target` as the last element of a binding pattern or parameter list.
#[derive(Debug, Clone, PartialEq)]
pub struct RestElement {
    pub argument: NodeId,
    pub span: Span,
}

/// A parameter or pattern element with a default value.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentPattern {
    pub target: NodeId,
    pub default: NodeId,
    pub span: Span,
}

// OPERATORS

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryOp {
    pub operator: BinaryOperator,
    pub left: NodeId,
    pub right: NodeId,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnaryOp {
    pub operator: UnaryOperator,
    pub argument: NodeId,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateOp {
    pub operator: UpdateOperator,
    pub prefix: bool,
    pub argument: NodeId,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentExpression {
    pub operator: AssignmentOperator,
    pub target: NodeId,
    pub value: NodeId,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConditionalExpression {
    pub test: NodeId,
    pub consequent: NodeId,
    pub alternate: NodeId,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SequenceExpression {
    pub expressions: Vec<NodeId>,
    pub span: Span,
}

// MEMBER ACCESS AND CALLS

/// `object.property`, `object[property]` and their `?.` forms.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberExpression {
    pub object: NodeId,
    pub property: NodeId,
    pub computed: bool,
    pub optional: bool,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallExpression {
    pub callee: NodeId,
    pub arguments: Vec<NodeId>,
    pub optional: bool,
    pub span: Span,
}

/// `new callee(arguments)`; `arguments` is `None` for `new callee`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpression {
    pub callee: NodeId,
    pub arguments: Option<Vec<NodeId>>,
    pub span: Span,
}

// FUNCTIONS

/// Shared by function declarations and function expressions.
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub name: Option<NodeId>,
    pub params: Vec<NodeId>,
    /// Always a `BlockStatement`.
    pub body: NodeId,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArrowFunction {
    pub params: Vec<NodeId>,
    /// A `BlockStatement`, or the returned expression when `expression` is set.
    pub body: NodeId,
    pub expression: bool,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Coalesce,
    LogicalOr,
    LogicalAnd,
    BitwiseOr,
    BitwiseXor,
    BitwiseAnd,
    Equal,
    NotEqual,
    StrictEqual,
    StrictNotEqual,
    Less,
    Greater,
    LessEqual,
    GreaterEqual,
    Instanceof,
    In,
    ShiftLeft,
    ShiftRight,
    UnsignedShiftRight,
    Add,
    Subtract,
    Multiply,
    Divide,
    Remainder,
    Exponent,
}

impl BinaryOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            BinaryOperator::Coalesce => "??",
            BinaryOperator::LogicalOr => "||",
            BinaryOperator::LogicalAnd => "&&",
            BinaryOperator::BitwiseOr => "|",
            BinaryOperator::BitwiseXor => "^",
            BinaryOperator::BitwiseAnd => "&",
            BinaryOperator::Equal => "==",
            BinaryOperator::NotEqual => "!=",
            BinaryOperator::StrictEqual => "===",
            BinaryOperator::StrictNotEqual => "!==",
            BinaryOperator::Less => "<",
            BinaryOperator::Greater => ">",
            BinaryOperator::LessEqual => "<=",
            BinaryOperator::GreaterEqual => ">=",
            BinaryOperator::Instanceof => "instanceof",
            BinaryOperator::In => "in",
            BinaryOperator::ShiftLeft => "<<",
            BinaryOperator::ShiftRight => ">>",
            BinaryOperator::UnsignedShiftRight => ">>>",
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
            BinaryOperator::Remainder => "%",
            BinaryOperator::Exponent => "**",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    Delete,
    Typeof,
    Void,
    Plus,
    Minus,
    Not,
    BitwiseNot,
}

impl UnaryOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnaryOperator::Delete => "delete",
            UnaryOperator::Typeof => "typeof",
            UnaryOperator::Void => "void",
            UnaryOperator::Plus => "+",
            UnaryOperator::Minus => "-",
            UnaryOperator::Not => "!",
            UnaryOperator::BitwiseNot => "~",
        }
    }

    /// Keyword operators are printed with a space before their operand.
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            UnaryOperator::Delete | UnaryOperator::Typeof | UnaryOperator::Void
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpdateOperator {
    Increment,
    Decrement,
}

impl UpdateOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            UpdateOperator::Increment => "++",
            UpdateOperator::Decrement => "--",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssignmentOperator {
    Assign,
    Add,
    Subtract,
    Multiply,
    Divide,
    Remainder,
    Exponent,
    ShiftLeft,
    ShiftRight,
    UnsignedShiftRight,
    BitwiseAnd,
    BitwiseOr,
    BitwiseXor,
    LogicalAnd,
    LogicalOr,
    Coalesce,
}

impl AssignmentOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssignmentOperator::Assign => "=",
            AssignmentOperator::Add => "+=",
            AssignmentOperator::Subtract => "-=",
            AssignmentOperator::Multiply => "*=",
            AssignmentOperator::Divide => "/=",
            AssignmentOperator::Remainder => "%=",
            AssignmentOperator::Exponent => "**=",
            AssignmentOperator::ShiftLeft => "<<=",
            AssignmentOperator::ShiftRight => ">>=",
            AssignmentOperator::UnsignedShiftRight => ">>>=",
            AssignmentOperator::BitwiseAnd => "&=",
            AssignmentOperator::BitwiseOr => "|=",
            AssignmentOperator::BitwiseXor => "^=",
            AssignmentOperator::LogicalAnd => "&&=",
            AssignmentOperator::LogicalOr => "||=",
            AssignmentOperator::Coalesce => "??=",
        }
    }
}
