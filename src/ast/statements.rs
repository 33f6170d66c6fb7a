use crate::Span;

use super::ast::NodeId;

#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStatement {
    pub expression: NodeId,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
    Var,
    Let,
    Const,
}

impl DeclarationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeclarationKind::Var => "var",
            DeclarationKind::Let => "let",
            DeclarationKind::Const => "const",
        }
    }
}

/// One declarator: an identifier or binding pattern with an optional
/// initializer.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableDeclaration {
    pub target: NodeId,
    pub init: Option<NodeId>,
    pub span: Span,
}

/// A `var`/`let`/`const` statement. `declarations` are
/// `VariableDeclaration` nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableDeclarationList {
    pub kind: DeclarationKind,
    pub declarations: Vec<NodeId>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStatement {
    pub test: NodeId,
    pub consequent: NodeId,
    pub alternate: Option<NodeId>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BlockStatement {
    pub body: Vec<NodeId>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStatement {
    pub argument: Option<NodeId>,
    pub span: Span,
}

/// Root of every parsed source.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub body: Vec<NodeId>,
    pub span: Span,
}
