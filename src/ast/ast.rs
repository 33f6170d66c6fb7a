use std::{fmt::Display, ops::Index};

use crate::Span;

use super::{
    expressions::{
        ArrayLiteral, ArrowFunction, AssignmentExpression, AssignmentPattern, BinaryOp,
        BooleanLiteral, CallExpression, ConditionalExpression, Function, Identifier,
        MemberExpression, NewExpression, NumericLiteral, ObjectLiteral, PropertyDefinition,
        RestElement, SequenceExpression, SpreadElement, StringLiteral, UnaryOp, UpdateOp,
    },
    statements::{
        BlockStatement, ExpressionStatement, IfStatement, Program, ReturnStatement,
        VariableDeclaration, VariableDeclarationList,
    },
};

/// Index of a node in its [`Ast`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Node Kinds
///
/// Every node of the tree. Children are referenced by `NodeId` and are
/// always allocated before their parent.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    // Expressions
    Identifier(Identifier),
    NumericLiteral(NumericLiteral),
    StringLiteral(StringLiteral),
    BooleanLiteral(BooleanLiteral),
    NullLiteral(Span),
    UndefinedLiteral(Span),
    ThisExpression(Span),
    ArrayLiteral(ArrayLiteral),
    ObjectLiteral(ObjectLiteral),
    PropertyDefinition(PropertyDefinition),
    SpreadElement(SpreadElement),
    RestElement(RestElement),
    AssignmentPattern(AssignmentPattern),
    BinaryOp(BinaryOp),
    UnaryOp(UnaryOp),
    UpdateOp(UpdateOp),
    AssignmentExpression(AssignmentExpression),
    ConditionalExpression(ConditionalExpression),
    SequenceExpression(SequenceExpression),
    MemberExpression(MemberExpression),
    CallExpression(CallExpression),
    NewExpression(NewExpression),
    FunctionExpression(Function),
    ArrowFunction(ArrowFunction),

    // Statements
    ExpressionStatement(ExpressionStatement),
    VariableDeclaration(VariableDeclaration),
    VariableDeclarationList(VariableDeclarationList),
    IfStatement(IfStatement),
    BlockStatement(BlockStatement),
    ReturnStatement(ReturnStatement),
    EmptyStatement(Span),
    FunctionDeclaration(Function),
    Program(Program),
}

impl Node {
    pub fn span(&self) -> Span {
        match self {
            Node::NullLiteral(span)
            | Node::UndefinedLiteral(span)
            | Node::ThisExpression(span)
            | Node::EmptyStatement(span) => *span,
            Node::Identifier(node) => node.span,
            Node::NumericLiteral(node) => node.span,
            Node::StringLiteral(node) => node.span,
            Node::BooleanLiteral(node) => node.span,
            Node::ArrayLiteral(node) => node.span,
            Node::ObjectLiteral(node) => node.span,
            Node::PropertyDefinition(node) => node.span,
            Node::SpreadElement(node) => node.span,
            Node::RestElement(node) => node.span,
            Node::AssignmentPattern(node) => node.span,
            Node::BinaryOp(node) => node.span,
            Node::UnaryOp(node) => node.span,
            Node::UpdateOp(node) => node.span,
            Node::AssignmentExpression(node) => node.span,
            Node::ConditionalExpression(node) => node.span,
            Node::SequenceExpression(node) => node.span,
            Node::MemberExpression(node) => node.span,
            Node::CallExpression(node) => node.span,
            Node::NewExpression(node) => node.span,
            Node::FunctionExpression(node) | Node::FunctionDeclaration(node) => node.span,
            Node::ArrowFunction(node) => node.span,
            Node::ExpressionStatement(node) => node.span,
            Node::VariableDeclaration(node) => node.span,
            Node::VariableDeclarationList(node) => node.span,
            Node::IfStatement(node) => node.span,
            Node::BlockStatement(node) => node.span,
            Node::ReturnStatement(node) => node.span,
            Node::Program(node) => node.span,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Node::Identifier(_) => "Identifier",
            Node::NumericLiteral(_) => "NumericLiteral",
            Node::StringLiteral(_) => "StringLiteral",
            Node::BooleanLiteral(_) => "BooleanLiteral",
            Node::NullLiteral(_) => "NullLiteral",
            Node::UndefinedLiteral(_) => "UndefinedLiteral",
            Node::ThisExpression(_) => "ThisExpression",
            Node::ArrayLiteral(_) => "ArrayLiteral",
            Node::ObjectLiteral(_) => "ObjectLiteral",
            Node::PropertyDefinition(_) => "PropertyDefinition",
            Node::SpreadElement(_) => "SpreadElement",
            Node::RestElement(_) => "RestElement",
            Node::AssignmentPattern(_) => "AssignmentPattern",
            Node::BinaryOp(_) => "BinaryOp",
            Node::UnaryOp(_) => "UnaryOp",
            Node::UpdateOp(_) => "UpdateOp",
            Node::AssignmentExpression(_) => "AssignmentExpression",
            Node::ConditionalExpression(_) => "ConditionalExpression",
            Node::SequenceExpression(_) => "SequenceExpression",
            Node::MemberExpression(_) => "MemberExpression",
            Node::CallExpression(_) => "CallExpression",
            Node::NewExpression(_) => "NewExpression",
            Node::FunctionExpression(_) => "FunctionExpression",
            Node::ArrowFunction(_) => "ArrowFunction",
            Node::ExpressionStatement(_) => "ExpressionStatement",
            Node::VariableDeclaration(_) => "VariableDeclaration",
            Node::VariableDeclarationList(_) => "VariableDeclarationList",
            Node::IfStatement(_) => "IfStatement",
            Node::BlockStatement(_) => "BlockStatement",
            Node::ReturnStatement(_) => "ReturnStatement",
            Node::EmptyStatement(_) => "EmptyStatement",
            Node::FunctionDeclaration(_) => "FunctionDeclaration",
            Node::Program(_) => "Program",
        }
    }

    pub fn is_statement(&self) -> bool {
        matches!(
            self,
            Node::ExpressionStatement(_)
                | Node::VariableDeclarationList(_)
                | Node::IfStatement(_)
                | Node::BlockStatement(_)
                | Node::ReturnStatement(_)
                | Node::EmptyStatement(_)
                | Node::FunctionDeclaration(_)
        )
    }
}

/// Node arena.
///
/// Nodes are appended once their production has succeeded. A parser that
/// abandons a speculative attempt truncates the arena back to the length it
/// had when the attempt began.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ast {
    nodes: Vec<Node>,
    root: Option<NodeId>,
}

impl Ast {
    pub fn new() -> Self {
        Ast::default()
    }

    pub fn alloc(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Drops every node allocated at or after `len`.
    pub fn truncate(&mut self, len: usize) {
        self.nodes.truncate(len);
        if self.root.is_some_and(|root| root.0 >= len) {
            self.root = None;
        }
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn set_root(&mut self, root: NodeId) {
        self.root = Some(root);
    }

    /// The statements of the root `Program`, empty if there is none.
    pub fn program_body(&self) -> &[NodeId] {
        match self.root.and_then(|root| self.get(root)) {
            Some(Node::Program(program)) => &program.body,
            _ => &[],
        }
    }

    /// Canonical source form of the subtree rooted at `id`.
    ///
    /// Operators are fully parenthesised so the grouping chosen by the parser
    /// is visible: `a || b && c` serialises as `(a || (b && c))`.
    pub fn serialize(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.write_node(id, &mut out);
        out
    }

    fn write_list(&self, ids: &[NodeId], separator: &str, out: &mut String) {
        for (i, id) in ids.iter().enumerate() {
            if i > 0 {
                out.push_str(separator);
            }
            self.write_node(*id, out);
        }
    }

    fn write_params(&self, params: &[NodeId], out: &mut String) {
        out.push('(');
        self.write_list(params, ", ", out);
        out.push(')');
    }

    fn write_function(&self, function: &Function, out: &mut String) {
        out.push_str("function");
        if let Some(name) = function.name {
            out.push(' ');
            self.write_node(name, out);
        }
        self.write_params(&function.params, out);
        out.push(' ');
        self.write_node(function.body, out);
    }

    fn write_node(&self, id: NodeId, out: &mut String) {
        let Some(node) = self.get(id) else {
            out.push_str("<missing>");
            return;
        };

        match node {
            Node::Identifier(identifier) => out.push_str(&identifier.name),
            Node::NumericLiteral(number) => out.push_str(&number.raw),
            Node::StringLiteral(string) => out.push_str(&string.raw),
            Node::BooleanLiteral(boolean) => out.push_str(if boolean.value { "true" } else { "false" }),
            Node::NullLiteral(_) => out.push_str("null"),
            Node::UndefinedLiteral(_) => out.push_str("undefined"),
            Node::ThisExpression(_) => out.push_str("this"),
            Node::ArrayLiteral(array) => {
                out.push('[');
                for (i, element) in array.elements.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    if let Some(element) = element {
                        self.write_node(*element, out);
                    }
                }
                // A trailing hole needs its own comma to survive re-parsing.
                if array.elements.last().is_some_and(|last| last.is_none()) {
                    out.push(',');
                }
                out.push(']');
            }
            Node::ObjectLiteral(object) => {
                if object.properties.is_empty() {
                    out.push_str("{}");
                } else {
                    out.push('{');
                    self.write_list(&object.properties, ", ", out);
                    out.push('}');
                }
            }
            Node::PropertyDefinition(property) => {
                if property.shorthand {
                    self.write_node(property.key, out);
                    if let Some(initializer) = property.initializer {
                        out.push_str(" = ");
                        self.write_node(initializer, out);
                    }
                } else {
                    if property.computed {
                        out.push('[');
                        self.write_node(property.key, out);
                        out.push(']');
                    } else {
                        self.write_node(property.key, out);
                    }
                    out.push_str(": ");
                    self.write_node(property.value, out);
                }
            }
            Node::SpreadElement(SpreadElement { argument, .. })
            | Node::RestElement(RestElement { argument, .. }) => {
                out.push_str("...");
                self.write_node(*argument, out);
            }
            Node::AssignmentPattern(pattern) => {
                self.write_node(pattern.target, out);
                out.push_str(" = ");
                self.write_node(pattern.default, out);
            }
            Node::BinaryOp(binary) => {
                out.push('(');
                self.write_node(binary.left, out);
                out.push(' ');
                out.push_str(binary.operator.as_str());
                out.push(' ');
                self.write_node(binary.right, out);
                out.push(')');
            }
            Node::UnaryOp(unary) => {
                out.push('(');
                out.push_str(unary.operator.as_str());
                if unary.operator.is_keyword() {
                    out.push(' ');
                }
                self.write_node(unary.argument, out);
                out.push(')');
            }
            Node::UpdateOp(update) => {
                out.push('(');
                if update.prefix {
                    out.push_str(update.operator.as_str());
                    self.write_node(update.argument, out);
                } else {
                    self.write_node(update.argument, out);
                    out.push_str(update.operator.as_str());
                }
                out.push(')');
            }
            Node::AssignmentExpression(assignment) => {
                out.push('(');
                self.write_node(assignment.target, out);
                out.push(' ');
                out.push_str(assignment.operator.as_str());
                out.push(' ');
                self.write_node(assignment.value, out);
                out.push(')');
            }
            Node::ConditionalExpression(conditional) => {
                out.push('(');
                self.write_node(conditional.test, out);
                out.push_str(" ? ");
                self.write_node(conditional.consequent, out);
                out.push_str(" : ");
                self.write_node(conditional.alternate, out);
                out.push(')');
            }
            Node::SequenceExpression(sequence) => {
                out.push('(');
                self.write_list(&sequence.expressions, ", ", out);
                out.push(')');
            }
            Node::MemberExpression(member) => {
                self.write_node(member.object, out);
                match (member.optional, member.computed) {
                    (true, true) => out.push_str("?.["),
                    (true, false) => out.push_str("?."),
                    (false, true) => out.push('['),
                    (false, false) => out.push('.'),
                }
                self.write_node(member.property, out);
                if member.computed {
                    out.push(']');
                }
            }
            Node::CallExpression(call) => {
                self.write_node(call.callee, out);
                if call.optional {
                    out.push_str("?.");
                }
                self.write_params(&call.arguments, out);
            }
            Node::NewExpression(new) => {
                out.push_str("new ");
                self.write_node(new.callee, out);
                if let Some(arguments) = &new.arguments {
                    self.write_params(arguments, out);
                }
            }
            Node::FunctionExpression(function) | Node::FunctionDeclaration(function) => {
                self.write_function(function, out)
            }
            Node::ArrowFunction(arrow) => {
                out.push('(');
                self.write_params(&arrow.params, out);
                out.push_str(" => ");
                let body = self.serialize(arrow.body);
                if arrow.expression && body.starts_with('{') {
                    out.push('(');
                    out.push_str(&body);
                    out.push(')');
                } else {
                    out.push_str(&body);
                }
                out.push(')');
            }
            Node::ExpressionStatement(statement) => {
                let expression = self.serialize(statement.expression);
                // Would otherwise re-parse as a block or a declaration.
                if expression.starts_with('{') || expression.starts_with("function") {
                    out.push('(');
                    out.push_str(&expression);
                    out.push(')');
                } else {
                    out.push_str(&expression);
                }
                out.push(';');
            }
            Node::VariableDeclaration(declaration) => {
                self.write_node(declaration.target, out);
                if let Some(init) = declaration.init {
                    out.push_str(" = ");
                    self.write_node(init, out);
                }
            }
            Node::VariableDeclarationList(list) => {
                out.push_str(list.kind.as_str());
                out.push(' ');
                self.write_list(&list.declarations, ", ", out);
                out.push(';');
            }
            Node::IfStatement(statement) => {
                out.push_str("if (");
                self.write_node(statement.test, out);
                out.push_str(") ");
                self.write_node(statement.consequent, out);
                if let Some(alternate) = statement.alternate {
                    out.push_str(" else ");
                    self.write_node(alternate, out);
                }
            }
            Node::BlockStatement(block) => {
                if block.body.is_empty() {
                    out.push_str("{}");
                } else {
                    out.push_str("{ ");
                    self.write_list(&block.body, " ", out);
                    out.push_str(" }");
                }
            }
            Node::ReturnStatement(statement) => match statement.argument {
                Some(argument) => {
                    out.push_str("return ");
                    self.write_node(argument, out);
                    out.push(';');
                }
                None => out.push_str("return;"),
            },
            Node::EmptyStatement(_) => out.push(';'),
            Node::Program(program) => self.write_list(&program.body, "\n", out),
        }
    }
}

impl Index<NodeId> for Ast {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Self::Output {
        &self.nodes[id.0]
    }
}

impl Display for Ast {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.root {
            Some(root) => write!(f, "{}", self.serialize(root)),
            None => Ok(()),
        }
    }
}
