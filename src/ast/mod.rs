/// AST (Abstract Syntax Tree) module
/// Contains the node arena and every node kind
///
/// Submodules:
/// - ast: `NodeId`, the `Node` enum and the `Ast` arena with its canonical serialisation
/// - expressions: Expression nodes and operator kinds
/// - statements: Statement nodes
pub mod ast;
pub mod expressions;
pub mod statements;

#[cfg(test)]
mod tests;
