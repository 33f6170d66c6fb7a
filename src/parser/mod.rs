//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into an arena-allocated Abstract Syntax Tree. Expressions use one
//! precedence-climbing builder over a table of levels; statements dispatch
//! on their leading token and fall back to an expression statement through
//! checkpoint/restore. It handles:
//!
//! - Statement parsing (declarations, blocks, `if`, `return`, functions)
//! - Expression parsing (binary, unary, update, assignment, conditional,
//!   member access, calls, arrow functions)
//! - Array and object literals, reused as binding patterns
//! - Error reporting with fatal and recoverable errors

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod patterns;
pub mod stmt;
