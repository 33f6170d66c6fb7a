//! Lexical analysis module for the front end.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into a stream of tokens for parsing. It handles:
//!
//! - Identifiers, reserved words and `\uXXXX` escapes in names
//! - Numeric literals (decimal, hex, binary, octal, BigInt, separators)
//! - String literals with escape sequences
//! - Maximal-munch punctuator matching
//! - Comments and whitespace
//! - Token position tracking for error reporting

pub mod lexer;
pub mod scanners;
pub mod tokens;

#[cfg(test)]
mod tests;
