//! Error types and error handling for the front end.
//!
//! This module defines the error types shared by the lexer and the parser.
//! It includes:
//!
//! - Error structures with source position information
//! - Lexical, syntactic and internal error variants
//! - The fatal flag that stops the parser from backtracking
//! - Error names and suggestions used when rendering diagnostics

pub mod errors;
