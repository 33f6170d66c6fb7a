//! Utility macros for the front end.
//!
//! This module defines helper macros used by the lexer and the parser:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `LOG!` - Logs through a `SharedLogger`, formatting only when enabled
//!
//! These macros reduce boilerplate in the lexer and parser implementations.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$lexeme` - The exact source slice the token was scanned from
/// * `$literal` - The decoded literal value, if any
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::NumericLiteral, "42".to_string(), Some(Literal::Number(42.0)), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $lexeme:expr, $literal:expr, $span:expr) => {
        Token {
            kind: $kind,
            lexeme: $lexeme,
            literal: $literal,
            span: $span,
        }
    };
}

/// Logs a formatted message through a `SharedLogger`.
///
/// The message is only formatted when the logger reports the level as
/// enabled, so the default no-op logger costs a virtual call per site.
///
/// # Example
///
/// ```ignore
/// LOG!(self.logger, Level::Debug, "restoring checkpoint at token {}", pos);
/// ```
#[macro_export]
macro_rules! LOG {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        if $logger.enabled($level) {
            $logger.log($level, &format!($($arg)+));
        }
    };
}
