use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// Broad family an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Lexical,
    Syntactic,
    Internal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
    fatal: bool,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
            fatal: false,
        }
    }

    /// An error that aborts the parse instead of letting the parser try an
    /// alternative production.
    pub fn fatal(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
            fatal: true,
        }
    }

    pub fn into_fatal(mut self) -> Self {
        self.fatal = true;
        self
    }

    pub fn is_fatal(&self) -> bool {
        self.fatal || self.category() == ErrorCategory::Internal
    }

    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn category(&self) -> ErrorCategory {
        match &self.internal_error {
            ErrorImpl::UnterminatedString
            | ErrorImpl::UnterminatedComment
            | ErrorImpl::InvalidEscapeSequence { .. }
            | ErrorImpl::DigitExpected
            | ErrorImpl::NoLiteralAfterNumber { .. }
            | ErrorImpl::UnexpectedCharacter { .. } => ErrorCategory::Lexical,
            ErrorImpl::UnexpectedToken { .. }
            | ErrorImpl::ExpectedToken { .. }
            | ErrorImpl::InvalidShorthandProperty
            | ErrorImpl::MissingInitializer { .. }
            | ErrorImpl::InvalidBindingPattern
            | ErrorImpl::InvalidAssignmentTarget
            | ErrorImpl::RestElementNotLast
            | ErrorImpl::UnexpectedEndOfInput { .. } => ErrorCategory::Syntactic,
            ErrorImpl::InfiniteLoop { .. } | ErrorImpl::NestingTooDeep { .. } => {
                ErrorCategory::Internal
            }
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::UnterminatedComment => "UnterminatedComment",
            ErrorImpl::InvalidEscapeSequence { .. } => "InvalidEscapeSequence",
            ErrorImpl::DigitExpected => "DigitExpected",
            ErrorImpl::NoLiteralAfterNumber { .. } => "NoLiteralAfterNumber",
            ErrorImpl::UnexpectedCharacter { .. } => "UnexpectedCharacter",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::ExpectedToken { .. } => "ExpectedToken",
            ErrorImpl::InvalidShorthandProperty => "InvalidShorthandProperty",
            ErrorImpl::MissingInitializer { .. } => "MissingInitializer",
            ErrorImpl::InvalidBindingPattern => "InvalidBindingPattern",
            ErrorImpl::InvalidAssignmentTarget => "InvalidAssignmentTarget",
            ErrorImpl::RestElementNotLast => "RestElementNotLast",
            ErrorImpl::UnexpectedEndOfInput { .. } => "UnexpectedEndOfInput",
            ErrorImpl::InfiniteLoop { .. } => "InfiniteLoop",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnterminatedString => ErrorTip::Suggestion(String::from(
                "string literal is missing its closing quote",
            )),
            ErrorImpl::UnterminatedComment => {
                ErrorTip::Suggestion(String::from("block comment is missing its closing `*/`"))
            }
            ErrorImpl::InvalidEscapeSequence { sequence } => {
                ErrorTip::Suggestion(format!("`{}` is not a valid escape sequence", sequence))
            }
            ErrorImpl::DigitExpected => ErrorTip::Suggestion(String::from(
                "separators, exponents and decimal points must be followed by a digit",
            )),
            ErrorImpl::NoLiteralAfterNumber { character } => ErrorTip::Suggestion(format!(
                "unexpected `{}` directly after a numeric literal",
                character
            )),
            ErrorImpl::UnexpectedCharacter { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedToken { token } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`", token))
            }
            ErrorImpl::ExpectedToken { expected, found } => {
                ErrorTip::Suggestion(format!("expected `{}`, found `{}`", expected, found))
            }
            ErrorImpl::InvalidShorthandProperty => ErrorTip::Suggestion(String::from(
                "a computed key needs an explicit `: value`",
            )),
            ErrorImpl::MissingInitializer { declaration } => {
                ErrorTip::Suggestion(format!("{} must be initialised", declaration))
            }
            ErrorImpl::InvalidBindingPattern => ErrorTip::Suggestion(String::from(
                "only identifiers, nested patterns and defaults may appear in a binding pattern",
            )),
            ErrorImpl::InvalidAssignmentTarget => ErrorTip::Suggestion(String::from(
                "only identifiers, member expressions and patterns can be assigned to",
            )),
            ErrorImpl::RestElementNotLast => {
                ErrorTip::Suggestion(String::from("a rest element must be the last element"))
            }
            ErrorImpl::UnexpectedEndOfInput { context } => {
                ErrorTip::Suggestion(format!("input ended inside {}", context))
            }
            ErrorImpl::InfiniteLoop { .. } => ErrorTip::Suggestion(String::from(
                "the cursor stopped advancing, this is a bug in the front end",
            )),
            ErrorImpl::NestingTooDeep { limit } => {
                ErrorTip::Suggestion(format!("nesting exceeds the limit of {}", limit))
            }
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at {}:{}",
            self.internal_error, self.position.line, self.position.column
        )
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    // Lexical
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("unterminated block comment")]
    UnterminatedComment,
    #[error("invalid escape sequence {sequence:?}")]
    InvalidEscapeSequence { sequence: String },
    #[error("digit expected")]
    DigitExpected,
    #[error("no literal after number")]
    NoLiteralAfterNumber { character: char },
    #[error("unexpected character {character:?}")]
    UnexpectedCharacter { character: char },

    // Syntactic
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("expected {expected:?}, found {found:?}")]
    ExpectedToken { expected: String, found: String },
    #[error("computed key in shorthand property position")]
    InvalidShorthandProperty,
    #[error("missing initializer in {declaration}")]
    MissingInitializer { declaration: String },
    #[error("invalid binding pattern")]
    InvalidBindingPattern,
    #[error("invalid assignment target")]
    InvalidAssignmentTarget,
    #[error("rest element must be last")]
    RestElementNotLast,
    #[error("unexpected end of input in {context}")]
    UnexpectedEndOfInput { context: String },

    // Internal
    #[error("cursor failed to advance in {context}")]
    InfiniteLoop { context: String },
    #[error("nesting deeper than {limit}")]
    NestingTooDeep { limit: usize },
}
