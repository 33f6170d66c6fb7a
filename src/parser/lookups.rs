use std::collections::HashMap;

use crate::{
    ast::{
        ast::NodeId,
        expressions::{AssignmentOperator, BinaryOperator, UnaryOperator, UpdateOperator},
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{parser::Parser, stmt::*};

/// Binary precedence levels, loosest first. Each level parses operands of
/// the next tighter level; `Exponent` operands are unary expressions.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Hash)]
pub enum Precedence {
    Coalesce,
    LogicalOr,
    LogicalAnd,
    BitwiseOr,
    BitwiseXor,
    BitwiseAnd,
    Equality,
    Relational,
    Shift,
    Additive,
    Multiplicative,
    Exponent,
}

impl Precedence {
    pub fn tighter(self) -> Option<Precedence> {
        match self {
            Precedence::Coalesce => Some(Precedence::LogicalOr),
            Precedence::LogicalOr => Some(Precedence::LogicalAnd),
            Precedence::LogicalAnd => Some(Precedence::BitwiseOr),
            Precedence::BitwiseOr => Some(Precedence::BitwiseXor),
            Precedence::BitwiseXor => Some(Precedence::BitwiseAnd),
            Precedence::BitwiseAnd => Some(Precedence::Equality),
            Precedence::Equality => Some(Precedence::Relational),
            Precedence::Relational => Some(Precedence::Shift),
            Precedence::Shift => Some(Precedence::Additive),
            Precedence::Additive => Some(Precedence::Multiplicative),
            Precedence::Multiplicative => Some(Precedence::Exponent),
            Precedence::Exponent => None,
        }
    }

    pub fn is_right_associative(self) -> bool {
        self == Precedence::Exponent
    }
}

pub type StmtHandler = fn(&mut Parser) -> Result<NodeId, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    parser.binary(TokenKind::Nullish, Precedence::Coalesce, BinaryOperator::Coalesce);
    parser.binary(TokenKind::Or, Precedence::LogicalOr, BinaryOperator::LogicalOr);
    parser.binary(TokenKind::And, Precedence::LogicalAnd, BinaryOperator::LogicalAnd);

    // Bitwise
    parser.binary(TokenKind::Pipe, Precedence::BitwiseOr, BinaryOperator::BitwiseOr);
    parser.binary(TokenKind::Caret, Precedence::BitwiseXor, BinaryOperator::BitwiseXor);
    parser.binary(TokenKind::Ampersand, Precedence::BitwiseAnd, BinaryOperator::BitwiseAnd);

    // Equality and relational
    parser.binary(TokenKind::Equals, Precedence::Equality, BinaryOperator::Equal);
    parser.binary(TokenKind::NotEquals, Precedence::Equality, BinaryOperator::NotEqual);
    parser.binary(TokenKind::StrictEquals, Precedence::Equality, BinaryOperator::StrictEqual);
    parser.binary(TokenKind::StrictNotEquals, Precedence::Equality, BinaryOperator::StrictNotEqual);
    parser.binary(TokenKind::Less, Precedence::Relational, BinaryOperator::Less);
    parser.binary(TokenKind::Greater, Precedence::Relational, BinaryOperator::Greater);
    parser.binary(TokenKind::LessEquals, Precedence::Relational, BinaryOperator::LessEqual);
    parser.binary(TokenKind::GreaterEquals, Precedence::Relational, BinaryOperator::GreaterEqual);
    parser.binary(TokenKind::Instanceof, Precedence::Relational, BinaryOperator::Instanceof);
    parser.binary(TokenKind::In, Precedence::Relational, BinaryOperator::In);

    // Shift
    parser.binary(TokenKind::ShiftLeft, Precedence::Shift, BinaryOperator::ShiftLeft);
    parser.binary(TokenKind::ShiftRight, Precedence::Shift, BinaryOperator::ShiftRight);
    parser.binary(TokenKind::UnsignedShiftRight, Precedence::Shift, BinaryOperator::UnsignedShiftRight);

    // Additive and multiplicative
    parser.binary(TokenKind::Plus, Precedence::Additive, BinaryOperator::Add);
    parser.binary(TokenKind::Dash, Precedence::Additive, BinaryOperator::Subtract);
    parser.binary(TokenKind::Star, Precedence::Multiplicative, BinaryOperator::Multiply);
    parser.binary(TokenKind::Slash, Precedence::Multiplicative, BinaryOperator::Divide);
    parser.binary(TokenKind::Percent, Precedence::Multiplicative, BinaryOperator::Remainder);
    parser.binary(TokenKind::StarStar, Precedence::Exponent, BinaryOperator::Exponent);

    // Statements
    parser.stmt(TokenKind::OpenCurly, parse_block_stmt);
    parser.stmt(TokenKind::Var, parse_var_decl_stmt);
    parser.stmt(TokenKind::Let, parse_var_decl_stmt);
    parser.stmt(TokenKind::Const, parse_var_decl_stmt);
    parser.stmt(TokenKind::Semicolon, parse_empty_stmt);
    parser.stmt(TokenKind::If, parse_if_stmt);
    parser.stmt(TokenKind::Return, parse_return_stmt);
    parser.stmt(TokenKind::Function, parse_fn_decl_stmt);
}

pub fn unary_operator(kind: TokenKind) -> Option<UnaryOperator> {
    match kind {
        TokenKind::Delete => Some(UnaryOperator::Delete),
        TokenKind::Typeof => Some(UnaryOperator::Typeof),
        TokenKind::Void => Some(UnaryOperator::Void),
        TokenKind::Plus => Some(UnaryOperator::Plus),
        TokenKind::Dash => Some(UnaryOperator::Minus),
        TokenKind::Not => Some(UnaryOperator::Not),
        TokenKind::Tilde => Some(UnaryOperator::BitwiseNot),
        _ => None,
    }
}

pub fn update_operator(kind: TokenKind) -> Option<UpdateOperator> {
    match kind {
        TokenKind::PlusPlus => Some(UpdateOperator::Increment),
        TokenKind::MinusMinus => Some(UpdateOperator::Decrement),
        _ => None,
    }
}

pub fn assignment_operator(kind: TokenKind) -> Option<AssignmentOperator> {
    match kind {
        TokenKind::Assignment => Some(AssignmentOperator::Assign),
        TokenKind::PlusEquals => Some(AssignmentOperator::Add),
        TokenKind::MinusEquals => Some(AssignmentOperator::Subtract),
        TokenKind::StarEquals => Some(AssignmentOperator::Multiply),
        TokenKind::SlashEquals => Some(AssignmentOperator::Divide),
        TokenKind::PercentEquals => Some(AssignmentOperator::Remainder),
        TokenKind::StarStarEquals => Some(AssignmentOperator::Exponent),
        TokenKind::ShiftLeftEquals => Some(AssignmentOperator::ShiftLeft),
        TokenKind::ShiftRightEquals => Some(AssignmentOperator::ShiftRight),
        TokenKind::UnsignedShiftRightEquals => Some(AssignmentOperator::UnsignedShiftRight),
        TokenKind::AmpersandEquals => Some(AssignmentOperator::BitwiseAnd),
        TokenKind::PipeEquals => Some(AssignmentOperator::BitwiseOr),
        TokenKind::CaretEquals => Some(AssignmentOperator::BitwiseXor),
        TokenKind::AndEquals => Some(AssignmentOperator::LogicalAnd),
        TokenKind::OrEquals => Some(AssignmentOperator::LogicalOr),
        TokenKind::NullishEquals => Some(AssignmentOperator::Coalesce),
        _ => None,
    }
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type BinaryLookup = HashMap<TokenKind, (Precedence, BinaryOperator)>;
