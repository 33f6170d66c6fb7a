use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

/// Reserved words, matched against a whole scanned identifier.
const RESERVED_WORDS: &[(&str, TokenKind)] = &[
    ("await", TokenKind::Await),
    ("break", TokenKind::Break),
    ("case", TokenKind::Case),
    ("catch", TokenKind::Catch),
    ("class", TokenKind::Class),
    ("const", TokenKind::Const),
    ("continue", TokenKind::Continue),
    ("debugger", TokenKind::Debugger),
    ("default", TokenKind::Default),
    ("delete", TokenKind::Delete),
    ("do", TokenKind::Do),
    ("else", TokenKind::Else),
    ("enum", TokenKind::Enum),
    ("export", TokenKind::Export),
    ("extends", TokenKind::Extends),
    ("false", TokenKind::False),
    ("finally", TokenKind::Finally),
    ("for", TokenKind::For),
    ("function", TokenKind::Function),
    ("if", TokenKind::If),
    ("import", TokenKind::Import),
    ("in", TokenKind::In),
    ("instanceof", TokenKind::Instanceof),
    ("let", TokenKind::Let),
    ("new", TokenKind::New),
    ("null", TokenKind::Null),
    ("return", TokenKind::Return),
    ("super", TokenKind::Super),
    ("switch", TokenKind::Switch),
    ("this", TokenKind::This),
    ("throw", TokenKind::Throw),
    ("true", TokenKind::True),
    ("try", TokenKind::Try),
    ("typeof", TokenKind::Typeof),
    ("undefined", TokenKind::Undefined),
    ("var", TokenKind::Var),
    ("void", TokenKind::Void),
    ("while", TokenKind::While),
    ("with", TokenKind::With),
    ("yield", TokenKind::Yield),
];

/// Every punctuator. Order does not matter here: the per-character table
/// built from it is sorted longest first.
const PUNCTUATORS: &[(&str, TokenKind)] = &[
    ("{", TokenKind::OpenCurly),
    ("}", TokenKind::CloseCurly),
    ("(", TokenKind::OpenParen),
    (")", TokenKind::CloseParen),
    ("[", TokenKind::OpenBracket),
    ("]", TokenKind::CloseBracket),
    (".", TokenKind::Dot),
    ("...", TokenKind::Ellipsis),
    (";", TokenKind::Semicolon),
    (",", TokenKind::Comma),
    ("<", TokenKind::Less),
    (">", TokenKind::Greater),
    ("<=", TokenKind::LessEquals),
    (">=", TokenKind::GreaterEquals),
    ("==", TokenKind::Equals),
    ("!=", TokenKind::NotEquals),
    ("===", TokenKind::StrictEquals),
    ("!==", TokenKind::StrictNotEquals),
    ("+", TokenKind::Plus),
    ("-", TokenKind::Dash),
    ("*", TokenKind::Star),
    ("/", TokenKind::Slash),
    ("%", TokenKind::Percent),
    ("**", TokenKind::StarStar),
    ("++", TokenKind::PlusPlus),
    ("--", TokenKind::MinusMinus),
    ("<<", TokenKind::ShiftLeft),
    (">>", TokenKind::ShiftRight),
    (">>>", TokenKind::UnsignedShiftRight),
    ("&", TokenKind::Ampersand),
    ("|", TokenKind::Pipe),
    ("^", TokenKind::Caret),
    ("!", TokenKind::Not),
    ("~", TokenKind::Tilde),
    ("&&", TokenKind::And),
    ("||", TokenKind::Or),
    ("??", TokenKind::Nullish),
    ("?", TokenKind::Question),
    ("?.", TokenKind::QuestionDot),
    (":", TokenKind::Colon),
    ("=", TokenKind::Assignment),
    ("+=", TokenKind::PlusEquals),
    ("-=", TokenKind::MinusEquals),
    ("*=", TokenKind::StarEquals),
    ("/=", TokenKind::SlashEquals),
    ("%=", TokenKind::PercentEquals),
    ("**=", TokenKind::StarStarEquals),
    ("<<=", TokenKind::ShiftLeftEquals),
    (">>=", TokenKind::ShiftRightEquals),
    (">>>=", TokenKind::UnsignedShiftRightEquals),
    ("&=", TokenKind::AmpersandEquals),
    ("|=", TokenKind::PipeEquals),
    ("^=", TokenKind::CaretEquals),
    ("&&=", TokenKind::AndEquals),
    ("||=", TokenKind::OrEquals),
    ("??=", TokenKind::NullishEquals),
    ("=>", TokenKind::Arrow),
];

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> =
        RESERVED_WORDS.iter().copied().collect();

    /// Punctuators grouped by their first byte, longest first, so the first
    /// prefix match is the maximal munch.
    pub static ref PUNCTUATOR_LOOKUP: HashMap<u8, Vec<(&'static str, TokenKind)>> = {
        let mut map: HashMap<u8, Vec<(&'static str, TokenKind)>> = HashMap::new();
        for (text, kind) in PUNCTUATORS {
            map.entry(text.as_bytes()[0]).or_default().push((*text, *kind));
        }
        for candidates in map.values_mut() {
            candidates.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
        }
        map
    };

    static ref FIXED_TEXT: HashMap<TokenKind, &'static str> = RESERVED_WORDS
        .iter()
        .chain(PUNCTUATORS.iter())
        .map(|(text, kind)| (*kind, *text))
        .collect();
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    // Sentinels
    BOF,
    EOF,
    Unknown,
    Whitespace,

    Identifier,
    NumericLiteral,
    SingleQuotedString,
    DoubleQuotedString,
    Template,
    RegExp,

    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,
    OpenBracket,
    CloseBracket,

    Dot,
    Ellipsis,
    Semicolon,
    Comma,
    Colon,
    Question,
    QuestionDot,
    Arrow,

    Less,
    Greater,
    LessEquals,
    GreaterEquals,
    Equals,          // ==
    NotEquals,       // !=
    StrictEquals,    // ===
    StrictNotEquals, // !==

    Plus,
    Dash,
    Star,
    Slash,
    Percent,
    StarStar,
    PlusPlus,
    MinusMinus,

    ShiftLeft,
    ShiftRight,
    UnsignedShiftRight,
    Ampersand,
    Pipe,
    Caret,
    Not,
    Tilde,
    And,
    Or,
    Nullish,

    Assignment, // =
    PlusEquals,
    MinusEquals,
    StarEquals,
    SlashEquals,
    PercentEquals,
    StarStarEquals,
    ShiftLeftEquals,
    ShiftRightEquals,
    UnsignedShiftRightEquals,
    AmpersandEquals,
    PipeEquals,
    CaretEquals,
    AndEquals,
    OrEquals,
    NullishEquals,

    // Reserved
    Await,
    Break,
    Case,
    Catch,
    Class,
    Const,
    Continue,
    Debugger,
    Default,
    Delete,
    Do,
    Else,
    Enum,
    Export,
    Extends,
    False,
    Finally,
    For,
    Function,
    If,
    Import,
    In,
    Instanceof,
    Let,
    New,
    Null,
    Return,
    Super,
    Switch,
    This,
    Throw,
    True,
    Try,
    Typeof,
    Undefined,
    Var,
    Void,
    While,
    With,
    Yield,
}

impl TokenKind {
    /// Display name of the kind, e.g. `NumericLiteral` or `StrictEquals`.
    pub fn name(&self) -> String {
        format!("{:?}", self)
    }

    /// The fixed source text of a reserved word or punctuator.
    pub fn text(&self) -> Option<&'static str> {
        FIXED_TEXT.get(self).copied()
    }

    pub fn is_reserved_word(&self) -> bool {
        self.text()
            .is_some_and(|text| text.as_bytes()[0].is_ascii_alphabetic())
    }

    pub fn is_string_literal(&self) -> bool {
        matches!(
            self,
            TokenKind::SingleQuotedString | TokenKind::DoubleQuotedString
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Decoded value of a literal token.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Number(f64),
    /// Digits of a BigInt literal with separators and the `n` suffix
    /// removed; a radix prefix is kept.
    BigInt(String),
    /// Decoded string contents, or the decoded name of an identifier that
    /// was written with `\u` escapes.
    String(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub literal: Option<Literal>,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_one_of(&[
            TokenKind::Identifier,
            TokenKind::NumericLiteral,
            TokenKind::SingleQuotedString,
            TokenKind::DoubleQuotedString,
            TokenKind::Unknown,
        ]) {
            write!(f, "{}({})", self.kind, self.lexeme)
        } else {
            write!(f, "{}", self.kind)
        }
    }
}

impl Token {
    pub fn is_one_of(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    pub fn line(&self) -> u32 {
        self.span.start.line
    }

    pub fn column(&self) -> u32 {
        self.span.start.column
    }

    /// Identifier name with `\u` escapes decoded.
    pub fn identifier_name(&self) -> &str {
        match &self.literal {
            Some(Literal::String(name)) if self.kind == TokenKind::Identifier => name,
            _ => &self.lexeme,
        }
    }
}

/// Canonical debug form of a token sequence: each token's display form,
/// separated by single spaces.
pub fn join_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|token| token.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
