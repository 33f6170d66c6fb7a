//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct: a cursor over the token
//! array, a stack of checkpoints for backtracking, and the node arena the
//! grammar functions allocate into.
//!
//! It maintains lookup tables for:
//! - Statement handlers, keyed by the leading token
//! - Binary operators with their precedence level

use std::collections::HashMap;

use crate::{
    ast::{
        ast::{Ast, Node, NodeId},
        expressions::BinaryOperator,
        statements::Program,
    },
    config::{LexerConfig, ParserConfig},
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::tokenize_with,
        tokens::{Token, TokenKind},
    },
    logging::{self, Level, SharedLogger},
    Position, Span, LOG, MK_TOKEN,
};

use super::{
    expr::parse_expression,
    lookups::{create_token_lookups, BinaryLookup, Precedence, StmtHandler, StmtLookup},
    stmt::parse_stmt,
};

/// A saved parser state. Restoring it rewinds the cursor and drops every
/// node allocated since it was taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint {
    pub pos: usize,
    pub arena_len: usize,
}

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// Tokens to parse, always ending with `EOF`
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    checkpoints: Vec<Checkpoint>,
    ast: Ast,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for binary operators
    binary_lookup: BinaryLookup,
    config: ParserConfig,
    logger: SharedLogger,
    /// Current nesting depth, bounded by `config.max_nesting_depth`
    depth: usize,
}

impl Parser {
    /// Creates a new Parser over `tokens` with its lookup tables registered.
    ///
    /// Whitespace tokens are dropped and a missing trailing `EOF` is added.
    ///
    /// # Arguments
    ///
    /// * `tokens` - Tokens produced by the lexer
    /// * `config` - Nesting limit and semicolon insertion settings
    /// * `logger` - Receives backtracking and failure records
    ///
    /// # Returns
    ///
    /// A new Parser positioned at the first token.
    pub fn new(tokens: Vec<Token>, config: ParserConfig, logger: SharedLogger) -> Self {
        let mut tokens: Vec<Token> = tokens
            .into_iter()
            .filter(|token| token.kind != TokenKind::Whitespace)
            .collect();

        if tokens.last().map(|token| token.kind) != Some(TokenKind::EOF) {
            let end = tokens
                .last()
                .map_or(Position::null(), |token| token.span.end);
            tokens.push(MK_TOKEN!(
                TokenKind::EOF,
                String::new(),
                None,
                Span { start: end, end }
            ));
        }

        let mut parser = Parser {
            tokens,
            pos: 0,
            checkpoints: vec![],
            ast: Ast::new(),
            stmt_lookup: HashMap::new(),
            binary_lookup: HashMap::new(),
            config,
            logger,
            depth: 0,
        };
        create_token_lookups(&mut parser);
        parser
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        self.peek(0)
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Returns the token `offset` places ahead, or `EOF` past the end.
    pub fn peek(&self, offset: usize) -> &Token {
        let last = self.tokens.len() - 1;
        &self.tokens[(self.pos + offset).min(last)]
    }

    /// Advances to the next token and returns the previous token. The
    /// cursor never moves past `EOF`.
    pub fn advance(&mut self) -> &Token {
        let current = self.pos;
        if current + 1 < self.tokens.len() {
            self.pos += 1;
        }
        &self.tokens[current]
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn at_eof(&self) -> bool {
        self.current_token_kind() == TokenKind::EOF
    }

    /// Expects a token of the specified kind, with optional custom error.
    ///
    /// # Arguments
    ///
    /// * `expected_kind` - The expected TokenKind
    /// * `error` - Optional custom error to return if expectation fails
    ///
    /// # Returns
    ///
    /// The consumed token, or the error if the current token has another
    /// kind. The cursor does not move on failure.
    pub fn expect_error(
        &mut self,
        expected_kind: TokenKind,
        error: Option<Error>,
    ) -> Result<Token, Error> {
        if self.current_token_kind() != expected_kind {
            return Err(error.unwrap_or_else(|| self.expected(expected_kind)));
        }

        Ok(self.advance().clone())
    }

    /// Expects a token of the specified kind with default error message.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        self.expect_error(expected_kind, None)
    }

    /// `ExpectedToken` error for the current token.
    pub fn expected(&self, expected_kind: TokenKind) -> Error {
        let token = self.current_token();
        let found = match token.kind {
            TokenKind::EOF => "end of input".to_string(),
            _ => token.lexeme.clone(),
        };

        Error::new(
            ErrorImpl::ExpectedToken {
                expected: expected_kind
                    .text()
                    .map_or_else(|| expected_kind.name(), str::to_string),
                found,
            },
            token.span.start,
        )
    }

    /// Error for a token that cannot start or continue `context`; at `EOF`
    /// this is `UnexpectedEndOfInput`.
    pub fn unexpected(&self, context: &str) -> Error {
        let token = self.current_token();
        let error = match token.kind {
            TokenKind::EOF => ErrorImpl::UnexpectedEndOfInput {
                context: context.to_string(),
            },
            _ => ErrorImpl::UnexpectedToken {
                token: token.lexeme.clone(),
            },
        };

        Error::new(error, token.span.start)
    }

    /// Escalates an error to fatal when it was caused by running out of
    /// input.
    pub fn fatal_at_eof<T>(&self, result: Result<T, Error>) -> Result<T, Error> {
        match result {
            Err(error) if self.at_eof() => Err(error.into_fatal()),
            result => result,
        }
    }

    /// Whether a line terminator separates the previous token from the
    /// current one.
    pub fn newline_before(&self) -> bool {
        self.pos > 0
            && self.tokens[self.pos - 1].span.end.line < self.current_token().span.start.line
    }

    /// Statement terminator: an explicit `;`, or when enabled an implied
    /// one before `}`, at end of input or after a line break.
    pub fn consume_semicolon(&mut self) -> Result<(), Error> {
        match self.current_token_kind() {
            TokenKind::Semicolon => {
                self.advance();
                Ok(())
            }
            TokenKind::CloseCurly | TokenKind::EOF if self.config.automatic_semicolons => Ok(()),
            _ if self.config.automatic_semicolons && self.newline_before() => Ok(()),
            _ => Err(self.expected(TokenKind::Semicolon)),
        }
    }

    /// Returns the position of the current token.
    pub fn get_position(&self) -> Position {
        self.current_token().span.start
    }

    /// Span from `start` to the end of the last consumed token.
    pub fn span_from(&self, start: Position) -> Span {
        let end = match self.pos {
            0 => start,
            pos => self.tokens[pos - 1].span.end,
        };

        Span { start, end }
    }

    // CHECKPOINTS

    pub fn checkpoint(&mut self) {
        self.checkpoints.push(Checkpoint {
            pos: self.pos,
            arena_len: self.ast.len(),
        });
    }

    /// Pops the newest checkpoint and rewinds to it.
    pub fn restore(&mut self) {
        if let Some(checkpoint) = self.checkpoints.pop() {
            self.pos = checkpoint.pos;
            self.ast.truncate(checkpoint.arena_len);
        }
    }

    /// Pops the newest checkpoint, keeping the progress made since.
    pub fn commit(&mut self) {
        self.checkpoints.pop();
    }

    pub fn checkpoint_count(&self) -> usize {
        self.checkpoints.len()
    }

    /// Runs `production` under a checkpoint, rewinding if it fails.
    ///
    /// # Arguments
    ///
    /// * `production` - The grammar function to attempt
    ///
    /// # Returns
    ///
    /// The production's result. On `Err` the cursor and the arena are back
    /// where they were before the call.
    pub fn speculate<T>(
        &mut self,
        production: impl FnOnce(&mut Parser) -> Result<T, Error>,
    ) -> Result<T, Error> {
        self.checkpoint();
        let result = production(self);
        if result.is_ok() {
            self.commit();
        } else {
            self.restore();
        }
        result
    }

    // GUARDS

    /// Runs `production` one nesting level deeper, failing with
    /// `NestingTooDeep` past the configured limit.
    ///
    /// # Arguments
    ///
    /// * `production` - The grammar function to run at the deeper level
    ///
    /// # Returns
    ///
    /// The production's result, or a fatal `NestingTooDeep` error without
    /// running it.
    pub fn nested<T>(
        &mut self,
        production: impl FnOnce(&mut Parser) -> Result<T, Error>,
    ) -> Result<T, Error> {
        if self.depth >= self.config.max_nesting_depth {
            return Err(Error::fatal(
                ErrorImpl::NestingTooDeep {
                    limit: self.config.max_nesting_depth,
                },
                self.get_position(),
            ));
        }

        self.depth += 1;
        let result = production(self);
        self.depth -= 1;
        result
    }

    /// Fails with an internal error if the cursor is still at `start`.
    pub fn ensure_progress(&self, start: usize, context: &str) -> Result<(), Error> {
        if self.pos == start {
            return Err(Error::fatal(
                ErrorImpl::InfiniteLoop {
                    context: context.to_string(),
                },
                self.get_position(),
            ));
        }

        Ok(())
    }

    // ARENA

    pub fn alloc(&mut self, node: Node) -> NodeId {
        self.ast.alloc(node)
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.ast[id]
    }

    pub fn ast(&self) -> &Ast {
        &self.ast
    }

    // LOOKUPS

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Precedence level and operator of a binary operator token.
    pub fn binary_operator(&self, kind: TokenKind) -> Option<(Precedence, BinaryOperator)> {
        self.binary_lookup.get(&kind).copied()
    }

    /// Registers a binary operator token at a precedence level.
    pub fn binary(&mut self, kind: TokenKind, precedence: Precedence, operator: BinaryOperator) {
        self.binary_lookup.insert(kind, (precedence, operator));
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    pub fn logger(&self) -> &SharedLogger {
        &self.logger
    }

    /// Parses statements until `EOF` and returns the arena with a
    /// `Program` root.
    ///
    /// # Returns
    ///
    /// The finished `Ast`, or the first error that could not be recovered
    /// by backtracking. Failures are logged at `Warn`.
    pub fn parse_program(mut self) -> Result<Ast, Error> {
        let mut body = vec![];

        while !self.at_eof() {
            let start = self.pos;
            match parse_stmt(&mut self) {
                Ok(stmt) => body.push(stmt),
                Err(error) => return Err(self.report(error)),
            }
            if let Err(error) = self.ensure_progress(start, "program") {
                return Err(self.report(error));
            }
        }

        let program = self.alloc(Node::Program(Program {
            span: Span {
                start: Position::null(),
                end: self.get_position(),
            },
            body,
        }));
        self.ast.set_root(program);

        LOG!(
            self.logger,
            Level::Debug,
            "parsed {} statements into {} nodes",
            self.ast.program_body().len(),
            self.ast.len()
        );
        self.logger.flush();

        Ok(self.ast)
    }

    /// Parses a single expression that must span every token.
    pub fn parse_single_expression(mut self) -> Result<Ast, Error> {
        let result = parse_expression(&mut self).and_then(|expression| {
            if self.at_eof() {
                Ok(expression)
            } else {
                Err(self.unexpected("expression"))
            }
        });

        match result {
            Ok(expression) => {
                self.ast.set_root(expression);
                self.logger.flush();
                Ok(self.ast)
            }
            Err(error) => Err(self.report(error)),
        }
    }

    fn report(&self, error: Error) -> Error {
        LOG!(self.logger, Level::Warn, "parse failed: {}", error);
        self.logger.flush();
        error
    }
}

/// Parses a stream of tokens into an Abstract Syntax Tree.
///
/// This is the main entry point for parsing prepared tokens.
///
/// # Arguments
///
/// * `tokens` - Vector of tokens to parse
/// * `config` - Parser settings
/// * `logger` - Logging capability for this parse
///
/// # Returns
///
/// The `Ast` with a `Program` root, or the parse error.
pub fn parse(tokens: Vec<Token>, config: ParserConfig, logger: SharedLogger) -> Result<Ast, Error> {
    Parser::new(tokens, config, logger).parse_program()
}

/// Tokenizes and parses `source` with the default configuration.
pub fn parse_source(source: &str, file: Option<String>) -> Result<Ast, Error> {
    let mut lexer_config = LexerConfig::default();
    if let Some(file) = file {
        lexer_config.file_name = file;
    }

    parse_source_with(source, lexer_config, ParserConfig::default(), logging::noop())
}

pub fn parse_source_with(
    source: &str,
    lexer_config: LexerConfig,
    parser_config: ParserConfig,
    logger: SharedLogger,
) -> Result<Ast, Error> {
    let tokens = tokenize_with(source, lexer_config, logger.clone())?;
    parse(tokens, parser_config, logger)
}

/// Parses `source` as one expression; the root of the returned arena is
/// the expression itself.
pub fn parse_expression_source(source: &str) -> Result<Ast, Error> {
    let tokens = tokenize_with(source, LexerConfig::default(), logging::noop())?;
    Parser::new(tokens, ParserConfig::default(), logging::noop()).parse_single_expression()
}
