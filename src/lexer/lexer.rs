use crate::{
    config::LexerConfig,
    errors::errors::{Error, ErrorImpl},
    logging::{self, Level, SharedLogger},
    Position, Span, LOG, MK_TOKEN,
};

use super::{
    scanners::{
        is_identifier_start, scan_comment, scan_identifier, scan_number, scan_punctuator,
        scan_string, scan_whitespace, ScanError, ScanResult, Scanned,
    },
    tokens::{Token, TokenKind},
};

/// On-demand tokenizer over one source buffer.
///
/// The lexer keeps two cursors: `segment_start`, where the token being
/// scanned begins, and `head`, how far scanning has got. Every token's
/// lexeme is exactly `source[segment_start..head]` at the moment it is
/// produced.
pub struct Lexer<'src> {
    source: &'src str,
    segment_start: usize,
    head: usize,
    /// Line/column of `head`.
    position: Position,
    current: Token,
    errors: Vec<Error>,
    /// Set after the first error; every later token is `Unknown`.
    failed: Option<Token>,
    config: LexerConfig,
    logger: SharedLogger,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Lexer::with_config(source, LexerConfig::default(), logging::noop())
    }

    pub fn with_config(source: &'src str, config: LexerConfig, logger: SharedLogger) -> Self {
        Lexer {
            source,
            segment_start: 0,
            head: 0,
            position: Position::null(),
            current: MK_TOKEN!(TokenKind::BOF, String::new(), None, Span::default()),
            errors: vec![],
            failed: None,
            config,
            logger,
        }
    }

    /// Scans and returns the next token. After the end of input every call
    /// returns `EOF`; after an error every call returns `Unknown` and the
    /// error is in [`Lexer::errors`].
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Token {
        let token = self.scan_token();
        self.current = token.clone();
        token
    }

    /// The last token returned by [`Lexer::next`], or `BOF` before the first
    /// call.
    pub fn current(&self) -> &Token {
        &self.current
    }

    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn segment_start(&self) -> usize {
        self.segment_start
    }

    pub fn head(&self) -> usize {
        self.head
    }

    pub fn at_eof(&self) -> bool {
        self.head >= self.source.len()
    }

    /// Scans to the end of input. Returns every token produced before the
    /// first error (ending with `EOF` when there was none) and the errors.
    pub fn tokenize_all(mut self) -> (Vec<Token>, Vec<Error>) {
        let mut tokens = vec![];

        loop {
            let token = self.next();
            match token.kind {
                TokenKind::EOF => {
                    tokens.push(token);
                    break;
                }
                TokenKind::Unknown => break,
                _ => tokens.push(token),
            }
        }

        LOG!(
            self.logger,
            Level::Debug,
            "{}: tokenized {} tokens, {} errors",
            self.config.file_name,
            tokens.len(),
            self.errors.len()
        );
        self.logger.flush();

        (tokens, self.errors)
    }

    fn scan_token(&mut self) -> Token {
        if let Some(unknown) = &self.failed {
            return unknown.clone();
        }

        loop {
            self.segment_start = self.head;
            let start = self.position;

            if self.at_eof() {
                return MK_TOKEN!(TokenKind::EOF, String::new(), None, Span { start, end: start });
            }

            let scanned = match self.dispatch() {
                Ok(scanned) => scanned,
                Err(error) => return self.fail(error),
            };

            if scanned.end <= self.head {
                let error = ErrorImpl::InfiniteLoop {
                    context: format!("lexer dispatch at offset {}", self.head),
                };
                return self.fail(ScanError {
                    error,
                    offset: self.head,
                });
            }

            self.advance_to(scanned.end);

            if scanned.kind == TokenKind::Whitespace && !self.config.emit_whitespace {
                continue;
            }

            return MK_TOKEN!(
                scanned.kind,
                self.source[self.segment_start..self.head].to_string(),
                scanned.literal,
                Span {
                    start,
                    end: self.position
                }
            );
        }
    }

    /// Chooses the sub-scanner for the character at `head`.
    fn dispatch(&self) -> ScanResult<Scanned> {
        let source = self.source;
        let pos = self.head;
        let bytes = source.as_bytes();

        match bytes[pos] {
            b'"' | b'\'' => scan_string(source, pos),
            b'0'..=b'9' => scan_number(source, pos, self.config.strict_radix_literals),
            b'.' if bytes.get(pos + 1).is_some_and(|b| b.is_ascii_digit()) => {
                scan_number(source, pos, self.config.strict_radix_literals)
            }
            b'/' => match scan_comment(source, pos)? {
                Some(end) => Ok(Scanned::new(end, TokenKind::Whitespace, None)),
                None => scan_punctuator(source, pos).ok_or_else(|| self.unexpected_character(pos)),
            },
            byte if is_identifier_start(byte) => {
                scan_identifier(source, pos).ok_or_else(|| self.unexpected_character(pos))
            }
            _ => {
                let end = scan_whitespace(source, pos);
                if end > pos {
                    return Ok(Scanned::new(end, TokenKind::Whitespace, None));
                }

                scan_punctuator(source, pos).ok_or_else(|| self.unexpected_character(pos))
            }
        }
    }

    fn unexpected_character(&self, pos: usize) -> ScanError {
        let character = self.source[pos..].chars().next().unwrap_or('\0');
        ScanError {
            error: ErrorImpl::UnexpectedCharacter { character },
            offset: pos,
        }
    }

    fn fail(&mut self, error: ScanError) -> Token {
        let start = advance_position(self.position, &self.source[self.head..error.offset]);
        let error = Error::new(error.error, start);

        LOG!(self.logger, Level::Warn, "{}: {}", self.config.file_name, error);

        let offset = start.offset as usize;
        let end = self.source[offset..]
            .chars()
            .next()
            .map_or(offset, |c| offset + c.len_utf8());
        let unknown = MK_TOKEN!(
            TokenKind::Unknown,
            self.source[offset..end].to_string(),
            None,
            Span {
                start,
                end: advance_position(start, &self.source[offset..end])
            }
        );

        self.errors.push(error);
        self.failed = Some(unknown.clone());
        unknown
    }

    fn advance_to(&mut self, end: usize) {
        self.position = advance_position(self.position, &self.source[self.head..end]);
        self.head = end;
    }
}

fn advance_position(mut position: Position, text: &str) -> Position {
    for c in text.chars() {
        if c == '\n' {
            position.line += 1;
            position.column = 1;
        } else {
            position.column += 1;
        }
    }
    position.offset += text.len() as u32;
    position
}

/// Tokenizes a whole source string. Returns the first lexical error, if
/// any; use [`Lexer::tokenize_all`] to keep the tokens produced before it.
pub fn tokenize(source: &str, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut config = LexerConfig::default();
    if let Some(file) = file {
        config.file_name = file;
    }

    tokenize_with(source, config, logging::noop())
}

pub fn tokenize_with(
    source: &str,
    config: LexerConfig,
    logger: SharedLogger,
) -> Result<Vec<Token>, Error> {
    let (tokens, errors) = Lexer::with_config(source, config, logger).tokenize_all();

    match errors.into_iter().next() {
        Some(error) => Err(error),
        None => Ok(tokens),
    }
}
