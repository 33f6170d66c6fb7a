//! Options for the lexer and the parser.
//!
//! Both structs are plain values with `Default` implementations and
//! builder-style setters:
//!
//! ```ignore
//! let config = LexerConfig::default()
//!     .with_file_name("input.js")
//!     .strict_radix_literals(true);
//! ```

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexerConfig {
    /// Name reported in log records and diagnostics.
    pub file_name: String,
    /// Emit `Whitespace` tokens for whitespace and comments instead of
    /// skipping them.
    pub emit_whitespace: bool,
    /// Apply the decimal separator rule to hex, binary and octal literals:
    /// every `_` must sit between two digits. Off by default, which accepts
    /// e.g. `0x_1` and `0b1__0`.
    pub strict_radix_literals: bool,
}

impl Default for LexerConfig {
    fn default() -> Self {
        LexerConfig {
            file_name: String::from("shell"),
            emit_whitespace: false,
            strict_radix_literals: false,
        }
    }
}

impl LexerConfig {
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    pub fn emit_whitespace(mut self, emit: bool) -> Self {
        self.emit_whitespace = emit;
        self
    }

    pub fn strict_radix_literals(mut self, strict: bool) -> Self {
        self.strict_radix_literals = strict;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Deepest expression/statement nesting accepted before the parse is
    /// aborted with `NestingTooDeep`. One level of expression nesting costs
    /// a frame per precedence level, so the default stays within the 2 MiB
    /// stack of a spawned thread in an unoptimised build.
    pub max_nesting_depth: usize,
    /// Accept a missing `;` before `}`, at end of input, or after a line
    /// break. When off every statement needs its semicolon.
    pub automatic_semicolons: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            max_nesting_depth: 48,
            automatic_semicolons: true,
        }
    }
}

impl ParserConfig {
    pub fn max_nesting_depth(mut self, depth: usize) -> Self {
        self.max_nesting_depth = depth;
        self
    }

    pub fn automatic_semicolons(mut self, enabled: bool) -> Self {
        self.automatic_semicolons = enabled;
        self
    }
}
