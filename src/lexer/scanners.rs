//! Per-category sub-scanners.
//!
//! Every scanner is a pure function from `(source, start offset)` to the
//! offset just past what it consumed plus the token it recognised. None of
//! them touch lexer state, so they compose freely and are tested on their
//! own. Scanners are only called when the byte at `pos` is ASCII, which
//! keeps every slice taken here on a character boundary.

use lazy_static::lazy_static;
use regex::Regex;

use crate::errors::errors::ErrorImpl;

use super::tokens::{Literal, TokenKind, PUNCTUATOR_LOOKUP, RESERVED_LOOKUP};

lazy_static! {
    static ref IDENTIFIER: Regex =
        Regex::new(r"^[A-Za-z$_](?:[A-Za-z0-9$_]|\\u[0-9A-Fa-f]{4})*").unwrap();
    static ref WHITESPACE: Regex = Regex::new(r"^[\s\x{FEFF}]+").unwrap();
}

/// A successfully scanned token: `end` is the offset just past the lexeme.
#[derive(Debug, Clone, PartialEq)]
pub struct Scanned {
    pub end: usize,
    pub kind: TokenKind,
    pub literal: Option<Literal>,
}

impl Scanned {
    pub fn new(end: usize, kind: TokenKind, literal: Option<Literal>) -> Self {
        Scanned { end, kind, literal }
    }
}

/// A scan failure at a byte offset.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanError {
    pub error: ErrorImpl,
    pub offset: usize,
}

impl ScanError {
    fn new(error: ErrorImpl, offset: usize) -> Self {
        ScanError { error, offset }
    }
}

pub type ScanResult<T> = Result<T, ScanError>;

pub fn is_identifier_start(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'$' || byte == b'_'
}

/// Scans whitespace (including line terminators). Returns the end offset,
/// or `pos` itself when there is none.
pub fn scan_whitespace(source: &str, pos: usize) -> usize {
    match WHITESPACE.find(&source[pos..]) {
        Some(found) => pos + found.end(),
        None => pos,
    }
}

/// Scans a `//` or `/* */` comment starting at `pos`. Returns `Ok(None)`
/// when `pos` does not start a comment.
pub fn scan_comment(source: &str, pos: usize) -> ScanResult<Option<usize>> {
    let rest = &source[pos..];

    if rest.starts_with("//") {
        let end = rest.find('\n').unwrap_or(rest.len());
        return Ok(Some(pos + end));
    }

    if rest.starts_with("/*") {
        return match rest[2..].find("*/") {
            Some(close) => Ok(Some(pos + 2 + close + 2)),
            None => Err(ScanError::new(ErrorImpl::UnterminatedComment, pos)),
        };
    }

    Ok(None)
}

/// Scans an identifier or reserved word.
///
/// The whole identifier is matched before the reserved-word lookup, so
/// `instanceof` never stops at `in`. A `\u` escape with fewer than four hex
/// digits ends the identifier just before the backslash. Identifiers
/// written with escapes are never reserved words and carry their decoded
/// name as literal.
pub fn scan_identifier(source: &str, pos: usize) -> Option<Scanned> {
    let found = IDENTIFIER.find(&source[pos..])?;
    let end = pos + found.end();
    let text = found.as_str();

    if text.contains('\\') {
        return Some(Scanned::new(
            end,
            TokenKind::Identifier,
            Some(Literal::String(decode_identifier_escapes(text))),
        ));
    }

    let kind = RESERVED_LOOKUP
        .get(text)
        .copied()
        .unwrap_or(TokenKind::Identifier);

    Some(Scanned::new(end, kind, None))
}

fn decode_identifier_escapes(text: &str) -> String {
    let mut name = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(index) = rest.find("\\u") {
        name.push_str(&rest[..index]);
        let hex = &rest[index + 2..index + 6];
        let decoded = u32::from_str_radix(hex, 16)
            .ok()
            .and_then(char::from_u32)
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        name.push(decoded);
        rest = &rest[index + 6..];
    }

    name.push_str(rest);
    name
}

/// Scans the longest punctuator starting at `pos`.
pub fn scan_punctuator(source: &str, pos: usize) -> Option<Scanned> {
    let bytes = source.as_bytes();
    let candidates = PUNCTUATOR_LOOKUP.get(bytes.get(pos)?)?;

    for (text, kind) in candidates {
        if !bytes[pos..].starts_with(text.as_bytes()) {
            continue;
        }

        // `a?.5:1` is a conditional, not optional chaining.
        if *kind == TokenKind::QuestionDot
            && bytes.get(pos + 2).is_some_and(|b| b.is_ascii_digit())
        {
            continue;
        }

        return Some(Scanned::new(pos + text.len(), *kind, None));
    }

    None
}

// NUMERIC LITERALS

/// Scans a numeric literal starting at `pos`, which holds a digit or a `.`
/// followed by a digit.
pub fn scan_number(source: &str, pos: usize, strict_radix: bool) -> ScanResult<Scanned> {
    let bytes = source.as_bytes();

    if bytes[pos] == b'0' {
        match bytes.get(pos + 1) {
            Some(b'x' | b'X') => return scan_radix_number(source, pos, 16, strict_radix),
            Some(b'b' | b'B') => return scan_radix_number(source, pos, 2, strict_radix),
            Some(b'o' | b'O') => return scan_radix_number(source, pos, 8, strict_radix),
            _ => {}
        }
    }

    scan_decimal_number(source, pos)
}

/// Consumes digits and `_` separators starting at a digit. Every `_` must
/// be followed by a digit.
fn scan_decimal_digits(bytes: &[u8], pos: usize) -> ScanResult<usize> {
    let mut i = pos;

    loop {
        match bytes.get(i) {
            Some(b) if b.is_ascii_digit() => i += 1,
            Some(b'_') => {
                if !bytes.get(i + 1).is_some_and(|b| b.is_ascii_digit()) {
                    return Err(ScanError::new(ErrorImpl::DigitExpected, i + 1));
                }
                i += 1;
            }
            _ => return Ok(i),
        }
    }
}

fn scan_decimal_number(source: &str, pos: usize) -> ScanResult<Scanned> {
    let bytes = source.as_bytes();
    let mut i = pos;
    let mut has_fraction = false;
    let mut has_exponent = false;

    // `0777`-style literal kept for compatibility with sloppy-mode code.
    let leading_zero = bytes[pos] == b'0' && bytes.get(pos + 1).is_some_and(|b| b.is_ascii_digit());
    let legacy_octal = leading_zero && {
        let digits_end = bytes[pos..]
            .iter()
            .position(|b| !b.is_ascii_digit())
            .map_or(bytes.len(), |n| pos + n);
        bytes[pos..digits_end].iter().all(|b| (b'0'..=b'7').contains(b))
    };

    // A separator never follows a leading zero: `0_1`.
    if bytes[pos] == b'0' && bytes.get(pos + 1) == Some(&b'_') {
        return Err(ScanError::new(ErrorImpl::DigitExpected, pos + 1));
    }

    if leading_zero {
        while bytes.get(i).is_some_and(|b| b.is_ascii_digit()) {
            i += 1;
        }
    } else if bytes[i] != b'.' {
        i = scan_decimal_digits(bytes, i)?;
    }

    if !legacy_octal && bytes.get(i) == Some(&b'.') {
        if bytes.get(i + 1) == Some(&b'_') {
            return Err(ScanError::new(ErrorImpl::DigitExpected, i + 1));
        }
        i += 1;
        has_fraction = true;
        if bytes.get(i).is_some_and(|b| b.is_ascii_digit()) {
            i = scan_decimal_digits(bytes, i)?;
        }
    }

    if !legacy_octal && matches!(bytes.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        if !bytes.get(j).is_some_and(|b| b.is_ascii_digit()) {
            return Err(ScanError::new(ErrorImpl::DigitExpected, j));
        }
        i = scan_decimal_digits(bytes, j)?;
        has_exponent = true;
    }

    let lexeme = &source[pos..i];

    if matches!(bytes.get(i), Some(b'n' | b'N')) && !has_fraction && !has_exponent && !leading_zero {
        let end = i + 1;
        check_number_end(source, end)?;
        return Ok(Scanned::new(
            end,
            TokenKind::NumericLiteral,
            Some(Literal::BigInt(strip_separators(lexeme))),
        ));
    }

    check_number_end(source, i)?;

    let value = if legacy_octal {
        radix_value(&lexeme[1..], 8)
    } else {
        strip_separators(lexeme).parse::<f64>().unwrap_or(f64::NAN)
    };

    Ok(Scanned::new(
        i,
        TokenKind::NumericLiteral,
        Some(Literal::Number(value)),
    ))
}

/// Hex, binary and octal literals. Any mix of radix digits and `_` is
/// accepted unless `strict` asks for the decimal separator rule.
fn scan_radix_number(source: &str, pos: usize, radix: u32, strict: bool) -> ScanResult<Scanned> {
    let bytes = source.as_bytes();
    let digits_start = pos + 2;
    let mut i = digits_start;

    while let Some(&b) = bytes.get(i) {
        if b == b'_' {
            if strict {
                if i == digits_start {
                    return Err(ScanError::new(ErrorImpl::DigitExpected, i));
                }
                if !bytes.get(i + 1).is_some_and(|next| (*next as char).is_digit(radix)) {
                    return Err(ScanError::new(ErrorImpl::DigitExpected, i + 1));
                }
            }
            i += 1;
        } else if (b as char).is_digit(radix) {
            i += 1;
        } else {
            break;
        }
    }

    let digits = strip_separators(&source[digits_start..i]);
    if digits.is_empty() {
        return Err(ScanError::new(ErrorImpl::DigitExpected, i));
    }

    if matches!(bytes.get(i), Some(b'n' | b'N')) {
        let end = i + 1;
        check_number_end(source, end)?;
        return Ok(Scanned::new(
            end,
            TokenKind::NumericLiteral,
            Some(Literal::BigInt(strip_separators(&source[pos..i]))),
        ));
    }

    check_number_end(source, i)?;

    Ok(Scanned::new(
        i,
        TokenKind::NumericLiteral,
        Some(Literal::Number(radix_value(&digits, radix))),
    ))
}

/// A complete number may not run straight into an identifier character.
fn check_number_end(source: &str, end: usize) -> ScanResult<()> {
    match source[end..].chars().next() {
        Some(c) if c.is_alphanumeric() || c == '_' || c == '$' => Err(ScanError::new(
            ErrorImpl::NoLiteralAfterNumber { character: c },
            end,
        )),
        _ => Ok(()),
    }
}

fn strip_separators(text: &str) -> String {
    text.chars().filter(|c| *c != '_').collect()
}

fn radix_value(digits: &str, radix: u32) -> f64 {
    digits
        .chars()
        .filter_map(|c| c.to_digit(radix))
        .fold(0.0, |acc, digit| acc * radix as f64 + digit as f64)
}

// STRING LITERALS

/// Scans a single- or double-quoted string starting at the opening quote.
pub fn scan_string(source: &str, pos: usize) -> ScanResult<Scanned> {
    let bytes = source.as_bytes();
    let quote = bytes[pos];
    let mut value = String::new();
    let mut i = pos + 1;
    let mut run_start = i;

    loop {
        match bytes.get(i) {
            None | Some(b'\n' | b'\r') => {
                return Err(ScanError::new(ErrorImpl::UnterminatedString, pos));
            }
            Some(&b) if b == quote => {
                value.push_str(&source[run_start..i]);
                i += 1;
                break;
            }
            Some(b'\\') => {
                value.push_str(&source[run_start..i]);
                if i + 1 >= bytes.len() {
                    return Err(ScanError::new(ErrorImpl::UnterminatedString, pos));
                }
                let (end, decoded) = scan_escape(source, i)?;
                if let Some(decoded) = decoded {
                    value.push_str(&decoded);
                }
                i = end;
                run_start = i;
            }
            Some(_) => i += 1,
        }
    }

    let kind = if quote == b'\'' {
        TokenKind::SingleQuotedString
    } else {
        TokenKind::DoubleQuotedString
    };

    Ok(Scanned::new(i, kind, Some(Literal::String(value))))
}

/// Scans one escape unit starting at the backslash. Returns the offset past
/// it and the decoded text; line continuations decode to nothing.
pub fn scan_escape(source: &str, pos: usize) -> ScanResult<(usize, Option<String>)> {
    let bytes = source.as_bytes();
    let invalid = |end: usize| {
        let end = end.min(source.len());
        let sequence = source
            .get(pos..end)
            .unwrap_or("\\")
            .to_string();
        ScanError::new(ErrorImpl::InvalidEscapeSequence { sequence }, pos)
    };

    let Some(next) = source[pos + 1..].chars().next() else {
        return Err(invalid(pos + 1));
    };

    let simple =
        |c: char| -> ScanResult<(usize, Option<String>)> { Ok((pos + 2, Some(c.to_string()))) };

    match next {
        'n' => simple('\n'),
        't' => simple('\t'),
        'r' => simple('\r'),
        'b' => simple('\u{8}'),
        'f' => simple('\u{c}'),
        'v' => simple('\u{b}'),
        '0' if !bytes.get(pos + 2).is_some_and(|b| b.is_ascii_digit()) => simple('\0'),
        'x' => {
            let value = hex_digits(bytes, pos + 2, 2).ok_or_else(|| invalid(pos + 4))?;
            Ok((pos + 4, Some(char_or_replacement(value).to_string())))
        }
        'u' => {
            let (end, value) = scan_unicode_escape(bytes, pos).ok_or_else(|| invalid(pos + 6))?;

            // A high surrogate followed by an escaped low surrogate encodes
            // one astral code point.
            if (0xD800..0xDC00).contains(&value) {
                if let Some((low_end, low)) = scan_unicode_escape(bytes, end) {
                    if (0xDC00..0xE000).contains(&low) {
                        let combined = 0x10000 + ((value - 0xD800) << 10) + (low - 0xDC00);
                        return Ok((low_end, Some(char_or_replacement(combined).to_string())));
                    }
                }
            }

            Ok((end, Some(char_or_replacement(value).to_string())))
        }
        '\r' => {
            let end = if bytes.get(pos + 2) == Some(&b'\n') {
                pos + 3
            } else {
                pos + 2
            };
            Ok((end, None))
        }
        '\n' => Ok((pos + 2, None)),
        // Any other character, including quotes and the backslash, stands
        // for itself.
        other => Ok((pos + 1 + other.len_utf8(), Some(other.to_string()))),
    }
}

/// Parses `\uHHHH` or `\u{H...}` at `pos` (the backslash).
fn scan_unicode_escape(bytes: &[u8], pos: usize) -> Option<(usize, u32)> {
    if bytes.get(pos) != Some(&b'\\') || bytes.get(pos + 1) != Some(&b'u') {
        return None;
    }

    if bytes.get(pos + 2) == Some(&b'{') {
        let digits_start = pos + 3;
        let mut i = digits_start;
        while bytes.get(i).is_some_and(|b| b.is_ascii_hexdigit()) {
            i += 1;
        }
        if i == digits_start || bytes.get(i) != Some(&b'}') {
            return None;
        }
        let value = hex_digits(bytes, digits_start, i - digits_start)?;
        if value > 0x10FFFF {
            return None;
        }
        return Some((i + 1, value));
    }

    hex_digits(bytes, pos + 2, 4).map(|value| (pos + 6, value))
}

fn hex_digits(bytes: &[u8], pos: usize, count: usize) -> Option<u32> {
    let digits = bytes.get(pos..pos + count)?;
    if count > 8 || !digits.iter().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let text = std::str::from_utf8(digits).ok()?;
    u32::from_str_radix(text, 16).ok()
}

fn char_or_replacement(value: u32) -> char {
    char::from_u32(value).unwrap_or(char::REPLACEMENT_CHARACTER)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn number(source: &str) -> ScanResult<Scanned> {
        scan_number(source, 0, false)
    }

    #[test]
    fn test_scan_identifier_stops_at_incomplete_escape() {
        let scanned = scan_identifier("ab\\u12", 0).unwrap();
        assert_eq!(scanned.end, 2);
        assert_eq!(scanned.kind, TokenKind::Identifier);
        assert_eq!(scanned.literal, None);
    }

    #[test]
    fn test_scan_identifier_decodes_escapes() {
        let scanned = scan_identifier("a\\u0062c = 1", 0).unwrap();
        assert_eq!(scanned.end, 8);
        assert_eq!(scanned.literal, Some(Literal::String("abc".to_string())));
    }

    #[test]
    fn test_escaped_reserved_word_is_identifier() {
        let scanned = scan_identifier("\\u0069f", 0);
        // An identifier cannot start with an escape.
        assert!(scanned.is_none());

        let scanned = scan_identifier("i\\u0066", 0).unwrap();
        assert_eq!(scanned.kind, TokenKind::Identifier);
    }

    #[test]
    fn test_scan_identifier_from_offset() {
        let scanned = scan_identifier("x instanceof y", 2).unwrap();
        assert_eq!(scanned.end, 12);
        assert_eq!(scanned.kind, TokenKind::Instanceof);
    }

    #[test]
    fn test_scan_whitespace_and_comments() {
        assert_eq!(scan_whitespace("  \n\tx", 0), 4);
        assert_eq!(scan_whitespace("x", 0), 0);
        assert_eq!(scan_comment("// note\nx", 0), Ok(Some(7)));
        assert_eq!(scan_comment("/* a */x", 0), Ok(Some(7)));
        assert_eq!(scan_comment("/ 2", 0), Ok(None));
        assert_eq!(
            scan_comment("/* open", 0),
            Err(ScanError::new(ErrorImpl::UnterminatedComment, 0))
        );
    }

    #[test]
    fn test_scan_punctuator_longest_match() {
        let cases = [
            (">>>=", 4, TokenKind::UnsignedShiftRightEquals),
            (">>>", 3, TokenKind::UnsignedShiftRight),
            (">>=", 3, TokenKind::ShiftRightEquals),
            (">=", 2, TokenKind::GreaterEquals),
            (">>", 2, TokenKind::ShiftRight),
            (">", 1, TokenKind::Greater),
            ("...", 3, TokenKind::Ellipsis),
            ("..", 1, TokenKind::Dot),
            ("!==", 3, TokenKind::StrictNotEquals),
            ("**=", 3, TokenKind::StarStarEquals),
            ("??=", 3, TokenKind::NullishEquals),
            ("=>", 2, TokenKind::Arrow),
        ];

        for (source, end, kind) in cases {
            let scanned = scan_punctuator(source, 0).unwrap();
            assert_eq!((scanned.end, scanned.kind), (end, kind), "source: {}", source);
        }
    }

    #[test]
    fn test_question_dot_before_digit() {
        let scanned = scan_punctuator("?.5", 0).unwrap();
        assert_eq!(scanned.kind, TokenKind::Question);

        let scanned = scan_punctuator("?.x", 0).unwrap();
        assert_eq!(scanned.kind, TokenKind::QuestionDot);
    }

    #[test]
    fn test_scan_decimal_numbers() {
        assert_eq!(number("42").unwrap().literal, Some(Literal::Number(42.0)));
        assert_eq!(number("3.14").unwrap().literal, Some(Literal::Number(3.14)));
        assert_eq!(number("1_000_000").unwrap().literal, Some(Literal::Number(1_000_000.0)));
        assert_eq!(number("1e3").unwrap().literal, Some(Literal::Number(1000.0)));
        assert_eq!(number("2.5E-1").unwrap().literal, Some(Literal::Number(0.25)));
        assert_eq!(number("1.").unwrap().end, 2);
        assert_eq!(number(".5").unwrap().literal, Some(Literal::Number(0.5)));
    }

    #[test]
    fn test_second_dot_ends_number() {
        let scanned = number("1.2.3").unwrap();
        assert_eq!(scanned.end, 3);
    }

    #[test]
    fn test_legacy_octal() {
        let scanned = number("0777").unwrap();
        assert_eq!(scanned.end, 4);
        assert_eq!(scanned.literal, Some(Literal::Number(511.0)));

        let scanned = number("089").unwrap();
        assert_eq!(scanned.literal, Some(Literal::Number(89.0)));
    }

    #[test]
    fn test_radix_numbers() {
        let scanned = number("0x1A_2B").unwrap();
        assert_eq!(scanned.end, 7);
        assert_eq!(scanned.literal, Some(Literal::Number(0x1A2B as f64)));

        assert_eq!(number("0b1010").unwrap().literal, Some(Literal::Number(10.0)));
        assert_eq!(number("0O17").unwrap().literal, Some(Literal::Number(15.0)));
    }

    #[test]
    fn test_radix_separators_are_permissive_by_default() {
        assert!(scan_number("0x_1", 0, false).is_ok());
        assert!(scan_number("0b1__0", 0, false).is_ok());

        assert_eq!(
            scan_number("0x_1", 0, true),
            Err(ScanError::new(ErrorImpl::DigitExpected, 2))
        );
        assert_eq!(
            scan_number("0b1__0", 0, true),
            Err(ScanError::new(ErrorImpl::DigitExpected, 4))
        );
        assert!(scan_number("0b1_0", 0, true).is_ok());
    }

    #[test]
    fn test_radix_prefix_without_digits() {
        assert_eq!(number("0x"), Err(ScanError::new(ErrorImpl::DigitExpected, 2)));
        assert_eq!(number("0xG"), Err(ScanError::new(ErrorImpl::DigitExpected, 2)));
    }

    #[test]
    fn test_bigint_suffix() {
        assert_eq!(number("10n").unwrap().literal, Some(Literal::BigInt("10".to_string())));
        assert_eq!(number("0n").unwrap().end, 2);
        assert_eq!(
            number("0xFF_FFn").unwrap().literal,
            Some(Literal::BigInt("0xFFFF".to_string()))
        );
        assert_eq!(
            number("1.5n"),
            Err(ScanError::new(ErrorImpl::NoLiteralAfterNumber { character: 'n' }, 3))
        );
        assert_eq!(
            number("1e3n"),
            Err(ScanError::new(ErrorImpl::NoLiteralAfterNumber { character: 'n' }, 3))
        );
    }

    #[test]
    fn test_no_literal_after_number() {
        assert_eq!(
            number("0a01"),
            Err(ScanError::new(ErrorImpl::NoLiteralAfterNumber { character: 'a' }, 1))
        );
        assert_eq!(
            number("0b102"),
            Err(ScanError::new(ErrorImpl::NoLiteralAfterNumber { character: '2' }, 4))
        );
        assert_eq!(
            number("3in"),
            Err(ScanError::new(ErrorImpl::NoLiteralAfterNumber { character: 'i' }, 1))
        );
    }

    #[test]
    fn test_digit_expected() {
        assert_eq!(number("10e"), Err(ScanError::new(ErrorImpl::DigitExpected, 3)));
        assert_eq!(number("10e+"), Err(ScanError::new(ErrorImpl::DigitExpected, 4)));
        assert_eq!(number("10_"), Err(ScanError::new(ErrorImpl::DigitExpected, 3)));
        assert_eq!(number("1__0"), Err(ScanError::new(ErrorImpl::DigitExpected, 2)));
        assert_eq!(number("1._5"), Err(ScanError::new(ErrorImpl::DigitExpected, 2)));
        assert_eq!(number("1e_5"), Err(ScanError::new(ErrorImpl::DigitExpected, 2)));
    }

    #[test]
    fn test_scan_string_escapes() {
        let scanned = scan_string(r#""a\n\t\x41B\u{43}\'""#, 0).unwrap();
        assert_eq!(scanned.kind, TokenKind::DoubleQuotedString);
        assert_eq!(scanned.literal, Some(Literal::String("a\n\tABC'".to_string())));

        let scanned = scan_string(r"'\0\q'", 0).unwrap();
        assert_eq!(scanned.kind, TokenKind::SingleQuotedString);
        assert_eq!(scanned.literal, Some(Literal::String("\0q".to_string())));
    }

    #[test]
    fn test_scan_string_surrogate_pair() {
        let scanned = scan_string(r#""\uD83D\uDE00""#, 0).unwrap();
        assert_eq!(scanned.literal, Some(Literal::String("\u{1F600}".to_string())));
    }

    #[test]
    fn test_scan_string_line_continuation() {
        let scanned = scan_string("'a\\\nb'", 0).unwrap();
        assert_eq!(scanned.literal, Some(Literal::String("ab".to_string())));
    }

    #[test]
    fn test_scan_string_keeps_other_quote_kind() {
        let scanned = scan_string(r#"'say "hi"'"#, 0).unwrap();
        assert_eq!(scanned.end, 10);
        assert_eq!(scanned.literal, Some(Literal::String("say \"hi\"".to_string())));
    }

    #[test]
    fn test_unterminated_string() {
        assert_eq!(
            scan_string("\"abc", 0),
            Err(ScanError::new(ErrorImpl::UnterminatedString, 0))
        );
        assert_eq!(
            scan_string("'abc\\", 0),
            Err(ScanError::new(ErrorImpl::UnterminatedString, 0))
        );
        assert_eq!(
            scan_string("'abc\ndef'", 0),
            Err(ScanError::new(ErrorImpl::UnterminatedString, 0))
        );
    }

    #[test]
    fn test_invalid_escape_sequence() {
        let error = scan_string(r#""\xZZ""#, 0).unwrap_err();
        assert_eq!(error.offset, 1);
        assert!(matches!(error.error, ErrorImpl::InvalidEscapeSequence { .. }));

        let error = scan_string(r#""\u12""#, 0).unwrap_err();
        assert_eq!(error.offset, 1);
    }
}
