//! The tokenizer.
//!
//! A `Tokenizer` walks the source once and hands out tokens on demand. Scan
//! state lives in plain fields: the cursor, a stack of template modes and
//! whether the previous token was a `.`. After the end-of-input token, or after a fatal
//! error, the tokenizer yields nothing more.

use crate::char_codes::*;
use crate::cursor::Cursor;
use crate::token::{Token, TokenPosition, TokenValue};
use crate::token_type::{TokenKind, TokenType};
use jstok_core::text::SourceLocation;
use jstok_diagnostics::{messages, Diagnostic, DiagnosticCollection, NumericLiteralIssue, ScanError};
use jstok_options::ScannerOptions;
use std::iter::FusedIterator;
use tracing::{debug, trace};

/// Observable state of a [`Tokenizer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    Scanning,
    InTemplate,
    Done,
}

/// One level of template nesting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Between backticks. `start` is the opening backtick.
    Template { start: SourceLocation },
    /// Inside `${ ... }`. `braces` counts open `{` when braces are balanced.
    Expression { braces: u32 },
}

/// Converts source text into a stream of tokens.
pub struct Tokenizer {
    cursor: Cursor,
    options: ScannerOptions,
    /// Innermost mode last. Empty while scanning ordinary code.
    modes: Vec<Mode>,
    /// The last token handed out was the `.` punctuation.
    previous_was_dot: bool,
    /// Set once the end-of-input token or an error has been returned.
    finished: bool,
    /// Warnings for malformed input that was accepted.
    diagnostics: DiagnosticCollection,
}

impl Tokenizer {
    /// Create a tokenizer with the default (lenient) options.
    pub fn new(source: &str) -> Result<Self, ScanError> {
        Self::with_options(source, ScannerOptions::default())
    }

    pub fn with_options(source: &str, options: ScannerOptions) -> Result<Self, ScanError> {
        if source.is_empty() {
            return Err(ScanError::EmptySourceInput);
        }
        debug!(len = source.len(), lenient = options.is_lenient(), "creating tokenizer");
        Ok(Self {
            cursor: Cursor::new(source),
            options,
            modes: Vec::new(),
            previous_was_dot: false,
            finished: false,
            diagnostics: DiagnosticCollection::new(),
        })
    }

    pub fn state(&self) -> ScanState {
        if self.finished {
            ScanState::Done
        } else if self.modes.is_empty() {
            ScanState::Scanning
        } else {
            ScanState::InTemplate
        }
    }

    pub fn options(&self) -> &ScannerOptions {
        &self.options
    }

    /// Get the accumulated diagnostics.
    pub fn diagnostics(&self) -> &DiagnosticCollection {
        &self.diagnostics
    }

    /// Take the accumulated diagnostics, leaving an empty collection.
    pub fn take_diagnostics(&mut self) -> DiagnosticCollection {
        std::mem::take(&mut self.diagnostics)
    }

    /// The remaining tokens, ending with exactly one end-of-input token.
    pub fn tokenize(&mut self) -> Tokens<'_> {
        Tokens { tokenizer: self }
    }

    /// Scan the next token. Returns `None` once scanning is done.
    pub fn next_token(&mut self) -> Option<Result<Token, ScanError>> {
        if self.finished {
            return None;
        }
        let result = self.step();
        match &result {
            Ok(token) => {
                trace!(token = %token, "scanned");
                if token.is_eof() {
                    self.finished = true;
                    self.modes.clear();
                }
                self.previous_was_dot = token.is_punctuation(".");
            }
            Err(err) => {
                debug!(error = %err, "scan aborted");
                self.finished = true;
            }
        }
        Some(result)
    }

    fn step(&mut self) -> Result<Token, ScanError> {
        match self.modes.last().copied() {
            None => self.scan_code(),
            Some(Mode::Template { .. }) => self.scan_template_part(),
            Some(Mode::Expression { braces }) => self.scan_expression(braces),
        }
    }

    // ========================================================================
    // Modes
    // ========================================================================

    fn scan_code(&mut self) -> Result<Token, ScanError> {
        self.skip_trivia()?;
        match self.cursor.current() {
            None => Ok(Token::eof()),
            Some(BACKTICK) => Ok(self.begin_template()),
            Some(_) => self.read_token(),
        }
    }

    fn scan_expression(&mut self, braces: u32) -> Result<Token, ScanError> {
        self.skip_trivia()?;
        let balance = self.options.balance_template_braces;
        match self.cursor.current() {
            None => self.unterminated_template(),
            Some(CLOSE_BRACE) if braces == 0 => {
                let start = self.cursor.location();
                self.cursor.advance();
                self.modes.pop();
                Ok(self.token(TokenKind::TemplateExpressionEnd, "}", start))
            }
            Some(CLOSE_BRACE) => {
                self.set_expression_braces(braces - 1);
                self.read_token()
            }
            Some(OPEN_BRACE) if balance => {
                self.set_expression_braces(braces + 1);
                self.read_token()
            }
            Some(BACKTICK) if balance => Ok(self.begin_template()),
            Some(_) => self.read_token(),
        }
    }

    fn set_expression_braces(&mut self, braces: u32) {
        if let Some(Mode::Expression { braces: current }) = self.modes.last_mut() {
            *current = braces;
        }
    }

    fn begin_template(&mut self) -> Token {
        let start = self.cursor.location();
        self.cursor.advance();
        self.modes.push(Mode::Template { start });
        self.token(TokenKind::TemplateStart, "`", start)
    }

    fn scan_template_part(&mut self) -> Result<Token, ScanError> {
        let start = self.cursor.location();
        match self.cursor.current() {
            None => self.unterminated_template(),
            Some(BACKTICK) => {
                self.cursor.advance();
                self.modes.pop();
                Ok(self.token(TokenKind::TemplateEnd, "`", start))
            }
            Some(DOLLAR_SIGN) if self.cursor.peek(1) == Some(OPEN_BRACE) => {
                self.cursor.advance_by(2);
                self.modes.push(Mode::Expression { braces: 0 });
                Ok(self.token(TokenKind::TemplateExpressionStart, "${", start))
            }
            Some(_) => Ok(self.read_template_content(start)),
        }
    }

    /// Read literal template text up to the closing backtick, the next `${`
    /// or end of input. Never empty: the caller has seen a content character.
    fn read_template_content(&mut self, start: SourceLocation) -> Token {
        let mut content = String::new();
        while let Some(ch) = self.cursor.current() {
            match ch {
                BACKTICK => break,
                DOLLAR_SIGN if self.cursor.peek(1) == Some(OPEN_BRACE) => break,
                BACKSLASH => {
                    self.cursor.advance();
                    if let Some(escaped) = self.cursor.advance() {
                        content.push(unescape(escaped));
                    }
                }
                _ => {
                    content.push(ch);
                    self.cursor.advance();
                }
            }
        }
        self.token(TokenKind::TemplateContent, content, start)
    }

    // ========================================================================
    // Trivia
    // ========================================================================

    fn skip_trivia(&mut self) -> Result<(), ScanError> {
        loop {
            match self.cursor.current() {
                Some(ch) if is_white_space(ch) => {
                    self.cursor.advance();
                }
                Some(SLASH) => match self.cursor.peek(1) {
                    Some(SLASH) => self.skip_line_comment(),
                    Some(ASTERISK) => self.skip_block_comment()?,
                    _ => return Ok(()),
                },
                _ => return Ok(()),
            }
        }
    }

    fn skip_line_comment(&mut self) {
        while let Some(ch) = self.cursor.current() {
            if is_line_break(ch) {
                break;
            }
            self.cursor.advance();
        }
    }

    fn skip_block_comment(&mut self) -> Result<(), ScanError> {
        let start = self.cursor.location();
        self.cursor.advance_by(2);
        while let Some(ch) = self.cursor.current() {
            if ch == ASTERISK && self.cursor.peek(1) == Some(SLASH) {
                self.cursor.advance_by(2);
                return Ok(());
            }
            self.cursor.advance();
        }

        if self.options.error_on_unterminated_comment {
            return Err(ScanError::UnterminatedComment { location: start });
        }
        debug!(at = %start, "unterminated block comment consumed");
        self.diagnostics.add(Diagnostic::at(
            start,
            &messages::UNTERMINATED_BLOCK_COMMENT_CONSUMED,
            &[],
        ));
        Ok(())
    }

    // ========================================================================
    // Single tokens
    // ========================================================================

    fn read_token(&mut self) -> Result<Token, ScanError> {
        let start = self.cursor.location();
        let Some(ch) = self.cursor.current() else {
            return Ok(Token::eof());
        };

        if is_identifier_start(ch) {
            return Ok(self.read_identifier(start));
        }
        if is_digit(ch) {
            return self.read_number(start);
        }
        if is_punctuation(ch) {
            self.cursor.advance();
            return Ok(self.token(TokenKind::Punctuation, ch.to_string(), start));
        }
        if is_operator_char(ch) {
            return Ok(self.read_operator(start));
        }
        match ch {
            DOT => self.read_dot(start),
            DOUBLE_QUOTE | SINGLE_QUOTE => self.read_string(start, ch),
            _ => self.unrecognized_character(start, ch),
        }
    }

    fn read_identifier(&mut self, start: SourceLocation) -> Token {
        let mut text = String::new();
        while let Some(ch) = self.cursor.current() {
            if !is_identifier_part(ch) {
                break;
            }
            text.push(ch);
            self.cursor.advance();
        }

        let token_type = TokenType::from_identifier_text(&text);
        let value = match token_type.kind {
            TokenKind::True => TokenValue::Boolean(true),
            TokenKind::False => TokenValue::Boolean(false),
            _ => TokenValue::String(text),
        };
        self.token_between(token_type, value, start)
    }

    /// A maximal run of operator characters, whether or not it spells a
    /// real operator.
    fn read_operator(&mut self, start: SourceLocation) -> Token {
        let mut run = String::new();
        while let Some(ch) = self.cursor.current() {
            if !is_operator_char(ch) {
                break;
            }
            run.push(ch);
            self.cursor.advance();
        }
        self.token(TokenKind::Operator, run, start)
    }

    fn read_dot(&mut self, start: SourceLocation) -> Result<Token, ScanError> {
        if self.cursor.peek(1).is_some_and(is_digit) {
            return self.read_decimal(start);
        }
        if self.cursor.peek(1) == Some(DOT) && self.cursor.peek(2) == Some(DOT) {
            self.cursor.advance_by(3);
            return Ok(self.token(TokenKind::Punctuation, "...", start));
        }
        self.cursor.advance();
        Ok(self.token(TokenKind::Punctuation, ".", start))
    }

    // ========================================================================
    // Numbers
    // ========================================================================

    fn read_number(&mut self, start: SourceLocation) -> Result<Token, ScanError> {
        let Some(first) = self.cursor.current() else {
            return Ok(Token::eof());
        };
        match self.cursor.peek(1) {
            Some('x' | 'X') if first == '0' => self.read_hex(start),
            Some(suffix @ ('x' | 'X')) => Err(ScanError::InvalidNumericLiteral {
                issue: NumericLiteralIssue::RadixPrefixAfterNonZeroDigit { digit: first, suffix },
                location: start,
            }),
            _ => self.read_decimal(start),
        }
    }

    fn read_hex(&mut self, start: SourceLocation) -> Result<Token, ScanError> {
        if self.previous_was_dot {
            return Err(ScanError::InvalidNumericLiteral {
                issue: NumericLiteralIssue::HexAfterDot,
                location: start,
            });
        }

        self.cursor.advance_by(2);
        let mut value = 0f64;
        let mut digits = 0usize;
        while let Some(ch) = self.cursor.current() {
            if ch == UNDERSCORE {
                self.cursor.advance();
                continue;
            }
            let Some(digit) = ch.to_digit(16) else {
                break;
            };
            value = value * 16.0 + f64::from(digit);
            digits += 1;
            self.cursor.advance();
        }

        if digits == 0 {
            value = f64::NAN;
            self.incomplete_number(NumericLiteralIssue::MissingHexDigits, start, value)?;
        }
        Ok(self.token_between(TokenType::number(true), TokenValue::Number(value), start))
    }

    /// Digits, at most one `.` before the exponent, and at most one exponent
    /// with an optional sign. `_` separators are dropped.
    fn read_decimal(&mut self, start: SourceLocation) -> Result<Token, ScanError> {
        let mut text = String::new();
        let mut seen_dot = false;
        let mut seen_exponent = false;
        let mut incomplete = None;

        while let Some(ch) = self.cursor.current() {
            match ch {
                c if is_digit(c) => text.push(c),
                UNDERSCORE => {}
                DOT if !seen_dot && !seen_exponent => {
                    seen_dot = true;
                    text.push(DOT);
                }
                'e' | 'E' if !seen_exponent => {
                    seen_exponent = true;
                    let mantissa_len = text.len();
                    text.push('e');
                    self.cursor.advance();
                    if let Some(sign @ ('+' | '-')) = self.cursor.current() {
                        text.push(sign);
                        self.cursor.advance();
                    }
                    if !self.cursor.current().is_some_and(is_digit) {
                        // The marker stays in the span but not in the value.
                        text.truncate(mantissa_len);
                        incomplete = Some(NumericLiteralIssue::MissingExponentDigits);
                        break;
                    }
                    continue;
                }
                _ => break,
            }
            self.cursor.advance();
        }

        let value: f64 = text.parse().map_err(|_| ScanError::InvalidNumericLiteral {
            issue: NumericLiteralIssue::Malformed,
            location: start,
        })?;
        if let Some(issue) = incomplete {
            self.incomplete_number(issue, start, value)?;
        }
        Ok(self.token_between(TokenType::number(false), TokenValue::Number(value), start))
    }

    // ========================================================================
    // Strings
    // ========================================================================

    /// Read a quoted string. The token span covers the text between the
    /// quotes; the value has escapes resolved.
    fn read_string(&mut self, quote_start: SourceLocation, quote: char) -> Result<Token, ScanError> {
        self.cursor.advance();
        let start = self.cursor.location();
        let mut value = String::new();

        loop {
            match self.cursor.current() {
                None => return self.unterminated_string(quote_start, start, value),
                Some(ch) if self.closes_string(ch, quote) => {
                    let end = self.cursor.location();
                    self.cursor.advance();
                    return Ok(Token::new(
                        TokenType::new(TokenKind::String),
                        value,
                        TokenPosition::between(start, end),
                    ));
                }
                Some(BACKSLASH) => {
                    self.cursor.advance();
                    if let Some(escaped) = self.cursor.advance() {
                        value.push(unescape(escaped));
                    }
                }
                Some(ch) => {
                    value.push(ch);
                    self.cursor.advance();
                }
            }
        }
    }

    fn closes_string(&self, ch: char, quote: char) -> bool {
        if self.options.match_quotes {
            ch == quote
        } else {
            ch == DOUBLE_QUOTE || ch == SINGLE_QUOTE
        }
    }

    // ========================================================================
    // Malformed input
    // ========================================================================

    fn unterminated_string(
        &mut self,
        quote_start: SourceLocation,
        start: SourceLocation,
        value: String,
    ) -> Result<Token, ScanError> {
        if self.options.error_on_unterminated_literal {
            return Err(ScanError::UnterminatedStringLiteral { location: quote_start });
        }
        debug!(at = %quote_start, "unterminated string closed at end of input");
        self.diagnostics.add(Diagnostic::at(
            quote_start,
            &messages::UNTERMINATED_STRING_CLOSED_AT_END_OF_INPUT,
            &[],
        ));
        Ok(Token::new(
            TokenType::new(TokenKind::String),
            value,
            TokenPosition::between(start, self.cursor.location()),
        ))
    }

    fn unterminated_template(&mut self) -> Result<Token, ScanError> {
        let location = self
            .modes
            .iter()
            .rev()
            .find_map(|mode| match mode {
                Mode::Template { start } => Some(*start),
                Mode::Expression { .. } => None,
            })
            .unwrap_or_else(|| self.cursor.location());

        if self.options.error_on_unterminated_literal {
            return Err(ScanError::UnterminatedTemplateLiteral { location });
        }
        debug!(at = %location, "unterminated template closed at end of input");
        self.diagnostics.add(Diagnostic::at(
            location,
            &messages::UNTERMINATED_TEMPLATE_CLOSED_AT_END_OF_INPUT,
            &[],
        ));
        self.modes.clear();
        Ok(Token::eof())
    }

    /// `0x` without digits, or an exponent marker without digits.
    fn incomplete_number(
        &mut self,
        issue: NumericLiteralIssue,
        start: SourceLocation,
        value: f64,
    ) -> Result<(), ScanError> {
        if self.options.error_on_incomplete_number {
            return Err(ScanError::InvalidNumericLiteral { issue, location: start });
        }
        debug!(at = %start, %issue, value, "incomplete number accepted");
        let value = value.to_string();
        self.diagnostics.add(Diagnostic::at(
            start,
            &messages::INCOMPLETE_NUMERIC_LITERAL_READ_AS_0,
            &[&value],
        ));
        Ok(())
    }

    fn unrecognized_character(&mut self, start: SourceLocation, ch: char) -> Result<Token, ScanError> {
        if self.options.error_on_unrecognized_character {
            return Err(ScanError::UnexpectedCharacter {
                character: ch,
                location: start,
            });
        }
        debug!(at = %start, character = %ch, "scanning stopped at unrecognized character");
        let character = ch.to_string();
        self.diagnostics.add(Diagnostic::at(
            start,
            &messages::SCANNING_STOPPED_AT_CHARACTER_0,
            &[&character],
        ));
        Ok(Token::eof())
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    /// A token of `kind` from `start` to the cursor.
    fn token(&self, kind: TokenKind, value: impl Into<TokenValue>, start: SourceLocation) -> Token {
        self.token_between(TokenType::new(kind), value, start)
    }

    fn token_between(
        &self,
        token_type: TokenType,
        value: impl Into<TokenValue>,
        start: SourceLocation,
    ) -> Token {
        Token::new(token_type, value, TokenPosition::between(start, self.cursor.location()))
    }
}

/// Iterator over the remaining tokens of a [`Tokenizer`].
pub struct Tokens<'a> {
    tokenizer: &'a mut Tokenizer,
}

impl Iterator for Tokens<'_> {
    type Item = Result<Token, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.tokenizer.next_token()
    }
}

impl FusedIterator for Tokens<'_> {}

/// Scan a whole source with the default options.
pub fn scan_all(source: &str) -> Result<Vec<Token>, ScanError> {
    scan_all_with_options(source, ScannerOptions::default())
}

/// Scan a whole source. Warnings are discarded; use a [`Tokenizer`] to
/// inspect them.
pub fn scan_all_with_options(source: &str, options: ScannerOptions) -> Result<Vec<Token>, ScanError> {
    let mut tokenizer = Tokenizer::with_options(source, options)?;
    tokenizer.tokenize().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        scan_all(source).unwrap().iter().map(Token::kind).collect()
    }

    #[test]
    fn test_empty_source_is_rejected() {
        assert_eq!(Tokenizer::new("").err(), Some(ScanError::EmptySourceInput));
    }

    #[test]
    fn test_states() {
        let mut tokenizer = Tokenizer::new("`a${b}`").unwrap();
        assert_eq!(tokenizer.state(), ScanState::Scanning);
        tokenizer.next_token();
        assert_eq!(tokenizer.state(), ScanState::InTemplate);
        let rest: Vec<_> = tokenizer.tokenize().collect::<Result<_, _>>().unwrap();
        assert_eq!(rest.last().map(Token::kind), Some(TokenKind::Eof));
        assert_eq!(tokenizer.state(), ScanState::Done);
        assert!(tokenizer.next_token().is_none());
    }

    #[test]
    fn test_second_drain_is_empty() {
        let mut tokenizer = Tokenizer::new("a b").unwrap();
        assert_eq!(tokenizer.tokenize().count(), 3);
        assert_eq!(tokenizer.tokenize().count(), 0);
    }

    #[test]
    fn test_identifier_keyword_and_boolean() {
        let tokens = scan_all("let $x = true").unwrap();
        assert_eq!(tokens[0].kind(), TokenKind::Let);
        assert_eq!(tokens[0].value, TokenValue::String("let".into()));
        assert_eq!(tokens[1].kind(), TokenKind::Identifier);
        assert_eq!(tokens[1].value.as_str(), Some("$x"));
        assert_eq!(tokens[3].kind(), TokenKind::True);
        assert_eq!(tokens[3].value, TokenValue::Boolean(true));
    }

    #[test]
    fn test_whitespace_only_yields_eof() {
        assert_eq!(kinds(" \t\r\n\u{00A0}"), vec![TokenKind::Eof]);
        assert_eq!(kinds("// only a comment"), vec![TokenKind::Eof]);
        assert_eq!(kinds("/* a */ /* b */\n// c"), vec![TokenKind::Eof]);
    }

    #[test]
    fn test_operator_run_is_greedy() {
        let tokens = scan_all("a %%% b").unwrap();
        assert_eq!(tokens[1].kind(), TokenKind::Operator);
        assert_eq!(tokens[1].value.as_str(), Some("%%%"));
    }

    #[test]
    fn test_dot_forms() {
        let tokens = scan_all("a.b ...c .5").unwrap();
        assert!(tokens[1].is_punctuation("."));
        assert!(tokens[3].is_punctuation("..."));
        assert_eq!(tokens[5].value, TokenValue::Number(0.5));
    }

    #[test]
    fn test_hex_value() {
        let tokens = scan_all("0xff 0X1_0").unwrap();
        assert_eq!(tokens[0].value, TokenValue::Number(255.0));
        assert!(tokens[0].token_type.is_hex_number());
        assert_eq!(tokens[1].value, TokenValue::Number(16.0));
    }

    #[test]
    fn test_decimal_forms() {
        let tokens = scan_all("1_000 1.5e3 2E-2 7.").unwrap();
        let values: Vec<_> = tokens.iter().filter_map(|t| t.value.as_number()).collect();
        assert_eq!(values, vec![1000.0, 1500.0, 0.02, 7.0]);
        assert!(!tokens[0].token_type.is_hex_number());
    }

    #[test]
    fn test_radix_prefix_after_non_zero_digit() {
        let err = scan_all("1x2").unwrap_err();
        assert!(matches!(
            err,
            ScanError::InvalidNumericLiteral {
                issue: NumericLiteralIssue::RadixPrefixAfterNonZeroDigit { digit: '1', suffix: 'x' },
                ..
            }
        ));
    }

    #[test]
    fn test_hex_after_dot_only_directly_after_the_dot() {
        let tokens = scan_all("a.b 0x1 . c 0x2").unwrap();
        assert_eq!(tokens[3].value, TokenValue::Number(1.0));
        assert_eq!(tokens[6].value, TokenValue::Number(2.0));
        assert!(matches!(
            scan_all("a. 0x1"),
            Err(ScanError::InvalidNumericLiteral { issue: NumericLiteralIssue::HexAfterDot, .. })
        ));
    }

    #[test]
    fn test_incomplete_exponent_keeps_mantissa() {
        let mut tokenizer = Tokenizer::new("1e+ b").unwrap();
        let tokens: Vec<_> = tokenizer.tokenize().collect::<Result<_, _>>().unwrap();
        assert_eq!(tokens[0].value, TokenValue::Number(1.0));
        assert_eq!(tokens[0].range().map(|r| r.len()), Some(3));
        assert_eq!(tokens[1].value.as_str(), Some("b"));
        assert_eq!(tokenizer.diagnostics().diagnostics()[0].code, 6005);
    }

    #[test]
    fn test_error_stops_the_stream() {
        let options = ScannerOptions {
            error_on_incomplete_number: true,
            ..ScannerOptions::default()
        };
        let mut tokenizer = Tokenizer::with_options("a 1e+ b", options).unwrap();
        assert!(tokenizer.next_token().is_some_and(|r| r.is_ok()));
        assert!(tokenizer.next_token().is_some_and(|r| r.is_err()));
        assert_eq!(tokenizer.state(), ScanState::Done);
        assert!(tokenizer.next_token().is_none());
    }

    #[test]
    fn test_string_escapes() {
        let tokens = scan_all(r#""a\n\"b\q""#).unwrap();
        assert_eq!(tokens[0].kind(), TokenKind::String);
        assert_eq!(tokens[0].value.as_str(), Some("a\n\"bq"));
    }

    #[test]
    fn test_either_quote_closes_by_default() {
        let tokens = scan_all(r#""it's""#).unwrap();
        assert_eq!(tokens[0].value.as_str(), Some("it"));
    }

    #[test]
    fn test_matched_quotes() {
        let options = ScannerOptions {
            match_quotes: true,
            ..ScannerOptions::default()
        };
        let tokens = scan_all_with_options(r#""it's""#, options).unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].value.as_str(), Some("it's"));
    }

    #[test]
    fn test_unrecognized_character_ends_stream_with_warning() {
        let mut tokenizer = Tokenizer::new("a # b").unwrap();
        let tokens: Vec<_> = tokenizer.tokenize().collect::<Result<_, _>>().unwrap();
        assert_eq!(tokens.len(), 2);
        assert!(tokens[1].is_eof());
        let diagnostics = tokenizer.take_diagnostics();
        assert_eq!(diagnostics.warning_count(), 1);
        assert_eq!(diagnostics.diagnostics()[0].code, 6002);
        assert!(tokenizer.diagnostics().is_empty());
    }

    #[test]
    fn test_template_with_expression() {
        assert_eq!(
            kinds("`Count: ${a}`"),
            vec![
                TokenKind::TemplateStart,
                TokenKind::TemplateContent,
                TokenKind::TemplateExpressionStart,
                TokenKind::Identifier,
                TokenKind::TemplateExpressionEnd,
                TokenKind::TemplateEnd,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_flat_brace_search_ends_expression_early() {
        let tokens = scan_all("`${ {a} }`").unwrap();
        let labels: Vec<_> = tokens.iter().map(Token::label).collect();
        assert_eq!(
            labels,
            vec![
                "templateStart",
                "templateExpressionStart",
                "punctuation",
                "identifier",
                "templateExpressionEnd",
                "templateContent",
                "templateEnd",
                "eof",
            ]
        );
    }

    #[test]
    fn test_balanced_braces() {
        let options = ScannerOptions {
            balance_template_braces: true,
            ..ScannerOptions::default()
        };
        let tokens = scan_all_with_options("`${ {a} }`", options).unwrap();
        let labels: Vec<_> = tokens.iter().map(Token::label).collect();
        assert_eq!(
            labels,
            vec![
                "templateStart",
                "templateExpressionStart",
                "punctuation",
                "identifier",
                "punctuation",
                "templateExpressionEnd",
                "templateEnd",
                "eof",
            ]
        );
    }
}
