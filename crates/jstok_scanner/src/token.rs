//! Token types for the scanner.

use crate::token_type::{TokenKind, TokenType};
use jstok_core::text::{SourceLocation, TextPos, TextRange};
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::fmt;

/// The literal value carried by a token.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum TokenValue {
    String(String),
    Number(f64),
    Boolean(bool),
}

impl TokenValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            TokenValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            TokenValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            TokenValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenValue::String(s) => write!(f, "{:?}", s),
            TokenValue::Number(n) => write!(f, "{}", n),
            TokenValue::Boolean(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for TokenValue {
    fn from(s: &str) -> Self {
        TokenValue::String(s.to_string())
    }
}

impl From<String> for TokenValue {
    fn from(s: String) -> Self {
        TokenValue::String(s)
    }
}

impl From<f64> for TokenValue {
    fn from(n: f64) -> Self {
        TokenValue::Number(n)
    }
}

impl From<bool> for TokenValue {
    fn from(b: bool) -> Self {
        TokenValue::Boolean(b)
    }
}

/// Where a token sits in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenPosition {
    /// UTF-16 offset of the first unit of the token.
    pub start: TextPos,
    /// UTF-16 offset one past the last unit of the token.
    pub end: TextPos,
    /// 1-based line the token starts on.
    pub line: u32,
    pub column_start: u32,
    pub column_end: u32,
}

impl TokenPosition {
    /// The position spanning two cursor locations.
    ///
    /// A span that crosses a line break keeps its starting line, and its end
    /// column is measured from the start column in code units.
    pub fn between(start: SourceLocation, end: SourceLocation) -> Self {
        let column_end = if end.line == start.line {
            end.column
        } else {
            start.column + (end.offset - start.offset)
        };
        Self {
            start: start.offset,
            end: end.offset,
            line: start.line,
            column_start: start.column,
            column_end,
        }
    }

    #[inline]
    pub fn range(&self) -> TextRange {
        TextRange::new(self.start, self.end)
    }
}

/// One classified lexical unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub token_type: TokenType,
    pub value: TokenValue,
    /// `None` only for the end-of-input token.
    pub position: Option<TokenPosition>,
}

impl Token {
    pub fn new(token_type: TokenType, value: impl Into<TokenValue>, position: TokenPosition) -> Self {
        Self {
            token_type,
            value: value.into(),
            position: Some(position),
        }
    }

    /// The terminal end-of-input token.
    pub fn eof() -> Self {
        Self {
            token_type: TokenType::new(TokenKind::Eof),
            value: TokenValue::String(String::new()),
            position: None,
        }
    }

    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.token_type.kind
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.token_type.kind == TokenKind::Eof
    }

    #[inline]
    pub fn label(&self) -> &'static str {
        self.token_type.label()
    }

    /// The source range of this token, if it has one.
    pub fn range(&self) -> Option<TextRange> {
        self.position.map(|p| p.range())
    }

    /// Whether this is a `Punctuation` token spelled `text`.
    pub fn is_punctuation(&self, text: &str) -> bool {
        self.kind() == TokenKind::Punctuation && self.value.as_str() == Some(text)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.position {
            Some(p) => write!(
                f,
                "{}:{}-{}  {}  {}",
                p.line,
                p.column_start,
                p.column_end,
                self.label(),
                self.value
            ),
            None => write!(f, "{}", self.label()),
        }
    }
}

impl Serialize for Token {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let fields = if self.position.is_some() { 9 } else { 4 };
        let mut state = serializer.serialize_struct("Token", fields)?;
        state.serialize_field("typeLabel", self.label())?;
        state.serialize_field("isKeyword", &self.token_type.is_keyword())?;
        state.serialize_field("isHexNumber", &self.token_type.is_hex_number())?;
        state.serialize_field("value", &self.value)?;
        match self.position {
            Some(p) => {
                state.serialize_field("start", &p.start)?;
                state.serialize_field("end", &p.end)?;
                state.serialize_field("line", &p.line)?;
                state.serialize_field("columnStart", &p.column_start)?;
                state.serialize_field("columnEnd", &p.column_end)?;
            }
            None => {
                state.skip_field("start")?;
                state.skip_field("end")?;
                state.skip_field("line")?;
                state.skip_field("columnStart")?;
                state.skip_field("columnEnd")?;
            }
        }
        state.end()
    }
}
