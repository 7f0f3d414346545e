//! The scanning cursor: decoded characters plus offset, line and column.

use crate::char_codes::{CARRIAGE_RETURN, LINE_FEED, TAB};
use jstok_core::text::{SourceLocation, TextPos};

/// Columns a tab advances by.
pub const TAB_WIDTH: u32 = 4;

/// A forward-only cursor over decoded source characters.
///
/// `index` counts characters; `offset` counts UTF-16 code units, so a
/// character outside the BMP moves the offset by two.
#[derive(Debug, Clone)]
pub struct Cursor {
    text: Vec<char>,
    index: usize,
    offset: TextPos,
    line: u32,
    column: u32,
}

impl Cursor {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.chars().collect(),
            index: 0,
            offset: 0,
            line: 1,
            column: 0,
        }
    }

    /// The character under the cursor.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.text.get(self.index).copied()
    }

    /// The character `n` positions ahead of the cursor.
    #[inline]
    pub fn peek(&self, n: usize) -> Option<char> {
        self.text.get(self.index + n).copied()
    }

    pub fn location(&self) -> SourceLocation {
        SourceLocation::new(self.offset, self.line, self.column)
    }

    /// Consume the current character, updating offset, line and column.
    pub fn advance(&mut self) -> Option<char> {
        let ch = self.current()?;
        self.index += 1;
        self.offset += ch.len_utf16() as TextPos;
        match ch {
            LINE_FEED | CARRIAGE_RETURN => self.new_line(),
            TAB => self.column += TAB_WIDTH,
            _ => self.column += ch.len_utf16() as u32,
        }
        Some(ch)
    }

    pub fn advance_by(&mut self, n: usize) {
        for _ in 0..n {
            if self.advance().is_none() {
                break;
            }
        }
    }

    fn new_line(&mut self) {
        self.line += 1;
        self.column = 0;
    }
}
