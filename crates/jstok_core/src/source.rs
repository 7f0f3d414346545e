//! Source text addressed by UTF-16 offsets.
//!
//! Tokens report positions in UTF-16 code units. `SourceText` converts those
//! positions back into Rust string slices and byte offsets.

use crate::text::{TextPos, TextRange};

/// Owned source text with helpers for UTF-16 addressing.
#[derive(Debug, Clone)]
pub struct SourceText {
    text: String,
    /// Length of the text in UTF-16 code units.
    utf16_len: TextPos,
}

impl SourceText {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let utf16_len = text.chars().map(|c| c.len_utf16() as TextPos).sum();
        Self { text, utf16_len }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length of the source in UTF-16 code units.
    #[inline]
    pub fn len_utf16(&self) -> TextPos {
        self.utf16_len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Byte offset of a UTF-16 offset. Offsets past the end clamp to the
    /// text length; offsets inside a surrogate pair round up to the next
    /// character boundary.
    pub fn byte_offset(&self, offset: TextPos) -> usize {
        let mut units = 0;
        for (idx, ch) in self.text.char_indices() {
            if units >= offset {
                return idx;
            }
            units += ch.len_utf16() as TextPos;
        }
        self.text.len()
    }

    /// The text covered by a UTF-16 range.
    pub fn slice(&self, range: TextRange) -> &str {
        &self.text[self.byte_range(range)]
    }

    /// Convert a UTF-16 range to a byte range.
    pub fn byte_range(&self, range: TextRange) -> std::ops::Range<usize> {
        let start = self.byte_offset(range.start);
        start..self.byte_offset(range.end).max(start)
    }
}

impl From<&str> for SourceText {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}
