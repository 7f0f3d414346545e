//! Text range and location types for source position tracking.
//!
//! Offsets are measured in UTF-16 code units so that they line up with what
//! JavaScript tooling (editors, source maps, `String.prototype.slice`) reports.

use std::fmt;

/// A position in source text, measured in UTF-16 code units from the start.
pub type TextPos = u32;

/// A half-open range `[start, end)` in source text.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct TextRange {
    /// Offset where the range starts (inclusive).
    pub start: TextPos,
    /// Offset where the range ends (exclusive).
    pub end: TextPos,
}

impl TextRange {
    #[inline]
    pub fn new(start: TextPos, end: TextPos) -> Self {
        debug_assert!(end >= start);
        Self { start, end }
    }

    /// Create an empty range at a position.
    #[inline]
    pub fn empty(pos: TextPos) -> Self {
        Self { start: pos, end: pos }
    }

    /// The length of this range in code units.
    #[inline]
    pub fn len(&self) -> TextPos {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl fmt::Debug for TextRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl fmt::Display for TextRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// A single point in the source: absolute offset plus line and column.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct SourceLocation {
    /// Absolute offset in UTF-16 code units.
    pub offset: TextPos,
    /// 1-based line number.
    pub line: u32,
    /// 0-based column. Tabs count as four columns.
    pub column: u32,
}

impl SourceLocation {
    pub fn new(offset: TextPos, line: u32, column: u32) -> Self {
        Self { offset, line, column }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
