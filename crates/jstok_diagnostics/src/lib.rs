//! jstok_diagnostics: Diagnostic messages and error reporting infrastructure.
//!
//! Diagnostics carry a stable code, a category and a formatted message. The
//! scanner reports fatal problems as [`ScanError`] and records non-fatal ones
//! (input it accepted leniently) as warnings in a [`DiagnosticCollection`].

mod error;

pub use error::{NumericLiteralIssue, ScanError};

use jstok_core::text::{SourceLocation, TextRange};
use std::fmt;

/// Severity of a diagnostic. Only `Error` makes a run fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticCategory {
    Warning,
    Error,
    Message,
}

impl DiagnosticCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            DiagnosticCategory::Warning => "warning",
            DiagnosticCategory::Error => "error",
            DiagnosticCategory::Message => "message",
        }
    }
}

impl fmt::Display for DiagnosticCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static entry of the message table. `message` may hold positional
/// placeholders `{0}`, `{1}` filled in by [`format_message`].
#[derive(Debug, Clone)]
pub struct DiagnosticMessage {
    pub code: u32,
    pub category: DiagnosticCategory,
    pub message: &'static str,
}

/// A message from the table with its arguments substituted, optionally tied
/// to a file and a source position.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub file: Option<String>,
    /// UTF-16 range; empty when only a point is known.
    pub span: Option<TextRange>,
    pub location: Option<SourceLocation>,
    pub message_text: String,
    pub code: u32,
    pub category: DiagnosticCategory,
}

impl Diagnostic {
    pub fn new(message: &DiagnosticMessage, args: &[&str]) -> Self {
        Self {
            file: None,
            span: None,
            location: None,
            message_text: format_message(message.message, args),
            code: message.code,
            category: message.category,
        }
    }

    /// Create a diagnostic anchored at a source location.
    pub fn at(location: SourceLocation, message: &DiagnosticMessage, args: &[&str]) -> Self {
        Self {
            span: Some(TextRange::empty(location.offset)),
            location: Some(location),
            ..Self::new(message, args)
        }
    }

    /// Attach the file this diagnostic belongs to.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.category == DiagnosticCategory::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.file, self.location) {
            (Some(file), Some(location)) => write!(f, "{file}({location}): ")?,
            (Some(file), None) => write!(f, "{file}: ")?,
            (None, Some(location)) => write!(f, "{location}: ")?,
            (None, None) => {}
        }
        write!(f, "{} JS{}: {}", self.category, self.code, self.message_text)
    }
}

/// Substitute `args[i]` for every `{i}` in `template`.
pub fn format_message(template: &str, args: &[&str]) -> String {
    args.iter()
        .enumerate()
        .fold(template.to_string(), |text, (i, arg)| text.replace(&format!("{{{i}}}"), arg))
}

/// Non-fatal diagnostics in the order they were reported.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticCollection {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_error()).count()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.category == DiagnosticCategory::Warning)
            .count()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Move every diagnostic of `other` into this collection.
    pub fn append(&mut self, other: DiagnosticCollection) {
        self.diagnostics.extend(other.diagnostics);
    }

    /// Sort by file, then by start offset. Diagnostics without a span come
    /// first within their file.
    pub fn sort(&mut self) {
        self.diagnostics
            .sort_by_key(|d| (d.file.clone(), d.span.map(|s| s.start)));
    }
}

// ============================================================================
// Diagnostic Messages
// ============================================================================

pub mod messages {
    use super::*;

    macro_rules! diag {
        ($code:expr, $category:ident, $msg:expr) => {
            DiagnosticMessage {
                code: $code,
                category: DiagnosticCategory::$category,
                message: $msg,
            }
        };
    }

    // ========================================================================
    // Scanner errors (1000-1099)
    // ========================================================================
    pub const SOURCE_TEXT_IS_EMPTY: DiagnosticMessage = diag!(1001, Error, "Source text is empty.");
    pub const UNTERMINATED_STRING_LITERAL: DiagnosticMessage = diag!(1002, Error, "Unterminated string literal.");
    pub const UNTERMINATED_TEMPLATE_LITERAL: DiagnosticMessage = diag!(1003, Error, "Unterminated template literal.");
    pub const ASTERISK_SLASH_EXPECTED: DiagnosticMessage = diag!(1004, Error, "'*/' expected.");
    pub const INVALID_CHARACTER: DiagnosticMessage = diag!(1005, Error, "Invalid character '{0}'.");
    pub const UNEXPECTED_CHARACTER_AFTER_NUMBER: DiagnosticMessage = diag!(1006, Error, "Unexpected character '{0}' after number {1}.");
    pub const HEXADECIMAL_DIGIT_EXPECTED: DiagnosticMessage = diag!(1007, Error, "Hexadecimal digit expected.");
    pub const DIGIT_EXPECTED: DiagnosticMessage = diag!(1008, Error, "Digit expected.");
    pub const HEXADECIMAL_NUMBER_CANNOT_START_WITH_A_DOT: DiagnosticMessage = diag!(1009, Error, "Hexadecimal number cannot start with a dot.");

    // ========================================================================
    // Scanner leniency warnings (6000-6099)
    // ========================================================================
    pub const UNTERMINATED_BLOCK_COMMENT_CONSUMED: DiagnosticMessage = diag!(6001, Warning, "Unterminated block comment consumed to end of input.");
    pub const SCANNING_STOPPED_AT_CHARACTER_0: DiagnosticMessage = diag!(6002, Warning, "Scanning stopped at unrecognized character '{0}'.");
    pub const UNTERMINATED_STRING_CLOSED_AT_END_OF_INPUT: DiagnosticMessage = diag!(6003, Warning, "Unterminated string literal closed at end of input.");
    pub const UNTERMINATED_TEMPLATE_CLOSED_AT_END_OF_INPUT: DiagnosticMessage = diag!(6004, Warning, "Unterminated template literal closed at end of input.");
    pub const INCOMPLETE_NUMERIC_LITERAL_READ_AS_0: DiagnosticMessage = diag!(6005, Warning, "Incomplete numeric literal read as {0}.");

    // ========================================================================
    // Driver messages (6100-6199)
    // ========================================================================
    pub const SCANNED_0_TOKENS_IN_1_FILES: DiagnosticMessage = diag!(6100, Message, "Scanned {0} tokens in {1} file(s).");
}
