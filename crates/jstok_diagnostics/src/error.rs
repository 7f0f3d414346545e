//! Fatal scanner errors.

use crate::{messages, Diagnostic};
use jstok_core::text::SourceLocation;
use thiserror::Error;

/// An error that aborts a scan. Once returned, the tokenizer yields no
/// further tokens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    /// The tokenizer was constructed over zero-length source text.
    #[error("source text is empty")]
    EmptySourceInput,

    #[error("invalid numeric literal at {location}: {issue}")]
    InvalidNumericLiteral {
        issue: NumericLiteralIssue,
        location: SourceLocation,
    },

    /// A `/*` comment ran to end of input (strict mode only).
    #[error("unterminated block comment starting at {location}")]
    UnterminatedComment { location: SourceLocation },

    /// A character no sub-scanner accepts (strict mode only).
    #[error("unexpected character '{character}' at {location}")]
    UnexpectedCharacter {
        character: char,
        location: SourceLocation,
    },

    #[error("unterminated string literal starting at {location}")]
    UnterminatedStringLiteral { location: SourceLocation },

    #[error("unterminated template literal starting at {location}")]
    UnterminatedTemplateLiteral { location: SourceLocation },
}

/// Why a numeric literal was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NumericLiteralIssue {
    /// A non-zero leading digit directly followed by `x` or `X`, e.g. `1x2`.
    #[error("unexpected character '{suffix}' after number {digit}")]
    RadixPrefixAfterNonZeroDigit { digit: char, suffix: char },

    /// `0x` with no hexadecimal digit after it (strict mode only).
    #[error("hexadecimal digit expected")]
    MissingHexDigits,

    /// An exponent marker with no digit after it, e.g. `1e+` (strict mode only).
    #[error("digit expected in exponent")]
    MissingExponentDigits,

    /// A hexadecimal literal right after a standalone `.` token.
    #[error("hexadecimal number cannot start with a dot")]
    HexAfterDot,

    /// Digits that do not form a finite decimal value.
    #[error("malformed decimal literal")]
    Malformed,
}

impl ScanError {
    /// Where the error was detected, if it has a position.
    pub fn location(&self) -> Option<SourceLocation> {
        match self {
            ScanError::EmptySourceInput => None,
            ScanError::InvalidNumericLiteral { location, .. }
            | ScanError::UnterminatedComment { location }
            | ScanError::UnexpectedCharacter { location, .. }
            | ScanError::UnterminatedStringLiteral { location }
            | ScanError::UnterminatedTemplateLiteral { location } => Some(*location),
        }
    }

    /// The stable diagnostic code of this error.
    pub fn code(&self) -> u32 {
        self.to_diagnostic().code
    }

    /// Convert into a coded diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            ScanError::EmptySourceInput => Diagnostic::new(&messages::SOURCE_TEXT_IS_EMPTY, &[]),
            ScanError::InvalidNumericLiteral { issue, location } => match issue {
                NumericLiteralIssue::RadixPrefixAfterNonZeroDigit { digit, suffix } => {
                    let (digit, suffix) = (digit.to_string(), suffix.to_string());
                    Diagnostic::at(
                        *location,
                        &messages::UNEXPECTED_CHARACTER_AFTER_NUMBER,
                        &[&suffix, &digit],
                    )
                }
                NumericLiteralIssue::MissingHexDigits => {
                    Diagnostic::at(*location, &messages::HEXADECIMAL_DIGIT_EXPECTED, &[])
                }
                NumericLiteralIssue::MissingExponentDigits | NumericLiteralIssue::Malformed => {
                    Diagnostic::at(*location, &messages::DIGIT_EXPECTED, &[])
                }
                NumericLiteralIssue::HexAfterDot => Diagnostic::at(
                    *location,
                    &messages::HEXADECIMAL_NUMBER_CANNOT_START_WITH_A_DOT,
                    &[],
                ),
            },
            ScanError::UnterminatedComment { location } => {
                Diagnostic::at(*location, &messages::ASTERISK_SLASH_EXPECTED, &[])
            }
            ScanError::UnexpectedCharacter { character, location } => {
                let character = character.to_string();
                Diagnostic::at(*location, &messages::INVALID_CHARACTER, &[&character])
            }
            ScanError::UnterminatedStringLiteral { location } => {
                Diagnostic::at(*location, &messages::UNTERMINATED_STRING_LITERAL, &[])
            }
            ScanError::UnterminatedTemplateLiteral { location } => {
                Diagnostic::at(*location, &messages::UNTERMINATED_TEMPLATE_LITERAL, &[])
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_source_has_no_location() {
        let err = ScanError::EmptySourceInput;
        assert_eq!(err.location(), None);
        assert_eq!(err.code(), 1001);
        assert_eq!(err.to_string(), "source text is empty");
    }

    #[test]
    fn test_invalid_numeric_literal_message() {
        let err = ScanError::InvalidNumericLiteral {
            issue: NumericLiteralIssue::RadixPrefixAfterNonZeroDigit { digit: '1', suffix: 'x' },
            location: SourceLocation::new(0, 1, 0),
        };
        assert_eq!(
            err.to_string(),
            "invalid numeric literal at 1:0: unexpected character 'x' after number 1"
        );
        let diag = err.to_diagnostic();
        assert_eq!(diag.code, 1006);
        assert_eq!(diag.message_text, "Unexpected character 'x' after number 1.");
        assert_eq!(diag.location, Some(SourceLocation::new(0, 1, 0)));
    }

    #[test]
    fn test_unexpected_character_diagnostic() {
        let err = ScanError::UnexpectedCharacter {
            character: '#',
            location: SourceLocation::new(4, 1, 4),
        };
        let diag = err.to_diagnostic();
        assert!(diag.is_error());
        assert_eq!(diag.message_text, "Invalid character '#'.");
        assert_eq!(err.location().map(|l| l.offset), Some(4));
    }
}
