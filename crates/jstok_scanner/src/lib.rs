//! jstok_scanner: Tokenizer for JavaScript-like source code.
//!
//! Produces a lazy, single-pass stream of positioned tokens with support for:
//! - Identifiers, keywords and boolean literals
//! - Decimal and hexadecimal numbers
//! - Quoted strings with escapes
//! - Greedy operator runs and single-character punctuation
//! - Template literals with `${...}` expression spans
//!
//! Offsets and columns are measured in UTF-16 code units.

mod char_codes;
mod cursor;
mod scanner;
mod token;
mod token_type;

pub use cursor::TAB_WIDTH;
pub use scanner::{scan_all, scan_all_with_options, ScanState, Tokenizer, Tokens};
pub use token::{Token, TokenPosition, TokenValue};
pub use token_type::{InfoPatch, TokenKind, TokenType, TokenTypeInfo};

pub use jstok_diagnostics::{NumericLiteralIssue, ScanError};
pub use jstok_options::ScannerOptions;
