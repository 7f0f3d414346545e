//! jstok_core: Core utilities shared by the jstok crates.
//!
//! Provides text ranges, source locations, and UTF-16 aware source text
//! used by the scanner, diagnostics and CLI.

pub mod source;
pub mod text;

// Re-export commonly used types
pub use source::SourceText;
pub use text::{SourceLocation, TextPos, TextRange};
