//! Rendering of fatal scan errors with source context.

use jstok_core::{SourceText, TextRange};
use jstok_diagnostics::ScanError;
use miette::{NamedSource, SourceSpan};
use thiserror::Error;

/// A fatal scan error bound to the file it happened in.
#[derive(Debug, Error, miette::Diagnostic)]
#[error("JS{code}: {message}")]
#[diagnostic(code(jstok::scan))]
pub struct ScanReport {
    code: u32,
    message: String,
    #[source_code]
    src: NamedSource<String>,
    #[label("{label}")]
    span: Option<SourceSpan>,
    label: String,
    #[help]
    help: Option<String>,
}

impl ScanReport {
    pub fn new(path: &str, source: &SourceText, error: &ScanError) -> Self {
        let diagnostic = error.to_diagnostic();
        let span = error.location().map(|location| {
            // One character wide, or empty at end of input.
            let range = TextRange::new(location.offset, location.offset + 1);
            SourceSpan::from(source.byte_range(range))
        });
        Self {
            code: diagnostic.code,
            message: diagnostic.message_text,
            src: NamedSource::new(path, source.as_str().to_string()),
            span,
            label: label_for(error).to_string(),
            help: help_for(error).map(str::to_string),
        }
    }
}

fn label_for(error: &ScanError) -> &'static str {
    match error {
        ScanError::EmptySourceInput => "empty input",
        ScanError::InvalidNumericLiteral { .. } => "in this number",
        ScanError::UnterminatedComment { .. } => "comment starts here",
        ScanError::UnexpectedCharacter { .. } => "not a valid token",
        ScanError::UnterminatedStringLiteral { .. } => "string starts here",
        ScanError::UnterminatedTemplateLiteral { .. } => "template starts here",
    }
}

fn help_for(error: &ScanError) -> Option<&'static str> {
    match error {
        ScanError::UnterminatedComment { .. } => Some("close the comment with `*/`"),
        ScanError::UnexpectedCharacter { .. } => {
            Some("without --strict, scanning stops at this character instead")
        }
        ScanError::UnterminatedStringLiteral { .. } => Some("add the closing quote"),
        ScanError::UnterminatedTemplateLiteral { .. } => Some("add the closing backtick"),
        ScanError::EmptySourceInput | ScanError::InvalidNumericLiteral { .. } => None,
    }
}

/// Print a scan error to stderr.
pub fn print_scan_error(path: &str, source: &SourceText, error: &ScanError) {
    let report = miette::Report::new(ScanReport::new(path, source, error));
    eprintln!("{:?}", report);
}

#[cfg(test)]
mod tests {
    use super::*;
    use jstok_core::SourceLocation;

    #[test]
    fn test_span_covers_offending_character() {
        let source = SourceText::new("a = é#");
        let error = ScanError::UnexpectedCharacter {
            character: '#',
            location: SourceLocation::new(5, 1, 5),
        };
        let report = ScanReport::new("main.js", &source, &error);
        assert_eq!(report.span, Some(SourceSpan::from(6..7)));
        assert_eq!(report.code, 1005);
        assert_eq!(report.to_string(), "JS1005: Invalid character '#'.");
        assert!(report.help.is_some());
    }

    #[test]
    fn test_empty_source_has_no_span() {
        let source = SourceText::new("");
        let report = ScanReport::new("empty.js", &source, &ScanError::EmptySourceInput);
        assert_eq!(report.span, None);
        assert_eq!(report.to_string(), "JS1001: Source text is empty.");
    }
}
