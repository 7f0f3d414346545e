//! jstok_options: jstok.json parsing and scanner options.
//!
//! The scanner accepts some malformed input by default. Each of those
//! leniencies can be turned into a hard error (or, for quote and brace
//! matching, into stricter scanning) through [`ScannerOptions`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Options controlling how the scanner treats malformed or ambiguous input.
///
/// Every flag defaults to `false`, which reproduces the lenient behaviour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScannerOptions {
    /// Close a quoted string only on the quote character that opened it.
    /// When unset, either `"` or `'` closes any string.
    pub match_quotes: bool,
    /// Track `{`/`}` nesting inside template `${...}` spans and scan nested
    /// templates. When unset, the first `}` ends the expression.
    pub balance_template_braces: bool,
    /// Report an unterminated `/*` comment instead of consuming to end of input.
    pub error_on_unterminated_comment: bool,
    /// Report an unrecognized character instead of ending the token stream.
    pub error_on_unrecognized_character: bool,
    /// Report a string or template literal that reaches end of input.
    pub error_on_unterminated_literal: bool,
    /// Report `0x` without hex digits, or an exponent marker without
    /// digits, instead of reading the number scanned so far.
    pub error_on_incomplete_number: bool,
}

impl ScannerOptions {
    /// All strict checks enabled.
    pub fn strict() -> Self {
        Self {
            match_quotes: true,
            balance_template_braces: true,
            error_on_unterminated_comment: true,
            error_on_unrecognized_character: true,
            error_on_unterminated_literal: true,
            error_on_incomplete_number: true,
        }
    }

    /// Whether every option is at its lenient default.
    pub fn is_lenient(&self) -> bool {
        *self == Self::default()
    }
}

/// Token output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// The jstok.json file structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JstokConfig {
    pub scanner_options: Option<ScannerOptions>,
    pub files: Option<Vec<String>>,
    pub output: Option<OutputFormat>,
}

impl JstokConfig {
    /// The scanner options of this config, or the defaults.
    pub fn scanner_options(&self) -> ScannerOptions {
        self.scanner_options.unwrap_or_default()
    }
}

/// Errors raised while loading a jstok.json file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config '{path}': {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// The contents written by `jstok --init`.
pub const DEFAULT_CONFIG: &str = r#"{
  "scannerOptions": {
    "matchQuotes": false,
    "balanceTemplateBraces": false,
    "errorOnUnterminatedComment": false,
    "errorOnUnrecognizedCharacter": false,
    "errorOnUnterminatedLiteral": false,
    "errorOnIncompleteNumber": false
  },
  "files": [],
  "output": "text"
}
"#;

/// Parse a jstok.json file from a string.
pub fn parse_config(content: &str) -> Result<JstokConfig, serde_json::Error> {
    serde_json::from_str(content)
}

/// Parse a jstok.json file from a path.
pub fn parse_config_file(path: &str) -> Result<JstokConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_string(),
        source,
    })?;
    parse_config(&content).map_err(|source| ConfigError::Json {
        path: path.to_string(),
        source,
    })
}
