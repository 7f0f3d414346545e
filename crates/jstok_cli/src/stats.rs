//! Token statistics for `--stats`.

use indexmap::IndexMap;
use jstok_scanner::{Token, TokenKind};
use rustc_hash::{FxBuildHasher, FxHashSet};
use std::fmt;

/// Counts per token label, in the order labels were first seen.
#[derive(Debug, Default)]
pub struct TokenStats {
    by_label: IndexMap<&'static str, usize, FxBuildHasher>,
    identifiers: FxHashSet<String>,
    total: usize,
    files: usize,
}

impl TokenStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the tokens of one file. The end-of-input token is not counted.
    pub fn record_file(&mut self, tokens: &[Token]) {
        self.files += 1;
        for token in tokens.iter().filter(|t| !t.is_eof()) {
            *self.by_label.entry(token.label()).or_insert(0) += 1;
            self.total += 1;
            if token.kind() == TokenKind::Identifier {
                if let Some(name) = token.value.as_str() {
                    self.identifiers.insert(name.to_string());
                }
            }
        }
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn files(&self) -> usize {
        self.files
    }

    pub fn count(&self, label: &str) -> usize {
        self.by_label.get(label).copied().unwrap_or(0)
    }

    pub fn unique_identifiers(&self) -> usize {
        self.identifiers.len()
    }
}

impl fmt::Display for TokenStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.by_label.keys().map(|l| l.len()).max().unwrap_or(0);
        for (label, count) in &self.by_label {
            writeln!(f, "  {:<width$}  {}", label, count, width = width)?;
        }
        write!(f, "  {} unique identifier(s)", self.identifiers.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jstok_scanner::scan_all;

    #[test]
    fn test_counts_in_first_seen_order() {
        let mut stats = TokenStats::new();
        stats.record_file(&scan_all("let a = b + a;").unwrap());
        stats.record_file(&scan_all("c").unwrap());

        assert_eq!(stats.files(), 2);
        assert_eq!(stats.total(), 8);
        assert_eq!(stats.count("identifier"), 4);
        assert_eq!(stats.count("eof"), 0);
        assert_eq!(stats.unique_identifiers(), 3);

        let labels: Vec<_> = stats.by_label.keys().copied().collect();
        assert_eq!(labels, vec!["let", "identifier", "operator", "punctuation"]);
    }

    #[test]
    fn test_display() {
        let mut stats = TokenStats::new();
        stats.record_file(&scan_all("if x").unwrap());
        assert_eq!(stats.to_string(), "  if          1\n  identifier  1\n  1 unique identifier(s)");
    }
}
