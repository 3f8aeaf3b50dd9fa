//! URL literal sanitizer for SQL seed files

use std::borrow::Cow;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::{Result, SanitizeError};

/// Placeholder URL substituted for every URL literal
pub const DEFAULT_PLACEHOLDER: &str = "http://onlinekompas.cz/";

/// A single-quoted http(s) literal with no embedded quote
static URL_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"'https?://[^']*'").unwrap());

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SanitizeReport {
    pub path: PathBuf,
    pub replacements: usize,
}

/// Replaces quoted URL literals with a fixed placeholder literal
pub struct UrlSanitizer {
    replacement: String,
}

impl UrlSanitizer {
    pub fn new() -> Self {
        Self {
            replacement: quote(DEFAULT_PLACEHOLDER),
        }
    }

    /// Use `placeholder` (without quotes) as the substituted URL.
    ///
    /// The quoted placeholder must itself be a whole URL literal, so that a
    /// second pass over sanitized text leaves it unchanged.
    pub fn with_placeholder(placeholder: &str) -> Result<Self> {
        let replacement = quote(placeholder);
        let whole_literal = URL_LITERAL
            .find(&replacement)
            .is_some_and(|m| m.range() == (0..replacement.len()));
        if !whole_literal {
            return Err(SanitizeError::InvalidPlaceholder(placeholder.to_string()));
        }

        Ok(Self { replacement })
    }

    /// Replace every URL literal in `text`.
    ///
    /// Matches are found left to right and never overlap. Returns the
    /// rewritten text (borrowed when nothing matched) and the match count.
    pub fn sanitize_text<'a>(&self, text: &'a str) -> (Cow<'a, str>, usize) {
        let mut count = 0;
        let sanitized = URL_LITERAL.replace_all(text, |_: &Captures<'_>| {
            count += 1;
            self.replacement.as_str()
        });
        (sanitized, count)
    }

    /// Rewrite the file at `path` in place.
    ///
    /// The whole file is read and decoded before anything is written, so a
    /// missing or non-UTF-8 file is left untouched. The write itself truncates
    /// the file first and is not atomic.
    pub fn sanitize(&self, path: &Path) -> Result<SanitizeReport> {
        let bytes = std::fs::read(path).map_err(|e| SanitizeError::read(path, e))?;
        debug!("Read {} bytes from {}", bytes.len(), path.display());

        let content = std::str::from_utf8(&bytes).map_err(|source| SanitizeError::InvalidUtf8 {
            path: path.to_path_buf(),
            source,
        })?;

        let (sanitized, replacements) = self.sanitize_text(content);

        std::fs::write(path, sanitized.as_bytes()).map_err(|source| SanitizeError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Wrote {} bytes to {}", sanitized.len(), path.display());

        let report = SanitizeReport {
            path: path.to_path_buf(),
            replacements,
        };
        info!(
            path = %report.path.display(),
            replacements = report.replacements,
            "Sanitized URL literals"
        );

        Ok(report)
    }
}

fn quote(placeholder: &str) -> String {
    format!("'{}'", placeholder)
}

impl Default for UrlSanitizer {
    fn default() -> Self {
        Self::new()
    }
}
