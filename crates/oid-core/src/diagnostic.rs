//! # Structured JSON Diagnostics
//!
//! A [`JsonDiagnostic`] is the positional record of a syntax-class failure:
//! where the parser stopped, what it was reading, and why. It is a bounded
//! value type. Reporters store copies of it, never references into parser
//! state.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Maximum length in bytes of a diagnostic message.
pub const MAX_TEXT_LEN: usize = 160;

/// Maximum length in bytes of a diagnostic source label.
pub const MAX_SOURCE_LEN: usize = 80;

/// Source label for documents parsed from memory.
pub const BYTES_SOURCE: &str = "<bytes>";

/// Source label for strict root unpack failures.
pub const VALIDATION_SOURCE: &str = "<validation>";

/// What kind of failure produced a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticCategory {
    /// The document could not be opened or read.
    Io,
    /// The input is not syntactically valid JSON.
    Syntax,
    /// The input ended in the middle of a JSON value.
    Eof,
    /// Valid JSON whose content does not fit the required root shape.
    Data,
    /// The document exceeds the configured size limit.
    TooLarge,
}

impl From<serde_json::error::Category> for DiagnosticCategory {
    fn from(category: serde_json::error::Category) -> Self {
        use serde_json::error::Category;
        match category {
            Category::Io => DiagnosticCategory::Io,
            Category::Syntax => DiagnosticCategory::Syntax,
            Category::Data => DiagnosticCategory::Data,
            Category::Eof => DiagnosticCategory::Eof,
        }
    }
}

/// Positional record of a JSON read, parse, or unpack failure.
///
/// `line` and `column` are 1-based. A value of `0` means the failure has
/// no position in the source text (an unopenable file, or a strict unpack
/// run against an already-parsed tree).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "DiagnosticRecord")]
pub struct JsonDiagnostic {
    line: usize,
    column: usize,
    source: String,
    text: String,
    category: DiagnosticCategory,
}

/// Wire form of a diagnostic; deserialization goes through
/// [`JsonDiagnostic::new`] so the length bounds hold.
#[derive(Deserialize)]
struct DiagnosticRecord {
    line: usize,
    column: usize,
    source: String,
    text: String,
    category: DiagnosticCategory,
}

impl From<DiagnosticRecord> for JsonDiagnostic {
    fn from(r: DiagnosticRecord) -> Self {
        Self::new(r.line, r.column, &r.source, &r.text, r.category)
    }
}

impl JsonDiagnostic {
    /// Build a diagnostic, truncating `source` and `text` to their bounds.
    pub fn new(
        line: usize,
        column: usize,
        source: &str,
        text: &str,
        category: DiagnosticCategory,
    ) -> Self {
        Self {
            line,
            column,
            source: truncate_at_char_boundary(source, MAX_SOURCE_LEN),
            text: truncate_at_char_boundary(text, MAX_TEXT_LEN),
            category,
        }
    }

    /// Capture a `serde_json` error raised while parsing `source`.
    ///
    /// The position is taken from the error; the trailing
    /// `" at line L column C"` that `serde_json` appends to its message is
    /// dropped from `text` since it is stored separately.
    pub fn from_json_error(source: &str, err: &serde_json::Error) -> Self {
        let rendered = err.to_string();
        let suffix = format!(" at line {} column {}", err.line(), err.column());
        let text = rendered.strip_suffix(&suffix).unwrap_or(&rendered);
        Self::new(err.line(), err.column(), source, text, err.classify().into())
    }

    /// Capture an I/O failure while opening or reading `source`.
    pub fn from_io_error(source: &str, err: &std::io::Error) -> Self {
        Self::new(
            0,
            0,
            source,
            &format!("unable to open {source}: {err}"),
            DiagnosticCategory::Io,
        )
    }

    /// Diagnostic for a document rejected by the size limit.
    pub fn too_large(source: &str, size: u64, max: u64) -> Self {
        Self::new(
            0,
            0,
            source,
            &format!("document is {size} bytes, exceeding the {max} byte limit"),
            DiagnosticCategory::TooLarge,
        )
    }

    /// 1-based line, or 0 if the failure has no source position.
    pub fn line(&self) -> usize {
        self.line
    }

    /// 1-based column, or 0 if the failure has no source position.
    pub fn column(&self) -> usize {
        self.column
    }

    /// What was being read: a file path, `<bytes>`, or `<validation>`.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Human-readable message.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn category(&self) -> DiagnosticCategory {
        self.category
    }

    /// True if `line` and `column` point into the source text.
    pub fn has_position(&self) -> bool {
        self.line > 0
    }
}

impl fmt::Display for JsonDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_position() {
            write!(f, "{}:{}:{}: {}", self.source, self.line, self.column, self.text)
        } else {
            write!(f, "{}: {}", self.source, self.text)
        }
    }
}

fn truncate_at_char_boundary(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    s[..end].to_string()
}
