//! # Error Reporter
//!
//! Holds the most recent syntax-class diagnostic. Diagnostics are copied
//! in and persist until explicitly overwritten; nothing clears them
//! implicitly, a successful load included.

use crate::diagnostic::JsonDiagnostic;

/// Keeper of the last captured [`JsonDiagnostic`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorReporter {
    last: Option<JsonDiagnostic>,
}

impl ErrorReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the stored diagnostic with a copy of `diagnostic`.
    ///
    /// `None` is a no-op: the previously stored diagnostic is kept as is.
    pub fn set(&mut self, diagnostic: Option<&JsonDiagnostic>) {
        if let Some(d) = diagnostic {
            self.last = Some(d.clone());
        }
    }

    /// Store `diagnostic`, replacing whatever was there.
    pub fn record(&mut self, diagnostic: JsonDiagnostic) {
        self.last = Some(diagnostic);
    }

    /// The most recently captured diagnostic, if any was ever captured.
    pub fn last(&self) -> Option<&JsonDiagnostic> {
        self.last.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::DiagnosticCategory;

    fn unexpected_token() -> JsonDiagnostic {
        JsonDiagnostic::new(42, 7, "<bytes>", "Unexpected token", DiagnosticCategory::Syntax)
    }

    #[test]
    fn starts_empty() {
        assert!(ErrorReporter::new().last().is_none());
    }

    #[test]
    fn set_then_get() {
        let mut reporter = ErrorReporter::new();
        reporter.set(Some(&unexpected_token()));

        let last = reporter.last().unwrap();
        assert_eq!(last.line(), 42);
        assert_eq!(last.column(), 7);
        assert_eq!(last.text(), "Unexpected token");
    }

    #[test]
    fn setting_none_keeps_previous() {
        let mut reporter = ErrorReporter::new();
        reporter.set(Some(&unexpected_token()));
        reporter.set(None);

        assert_eq!(reporter.last(), Some(&unexpected_token()));
    }

    #[test]
    fn record_overwrites() {
        let mut reporter = ErrorReporter::new();
        reporter.record(unexpected_token());
        let newer = JsonDiagnostic::new(1, 1, "b.json", "EOF", DiagnosticCategory::Eof);
        reporter.record(newer.clone());
        assert_eq!(reporter.last(), Some(&newer));
    }
}
