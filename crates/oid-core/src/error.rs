//! # Error Types — Schema Ingestion Taxonomy
//!
//! Every schema operation returns an explicit `Result<_, SchemaError>`.
//! Each error classifies into exactly one [`ErrorCode`], the stable numeric
//! taxonomy exposed to hosts that only consume result codes.
//!
//! ## Classes
//!
//! - **Syntax-class** ([`SchemaError::Syntax`]): unreadable file, malformed
//!   JSON, or a strict root unpack that failed. Carries a [`JsonDiagnostic`]
//!   which the loader also captures into the context's reporter.
//! - **Format-class** ([`SchemaError::FormatMismatch`]): the root unpacked
//!   but a field has the wrong semantic shape. No diagnostic is captured.

use std::fmt;

use thiserror::Error;

use crate::diagnostic::JsonDiagnostic;

/// Numeric result codes for schema operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ErrorCode {
    /// Operation completed.
    Success = 0,
    /// Missing or empty context handle, path, or configuration value.
    InvalidArgument = 1,
    /// Item store allocation failed.
    OutOfMemory = 2,
    /// JSON unpacked positionally but a field has the wrong shape.
    FormatMismatch = 3,
    /// File unreadable, JSON malformed, or strict unpack failed.
    SyntaxError = 4,
    /// Fallback for codes outside the defined set.
    Unknown = 5,
}

impl ErrorCode {
    /// All defined codes, in numeric order.
    pub const ALL: [ErrorCode; 6] = [
        ErrorCode::Success,
        ErrorCode::InvalidArgument,
        ErrorCode::OutOfMemory,
        ErrorCode::FormatMismatch,
        ErrorCode::SyntaxError,
        ErrorCode::Unknown,
    ];

    /// Returns the fixed human-readable label for this code.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::Success => "Success",
            ErrorCode::InvalidArgument => "Invalid argument",
            ErrorCode::OutOfMemory => "Out of memory",
            ErrorCode::FormatMismatch => "Unexpected Steam Inventory Schema JSON",
            ErrorCode::SyntaxError => "JSON parsing error",
            ErrorCode::Unknown => "Unknown error",
        }
    }

    /// Returns the numeric value of this code.
    pub fn as_raw(self) -> i32 {
        self as i32
    }

    /// Maps a raw numeric code back to an `ErrorCode`.
    ///
    /// Any value outside the defined range, negative values included,
    /// maps to [`ErrorCode::Unknown`].
    pub fn from_raw(raw: i64) -> Self {
        match raw {
            0 => ErrorCode::Success,
            1 => ErrorCode::InvalidArgument,
            2 => ErrorCode::OutOfMemory,
            3 => ErrorCode::FormatMismatch,
            4 => ErrorCode::SyntaxError,
            _ => ErrorCode::Unknown,
        }
    }

    /// Classifies the outcome of any schema operation.
    pub fn of<T>(result: &Result<T, SchemaError>) -> Self {
        match result {
            Ok(_) => ErrorCode::Success,
            Err(e) => e.code(),
        }
    }

    /// True for codes whose failures carry a captured diagnostic.
    pub fn has_diagnostic(self) -> bool {
        self == ErrorCode::SyntaxError
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Label for a raw result code. Total over every `i64`.
pub fn code_to_string(raw: i64) -> &'static str {
    ErrorCode::from_raw(raw).as_str()
}

/// Error returned by schema context, store, validator, and loader operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// A required handle, path, or configuration value was missing or empty.
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// What was wrong with the argument.
        reason: &'static str,
    },

    /// The item store could not grow its backing buffer.
    #[error("out of memory: cannot reserve {requested} additional item definition slots")]
    OutOfMemory {
        /// Number of additional slots that were requested.
        requested: usize,
    },

    /// The root object unpacked but a field has the wrong semantic shape.
    #[error("unexpected Steam Inventory Schema JSON: `{field}` must be {expected}")]
    FormatMismatch {
        /// Name of the offending root member.
        field: &'static str,
        /// Shape the member was required to have.
        expected: &'static str,
    },

    /// Reading, parsing, or strictly unpacking the document failed.
    #[error("JSON parsing error: {0}")]
    Syntax(JsonDiagnostic),
}

impl SchemaError {
    /// Returns the result code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            SchemaError::InvalidArgument { .. } => ErrorCode::InvalidArgument,
            SchemaError::OutOfMemory { .. } => ErrorCode::OutOfMemory,
            SchemaError::FormatMismatch { .. } => ErrorCode::FormatMismatch,
            SchemaError::Syntax(_) => ErrorCode::SyntaxError,
        }
    }

    /// The captured diagnostic, present only for syntax-class errors.
    pub fn diagnostic(&self) -> Option<&JsonDiagnostic> {
        match self {
            SchemaError::Syntax(d) => Some(d),
            _ => None,
        }
    }
}

impl From<JsonDiagnostic> for SchemaError {
    fn from(diagnostic: JsonDiagnostic) -> Self {
        SchemaError::Syntax(diagnostic)
    }
}
