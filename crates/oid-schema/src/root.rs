//! # Root Validator
//!
//! Strictly unpacks the top-level object of a Steam Inventory Schema into
//! `(appid, items)`. Exactly two members are accepted:
//!
//! - `appid`: a JSON integer representable as `i64`
//! - `items`: a JSON array
//!
//! ## Failure classes
//!
//! The strict unpack is done by `serde` with `deny_unknown_fields`. A
//! missing member, an extra member, or a mistyped `appid` fails the unpack
//! and is reported as a syntax-class error carrying a diagnostic.
//!
//! `items` is unpacked as an untyped [`Value`], which accepts anything.
//! Checking that it is really an array is a second step, and failing it is
//! a format-class error with no diagnostic. Callers see the two classes
//! through different result codes and only the first through the reporter.

use oid_core::diagnostic::VALIDATION_SOURCE;
use oid_core::{JsonDiagnostic, SchemaError};
use serde::Deserialize;
use serde_json::Value;

/// The unpacked root of a Steam Inventory Schema.
#[derive(Debug, Clone, PartialEq)]
pub struct RootShape {
    /// Steam application identifier the schema belongs to.
    pub appid: i64,
    /// Raw item definition records, not yet parsed.
    pub items: Vec<Value>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct StrictRoot {
    appid: i64,
    items: Value,
}

/// Validate and unpack a parsed root value.
///
/// Takes ownership so the items array moves out of the tree without a copy.
///
/// # Errors
///
/// - `SchemaError::InvalidArgument` if `root` is not a JSON object.
/// - `SchemaError::Syntax` if a member is missing, unexpected, or `appid`
///   is not an `i64`.
/// - `SchemaError::FormatMismatch` if `items` is not an array.
pub fn validate_root(root: Value) -> Result<RootShape, SchemaError> {
    if !root.is_object() {
        return Err(SchemaError::InvalidArgument {
            reason: "schema root must be a JSON object",
        });
    }

    let StrictRoot { appid, items } = serde_json::from_value(root)
        .map_err(|e| SchemaError::Syntax(JsonDiagnostic::from_json_error(VALIDATION_SOURCE, &e)))?;

    match items {
        Value::Array(items) => Ok(RootShape { appid, items }),
        _ => Err(SchemaError::FormatMismatch {
            field: "items",
            expected: "an array",
        }),
    }
}
