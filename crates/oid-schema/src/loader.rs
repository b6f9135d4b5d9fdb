//! # Loader
//!
//! Drives one ingestion: read the document, parse it into a generic JSON
//! tree, validate the root shape, and size the item store.
//!
//! ## Pipeline
//!
//! 1. Read: file or memory, bounded by `LoaderConfig::max_document_bytes`.
//! 2. Parse: `serde_json` builds a [`Value`] tree. The root must be an
//!    object or an array; a scalar root is a parse failure. Read and parse
//!    failures are syntax-class and leave stored items untouched.
//! 3. Reset: once the document parses, previously stored item definitions
//!    are released. Reloading replaces, it never merges.
//! 4. Validate: [`validate_root`] unpacks `(appid, items)`.
//! 5. Commit: capacity equal to the item count is reserved, then the
//!    appid is stored. Size stays 0 until per-item parsing fills the slots.
//!
//! Every syntax-class failure is captured into the context's reporter.
//! Format-class failures are not. The parsed tree is dropped before the
//! call returns, whatever the outcome.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use oid_core::diagnostic::BYTES_SOURCE;
use oid_core::{DiagnosticCategory, JsonDiagnostic, SchemaError};
use serde_json::Value;

use crate::context::SchemaContext;
use crate::root::validate_root;
use crate::store::ItemStore;

impl SchemaContext {
    /// Load a Steam Inventory Schema from a JSON file.
    ///
    /// # Errors
    ///
    /// - `SchemaError::InvalidArgument` if `path` is empty or the document
    ///   root is not an object.
    /// - `SchemaError::Syntax` if the file cannot be read, exceeds the size
    ///   limit, is not valid JSON, or fails the strict root unpack. The
    ///   diagnostic is also captured in [`SchemaContext::last_error`].
    /// - `SchemaError::FormatMismatch` if `items` is not an array.
    /// - `SchemaError::OutOfMemory` if the item store cannot be sized.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<(), SchemaError> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(SchemaError::InvalidArgument {
                reason: "schema path is empty",
            });
        }

        let source = path.display().to_string();
        let result = read_file(path, &source, self.config.max_document_bytes)
            .map_err(SchemaError::from)
            .and_then(|bytes| self.ingest(&source, &bytes));
        self.capture(&source, result)
    }

    /// Load a Steam Inventory Schema from an in-memory JSON document.
    ///
    /// Same pipeline and errors as [`SchemaContext::load`], with
    /// diagnostics attributed to `<bytes>`.
    pub fn load_bytes(&mut self, bytes: &[u8]) -> Result<(), SchemaError> {
        let max = self.config.max_document_bytes;
        let result: Result<(), SchemaError> = if bytes.len() as u64 > max {
            Err(JsonDiagnostic::too_large(BYTES_SOURCE, bytes.len() as u64, max).into())
        } else {
            self.ingest(BYTES_SOURCE, bytes)
        };
        self.capture(BYTES_SOURCE, result)
    }

    /// Load a Steam Inventory Schema from a JSON string.
    pub fn load_str(&mut self, json: &str) -> Result<(), SchemaError> {
        self.load_bytes(json.as_bytes())
    }

    fn ingest(&mut self, source: &str, bytes: &[u8]) -> Result<(), SchemaError> {
        tracing::debug!(source, bytes = bytes.len(), "parsing item definition schema");

        let root: Value = serde_json::from_slice(bytes)
            .map_err(|e| SchemaError::Syntax(JsonDiagnostic::from_json_error(source, &e)))?;

        if !(root.is_object() || root.is_array()) {
            return Err(SchemaError::Syntax(scalar_root_diagnostic(source, bytes)));
        }

        self.items.clear();

        let shape = validate_root(root)?;
        commit(&mut self.appid, &mut self.items, shape.appid, shape.items.len())?;

        tracing::info!(
            source,
            appid = shape.appid,
            item_count = shape.items.len(),
            capacity = self.items.capacity(),
            "loaded item definition schema"
        );
        Ok(())
    }

    fn capture(
        &mut self,
        source: &str,
        result: Result<(), SchemaError>,
    ) -> Result<(), SchemaError> {
        if let Err(e) = &result {
            tracing::warn!(source, code = %e.code(), error = %e, "schema load failed");
            if let SchemaError::Syntax(diagnostic) = e {
                self.reporter.record(diagnostic.clone());
            }
        }
        result
    }
}

/// Size `store` for `item_count` definitions, then record `appid`.
///
/// The appid is written only once the reservation succeeded.
fn commit<T>(
    appid_slot: &mut Option<i64>,
    store: &mut ItemStore<T>,
    appid: i64,
    item_count: usize,
) -> Result<(), SchemaError> {
    store.reserve(item_count)?;
    *appid_slot = Some(appid);
    Ok(())
}

/// A schema document must start with an object or an array; scalar roots
/// are rejected at the first significant character.
fn scalar_root_diagnostic(source: &str, bytes: &[u8]) -> JsonDiagnostic {
    let offset = bytes
        .iter()
        .position(|&b| !matches!(b, b' ' | b'\t' | b'\n' | b'\r'))
        .unwrap_or(bytes.len());
    let before = &bytes[..offset];
    let line = 1 + before.iter().filter(|&&b| b == b'\n').count();
    let column = match before.iter().rposition(|&b| b == b'\n') {
        Some(nl) => offset - nl,
        None => offset + 1,
    };
    JsonDiagnostic::new(
        line,
        column,
        source,
        "'[' or '{' expected",
        DiagnosticCategory::Syntax,
    )
}

fn read_file(path: &Path, source: &str, max: u64) -> Result<Vec<u8>, JsonDiagnostic> {
    let file = File::open(path).map_err(|e| JsonDiagnostic::from_io_error(source, &e))?;

    let declared = file
        .metadata()
        .map_err(|e| JsonDiagnostic::from_io_error(source, &e))?
        .len();
    if declared > max {
        return Err(JsonDiagnostic::too_large(source, declared, max));
    }

    // The file may grow after the metadata check; never read past the limit.
    let mut bytes = Vec::new();
    file.take(max.saturating_add(1))
        .read_to_end(&mut bytes)
        .map_err(|e| JsonDiagnostic::from_io_error(source, &e))?;
    if bytes.len() as u64 > max {
        return Err(JsonDiagnostic::too_large(source, bytes.len() as u64, max));
    }
    Ok(bytes)
}
