//! # Handle Surface
//!
//! Free functions over optional handles, for hosts that model a context or
//! path as possibly absent (FFI shims, table-driven callers). Each one
//! forwards to the corresponding [`SchemaContext`] method after checking
//! its arguments:
//!
//! - Fallible operations return `SchemaError::InvalidArgument` when the
//!   context or path is `None`.
//! - Accessors return `None` (or zero) for a missing context.
//! - Mutators without a result are no-ops on a missing context.

use std::path::Path;

use oid_core::{ErrorCode, JsonDiagnostic, SchemaError};

use crate::context::SchemaContext;

const MISSING_CONTEXT: SchemaError = SchemaError::InvalidArgument {
    reason: "schema context is missing",
};

/// Create an empty context.
pub fn init() -> SchemaContext {
    SchemaContext::init()
}

/// Release a context. `None` is a no-op.
pub fn free(ctx: Option<SchemaContext>) {
    if let Some(ctx) = ctx {
        ctx.free();
    }
}

/// Load a schema file into `ctx`.
pub fn load(ctx: Option<&mut SchemaContext>, path: Option<&Path>) -> Result<(), SchemaError> {
    let ctx = ctx.ok_or(MISSING_CONTEXT)?;
    let path = path.ok_or(SchemaError::InvalidArgument {
        reason: "schema path is missing",
    })?;
    ctx.load(path)
}

/// Grow the item store of `ctx` by exactly `additional` slots.
pub fn reserve(ctx: Option<&mut SchemaContext>, additional: usize) -> Result<(), SchemaError> {
    ctx.ok_or(MISSING_CONTEXT)?.reserve(additional)
}

/// Release the item store of `ctx`. `None` is a no-op.
pub fn clear(ctx: Option<&mut SchemaContext>) {
    if let Some(ctx) = ctx {
        ctx.clear();
    }
}

pub fn capacity(ctx: Option<&SchemaContext>) -> usize {
    ctx.map_or(0, SchemaContext::capacity)
}

pub fn size(ctx: Option<&SchemaContext>) -> usize {
    ctx.map_or(0, SchemaContext::size)
}

/// Store a copy of `diagnostic` in `ctx`. A `None` diagnostic keeps the
/// previously stored one.
pub fn set_error(ctx: Option<&mut SchemaContext>, diagnostic: Option<&JsonDiagnostic>) {
    if let Some(ctx) = ctx {
        ctx.set_error(diagnostic);
    }
}

/// Last captured diagnostic of `ctx`; `None` for a missing context.
pub fn get_error(ctx: Option<&SchemaContext>) -> Option<&JsonDiagnostic> {
    ctx.and_then(SchemaContext::last_error)
}

/// Label for a raw result code.
pub fn code_to_string(raw: i64) -> &'static str {
    oid_core::code_to_string(raw)
}

/// Numeric result code of a load.
pub fn load_code(ctx: Option<&mut SchemaContext>, path: Option<&Path>) -> ErrorCode {
    ErrorCode::of(&load(ctx, path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use oid_core::DiagnosticCategory;

    #[test]
    fn missing_handles_are_invalid_arguments() {
        let mut ctx = init();
        assert_eq!(
            load_code(None, Some(Path::new("file.json"))),
            ErrorCode::InvalidArgument
        );
        assert_eq!(load_code(Some(&mut ctx), None), ErrorCode::InvalidArgument);
        assert_eq!(
            ErrorCode::of(&reserve(None, 4)),
            ErrorCode::InvalidArgument
        );
        free(Some(ctx));
    }

    #[test]
    fn accessors_tolerate_missing_context() {
        assert_eq!(capacity(None), 0);
        assert_eq!(size(None), 0);
        assert!(get_error(None).is_none());
        clear(None);
        set_error(None, None);
        free(None);
    }

    #[test]
    fn set_error_none_keeps_previous() {
        let mut ctx = init();
        let diag = JsonDiagnostic::new(42, 7, "<bytes>", "Unexpected token", DiagnosticCategory::Syntax);
        set_error(Some(&mut ctx), Some(&diag));
        set_error(Some(&mut ctx), None);
        assert_eq!(get_error(Some(&ctx)), Some(&diag));
    }

    #[test]
    fn reserve_and_clear_through_handles() {
        let mut ctx = init();
        reserve(Some(&mut ctx), 5).unwrap();
        reserve(Some(&mut ctx), 3).unwrap();
        assert_eq!(capacity(Some(&ctx)), 8);
        assert_eq!(size(Some(&ctx)), 0);
        clear(Some(&mut ctx));
        clear(Some(&mut ctx));
        assert_eq!(capacity(Some(&ctx)), 0);
    }

    #[test]
    fn code_labels_forward() {
        assert_eq!(code_to_string(0), "Success");
        assert_eq!(code_to_string(-1), "Unknown error");
    }
}
