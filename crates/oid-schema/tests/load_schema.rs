//! Integration test: load Steam Inventory Schema documents from disk.
//!
//! Each test builds its own context and tears it down at the end. Fixture
//! documents that are not checked in are written into a temporary directory
//! that is removed when the test finishes.

use std::path::{Path, PathBuf};

use oid_schema::surface;
use oid_schema::{DiagnosticCategory, ErrorCode, LoaderConfig, SchemaContext};

fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data")
}

fn official_example() -> PathBuf {
    data_dir().join("item_def_steam_official_example.json")
}

/// Write `contents` to `name` inside a fresh temp dir.
fn write_fixture(name: &str, contents: &str) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    (dir, path)
}

#[test]
fn test_load_null_arguments() {
    let mut ctx = surface::init();
    assert_eq!(
        surface::load_code(None, Some(Path::new("file.json"))),
        ErrorCode::InvalidArgument
    );
    assert_eq!(
        surface::load_code(Some(&mut ctx), None),
        ErrorCode::InvalidArgument
    );
    surface::free(Some(ctx));
}

#[test]
fn test_load_missing_file() {
    let mut ctx = SchemaContext::init();
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("does_not_exist.json");

    let err = ctx.load(&missing).unwrap_err();
    assert_eq!(err.code(), ErrorCode::SyntaxError);

    let last = ctx.last_error().expect("diagnostic captured for missing file");
    assert_eq!(last.category(), DiagnosticCategory::Io);
    assert!(last.text().contains("unable to open"));
    ctx.free();
}

#[test]
fn test_load_truncated_json() {
    let (_dir, path) = write_fixture("invalid_syntax.json", "{\n\"key\":\"value\"");
    let mut ctx = SchemaContext::init();

    let result = ctx.load(&path);
    assert_eq!(ErrorCode::of(&result), ErrorCode::SyntaxError);

    let last = ctx.last_error().expect("diagnostic captured for truncated JSON");
    assert_eq!(last.category(), DiagnosticCategory::Eof);
    assert_eq!(last.line(), 2);
    assert!(path.display().to_string().starts_with(last.source()));
}

#[test]
fn test_load_valid_json_wrong_shape() {
    let (_dir, path) = write_fixture("invalid_schema.json", "{\n\"key\":\"value\"\n}");
    let mut ctx = SchemaContext::init();

    let result = ctx.load(&path);
    assert_eq!(ErrorCode::of(&result), ErrorCode::SyntaxError);

    let last = ctx.last_error().expect("unpack diagnostic captured");
    assert_eq!(last.category(), DiagnosticCategory::Data);
    assert!(!last.text().is_empty());
}

#[test]
fn test_load_items_not_array() {
    let (_dir, path) = write_fixture("items_object.json", r#"{"appid": 480, "items": {"a": 1}}"#);
    let mut ctx = SchemaContext::init();

    let err = ctx.load(&path).unwrap_err();
    assert_eq!(err.code(), ErrorCode::FormatMismatch);
    assert!(ctx.last_error().is_none());
    assert_eq!(ctx.appid(), None);
}

#[test]
fn test_load_official_example() {
    let mut ctx = SchemaContext::init();
    ctx.load(official_example()).unwrap();

    assert_eq!(ctx.appid(), Some(480));
    assert_eq!(ctx.capacity(), 6);
    assert_eq!(ctx.size(), 0);
    assert!(ctx.last_error().is_none());
    ctx.free();
}

#[test]
fn test_reload_is_destructive() {
    let (_dir, path) = write_fixture("small.json", r#"{"appid": 7, "items": [{}]}"#);
    let mut ctx = SchemaContext::init();

    ctx.load(official_example()).unwrap();
    ctx.reserve(10).unwrap();
    assert_eq!(ctx.capacity(), 16);

    ctx.load(&path).unwrap();
    assert_eq!(ctx.appid(), Some(7));
    assert_eq!(ctx.capacity(), 1);
}

#[test]
fn test_load_matches_load_bytes() {
    let bytes = std::fs::read(official_example()).unwrap();

    let mut from_file = SchemaContext::init();
    from_file.load(official_example()).unwrap();
    let mut from_bytes = SchemaContext::init();
    from_bytes.load_bytes(&bytes).unwrap();

    assert_eq!(from_file.appid(), from_bytes.appid());
    assert_eq!(from_file.capacity(), from_bytes.capacity());
}

#[test]
fn test_file_over_size_limit() {
    let mut ctx = SchemaContext::with_config(LoaderConfig {
        max_document_bytes: 64,
    })
    .unwrap();

    let err = ctx.load(official_example()).unwrap_err();
    assert_eq!(err.code(), ErrorCode::SyntaxError);
    assert_eq!(
        ctx.last_error().map(|d| d.category()),
        Some(DiagnosticCategory::TooLarge)
    );
}

#[test]
fn test_error_survives_later_success() {
    let (_dir, bad) = write_fixture("bad.json", "{");
    let mut ctx = SchemaContext::init();

    assert!(ctx.load(&bad).is_err());
    let captured = ctx.last_error().cloned();
    assert!(captured.is_some());

    ctx.load(official_example()).unwrap();
    assert_eq!(ctx.last_error().cloned(), captured);
}

#[test]
fn test_load_scalar_root() {
    let (_dir, path) = write_fixture("scalar.json", "  \"schema\"\n");
    let mut ctx = SchemaContext::init();

    let err = ctx.load(&path).unwrap_err();
    assert_eq!(err.code(), ErrorCode::SyntaxError);

    let last = ctx.last_error().expect("scalar root diagnostic captured");
    assert_eq!(last.category(), DiagnosticCategory::Syntax);
    assert_eq!((last.line(), last.column()), (1, 3));
}

#[test]
fn test_load_array_root() {
    let (_dir, path) = write_fixture("array.json", r#"[{"appid": 480, "items": []}]"#);
    let mut ctx = SchemaContext::init();

    let err = ctx.load(&path).unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidArgument);
    assert!(ctx.last_error().is_none());
}
