//! # oid-core — Foundational Types for openitemdef
//!
//! Leaf crate of the workspace. Defines the vocabulary every schema
//! ingestion path speaks: the result-code taxonomy, the structured JSON
//! diagnostic captured on syntax-class failures, the reporter that keeps
//! the most recent diagnostic, and the loader configuration.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `oid-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod config;
pub mod diagnostic;
pub mod error;
pub mod reporter;

// Re-export primary types for ergonomic imports.
pub use config::LoaderConfig;
pub use diagnostic::{DiagnosticCategory, JsonDiagnostic};
pub use error::{code_to_string, ErrorCode, SchemaError};
pub use reporter::ErrorReporter;
