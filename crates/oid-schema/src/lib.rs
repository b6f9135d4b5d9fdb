//! # oid-schema — Steam Inventory Schema Ingestion
//!
//! Loads a Steam Inventory Schema JSON document (an `appid` plus an array
//! of item definitions) into a [`SchemaContext`], with a distinct error for
//! every way the input can be malformed.
//!
//! ## Pipeline
//!
//! file or bytes → `serde_json` tree → strict root validation
//! ([`root`]) → item store sizing ([`store`]) → context commit
//! ([`context`]). Failures short-circuit; syntax-class failures are also
//! captured into the context's error reporter.
//!
//! ```no_run
//! use oid_schema::SchemaContext;
//!
//! let mut ctx = SchemaContext::init();
//! match ctx.load("data/item_def_steam_official_example.json") {
//!     Ok(()) => println!("appid {:?}, {} slots", ctx.appid(), ctx.capacity()),
//!     Err(e) => eprintln!("{e} ({})", e.code()),
//! }
//! ctx.free();
//! ```
//!
//! ## Crate Policy
//!
//! - Depends only on `oid-core` internally.
//! - Synchronous and single-threaded; no internal locking.
//! - Item fields are not parsed: [`ItemDef`] is an opaque payload and
//!   loads reserve capacity without filling slots.

pub mod context;
pub mod loader;
pub mod root;
pub mod store;
pub mod surface;

pub use context::SchemaContext;
pub use oid_core::{
    code_to_string, DiagnosticCategory, ErrorCode, JsonDiagnostic, LoaderConfig, SchemaError,
};
pub use root::{validate_root, RootShape};
pub use store::{ItemDef, ItemStore};
