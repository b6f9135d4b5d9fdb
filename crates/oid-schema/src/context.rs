//! # Schema Context
//!
//! The aggregate that owns everything one loaded schema needs: the appid,
//! the item store, the error reporter, and the loader configuration. It is
//! the unit of lifecycle management. Create it with [`SchemaContext::init`],
//! mutate it through loads and explicit store operations, and release it
//! with [`SchemaContext::free`] or by dropping it.
//!
//! A context is not synchronized. Hosts that share one across threads must
//! serialize access themselves, or keep one context per worker.

use oid_core::{ErrorReporter, JsonDiagnostic, LoaderConfig, SchemaError};

use crate::store::{ItemDef, ItemStore};

/// A loaded (or loadable) Steam Inventory Schema.
#[derive(Debug, Default)]
pub struct SchemaContext {
    pub(crate) appid: Option<i64>,
    pub(crate) items: ItemStore<ItemDef>,
    pub(crate) reporter: ErrorReporter,
    pub(crate) config: LoaderConfig,
}

impl SchemaContext {
    /// An empty context: no appid, no reserved slots, no captured error.
    ///
    /// The empty store does not allocate, so construction cannot fail.
    pub fn init() -> Self {
        Self::default()
    }

    /// An empty context with a custom loader configuration.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::InvalidArgument` if `config` fails validation.
    pub fn with_config(config: LoaderConfig) -> Result<Self, SchemaError> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::default()
        })
    }

    /// Release the item store and the context.
    pub fn free(mut self) {
        self.items.clear();
    }

    /// Appid of the last successful load; `None` before the first one.
    pub fn appid(&self) -> Option<i64> {
        self.appid
    }

    /// Number of reserved item definition slots.
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Number of populated item definition slots.
    pub fn size(&self) -> usize {
        self.items.size()
    }

    /// Populated item definitions.
    pub fn items(&self) -> &[ItemDef] {
        self.items.as_slice()
    }

    pub fn store(&self) -> &ItemStore<ItemDef> {
        &self.items
    }

    /// Grow the item store by exactly `additional` slots.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::OutOfMemory` if the store cannot grow; the
    /// store is left unchanged.
    pub fn reserve(&mut self, additional: usize) -> Result<(), SchemaError> {
        self.items.reserve(additional)
    }

    /// Release all item definitions. Appid and last error are untouched.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Most recently captured syntax-class diagnostic.
    pub fn last_error(&self) -> Option<&JsonDiagnostic> {
        self.reporter.last()
    }

    /// Overwrite the captured diagnostic. `None` keeps the current one.
    pub fn set_error(&mut self, diagnostic: Option<&JsonDiagnostic>) {
        self.reporter.set(diagnostic);
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }
}
