//! Loader configuration.
//!
//! Configuration is constructed explicitly by the host. The loader reads
//! no environment variables and no configuration files.

use serde::{Deserialize, Serialize};

use crate::error::SchemaError;

/// Default upper bound on document size: 64 MiB.
pub const DEFAULT_MAX_DOCUMENT_BYTES: u64 = 64 * 1024 * 1024;

/// Tunables for schema loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Documents larger than this are rejected before parsing.
    pub max_document_bytes: u64,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            max_document_bytes: DEFAULT_MAX_DOCUMENT_BYTES,
        }
    }
}

impl LoaderConfig {
    /// Check the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::InvalidArgument` if `max_document_bytes` is zero.
    pub fn validate(&self) -> Result<(), SchemaError> {
        if self.max_document_bytes == 0 {
            return Err(SchemaError::InvalidArgument {
                reason: "max_document_bytes must be greater than zero",
            });
        }
        Ok(())
    }
}
