//! Builder methods for creating errors with context

use super::types::{Error, StoreKind, Window};
use std::path::PathBuf;

impl Error {
    /// Create an ambiguity error for a revision window
    #[must_use]
    pub fn ambiguous(window: Window, revision: u32, count: usize) -> Self {
        Error::Ambiguous {
            window,
            revision,
            count,
        }
    }

    /// Create a store read error
    #[must_use]
    pub fn store(store: StoreKind, namespace: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::Store {
            store,
            namespace: namespace.into(),
            reason: reason.into(),
            source: None,
        }
    }

    /// Create a store read error wrapping the underlying failure
    #[must_use]
    pub fn store_with_source(
        store: StoreKind,
        namespace: impl Into<String>,
        reason: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Error::Store {
            store,
            namespace: namespace.into(),
            reason: reason.into(),
            source: Some(source.into()),
        }
    }

    /// Create a configuration error
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }

    /// Create a file system error with context
    #[must_use]
    pub fn file_system(
        path: impl Into<PathBuf>,
        operation: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        Error::FileSystem {
            path: path.into(),
            operation: operation.into(),
            source,
        }
    }
}
