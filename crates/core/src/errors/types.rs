//! Core error type definitions

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Result type alias for certrev operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for certrev operations using thiserror
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// More than one issuance request exists for a single (owner, revision)
    Ambiguous {
        window: Window,
        revision: u32,
        count: usize,
    },

    /// A backing store could not be read
    Store {
        store: StoreKind,
        namespace: String,
        reason: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration errors
    Configuration { message: String },

    /// File system operations
    FileSystem {
        path: PathBuf,
        operation: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization errors
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

/// The revision window a lookup was performed for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Window {
    /// The revision currently recorded on the certificate
    Current,
    /// The revision one past the recorded one (or the initial revision)
    Next,
}

impl Window {
    pub const fn as_str(self) -> &'static str {
        match self {
            Window::Current => "current",
            Window::Next => "next",
        }
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which collaborator a store error came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Requests,
    Secrets,
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreKind::Requests => f.write_str("issuance request"),
            StoreKind::Secrets => f.write_str("secret"),
        }
    }
}

/// Recovery hints for callers driving a reconciliation loop
#[derive(Debug, Clone, PartialEq)]
pub enum RecoveryHint {
    /// Re-run the whole pass later
    Retry { after: Duration },

    /// Re-run the whole pass with exponential backoff
    RetryWithBackoff {
        initial_delay_ms: u64,
        max_retries: u32,
        backoff_multiplier: f64,
    },

    /// Fix the configuration before retrying
    UpdateConfiguration,

    /// No automated recovery possible
    Manual { instructions: String },
}
