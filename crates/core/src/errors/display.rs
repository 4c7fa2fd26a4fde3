//! Display implementations for error types

use super::types::Error;
use std::fmt;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Ambiguous {
                window, revision, ..
            } => {
                write!(
                    f,
                    "multiple CertificateRequests were found for the '{window}' revision {revision}, issuance is skipped until there are no more duplicates"
                )
            }
            Error::Store {
                store,
                namespace,
                reason,
                ..
            } => {
                if namespace.is_empty() {
                    write!(f, "{store} store read failed: {reason}")
                } else {
                    write!(
                        f,
                        "{store} store read failed in namespace '{namespace}': {reason}"
                    )
                }
            }
            Error::Configuration { message } => {
                write!(f, "configuration error: {message}")
            }
            Error::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "file system {} operation failed for '{}': {}",
                    operation,
                    path.display(),
                    source
                )
            }
            Error::Json { message, .. } => {
                write!(f, "JSON error: {message}")
            }
        }
    }
}
