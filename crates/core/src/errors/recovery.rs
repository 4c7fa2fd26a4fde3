//! Recovery utilities for certrev errors

use super::types::{Error, RecoveryHint};
use std::time::Duration;

impl Error {
    /// Get the recovery hint for this error
    #[must_use]
    pub fn recovery_hint(&self) -> RecoveryHint {
        match self {
            // Duplicates are pruned out of band, usually within one resync.
            Self::Ambiguous { .. } => RecoveryHint::Retry {
                after: Duration::from_secs(1),
            },
            Self::Store { .. } => RecoveryHint::RetryWithBackoff {
                initial_delay_ms: 100,
                max_retries: 5,
                backoff_multiplier: 2.0,
            },
            Self::Configuration { .. } | Self::Json { .. } => RecoveryHint::UpdateConfiguration,
            Self::FileSystem { path, .. } => RecoveryHint::Manual {
                instructions: format!("check that '{}' is readable", path.display()),
            },
        }
    }

    /// Check if this error is transient and the pass can be retried
    #[must_use]
    pub fn is_transient(&self) -> bool {
        matches!(
            self.recovery_hint(),
            RecoveryHint::Retry { .. } | RecoveryHint::RetryWithBackoff { .. }
        )
    }

    /// Check if this error reports duplicate issuance requests
    #[must_use]
    pub const fn is_ambiguous(&self) -> bool {
        matches!(self, Self::Ambiguous { .. })
    }
}
