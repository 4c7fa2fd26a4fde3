//! Centralized configuration for certrev
//!
//! The configuration is immutable after construction and can be safely
//! shared across worker threads.

use certrev_core::{Error, Result, CERTIFICATE_REVISION_ANNOTATION};
use certrev_utils::LogSettings;
use serde::{Deserialize, Serialize};

/// Immutable configuration shared by the gatherer and its callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct Config {
    /// Logging settings
    pub log: LogSettings,

    /// Annotation an issuance request records its revision under
    pub revision_annotation: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log: LogSettings::default(),
            revision_annotation: CERTIFICATE_REVISION_ANNOTATION.to_string(),
        }
    }
}

impl Config {
    /// Parse a configuration document
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check invariants that serde cannot express
    pub fn validate(&self) -> Result<()> {
        if self.revision_annotation.trim().is_empty() {
            return Err(Error::configuration(
                "Field 'revisionAnnotation' cannot be empty",
            ));
        }
        if self.log.filter.trim().is_empty() {
            return Err(Error::configuration("Field 'log.filter' cannot be empty"));
        }
        Ok(())
    }
}
