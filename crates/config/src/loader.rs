//! Configuration loader for certrev
//!
//! Sources are applied in order, later ones winning: built-in defaults, a
//! JSON file (explicit, or named by `CERTREV_CONFIG`), then individual
//! environment variables.

use crate::config::Config;
use certrev_core::{
    constants::{
        CERTREV_CONFIG_VAR, CERTREV_LOG_FORMAT_VAR, CERTREV_LOG_VAR,
        CERTREV_REVISION_ANNOTATION_VAR,
    },
    Error, Result,
};
use certrev_utils::LogFormat;
use std::path::{Path, PathBuf};

/// Configuration loader that layers all configuration sources
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Explicit configuration file
    file: Option<PathBuf>,
    /// Whether to apply environment variable overrides
    use_environment: bool,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self {
            file: None,
            use_environment: true,
        }
    }

    /// Load from this file instead of the one named by `CERTREV_CONFIG`
    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    /// Enable or disable environment variable overrides
    pub fn environment(mut self, enabled: bool) -> Self {
        self.use_environment = enabled;
        self
    }

    /// Load the configuration
    pub fn load(self) -> Result<Config> {
        let file = self.file.clone().or_else(|| {
            self.use_environment
                .then(|| std::env::var_os(CERTREV_CONFIG_VAR).map(PathBuf::from))
                .flatten()
        });

        let mut config = match file {
            Some(path) => Self::read_file(&path)?,
            None => Config::default(),
        };

        if self.use_environment {
            Self::apply_environment(&mut config)?;
        }

        config.validate()?;
        tracing::debug!(
            revision_annotation = %config.revision_annotation,
            log_filter = %config.log.filter,
            "configuration loaded"
        );
        Ok(config)
    }

    fn read_file(path: &Path) -> Result<Config> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| Error::file_system(path, "read", e))?;
        serde_json::from_str(&raw).map_err(|e| {
            Error::configuration(format!(
                "failed to parse configuration file '{}': {e}",
                path.display()
            ))
        })
    }

    fn apply_environment(config: &mut Config) -> Result<()> {
        if let Some(filter) = env_value(CERTREV_LOG_VAR) {
            config.log.filter = filter;
        }
        if let Some(format) = env_value(CERTREV_LOG_FORMAT_VAR) {
            config.log.format = format
                .parse::<LogFormat>()
                .map_err(|e| Error::configuration(format!("{CERTREV_LOG_FORMAT_VAR}: {e}")))?;
        }
        if let Some(annotation) = env_value(CERTREV_REVISION_ANNOTATION_VAR) {
            config.revision_annotation = annotation;
        }
        Ok(())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Read a non-empty environment variable
fn env_value(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
