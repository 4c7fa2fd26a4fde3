//! Shared utilities for certrev
//!
//! Currently this is the logging setup used by binaries and integration
//! tests that embed the gatherer.

pub mod tracing;

pub use self::tracing::{init, resolution_span, LogFormat, LogSettings};
