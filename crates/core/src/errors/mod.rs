//! Error types and recovery hints for certrev operations

mod builders;
mod conversions;
mod display;
mod recovery;
mod types;

pub use types::{Error, RecoveryHint, Result, StoreKind, Window};
