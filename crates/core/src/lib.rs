//! Core domain types, predicates, errors, and constants for `certrev`.
//!
//! ## Key Components
//!
//! - **`errors`**: Defines the primary `Error` enum and `Result` type alias,
//!   including the ambiguity and store failures a resolution pass can hit.
//! - **`types`**: Certificates, issuance requests, secrets and the object
//!   metadata they share.
//! - **`predicate`**: Composable filters used to select issuance requests by
//!   owner and revision.
//! - **`constants`**: Annotation keys, environment variable names and defaults.

pub mod constants;
pub mod errors;
pub mod predicate;
pub mod types;

pub use self::{
    constants::*,
    errors::{Error, RecoveryHint, Result, StoreKind, Window},
    predicate::Predicate,
    types::*,
};
