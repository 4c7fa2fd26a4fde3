//! Read-only stores consulted during a resolution pass
//!
//! This crate provides:
//! - `RequestStore` and `SecretStore`, the two collaborator traits
//! - In-memory cached stores standing in for a watch-driven local mirror

pub mod memory;
pub mod traits;

pub use memory::{CachedObject, MemoryRequestStore, MemorySecretStore, ObjectCache};
pub use traits::{RequestStore, SecretStore};
