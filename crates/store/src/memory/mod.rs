//! In-memory stores
//!
//! These mirror the shape of a watch-driven local cache: objects are
//! upserted and removed by whoever keeps the mirror fresh, and readers get
//! shared snapshots of individual objects. A cache can be switched into a
//! failing state to model an unreachable or unsynced mirror.

mod cache;
mod requests;
mod secrets;

#[cfg(test)]
mod tests;

pub use cache::{CachedObject, ObjectCache};
pub use requests::MemoryRequestStore;
pub use secrets::MemorySecretStore;
