//! Store traits

use certrev_core::{IssuanceRequest, Predicate, Result, Secret};
use std::sync::Arc;

/// Indexed collection of issuance requests.
///
/// Implementations must support concurrent reads. A query with no matches
/// returns an empty list; `Err` is reserved for reads that failed.
pub trait RequestStore: Send + Sync {
    /// List the issuance requests in `namespace` satisfying `predicate`, in
    /// no particular order
    fn list(&self, namespace: &str, predicate: &Predicate) -> Result<Vec<Arc<IssuanceRequest>>>;
}

/// Keyed collection of secrets.
pub trait SecretStore: Send + Sync {
    /// Look up a secret by name.
    ///
    /// # Returns
    /// * `Ok(Some(secret))` - The secret exists
    /// * `Ok(None)` - No secret with that name exists in `namespace`
    /// * `Err(error)` - The store could not be read
    fn get(&self, namespace: &str, name: &str) -> Result<Option<Arc<Secret>>>;
}

impl<T: RequestStore + ?Sized> RequestStore for Arc<T> {
    fn list(&self, namespace: &str, predicate: &Predicate) -> Result<Vec<Arc<IssuanceRequest>>> {
        (**self).list(namespace, predicate)
    }
}

impl<T: SecretStore + ?Sized> SecretStore for Arc<T> {
    fn get(&self, namespace: &str, name: &str) -> Result<Option<Arc<Secret>>> {
        (**self).get(namespace, name)
    }
}
