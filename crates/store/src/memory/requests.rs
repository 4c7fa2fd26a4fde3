//! In-memory issuance request store

use super::cache::ObjectCache;
use crate::traits::RequestStore;
use certrev_core::{IssuanceRequest, ObjectKey, Predicate, Result};
use std::sync::Arc;

/// Issuance request store backed by an [`ObjectCache`]
#[derive(Debug, Default)]
pub struct MemoryRequestStore {
    cache: ObjectCache<IssuanceRequest>,
}

impl MemoryRequestStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with `requests`
    pub fn with_requests(requests: impl IntoIterator<Item = IssuanceRequest>) -> Self {
        let store = Self::new();
        for request in requests {
            store.upsert(request);
        }
        store
    }

    pub fn upsert(&self, request: IssuanceRequest) -> Option<Arc<IssuanceRequest>> {
        self.cache.upsert(request)
    }

    pub fn remove(&self, key: &ObjectKey) -> Option<Arc<IssuanceRequest>> {
        self.cache.remove(key)
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    pub fn fail_with(&self, reason: impl Into<String>) {
        self.cache.fail_with(reason);
    }

    pub fn recover(&self) {
        self.cache.recover();
    }
}

impl RequestStore for MemoryRequestStore {
    fn list(&self, namespace: &str, predicate: &Predicate) -> Result<Vec<Arc<IssuanceRequest>>> {
        let mut requests = self.cache.list(namespace)?;
        requests.retain(|request| predicate.matches(request));
        tracing::trace!(
            namespace = %namespace,
            predicate = %predicate,
            matched = requests.len(),
            "listed issuance requests"
        );
        Ok(requests)
    }
}
