//! In-memory secret store

use super::cache::ObjectCache;
use crate::traits::SecretStore;
use certrev_core::{ObjectKey, Result, Secret};
use std::sync::Arc;

/// Secret store backed by an [`ObjectCache`]
#[derive(Debug, Default)]
pub struct MemorySecretStore {
    cache: ObjectCache<Secret>,
}

impl MemorySecretStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_secrets(secrets: impl IntoIterator<Item = Secret>) -> Self {
        let store = Self::new();
        for secret in secrets {
            store.upsert(secret);
        }
        store
    }

    pub fn upsert(&self, secret: Secret) -> Option<Arc<Secret>> {
        self.cache.upsert(secret)
    }

    pub fn remove(&self, key: &ObjectKey) -> Option<Arc<Secret>> {
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

impl SecretStore for MemorySecretStore {
    fn get(&self, namespace: &str, name: &str) -> Result<Option<Arc<Secret>>> {
        self.cache.get(&ObjectKey::new(namespace, name))
    }
}
