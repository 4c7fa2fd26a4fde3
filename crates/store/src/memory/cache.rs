//! Generic concurrent object cache

use certrev_core::{Error, IssuanceRequest, ObjectKey, Result, Secret, StoreKind};
use dashmap::DashMap;
use parking_lot::RwLock;
use std::sync::Arc;

/// Objects that can be held in an [`ObjectCache`]
pub trait CachedObject: Send + Sync + 'static {
    /// Store kind reported in read failures
    const STORE: StoreKind;

    fn object_key(&self) -> ObjectKey;
}

impl CachedObject for IssuanceRequest {
    const STORE: StoreKind = StoreKind::Requests;

    fn object_key(&self) -> ObjectKey {
        self.key()
    }
}

impl CachedObject for Secret {
    const STORE: StoreKind = StoreKind::Secrets;

    fn object_key(&self) -> ObjectKey {
        self.key()
    }
}

/// Concurrent map of objects keyed by namespace and name
#[derive(Debug)]
pub struct ObjectCache<T> {
    objects: DashMap<ObjectKey, Arc<T>>,
    failure: RwLock<Option<String>>,
}

impl<T: CachedObject> ObjectCache<T> {
    pub fn new() -> Self {
        Self {
            objects: DashMap::new(),
            failure: RwLock::new(None),
        }
    }

    /// Insert or replace an object, returning the previous version
    pub fn upsert(&self, object: T) -> Option<Arc<T>> {
        let key = object.object_key();
        tracing::trace!(key = %key, "cache upsert");
        self.objects.insert(key, Arc::new(object))
    }

    pub fn remove(&self, key: &ObjectKey) -> Option<Arc<T>> {
        tracing::trace!(key = %key, "cache remove");
        self.objects.remove(key).map(|(_, object)| object)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn clear(&self) {
        self.objects.clear();
    }

    /// Make every subsequent read fail with `reason`
    pub fn fail_with(&self, reason: impl Into<String>) {
        *self.failure.write() = Some(reason.into());
    }

    /// Undo [`fail_with`](Self::fail_with)
    pub fn recover(&self) {
        *self.failure.write() = None;
    }

    fn check_readable(&self, namespace: &str) -> Result<()> {
        match self.failure.read().as_ref() {
            Some(reason) => Err(Error::store(T::STORE, namespace, reason.clone())),
            None => Ok(()),
        }
    }

    pub fn get(&self, key: &ObjectKey) -> Result<Option<Arc<T>>> {
        self.check_readable(&key.namespace)?;
        Ok(self.objects.get(key).map(|entry| Arc::clone(entry.value())))
    }

    pub fn list(&self, namespace: &str) -> Result<Vec<Arc<T>>> {
        self.check_readable(namespace)?;
        Ok(self
            .objects
            .iter()
            .filter(|entry| entry.key().namespace == namespace)
            .map(|entry| Arc::clone(entry.value()))
            .collect())
    }
}

impl<T: CachedObject> Default for ObjectCache<T> {
    fn default() -> Self {
        Self::new()
    }
}
