//! Stored secrets

use super::meta::{ObjectKey, ObjectMeta};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A secret holding issued credential material.
///
/// The payload is opaque; only existence matters during resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Secret {
    pub metadata: ObjectMeta,
    #[serde(default)]
    pub data: BTreeMap<String, Vec<u8>>,
}

impl Secret {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            metadata: ObjectMeta::new(namespace, name),
            data: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_data(mut self, key: impl Into<String>, value: impl Into<Vec<u8>>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn key(&self) -> ObjectKey {
        self.metadata.key()
    }
}
