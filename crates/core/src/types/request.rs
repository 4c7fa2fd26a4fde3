//! Issuance requests

use super::certificate::Certificate;
use super::meta::{ObjectKey, ObjectMeta};
use crate::constants::CERTIFICATE_REVISION_ANNOTATION;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Well-known condition types set on issuance requests
pub mod condition_types {
    pub const READY: &str = "Ready";
    pub const FAILED: &str = "Failed";
}

/// Status of a condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConditionStatus {
    True,
    False,
    Unknown,
}

/// A single status condition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    #[serde(rename = "type")]
    pub type_: String,
    pub status: ConditionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Condition {
    pub fn new(type_: impl Into<String>, status: ConditionStatus) -> Self {
        Self {
            type_: type_.into(),
            status,
            reason: None,
            message: None,
        }
    }

    #[must_use]
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }
}

/// Observed state of an issuance request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuanceRequestStatus {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<Condition>,
}

/// One attempt at obtaining a credential for a single certificate revision
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuanceRequest {
    pub metadata: ObjectMeta,
    #[serde(default)]
    pub status: IssuanceRequestStatus,
}

impl IssuanceRequest {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            metadata: ObjectMeta::new(namespace, name),
            status: IssuanceRequestStatus::default(),
        }
    }

    /// Create a request owned by `certificate` for the given revision, in the
    /// certificate's namespace
    pub fn for_certificate(
        certificate: &Certificate,
        name: impl Into<String>,
        revision: u32,
    ) -> Self {
        Self::new(certificate.namespace(), name)
            .owned_by(certificate)
            .with_revision(revision)
    }

    /// Add an owner reference to `certificate`
    #[must_use]
    pub fn owned_by(mut self, certificate: &Certificate) -> Self {
        self.metadata
            .owner_references
            .push(certificate.owner_reference());
        self
    }

    /// Tag the request with a revision under the default annotation
    #[must_use]
    pub fn with_revision(self, revision: u32) -> Self {
        self.with_annotation(CERTIFICATE_REVISION_ANNOTATION, revision.to_string())
    }

    #[must_use]
    pub fn with_annotation(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.annotations.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.status
            .conditions
            .retain(|existing| existing.type_ != condition.type_);
        self.status.conditions.push(condition);
        self
    }

    pub fn namespace(&self) -> &str {
        &self.metadata.namespace
    }

    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    pub fn uid(&self) -> Uuid {
        self.metadata.uid
    }

    pub fn key(&self) -> ObjectKey {
        self.metadata.key()
    }

    /// Revision recorded under the default annotation
    pub fn revision(&self) -> Option<u32> {
        self.revision_at(CERTIFICATE_REVISION_ANNOTATION)
    }

    /// Revision recorded under `annotation`.
    ///
    /// Missing or non-numeric values yield `None`. Revision predicates do not
    /// use this; they require the exact decimal form.
    pub fn revision_at(&self, annotation: &str) -> Option<u32> {
        self.metadata
            .annotation(annotation)
            .and_then(|value| value.trim().parse().ok())
    }

    pub fn condition(&self, type_: &str) -> Option<&Condition> {
        self.status.conditions.iter().find(|c| c.type_ == type_)
    }

    pub fn has_condition(&self, type_: &str, status: ConditionStatus) -> bool {
        self.condition(type_).is_some_and(|c| c.status == status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_revision_parsed_from_annotation() {
        let crt = Certificate::new("default", "web", "web-tls");
        let req = IssuanceRequest::for_certificate(&crt, "web-1", 3);
        assert_eq!(req.revision(), Some(3));
        assert!(req.metadata.is_owned_by(crt.uid()));
    }

    #[test]
    fn test_unparsable_revision_is_none() {
        let req = IssuanceRequest::new("default", "web-x")
            .with_annotation(CERTIFICATE_REVISION_ANNOTATION, "three");
        assert_eq!(req.revision(), None);

        let req = IssuanceRequest::new("default", "web-y");
        assert_eq!(req.revision(), None);
    }

    #[test]
    fn test_with_condition_replaces_same_type() {
        let req = IssuanceRequest::new("default", "web-1")
            .with_condition(
                Condition::new(condition_types::READY, ConditionStatus::False)
                    .with_reason("Pending"),
            )
            .with_condition(Condition::new(condition_types::READY, ConditionStatus::True));

        assert_eq!(req.status.conditions.len(), 1);
        assert!(req.has_condition(condition_types::READY, ConditionStatus::True));
        assert!(!req.has_condition(condition_types::FAILED, ConditionStatus::True));
    }
}
