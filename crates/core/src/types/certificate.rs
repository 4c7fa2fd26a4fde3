//! Certificate snapshots

use super::meta::{ObjectKey, ObjectMeta, OwnerReference};
use crate::constants::{CERTIFICATE_API_VERSION, CERTIFICATE_KIND, INITIAL_REVISION};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Desired state of a certificate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateSpec {
    /// Name of the secret that should hold the issued credential
    pub secret_name: String,
}

/// Observed state of a certificate
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateStatus {
    /// Revision of the last accepted issuance request.
    ///
    /// Stays `None` until the first issuance request has been accepted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revision: Option<u32>,
}

/// A certificate as seen by a resolution pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certificate {
    pub metadata: ObjectMeta,
    pub spec: CertificateSpec,
    #[serde(default)]
    pub status: CertificateStatus,
}

impl Certificate {
    /// Create a certificate that has never been issued
    pub fn new(
        namespace: impl Into<String>,
        name: impl Into<String>,
        secret_name: impl Into<String>,
    ) -> Self {
        Self {
            metadata: ObjectMeta::new(namespace, name),
            spec: CertificateSpec {
                secret_name: secret_name.into(),
            },
            status: CertificateStatus::default(),
        }
    }

    /// Set the recorded revision
    #[must_use]
    pub fn with_revision(mut self, revision: u32) -> Self {
        self.status.revision = Some(revision);
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

    pub fn secret_name(&self) -> &str {
        &self.spec.secret_name
    }

    pub fn revision(&self) -> Option<u32> {
        self.status.revision
    }

    /// Revision of the issuance request that would follow the recorded one.
    ///
    /// `None` once the recorded revision is `u32::MAX`; there is no next
    /// revision to look up.
    pub fn next_revision(&self) -> Option<u32> {
        match self.status.revision {
            Some(revision) => revision.checked_add(1),
            None => Some(INITIAL_REVISION),
        }
    }

    /// Controller reference that objects created for this certificate carry
    pub fn owner_reference(&self) -> OwnerReference {
        OwnerReference {
            api_version: CERTIFICATE_API_VERSION.to_string(),
            kind: CERTIFICATE_KIND.to_string(),
            name: self.metadata.name.clone(),
            uid: self.metadata.uid,
            controller: Some(true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_revision_starts_at_one() {
        let crt = Certificate::new("default", "web", "web-tls");
        assert_eq!(crt.revision(), None);
        assert_eq!(crt.next_revision(), Some(1));
    }

    #[test]
    fn test_next_revision_follows_recorded_revision() {
        let crt = Certificate::new("default", "web", "web-tls").with_revision(7);
        assert_eq!(crt.next_revision(), Some(8));
    }

    #[test]
    fn test_no_next_revision_past_max() {
        let crt = Certificate::new("default", "web", "web-tls").with_revision(u32::MAX);
        assert_eq!(crt.next_revision(), None);

        let crt = Certificate::new("default", "web", "web-tls").with_revision(u32::MAX - 1);
        assert_eq!(crt.next_revision(), Some(u32::MAX));
    }

    #[test]
    fn test_deserialize_without_status() {
        let raw = r#"{
            "metadata": {
                "namespace": "default",
                "name": "web",
                "uid": "6f1d3a52-8c4e-4c1b-9a53-3f7e0f3d2a11"
            },
            "spec": { "secretName": "web-tls" }
        }"#;
        let crt: Certificate = serde_json::from_str(raw).unwrap();
        assert_eq!(crt.secret_name(), "web-tls");
        assert_eq!(crt.revision(), None);
        assert_eq!(crt.key().to_string(), "default/web");
    }
}
