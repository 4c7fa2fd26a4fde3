//! The snapshot produced by one resolution pass

use certrev_core::{Certificate, IssuanceRequest, Secret};
use std::sync::Arc;

/// Certificate together with its secret and current/next issuance requests.
///
/// Each optional field is independent: the presence of one says nothing
/// about the others.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedView {
    pub certificate: Certificate,
    /// Secret named by `spec.secret_name`, if it exists
    pub secret: Option<Arc<Secret>>,
    /// Request matching `status.revision`
    pub current_request: Option<Arc<IssuanceRequest>>,
    /// Request matching the revision after `status.revision` (or the initial
    /// revision when none is recorded). Always `None` when the recorded
    /// revision cannot be incremented.
    pub next_request: Option<Arc<IssuanceRequest>>,
}

impl ResolvedView {
    /// Revision the next request was looked up under, if any
    pub fn next_revision(&self) -> Option<u32> {
        self.certificate.next_revision()
    }
}
