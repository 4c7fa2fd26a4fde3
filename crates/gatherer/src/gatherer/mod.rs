//! The resolver

mod window;


use crate::view::ResolvedView;
use certrev_config::Config;
use certrev_core::{
    Certificate, IssuanceRequest, Predicate, Result, Window, CERTIFICATE_REVISION_ANNOTATION,
};
use certrev_store::{RequestStore, SecretStore};
use certrev_utils::resolution_span;
use std::sync::Arc;

/// Gathers the data needed to evaluate a certificate's readiness.
///
/// A gatherer holds no state between calls and can be shared across threads
/// as long as its stores can. Every call performs one secret lookup and at
/// most two request queries; the queries are not consistent with each other,
/// and a torn read is corrected by the caller's next pass.
#[derive(Debug, Clone)]
pub struct Gatherer<R, S> {
    requests: R,
    secrets: S,
    revision_annotation: String,
}

impl<R, S> Gatherer<R, S>
where
    R: RequestStore,
    S: SecretStore,
{
    pub fn new(requests: R, secrets: S) -> Self {
        Self {
            requests,
            secrets,
            revision_annotation: CERTIFICATE_REVISION_ANNOTATION.to_string(),
        }
    }

    /// Create a gatherer honouring the configured revision annotation
    pub fn from_config(requests: R, secrets: S, config: &Config) -> Self {
        Self::new(requests, secrets).with_revision_annotation(&config.revision_annotation)
    }

    #[must_use]
    pub fn with_revision_annotation(mut self, annotation: impl Into<String>) -> Self {
        self.revision_annotation = annotation.into();
        self
    }

    pub fn revision_annotation(&self) -> &str {
        &self.revision_annotation
    }

    /// Resolve the secret and the current and next issuance requests of
    /// `certificate`.
    ///
    /// Absent objects are reported as `None`, never as errors. Fails with
    /// [`Error::Ambiguous`](certrev_core::Error::Ambiguous) when more than one
    /// request owned by the certificate carries the queried revision, and
    /// with the store's own error when a store cannot be read. No partial
    /// view is returned on failure.
    pub fn data_for_certificate(&self, certificate: &Certificate) -> Result<ResolvedView> {
        let span = resolution_span(certificate.namespace(), certificate.name());
        let _entered = span.enter();

        let secret = self
            .secrets
            .get(certificate.namespace(), certificate.secret_name())?;
        if secret.is_none() {
            tracing::debug!(
                secret = %certificate.secret_name(),
                "Secret for this Certificate does not exist yet"
            );
        }

        // No revision recorded means no request has been accepted yet, so
        // there is nothing to call "current".
        let current_request = match certificate.revision() {
            Some(revision) => self.request_for_revision(certificate, Window::Current, revision)?,
            None => None,
        };

        let next_request = match certificate.next_revision() {
            Some(revision) => self.request_for_revision(certificate, Window::Next, revision)?,
            None => {
                tracing::debug!(
                    revision = ?certificate.revision(),
                    "Revision cannot be incremented, skipping the next revision"
                );
                None
            }
        };

        Ok(ResolvedView {
            certificate: certificate.clone(),
            secret,
            current_request,
            next_request,
        })
    }

    fn request_for_revision(
        &self,
        certificate: &Certificate,
        window: Window,
        revision: u32,
    ) -> Result<Option<Arc<IssuanceRequest>>> {
        let predicate = Predicate::owned_by(certificate)
            .and(Predicate::revision_at(&self.revision_annotation, revision));
        let requests = self.requests.list(certificate.namespace(), &predicate)?;
        window::single_request(window, revision, requests)
    }
}
