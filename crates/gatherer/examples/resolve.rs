//! Resolve a certificate against a small in-memory fixture.
//!
//! Run with `CERTREV_LOG=debug` to see each window being resolved.

use certrev_config::ConfigLoader;
use certrev_core::{Certificate, IssuanceRequest, Secret};
use certrev_gatherer::Gatherer;
use certrev_store::{MemoryRequestStore, MemorySecretStore};

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = ConfigLoader::new().load()?;
    certrev_utils::init(&config.log)?;

    let crt = Certificate::new("default", "web", "web-tls").with_revision(1);
    let requests = MemoryRequestStore::with_requests([
        IssuanceRequest::for_certificate(&crt, "web-1", 1),
        IssuanceRequest::for_certificate(&crt, "web-2", 2),
    ]);
    let secrets = MemorySecretStore::with_secrets([Secret::new("default", "web-tls")]);

    let gatherer = Gatherer::from_config(requests, secrets, &config);
    let view = gatherer.data_for_certificate(&crt)?;

    tracing::info!(
        certificate = %view.certificate.key(),
        secret = view.secret.is_some(),
        current = ?view.current_request.as_ref().map(|r| r.name().to_string()),
        next = ?view.next_request.as_ref().map(|r| r.name().to_string()),
        "resolved"
    );
    Ok(())
}
