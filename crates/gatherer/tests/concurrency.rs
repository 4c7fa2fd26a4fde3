//! Concurrent use of a shared gatherer

use certrev_core::{Certificate, IssuanceRequest, Secret};
use certrev_gatherer::Gatherer;
use certrev_store::{MemoryRequestStore, MemorySecretStore};
use std::sync::Arc;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_shared_gatherer_returns_identical_views() {
    let crt = Certificate::new("default", "web", "web-tls").with_revision(3);
    let requests = MemoryRequestStore::with_requests([
        IssuanceRequest::for_certificate(&crt, "web-3", 3),
        IssuanceRequest::for_certificate(&crt, "web-4", 4),
    ]);
    let secrets = MemorySecretStore::with_secrets([Secret::new("default", "web-tls")]);
    let gatherer = Arc::new(Gatherer::new(requests, secrets));
    let expected = gatherer.data_for_certificate(&crt).unwrap();

    let mut handles = Vec::new();
    for _ in 0..16 {
        let gatherer = Arc::clone(&gatherer);
        let crt = crt.clone();
        handles.push(tokio::task::spawn_blocking(move || {
            (0..100)
                .map(|_| gatherer.data_for_certificate(&crt).unwrap())
                .collect::<Vec<_>>()
        }));
    }

    for handle in handles {
        for view in handle.await.unwrap() {
            assert_eq!(view, expected);
        }
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_resolution_tolerates_concurrent_writes() {
    let crt = Certificate::new("default", "web", "web-tls").with_revision(1);
    let requests = Arc::new(MemoryRequestStore::with_requests([
        IssuanceRequest::for_certificate(&crt, "web-1", 1),
    ]));
    let gatherer = Arc::new(Gatherer::new(
        Arc::clone(&requests),
        MemorySecretStore::new(),
    ));

    let writer = {
        let requests = Arc::clone(&requests);
        let crt = crt.clone();
        tokio::task::spawn_blocking(move || {
            for i in 0..200 {
                requests.upsert(IssuanceRequest::for_certificate(&crt, format!("other-{i}"), 50 + i));
            }
        })
    };

    let reader = {
        let gatherer = Arc::clone(&gatherer);
        tokio::task::spawn_blocking(move || {
            for _ in 0..200 {
                let view = gatherer.data_for_certificate(&crt).unwrap();
                assert_eq!(view.current_request.unwrap().name(), "web-1");
                assert!(view.next_request.is_none());
            }
        })
    };

    writer.await.unwrap();
    reader.await.unwrap();
}
