//! Tests for the in-memory stores

use super::*;
use crate::traits::{RequestStore, SecretStore};
use certrev_core::{Certificate, Error, IssuanceRequest, ObjectKey, Predicate, Secret, StoreKind};
use std::sync::Arc;

fn everything() -> Predicate {
    Predicate::All(Vec::new())
}

#[test]
fn test_secret_lookup_distinguishes_missing_from_failed() {
    let store = MemorySecretStore::with_secrets([Secret::new("default", "web-tls")]);

    assert!(store.get("default", "web-tls").unwrap().is_some());
    assert!(store.get("default", "api-tls").unwrap().is_none());
    assert!(store.get("other", "web-tls").unwrap().is_none());

    store.fail_with("connection refused");
    match store.get("default", "web-tls") {
        Err(Error::Store {
            store, namespace, ..
        }) => {
            assert_eq!(store, StoreKind::Secrets);
            assert_eq!(namespace, "default");
        }
        other => panic!("expected store error, got {other:?}"),
    }

    store.recover();
    assert!(store.get("default", "web-tls").unwrap().is_some());
}

#[test]
fn test_upsert_replaces_and_remove_prunes() {
    let crt = Certificate::new("default", "web", "web-tls");
    let store = MemoryRequestStore::new();

    assert!(store
        .upsert(IssuanceRequest::for_certificate(&crt, "web-1", 1))
        .is_none());
    let previous = store.upsert(IssuanceRequest::for_certificate(&crt, "web-1", 2));
    assert_eq!(previous.and_then(|r| r.revision()), Some(1));
    assert_eq!(store.len(), 1);

    let listed = store.list("default", &everything()).unwrap();
    assert_eq!(listed[0].revision(), Some(2));

    assert!(store.remove(&ObjectKey::new("default", "web-1")).is_some());
    assert!(store.is_empty());
    assert!(store.list("default", &everything()).unwrap().is_empty());
}

#[test]
fn test_request_store_failure_reports_request_kind() {
    let store = MemoryRequestStore::new();
    store.fail_with("watch expired");
    let err = store.list("default", &everything()).unwrap_err();
    assert!(matches!(
        err,
        Error::Store {
            store: StoreKind::Requests,
            ..
        }
    ));
}

#[test]
fn test_list_filters_by_predicate() {
    let crt = Certificate::new("default", "web", "web-tls");
    let other = Certificate::new("default", "api", "api-tls");
    let store = MemoryRequestStore::with_requests([
        IssuanceRequest::for_certificate(&crt, "web-1", 1),
        IssuanceRequest::for_certificate(&crt, "web-2", 2),
        IssuanceRequest::for_certificate(&other, "api-1", 1),
    ]);

    let predicate = Predicate::owned_by(&crt).and(Predicate::revision(1));
    let found = store.list("default", &predicate).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name(), "web-1");
}

#[test]
fn test_list_scoped_to_namespace() {
    let crt = Certificate::new("default", "web", "web-tls");
    let mut elsewhere = IssuanceRequest::for_certificate(&crt, "web-1", 1);
    elsewhere.metadata.namespace = "other".to_string();
    let store = MemoryRequestStore::with_requests([elsewhere]);

    assert!(store
        .list("default", &Predicate::owned_by(&crt))
        .unwrap()
        .is_empty());
    assert_eq!(store.list("other", &Predicate::owned_by(&crt)).unwrap().len(), 1);
}

#[test]
fn test_object_cache_clear_drops_everything() {
    let cache: ObjectCache<Secret> = ObjectCache::new();
    cache.upsert(Secret::new("default", "web-tls"));
    cache.upsert(Secret::new("other", "api-tls"));
    assert_eq!(cache.len(), 2);

    cache.clear();

    assert!(cache.is_empty());
    assert!(cache
        .get(&ObjectKey::new("default", "web-tls"))
        .unwrap()
        .is_none());
    assert!(cache.list("other").unwrap().is_empty());
}

#[test]
fn test_arc_wrapped_store_delegates() {
    let store: Arc<dyn SecretStore> =
        Arc::new(MemorySecretStore::with_secrets([Secret::new("default", "web-tls")]));
    assert!(store.get("default", "web-tls").unwrap().is_some());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_reads_during_writes() {
    let crt = Certificate::new("default", "web", "web-tls");
    let store = Arc::new(MemoryRequestStore::new());

    let mut handles = Vec::new();
    for i in 0..8u32 {
        let store = Arc::clone(&store);
        let crt = crt.clone();
        handles.push(tokio::task::spawn_blocking(move || {
            for j in 0..50u32 {
                let name = format!("web-{i}-{j}");
                store.upsert(IssuanceRequest::for_certificate(&crt, name, j + 1));
                store.list("default", &everything()).unwrap();
            }
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    assert_eq!(store.len(), 400);
}
