//! Lock manager protocol tests

use crate::test_stores::{FailingStore, NoProbeStore, OddReplyStore, ProbeStore, memory};
use apilock_application::use_cases::LockManager;
use apilock_domain::error::Error;
use apilock_domain::{AcquisitionOutcome, FingerprintDeriver, LockKey, RequestIdentity};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

const TTL: Duration = Duration::from_secs(60);

fn key(path: &str) -> LockKey {
    let fingerprint = FingerprintDeriver::default()
        .derive(&RequestIdentity::request(path, json!({ "userID": 123 })))
        .unwrap();
    LockKey::new("ApiLock-", &fingerprint)
}

#[tokio::test]
async fn test_connectivity_check_accepts_pong() {
    let manager = LockManager::new(memory());
    assert!(manager.connectivity_check().await.is_ok());
}

#[tokio::test]
async fn test_connectivity_check_rejects_unexpected_reply() {
    let manager = LockManager::new(Arc::new(ProbeStore {
        reply: Some("LOADING"),
    }));

    let err = manager.connectivity_check().await.unwrap_err();
    assert!(matches!(err, Error::Connectivity { .. }));
    assert!(err.to_string().contains("Store connection error"));
}

#[tokio::test]
async fn test_connectivity_check_wraps_probe_failure() {
    let manager = LockManager::new(Arc::new(ProbeStore { reply: None }));

    let err = manager.connectivity_check().await.unwrap_err();
    assert!(matches!(err, Error::Connectivity { source: Some(_), .. }));
}

#[tokio::test]
async fn test_connectivity_check_requires_probe() {
    let manager = LockManager::new(Arc::new(NoProbeStore));

    let err = manager.connectivity_check().await.unwrap_err();
    assert!(matches!(err, Error::Config { .. }));
    assert!(err.to_string().contains("valid store client"));
}

#[tokio::test]
async fn test_acquire_then_duplicate() {
    let manager = LockManager::new(memory());
    let key = key("/api/v1/user");

    assert_eq!(
        manager.try_acquire(&key, TTL).await.unwrap(),
        AcquisitionOutcome::Acquired
    );
    assert_eq!(
        manager.try_acquire(&key, TTL).await.unwrap(),
        AcquisitionOutcome::Duplicate
    );
    assert!(manager.is_locked(&key).await.unwrap());
}

#[tokio::test]
async fn test_distinct_keys_do_not_contend() {
    let manager = LockManager::new(memory());

    let first = manager.try_acquire(&key("/api/v1/user"), TTL).await.unwrap();
    let second = manager.try_acquire(&key("/api/v1/order"), TTL).await.unwrap();

    assert!(first.is_acquired());
    assert!(second.is_acquired());
}

#[tokio::test]
async fn test_release_allows_reacquire() {
    let manager = LockManager::new(memory());
    let key = key("/api/v1/user");

    manager.try_acquire(&key, TTL).await.unwrap();
    manager.release(&key).await.unwrap();

    assert!(!manager.is_locked(&key).await.unwrap());
    assert!(manager.try_acquire(&key, TTL).await.unwrap().is_acquired());
}

#[tokio::test]
async fn test_release_is_idempotent() {
    let manager = LockManager::new(memory());
    let key = key("/api/v1/user");

    manager.release(&key).await.unwrap();
    manager.try_acquire(&key, TTL).await.unwrap();
    manager.release(&key).await.unwrap();
    manager.release(&key).await.unwrap();
}

#[tokio::test]
async fn test_lock_expires_without_release() {
    let manager = LockManager::new(memory());
    let key = key("/api/v1/user");

    manager
        .try_acquire(&key, Duration::from_millis(30))
        .await
        .unwrap();
    tokio::time::sleep(Duration::from_millis(80)).await;

    assert!(!manager.is_locked(&key).await.unwrap());
    assert!(manager.try_acquire(&key, TTL).await.unwrap().is_acquired());
}

#[tokio::test]
async fn test_zero_ttl_is_rejected() {
    let manager = LockManager::new(memory());

    let err = manager
        .try_acquire(&key("/api/v1/user"), Duration::ZERO)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Config { .. }));
}

#[tokio::test]
async fn test_unrecognized_reply_is_store_error() {
    let manager = LockManager::new(Arc::new(OddReplyStore));

    let err = manager
        .try_acquire(&key("/api/v1/user"), TTL)
        .await
        .unwrap_err();
    assert!(err.is_silenceable());
    assert!(err.to_string().contains("QUEUED"));
}

#[tokio::test]
async fn test_store_failure_propagates() {
    let manager = LockManager::new(Arc::new(FailingStore));
    let key = key("/api/v1/user");

    assert!(manager.try_acquire(&key, TTL).await.is_err());
    assert!(manager.is_locked(&key).await.is_err());
    assert!(manager.release(&key).await.is_err());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_acquire_has_one_winner() {
    let manager = LockManager::new(memory());
    let key = key("/api/v1/user");

    let attempts: Vec<_> = (0..16)
        .map(|_| {
            let manager = manager.clone();
            let key = key.clone();
            tokio::spawn(async move { manager.try_acquire(&key, TTL).await })
        })
        .collect();

    let mut acquired = 0;
    for attempt in attempts {
        if attempt.await.unwrap().unwrap().is_acquired() {
            acquired += 1;
        }
    }
    assert_eq!(acquired, 1);
}
