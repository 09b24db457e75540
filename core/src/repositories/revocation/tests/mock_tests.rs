//! Unit tests for the mock revocation store

use std::sync::Arc;
use std::time::Duration;

use crate::repositories::revocation::mock::MockRevocationStore;
use crate::repositories::RevocationStore;

#[tokio::test]
async fn test_revoke_inserts_entry() {
    let store = MockRevocationStore::new();

    let inserted = store.revoke("jti-1", Duration::from_secs(60)).await.unwrap();
    assert!(inserted);
    assert!(store.is_revoked("jti-1").await.unwrap());
    assert_eq!(store.ttl_of("jti-1").await, Some(Duration::from_secs(60)));
}

#[tokio::test]
async fn test_revoke_is_conditional() {
    let store = MockRevocationStore::new();

    assert!(store.revoke("jti-1", Duration::from_secs(60)).await.unwrap());
    assert!(!store.revoke("jti-1", Duration::from_secs(60)).await.unwrap());
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn test_unknown_jti_is_not_revoked() {
    let store = MockRevocationStore::new();
    assert!(!store.is_revoked("missing").await.unwrap());
}

#[tokio::test]
async fn test_concurrent_revoke_single_winner() {
    let store = Arc::new(MockRevocationStore::new());

    let mut handles = Vec::new();
    for _ in 0..8 {
        let store = Arc::clone(&store);
        handles.push(tokio::spawn(async move {
            store.revoke("contested", Duration::from_secs(60)).await.unwrap()
        }));
    }

    let mut winners = 0;
    for handle in handles {
        if handle.await.unwrap() {
            winners += 1;
        }
    }
    assert_eq!(winners, 1);
}
