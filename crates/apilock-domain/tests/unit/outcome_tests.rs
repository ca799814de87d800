//! Unit tests for acquisition outcome value objects

use apilock_domain::{
    AcquisitionOutcome, DEFAULT_BUSY_MESSAGE, DuplicateRejection, FingerprintDeriver, LockKey,
    RequestIdentity,
};
use serde_json::json;

#[test]
fn test_is_acquired() {
    assert!(AcquisitionOutcome::Acquired.is_acquired());
    assert!(!AcquisitionOutcome::Duplicate.is_acquired());
}

#[test]
fn test_duplicate_rejection_reports_success_status() {
    let fingerprint = FingerprintDeriver::default()
        .derive(&RequestIdentity::request("/p", json!({})))
        .unwrap();
    let key = LockKey::new("ApiLock-", &fingerprint);

    let rejection = DuplicateRejection::new(key.clone(), DEFAULT_BUSY_MESSAGE);

    assert_eq!(rejection.status, 200);
    assert_eq!(rejection.message, "Resource is busy");
    assert_eq!(rejection.key, key);
}
