//! Domain layer constants
//!
//! Protocol sentinels exchanged with the shared store and the defaults
//! applied when a guard is built without explicit configuration.

// ============================================================================
// STORE PROTOCOL SENTINELS
// ============================================================================

/// Value stored under a lock key while the fingerprint is being processed
pub const LOCK_SENTINEL_VALUE: &str = "LOCKED";

/// Reply expected from a healthy store liveness probe
pub const PING_REPLY_ALIVE: &str = "PONG";

/// Reply returned by a successful conditional set
pub const SET_REPLY_OK: &str = "OK";

// ============================================================================
// GUARD DEFAULTS
// ============================================================================

/// Default lock lifetime in milliseconds (one minute)
pub const DEFAULT_LOCK_TTL_MS: u64 = 60_000;

/// Largest lock lifetime a store accepts (`PX` takes a signed 64-bit value)
pub const MAX_LOCK_TTL_MS: u64 = i64::MAX.unsigned_abs();

/// Default namespace prepended to every fingerprint
pub const DEFAULT_KEY_PREFIX: &str = "ApiLock-";

/// Default message surfaced to duplicate requests
pub const DEFAULT_BUSY_MESSAGE: &str = "Resource is busy";

/// HTTP status a collaborator should report for a rejected duplicate
pub const DUPLICATE_RESPONSE_STATUS: u16 = 200;

// ============================================================================
// FINGERPRINT CONSTANTS
// ============================================================================

/// Length of a hex-encoded SHA-256 fingerprint
pub const FINGERPRINT_HEX_LEN: usize = 64;
