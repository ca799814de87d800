//! Request identity value objects

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Logical identity of a request
///
/// Which fields are hashed depends on the guard's
/// [`FingerprintMode`](crate::FingerprintMode): auto mode uses `path` and
/// `body`, payload mode uses `payload` only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestIdentity {
    /// Request path, e.g. `/api/v1/user`
    pub path: Option<String>,
    /// Deserialized request body
    pub body: Option<Value>,
    /// Explicit caller-supplied payload
    pub payload: Option<Value>,
}

impl RequestIdentity {
    /// Identity made of a request path and body
    pub fn request<P: Into<String>>(path: P, body: Value) -> Self {
        Self {
            path: Some(path.into()),
            body: Some(body),
            payload: None,
        }
    }

    /// Identity made of an explicit payload
    pub fn payload(payload: Value) -> Self {
        Self {
            payload: Some(payload),
            ..Self::default()
        }
    }

    /// Attach an explicit payload
    pub fn with_payload(mut self, payload: Value) -> Self {
        self.payload = Some(payload);
        self
    }
}
