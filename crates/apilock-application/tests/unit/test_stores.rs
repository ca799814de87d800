//! Lock store doubles used across the application tests

use apilock_domain::error::{Error, Result};
use apilock_domain::{ConditionalSetReply, LockStore};
use apilock_providers::lock_store::MemoryLockStore;
use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Store that answers its probe but fails every request-time call
#[derive(Debug, Default)]
pub struct FailingStore;

#[async_trait]
impl LockStore for FailingStore {
    async fn ping(&self) -> Result<String> {
        Ok("PONG".to_string())
    }

    async fn set_if_absent(&self, _: &str, _: &str, _: Duration) -> Result<ConditionalSetReply> {
        Err(Error::store("connection reset by peer"))
    }

    async fn get(&self, _: &str) -> Result<Option<String>> {
        Err(Error::store("connection reset by peer"))
    }

    async fn expire(&self, _: &str, _: Duration) -> Result<bool> {
        Err(Error::store("connection reset by peer"))
    }

    fn provider_name(&self) -> &str {
        "failing"
    }
}

/// Store without a liveness probe
#[derive(Debug, Default)]
pub struct NoProbeStore;

#[async_trait]
impl LockStore for NoProbeStore {
    async fn set_if_absent(&self, _: &str, _: &str, _: Duration) -> Result<ConditionalSetReply> {
        Ok(ConditionalSetReply::Ok)
    }

    async fn get(&self, _: &str) -> Result<Option<String>> {
        Ok(None)
    }

    async fn expire(&self, _: &str, _: Duration) -> Result<bool> {
        Ok(false)
    }

    fn provider_name(&self) -> &str {
        "no-probe"
    }
}

/// Store whose probe answers with a fixed reply or fails
#[derive(Debug)]
pub struct ProbeStore {
    pub reply: Option<&'static str>,
}

#[async_trait]
impl LockStore for ProbeStore {
    async fn ping(&self) -> Result<String> {
        match self.reply {
            Some(reply) => Ok(reply.to_string()),
            None => Err(Error::store("connection refused")),
        }
    }

    async fn set_if_absent(&self, _: &str, _: &str, _: Duration) -> Result<ConditionalSetReply> {
        Ok(ConditionalSetReply::Ok)
    }

    async fn get(&self, _: &str) -> Result<Option<String>> {
        Ok(None)
    }

    async fn expire(&self, _: &str, _: Duration) -> Result<bool> {
        Ok(false)
    }

    fn provider_name(&self) -> &str {
        "probe"
    }
}

/// Store whose conditional set returns a reply outside the protocol
#[derive(Debug, Default)]
pub struct OddReplyStore;

#[async_trait]
impl LockStore for OddReplyStore {
    async fn ping(&self) -> Result<String> {
        Ok("PONG".to_string())
    }

    async fn set_if_absent(&self, _: &str, _: &str, _: Duration) -> Result<ConditionalSetReply> {
        Ok(ConditionalSetReply::Unrecognized("QUEUED".to_string()))
    }

    async fn get(&self, _: &str) -> Result<Option<String>> {
        Ok(None)
    }

    async fn expire(&self, _: &str, _: Duration) -> Result<bool> {
        Ok(false)
    }

    fn provider_name(&self) -> &str {
        "odd-reply"
    }
}

/// In-memory store that counts releases and can be told to fail them
#[derive(Debug, Default)]
pub struct CountingStore {
    inner: MemoryLockStore,
    releases: AtomicUsize,
    fail_release: bool,
}

impl CountingStore {
    pub fn failing_release() -> Self {
        Self {
            fail_release: true,
            ..Self::default()
        }
    }

    pub fn releases(&self) -> usize {
        self.releases.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LockStore for CountingStore {
    async fn ping(&self) -> Result<String> {
        self.inner.ping().await
    }

    async fn set_if_absent(
        &self,
        key: &str,
        value: &str,
        ttl: Duration,
    ) -> Result<ConditionalSetReply> {
        self.inner.set_if_absent(key, value, ttl).await
    }

    async fn get(&self, key: &str) -> Result<Option<String>> {
        self.inner.get(key).await
    }

    async fn expire(&self, key: &str, ttl: Duration) -> Result<bool> {
        if ttl.is_zero() {
            self.releases.fetch_add(1, Ordering::SeqCst);
            if self.fail_release {
                return Err(Error::store("PEXPIRE timed out"));
            }
        }
        self.inner.expire(key, ttl).await
    }

    fn provider_name(&self) -> &str {
        "counting"
    }
}

pub fn memory() -> Arc<dyn LockStore> {
    Arc::new(MemoryLockStore::new())
}
