//! Redis distributed lock store provider
//!
//! Lock store backed by Redis, shared by every process pointing at the same
//! server. Acquisition is a single `SET key value PX ttl NX`, release is
//! `PEXPIRE key 0`.
//!
//! Commands go through a [`ConnectionManager`]: when the link drops, the
//! failing call returns an error and the manager redials, so later calls
//! reach the server again. Failed commands are never retried here, since a
//! replayed `SET NX` could report a lock this caller already took as held.
//!
//! ## Example
//!
//! ```ignore
//! use apilock_providers::lock_store::RedisLockStore;
//!
//! let store = RedisLockStore::new("redis://localhost:6379")?;
//! // Or with host/port
//! let store = RedisLockStore::with_host_port("localhost", 6379)?;
//! ```

use crate::constants::{REDIS_CONNECT_TIMEOUT_SECS, REDIS_DEFAULT_URI};
use apilock_domain::constants::SET_REPLY_OK;
use apilock_domain::error::{Error, Result};
use apilock_domain::ports::{ConditionalSetReply, LockStore};
use async_trait::async_trait;
use redis::{Client, Value, aio::ConnectionManager};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::OnceCell;
use tracing::{debug, warn};

/// Redis lock store
///
/// Opens a reconnecting connection manager on first use and shares it
/// between all calls and clones.
#[derive(Clone)]
pub struct RedisLockStore {
    client: Client,
    connection: Arc<OnceCell<ConnectionManager>>,
}

impl RedisLockStore {
    /// Create a new Redis lock store from a connection string
    ///
    /// Only parses the URL; the connection is opened lazily.
    pub fn new(connection_string: &str) -> Result<Self> {
        let client = Client::open(connection_string)
            .map_err(|e| Error::config(format!("Failed to create Redis client: {e}")))?;

        Ok(Self {
            client,
            connection: Arc::new(OnceCell::new()),
        })
    }

    /// Create a new Redis lock store with host and port
    pub fn with_host_port(host: &str, port: u16) -> Result<Self> {
        Self::new(&format!("redis://{host}:{port}"))
    }

    /// Get the shared connection manager, opening it on first use
    async fn connection(&self) -> Result<ConnectionManager> {
        self.connection
            .get_or_try_init(|| async {
                match tokio::time::timeout(
                    Duration::from_secs(REDIS_CONNECT_TIMEOUT_SECS),
                    ConnectionManager::new(self.client.clone()),
                )
                .await
                {
                    Ok(Ok(conn)) => {
                        debug!("Redis lock store connected");
                        Ok(conn)
                    }
                    Ok(Err(e)) => {
                        warn!(error = %e, "Redis lock store connection failed");
                        Err(Error::store_with_source("Redis connection failed", e))
                    }
                    Err(_) => {
                        warn!(
                            timeout_secs = REDIS_CONNECT_TIMEOUT_SECS,
                            "Redis lock store connection timed out"
                        );
                        Err(Error::store("Redis connection timed out"))
                    }
                }
            })
            .await
            .cloned()
    }

    /// Whether the connection manager has been opened
    pub fn is_connected(&self) -> bool {
        self.connection.initialized()
    }
}

fn millis(ttl: Duration) -> u64 {
    u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX)
}

fn command_error(command: &str, e: redis::RedisError) -> Error {
    if e.is_connection_dropped() || e.is_io_error() {
        warn!(command, error = %e, "Redis link lost, reconnecting");
    }
    Error::store_with_source(format!("Redis {command} failed"), e)
}

fn interpret_set_reply(reply: Value) -> ConditionalSetReply {
    match reply {
        Value::Okay => ConditionalSetReply::Ok,
        Value::SimpleString(s) if s == SET_REPLY_OK => ConditionalSetReply::Ok,
        Value::Nil => ConditionalSetReply::Exists,
        other => ConditionalSetReply::Unrecognized(format!("{other:?}")),
    }
}

#[async_trait]
impl LockStore for RedisLockStore {
    async fn ping(&self) -> Result<String> {
        let mut conn = self.connection().await?;

        redis::cmd("PING")
            .query_async::<String>(&mut conn)
            .await
            .map_err(|e| command_error("PING", e))
    }

    async fn set_if_absent(
        &self,
        key: &str,
        value: &str,
        ttl: Duration,
    ) -> Result<ConditionalSetReply> {
        let mut conn = self.connection().await?;

        let reply = redis::cmd("SET")
            .arg(key)
            .arg(value)
            .arg("PX")
            .arg(millis(ttl))
            .arg("NX")
            .query_async::<Value>(&mut conn)
            .await
            .map_err(|e| command_error("SET NX", e))?;

        Ok(interpret_set_reply(reply))
    }

    async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self.connection().await?;

        redis::cmd("GET")
            .arg(key)
            .query_async::<Option<String>>(&mut conn)
            .await
            .map_err(|e| command_error("GET", e))
    }

    async fn expire(&self, key: &str, ttl: Duration) -> Result<bool> {
        let mut conn = self.connection().await?;

        let updated: i64 = redis::cmd("PEXPIRE")
            .arg(key)
            .arg(millis(ttl))
            .query_async(&mut conn)
            .await
            .map_err(|e| command_error("PEXPIRE", e))?;

        Ok(updated > 0)
    }

    fn provider_name(&self) -> &str {
        "redis"
    }
}

impl std::fmt::Debug for RedisLockStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisLockStore")
            .field("connected", &self.is_connected())
            .finish()
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use apilock_application::ports::registry::{
    LOCK_STORE_PROVIDERS, LockStoreProviderConfig, LockStoreProviderEntry,
};

/// Factory function for creating Redis lock store instances.
fn redis_lock_store_factory(
    config: &LockStoreProviderConfig,
) -> std::result::Result<Arc<dyn LockStore>, String> {
    let uri = config.uri.as_deref().unwrap_or(REDIS_DEFAULT_URI);

    let store =
        RedisLockStore::new(uri).map_err(|e| format!("Failed to create Redis lock store: {e}"))?;

    Ok(Arc::new(store))
}

#[linkme::distributed_slice(LOCK_STORE_PROVIDERS)]
static REDIS_PROVIDER: LockStoreProviderEntry = LockStoreProviderEntry {
    name: "redis",
    description: "Redis distributed lock store",
    factory: redis_lock_store_factory,
};
