//! Redis connection, used only as a health dependency.

use redis::{aio::ConnectionManager, Client, RedisError};

use common::CacheConfig;

/// Redis wrapper with a managed, auto-reconnecting connection.
#[derive(Clone)]
pub struct Cache {
    connection: ConnectionManager,
}

impl Cache {
    /// Connect to Redis, returning an error instead of panicking.
    pub async fn try_connect(config: &CacheConfig) -> Result<Self, RedisError> {
        let client = Client::open(config.url.as_str())?;
        let connection = ConnectionManager::new(client).await?;
        tracing::info!("Redis cache connected");

        Ok(Self { connection })
    }

    /// Check connectivity with PING.
    pub async fn ping(&self) -> Result<(), RedisError> {
        let mut conn = self.connection.clone();
        let _pong: String = redis::cmd("PING").query_async(&mut conn).await?;
        Ok(())
    }
}

/// The optional cache as seen by the rest of the process.
#[derive(Clone)]
pub enum CacheState {
    /// No Redis settings were given
    Disabled,
    Connected(Cache),
    /// Configured, but the startup connection failed
    Unreachable(String),
}

impl CacheState {
    /// Connect when configured. A failed connection does not stop startup.
    pub async fn connect(config: Option<&CacheConfig>) -> Self {
        let Some(config) = config else {
            tracing::info!("Redis not configured, cache disabled");
            return CacheState::Disabled;
        };

        match Cache::try_connect(config).await {
            Ok(cache) => CacheState::Connected(cache),
            Err(e) => {
                tracing::warn!("Redis unavailable, continuing without cache: {}", e);
                CacheState::Unreachable(e.to_string())
            }
        }
    }
}
