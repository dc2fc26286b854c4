use std::sync::Arc;
use std::time::Duration;

use redis::{aio::MultiplexedConnection, AsyncCommands, Client};
use tokio::sync::RwLock;
use tokio::time::timeout;
use tracing::info;

use crate::errors::AppError;
use crate::models::TimeSeriesResponse;

/// Cached series expire after an hour.
pub const CACHE_TTL_SECS: u64 = 3600;

const CACHE_OP_TIMEOUT: Duration = Duration::from_secs(2);

/// Redis-backed gateway for cached daily series. Values are the
/// serde_json-serialized provider envelope, so a cached series deserializes
/// to exactly what the upstream client returned.
#[derive(Clone)]
pub struct RedisCache {
    connection: Arc<RwLock<MultiplexedConnection>>,
}

impl RedisCache {
    pub async fn init(url: &str) -> Result<Self, redis::RedisError> {
        info!("Initializing Redis client...");
        let client = Client::open(url)?;
        let connection = client.get_multiplexed_async_connection().await?;
        info!("Redis client initialized");
        Ok(Self {
            connection: Arc::new(RwLock::new(connection)),
        })
    }

    /// Reads the cached series for `symbol`. `Ok(None)` is a miss; `Err`
    /// means the store itself failed (connectivity, timeout, or a value
    /// that no longer deserializes).
    pub async fn get_series(
        &self,
        symbol: &str,
    ) -> Result<Option<TimeSeriesResponse>, AppError> {
        info!("Checking cache for symbol: {}", symbol);
        let mut conn = self.connection.write().await;
        let value: Option<String> = timeout(CACHE_OP_TIMEOUT, conn.get(symbol))
            .await
            .map_err(|_| AppError::CacheRead(format!("timed out reading key {}", symbol)))?
            .map_err(|e| AppError::CacheRead(e.to_string()))?;

        match value {
            Some(json) => {
                let series = serde_json::from_str(&json)
                    .map_err(|e| AppError::CacheRead(e.to_string()))?;
                Ok(Some(series))
            }
            None => Ok(None),
        }
    }

    /// Stores `series` under `symbol` with an expiry, unconditionally
    /// overwriting any existing value.
    pub async fn set_series(
        &self,
        symbol: &str,
        series: &TimeSeriesResponse,
        ttl_secs: u64,
    ) -> Result<(), AppError> {
        let json =
            serde_json::to_string(series).map_err(|e| AppError::CacheWrite(e.to_string()))?;

        let mut conn = self.connection.write().await;
        let _: () = timeout(CACHE_OP_TIMEOUT, conn.set_ex(symbol, json, ttl_secs))
            .await
            .map_err(|_| AppError::CacheWrite(format!("timed out writing key {}", symbol)))?
            .map_err(|e| AppError::CacheWrite(e.to_string()))?;

        info!("Data cached for symbol: {}", symbol);
        Ok(())
    }
}
