//! Redis-backed store.
//!
//! All operations go through a [`ConnectionManager`], which reconnects
//! on its own; failures that still surface map to
//! [`AppError::StoreUnavailable`] and propagate to the caller.

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client};

use crate::error::AppError;
use crate::store::kv::KvStore;

pub struct RedisStore {
    conn: ConnectionManager,
}

impl RedisStore {
    /// Connects to Redis at `redis_url` and hands back a ready store.
    pub async fn connect(redis_url: &str) -> Result<Self, AppError> {
        let client = Client::open(redis_url)
            .map_err(|err| AppError::config(format!("Invalid REDIS_URL: {err}")))?;

        let conn = ConnectionManager::new(client).await.map_err(|err| {
            AppError::store_unavailable(format!(
                "Unable to initialize Redis connection manager: {err}"
            ))
        })?;

        Ok(Self { conn })
    }
}

#[async_trait]
impl KvStore for RedisStore {
    async fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        let mut conn = self.conn.clone();
        Ok(conn.get::<_, Option<String>>(key).await?)
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        let mut conn = self.conn.clone();
        conn.set::<_, _, ()>(key, value).await?;
        Ok(())
    }

    async fn set_nx(&self, key: &str, value: &str) -> Result<bool, AppError> {
        let mut conn = self.conn.clone();
        Ok(conn.set_nx::<_, _, bool>(key, value).await?)
    }

    async fn delete(&self, key: &str) -> Result<(), AppError> {
        let mut conn = self.conn.clone();
        conn.del::<_, ()>(key).await?;
        Ok(())
    }

    async fn queue_push_back(&self, queue: &str, value: &str) -> Result<(), AppError> {
        let mut conn = self.conn.clone();
        conn.rpush::<_, _, ()>(queue, value).await?;
        Ok(())
    }

    async fn queue_push_front(&self, queue: &str, value: &str) -> Result<(), AppError> {
        let mut conn = self.conn.clone();
        conn.lpush::<_, _, ()>(queue, value).await?;
        Ok(())
    }

    async fn queue_pop_front(&self, queue: &str) -> Result<Option<String>, AppError> {
        let mut conn = self.conn.clone();
        Ok(conn.lpop::<_, Option<String>>(queue, None).await?)
    }

    async fn queue_len(&self, queue: &str) -> Result<usize, AppError> {
        let mut conn = self.conn.clone();
        Ok(conn.llen::<_, usize>(queue).await?)
    }
}
