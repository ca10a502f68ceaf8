//! Storage seam for game state, submissions and matchmaking queues.

use async_trait::async_trait;

use crate::error::AppError;

/// Minimal key-value + queue surface the game core needs.
///
/// Values are opaque strings; callers own the serialization. Queue
/// operations must be atomic per call: two concurrent `queue_pop_front`
/// calls may never observe the same element.
#[async_trait]
pub trait KvStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, AppError>;

    async fn set(&self, key: &str, value: &str) -> Result<(), AppError>;

    /// Sets the key only when absent. Returns `true` when this call won.
    async fn set_nx(&self, key: &str, value: &str) -> Result<bool, AppError>;

    async fn delete(&self, key: &str) -> Result<(), AppError>;

    async fn queue_push_back(&self, queue: &str, value: &str) -> Result<(), AppError>;

    /// Returns a popped element to the head of the queue, keeping its
    /// place in line.
    async fn queue_push_front(&self, queue: &str, value: &str) -> Result<(), AppError>;

    async fn queue_pop_front(&self, queue: &str) -> Result<Option<String>, AppError>;

    async fn queue_len(&self, queue: &str) -> Result<usize, AppError>;
}
