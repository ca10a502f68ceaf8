//! In-process store backend for tests and single-node runs.

use std::collections::{HashMap, VecDeque};

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::error::AppError;
use crate::store::kv::KvStore;

/// Hash-map backed [`KvStore`]. Every operation takes the lock for its
/// full duration, which gives the same per-call atomicity the Redis
/// backend gets from single commands.
#[derive(Default)]
pub struct InMemoryStore {
    values: Mutex<HashMap<String, String>>,
    queues: Mutex<HashMap<String, VecDeque<String>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KvStore for InMemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.values.lock().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.values.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn set_nx(&self, key: &str, value: &str) -> Result<bool, AppError> {
        let mut values = self.values.lock();
        if values.contains_key(key) {
            Ok(false)
        } else {
            values.insert(key.to_string(), value.to_string());
            Ok(true)
        }
    }

    async fn delete(&self, key: &str) -> Result<(), AppError> {
        self.values.lock().remove(key);
        Ok(())
    }

    async fn queue_push_back(&self, queue: &str, value: &str) -> Result<(), AppError> {
        self.queues
            .lock()
            .entry(queue.to_string())
            .or_default()
            .push_back(value.to_string());
        Ok(())
    }

    async fn queue_push_front(&self, queue: &str, value: &str) -> Result<(), AppError> {
        self.queues
            .lock()
            .entry(queue.to_string())
            .or_default()
            .push_front(value.to_string());
        Ok(())
    }

    async fn queue_pop_front(&self, queue: &str) -> Result<Option<String>, AppError> {
        Ok(self
            .queues
            .lock()
            .get_mut(queue)
            .and_then(|q| q.pop_front()))
    }

    async fn queue_len(&self, queue: &str) -> Result<usize, AppError> {
        Ok(self.queues.lock().get(queue).map_or(0, |q| q.len()))
    }
}
