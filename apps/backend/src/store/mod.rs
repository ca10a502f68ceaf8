//! Storage layer - the KvStore seam, its backends, and typed accessors.
//!
//! Game state, submissions and results live behind [`KvStore`] as JSON
//! values under the key layout in [`keys`]. The store is the single
//! source of truth; services never cache game state in process.

pub mod games;
pub mod keys;
pub mod kv;
pub mod memory;
pub mod redis;
pub mod results;
pub mod submissions;

pub use kv::KvStore;
pub use memory::InMemoryStore;
pub use redis::RedisStore;
