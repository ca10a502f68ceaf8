//! Realtime event layer - payload types and delivery seams.

pub mod notifier;
pub mod protocol;

pub use notifier::{Audience, GameNotifier, RecordingNotifier, RedisNotifier};
pub use protocol::GameEvent;
