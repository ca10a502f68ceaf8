//! Delivery of game events to players.
//!
//! The Redis implementation publishes JSON envelopes onto `player:{id}`
//! and `game:{id}` channels for the realtime gateway to fan out.

use std::time::Duration;

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client};
use tokio::sync::Mutex;
use tokio::time::sleep;
use tracing::warn;

use crate::domain::{GameId, PlayerId};
use crate::error::AppError;
use crate::events::protocol::GameEvent;

/// Outbound event seam. Implementations must not block game progress:
/// callers log delivery failures and move on.
#[async_trait]
pub trait GameNotifier: Send + Sync {
    async fn to_player(&self, player_id: &PlayerId, event: &GameEvent) -> Result<(), AppError>;

    async fn to_game(&self, game_id: &GameId, event: &GameEvent) -> Result<(), AppError>;
}

const PUBLISHER_MAX_ATTEMPTS: u32 = 3;
const PUBLISHER_INITIAL_RETRY_DELAY_MS: u64 = 50;
const PUBLISHER_MAX_RETRY_DELAY_MS: u64 = 200;

pub struct RedisNotifier {
    publisher: Mutex<ConnectionManager>,
}

impl RedisNotifier {
    pub async fn connect(redis_url: &str) -> Result<Self, AppError> {
        let client = Client::open(redis_url)
            .map_err(|err| AppError::config(format!("Invalid REDIS_URL: {err}")))?;

        let manager = ConnectionManager::new(client).await.map_err(|err| {
            AppError::store_unavailable(format!(
                "Unable to initialize Redis connection manager: {err}"
            ))
        })?;

        Ok(Self {
            publisher: Mutex::new(manager),
        })
    }

    async fn publish_to_channel(&self, channel: String, event: &GameEvent) -> Result<(), AppError> {
        let encoded = serde_json::to_string(event)?;

        let mut attempt = 0u32;
        loop {
            attempt += 1;

            let publish_res = {
                let mut publisher = self.publisher.lock().await;
                publisher
                    .publish::<_, _, ()>(channel.clone(), encoded.clone())
                    .await
            };

            match publish_res {
                Ok(_) => return Ok(()),
                Err(err) => {
                    if attempt >= PUBLISHER_MAX_ATTEMPTS || !is_transient_error(&err) {
                        return Err(AppError::store_unavailable(format!(
                            "Failed to publish game event to Redis: {err}"
                        )));
                    }

                    let delay_ms = PUBLISHER_INITIAL_RETRY_DELAY_MS
                        .saturating_mul(2_u64.pow(attempt - 1))
                        .min(PUBLISHER_MAX_RETRY_DELAY_MS);
                    warn!(
                        error = %err,
                        attempt,
                        retry_delay_ms = delay_ms,
                        "Redis publish failed, retrying"
                    );
                    sleep(Duration::from_millis(delay_ms)).await;
                }
            }
        }
    }
}

fn is_transient_error(err: &redis::RedisError) -> bool {
    if err.is_timeout() || err.is_connection_dropped() || err.is_io_error() {
        return true;
    }

    let error_msg = err.to_string().to_lowercase();

    if error_msg.contains("authentication failed") || error_msg.contains("unsupported") {
        return false;
    }

    error_msg.contains("connection refused")
        || error_msg.contains("connection reset")
        || error_msg.contains("broken pipe")
        || error_msg.contains("network")
}

#[async_trait]
impl GameNotifier for RedisNotifier {
    async fn to_player(&self, player_id: &PlayerId, event: &GameEvent) -> Result<(), AppError> {
        self.publish_to_channel(format!("player:{player_id}"), event)
            .await
    }

    async fn to_game(&self, game_id: &GameId, event: &GameEvent) -> Result<(), AppError> {
        self.publish_to_channel(format!("game:{game_id}"), event)
            .await
    }
}

/// Event target recorded by [`RecordingNotifier`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Audience {
    Player(PlayerId),
    Game(GameId),
}

/// Captures events in memory so tests can assert on the emitted stream.
#[derive(Default)]
pub struct RecordingNotifier {
    events: parking_lot::Mutex<Vec<(Audience, GameEvent)>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<(Audience, GameEvent)> {
        self.events.lock().clone()
    }

    /// Events sent directly to one player, in emission order.
    pub fn player_events(&self, player_id: &str) -> Vec<GameEvent> {
        self.events
            .lock()
            .iter()
            .filter(|(audience, _)| matches!(audience, Audience::Player(p) if p == player_id))
            .map(|(_, event)| event.clone())
            .collect()
    }

    /// Events broadcast to a game, in emission order.
    pub fn game_events(&self, game_id: &str) -> Vec<GameEvent> {
        self.events
            .lock()
            .iter()
            .filter(|(audience, _)| matches!(audience, Audience::Game(g) if g == game_id))
            .map(|(_, event)| event.clone())
            .collect()
    }
}

#[async_trait]
impl GameNotifier for RecordingNotifier {
    async fn to_player(&self, player_id: &PlayerId, event: &GameEvent) -> Result<(), AppError> {
        self.events
            .lock()
            .push((Audience::Player(player_id.clone()), event.clone()));
        Ok(())
    }

    async fn to_game(&self, game_id: &GameId, event: &GameEvent) -> Result<(), AppError> {
        self.events
            .lock()
            .push((Audience::Game(game_id.clone()), event.clone()));
        Ok(())
    }
}
