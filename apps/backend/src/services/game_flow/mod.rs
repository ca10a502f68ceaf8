//! Game flow orchestration service - bridges pure domain logic with the
//! store, judges and collaborators.
//!
//! Concurrency model: a per-game async lock guards every read-modify-write
//! of game state, while the store stays the single source of truth. Slow
//! work (theme generation, judging) runs outside the lock so a game is
//! never held locked across collaborator calls.

mod matchmaking;
mod orchestration;
mod round_lifecycle;

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::config::GameConfig;
use crate::domain::{GameId, PlayerId};
use crate::events::{GameEvent, GameNotifier};
use crate::providers::{MemeValidator, ThemeProvider};
use crate::services::round_judge::RoundJudge;
use crate::store::KvStore;

pub use matchmaking::MatchOutcome;
pub use round_lifecycle::{GameStatusView, SubmitOutcome};

pub struct GameFlowService {
    store: Arc<dyn KvStore>,
    notifier: Arc<dyn GameNotifier>,
    themes: Arc<dyn ThemeProvider>,
    validator: Arc<dyn MemeValidator>,
    judge: RoundJudge,
    config: GameConfig,
    locks: DashMap<GameId, Arc<Mutex<()>>>,
}

impl GameFlowService {
    pub fn new(
        store: Arc<dyn KvStore>,
        notifier: Arc<dyn GameNotifier>,
        themes: Arc<dyn ThemeProvider>,
        validator: Arc<dyn MemeValidator>,
        config: GameConfig,
    ) -> Self {
        for factory in crate::judges::registered_judges() {
            debug!(axis = factory.name, version = factory.version, "scoring axis active");
        }
        let judge = RoundJudge::new(config.weights);
        Self {
            store,
            notifier,
            themes,
            validator,
            judge,
            config,
            locks: DashMap::new(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Lock handle for one game's state transitions.
    fn game_lock(&self, game_id: &GameId) -> Arc<Mutex<()>> {
        self.locks
            .entry(game_id.clone())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    /// Completed games never transition again, so their lock entry goes.
    fn drop_game_lock(&self, game_id: &GameId) {
        self.locks.remove(game_id);
    }

    /// Event delivery must never fail a transition; log and move on.
    async fn notify_player(&self, player_id: &PlayerId, event: GameEvent) {
        if let Err(err) = self.notifier.to_player(player_id, &event).await {
            warn!(player_id = %player_id, error = %err, "failed to deliver player event");
        }
    }

    async fn notify_game(&self, game_id: &GameId, event: GameEvent) {
        if let Err(err) = self.notifier.to_game(game_id, &event).await {
            warn!(game_id = %game_id, error = %err, "failed to deliver game event");
        }
    }
}
