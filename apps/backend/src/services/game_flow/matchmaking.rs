use time::OffsetDateTime;
use tracing::{info, warn};
use uuid::Uuid;

use super::GameFlowService;
use crate::domain::{Game, GameId, GameStatus, PlayerId};
use crate::error::AppError;
use crate::events::GameEvent;
use crate::store::{games, keys};

/// What a matchmaking call got the player into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    /// Parked as player 1 of a game still waiting for an opponent.
    Waiting { game_id: GameId },
    /// Seated as player 2 of the oldest waiting game; the game has started.
    Matched {
        game_id: GameId,
        opponent_id: PlayerId,
        player_number: u8,
    },
}

impl GameFlowService {
    /// Pair the player with the oldest waiting game, or park them in a
    /// fresh one.
    ///
    /// The waiting queue holds game ids, oldest first. `queue_pop_front`
    /// is atomic per call, so two concurrent calls can never both receive
    /// the same game. A popped id whose game has vanished or already
    /// started is discarded and the pop retried, so one stale entry cannot
    /// wedge the queue.
    pub async fn find_or_create_match(
        &self,
        player_id: &PlayerId,
    ) -> Result<MatchOutcome, AppError> {
        loop {
            let Some(game_id) = self.store.queue_pop_front(keys::WAITING_GAMES).await? else {
                return self.create_waiting_game(player_id).await;
            };

            let lock = self.game_lock(&game_id);
            let guard = lock.lock().await;

            let Some(mut game) = games::find_game(self.store.as_ref(), &game_id).await? else {
                warn!(game_id = %game_id, "discarding stale matchmaking entry: game missing");
                continue;
            };
            if game.status != GameStatus::Waiting {
                warn!(
                    game_id = %game_id,
                    status = game.status.as_str(),
                    "discarding stale matchmaking entry: game no longer waiting"
                );
                continue;
            }
            if game.is_member(player_id) {
                // The player met their own waiting game; return it to the
                // head of the queue so it keeps oldest-first priority.
                self.store
                    .queue_push_front(keys::WAITING_GAMES, &game_id)
                    .await?;
                return Ok(MatchOutcome::Waiting { game_id });
            }

            game.join(player_id.clone())?;
            games::save_game(self.store.as_ref(), &game).await?;
            drop(guard);

            let opponent_id = game.players[0].clone();
            info!(
                game_id = %game_id,
                player_id = %player_id,
                opponent_id = %opponent_id,
                "players matched"
            );

            self.notify_player(
                &opponent_id,
                GameEvent::GameMatched {
                    game_id: game_id.clone(),
                    opponent: player_id.clone(),
                    player_number: 1,
                },
            )
            .await;
            self.notify_player(
                player_id,
                GameEvent::GameMatched {
                    game_id: game_id.clone(),
                    opponent: opponent_id.clone(),
                    player_number: 2,
                },
            )
            .await;

            self.start_game(&game_id).await?;

            return Ok(MatchOutcome::Matched {
                game_id,
                opponent_id,
                player_number: 2,
            });
        }
    }

    async fn create_waiting_game(&self, player_id: &PlayerId) -> Result<MatchOutcome, AppError> {
        let game = Game::new(
            Uuid::new_v4().to_string(),
            player_id.clone(),
            OffsetDateTime::now_utc(),
        );
        games::save_game(self.store.as_ref(), &game).await?;
        self.store
            .queue_push_back(keys::WAITING_GAMES, &game.id)
            .await?;

        info!(game_id = %game.id, player_id = %player_id, "player waiting for opponent");
        self.notify_player(player_id, GameEvent::WaitingForOpponent)
            .await;

        Ok(MatchOutcome::Waiting { game_id: game.id })
    }
}
