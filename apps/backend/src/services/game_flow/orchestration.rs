use time::OffsetDateTime;
use tracing::{debug, info, warn};

use super::GameFlowService;
use crate::domain::{
    round_winner, AxisScore, GameId, GameStatus, JudgeScoreSet, PlayerId, PlayerRoundEntry,
    RoundResult,
};
use crate::error::AppError;
use crate::errors::domain::DomainError;
use crate::events::GameEvent;
use crate::store::{games, keys, results, submissions};

impl GameFlowService {
    /// Judge the current round and record the outcome.
    ///
    /// Caller must hold the round's judging claim. The round snapshot is
    /// read under the game lock; the judging pass itself runs unlocked so
    /// slow axis scorers never block other transitions on the game.
    pub(super) async fn run_judging(&self, game_id: &GameId) -> Result<(), AppError> {
        let lock = self.game_lock(game_id);
        let (memes, theme, round_no) = {
            let _guard = lock.lock().await;
            let game = games::require_game(self.store.as_ref(), game_id).await?;
            let memes =
                submissions::round_submissions(self.store.as_ref(), &game, game.current_round)
                    .await?;
            (memes, game.current_theme()?.clone(), game.current_round)
        };

        info!(game_id = %game_id, round_no, memes = memes.len(), "judging round");
        self.notify_game(game_id, GameEvent::JudgingStarted).await;

        let result = self.judge.judge_round(&memes, &theme, round_no).await;
        self.record_round(game_id, result).await
    }

    /// Drop a round's judging claim so a retry can take it again.
    ///
    /// Best-effort: the claim is only a guard against double judging, so
    /// a failed delete is logged rather than surfaced.
    pub(super) async fn release_judging_claim(&self, game_id: &GameId, round_no: u32) {
        if let Err(err) = self
            .store
            .delete(&keys::judging_claim(game_id, round_no))
            .await
        {
            warn!(
                game_id = %game_id,
                round_no,
                error = %err,
                "failed to release judging claim"
            );
        }
    }

    /// Close out a round whose submission deadline has passed.
    ///
    /// A lone submission is judged on its own; the absent player takes an
    /// all-zero entry and forfeits the round. With no submissions at all
    /// the round records no entries and no winner. Either way the game
    /// progresses instead of waiting on a vanished opponent.
    pub async fn expire_round(&self, game_id: &GameId) -> Result<(), AppError> {
        let now = OffsetDateTime::now_utc();
        let lock = self.game_lock(game_id);
        let (memes, theme, round_no, absent) = {
            let _guard = lock.lock().await;
            let game = games::require_game(self.store.as_ref(), game_id).await?;
            game.require_expirable(now)?;

            let memes =
                submissions::round_submissions(self.store.as_ref(), &game, game.current_round)
                    .await?;
            if memes.len() == game.players.len() {
                return Err(
                    DomainError::invalid_transition("expire_round", "both_submitted").into(),
                );
            }
            let absent: Vec<PlayerId> = game
                .players
                .iter()
                .filter(|player| !memes.iter().any(|m| &m.player_id == *player))
                .cloned()
                .collect();
            (memes, game.current_theme()?.clone(), game.current_round, absent)
        };

        // Same claim the closing submit uses: exactly one caller judges.
        let claimed = self
            .store
            .set_nx(&keys::judging_claim(game_id, round_no), "expired")
            .await?;
        if !claimed {
            debug!(game_id = %game_id, round_no, "round already claimed for judging");
            return Ok(());
        }

        info!(
            game_id = %game_id,
            round_no,
            submitted = memes.len(),
            absent = absent.len(),
            "expiring round"
        );

        let result = if memes.is_empty() {
            RoundResult {
                round_no,
                entries: Vec::new(),
                winner: None,
                forfeited_by: None,
            }
        } else {
            self.notify_game(game_id, GameEvent::JudgingStarted).await;
            let mut result = self.judge.judge_round(&memes, &theme, round_no).await;
            for player_id in &absent {
                result.entries.push(forfeit_entry(player_id.clone()));
            }
            result.winner = round_winner(&result.entries);
            result.forfeited_by = absent.first().cloned();
            result
        };

        if let Err(err) = self.record_round(game_id, result).await {
            // Hand the claim back so a later expiry retry can judge.
            self.release_judging_claim(game_id, round_no).await;
            return Err(err);
        }
        Ok(())
    }

    /// A player's connection dropped mid-game.
    ///
    /// Stored submissions stay valid and no in-flight judging is
    /// cancelled; the opponent just learns they may be playing out the
    /// round alone (the round deadline takes it from there).
    pub async fn handle_disconnect(
        &self,
        game_id: &GameId,
        player_id: &PlayerId,
    ) -> Result<(), AppError> {
        let game = games::require_game(self.store.as_ref(), game_id).await?;
        if !game.is_member(player_id) {
            return Err(DomainError::validation(format!(
                "player {player_id} is not in game {game_id}"
            ))
            .into());
        }
        if game.status == GameStatus::Completed {
            return Ok(());
        }

        info!(game_id = %game_id, player_id = %player_id, "player disconnected mid-game");
        if let Some(opponent) = game.opponent_of(player_id) {
            self.notify_player(opponent, GameEvent::OpponentDisconnected)
                .await;
        }
        Ok(())
    }

    /// Persist a judged round, advance the game, and emit the follow-up
    /// events: results, then either the next round or completion.
    async fn record_round(&self, game_id: &GameId, result: RoundResult) -> Result<(), AppError> {
        let round_no = result.round_no;
        let lock = self.game_lock(game_id);
        let game = {
            let _guard = lock.lock().await;
            let mut game = games::require_game(self.store.as_ref(), game_id).await?;
            results::save_round_result(self.store.as_ref(), game_id, &result).await?;
            game.advance_round(result.clone(), OffsetDateTime::now_utc())?;
            games::save_game(self.store.as_ref(), &game).await?;
            game
        };
        self.release_judging_claim(game_id, round_no).await;

        info!(
            game_id = %game_id,
            round_no,
            winner = ?result.winner,
            "round recorded"
        );
        self.notify_game(game_id, GameEvent::RoundResults { result })
            .await;

        if game.status == GameStatus::Completed {
            let standings = game.finalize()?;
            info!(
                game_id = %game_id,
                winner = ?standings.winner,
                rounds = standings.rounds_played,
                "game completed"
            );
            self.notify_game(game_id, GameEvent::GameCompleted { standings })
                .await;
            self.drop_game_lock(game_id);
            return Ok(());
        }

        // Give players a beat to read the results before the next round.
        if !self.config.inter_round_delay.is_zero() {
            tokio::time::sleep(self.config.inter_round_delay).await;
        }

        let deadline = OffsetDateTime::now_utc() + self.config.submission_timeout;
        let (next_round, theme) = {
            let _guard = lock.lock().await;
            let mut game = games::require_game(self.store.as_ref(), game_id).await?;
            game.begin_round(deadline)?;
            games::save_game(self.store.as_ref(), &game).await?;
            (game.current_round, game.current_theme()?.clone())
        };

        self.notify_game(
            game_id,
            GameEvent::RoundStarted {
                round_no: next_round,
                theme,
                timer_secs: self.config.submission_timeout.as_secs(),
            },
        )
        .await;
        Ok(())
    }
}

/// All-zero entry recorded for a player who never submitted before the
/// round deadline.
fn forfeit_entry(player_id: PlayerId) -> PlayerRoundEntry {
    let axis = || AxisScore::zeroed("No submission before the round deadline");
    PlayerRoundEntry {
        meme_id: String::new(),
        player_id,
        total_score: 0.0,
        scores: JudgeScoreSet {
            humor: axis(),
            relevance: axis(),
            originality: axis(),
            total: 0.0,
        },
    }
}
