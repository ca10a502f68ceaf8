use serde::Serialize;
use time::OffsetDateTime;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::GameFlowService;
use crate::domain::{
    FinalStandings, GameId, GameStatus, MemeSubmission, PlayerId, SubmissionDraft,
};
use crate::error::AppError;
use crate::events::GameEvent;
use crate::providers::ValidationReport;
use crate::store::{games, keys, submissions};

/// Outcome of a submit call.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Draft failed validation; nothing was stored.
    Rejected(ValidationReport),
    /// Submission stored (replacing any earlier one for the round).
    /// `both_submitted` reports whether this submission closed the round.
    Stored {
        submission_id: String,
        both_submitted: bool,
    },
}

/// Point-in-time snapshot of one game, for status queries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameStatusView {
    pub game_id: GameId,
    pub status: GameStatus,
    pub players: Vec<PlayerId>,
    pub current_round: u32,
    pub total_rounds: u32,
    /// Players with a stored submission for the current round.
    pub submitted_players: Vec<PlayerId>,
    pub both_submitted: bool,
    #[serde(with = "time::serde::rfc3339::option")]
    pub round_deadline: Option<OffsetDateTime>,
}

impl GameFlowService {
    /// Assign themes to a freshly matched game and open round 1.
    ///
    /// Theme generation runs before the game lock is taken; only the
    /// assign/begin mutation happens under it. A short theme batch
    /// shortens the game instead of failing it; an empty batch is a
    /// collaborator failure the caller sees.
    pub(super) async fn start_game(&self, game_id: &GameId) -> Result<(), AppError> {
        let requested = self.config.rounds_per_game as usize;
        let themes = self.themes.generate_themes(game_id, requested).await?;
        if themes.is_empty() {
            return Err(AppError::collaborator_unavailable(format!(
                "theme provider returned no themes for game {game_id}"
            )));
        }
        if themes.len() < requested {
            warn!(
                game_id = %game_id,
                requested,
                received = themes.len(),
                "theme provider came up short, shortening the game"
            );
        }

        // Enrichment is best-effort: a failed lookup keeps the plain theme.
        let mut enriched = Vec::with_capacity(themes.len());
        for theme in themes {
            match self.themes.enrich(theme.clone()).await {
                Ok(theme) => enriched.push(theme),
                Err(err) => {
                    warn!(
                        game_id = %game_id,
                        theme_id = %theme.id,
                        error = %err,
                        "theme enrichment failed, keeping the plain theme"
                    );
                    enriched.push(theme);
                }
            }
        }

        let deadline = OffsetDateTime::now_utc() + self.config.submission_timeout;
        let lock = self.game_lock(game_id);
        let (rounds, theme) = {
            let _guard = lock.lock().await;
            let mut game = games::require_game(self.store.as_ref(), game_id).await?;
            game.assign_themes(enriched)?;
            game.begin_round(deadline)?;
            games::save_game(self.store.as_ref(), &game).await?;
            (game.total_rounds(), game.current_theme()?.clone())
        };

        info!(game_id = %game_id, rounds, theme = %theme.name, "game started");
        self.notify_game(
            game_id,
            GameEvent::RoundStarted {
                round_no: 1,
                theme,
                timer_secs: self.config.submission_timeout.as_secs(),
            },
        )
        .await;
        Ok(())
    }

    /// Validate and store a player's meme for the current round.
    ///
    /// A resubmission before judging replaces the stored entry. The
    /// submission that closes the round claims the judging pass through
    /// an atomic marker, so racing resubmissions judge the round exactly
    /// once.
    pub async fn submit_meme(
        &self,
        game_id: &GameId,
        player_id: &PlayerId,
        draft: SubmissionDraft,
    ) -> Result<SubmitOutcome, AppError> {
        let report = self.validator.validate(&draft).await?;
        if !report.is_valid {
            info!(
                game_id = %game_id,
                player_id = %player_id,
                issues = report.issues.len(),
                "meme rejected by validator"
            );
            self.notify_player(
                player_id,
                GameEvent::MemeValidationFailed {
                    error: "Meme validation failed".to_string(),
                    issues: report.issues.clone(),
                    suggestions: report.suggestions.clone(),
                },
            )
            .await;
            return Ok(SubmitOutcome::Rejected(report));
        }

        let lock = self.game_lock(game_id);
        let (submission_id, round_no, both_submitted) = {
            let _guard = lock.lock().await;
            let game = games::require_game(self.store.as_ref(), game_id).await?;
            game.require_submittable(player_id)?;

            let submission = MemeSubmission {
                id: Uuid::new_v4().to_string(),
                game_id: game_id.clone(),
                player_id: player_id.clone(),
                round_no: game.current_round,
                template_id: draft.template_id,
                template_name: draft.template_name,
                top_text: draft.top_text,
                bottom_text: draft.bottom_text,
                rendered_url: draft.rendered_url,
                submitted_at: OffsetDateTime::now_utc(),
            };
            submissions::save_submission(self.store.as_ref(), &submission).await?;

            let stored =
                submissions::round_submissions(self.store.as_ref(), &game, game.current_round)
                    .await?;
            (
                submission.id,
                game.current_round,
                stored.len() == game.players.len(),
            )
        };

        debug!(
            game_id = %game_id,
            player_id = %player_id,
            round_no,
            both_submitted,
            "meme submission stored"
        );

        if !both_submitted {
            self.notify_player(player_id, GameEvent::WaitingForOpponentSubmission)
                .await;
            return Ok(SubmitOutcome::Stored {
                submission_id,
                both_submitted: false,
            });
        }

        let claimed = self
            .store
            .set_nx(&keys::judging_claim(game_id, round_no), &submission_id)
            .await?;
        if claimed {
            if let Err(err) = self.run_judging(game_id).await {
                // Hand the claim back so a retried submit can judge.
                self.release_judging_claim(game_id, round_no).await;
                return Err(err);
            }
        } else {
            debug!(game_id = %game_id, round_no, "round already claimed for judging");
        }

        Ok(SubmitOutcome::Stored {
            submission_id,
            both_submitted: true,
        })
    }

    /// Snapshot of a game's progress, read straight from the store.
    pub async fn game_status(&self, game_id: &GameId) -> Result<GameStatusView, AppError> {
        let game = games::require_game(self.store.as_ref(), game_id).await?;
        let stored =
            submissions::round_submissions(self.store.as_ref(), &game, game.current_round).await?;
        let submitted_players: Vec<PlayerId> = stored.into_iter().map(|s| s.player_id).collect();
        let both_submitted = game.status == GameStatus::InProgress
            && submitted_players.len() == game.players.len();

        Ok(GameStatusView {
            game_id: game.id,
            status: game.status,
            players: game.players,
            current_round: game.current_round,
            total_rounds: game.themes.len() as u32,
            submitted_players,
            both_submitted,
            round_deadline: game.round_deadline,
        })
    }

    /// Final standings of a completed game.
    pub async fn finalize(&self, game_id: &GameId) -> Result<FinalStandings, AppError> {
        let game = games::require_game(self.store.as_ref(), game_id).await?;
        Ok(game.finalize()?)
    }
}
