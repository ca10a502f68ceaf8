//! Submission persistence functions over the [`KvStore`] seam.

use crate::domain::{Game, GameId, MemeSubmission, PlayerId};
use crate::error::AppError;
use crate::store::keys;
use crate::store::kv::KvStore;

/// Persist a submission under its (game, player, round) slot,
/// replacing any earlier entry for that slot.
pub async fn save_submission(
    store: &dyn KvStore,
    submission: &MemeSubmission,
) -> Result<(), AppError> {
    let key = keys::submission(
        &submission.game_id,
        &submission.player_id,
        submission.round_no,
    );
    let raw = serde_json::to_string(submission)?;
    store.set(&key, &raw).await
}

/// Find one player's submission for a round.
pub async fn find_submission(
    store: &dyn KvStore,
    game_id: &GameId,
    player_id: &PlayerId,
    round_no: u32,
) -> Result<Option<MemeSubmission>, AppError> {
    match store
        .get(&keys::submission(game_id, player_id, round_no))
        .await?
    {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Collect the submissions present for a round, in player join order.
pub async fn round_submissions(
    store: &dyn KvStore,
    game: &Game,
    round_no: u32,
) -> Result<Vec<MemeSubmission>, AppError> {
    let mut submissions = Vec::with_capacity(game.players.len());
    for player_id in &game.players {
        if let Some(submission) = find_submission(store, &game.id, player_id, round_no).await? {
            submissions.push(submission);
        }
    }
    Ok(submissions)
}
