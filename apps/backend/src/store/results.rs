//! Round result persistence functions over the [`KvStore`] seam.

use crate::domain::{GameId, RoundResult};
use crate::error::AppError;
use crate::store::keys;
use crate::store::kv::KvStore;

/// Persist a judged round's result.
pub async fn save_round_result(
    store: &dyn KvStore,
    game_id: &GameId,
    result: &RoundResult,
) -> Result<(), AppError> {
    let raw = serde_json::to_string(result)?;
    store
        .set(&keys::results(game_id, result.round_no), &raw)
        .await
}

/// Find the recorded result of a round.
pub async fn find_round_result(
    store: &dyn KvStore,
    game_id: &GameId,
    round_no: u32,
) -> Result<Option<RoundResult>, AppError> {
    match store.get(&keys::results(game_id, round_no)).await? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}
