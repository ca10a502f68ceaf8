//! Game persistence functions over the [`KvStore`] seam.

use crate::domain::{Game, GameId};
use crate::error::AppError;
use crate::store::keys;
use crate::store::kv::KvStore;

/// Find a game by id.
pub async fn find_game(store: &dyn KvStore, game_id: &GameId) -> Result<Option<Game>, AppError> {
    match store.get(&keys::game(game_id)).await? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Find a game by id, or fail with `GAME_NOT_FOUND`.
pub async fn require_game(store: &dyn KvStore, game_id: &GameId) -> Result<Game, AppError> {
    find_game(store, game_id)
        .await?
        .ok_or_else(|| AppError::not_found("GAME_NOT_FOUND", format!("game {game_id} not found")))
}

/// Persist the full game record.
pub async fn save_game(store: &dyn KvStore, game: &Game) -> Result<(), AppError> {
    let raw = serde_json::to_string(game)?;
    store.set(&keys::game(&game.id), &raw).await
}
