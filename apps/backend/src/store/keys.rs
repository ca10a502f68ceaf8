//! Key layout shared by every store backend.

use crate::domain::{GameId, PlayerId};

/// Queue of game ids waiting for a second player, oldest first.
pub const WAITING_GAMES: &str = "waiting_games";

pub fn game(game_id: &GameId) -> String {
    format!("game:{game_id}")
}

pub fn submission(game_id: &GameId, player_id: &PlayerId, round_no: u32) -> String {
    format!("submission:{game_id}:{player_id}:{round_no}")
}

pub fn results(game_id: &GameId, round_no: u32) -> String {
    format!("results:{game_id}:{round_no}")
}

/// Claim marker ensuring a round is judged by exactly one caller.
pub fn judging_claim(game_id: &GameId, round_no: u32) -> String {
    format!("judging:{game_id}:{round_no}")
}
