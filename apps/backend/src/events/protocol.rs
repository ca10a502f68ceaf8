//! Wire events emitted to players over the realtime channel.
//!
//! Every payload is an explicit tagged record; consumers match on the
//! `type` field and never probe for optional keys.

use serde::{Deserialize, Serialize};

use crate::domain::{FinalStandings, GameId, PlayerId, RoundResult, Theme};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    /// Both seats are filled; the game is about to start.
    GameMatched {
        game_id: GameId,
        opponent: PlayerId,
        player_number: u8,
    },
    /// Sent to a lone player parked in the matchmaking queue.
    WaitingForOpponent,
    RoundStarted {
        round_no: u32,
        theme: Theme,
        /// Seconds until the submission deadline for this round.
        timer_secs: u64,
    },
    /// The recipient has submitted; the opponent has not yet.
    WaitingForOpponentSubmission,
    /// A rejected draft, itemized so the player can fix and resubmit.
    MemeValidationFailed {
        error: String,
        issues: Vec<String>,
        suggestions: Vec<String>,
    },
    JudgingStarted,
    RoundResults {
        #[serde(flatten)]
        result: RoundResult,
    },
    GameCompleted {
        #[serde(flatten)]
        standings: FinalStandings,
    },
    OpponentDisconnected,
}
