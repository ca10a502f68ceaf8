//! Domain layer: pure game logic types and helpers.

pub mod game;
pub mod scoring;
pub mod seed_derivation;
pub mod submission;
pub mod theme;

#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_game;
#[cfg(test)]
mod tests_props_scoring;
#[cfg(test)]
mod tests_scoring;

// Re-exports for ergonomics
pub use game::{Game, GameId, GameStatus, PlayerId, PLAYERS_PER_GAME};
pub use scoring::{
    final_standings, round_winner, AxisScore, FinalStandings, JudgeScoreSet, PlayerRoundEntry,
    PlayerStanding, RoundResult, ScoreComponent, ScoreWeights,
};
pub use seed_derivation::derive_theme_seed;
pub use submission::{MemeSubmission, SubmissionDraft};
pub use theme::Theme;
