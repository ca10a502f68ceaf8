use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::domain::scoring::{final_standings, FinalStandings, RoundResult};
use crate::domain::theme::Theme;
use crate::errors::domain::{ConflictKind, DomainError};

pub type GameId = String;
pub type PlayerId = String;

/// Duels are strictly head-to-head.
pub const PLAYERS_PER_GAME: usize = 2;

/// Overall game progression states.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    /// Created with one player, waiting for an opponent.
    Waiting,
    /// Two players seated, rounds 1..=N proceeding.
    InProgress,
    /// All rounds judged. Terminal.
    Completed,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Waiting => "waiting",
            GameStatus::InProgress => "in_progress",
            GameStatus::Completed => "completed",
        }
    }
}

/// Entire per-game container, sufficient for pure domain operations.
///
/// All transition methods validate their own preconditions and return
/// `DomainError::InvalidTransition` when applied in the wrong state; the
/// service layer is responsible for persistence and per-game locking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub id: GameId,
    /// Join order; index is the player number minus one.
    pub players: Vec<PlayerId>,
    pub status: GameStatus,
    /// 1-based. Meaningful only while `InProgress`.
    pub current_round: u32,
    /// Assigned once after matching; length fixes the round count.
    pub themes: Vec<Theme>,
    pub round_results: Vec<RoundResult>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub completed_at: Option<OffsetDateTime>,
    /// Submission cutoff for the active round; cleared when the round is
    /// recorded.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub round_deadline: Option<OffsetDateTime>,
}

impl Game {
    pub fn new(id: GameId, creator: PlayerId, created_at: OffsetDateTime) -> Self {
        Self {
            id,
            players: vec![creator],
            status: GameStatus::Waiting,
            current_round: 1,
            themes: Vec::new(),
            round_results: Vec::new(),
            created_at,
            completed_at: None,
            round_deadline: None,
        }
    }

    /// Seat the second player and start the game.
    pub fn join(&mut self, player: PlayerId) -> Result<(), DomainError> {
        if self.players.contains(&player) {
            return Err(DomainError::conflict(
                ConflictKind::AlreadyJoined,
                format!("player {player} already joined game {}", self.id),
            ));
        }
        if self.status != GameStatus::Waiting || self.players.len() >= PLAYERS_PER_GAME {
            return Err(DomainError::invalid_transition("join", self.status.as_str()));
        }
        self.players.push(player);
        if self.players.len() == PLAYERS_PER_GAME {
            self.status = GameStatus::InProgress;
        }
        Ok(())
    }

    /// Fix the game's themes, and with them the round count. Valid once,
    /// before round 1 starts.
    pub fn assign_themes(&mut self, themes: Vec<Theme>) -> Result<(), DomainError> {
        if self.status != GameStatus::InProgress {
            return Err(DomainError::invalid_transition(
                "assign_themes",
                self.status.as_str(),
            ));
        }
        if !self.themes.is_empty() {
            return Err(DomainError::invalid_transition(
                "assign_themes",
                "themes_assigned",
            ));
        }
        if themes.is_empty() {
            return Err(DomainError::validation(
                "at least one theme is required to start a game",
            ));
        }
        self.themes = themes;
        Ok(())
    }

    /// Open the current round for submissions until `deadline`.
    pub fn begin_round(&mut self, deadline: OffsetDateTime) -> Result<(), DomainError> {
        if self.status != GameStatus::InProgress {
            return Err(DomainError::invalid_transition(
                "start_round",
                self.status.as_str(),
            ));
        }
        if self.themes.is_empty() {
            return Err(DomainError::invalid_transition(
                "start_round",
                "themes_unassigned",
            ));
        }
        if self.round_deadline.is_some() {
            return Err(DomainError::invalid_transition(
                "start_round",
                "round_started",
            ));
        }
        self.round_deadline = Some(deadline);
        Ok(())
    }

    /// Check that `player` may submit a meme right now.
    pub fn require_submittable(&self, player: &PlayerId) -> Result<(), DomainError> {
        if self.status != GameStatus::InProgress {
            return Err(DomainError::invalid_transition(
                "submit_meme",
                self.status.as_str(),
            ));
        }
        if !self.is_member(player) {
            return Err(DomainError::validation(format!(
                "player {player} is not in game {}",
                self.id
            )));
        }
        if self.themes.is_empty() {
            return Err(DomainError::invalid_transition(
                "submit_meme",
                "themes_unassigned",
            ));
        }
        Ok(())
    }

    /// Record a judged round and move on, completing the game after the
    /// final round.
    pub fn advance_round(
        &mut self,
        result: RoundResult,
        now: OffsetDateTime,
    ) -> Result<(), DomainError> {
        if self.status != GameStatus::InProgress {
            return Err(DomainError::invalid_transition(
                "advance_round",
                self.status.as_str(),
            ));
        }
        if result.round_no != self.current_round {
            return Err(DomainError::validation(format!(
                "round result is for round {} but game {} is on round {}",
                result.round_no, self.id, self.current_round
            )));
        }
        self.round_results.push(result);
        self.round_deadline = None;
        if self.round_results.len() >= self.themes.len() {
            self.status = GameStatus::Completed;
            self.completed_at = Some(now);
        } else {
            self.current_round += 1;
        }
        Ok(())
    }

    /// Final standings for a completed game.
    pub fn finalize(&self) -> Result<FinalStandings, DomainError> {
        if self.status != GameStatus::Completed {
            return Err(DomainError::invalid_transition(
                "finalize",
                self.status.as_str(),
            ));
        }
        Ok(final_standings(&self.players, &self.round_results))
    }

    /// Check that the active round's deadline has passed so it may be
    /// expired.
    pub fn require_expirable(&self, now: OffsetDateTime) -> Result<(), DomainError> {
        if self.status != GameStatus::InProgress {
            return Err(DomainError::invalid_transition(
                "expire_round",
                self.status.as_str(),
            ));
        }
        match self.round_deadline {
            None => Err(DomainError::invalid_transition(
                "expire_round",
                "round_not_started",
            )),
            Some(deadline) if now < deadline => Err(DomainError::invalid_transition(
                "expire_round",
                "deadline_pending",
            )),
            Some(_) => Ok(()),
        }
    }

    pub fn total_rounds(&self) -> u32 {
        self.themes.len() as u32
    }

    pub fn is_member(&self, player: &PlayerId) -> bool {
        self.players.iter().any(|p| p == player)
    }

    /// The other seat, once both players are present.
    pub fn opponent_of(&self, player: &PlayerId) -> Option<&PlayerId> {
        if !self.is_member(player) {
            return None;
        }
        self.players.iter().find(|p| *p != player)
    }

    /// Theme for the round currently in play.
    pub fn current_theme(&self) -> Result<&Theme, DomainError> {
        self.themes
            .get(self.current_round as usize - 1)
            .ok_or_else(|| {
                DomainError::validation(format!(
                    "Invariant violated: no theme for round {} in game {}",
                    self.current_round, self.id
                ))
            })
    }
}
