use serde::{Deserialize, Serialize};

use crate::domain::game::PlayerId;
use crate::errors::domain::DomainError;

/// Every judging axis reports on the same 0..=10 scale.
pub const MAX_AXIS_SCORE: f64 = 10.0;

const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Relative weight of each judging axis in a meme's total score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub humor: f64,
    pub relevance: f64,
    pub originality: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            humor: 0.4,
            relevance: 0.4,
            originality: 0.2,
        }
    }
}

impl ScoreWeights {
    /// Build a validated weight set: each weight in [0, 1], summing to 1.
    pub fn new(humor: f64, relevance: f64, originality: f64) -> Result<Self, DomainError> {
        for (name, w) in [
            ("humor", humor),
            ("relevance", relevance),
            ("originality", originality),
        ] {
            if !(0.0..=1.0).contains(&w) || !w.is_finite() {
                return Err(DomainError::validation(format!(
                    "{name} weight must be within [0, 1], got {w}"
                )));
            }
        }
        let sum = humor + relevance + originality;
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(DomainError::validation(format!(
                "score weights must sum to 1.0, got {sum}"
            )));
        }
        Ok(Self {
            humor,
            relevance,
            originality,
        })
    }

    /// Weighted total over clamped axis scores. Always lands in
    /// [0, MAX_AXIS_SCORE].
    pub fn weighted_total(&self, humor: f64, relevance: f64, originality: f64) -> f64 {
        clamp_axis(humor) * self.humor
            + clamp_axis(relevance) * self.relevance
            + clamp_axis(originality) * self.originality
    }
}

/// Clamp a raw axis score onto the shared 0..=10 scale. Non-finite input
/// collapses to 0 rather than poisoning a total.
pub fn clamp_axis(raw: f64) -> f64 {
    if raw.is_finite() {
        raw.clamp(0.0, MAX_AXIS_SCORE)
    } else {
        0.0
    }
}

/// One labelled slice of an axis score, e.g. "setup_punchline": 1.5.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub label: String,
    pub points: f64,
}

/// A single axis verdict: the 0..=10 score plus human-readable feedback
/// and the per-criterion breakdown behind it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisScore {
    pub score: f64,
    pub feedback: String,
    #[serde(default)]
    pub breakdown: Vec<ScoreComponent>,
}

impl AxisScore {
    pub fn new(score: f64, feedback: impl Into<String>) -> Self {
        Self {
            score: clamp_axis(score),
            feedback: feedback.into(),
            breakdown: Vec::new(),
        }
    }

    pub fn with_breakdown(
        score: f64,
        feedback: impl Into<String>,
        breakdown: Vec<ScoreComponent>,
    ) -> Self {
        Self {
            score: clamp_axis(score),
            feedback: feedback.into(),
            breakdown,
        }
    }

    /// Zero-score axis standing in for a failed judge.
    pub fn zeroed(feedback: impl Into<String>) -> Self {
        Self::new(0.0, feedback)
    }
}

/// The full verdict for one meme: all three axes plus the weighted total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JudgeScoreSet {
    pub humor: AxisScore,
    pub relevance: AxisScore,
    pub originality: AxisScore,
    pub total: f64,
}

impl JudgeScoreSet {
    pub fn from_axes(
        weights: &ScoreWeights,
        humor: AxisScore,
        relevance: AxisScore,
        originality: AxisScore,
    ) -> Self {
        let total = weights.weighted_total(humor.score, relevance.score, originality.score);
        Self {
            humor,
            relevance,
            originality,
            total,
        }
    }
}

/// One judged meme within a round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRoundEntry {
    pub meme_id: String,
    pub player_id: PlayerId,
    pub total_score: f64,
    pub scores: JudgeScoreSet,
}

/// The recorded outcome of one judged round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundResult {
    pub round_no: u32,
    pub entries: Vec<PlayerRoundEntry>,
    /// `None` means the round had no single highest score: either an
    /// explicit tie or no judged entries at all.
    pub winner: Option<PlayerId>,
    /// Set when the round expired with this player never submitting.
    #[serde(default)]
    pub forfeited_by: Option<PlayerId>,
}

/// Strict-max winner of a round. Any tie for the top total, or an empty
/// round, yields `None`.
pub fn round_winner(entries: &[PlayerRoundEntry]) -> Option<PlayerId> {
    let max = entries
        .iter()
        .map(|e| e.total_score)
        .fold(f64::NEG_INFINITY, f64::max);
    let mut at_max = entries.iter().filter(|e| e.total_score == max);
    match (at_max.next(), at_max.next()) {
        (Some(top), None) => Some(top.player_id.clone()),
        _ => None,
    }
}

/// One player's line in the final standings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerStanding {
    pub player_id: PlayerId,
    pub total_score: f64,
    pub rounds_won: u32,
}

/// Whole-game outcome, derived from the per-round results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalStandings {
    /// Ordered best-first; ties keep player join order.
    pub standings: Vec<PlayerStanding>,
    /// `None` when the top totals tie.
    pub winner: Option<PlayerId>,
    pub rounds_played: u32,
}

/// Sum per-player totals across rounds and pick the overall winner with
/// the same strict-max rule rounds use.
pub fn final_standings(players: &[PlayerId], results: &[RoundResult]) -> FinalStandings {
    let mut standings: Vec<PlayerStanding> = players
        .iter()
        .map(|player_id| {
            let total_score = results
                .iter()
                .flat_map(|r| &r.entries)
                .filter(|e| &e.player_id == player_id)
                .map(|e| e.total_score)
                .sum();
            let rounds_won = results
                .iter()
                .filter(|r| r.winner.as_ref() == Some(player_id))
                .count() as u32;
            PlayerStanding {
                player_id: player_id.clone(),
                total_score,
                rounds_won,
            }
        })
        .collect();

    standings.sort_by(|a, b| {
        b.total_score
            .partial_cmp(&a.total_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let winner = match standings.as_slice() {
        [] => None,
        [only] => Some(only.player_id.clone()),
        [top, second, ..] if top.total_score == second.total_score => None,
        [top, ..] => Some(top.player_id.clone()),
    };

    FinalStandings {
        standings,
        winner,
        rounds_played: results.len() as u32,
    }
}
