//! Scores one round's submissions and determines the round winner.

use crate::domain::{
    round_winner, MemeSubmission, PlayerRoundEntry, RoundResult, ScoreWeights, Theme,
};
use crate::judges::ScoreAggregator;

/// Judges a full round: every meme is scored against the round theme
/// with the other memes as peers, then the strict-max winner is picked.
pub struct RoundJudge {
    aggregator: ScoreAggregator,
}

impl RoundJudge {
    pub fn new(weights: ScoreWeights) -> Self {
        Self {
            aggregator: ScoreAggregator::new(weights),
        }
    }

    pub fn with_aggregator(aggregator: ScoreAggregator) -> Self {
        Self { aggregator }
    }

    /// Judging never fails a round: per-axis failures are absorbed by
    /// the aggregator as zero scores.
    ///
    /// Idempotent for the built-in judges: the same memes and theme
    /// always produce the same entries and winner.
    pub async fn judge_round(
        &self,
        memes: &[MemeSubmission],
        theme: &Theme,
        round_no: u32,
    ) -> RoundResult {
        let mut entries = Vec::with_capacity(memes.len());

        for (index, meme) in memes.iter().enumerate() {
            let peers: Vec<MemeSubmission> = memes
                .iter()
                .enumerate()
                .filter(|(peer_index, _)| *peer_index != index)
                .map(|(_, peer)| peer.clone())
                .collect();

            let scores = self.aggregator.score(meme, theme, &peers).await;
            entries.push(PlayerRoundEntry {
                meme_id: meme.id.clone(),
                player_id: meme.player_id.clone(),
                total_score: scores.total,
                scores,
            });
        }

        let winner = round_winner(&entries);
        RoundResult {
            round_no,
            entries,
            winner,
            forfeited_by: None,
        }
    }
}
