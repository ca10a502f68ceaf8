//! Property tests for scoring math (pure domain, no IO).
//!
//! Scoring contract:
//! - Weighted totals always land on the shared 0..=10 scale
//! - Winner selection is order-independent
//! - Ties never pick an arbitrary winner

use proptest::prelude::*;

use crate::domain::scoring::{
    round_winner, AxisScore, JudgeScoreSet, PlayerRoundEntry, ScoreWeights, MAX_AXIS_SCORE,
};
use crate::domain::test_prelude;

fn weights_strategy() -> impl Strategy<Value = ScoreWeights> {
    (0.0f64..=1.0).prop_flat_map(|humor| {
        (Just(humor), 0.0f64..=(1.0 - humor)).prop_map(|(humor, relevance)| {
            let originality = (1.0 - humor - relevance).max(0.0);
            ScoreWeights::new(humor, relevance, originality)
                .expect("constructed weights must be valid")
        })
    })
}

fn entries_strategy() -> impl Strategy<Value = Vec<PlayerRoundEntry>> {
    prop::collection::vec(0.0f64..=MAX_AXIS_SCORE, 2..=4).prop_map(|totals| {
        totals
            .into_iter()
            .enumerate()
            .map(|(i, total)| PlayerRoundEntry {
                meme_id: format!("meme-{i}"),
                player_id: format!("p{i}"),
                total_score: total,
                scores: JudgeScoreSet {
                    humor: AxisScore::zeroed(""),
                    relevance: AxisScore::zeroed(""),
                    originality: AxisScore::zeroed(""),
                    total,
                },
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: For any valid weight configuration summing to 1.0 and any
    /// sub-scores in [0,10], the weighted total stays in [0,10].
    #[test]
    fn prop_weighted_total_in_range(
        weights in weights_strategy(),
        humor in 0.0f64..=MAX_AXIS_SCORE,
        relevance in 0.0f64..=MAX_AXIS_SCORE,
        originality in 0.0f64..=MAX_AXIS_SCORE,
    ) {
        let total = weights.weighted_total(humor, relevance, originality);
        prop_assert!(total >= 0.0, "total {total} must not be negative");
        prop_assert!(
            total <= MAX_AXIS_SCORE + 1e-9,
            "total {total} must not exceed the axis scale"
        );
    }

    /// Property: Wild sub-scores (negative, oversized, non-finite) are
    /// clamped, so the total is always finite and in range.
    #[test]
    fn prop_weighted_total_survives_wild_inputs(
        weights in weights_strategy(),
        humor in prop::num::f64::ANY,
        relevance in prop::num::f64::ANY,
        originality in prop::num::f64::ANY,
    ) {
        let total = weights.weighted_total(humor, relevance, originality);
        prop_assert!(total.is_finite(), "total must be finite, got {total}");
        prop_assert!((0.0..=MAX_AXIS_SCORE + 1e-9).contains(&total));
    }

    /// Property: Permuting the entries does not change the winner.
    #[test]
    fn prop_winner_is_order_independent(
        entries in entries_strategy(),
        rotation in 0usize..4,
    ) {
        let baseline = round_winner(&entries);

        let mut reversed = entries.clone();
        reversed.reverse();
        prop_assert_eq!(round_winner(&reversed), baseline.clone());

        let mut rotated = entries.clone();
        let len = rotated.len().max(1);
        rotated.rotate_left(rotation % len);
        prop_assert_eq!(round_winner(&rotated), baseline);
    }

    /// Property: The declared winner, when present, holds a strictly
    /// higher total than every other entry.
    #[test]
    fn prop_winner_holds_strict_max(entries in entries_strategy()) {
        if let Some(winner) = round_winner(&entries) {
            let winning_total = entries
                .iter()
                .find(|e| e.player_id == winner)
                .map(|e| e.total_score)
                .expect("winner must come from the entries");
            for entry in entries.iter().filter(|e| e.player_id != winner) {
                prop_assert!(
                    entry.total_score < winning_total,
                    "non-winner {} at {} must be strictly below {}",
                    entry.player_id,
                    entry.total_score,
                    winning_total
                );
            }
        }
    }

    /// Property: Two entries with identical totals never produce a winner.
    #[test]
    fn prop_exact_tie_never_picks_winner(total in 0.0f64..=MAX_AXIS_SCORE) {
        let entries: Vec<PlayerRoundEntry> = (0..2)
            .map(|i| PlayerRoundEntry {
                meme_id: format!("meme-{i}"),
                player_id: format!("p{i}"),
                total_score: total,
                scores: JudgeScoreSet {
                    humor: AxisScore::zeroed(""),
                    relevance: AxisScore::zeroed(""),
                    originality: AxisScore::zeroed(""),
                    total,
                },
            })
            .collect();
        prop_assert_eq!(round_winner(&entries), None);
    }
}
