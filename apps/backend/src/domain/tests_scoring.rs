use crate::domain::scoring::{
    clamp_axis, final_standings, round_winner, AxisScore, JudgeScoreSet, PlayerRoundEntry,
    RoundResult, ScoreWeights, MAX_AXIS_SCORE,
};
use crate::errors::domain::DomainError;

fn make_entry(player: &str, total: f64) -> PlayerRoundEntry {
    PlayerRoundEntry {
        meme_id: format!("meme-{player}"),
        player_id: player.to_string(),
        total_score: total,
        scores: JudgeScoreSet {
            humor: AxisScore::zeroed(""),
            relevance: AxisScore::zeroed(""),
            originality: AxisScore::zeroed(""),
            total,
        },
    }
}

#[test]
fn test_default_weights() {
    let weights = ScoreWeights::default();
    assert_eq!(weights.humor, 0.4);
    assert_eq!(weights.relevance, 0.4);
    assert_eq!(weights.originality, 0.2);
}

#[test]
fn test_weights_must_sum_to_one() {
    let result = ScoreWeights::new(0.5, 0.4, 0.2);
    assert!(matches!(result, Err(DomainError::Validation(_))));

    // Within tolerance is fine
    assert!(ScoreWeights::new(0.4, 0.4, 0.2).is_ok());
    assert!(ScoreWeights::new(1.0, 0.0, 0.0).is_ok());
}

#[test]
fn test_weights_reject_out_of_range() {
    assert!(ScoreWeights::new(-0.1, 0.9, 0.2).is_err());
    assert!(ScoreWeights::new(1.2, -0.1, -0.1).is_err());
    assert!(ScoreWeights::new(f64::NAN, 0.5, 0.5).is_err());
}

#[test]
fn test_weighted_total_standard_case() {
    let weights = ScoreWeights::default();
    // 8*0.4 + 5*0.4 + 10*0.2 = 3.2 + 2.0 + 2.0 = 7.2
    let total = weights.weighted_total(8.0, 5.0, 10.0);
    assert!((total - 7.2).abs() < 1e-9);
}

#[test]
fn test_weighted_total_clamps_wild_inputs() {
    let weights = ScoreWeights::default();
    let total = weights.weighted_total(42.0, -3.0, f64::INFINITY);
    // 10*0.4 + 0*0.4 + 0*0.2
    assert!((total - 4.0).abs() < 1e-9);
    assert!(total <= MAX_AXIS_SCORE);
}

#[test]
fn test_clamp_axis() {
    assert_eq!(clamp_axis(5.5), 5.5);
    assert_eq!(clamp_axis(-1.0), 0.0);
    assert_eq!(clamp_axis(11.0), MAX_AXIS_SCORE);
    assert_eq!(clamp_axis(f64::NAN), 0.0);
    assert_eq!(clamp_axis(f64::NEG_INFINITY), 0.0);
}

#[test]
fn test_score_set_total_uses_weights() {
    let weights = ScoreWeights::default();
    let set = JudgeScoreSet::from_axes(
        &weights,
        AxisScore::new(6.0, "ok"),
        AxisScore::new(8.0, "ok"),
        AxisScore::new(5.0, "ok"),
    );
    // 6*0.4 + 8*0.4 + 5*0.2 = 2.4 + 3.2 + 1.0 = 6.6
    assert!((set.total - 6.6).abs() < 1e-9);
}

#[test]
fn test_round_winner_strict_max() {
    let entries = vec![make_entry("p1", 7.2), make_entry("p2", 5.4)];
    assert_eq!(round_winner(&entries), Some("p1".to_string()));
}

#[test]
fn test_round_winner_exact_tie_is_none() {
    let entries = vec![make_entry("p1", 7.0), make_entry("p2", 7.0)];
    assert_eq!(round_winner(&entries), None);
}

#[test]
fn test_round_winner_empty_is_none() {
    assert_eq!(round_winner(&[]), None);
}

#[test]
fn test_round_winner_single_entry() {
    let entries = vec![make_entry("p1", 0.0)];
    assert_eq!(round_winner(&entries), Some("p1".to_string()));
}

#[test]
fn test_final_standings_sums_and_orders() {
    let players = vec!["p1".to_string(), "p2".to_string()];
    let results = vec![
        RoundResult {
            round_no: 1,
            entries: vec![make_entry("p1", 3.0), make_entry("p2", 6.0)],
            winner: Some("p2".to_string()),
            forfeited_by: None,
        },
        RoundResult {
            round_no: 2,
            entries: vec![make_entry("p1", 8.0), make_entry("p2", 4.0)],
            winner: Some("p1".to_string()),
            forfeited_by: None,
        },
    ];

    let standings = final_standings(&players, &results);
    assert_eq!(standings.rounds_played, 2);
    assert_eq!(standings.winner, Some("p1".to_string()));
    assert_eq!(standings.standings[0].player_id, "p1");
    assert_eq!(standings.standings[0].total_score, 11.0);
    assert_eq!(standings.standings[0].rounds_won, 1);
    assert_eq!(standings.standings[1].player_id, "p2");
    assert_eq!(standings.standings[1].total_score, 10.0);
}

#[test]
fn test_final_standings_tie_yields_no_winner() {
    let players = vec!["p1".to_string(), "p2".to_string()];
    let results = vec![RoundResult {
        round_no: 1,
        entries: vec![make_entry("p1", 5.0), make_entry("p2", 5.0)],
        winner: None,
        forfeited_by: None,
    }];

    let standings = final_standings(&players, &results);
    assert_eq!(standings.winner, None);
    assert_eq!(standings.standings.len(), 2);
}

#[test]
fn test_final_standings_counts_absent_player_as_zero() {
    // A player who forfeited every round still appears with a zero total.
    let players = vec!["p1".to_string(), "p2".to_string()];
    let results = vec![RoundResult {
        round_no: 1,
        entries: vec![make_entry("p1", 5.0)],
        winner: Some("p1".to_string()),
        forfeited_by: Some("p2".to_string()),
    }];

    let standings = final_standings(&players, &results);
    assert_eq!(standings.winner, Some("p1".to_string()));
    assert_eq!(standings.standings[1].player_id, "p2");
    assert_eq!(standings.standings[1].total_score, 0.0);
    assert_eq!(standings.standings[1].rounds_won, 0);
}
