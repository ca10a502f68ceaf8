use time::macros::datetime;
use time::{Duration, OffsetDateTime};

use crate::domain::game::{Game, GameStatus};
use crate::domain::scoring::{AxisScore, JudgeScoreSet, PlayerRoundEntry, RoundResult};
use crate::domain::theme::Theme;
use crate::errors::domain::{ConflictKind, DomainError};

fn t0() -> OffsetDateTime {
    datetime!(2026-01-01 0:00 UTC)
}

fn make_theme(name: &str) -> Theme {
    Theme {
        id: format!("theme-{name}"),
        name: name.to_string(),
        description: format!("everything about {name}"),
        category: "general".to_string(),
        context: Vec::new(),
    }
}

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

fn make_result(round_no: u32, entries: Vec<PlayerRoundEntry>) -> RoundResult {
    let winner = crate::domain::scoring::round_winner(&entries);
    RoundResult {
        round_no,
        entries,
        winner,
        forfeited_by: None,
    }
}

/// Fresh two-player game with three themes assigned.
fn started_game() -> Game {
    let mut game = Game::new("game-1".to_string(), "p1".to_string(), t0());
    game.join("p2".to_string()).unwrap();
    game.assign_themes(vec![
        make_theme("mondays"),
        make_theme("cats"),
        make_theme("wifi"),
    ])
    .unwrap();
    game
}

#[test]
fn test_create_starts_waiting_with_sole_occupant() {
    let game = Game::new("game-1".to_string(), "p1".to_string(), t0());
    assert_eq!(game.status, GameStatus::Waiting);
    assert_eq!(game.players, vec!["p1".to_string()]);
    assert_eq!(game.current_round, 1);
    assert!(game.themes.is_empty());
    assert!(game.completed_at.is_none());
}

#[test]
fn test_join_moves_waiting_to_in_progress() {
    let mut game = Game::new("game-1".to_string(), "p1".to_string(), t0());
    game.join("p2".to_string()).unwrap();
    assert_eq!(game.status, GameStatus::InProgress);
    assert_eq!(game.players, vec!["p1".to_string(), "p2".to_string()]);
}

#[test]
fn test_join_rejects_third_player() {
    let mut game = started_game();
    let result = game.join("p3".to_string());
    match result {
        Err(DomainError::InvalidTransition { attempted, state }) => {
            assert_eq!(attempted, "join");
            assert_eq!(state, "in_progress");
        }
        other => panic!("expected InvalidTransition, got {other:?}"),
    }
}

#[test]
fn test_join_rejects_duplicate_player() {
    let mut game = Game::new("game-1".to_string(), "p1".to_string(), t0());
    let result = game.join("p1".to_string());
    match result {
        Err(DomainError::Conflict(ConflictKind::AlreadyJoined, _)) => {}
        other => panic!("expected AlreadyJoined conflict, got {other:?}"),
    }
    // Still waiting for a real opponent
    assert_eq!(game.status, GameStatus::Waiting);
}

#[test]
fn test_submit_before_opponent_joins_is_invalid_transition() {
    let game = Game::new("game-1".to_string(), "p1".to_string(), t0());
    let result = game.require_submittable(&"p1".to_string());
    match result {
        Err(DomainError::InvalidTransition { attempted, state }) => {
            assert_eq!(attempted, "submit_meme");
            assert_eq!(state, "waiting");
        }
        other => panic!("expected InvalidTransition, got {other:?}"),
    }
}

#[test]
fn test_submit_by_non_member_is_validation_error() {
    let game = started_game();
    let result = game.require_submittable(&"intruder".to_string());
    assert!(matches!(result, Err(DomainError::Validation(_))));
}

#[test]
fn test_assign_themes_requires_in_progress() {
    let mut game = Game::new("game-1".to_string(), "p1".to_string(), t0());
    let result = game.assign_themes(vec![make_theme("mondays")]);
    match result {
        Err(DomainError::InvalidTransition { attempted, state }) => {
            assert_eq!(attempted, "assign_themes");
            assert_eq!(state, "waiting");
        }
        other => panic!("expected InvalidTransition, got {other:?}"),
    }
}

#[test]
fn test_assign_themes_only_once() {
    let mut game = started_game();
    let result = game.assign_themes(vec![make_theme("again")]);
    match result {
        Err(DomainError::InvalidTransition { attempted, state }) => {
            assert_eq!(attempted, "assign_themes");
            assert_eq!(state, "themes_assigned");
        }
        other => panic!("expected InvalidTransition, got {other:?}"),
    }
    // Original assignment is untouched
    assert_eq!(game.total_rounds(), 3);
}

#[test]
fn test_assign_empty_themes_rejected() {
    let mut game = Game::new("game-1".to_string(), "p1".to_string(), t0());
    game.join("p2".to_string()).unwrap();
    let result = game.assign_themes(Vec::new());
    assert!(matches!(result, Err(DomainError::Validation(_))));
}

#[test]
fn test_theme_count_fixes_round_count() {
    let mut game = Game::new("game-1".to_string(), "p1".to_string(), t0());
    game.join("p2".to_string()).unwrap();
    game.assign_themes(vec![make_theme("one"), make_theme("two")])
        .unwrap();
    assert_eq!(game.total_rounds(), 2);
}

#[test]
fn test_begin_round_sets_deadline_once() {
    let mut game = started_game();
    let deadline = t0() + Duration::seconds(90);
    game.begin_round(deadline).unwrap();
    assert_eq!(game.round_deadline, Some(deadline));

    let result = game.begin_round(deadline + Duration::seconds(90));
    match result {
        Err(DomainError::InvalidTransition { attempted, state }) => {
            assert_eq!(attempted, "start_round");
            assert_eq!(state, "round_started");
        }
        other => panic!("expected InvalidTransition, got {other:?}"),
    }
}

#[test]
fn test_advance_round_records_and_increments() {
    let mut game = started_game();
    game.begin_round(t0() + Duration::seconds(90)).unwrap();

    let result = make_result(1, vec![make_entry("p1", 7.0), make_entry("p2", 5.0)]);
    game.advance_round(result, t0() + Duration::minutes(2))
        .unwrap();

    assert_eq!(game.status, GameStatus::InProgress);
    assert_eq!(game.current_round, 2);
    assert_eq!(game.round_results.len(), 1);
    assert_eq!(game.round_results[0].winner, Some("p1".to_string()));
    assert!(game.round_deadline.is_none(), "deadline clears on advance");
}

#[test]
fn test_advance_round_rejects_mismatched_round() {
    let mut game = started_game();
    let result = make_result(2, vec![make_entry("p1", 7.0)]);
    let err = game.advance_round(result, t0());
    assert!(matches!(err, Err(DomainError::Validation(_))));
    assert_eq!(game.current_round, 1);
}

#[test]
fn test_final_round_completes_game() {
    let mut game = started_game();
    let finished_at = t0() + Duration::minutes(10);
    for round_no in 1..=3 {
        let result = make_result(
            round_no,
            vec![make_entry("p1", 6.0), make_entry("p2", 4.0)],
        );
        game.advance_round(result, finished_at).unwrap();
    }

    assert_eq!(game.status, GameStatus::Completed);
    assert_eq!(game.round_results.len(), 3);
    assert_eq!(game.completed_at, Some(finished_at));
}

#[test]
fn test_advance_after_completed_is_invalid_transition() {
    let mut game = started_game();
    for round_no in 1..=3 {
        let result = make_result(round_no, vec![make_entry("p1", 6.0)]);
        game.advance_round(result, t0()).unwrap();
    }

    let extra = make_result(4, vec![make_entry("p1", 6.0)]);
    let err = game.advance_round(extra, t0());
    match err {
        Err(DomainError::InvalidTransition { attempted, state }) => {
            assert_eq!(attempted, "advance_round");
            assert_eq!(state, "completed");
        }
        other => panic!("expected InvalidTransition, got {other:?}"),
    }
}

#[test]
fn test_finalize_requires_completed() {
    let game = started_game();
    let result = game.finalize();
    match result {
        Err(DomainError::InvalidTransition { attempted, state }) => {
            assert_eq!(attempted, "finalize");
            assert_eq!(state, "in_progress");
        }
        other => panic!("expected InvalidTransition, got {other:?}"),
    }
}

#[test]
fn test_finalize_sums_totals_and_declares_winner() {
    let mut game = started_game();
    let rounds = [
        vec![make_entry("p1", 7.0), make_entry("p2", 5.0)],
        vec![make_entry("p1", 4.0), make_entry("p2", 6.5)],
        vec![make_entry("p1", 8.0), make_entry("p2", 3.0)],
    ];
    for (i, entries) in rounds.into_iter().enumerate() {
        game.advance_round(make_result(i as u32 + 1, entries), t0())
            .unwrap();
    }

    let standings = game.finalize().unwrap();
    assert_eq!(standings.winner, Some("p1".to_string()));
    assert_eq!(standings.rounds_played, 3);
    assert_eq!(standings.standings[0].player_id, "p1");
    assert_eq!(standings.standings[0].total_score, 19.0);
    assert_eq!(standings.standings[0].rounds_won, 2);
    assert_eq!(standings.standings[1].total_score, 14.5);
}

#[test]
fn test_finalize_tie_has_no_winner() {
    let mut game = started_game();
    let rounds = [
        vec![make_entry("p1", 7.0), make_entry("p2", 5.0)],
        vec![make_entry("p1", 5.0), make_entry("p2", 7.0)],
        vec![make_entry("p1", 6.0), make_entry("p2", 6.0)],
    ];
    for (i, entries) in rounds.into_iter().enumerate() {
        game.advance_round(make_result(i as u32 + 1, entries), t0())
            .unwrap();
    }

    let standings = game.finalize().unwrap();
    assert_eq!(standings.winner, None, "equal totals must not pick a winner");
    assert_eq!(standings.standings[0].total_score, 18.0);
    assert_eq!(standings.standings[1].total_score, 18.0);
}

#[test]
fn test_expire_requires_deadline_passed() {
    let mut game = started_game();
    let deadline = t0() + Duration::seconds(90);
    game.begin_round(deadline).unwrap();

    let early = game.require_expirable(t0() + Duration::seconds(30));
    match early {
        Err(DomainError::InvalidTransition { attempted, state }) => {
            assert_eq!(attempted, "expire_round");
            assert_eq!(state, "deadline_pending");
        }
        other => panic!("expected InvalidTransition, got {other:?}"),
    }

    assert!(game.require_expirable(deadline).is_ok());
    assert!(game
        .require_expirable(deadline + Duration::seconds(1))
        .is_ok());
}

#[test]
fn test_expire_before_round_start_is_invalid() {
    let game = started_game();
    let result = game.require_expirable(t0());
    match result {
        Err(DomainError::InvalidTransition { attempted, state }) => {
            assert_eq!(attempted, "expire_round");
            assert_eq!(state, "round_not_started");
        }
        other => panic!("expected InvalidTransition, got {other:?}"),
    }
}

#[test]
fn test_opponent_of() {
    let game = started_game();
    assert_eq!(
        game.opponent_of(&"p1".to_string()),
        Some(&"p2".to_string())
    );
    assert_eq!(
        game.opponent_of(&"p2".to_string()),
        Some(&"p1".to_string())
    );
    assert_eq!(game.opponent_of(&"p3".to_string()), None);
}

#[test]
fn test_current_theme_tracks_round() {
    let mut game = started_game();
    assert_eq!(game.current_theme().unwrap().name, "mondays");

    let result = make_result(1, vec![make_entry("p1", 6.0), make_entry("p2", 4.0)]);
    game.advance_round(result, t0()).unwrap();
    assert_eq!(game.current_theme().unwrap().name, "cats");
}
