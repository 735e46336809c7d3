//! Match runner and transcript integration tests.
//!
//! These tests play full seeded games and verify reproducibility,
//! transcript integrity, and serialization round trips.

use mancala_engine::{
    Board, GameOutcome, Mancala, MatchConfig, MatchRunner, Player, RandomSelector, Rules,
    Transcript,
};

fn standard_runner(move_limit: usize) -> MatchRunner {
    let engine = Mancala::new(Rules::default());
    MatchRunner::new(engine, MatchConfig::new().with_move_limit(move_limit))
}

fn seeded_match(south_seed: u64, north_seed: u64) -> Transcript {
    let runner = standard_runner(2000);
    let mut south = RandomSelector::new(south_seed);
    let mut north = RandomSelector::new(north_seed);
    runner.play(&mut south, &mut north).unwrap()
}

// =============================================================================
// Reproducibility Tests
// =============================================================================

/// Test that the same seeds always produce the same transcript.
#[test]
fn test_seeded_match_is_reproducible() {
    let first = seeded_match(42, 1337);
    let second = seeded_match(42, 1337);

    assert_eq!(first, second);
}

/// Test that different seeds diverge.
#[test]
fn test_different_seeds_diverge() {
    let first = seeded_match(42, 1337);
    let second = seeded_match(43, 1337);

    assert_ne!(first.records, second.records);
}

// =============================================================================
// Transcript Integrity Tests
// =============================================================================

/// Test that a transcript replays cleanly through the engine.
#[test]
fn test_transcript_replays_cleanly() {
    let engine = Mancala::new(Rules::default());
    let transcript = seeded_match(7, 11);

    assert_eq!(transcript.positions.len(), transcript.len() + 1);

    for (i, record) in transcript.records.iter().enumerate() {
        let before = &transcript.positions[i];
        let after = &transcript.positions[i + 1];

        assert_eq!(record.move_number, i);
        assert_eq!(record.player, before.to_move());
        assert_eq!(engine.apply_move(before, record.pocket).unwrap(), *after);
    }
}

/// Test that no stone is created or destroyed during an entire match.
#[test]
fn test_conservation_across_entire_match() {
    let transcript = seeded_match(99, 100);
    let total = Rules::default().total_stones();

    for position in transcript.positions.iter() {
        let sum: u32 = position.pockets().iter().sum();
        assert_eq!(sum, total);
    }
}

// =============================================================================
// Outcome Tests
// =============================================================================

/// Test that a seeded random match plays to a verdict.
#[test]
fn test_random_match_reaches_outcome() {
    let engine = Mancala::new(Rules::default());
    let transcript = seeded_match(7, 11);

    let outcome = transcript.outcome.unwrap();
    let last = transcript.final_position().unwrap();
    assert_eq!(engine.winner(last), Some(outcome));

    let scores = engine.final_scores(last);
    assert_eq!(
        scores[Player::South] + scores[Player::North],
        Rules::default().total_stones()
    );
}

/// Test that the move limit caps an unfinished game without a verdict.
#[test]
fn test_move_limit_caps_the_game() {
    let runner = standard_runner(3);
    let mut south = RandomSelector::new(1);
    let mut north = RandomSelector::new(2);

    let transcript = runner.play(&mut south, &mut north).unwrap();

    assert_eq!(transcript.len(), 3);
    assert_eq!(transcript.outcome, None);
}

/// Test a forced endgame played from a constructed position.
#[test]
fn test_play_from_forced_draw() {
    let rules = Rules::default();
    let runner = standard_runner(2000);
    let opening = Board::with_pockets(
        &rules,
        &[0, 0, 0, 0, 0, 1, 23, 0, 0, 0, 0, 0, 4, 20],
        Player::South,
    )
    .unwrap();

    let mut south = RandomSelector::new(1);
    let mut north = RandomSelector::new(2);
    let transcript = runner.play_from(opening, &mut south, &mut north).unwrap();

    // South's only move banks the last stone for 24 apiece.
    assert_eq!(transcript.len(), 1);
    assert_eq!(transcript.outcome, Some(GameOutcome::Draw));

    let engine = Mancala::new(rules);
    let scores = engine.final_scores(transcript.final_position().unwrap());
    assert_eq!(scores[Player::South], 24);
    assert_eq!(scores[Player::North], 24);
}

// =============================================================================
// Serialization Tests
// =============================================================================

/// Test that a transcript survives a binary round trip.
#[test]
fn test_transcript_bytes_round_trip() {
    let transcript = seeded_match(5, 6);

    let bytes = transcript.to_bytes().unwrap();
    let restored = Transcript::from_bytes(&bytes).unwrap();

    assert_eq!(restored, transcript);
}

/// Test that a transcript survives a JSON round trip.
#[test]
fn test_transcript_json_round_trip() {
    let transcript = seeded_match(5, 6);

    let json = serde_json::to_string(&transcript).unwrap();
    let restored: Transcript = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, transcript);
}
