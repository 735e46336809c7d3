//! Move-path enumeration for validating the engine.
//!
//! Perft walks every legal move sequence to a fixed depth and counts the
//! paths. Because it exercises move generation, application, and terminal
//! detection together, disagreement with known counts (or between the plain
//! and memoized walks) pins down rule bugs quickly.

use rustc_hash::FxHashMap;

use crate::core::Board;

use super::Mancala;

/// Count the move paths of `depth` plies from `board`.
///
/// A position that is terminal, or out of plies, counts as one path. A free
/// turn is one ply like any other move.
#[must_use]
pub fn perft(engine: &Mancala, board: &Board, depth: u32) -> u64 {
    if depth == 0 || engine.is_terminal(board) {
        return 1;
    }

    let mut paths = 0;
    for pocket in engine.available_moves(board, board.to_move()) {
        if let Ok(next) = engine.apply_move(board, pocket) {
            paths += perft(engine, &next, depth - 1);
        }
    }
    paths
}

/// `perft` with a transposition table keyed on position and depth.
///
/// Sowing transposes often (different orders reach the same position), so
/// the table pays off from modest depths.
#[must_use]
pub fn perft_memoized(engine: &Mancala, board: &Board, depth: u32) -> u64 {
    let mut table = FxHashMap::default();
    memoized_walk(engine, board, depth, &mut table)
}

fn memoized_walk(
    engine: &Mancala,
    board: &Board,
    depth: u32,
    table: &mut FxHashMap<(Board, u32), u64>,
) -> u64 {
    if depth == 0 || engine.is_terminal(board) {
        return 1;
    }

    let key = (board.clone(), depth);
    if let Some(&paths) = table.get(&key) {
        return paths;
    }

    let mut paths = 0;
    for pocket in engine.available_moves(board, board.to_move()) {
        if let Ok(next) = engine.apply_move(board, pocket) {
            paths += memoized_walk(engine, &next, depth - 1, table);
        }
    }

    table.insert(key, paths);
    paths
}
