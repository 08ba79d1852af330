// Complete-game enumeration using make/undo (no cloning)
use crate::board::{Board, GameState, PlayerId};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TreeCounts {
    pub games: u64,
    pub first_wins: u64,
    pub second_wins: u64,
    pub draws: u64,
}

/// Counts every finished game reachable from `board` with `first` to move and the two
/// players alternating. A win by any other identifier is counted in `games` only.
pub fn perft(board: &mut Board, first: PlayerId, second: PlayerId) -> TreeCounts {
    let mut counts = TreeCounts::default();
    walk(board, first, second, true, &mut counts);
    counts
}

fn walk(board: &mut Board, first: PlayerId, second: PlayerId, first_to_move: bool, counts: &mut TreeCounts) {
    match board.state() {
        GameState::InProgress => {}
        GameState::Draw => { counts.games += 1; counts.draws += 1; return; }
        GameState::Win(w) => {
            counts.games += 1;
            if w == first { counts.first_wins += 1; } else if w == second { counts.second_wins += 1; }
            return;
        }
    }
    let mover = if first_to_move { first } else { second };
    for cell in 0..board.len() {
        if !board.is_empty(cell) { continue; }
        board.with_move(cell, mover, |b| walk(b, first, second, !first_to_move, counts));
    }
}
