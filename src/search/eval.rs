use crate::board::{GameState, PlayerId};

pub const WIN_SCORE: i32 = 10;
pub const DRAW_SCORE: i32 = 0;
/// Initial best score, well outside the terminal score range.
pub const INF_SCORE: i32 = 1000;

/// Score of a finished position from the maximizer's side. Earlier wins and later
/// losses score higher; wins by a third player count as a draw.
pub fn terminal_score(state: GameState, maximizer: PlayerId, minimizer: PlayerId, depth: u32) -> i32 {
    let depth = depth as i32;
    match state.winner() {
        Some(w) if w == maximizer => WIN_SCORE - depth,
        Some(w) if w == minimizer => depth - WIN_SCORE,
        _ => DRAW_SCORE,
    }
}
