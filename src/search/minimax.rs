use std::time::{Duration, Instant};

use crate::board::{Board, PlayerId};
use crate::search::eval::{terminal_score, INF_SCORE};

/// Best cell found by a search and its score from the maximizer's side.
/// `mv` is `None` only when the searched board was already terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ScoredMove {
    pub mv: Option<usize>,
    pub score: i32,
}

#[derive(Clone, Copy, Debug)]
pub struct SearchResult {
    pub best: ScoredMove,
    pub nodes: u64,
    pub elapsed: Duration,
}

/// Exhaustive minimax over empty cells. Holds only per-search counters.
#[derive(Default, Debug)]
pub struct Searcher {
    pub(crate) nodes: u64,
}

impl Searcher {
    pub fn nodes(&self) -> u64 { self.nodes }

    /// Root search for `maximizer` to move against `minimizer`.
    pub fn search(&mut self, board: &mut Board, maximizer: PlayerId, minimizer: PlayerId) -> SearchResult {
        self.nodes = 0;
        let t0 = Instant::now();
        let best = self.minimax(board, maximizer, minimizer, true, 0);
        let elapsed = t0.elapsed();
        log::debug!(
            "minimax: player={} best={:?} score={} nodes={} elapsed={:.3}s",
            maximizer, best.mv, best.score, self.nodes, elapsed.as_secs_f64()
        );
        SearchResult { best, nodes: self.nodes, elapsed }
    }

    pub fn minimax(&mut self, board: &mut Board, maximizer: PlayerId, minimizer: PlayerId, is_max: bool, depth: u32) -> ScoredMove {
        self.nodes += 1;
        let state = board.state();
        if state.is_terminal() {
            return ScoredMove { mv: None, score: terminal_score(state, maximizer, minimizer, depth) };
        }

        let mut best = ScoredMove { mv: None, score: if is_max { -INF_SCORE } else { INF_SCORE } };
        let player = if is_max { maximizer } else { minimizer };
        for cell in 0..board.len() {
            if !board.is_empty(cell) { continue; }
            let reply = board.with_move(cell, player, |b| self.minimax(b, maximizer, minimizer, !is_max, depth + 1));
            // Ties replace the incumbent: the last equally good cell is kept.
            let better = if is_max { reply.score >= best.score } else { reply.score <= best.score };
            if better { best = ScoredMove { mv: Some(cell), score: reply.score }; }
        }
        best
    }
}

/// Stateless entry point; see [`Searcher::minimax`].
pub fn minimax(board: &mut Board, maximizer: PlayerId, minimizer: PlayerId, is_max: bool, depth: u32) -> ScoredMove {
    Searcher::default().minimax(board, maximizer, minimizer, is_max, depth)
}

/// Optimal move for `maximizer` to play now.
pub fn best_move(board: &mut Board, maximizer: PlayerId, minimizer: PlayerId) -> ScoredMove {
    minimax(board, maximizer, minimizer, true, 0)
}
