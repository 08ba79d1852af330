pub mod eval;
pub mod minimax;

pub use minimax::{best_move, minimax, ScoredMove, SearchResult, Searcher};
