// N-in-a-row board engine with exhaustive minimax
pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod perft;
pub mod protocol;
pub mod search;
pub mod selfplay;

pub use board::{Board, GameState, LineSet, PlayerId, WinningLine};
pub use error::{BoardError, ConfigError};
pub use search::{best_move, minimax, ScoredMove};
