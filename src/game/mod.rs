//! Turn sequencing for a board shared by `player_count` players.

pub mod controller;

pub use controller::{Controller, EngineController, RandomController};

use crate::board::{Board, GameState, PlayerId};
use crate::error::ConfigError;

/// Outcome of [`Game::place`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    /// Game already over, or the cell is occupied or off the board.
    Rejected,
    Continue { next: PlayerId },
    Ended(GameState),
}

#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    player_count: usize,
    turn: PlayerId,
    moves: Vec<usize>,
    ended: Option<GameState>,
}

impl Game {
    pub fn new(board: Board, player_count: usize) -> Result<Self, ConfigError> {
        if player_count == 0 {
            return Err(ConfigError::Validation("a game needs at least one player".into()));
        }
        Ok(Self { board, player_count, turn: 0, moves: Vec::new(), ended: None })
    }

    pub fn board(&self) -> &Board { &self.board }
    pub fn player_count(&self) -> usize { self.player_count }
    pub fn turn(&self) -> PlayerId { self.turn }
    pub fn next_turn(&self) -> PlayerId { (self.turn + 1) % self.player_count }
    pub fn moves(&self) -> &[usize] { &self.moves }
    pub fn has_ended(&self) -> bool { self.ended.is_some() }
    pub fn state(&self) -> GameState { self.ended.unwrap_or(GameState::InProgress) }

    /// Plays `cell` for the current player.
    pub fn place(&mut self, cell: usize) -> Placement {
        if self.ended.is_some() || !self.board.set(cell, self.turn) { return Placement::Rejected; }
        self.moves.push(cell);
        let state = self.board.state();
        if state.is_terminal() {
            log::info!("game over after {} moves: {:?}", self.moves.len(), state);
            self.ended = Some(state);
            return Placement::Ended(state);
        }
        self.turn = self.next_turn();
        Placement::Continue { next: self.turn }
    }

    pub fn restart(&mut self) {
        self.board.reset();
        self.turn = 0;
        self.moves.clear();
        self.ended = None;
    }

    /// Asks `controller` for the current player's move against the next player.
    pub fn propose(&mut self, controller: &mut dyn Controller) -> Option<usize> {
        if self.ended.is_some() { return None; }
        let (me, opponent) = (self.turn, self.next_turn());
        controller.select_move(&mut self.board, me, opponent)
    }
}
