//! Square N-in-a-row board: cells, geometry and the shared winning-line set.

pub mod lines;
pub mod terminal;

use std::fmt;
use std::sync::Arc;

use crate::error::BoardError;
pub use lines::{LineSet, WinningLine, STEPS};
pub use terminal::GameState;

/// Player identifier; small non-negative integers indexing the player list.
pub type PlayerId = usize;

/// Cell contents, `None` is empty.
pub type Cell = Option<PlayerId>;

const SYMBOLS: &[u8] = b"XOABCDEFGHIJKLMNPQRSTUVWYZ";

/// Text symbol used for a player when rendering.
pub fn player_symbol(player: PlayerId) -> char {
    SYMBOLS.get(player).map(|&b| b as char).unwrap_or('#')
}

#[derive(Clone, Debug)]
pub struct Board {
    cells: Vec<Cell>,
    lines: Arc<LineSet>,
}

impl Board {
    pub fn new(size: usize, run_length: usize) -> Result<Self, BoardError> {
        Ok(Self::with_lines(Arc::new(LineSet::generate(size, run_length)?)))
    }

    /// Empty board reusing an already generated line set.
    pub fn with_lines(lines: Arc<LineSet>) -> Self {
        let n = lines.size() * lines.size();
        Self { cells: vec![None; n], lines }
    }

    pub fn size(&self) -> usize { self.lines.size() }
    pub fn run_length(&self) -> usize { self.lines.run_length() }
    pub fn len(&self) -> usize { self.cells.len() }
    pub fn cells(&self) -> &[Cell] { &self.cells }
    pub fn lines(&self) -> &LineSet { &self.lines }
    pub fn shared_lines(&self) -> Arc<LineSet> { self.lines.clone() }

    pub fn reset(&mut self) {
        self.cells.iter_mut().for_each(|c| *c = None);
    }

    pub fn contains(&self, cell: usize) -> bool { cell < self.cells.len() }

    /// Owner of `cell`; `None` when empty or out of range.
    pub fn get(&self, cell: usize) -> Cell { self.cells.get(cell).copied().flatten() }

    pub fn is_empty(&self, cell: usize) -> bool { matches!(self.cells.get(cell), Some(None)) }

    /// Places `player` on `cell` unless it is occupied or off the board.
    pub fn set(&mut self, cell: usize, player: PlayerId) -> bool {
        if !self.is_empty(cell) { return false; }
        self.cells[cell] = Some(player);
        true
    }

    pub fn is_all_empty(&self) -> bool { self.cells.iter().all(Option::is_none) }
    pub fn is_all_occupied(&self) -> bool { self.cells.iter().all(Option::is_some) }
    pub fn occupied_count(&self) -> usize { self.cells.iter().filter(|c| c.is_some()).count() }

    /// Empty cell indices in ascending order.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells.iter().enumerate().filter(|(_, c)| c.is_none()).map(|(i, _)| i)
    }

    /// Make/undo for search: writes `player` on `cell` without the occupancy check,
    /// runs `f`, then restores whatever the cell held before.
    pub(crate) fn with_move<R>(&mut self, cell: usize, player: PlayerId, f: impl FnOnce(&mut Board) -> R) -> R {
        let prev = std::mem::replace(&mut self.cells[cell], Some(player));
        let out = f(self);
        self.cells[cell] = prev;
        out
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.size();
        for row in self.cells.chunks(size) {
            let line: Vec<String> = row.iter().map(|c| match c {
                Some(p) => player_symbol(*p).to_string(),
                None => ".".to_string(),
            }).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
