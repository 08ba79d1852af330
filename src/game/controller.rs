use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::board::{Board, PlayerId};
use crate::search::Searcher;

/// Something that picks the next cell for a player.
pub trait Controller {
    fn name(&self) -> &str;

    /// Cell for `me` to play against `opponent`, `None` if it has nothing to offer.
    /// Implementations may search on `board` but must leave it as they found it.
    fn select_move(&mut self, board: &mut Board, me: PlayerId, opponent: PlayerId) -> Option<usize>;
}

fn random_empty(board: &Board, rng: &mut SmallRng) -> Option<usize> {
    let empties: Vec<usize> = board.empty_cells().collect();
    if empties.is_empty() { None } else { Some(empties[rng.gen_range(0..empties.len())]) }
}

/// Minimax player. Opens with a random cell on an empty board, since the search
/// alone would always choose the same first move.
pub struct EngineController {
    rng: SmallRng,
    searcher: Searcher,
}

impl EngineController {
    pub fn new(seed: u64) -> Self { Self { rng: SmallRng::seed_from_u64(seed), searcher: Searcher::default() } }
}

impl Controller for EngineController {
    fn name(&self) -> &str { "engine" }

    fn select_move(&mut self, board: &mut Board, me: PlayerId, opponent: PlayerId) -> Option<usize> {
        if board.is_all_empty() { return random_empty(board, &mut self.rng); }
        self.searcher.search(board, me, opponent).best.mv
    }
}

pub struct RandomController {
    rng: SmallRng,
}

impl RandomController {
    pub fn new(seed: u64) -> Self { Self { rng: SmallRng::seed_from_u64(seed) } }
}

impl Controller for RandomController {
    fn name(&self) -> &str { "random" }

    fn select_move(&mut self, board: &mut Board, _me: PlayerId, _opponent: PlayerId) -> Option<usize> {
        random_empty(board, &mut self.rng)
    }
}
