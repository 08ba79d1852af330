use std::fs::{create_dir_all, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use rayon::prelude::*;

use crate::board::{Board, LineSet, PlayerId};
use crate::game::{Controller, EngineController, Game, Placement, RandomController};

#[derive(Clone, Debug)]
pub struct SelfPlayParams {
    pub games: usize,
    pub size: usize,
    pub run_length: usize,
    pub players: usize,
    pub seed: u64,
    pub threads: usize,
    pub random_opening: usize, // plies played uniformly at random before the engine takes over
}

impl Default for SelfPlayParams {
    fn default() -> Self {
        Self { games: 10, size: 3, run_length: 3, players: 2, seed: 42, threads: 1, random_opening: 0 }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GameRecord {
    pub moves: Vec<usize>,
    pub winner: Option<PlayerId>, // None for a draw
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelfPlaySummary {
    pub games: usize,
    pub draws: usize,
    pub wins: Vec<usize>, // indexed by player
}

pub fn generate_games(params: &SelfPlayParams) -> Result<Vec<GameRecord>> {
    generate_games_with(params, |_| {})
}

/// Plays `params.games` engine-vs-engine games, calling `on_game` as each finishes.
/// Results depend only on the seed, not on the thread count.
pub fn generate_games_with<F>(params: &SelfPlayParams, on_game: F) -> Result<Vec<GameRecord>>
where
    F: Fn(&GameRecord) + Sync,
{
    let lines = Arc::new(LineSet::generate(params.size, params.run_length)?);
    let play = |gi: usize| -> Result<GameRecord> {
        let rec = play_game(params, Board::with_lines(lines.clone()), gi)?;
        on_game(&rec);
        Ok(rec)
    };
    let games = if params.threads > 1 {
        let pool = rayon::ThreadPoolBuilder::new().num_threads(params.threads).build()?;
        pool.install(|| (0..params.games).into_par_iter().map(play).collect::<Result<Vec<_>>>())?
    } else {
        (0..params.games).map(play).collect::<Result<Vec<_>>>()?
    };
    log::info!("self-play finished: {} games ({}x{}, run {})", games.len(), params.size, params.size, params.run_length);
    Ok(games)
}

fn play_game(params: &SelfPlayParams, board: Board, gi: usize) -> Result<GameRecord> {
    let mut game = Game::new(board, params.players)?;
    let game_seed = params.seed ^ (gi as u64).rotate_left(17);
    let mut engines: Vec<EngineController> = (0..params.players)
        .map(|p| EngineController::new(game_seed.wrapping_add(p as u64)))
        .collect();
    let mut opener = RandomController::new(game_seed.rotate_left(7));
    loop {
        let ply = game.moves().len();
        let controller: &mut dyn Controller = if ply < params.random_opening { &mut opener } else { &mut engines[game.turn()] };
        let Some(cell) = game.propose(controller) else { break };
        match game.place(cell) {
            Placement::Continue { .. } => {}
            Placement::Ended(_) => break,
            Placement::Rejected => anyhow::bail!("controller proposed unplayable cell {cell}"),
        }
    }
    Ok(GameRecord { moves: game.moves().to_vec(), winner: game.state().winner() })
}

pub fn summarize(games: &[GameRecord], players: usize) -> SelfPlaySummary {
    let mut s = SelfPlaySummary { games: games.len(), draws: 0, wins: vec![0; players] };
    for g in games {
        match g.winner {
            Some(w) if w < players => s.wins[w] += 1,
            Some(_) => {}
            None => s.draws += 1,
        }
    }
    s
}

/// Writes one JSON object per line.
pub fn write_records<P: AsRef<Path>>(path: P, games: &[GameRecord]) -> std::io::Result<()> {
    if let Some(dir) = path.as_ref().parent() {
        if !dir.as_os_str().is_empty() { create_dir_all(dir)?; }
    }
    let mut w = BufWriter::new(File::create(path)?);
    for g in games {
        serde_json::to_writer(&mut w, g)?;
        w.write_all(b"\n")?;
    }
    w.flush()
}

pub fn read_records<P: AsRef<Path>>(path: P) -> std::io::Result<Vec<GameRecord>> {
    let r = BufReader::new(File::open(path)?);
    let mut out = Vec::new();
    for line in r.lines() {
        let line = line?;
        if line.trim().is_empty() { continue; }
        out.push(serde_json::from_str(&line)?);
    }
    Ok(out)
}
