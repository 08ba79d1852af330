use clap::Parser;
use std::time::Instant;
use tictac::board::Board;
use tictac::perft::perft;
use tictac::search::Searcher;

#[derive(Parser, Debug)]
#[command(name = "tictac-perft", version, about = "Count complete game trees and time a root search")]
struct Args {
    /// Board side length
    #[arg(long, default_value_t = 3)]
    size: usize,

    /// Cells in a row needed to win
    #[arg(long, default_value_t = 3)]
    run_length: usize,

    /// Cells already played, alternating players 0 and 1 (e.g. "4,0")
    #[arg(long, value_delimiter = ',')]
    moves: Vec<usize>,

    /// Skip the game-tree count and only time the search
    #[arg(long, default_value_t = false)]
    search_only: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let mut board = Board::new(args.size, args.run_length)?;
    for (i, &m) in args.moves.iter().enumerate() {
        if !board.set(m, i % 2) { anyhow::bail!("cell {} is occupied or off the board", m); }
    }
    let (to_move, other) = if args.moves.len() % 2 == 0 { (0, 1) } else { (1, 0) };
    println!("{}", board);

    if !args.search_only {
        let t0 = Instant::now();
        let c = perft(&mut board, to_move, other);
        let dt = t0.elapsed();
        println!("games={} first_wins={} second_wins={} draws={} elapsed={:.3}s", c.games, c.first_wins, c.second_wins, c.draws, dt.as_secs_f64());
    }

    let res = Searcher::default().search(&mut board, to_move, other);
    let nps = if res.elapsed.as_secs_f64() > 0.0 { res.nodes as f64 / res.elapsed.as_secs_f64() } else { 0.0 };
    let best = res.best.mv.map(|m| m.to_string()).unwrap_or_else(|| "(none)".to_string());
    println!("bestmove={} score={} nodes={} elapsed={:.3}s nps={:.1}", best, res.best.score, res.nodes, res.elapsed.as_secs_f64(), nps);
    Ok(())
}
