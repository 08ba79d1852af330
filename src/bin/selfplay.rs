use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use tictac::selfplay::{generate_games_with, summarize, write_records, SelfPlayParams};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tictac-selfplay", about = "Generate engine self-play games and write them as JSON lines")]
struct Args {
    #[arg(long, default_value_t = 100)]
    games: usize,
    #[arg(long, default_value_t = 3)]
    size: usize,
    #[arg(long, default_value_t = 3)]
    run_length: usize,
    #[arg(long, default_value_t = 2)]
    players: usize,
    #[arg(long, default_value_t = 1)]
    threads: usize,
    #[arg(long, default_value_t = 42)]
    seed: u64,
    #[arg(long, default_value_t = 0)]
    random_opening: usize,
    #[arg(long, default_value = "out/selfplay.jsonl")]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let a = Args::parse();
    let params = SelfPlayParams {
        games: a.games,
        size: a.size,
        run_length: a.run_length,
        players: a.players,
        seed: a.seed,
        threads: a.threads,
        random_opening: a.random_opening,
    };
    eprintln!("Generating {} games ({}x{}, run={}, players={}, threads={})", a.games, a.size, a.size, a.run_length, a.players, a.threads);
    let pb = ProgressBar::new(a.games as u64);
    pb.set_style(ProgressStyle::with_template("{bar:40} {pos}/{len} games [{elapsed_precise}]")?);
    let games = generate_games_with(&params, |_| pb.inc(1))?;
    pb.finish();
    write_records(&a.out, &games)?;
    let s = summarize(&games, a.players);
    eprintln!("Wrote {} games to {}", games.len(), a.out.display());
    let wins: Vec<String> = s.wins.iter().enumerate().map(|(p, w)| format!("p{}={}", p, w)).collect();
    println!("games={} draws={} wins: {}", s.games, s.draws, wins.join(" "));
    Ok(())
}
