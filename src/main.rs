use anyhow::Result;
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;
use tictac::board::{player_symbol, Board, GameState};
use tictac::config::{ControllerKind, GameConfig};
use tictac::game::{Game, Placement};
use tictac::protocol::Engine;
use tictac::search::Searcher;

#[derive(Parser, Debug)]
#[command(author, version, about = "Play N-in-a-row against the minimax engine", long_about = None)]
struct Args {
    /// Path to a JSON game config (size, run_length, players)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Board side length (ignored when --config is given)
    #[arg(long, default_value_t = 3)]
    size: usize,

    /// Cells in a row needed to win (ignored when --config is given)
    #[arg(long, default_value_t = 3)]
    run_length: usize,

    /// Operation mode: 'h' for human vs engine, 's' for engine self play
    #[arg(long, default_value = "h")]
    mode: String,

    /// Seed for the engine's opening move
    #[arg(long)]
    seed: Option<u64>,

    /// Print search timing for engine moves
    #[arg(long)]
    verbose: bool,

    /// Run the line-based engine protocol on stdin/stdout instead
    #[arg(long)]
    protocol: bool,
}

enum HumanAction {
    Place(usize),
    Restart,
    Quit,
}

fn get_human_move(game: &Game) -> Result<HumanAction> {
    loop {
        print!("Enter a cell (0-{}), 'hint', 'restart' or 'quit': ", game.board().len() - 1);
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 { return Ok(HumanAction::Quit); }
        let input = input.trim();

        match input {
            "quit" => return Ok(HumanAction::Quit),
            "restart" => return Ok(HumanAction::Restart),
            "hint" => {
                // Search a copy so the live board is never touched
                let mut scratch = game.board().clone();
                let res = Searcher::default().search(&mut scratch, game.turn(), game.next_turn());
                match res.best.mv {
                    Some(m) => println!("Hint: cell {} (score {})", m, res.best.score),
                    None => println!("No move available"),
                }
            }
            _ => match input.parse::<usize>() {
                Ok(cell) if game.board().is_empty(cell) => return Ok(HumanAction::Place(cell)),
                Ok(_) => println!("Cell is occupied or off the board!"),
                Err(_) => println!("Invalid input! Enter a cell index"),
            },
        }
    }
}

fn print_result(state: GameState, config: &GameConfig) {
    match state {
        GameState::Win(p) => {
            let name = config.players.get(p).map(|pl| pl.name.as_str()).unwrap_or("?");
            println!("\n{} ({}) wins!", name, player_symbol(p));
        }
        GameState::Draw => println!("\nIt's a tie!"),
        GameState::InProgress => {}
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => GameConfig::load_or_default(path)?,
        None => GameConfig { size: args.size, run_length: args.run_length, ..GameConfig::default() },
    };
    config.validate()?;

    if args.protocol {
        let mut engine = Engine::new(Board::new(config.size, config.run_length)?);
        engine.run_loop()?;
        return Ok(());
    }

    let mode = args.mode.chars().next().unwrap_or('h');
    if mode == 's' {
        for p in &mut config.players { p.controller = ControllerKind::Engine; }
    }

    let seed = args.seed.unwrap_or_else(rand::random);
    let mut controllers = config.controllers(seed);
    let mut game = config.new_game()?;

    loop {
        println!("\n{}'s turn ({})", config.players[game.turn()].name, player_symbol(game.turn()));
        println!("{}", game.board());

        let cell = match controllers[game.turn()].as_mut() {
            Some(controller) => {
                if args.verbose { println!("Thinking..."); }
                let start_time = Instant::now();
                let mv = game.propose(&mut **controller);
                if args.verbose { println!("elapsed: {:.3}s", start_time.elapsed().as_secs_f64()); }
                match mv {
                    Some(m) => { println!("{} plays: {}", controller.name(), m); m }
                    None => { println!("No legal moves available!"); break; }
                }
            }
            None => match get_human_move(&game)? {
                HumanAction::Place(m) => m,
                HumanAction::Restart => { game.restart(); continue; }
                HumanAction::Quit => break,
            },
        };

        match game.place(cell) {
            Placement::Rejected => println!("Move rejected!"),
            Placement::Continue { .. } => {}
            Placement::Ended(state) => {
                println!("\n{}", game.board());
                print_result(state, &config);
                break;
            }
        }
    }

    Ok(())
}
