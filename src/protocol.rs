use std::fmt;
use std::io::{self, BufRead, Write};

use crate::board::{Board, GameState, PlayerId};
use crate::search::Searcher;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Response {
    Ok,
    Rejected,
    Error(String),
    BestMove { mv: Option<usize>, score: i32, nodes: u64 },
    State(GameState),
    Text(String),
    Quit,
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Response::Ok => write!(f, "ok"),
            Response::Rejected => write!(f, "rejected"),
            Response::Error(msg) => write!(f, "error {}", msg),
            Response::BestMove { mv, score, nodes } => match mv {
                Some(m) => write!(f, "bestmove {} score {} nodes {}", m, score, nodes),
                None => write!(f, "bestmove none score {} nodes {}", score, nodes),
            },
            Response::State(GameState::InProgress) => write!(f, "state inprogress"),
            Response::State(GameState::Win(p)) => write!(f, "state win {}", p),
            Response::State(GameState::Draw) => write!(f, "state draw"),
            Response::Text(s) => write!(f, "{}", s.trim_end()),
            Response::Quit => write!(f, "bye"),
        }
    }
}

/// Line-oriented engine front-end:
/// `new <size> <run>`, `reset`, `set <cell> <player>`, `go <max> <min>`, `state`,
/// `show`, `lines`, `quit`.
pub struct Engine {
    board: Board,
    searcher: Searcher,
}

impl Engine {
    pub fn new(board: Board) -> Self { Self { board, searcher: Searcher::default() } }

    pub fn board(&self) -> &Board { &self.board }

    pub fn handle(&mut self, line: &str) -> Response {
        let mut tokens = line.split_whitespace();
        let Some(cmd) = tokens.next() else { return Response::Error("empty command".into()) };
        let args: Vec<&str> = tokens.collect();
        match cmd {
            "new" => self.cmd_new(&args),
            "reset" => { self.board.reset(); Response::Ok }
            "set" => self.cmd_set(&args),
            "go" => self.cmd_go(&args),
            "state" => Response::State(self.board.state()),
            "show" => Response::Text(self.board.to_string()),
            "lines" => Response::Text(self.lines_text()),
            "quit" => Response::Quit,
            other => Response::Error(format!("unknown command '{}'", other)),
        }
    }

    fn cmd_new(&mut self, args: &[&str]) -> Response {
        let (size, run) = match parse_pair(args) { Ok(v) => v, Err(e) => return Response::Error(e) };
        match Board::new(size, run) {
            Ok(b) => { self.board = b; Response::Ok }
            Err(e) => Response::Error(e.to_string()),
        }
    }

    fn cmd_set(&mut self, args: &[&str]) -> Response {
        let (cell, player) = match parse_pair(args) { Ok(v) => v, Err(e) => return Response::Error(e) };
        if self.board.set(cell, player) { Response::Ok } else { Response::Rejected }
    }

    fn cmd_go(&mut self, args: &[&str]) -> Response {
        let (max, min): (PlayerId, PlayerId) = match parse_pair(args) { Ok(v) => v, Err(e) => return Response::Error(e) };
        let res = self.searcher.search(&mut self.board, max, min);
        Response::BestMove { mv: res.best.mv, score: res.best.score, nodes: res.nodes }
    }

    fn lines_text(&self) -> String {
        let mut s = format!("lines {}\n", self.board.lines().len());
        for l in self.board.lines() {
            let idx: Vec<String> = l.iter().map(|i| i.to_string()).collect();
            s.push_str(&idx.join(" "));
            s.push('\n');
        }
        s
    }

    pub fn run_loop(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        let mut out = io::stdout();
        for line in stdin.lock().lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() { continue; }
            let resp = self.handle(line);
            writeln!(out, "{}", resp)?;
            out.flush()?;
            if resp == Response::Quit { break; }
        }
        Ok(())
    }
}

fn parse_pair(args: &[&str]) -> Result<(usize, usize), String> {
    match args {
        [a, b] => {
            let a = a.parse::<usize>().map_err(|_| format!("not a number: {}", a))?;
            let b = b.parse::<usize>().map_err(|_| format!("not a number: {}", b))?;
            Ok((a, b))
        }
        _ => Err(format!("expected 2 arguments, got {}", args.len())),
    }
}
