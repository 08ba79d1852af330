use tictac::board::{Board, GameState};
use tictac::protocol::{Engine, Response};

fn engine() -> Engine { Engine::new(Board::new(3, 3).unwrap()) }

#[test]
fn set_and_state() {
    let mut e = engine();
    assert_eq!(e.handle("state"), Response::State(GameState::InProgress));
    for (cell, p) in [(0, 0), (3, 1), (1, 0), (4, 1), (2, 0)] {
        assert_eq!(e.handle(&format!("set {cell} {p}")), Response::Ok);
    }
    assert_eq!(e.handle("set 2 1"), Response::Rejected);
    assert_eq!(e.handle("state").to_string(), "state win 0");
}

#[test]
fn go_reports_best_move() {
    let mut e = engine();
    for cmd in ["set 0 0", "set 1 0", "set 3 1", "set 7 1"] { assert_eq!(e.handle(cmd), Response::Ok); }
    match e.handle("go 0 1") {
        Response::BestMove { mv, score, nodes } => {
            assert_eq!(mv, Some(2));
            assert_eq!(score, 9);
            assert!(nodes > 1);
        }
        other => panic!("unexpected response {other:?}"),
    }
    assert_eq!(e.board().occupied_count(), 4);
}

#[test]
fn go_on_finished_board_has_no_move() {
    let mut e = engine();
    for cmd in ["set 0 1", "set 1 1", "set 2 1"] { e.handle(cmd); }
    assert_eq!(e.handle("go 0 1").to_string(), "bestmove none score -10 nodes 1");
}

#[test]
fn new_and_reset() {
    let mut e = engine();
    assert_eq!(e.handle("new 4 3"), Response::Ok);
    assert_eq!(e.board().len(), 16);
    assert!(matches!(e.handle("new 3 4"), Response::Error(_)));
    assert_eq!(e.board().len(), 16, "failed 'new' must keep the old board");
    e.handle("set 5 0");
    assert_eq!(e.handle("reset"), Response::Ok);
    assert!(e.board().is_all_empty());
}

#[test]
fn show_and_lines() {
    let mut e = engine();
    e.handle("set 4 1");
    assert_eq!(e.handle("show").to_string(), ". . .\n. O .\n. . .");
    let lines = e.handle("lines").to_string();
    assert!(lines.starts_with("lines 8\n0 1 2\n"));
    assert!(lines.ends_with("6 4 2"));
}

#[test]
fn malformed_commands_are_errors() {
    let mut e = engine();
    assert_eq!(e.handle("set 1").to_string(), "error expected 2 arguments, got 1");
    assert_eq!(e.handle("set a 0").to_string(), "error not a number: a");
    assert_eq!(e.handle("fly").to_string(), "error unknown command 'fly'");
    assert_eq!(e.handle("quit"), Response::Quit);
}
