use tictac::board::{Board, GameState};

fn board_from(size: usize, run: usize, cells: &[Option<usize>]) -> Board {
    let mut b = Board::new(size, run).unwrap();
    for (i, c) in cells.iter().enumerate() {
        if let Some(p) = c { assert!(b.set(i, *p)); }
    }
    b
}

const X: Option<usize> = Some(0);
const O: Option<usize> = Some(1);
const E: Option<usize> = None;

#[test]
fn empty_board_is_not_terminal() {
    let b = Board::new(3, 3).unwrap();
    assert_eq!(b.state(), GameState::InProgress);
    assert!(!b.state().is_terminal());
    assert_eq!(b.state().winner(), None);
}

#[test]
fn completed_line_with_empties_left_is_a_win() {
    let b = board_from(3, 3, &[
        O, E, X,
        O, X, E,
        X, E, E,
    ]);
    assert_eq!(b.state(), GameState::Win(0));
    assert!(b.is_terminal());
    let (line, owner) = b.winning_line().expect("anti-diagonal");
    assert_eq!(line.indices(), &[6, 4, 2]);
    assert_eq!(owner, 0);
}

#[test]
fn full_board_without_line_is_a_draw() {
    let b = board_from(3, 3, &[
        X, O, X,
        X, O, O,
        O, X, X,
    ]);
    assert_eq!(b.state(), GameState::Draw);
    assert!(b.state().is_terminal());
    assert_eq!(b.state().winner(), None);
}

#[test]
fn partial_line_is_not_a_win() {
    let b = board_from(4, 4, &[
        X, X, X, E,
        O, O, O, E,
        E, E, E, E,
        E, E, E, E,
    ]);
    assert_eq!(b.state(), GameState::InProgress);
}

#[test]
fn first_line_in_enumeration_order_decides_winner() {
    // Not reachable in play, but the tie-break is enumeration order
    let b = board_from(3, 3, &[
        E, E, E,
        O, O, O,
        X, X, X,
    ]);
    assert_eq!(b.state(), GameState::Win(1));
}

#[test]
fn longer_run_wins_through_overlapping_lines() {
    let b = board_from(4, 3, &[
        E, X, X, X,
        E, E, E, E,
        E, E, E, E,
        O, O, E, E,
    ]);
    assert_eq!(b.state(), GameState::Win(0));
    assert_eq!(b.winning_line().unwrap().0.indices(), &[1, 2, 3]);
}

#[test]
fn third_player_can_win() {
    let b = board_from(3, 3, &[
        Some(2), X, O,
        Some(2), O, X,
        Some(2), E, E,
    ]);
    assert_eq!(b.state(), GameState::Win(2));
}

#[test]
fn single_cell_lines_never_win() {
    let mut b = Board::new(2, 1).unwrap();
    b.set(0, 0);
    assert_eq!(b.state(), GameState::InProgress);
    for i in 1..4 { b.set(i, 0); }
    assert_eq!(b.state(), GameState::Draw);
}
