use std::sync::Arc;
use tictac::board::Board;
use tictac::BoardError;

#[test]
fn rejects_invalid_configurations() {
    for (size, run) in [(0, 0), (0, 3), (3, 0), (3, 4)] {
        assert_eq!(Board::new(size, run).unwrap_err(), BoardError::InvalidConfiguration { size, run_length: run });
    }
    assert!(Board::new(1, 1).is_ok());
}

#[test]
fn new_board_is_empty() {
    let b = Board::new(4, 3).unwrap();
    assert_eq!(b.len(), 16);
    assert_eq!(b.size(), 4);
    assert_eq!(b.run_length(), 3);
    assert!(b.is_all_empty());
    assert!(!b.is_all_occupied());
    assert_eq!(b.empty_cells().count(), 16);
}

#[test]
fn set_only_fills_empty_in_range_cells() {
    let mut b = Board::new(3, 3).unwrap();
    assert!(b.set(4, 1));
    assert!(!b.set(4, 0), "occupied cell overwritten");
    assert_eq!(b.get(4), Some(1));
    assert!(!b.set(9, 0));
    assert_eq!(b.get(9), None);
    assert!(!b.is_empty(9));
    assert!(!b.is_empty(4));
    assert!(b.is_empty(0));
    assert_eq!(b.occupied_count(), 1);
    assert!(!b.is_all_empty());
}

#[test]
fn reset_clears_cells_and_keeps_lines() {
    let mut b = Board::new(3, 3).unwrap();
    let lines = b.shared_lines();
    for i in 0..9 { assert!(b.set(i, i % 2)); }
    assert!(b.is_all_occupied());
    b.reset();
    assert!(b.is_all_empty());
    assert!(Arc::ptr_eq(&lines, &b.shared_lines()));
}

#[test]
fn display_renders_rows() {
    let mut b = Board::new(3, 3).unwrap();
    b.set(0, 0);
    b.set(4, 1);
    b.set(8, 2);
    assert_eq!(b.to_string(), "X . .\n. O .\n. . A\n");
}
