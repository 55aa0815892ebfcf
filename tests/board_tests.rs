//! Board behavior through the public API: refill guarantees and the
//! clear/refill cycle.

use color_match::core::{Board, SimpleRng};
use color_match::types::{Color, DEFAULT_PIXELS, PLAYABLE};

#[test]
fn test_refill_leaves_no_empty_cells() {
    let mut board = Board::new(DEFAULT_PIXELS);
    let mut rng = SimpleRng::new(7);
    board.refill(&mut rng);

    assert!(board.cells().iter().all(|c| !c.is_empty()));
}

#[test]
fn test_refill_produces_only_playable_colors() {
    let mut board = Board::new(DEFAULT_PIXELS);
    let mut rng = SimpleRng::new(99);
    board.refill(&mut rng);

    for &cell in board.cells() {
        assert!(PLAYABLE.contains(&cell), "unexpected cell {cell:?}");
    }
}

#[test]
fn test_refill_is_deterministic_under_a_seed() {
    let mut a = Board::new(DEFAULT_PIXELS);
    let mut b = Board::new(DEFAULT_PIXELS);
    a.refill(&mut SimpleRng::new(12345));
    b.refill(&mut SimpleRng::new(12345));

    assert_eq!(a, b);
}

#[test]
fn test_full_board_of_one_color_matches_everything() {
    let board = Board::from_cells(&[Color::Red; 8]);
    let run = board.find_match(Color::Red).expect("whole-strip run");
    assert_eq!(run.start(), 0);
    assert_eq!(run.len(), 8);
}

#[test]
fn test_clear_then_refill_leaves_no_gaps() {
    let mut board = Board::from_cells(&[
        Color::Blue,
        Color::Red,
        Color::Red,
        Color::Red,
        Color::White,
        Color::Yellow,
    ]);
    let mut rng = SimpleRng::new(5);

    let run = board.find_match(Color::Red).unwrap();
    board.clear(&run);
    assert_eq!(board.cells().iter().filter(|c| c.is_empty()).count(), 3);

    board.refill(&mut rng);
    assert!(board.cells().iter().all(|c| !c.is_empty()));
    // Untouched cells keep their colors.
    assert_eq!(board.get(0), Some(Color::Blue));
    assert_eq!(board.get(4), Some(Color::White));
    assert_eq!(board.get(5), Some(Color::Yellow));
}
