//! Board module - the strip of colored cells and the match/refill rules
//!
//! The board mirrors the LED strip one-to-one: index 0 is the leftmost
//! pixel. Cells are stored inline (no heap) up to `MAX_PIXELS`.

use arrayvec::ArrayVec;

use crate::core::rng::SimpleRng;
use crate::types::{Color, MATCH_MIN_RUN, MAX_PIXELS, PLAYABLE};

/// A contiguous run of same-colored cells, as found by the match scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchRun {
    start: usize,
    len: usize,
}

impl MatchRun {
    /// First board index of the run
    pub fn start(&self) -> usize {
        self.start
    }

    /// Number of cells in the run
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Board indices covered by the run, in order
    pub fn indices(&self) -> impl Iterator<Item = usize> {
        self.start..self.start + self.len
    }
}

/// The game board: a fixed-length strip of cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: ArrayVec<Color, MAX_PIXELS>,
}

impl Board {
    /// Create a board of `len` cells, all empty.
    ///
    /// `len` must be in `1..=MAX_PIXELS`; anything else is a wiring error
    /// caught here rather than mid-game.
    pub fn new(len: usize) -> Self {
        assert!(
            (1..=MAX_PIXELS).contains(&len),
            "board length {len} outside 1..={MAX_PIXELS}"
        );
        let mut cells = ArrayVec::new();
        for _ in 0..len {
            cells.push(Color::Empty);
        }
        Self { cells }
    }

    /// Build a board from explicit cells. Primarily a test constructor.
    pub fn from_cells(cells: &[Color]) -> Self {
        let mut board = Self::new(cells.len());
        board.cells.clear();
        board.cells.extend(cells.iter().copied());
        board
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cell at `index`, or `None` out of bounds
    pub fn get(&self, index: usize) -> Option<Color> {
        self.cells.get(index).copied()
    }

    /// All cells in strip order
    pub fn cells(&self) -> &[Color] {
        &self.cells
    }

    /// Clear every cell back to empty
    pub fn reset(&mut self) {
        for cell in &mut self.cells {
            *cell = Color::Empty;
        }
    }

    /// Replace every empty cell with a random playable color.
    ///
    /// After this call no cell is empty. The caller is responsible for
    /// flushing the strip afterward.
    pub fn refill(&mut self, rng: &mut SimpleRng) {
        for cell in &mut self.cells {
            if cell.is_empty() {
                *cell = rng.choose(&PLAYABLE);
            }
        }
    }

    /// Scan for a run of `color` at least `MATCH_MIN_RUN` cells long.
    ///
    /// Only the most recent run survives the scan: a later run of `color`
    /// replaces an earlier one even when the earlier one was longer, and a
    /// trailing single cell of `color` forfeits the match entirely. Empty
    /// never matches.
    pub fn find_match(&self, color: Color) -> Option<MatchRun> {
        if color.is_empty() {
            return None;
        }

        let mut start = 0;
        let mut len = 0;
        let mut in_run = false;
        for (i, &cell) in self.cells.iter().enumerate() {
            if cell == color {
                if in_run {
                    len += 1;
                } else {
                    in_run = true;
                    start = i;
                    len = 1;
                }
            } else {
                in_run = false;
            }
        }

        if len >= MATCH_MIN_RUN {
            Some(MatchRun { start, len })
        } else {
            None
        }
    }

    /// Set every cell of `run` back to empty. Does not refill.
    pub fn clear(&mut self, run: &MatchRun) {
        for i in run.indices() {
            if let Some(cell) = self.cells.get_mut(i) {
                *cell = Color::Empty;
            }
        }
    }

    #[cfg(test)]
    pub fn set(&mut self, index: usize, color: Color) {
        self.cells[index] = color;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_all_empty() {
        let board = Board::new(16);
        assert_eq!(board.len(), 16);
        assert!(board.cells().iter().all(|c| c.is_empty()));
    }

    #[test]
    fn test_from_cells_preserves_order() {
        let board = Board::from_cells(&[Color::Red, Color::Blue, Color::Red]);
        assert_eq!(board.get(0), Some(Color::Red));
        assert_eq!(board.get(1), Some(Color::Blue));
        assert_eq!(board.get(2), Some(Color::Red));
        assert_eq!(board.get(3), None);
    }

    #[test]
    fn test_refill_touches_only_empty_cells() {
        let mut board = Board::from_cells(&[Color::Red, Color::Empty, Color::Blue, Color::Empty]);
        let mut rng = SimpleRng::new(42);
        board.refill(&mut rng);

        assert_eq!(board.get(0), Some(Color::Red));
        assert_eq!(board.get(2), Some(Color::Blue));
        assert!(board.cells().iter().all(|c| !c.is_empty()));
    }

    #[test]
    fn test_match_run_indices() {
        let run = MatchRun { start: 3, len: 2 };
        assert_eq!(run.indices().collect::<Vec<_>>(), vec![3, 4]);
        assert_eq!(run.len(), 2);
        assert!(!run.is_empty());
    }

    #[test]
    fn test_single_run_is_found() {
        let board = Board::from_cells(&[
            Color::Blue,
            Color::Red,
            Color::Red,
            Color::Red,
            Color::White,
        ]);
        let run = board.find_match(Color::Red).expect("run of 3");
        assert_eq!(run.start(), 1);
        assert_eq!(run.len(), 3);
    }

    #[test]
    fn test_lone_cell_is_no_match() {
        let board = Board::from_cells(&[Color::Blue, Color::Red, Color::Blue]);
        assert_eq!(board.find_match(Color::Red), None);
    }

    #[test]
    fn test_last_qualifying_run_wins() {
        // Runs at [0..1] and [5..7]; the later one is reported even though
        // both qualify.
        let board = Board::from_cells(&[
            Color::Red,
            Color::Red,
            Color::Blue,
            Color::White,
            Color::Yellow,
            Color::Red,
            Color::Red,
            Color::Red,
            Color::Blue,
        ]);
        let run = board.find_match(Color::Red).expect("later run");
        assert_eq!(run.start(), 5);
        assert_eq!(run.len(), 3);
    }

    #[test]
    fn test_trailing_single_forfeits_earlier_run() {
        // The lone trailing RED displaces the qualifying run at the front.
        let board = Board::from_cells(&[Color::Red, Color::Red, Color::Blue, Color::Red]);
        assert_eq!(board.find_match(Color::Red), None);
    }

    #[test]
    fn test_longer_earlier_run_lost_to_later_pair() {
        let board = Board::from_cells(&[
            Color::Red,
            Color::Red,
            Color::Red,
            Color::Blue,
            Color::Red,
            Color::Red,
        ]);
        let run = board.find_match(Color::Red).expect("later pair");
        assert_eq!(run.start(), 4);
        assert_eq!(run.len(), 2);
    }

    #[test]
    fn test_empty_never_matches() {
        let board = Board::from_cells(&[Color::Empty, Color::Empty, Color::Red]);
        assert_eq!(board.find_match(Color::Empty), None);
    }

    #[test]
    fn test_clear_empties_only_the_run() {
        let mut board = Board::from_cells(&[Color::Red, Color::Red, Color::Blue, Color::Yellow]);
        let run = board.find_match(Color::Red).unwrap();
        board.clear(&run);

        assert_eq!(board.get(0), Some(Color::Empty));
        assert_eq!(board.get(1), Some(Color::Empty));
        assert_eq!(board.get(2), Some(Color::Blue));
        assert_eq!(board.get(3), Some(Color::Yellow));
    }

    #[test]
    #[should_panic(expected = "board length")]
    fn test_zero_length_board_is_rejected() {
        let _ = Board::new(0);
    }

    #[test]
    #[should_panic(expected = "board length")]
    fn test_oversized_board_is_rejected() {
        let _ = Board::new(MAX_PIXELS + 1);
    }
}
