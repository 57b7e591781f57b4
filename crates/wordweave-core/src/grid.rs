//! Board state for one generation attempt.
//!
//! Cells hold `Option<char>`; `None` is the empty sentinel, so "visited"
//! and "holds a letter" are the same fact and cannot drift apart.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A cell position, 0-indexed from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    /// Create a new coordinate.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Check king-adjacency: row and column each differ by at most 1,
    /// and the cells are distinct.
    pub fn is_king_adjacent(&self, other: &Coord) -> bool {
        if self == other {
            return false;
        }
        self.row.abs_diff(other.row) <= 1 && self.col.abs_diff(other.col) <= 1
    }

    /// Check whether the step to `other` is diagonal (both axes move).
    pub fn is_diagonal_step(&self, other: &Coord) -> bool {
        self.row.abs_diff(other.row) == 1 && self.col.abs_diff(other.col) == 1
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

// King-move deltas, row-major order.
const DELTAS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Mutable letter matrix for one attempt.
#[derive(Debug, Clone)]
pub(crate) struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Option<char>>,
    filled: usize,
}

impl Grid {
    /// Create an empty grid. Dimensions must be validated by the caller.
    pub(crate) fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![None; rows * cols],
            filled: 0,
        }
    }

    pub(crate) fn rows(&self) -> usize {
        self.rows
    }

    pub(crate) fn cols(&self) -> usize {
        self.cols
    }

    pub(crate) fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    fn index(&self, at: Coord) -> usize {
        at.row * self.cols + at.col
    }

    pub(crate) fn get(&self, at: Coord) -> Option<char> {
        self.cells[self.index(at)]
    }

    pub(crate) fn is_filled(&self, at: Coord) -> bool {
        self.get(at).is_some()
    }

    /// Write a letter into an empty cell.
    pub(crate) fn set(&mut self, at: Coord, letter: char) {
        let idx = self.index(at);
        debug_assert!(self.cells[idx].is_none(), "cell {at} written twice");
        self.cells[idx] = Some(letter);
        self.filled += 1;
    }

    /// Erase a letter, returning the cell to the empty state.
    pub(crate) fn clear(&mut self, at: Coord) {
        let idx = self.index(at);
        debug_assert!(self.cells[idx].is_some(), "cell {at} cleared twice");
        self.cells[idx] = None;
        self.filled -= 1;
    }

    pub(crate) fn is_full(&self) -> bool {
        self.filled == self.cell_count()
    }

    /// The canonical anchor: first unfilled cell in row-major order.
    pub(crate) fn first_unfilled(&self) -> Option<Coord> {
        self.cells
            .iter()
            .position(Option::is_none)
            .map(|idx| Coord::new(idx / self.cols, idx % self.cols))
    }

    /// All in-bounds king neighbors of `at`.
    pub(crate) fn neighbors(&self, at: Coord) -> Vec<Coord> {
        let mut result = Vec::with_capacity(8);
        for (dr, dc) in DELTAS {
            let nr = at.row as isize + dr;
            let nc = at.col as isize + dc;
            if nr >= 0 && nr < self.rows as isize && nc >= 0 && nc < self.cols as isize {
                result.push(Coord::new(nr as usize, nc as usize));
            }
        }
        result
    }

    /// Freeze the board into the output matrix. Caller ensures fullness.
    pub(crate) fn snapshot(&self) -> Vec<Vec<char>> {
        (0..self.rows)
            .map(|r| {
                (0..self.cols)
                    .map(|c| self.get(Coord::new(r, c)).unwrap_or(' '))
                    .collect()
            })
            .collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            for c in 0..self.cols {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.get(Coord::new(r, c)).unwrap_or('.'))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_king_adjacency() {
        let center = Coord::new(2, 2);
        assert!(center.is_king_adjacent(&Coord::new(1, 1)));
        assert!(center.is_king_adjacent(&Coord::new(2, 3)));
        assert!(center.is_king_adjacent(&Coord::new(3, 2)));
        assert!(!center.is_king_adjacent(&center));
        assert!(!center.is_king_adjacent(&Coord::new(0, 2)));
        assert!(!center.is_king_adjacent(&Coord::new(2, 4)));
    }

    #[test]
    fn test_diagonal_step() {
        let at = Coord::new(1, 1);
        assert!(at.is_diagonal_step(&Coord::new(0, 0)));
        assert!(at.is_diagonal_step(&Coord::new(2, 0)));
        assert!(!at.is_diagonal_step(&Coord::new(1, 2)));
        assert!(!at.is_diagonal_step(&Coord::new(0, 1)));
    }

    #[test]
    fn test_neighbor_counts() {
        let grid = Grid::new(3, 3);
        assert_eq!(grid.neighbors(Coord::new(1, 1)).len(), 8);
        assert_eq!(grid.neighbors(Coord::new(0, 0)).len(), 3);
        assert_eq!(grid.neighbors(Coord::new(0, 1)).len(), 5);
        assert_eq!(grid.neighbors(Coord::new(2, 2)).len(), 3);
    }

    #[test]
    fn test_set_clear_and_fullness() {
        let mut grid = Grid::new(2, 2);
        assert!(!grid.is_full());

        grid.set(Coord::new(0, 0), 'A');
        assert!(grid.is_filled(Coord::new(0, 0)));
        assert_eq!(grid.get(Coord::new(0, 0)), Some('A'));

        grid.set(Coord::new(0, 1), 'B');
        grid.set(Coord::new(1, 0), 'C');
        grid.set(Coord::new(1, 1), 'D');
        assert!(grid.is_full());

        grid.clear(Coord::new(1, 1));
        assert!(!grid.is_full());
        assert_eq!(grid.get(Coord::new(1, 1)), None);
    }

    #[test]
    fn test_first_unfilled_is_row_major() {
        let mut grid = Grid::new(2, 3);
        assert_eq!(grid.first_unfilled(), Some(Coord::new(0, 0)));

        grid.set(Coord::new(0, 0), 'A');
        grid.set(Coord::new(0, 1), 'B');
        assert_eq!(grid.first_unfilled(), Some(Coord::new(0, 2)));

        grid.set(Coord::new(0, 2), 'C');
        assert_eq!(grid.first_unfilled(), Some(Coord::new(1, 0)));

        grid.set(Coord::new(1, 0), 'D');
        grid.set(Coord::new(1, 1), 'E');
        grid.set(Coord::new(1, 2), 'F');
        assert_eq!(grid.first_unfilled(), None);
    }

    #[test]
    fn test_snapshot_layout() {
        let mut grid = Grid::new(2, 2);
        grid.set(Coord::new(0, 0), 'A');
        grid.set(Coord::new(0, 1), 'B');
        grid.set(Coord::new(1, 0), 'C');
        grid.set(Coord::new(1, 1), 'D');
        assert_eq!(grid.snapshot(), vec![vec!['A', 'B'], vec!['C', 'D']]);
    }

    #[test]
    fn test_display_marks_empty_cells() {
        let mut grid = Grid::new(1, 3);
        grid.set(Coord::new(0, 1), 'X');
        assert_eq!(grid.to_string(), ". X .\n");
    }
}
