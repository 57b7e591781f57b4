//! Path carving: depth-first search that threads one word through the grid.
//!
//! Each step is an explicit transaction against the shared search state
//! (letter into the grid, diagonal edge into the crossing set) with an
//! exact inverse, so a failed branch always restores the state it found.

use crate::crossings::CrossingSet;
use crate::grid::{Coord, Grid};
use crate::rng::SimpleRng;

/// Axis along which a spangram crosses the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Orientation {
    /// Row 0 down to row `rows - 1`.
    Vertical,
    /// Column 0 across to column `cols - 1`.
    Horizontal,
}

impl Orientation {
    /// Every cell on the starting border for this orientation.
    pub(crate) fn start_cells(&self, rows: usize, cols: usize) -> Vec<Coord> {
        match self {
            Orientation::Vertical => (0..cols).map(|c| Coord::new(0, c)).collect(),
            Orientation::Horizontal => (0..rows).map(|r| Coord::new(r, 0)).collect(),
        }
    }

    fn reaches_far_border(&self, grid: &Grid, at: Coord) -> bool {
        match self {
            Orientation::Vertical => at.row == grid.rows() - 1,
            Orientation::Horizontal => at.col == grid.cols() - 1,
        }
    }
}

/// Acceptance test applied once a path reaches the word's full length.
#[derive(Clone, Copy)]
enum Finish {
    /// Any cell ends the word.
    Anywhere,
    /// The last cell must sit on the border opposite the start.
    FarBorder(Orientation),
}

impl Finish {
    fn accepts(&self, grid: &Grid, last: Coord) -> bool {
        match self {
            Finish::Anywhere => true,
            Finish::FarBorder(orientation) => orientation.reaches_far_border(grid, last),
        }
    }
}

/// One word's search over the shared attempt state.
pub(crate) struct Carver<'a> {
    pub(crate) grid: &'a mut Grid,
    pub(crate) crossings: &'a mut CrossingSet,
    pub(crate) rng: &'a mut SimpleRng,
}

impl<'a> Carver<'a> {
    pub(crate) fn new(
        grid: &'a mut Grid,
        crossings: &'a mut CrossingSet,
        rng: &'a mut SimpleRng,
    ) -> Self {
        Self {
            grid,
            crossings,
            rng,
        }
    }

    /// Carve `word` starting at `start`, accepting any full-length path.
    /// On success the letters stay committed and the path is returned; on
    /// failure the grid and crossing set are exactly as before the call.
    pub(crate) fn carve(&mut self, word: &str, start: Coord) -> Option<Vec<Coord>> {
        self.run(word, start, Finish::Anywhere)
    }

    /// Carve a spangram: full length, ending on the far border.
    pub(crate) fn carve_spanning(
        &mut self,
        word: &str,
        start: Coord,
        orientation: Orientation,
    ) -> Option<Vec<Coord>> {
        self.run(word, start, Finish::FarBorder(orientation))
    }

    fn run(&mut self, word: &str, start: Coord, finish: Finish) -> Option<Vec<Coord>> {
        let letters: Vec<char> = word.chars().collect();
        debug_assert!(!letters.is_empty(), "carving an empty word");
        let mut path = Vec::with_capacity(letters.len());
        if self.extend(&letters, start, None, &mut path, finish) {
            Some(path)
        } else {
            None
        }
    }

    fn extend(
        &mut self,
        letters: &[char],
        at: Coord,
        prev: Option<Coord>,
        path: &mut Vec<Coord>,
        finish: Finish,
    ) -> bool {
        self.begin_step(prev, at, letters[path.len()]);
        path.push(at);

        if path.len() == letters.len() {
            if finish.accepts(self.grid, at) {
                return true;
            }
        } else {
            let mut candidates = self.open_neighbors(at);
            self.rng.shuffle(&mut candidates);
            for next in candidates {
                if self.extend(letters, next, Some(at), path, finish) {
                    return true;
                }
            }
        }

        path.pop();
        self.undo_step(prev, at);
        false
    }

    fn begin_step(&mut self, prev: Option<Coord>, at: Coord, letter: char) {
        self.grid.set(at, letter);
        if let Some(prev) = prev {
            self.crossings.commit(prev, at);
        }
    }

    fn undo_step(&mut self, prev: Option<Coord>, at: Coord) {
        if let Some(prev) = prev {
            self.crossings.rollback(prev, at);
        }
        self.grid.clear(at);
    }

    /// Neighbors of `at` that are unfilled and whose step would not cross
    /// a committed diagonal.
    fn open_neighbors(&self, at: Coord) -> Vec<Coord> {
        self.grid
            .neighbors(at)
            .into_iter()
            .filter(|n| !self.grid.is_filled(*n) && !self.crossings.would_cross(at, *n))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> (Grid, CrossingSet, SimpleRng) {
        (Grid::new(2, 2), CrossingSet::new(), SimpleRng::with_seed(11))
    }

    fn read_path(grid: &Grid, path: &[Coord]) -> String {
        path.iter().map(|&c| grid.get(c).unwrap()).collect()
    }

    #[test]
    fn test_single_letter_word_is_one_cell() {
        let (mut grid, mut crossings, mut rng) = context();
        let mut carver = Carver::new(&mut grid, &mut crossings, &mut rng);

        let path = carver.carve("A", Coord::new(1, 0)).unwrap();
        assert_eq!(path, vec![Coord::new(1, 0)]);
        assert!(crossings.is_empty());
        assert_eq!(grid.get(Coord::new(1, 0)), Some('A'));
    }

    #[test]
    fn test_carve_writes_letters_along_path() {
        let mut grid = Grid::new(1, 3);
        let mut crossings = CrossingSet::new();
        let mut rng = SimpleRng::with_seed(5);
        let mut carver = Carver::new(&mut grid, &mut crossings, &mut rng);

        // One row: the only possible path is left to right.
        let path = carver.carve("CAT", Coord::new(0, 0)).unwrap();
        assert_eq!(
            path,
            vec![Coord::new(0, 0), Coord::new(0, 1), Coord::new(0, 2)]
        );
        assert_eq!(read_path(&grid, &path), "CAT");
    }

    #[test]
    fn test_failed_carve_restores_state() {
        let mut grid = Grid::new(1, 2);
        let mut crossings = CrossingSet::new();
        let mut rng = SimpleRng::with_seed(5);
        let mut carver = Carver::new(&mut grid, &mut crossings, &mut rng);

        // Three letters cannot fit in two cells.
        assert!(carver.carve("ABC", Coord::new(0, 0)).is_none());
        assert_eq!(grid.get(Coord::new(0, 0)), None);
        assert_eq!(grid.get(Coord::new(0, 1)), None);
        assert!(crossings.is_empty());
    }

    #[test]
    fn test_carve_avoids_filled_cells() {
        let mut grid = Grid::new(1, 3);
        let mut crossings = CrossingSet::new();
        let mut rng = SimpleRng::with_seed(5);
        grid.set(Coord::new(0, 1), 'X');
        let mut carver = Carver::new(&mut grid, &mut crossings, &mut rng);

        // The only neighbor of the start cell is taken.
        assert!(carver.carve("AB", Coord::new(0, 0)).is_none());
        assert_eq!(grid.get(Coord::new(0, 0)), None);
        assert_eq!(grid.get(Coord::new(0, 1)), Some('X'));
    }

    #[test]
    fn test_carve_refuses_crossing_step() {
        let (mut grid, mut crossings, mut rng) = context();
        grid.set(Coord::new(0, 0), 'X');
        grid.set(Coord::new(1, 1), 'Y');
        crossings.commit(Coord::new(0, 0), Coord::new(1, 1));

        let mut carver = Carver::new(&mut grid, &mut crossings, &mut rng);
        // The only open continuation from (0,1) is the diagonal to (1,0),
        // which would cross the committed X-Y edge.
        assert!(carver.carve("AB", Coord::new(0, 1)).is_none());
    }

    #[test]
    fn test_carve_takes_free_diagonal() {
        let (mut grid, mut crossings, mut rng) = context();
        grid.set(Coord::new(0, 0), 'X');
        grid.set(Coord::new(1, 1), 'Y');

        // Same layout, but no committed edge between the filled cells.
        let mut carver = Carver::new(&mut grid, &mut crossings, &mut rng);
        let path = carver.carve("AB", Coord::new(0, 1)).unwrap();
        assert_eq!(path, vec![Coord::new(0, 1), Coord::new(1, 0)]);
        assert_eq!(read_path(&grid, &path), "AB");
    }

    #[test]
    fn test_spanning_carve_ends_on_far_border() {
        let (mut grid, mut crossings, mut rng) = context();
        let mut carver = Carver::new(&mut grid, &mut crossings, &mut rng);

        let path = carver
            .carve_spanning("AB", Coord::new(0, 0), Orientation::Vertical)
            .unwrap();
        assert_eq!(path.len(), 2);
        assert_eq!(path[0].row, 0);
        assert_eq!(path[1].row, 1);
    }

    #[test]
    fn test_spanning_carve_rejects_short_reach() {
        let mut grid = Grid::new(3, 1);
        let mut crossings = CrossingSet::new();
        let mut rng = SimpleRng::with_seed(5);
        let mut carver = Carver::new(&mut grid, &mut crossings, &mut rng);

        // Two letters cannot reach row 2 from row 0.
        assert!(carver
            .carve_spanning("AB", Coord::new(0, 0), Orientation::Vertical)
            .is_none());
        assert_eq!(grid.first_unfilled(), Some(Coord::new(0, 0)));
    }

    #[test]
    fn test_horizontal_spanning_carve() {
        let mut grid = Grid::new(2, 3);
        let mut crossings = CrossingSet::new();
        let mut rng = SimpleRng::with_seed(17);
        let mut carver = Carver::new(&mut grid, &mut crossings, &mut rng);

        let path = carver
            .carve_spanning("ABC", Coord::new(1, 0), Orientation::Horizontal)
            .unwrap();
        assert_eq!(path[0].col, 0);
        assert_eq!(path.last().unwrap().col, 2);
        assert_eq!(read_path(&grid, &path), "ABC");
    }

    #[test]
    fn test_start_cells_cover_the_border() {
        assert_eq!(
            Orientation::Vertical.start_cells(3, 2),
            vec![Coord::new(0, 0), Coord::new(0, 1)]
        );
        assert_eq!(
            Orientation::Horizontal.start_cells(3, 2),
            vec![Coord::new(0, 0), Coord::new(1, 0), Coord::new(2, 0)]
        );
    }
}
