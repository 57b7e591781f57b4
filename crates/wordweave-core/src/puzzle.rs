//! Finished puzzle records.
//!
//! A `Puzzle` is immutable once assembled: the frozen grid, each placed
//! word with its path, and the spangram. Consumers match player-drawn cell
//! sequences against paths in either traversal direction, and batch tooling
//! deduplicates by grid equality; both capabilities live here.

use crate::grid::Coord;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A word committed to the grid along a concrete path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedWord {
    pub text: String,
    pub path: Vec<Coord>,
}

impl PlacedWord {
    /// Compare a drawn cell sequence against this word's path. A path and
    /// its reverse are the same word.
    pub fn matches_path(&self, cells: &[Coord]) -> bool {
        if cells.len() != self.path.len() {
            return false;
        }
        let forward = self.path.iter().eq(cells.iter());
        let backward = self.path.iter().rev().eq(cells.iter());
        forward || backward
    }
}

/// A fully generated puzzle. Every cell belongs to exactly one path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    /// Letter matrix, `rows x cols`, no empty cells.
    pub grid: Vec<Vec<char>>,
    /// Theme words in placement order.
    #[serde(rename = "themeWords")]
    pub theme_words: Vec<PlacedWord>,
    /// The border-to-border word.
    pub spangram: PlacedWord,
    pub clue: String,
    pub theme: String,
}

impl Puzzle {
    pub fn rows(&self) -> usize {
        self.grid.len()
    }

    pub fn cols(&self) -> usize {
        self.grid.first().map_or(0, Vec::len)
    }

    /// The letter at a cell of the frozen grid.
    pub fn letter_at(&self, at: Coord) -> Option<char> {
        self.grid.get(at.row)?.get(at.col).copied()
    }

    /// Find the placed word (theme word or spangram) whose path matches a
    /// drawn cell sequence in either direction.
    pub fn find_match(&self, cells: &[Coord]) -> Option<&PlacedWord> {
        self.theme_words
            .iter()
            .chain(std::iter::once(&self.spangram))
            .find(|word| word.matches_path(cells))
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.grid {
            for (c, letter) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{letter}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
