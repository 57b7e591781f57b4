//! Top-level puzzle generation.
//!
//! The orchestrator runs a bounded number of randomized attempts. Each
//! attempt draws a spangram orientation, walks the starting border in a
//! shuffled order, and gives every start cell a fresh grid, a fresh
//! crossing set, and a freshly shuffled word order. The first trial that
//! places the spangram and covers every remaining cell wins; exhausting
//! the budget is an ordinary `None`, not an error.

use crate::carver::{Carver, Orientation};
use crate::coverage::fill_remaining;
use crate::crossings::CrossingSet;
use crate::grid::Grid;
use crate::puzzle::{PlacedWord, Puzzle};
use crate::rng::SimpleRng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Per-call input: the themed word material for one puzzle.
///
/// Field names match the batch driver's curriculum records, so a record
/// like `{"theme": ..., "clue": ..., "words": [...], "spangram": ...}`
/// deserializes directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub theme: String,
    pub clue: String,
    pub words: Vec<String>,
    pub spangram: String,
}

impl Theme {
    /// Convenience constructor for literal word lists.
    pub fn new(theme: &str, clue: &str, words: &[&str], spangram: &str) -> Self {
        Self {
            theme: theme.to_string(),
            clue: clue.to_string(),
            words: words.iter().map(|w| w.to_string()).collect(),
            spangram: spangram.to_string(),
        }
    }
}

/// Configuration for puzzle generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Grid height in cells.
    pub rows: usize,
    /// Grid width in cells.
    pub cols: usize,
    /// Maximum attempts before giving up.
    pub max_attempts: usize,
}

impl GeneratorConfig {
    /// The standard 8x6 board.
    pub fn classic() -> Self {
        Self {
            rows: 8,
            cols: 6,
            max_attempts: 50,
        }
    }

    /// A custom board with the standard attempt budget.
    pub fn with_dimensions(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            max_attempts: 50,
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::classic()
    }
}

/// Invalid input detected before any search begins.
///
/// Distinct from an ordinary failed search, which is `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Zero rows or zero columns.
    EmptyGrid { rows: usize, cols: usize },
    /// A word or spangram with no letters.
    EmptyWord,
    /// A word with characters outside A-Z.
    NonAlphabeticWord(String),
    /// A word with more letters than the grid has cells.
    WordTooLong { word: String, cells: usize },
    /// A spangram too short to reach the opposite border on either axis.
    SpangramTooShort { len: usize, min_span: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyGrid { rows, cols } => {
                write!(f, "grid dimensions must be positive, got {rows}x{cols}")
            }
            ConfigError::EmptyWord => write!(f, "words must have at least one letter"),
            ConfigError::NonAlphabeticWord(word) => {
                write!(f, "word {word:?} contains characters outside A-Z")
            }
            ConfigError::WordTooLong { word, cells } => {
                write!(f, "word {word:?} cannot fit a grid of {cells} cells")
            }
            ConfigError::SpangramTooShort { len, min_span } => {
                write!(
                    f,
                    "spangram of {len} letters cannot span the grid, needs at least {min_span}"
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Puzzle generator.
pub struct Generator {
    config: GeneratorConfig,
    rng: SimpleRng,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator {
    /// Create a generator for the classic board.
    pub fn new() -> Self {
        Self {
            config: GeneratorConfig::classic(),
            rng: SimpleRng::new(),
        }
    }

    /// Create a generator with custom configuration.
    pub fn with_config(config: GeneratorConfig) -> Self {
        Self {
            config,
            rng: SimpleRng::new(),
        }
    }

    /// Create a generator with a specific seed for reproducibility.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            config: GeneratorConfig::classic(),
            rng: SimpleRng::with_seed(seed),
        }
    }

    /// Replace the random source with a seeded one, for reproducible runs
    /// on any configuration.
    pub fn seeded(mut self, seed: u64) -> Self {
        self.rng = SimpleRng::with_seed(seed);
        self
    }

    /// Generate a puzzle for `theme`.
    ///
    /// Returns `Ok(Some(puzzle))` on success, `Ok(None)` when no
    /// arrangement was found within the attempt budget, and
    /// `Err(ConfigError)` for inputs that could never produce a puzzle.
    pub fn generate(&mut self, theme: &Theme) -> Result<Option<Puzzle>, ConfigError> {
        let (words, spangram) = self.validate(theme)?;

        for _ in 0..self.config.max_attempts {
            let orientation = if self.rng.next_bool() {
                Orientation::Vertical
            } else {
                Orientation::Horizontal
            };
            if let Some(puzzle) = self.try_orientation(theme, &words, &spangram, orientation) {
                return Ok(Some(puzzle));
            }
        }

        Ok(None)
    }

    /// One attempt: walk the shuffled starting border for `orientation`,
    /// giving each start cell a fresh search context.
    fn try_orientation(
        &mut self,
        theme: &Theme,
        words: &[String],
        spangram: &str,
        orientation: Orientation,
    ) -> Option<Puzzle> {
        let GeneratorConfig { rows, cols, .. } = self.config;

        let mut starts = orientation.start_cells(rows, cols);
        self.rng.shuffle(&mut starts);

        for start in starts {
            let mut order = words.to_vec();
            self.rng.shuffle(&mut order);

            let mut grid = Grid::new(rows, cols);
            let mut crossings = CrossingSet::new();
            let mut carver = Carver::new(&mut grid, &mut crossings, &mut self.rng);

            let span_path = match carver.carve_spanning(spangram, start, orientation) {
                Some(path) => path,
                None => continue,
            };
            let placed = match fill_remaining(&mut carver, &order) {
                Some(placed) => placed,
                None => continue,
            };

            return Some(Puzzle {
                grid: grid.snapshot(),
                theme_words: placed,
                spangram: PlacedWord {
                    text: spangram.to_string(),
                    path: span_path,
                },
                clue: theme.clue.clone(),
                theme: theme.theme.clone(),
            });
        }

        None
    }

    /// Reject inputs that could never produce a puzzle, and normalize the
    /// surviving words to uppercase.
    fn validate(&self, theme: &Theme) -> Result<(Vec<String>, String), ConfigError> {
        let GeneratorConfig { rows, cols, .. } = self.config;
        if rows == 0 || cols == 0 {
            return Err(ConfigError::EmptyGrid { rows, cols });
        }
        let cells = rows * cols;

        let spangram = normalize_word(&theme.spangram, cells)?;
        let min_span = rows.min(cols);
        if spangram.chars().count() < min_span {
            return Err(ConfigError::SpangramTooShort {
                len: spangram.chars().count(),
                min_span,
            });
        }

        let words = theme
            .words
            .iter()
            .map(|word| normalize_word(word, cells))
            .collect::<Result<Vec<_>, _>>()?;

        Ok((words, spangram))
    }
}

fn normalize_word(word: &str, cells: usize) -> Result<String, ConfigError> {
    if word.is_empty() {
        return Err(ConfigError::EmptyWord);
    }
    if !word.chars().all(|ch| ch.is_ascii_alphabetic()) {
        return Err(ConfigError::NonAlphabeticWord(word.to_string()));
    }
    if word.len() > cells {
        return Err(ConfigError::WordTooLong {
            word: word.to_string(),
            cells,
        });
    }
    Ok(word.to_ascii_uppercase())
}
