//! Engine for woven word-grid puzzles.
//!
//! A puzzle packs a themed word list onto a rectangular letter grid so
//! that every word traces a connected path of king-adjacent cells, every
//! cell belongs to exactly one word, no two paths cross diagonally, and
//! one spangram runs from one border of the grid to the opposite border.
//!
//! # Search
//!
//! Generation is a randomized backtracking search over a shared mutable
//! context (letter grid plus committed diagonal edges):
//!
//! 1. Draw a spangram orientation and walk the starting border in random
//!    order.
//! 2. Carve the spangram with a depth-first search that must end on the
//!    far border.
//! 3. Greedily cover the remaining cells word by word, each placed from
//!    the first unfilled cell in row-major order, skipping words that do
//!    not fit.
//! 4. On any failure, discard the whole context and retry with fresh
//!    randomization, up to the configured attempt budget.
//!
//! Whether a given word list can be packed at all is not guaranteed;
//! exhausting the budget is the ordinary `None` outcome. Each `Generator`
//! owns its search state outright, so independent generators can run in
//! parallel threads without synchronization.
//!
//! # Example
//!
//! ```
//! use wordweave_core::{Generator, Theme};
//!
//! let theme = Theme::new(
//!     "Animals",
//!     "Seen on safari",
//!     &[
//!         "LION", "TIGER", "BEAR", "ZEBRA", "SNAKE", "WOLF", "FOX", "DEER", "MONKEY",
//!         "PANDA",
//!     ],
//!     "ANIMALS",
//! );
//! let mut generator = Generator::with_seed(42);
//! match generator.generate(&theme)? {
//!     Some(puzzle) => print!("{puzzle}"),
//!     None => println!("no arrangement found within the attempt budget"),
//! }
//! # Ok::<(), wordweave_core::ConfigError>(())
//! ```

mod carver;
mod coverage;
mod crossings;
mod generator;
mod grid;
mod puzzle;
mod rng;

pub use generator::{ConfigError, Generator, GeneratorConfig, Theme};
pub use grid::Coord;
pub use puzzle::{PlacedWord, Puzzle};
