//! Coverage pass: pack theme words until every cell is filled.
//!
//! Words are consumed in the caller's (shuffled) order. Each word gets one
//! shot from the canonical anchor cell; a word that does not fit there is
//! skipped for the rest of the pass. Anchoring at the row-major frontier
//! keeps placements contiguous instead of leaving gaps behind.

use crate::carver::Carver;
use crate::puzzle::PlacedWord;

/// Place words from `words` until the grid is full or the list runs out.
///
/// Returns the placed words on full coverage, `None` otherwise. A failed
/// pass leaves its placements in the grid; the caller owns the attempt
/// state and discards it wholesale rather than unwinding word by word.
pub(crate) fn fill_remaining(carver: &mut Carver<'_>, words: &[String]) -> Option<Vec<PlacedWord>> {
    let mut placed = Vec::new();

    for word in words {
        let anchor = match carver.grid.first_unfilled() {
            Some(anchor) => anchor,
            None => break,
        };
        if let Some(path) = carver.carve(word, anchor) {
            placed.push(PlacedWord {
                text: word.clone(),
                path,
            });
        }
        // No fit from the anchor: skip this word, try the next.
    }

    if carver.grid.is_full() {
        Some(placed)
    } else {
        None
    }
}
