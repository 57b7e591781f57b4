//! Basic example of using the wordweave engine

use wordweave_core::{Coord, Generator, Theme};

fn main() {
    let theme = Theme::new(
        "Animals",
        "Seen on safari",
        &[
            "LION", "TIGER", "BEAR", "ZEBRA", "SNAKE", "WOLF", "FOX", "DEER", "MONKEY", "PANDA",
        ],
        "ANIMALS",
    );

    println!("Generating an 8x6 \"{}\" puzzle...\n", theme.theme);
    let mut generator = Generator::new();

    let puzzle = match generator.generate(&theme) {
        Ok(Some(puzzle)) => puzzle,
        Ok(None) => {
            println!("No arrangement found within the attempt budget.");
            println!("Re-run to try a fresh randomization.");
            return;
        }
        Err(err) => {
            println!("Invalid input: {err}");
            return;
        }
    };

    println!("Generated grid:");
    println!("{puzzle}");

    println!("Clue: {}", puzzle.clue);
    println!(
        "Spangram: {} ({} cells)",
        puzzle.spangram.text,
        puzzle.spangram.path.len()
    );
    println!("Theme words placed: {}", puzzle.theme_words.len());
    for word in &puzzle.theme_words {
        let cells: Vec<String> = word.path.iter().map(Coord::to_string).collect();
        println!("  {:8} {}", word.text, cells.join(" "));
    }

    // Paths match in either traversal direction, the way a player might
    // drag across the board.
    let mut reversed: Vec<Coord> = puzzle.spangram.path.clone();
    reversed.reverse();
    match puzzle.find_match(&reversed) {
        Some(word) => println!("\nReversed spangram trace matches: {}", word.text),
        None => println!("\nReversed spangram trace did not match (unexpected!)"),
    }
}
