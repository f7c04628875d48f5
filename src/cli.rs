#![cfg(feature = "std")]
//! Terminal front end helpers: board rendering, guess parsing, prompts.
//!
//! Everything human-facing is 1-based; conversion to the core's zero-based
//! coordinates happens in `parse_guess` and nowhere else. Malformed input
//! is retried here and never reaches the board model.

use std::io::{self, Write};

use crate::board::{Board, CellView};
use crate::config::{BOARD_SIZE, SHIPS};
use crate::game::SessionStats;

const WATER: char = '~';
const HIT: char = 'X';
const MISS: char = 'O';
const SHIP: char = 'S';

/// Parse a 1-based "row col" guess into zero-based coordinates.
///
/// Exactly two whitespace-separated integers, each in `1..=BOARD_SIZE`;
/// anything else is rejected.
pub fn parse_guess(input: &str) -> Option<(usize, usize)> {
    let mut parts = input.split_whitespace();
    let row: usize = parts.next()?.parse().ok()?;
    let col: usize = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    let size = BOARD_SIZE as usize;
    if !(1..=size).contains(&row) || !(1..=size).contains(&col) {
        return None;
    }
    Some((row - 1, col - 1))
}

/// Prompt until the player enters a valid in-range guess.
pub fn prompt_guess() -> (usize, usize) {
    loop {
        print!("\nEnter your guess (row col, 1-{}): ", BOARD_SIZE);
        io::stdout().flush().unwrap();
        let mut line = String::new();
        io::stdin().read_line(&mut line).unwrap();
        match parse_guess(line.trim()) {
            Some(coord) => return coord,
            None => println!(
                "Please enter two numbers between 1 and {}.",
                BOARD_SIZE
            ),
        }
    }
}

/// Print the board with 1-based coordinate labels. With `reveal`, unhit
/// ship cells show as ships instead of water.
pub fn print_board(board: &Board, reveal: bool) {
    let size = BOARD_SIZE as usize;
    print!("   ");
    for c in 0..size {
        print!(" {:>2}", c + 1);
    }
    println!();
    let view = board.render_view();
    for r in 0..size {
        print!("{:2} ", r + 1);
        for c in 0..size {
            let ch = match view[r][c] {
                CellView::Hit => HIT,
                CellView::Miss => MISS,
                CellView::Water => {
                    if reveal && board.ship_map().get(r, c).unwrap_or(false) {
                        SHIP
                    } else {
                        WATER
                    }
                }
            };
            print!(" {:>2}", ch);
        }
        println!();
    }
}

/// Game statistics block; accuracy shows once any turn is taken.
pub fn print_stats(stats: &SessionStats) {
    println!("\n--- Game Stats ---");
    println!("Turns: {}", stats.turns);
    println!("Hits: {}", stats.hits);
    println!("Misses: {}", stats.misses);
    if stats.turns > 0 {
        let accuracy = stats.hits as f64 / stats.turns as f64 * 100.0;
        println!("Accuracy: {:.1}%", accuracy);
    }
}

/// List the fleet catalog for the rules screen.
pub fn print_fleet_catalog() {
    for ship in SHIPS.iter() {
        println!("  - {} (length {})", ship.name(), ship.length());
    }
}

/// Ask for another game; anything but y/n re-asks.
pub fn prompt_play_again() -> bool {
    loop {
        print!("\nWould you like to play again? (y/n): ");
        io::stdout().flush().unwrap();
        let mut line = String::new();
        io::stdin().read_line(&mut line).unwrap();
        match line.trim().to_ascii_lowercase().as_str() {
            "y" => return true,
            "n" => return false,
            _ => println!("Please answer y or n."),
        }
    }
}

/// Clear the terminal between turns.
pub fn clear_screen() {
    print!("\x1b[2J\x1b[1;1H");
    io::stdout().flush().unwrap();
}

/// Block until the player presses Enter.
pub fn pause(message: &str) {
    print!("{}", message);
    io::stdout().flush().unwrap();
    let mut line = String::new();
    io::stdin().read_line(&mut line).unwrap();
}
