//! Compile-time game parameters.

use crate::ship::ShipType;

/// Side length of the square board.
pub const BOARD_SIZE: u8 = 10;

/// Ships placed per game.
pub const NUM_SHIPS: usize = 5;

/// Fleet catalog, longest first. Placement processes it in this order so
/// the large ships go down while the board is still open.
pub const SHIPS: [ShipType; NUM_SHIPS] = [
    ShipType::new("Carrier", 5),
    ShipType::new("Battleship", 4),
    ShipType::new("Cruiser", 3),
    ShipType::new("Submarine", 3),
    ShipType::new("Destroyer", 2),
];

/// Ship cells on a board with the full catalog placed.
pub const TOTAL_SHIP_CELLS: usize = {
    let mut total = 0;
    let mut i = 0;
    while i < NUM_SHIPS {
        total += SHIPS[i].length();
        i += 1;
    }
    total
};

/// Attempt budget for randomly placing a single ship.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 100;
