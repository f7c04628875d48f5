//! Board state: ship occupancy, accumulated hits and misses, fleet
//! placement, and the guess state machine.

use core::fmt;

use rand::Rng;

use crate::bitboard::BitBoard;
use crate::common::{BoardError, GuessResult};
use crate::config::{BOARD_SIZE, MAX_PLACEMENT_ATTEMPTS, NUM_SHIPS, SHIPS};
use crate::ship::{run_mask, Orientation, ShipType};

type BB = BitBoard<u128, { BOARD_SIZE as usize }>;

/// What a cell looks like to the guesser. Unhit ship cells are
/// indistinguishable from open water.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellView {
    Water,
    Hit,
    Miss,
}

/// Outcome of placing the full catalog on a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FleetReport {
    /// Ship cells actually on the board after placement. Callers derive the
    /// win threshold from this, not from the static catalog total.
    pub placed_cells: usize,
    /// Names of catalog ships that failed to place, in catalog order.
    pub unplaced: [Option<&'static str>; NUM_SHIPS],
}

impl FleetReport {
    /// True when every catalog ship was placed.
    pub fn is_complete(&self) -> bool {
        self.unplaced.iter().all(|name| name.is_none())
    }
}

/// A player's sea area: ship occupancy plus accumulated hits and misses.
///
/// Each cell is conceptually empty, ship, hit or missed; the three masks
/// encode that. A cell only ever transitions ship -> hit or empty -> missed,
/// and never changes again afterwards.
pub struct Board {
    ship_map: BB,
    hits: BB,
    misses: BB,
}

impl Board {
    /// Empty board, every cell water.
    pub fn new() -> Self {
        let empty = BB::new();
        Board {
            ship_map: empty,
            hits: empty,
            misses: empty,
        }
    }

    /// Occupancy mask of all placed ships.
    pub fn ship_map(&self) -> BB {
        self.ship_map
    }

    /// Mask of guessed cells that struck a ship.
    pub fn hits(&self) -> BB {
        self.hits
    }

    /// Mask of guessed cells that landed on water.
    pub fn misses(&self) -> BB {
        self.misses
    }

    /// True when the run of `length` cells from (`row`, `col`) along
    /// `orientation` stays on the board and touches no placed ship.
    ///
    /// This is the sole collision check; callers confirm it before every
    /// `place_ship`.
    pub fn is_valid_placement(
        &self,
        row: usize,
        col: usize,
        length: usize,
        orientation: Orientation,
    ) -> bool {
        match run_mask::<u128, { BOARD_SIZE as usize }>(row, col, length, orientation) {
            Ok(mask) => (self.ship_map & mask).is_empty(),
            Err(_) => false,
        }
    }

    /// Mark the run as ship cells. No validation happens here; the caller
    /// must have confirmed `is_valid_placement` for this exact run.
    pub fn place_ship(&mut self, row: usize, col: usize, length: usize, orientation: Orientation) {
        debug_assert!(self.is_valid_placement(row, col, length, orientation));
        if let Ok(mask) = run_mask(row, col, length, orientation) {
            self.ship_map = self.ship_map | mask;
        }
    }

    /// Pick a random valid placement for `ship` by rejection sampling.
    ///
    /// Orientation is an even coin flip; the origin is uniform over the
    /// positions whose run fits the board for that orientation, so attempts
    /// are only ever rejected for overlap.
    pub fn random_placement<R: Rng>(
        &self,
        rng: &mut R,
        ship: ShipType,
    ) -> Result<(usize, usize, Orientation), BoardError> {
        const N: usize = BOARD_SIZE as usize;
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let (max_r, max_c) = match orientation {
                Orientation::Horizontal => (N - 1, N - ship.length()),
                Orientation::Vertical => (N - ship.length(), N - 1),
            };
            let row = rng.random_range(0..=max_r);
            let col = rng.random_range(0..=max_c);
            if self.is_valid_placement(row, col, ship.length(), orientation) {
                return Ok((row, col, orientation));
            }
        }
        Err(BoardError::UnableToPlaceShip)
    }

    /// Place the whole catalog in catalog order.
    ///
    /// A ship that exhausts its attempt budget is skipped with a warning and
    /// listed in the report; the report's cell total reflects what actually
    /// landed on the board.
    pub fn place_fleet<R: Rng>(&mut self, rng: &mut R) -> FleetReport {
        let mut unplaced = [None; NUM_SHIPS];
        for (i, ship) in SHIPS.iter().enumerate() {
            if let Ok((row, col, orientation)) = self.random_placement(rng, *ship) {
                self.place_ship(row, col, ship.length(), orientation);
            } else {
                log::warn!(
                    "could not place {} after {} attempts, fleet will be short",
                    ship.name(),
                    MAX_PLACEMENT_ATTEMPTS
                );
                unplaced[i] = Some(ship.name());
            }
        }
        FleetReport {
            placed_cells: self.ship_map.count_ones(),
            unplaced,
        }
    }

    /// Resolve one guess at (`row`, `col`).
    ///
    /// A repeated coordinate reports `AlreadyGuessed` and mutates nothing;
    /// otherwise the cell transitions to hit or missed. Callers are expected
    /// to pass in-range coordinates.
    pub fn guess(&mut self, row: usize, col: usize) -> Result<GuessResult, BoardError> {
        if self.hits.get(row, col)? || self.misses.get(row, col)? {
            return Ok(GuessResult::AlreadyGuessed);
        }
        if self.ship_map.get(row, col)? {
            self.hits.set(row, col)?;
            Ok(GuessResult::Hit)
        } else {
            self.misses.set(row, col)?;
            Ok(GuessResult::Miss)
        }
    }

    /// Ship cells not yet hit. The game is won exactly when this reaches
    /// zero, and it stays zero afterwards.
    pub fn remaining_ship_cells(&self) -> usize {
        (self.ship_map & !self.hits).count_ones()
    }

    /// Guesser-facing state of a single cell.
    pub fn cell_view(&self, row: usize, col: usize) -> Result<CellView, BoardError> {
        if self.hits.get(row, col)? {
            Ok(CellView::Hit)
        } else if self.misses.get(row, col)? {
            Ok(CellView::Miss)
        } else {
            Ok(CellView::Water)
        }
    }

    /// Full display grid for the guesser. Pure: unhit ships render as
    /// water, and board truth leaks only through accumulated marks.
    pub fn render_view(&self) -> [[CellView; BOARD_SIZE as usize]; BOARD_SIZE as usize] {
        let mut view = [[CellView::Water; BOARD_SIZE as usize]; BOARD_SIZE as usize];
        for (r, row) in view.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                *cell = self.cell_view(r, c).unwrap_or(CellView::Water);
            }
        }
        view
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  ship_map: {:?},\n  hits: {:?},\n  misses: {:?}\n}}",
            self.ship_map, self.hits, self.misses
        )
    }
}
