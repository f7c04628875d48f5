//! Ship catalog types and placement geometry.
//!
//! Ships have no runtime identity once placed; a placement is just the run
//! of cells its mask covers. Victory is decided by total hit-cell count, so
//! nothing here tracks per-ship damage.

use num_traits::{PrimInt, Unsigned, Zero};

use crate::bitboard::BitBoard;
use crate::common::BoardError;

/// Axis a ship extends along from its origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Catalog entry: a ship's name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    /// Create a new ship type.
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    /// Ship's name.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's length in cells.
    pub const fn length(&self) -> usize {
        self.length
    }
}

/// Occupancy mask for a run of `length` cells starting at (`row`, `col`)
/// and extending along `orientation`.
///
/// Fails with `ShipOutOfBounds` when any cell of the run leaves the `N×N`
/// grid.
pub fn run_mask<T, const N: usize>(
    row: usize,
    col: usize,
    length: usize,
    orientation: Orientation,
) -> Result<BitBoard<T, N>, BoardError>
where
    T: PrimInt + Unsigned + Zero,
{
    let fits = match orientation {
        Orientation::Horizontal => row < N && col + length <= N,
        Orientation::Vertical => col < N && row + length <= N,
    };
    if !fits {
        return Err(BoardError::ShipOutOfBounds);
    }
    let mut mask = BitBoard::new();
    for i in 0..length {
        let (r, c) = match orientation {
            Orientation::Horizontal => (row, col + i),
            Orientation::Vertical => (row + i, col),
        };
        mask.set(r, c)?;
    }
    Ok(mask)
}
