//! Shared result and error types for the board model.

use crate::bitboard::BitBoardError;

/// Classification of one resolved guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessResult {
    /// Guess struck a ship cell; the cell is now marked hit.
    Hit,
    /// Guess landed on open water; the cell is now marked missed.
    Miss,
    /// Cell was already hit or missed; nothing changed and no turn is consumed.
    AlreadyGuessed,
}

/// Errors returned by board operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying bitboard rejected the access (e.g. index out of range).
    BitBoard(BitBoardError),
    /// Placement run leaves the board on at least one axis.
    ShipOutOfBounds,
    /// Random placement exhausted its attempt budget.
    UnableToPlaceShip,
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        BoardError::BitBoard(err)
    }
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::BitBoard(e) => write!(f, "BitBoard error: {}", e),
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::UnableToPlaceShip => write!(f, "Unable to place ship"),
        }
    }
}
