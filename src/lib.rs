#![cfg_attr(not(feature = "std"), no_std)]

mod bitboard;
mod board;
mod common;
mod config;
mod game;
mod ship;

#[cfg(feature = "std")]
mod cli;
#[cfg(feature = "std")]
mod logging;

pub use bitboard::{BitBoard, BitBoardError};
pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use ship::*;

#[cfg(feature = "std")]
pub use cli::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
