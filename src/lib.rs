#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod board;
mod cellset;
mod common;
mod config;
mod fleet;
mod game;
#[cfg(feature = "std")]
mod logging;
mod player;
#[cfg(feature = "std")]
mod render;
mod ship;
mod targeting;

pub use board::*;
pub use cellset::{CellSet, CellSetError};
pub use common::*;
pub use config::*;
pub use fleet::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use player::*;
#[cfg(feature = "std")]
pub use render::*;
pub use ship::*;
pub use targeting::*;

/// Cell set sized for the standard 10×10 game; 100 cells pack into a `u128`.
pub type StandardCells = CellSet<u128, BOARD_SIZE>;
/// Board sized for the standard 10×10 game.
pub type StandardBoard = Board<u128, BOARD_SIZE>;
/// Player sized for the standard 10×10 game.
pub type StandardPlayer = Player<u128, BOARD_SIZE>;
/// Game sized for the standard 10×10 game.
pub type StandardGame = Game<u128, BOARD_SIZE>;
