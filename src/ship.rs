//! Ship units and the named classes of the standard fleet.

use alloc::format;
use alloc::string::String;

use crate::common::GameError;

/// Class of ship in the standard fleet: display name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipClass {
    name: &'static str,
    length: usize,
}

impl ShipClass {
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Presentation label for a sunk ship of the given length.
    pub fn describe(length: usize) -> String {
        match length {
            2 => String::from("Destroyer (2)"),
            3 => String::from("Cruiser/Submarine (3)"),
            4 => String::from("Battleship (4)"),
            5 => String::from("Carrier (5)"),
            n => format!("Ship of length {}", n),
        }
    }
}

/// A ship with a fixed length and an accumulated hit count.
///
/// Where a ship sits on the board is the owning [`PlacedShip`] entry's
/// business; the ship itself only knows how much damage it has taken.
///
/// [`PlacedShip`]: crate::board::PlacedShip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    length: usize,
    hits: usize,
}

impl Ship {
    /// Create a ship of the given length. Zero-length ships are rejected.
    pub fn new(length: usize) -> Result<Self, GameError> {
        if length == 0 {
            return Err(GameError::InvalidLength);
        }
        Ok(Ship { length, hits: 0 })
    }

    /// Record one hit. Hits past sinking are absorbed.
    pub fn hit(&mut self) {
        if self.hits < self.length {
            self.hits += 1;
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    /// A ship is sunk once every segment has been hit.
    pub fn is_sunk(&self) -> bool {
        self.hits >= self.length
    }
}
