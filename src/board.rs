//! Game board state: placed ships and the record of missed attacks.

use alloc::vec::Vec;
use core::fmt;

use num_traits::{PrimInt, Unsigned, Zero};

use crate::cellset::{CellSet, CellSetError};
use crate::common::{AttackOutcome, Coord, GameError};
use crate::ship::Ship;

/// A ship together with the cells it occupies, in placement order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedShip {
    ship: Ship,
    cells: Vec<Coord>,
}

impl PlacedShip {
    pub fn ship(&self) -> &Ship {
        &self.ship
    }

    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    pub fn contains(&self, cell: Coord) -> bool {
        self.cells.iter().any(|&c| c == cell)
    }
}

/// An N×N board owning its fleet and the missed-attack record.
///
/// The board validates placement and resolves attacks; it does not police
/// re-attacks of the same cell. That guarantee belongs to the attacking
/// player's move history.
pub struct Board<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    ships: Vec<PlacedShip>,
    misses: CellSet<T, N>,
}

impl<T, const N: usize> Board<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Create an empty board.
    pub fn new() -> Self {
        Board {
            ships: Vec::new(),
            misses: CellSet::new(),
        }
    }

    /// Grid dimension.
    pub fn size(&self) -> usize {
        N
    }

    /// Placed ships, in placement order.
    pub fn ships(&self) -> &[PlacedShip] {
        &self.ships
    }

    /// Cells attacked and missed so far.
    pub fn missed_attacks(&self) -> &CellSet<T, N> {
        &self.misses
    }

    /// Place `ship` on the given cells.
    ///
    /// Every cell of the new ship must keep a clear one-cell ring around
    /// every already-placed ship, diagonals included. Nothing is recorded
    /// unless the whole placement is valid.
    pub fn place_ship(&mut self, ship: Ship, cells: Vec<Coord>) -> Result<(), GameError> {
        if cells.len() != ship.length() {
            return Err(GameError::LengthMismatch);
        }
        for &cell in &cells {
            if !cell.in_bounds(N) {
                return Err(GameError::Cells(CellSetError::OutOfBounds {
                    x: cell.x,
                    y: cell.y,
                }));
            }
        }
        let too_close = self.ships.iter().any(|placed| {
            placed
                .cells
                .iter()
                .any(|&own| cells.iter().any(|&new| own.chebyshev(new) <= 1))
        });
        if too_close {
            return Err(GameError::TooClose);
        }
        log::debug!("placed ship of length {} at {:?}", ship.length(), cells);
        self.ships.push(PlacedShip { ship, cells });
        Ok(())
    }

    /// Resolve an attack at `coord`: wound the ship occupying it, or record
    /// a miss.
    pub fn receive_attack(&mut self, coord: Coord) -> Result<AttackOutcome, GameError> {
        if !coord.in_bounds(N) {
            return Err(GameError::Cells(CellSetError::OutOfBounds {
                x: coord.x,
                y: coord.y,
            }));
        }
        for placed in self.ships.iter_mut() {
            if placed.contains(coord) {
                placed.ship.hit();
                return Ok(AttackOutcome::Hit {
                    length: placed.ship.length(),
                    sunk: placed.ship.is_sunk(),
                });
            }
        }
        self.misses.insert(coord)?;
        Ok(AttackOutcome::Miss)
    }

    /// Discard all ships and missed attacks.
    pub fn reset(&mut self) {
        self.ships.clear();
        self.misses.clear();
    }

    /// True iff every placed ship is sunk; vacuously true on an empty board.
    pub fn all_ships_sunk(&self) -> bool {
        self.ships.iter().all(|placed| placed.ship.is_sunk())
    }
}

impl<T, const N: usize> Default for Board<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> fmt::Debug for Board<T, N>
where
    T: PrimInt + Unsigned + Zero + fmt::Binary,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  ships: {:?},\n  misses: {:?}\n}}",
            self.ships, self.misses
        )
    }
}
