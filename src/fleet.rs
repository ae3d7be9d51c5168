//! Fleet construction: straight-line coordinate runs and randomized
//! placement with retry.

use alloc::vec::Vec;

use num_traits::{PrimInt, Unsigned, Zero};
use rand::Rng;

use crate::board::Board;
use crate::common::{Coord, GameError};
use crate::config::FLEET;
use crate::ship::Ship;
use crate::targeting::Axis;

/// Placement attempts per ship before `place_random_ship` gives up.
const MAX_ATTEMPTS: usize = 100;

/// Cells of a straight run of `length` starting at `origin`, extending
/// along `y` (vertical) or `x` (horizontal). `None` when the run leaves an
/// `n`×`n` board along the free axis; the fixed coordinate is validated at
/// placement.
pub fn line_coords(origin: Coord, length: usize, axis: Axis, n: usize) -> Option<Vec<Coord>> {
    if length == 0 || length > n {
        return None;
    }
    match axis {
        Axis::Vertical => {
            if origin.y as usize + length > n {
                return None;
            }
            Some(
                (0..length)
                    .map(|i| Coord::new(origin.x, origin.y + i as u8))
                    .collect(),
            )
        }
        Axis::Horizontal => {
            if origin.x as usize + length > n {
                return None;
            }
            Some(
                (0..length)
                    .map(|i| Coord::new(origin.x + i as u8, origin.y))
                    .collect(),
            )
        }
    }
}

/// Place one ship of `length` at a random position, retrying placements the
/// board rejects. Rejections from the adjacency rule are expected; a board
/// too crowded to take the ship within the attempt budget reports
/// `PlacementExhausted`.
pub fn place_random_ship<T, const N: usize, R>(
    board: &mut Board<T, N>,
    length: usize,
    rng: &mut R,
) -> Result<(), GameError>
where
    T: PrimInt + Unsigned + Zero,
    R: Rng + ?Sized,
{
    for attempt in 1..=MAX_ATTEMPTS {
        let axis = if rng.random() {
            Axis::Horizontal
        } else {
            Axis::Vertical
        };
        let origin = Coord::new(rng.random_range(0..N) as u8, rng.random_range(0..N) as u8);
        let Some(cells) = line_coords(origin, length, axis, N) else {
            continue;
        };
        let ship = Ship::new(length)?;
        match board.place_ship(ship, cells) {
            Ok(()) => {
                log::debug!("length-{} ship placed after {} attempts", length, attempt);
                return Ok(());
            }
            Err(GameError::TooClose) => continue,
            Err(e) => return Err(e),
        }
    }
    Err(GameError::PlacementExhausted)
}

/// Place the standard fleet at random, longest ship first.
pub fn place_random_fleet<T, const N: usize, R>(
    board: &mut Board<T, N>,
    rng: &mut R,
) -> Result<(), GameError>
where
    T: PrimInt + Unsigned + Zero,
    R: Rng + ?Sized,
{
    for class in FLEET.iter() {
        place_random_ship(board, class.length(), rng)?;
    }
    Ok(())
}
