//! Hunt/target engine for the computer player.
//!
//! The engine works in two modes. While hunting it fires at random. After a
//! hit it tracks the wounded ship: first by ringing the hit with its four
//! orthogonal neighbours, then, once two streak hits share a row or column,
//! by walking the inferred axis outward from the streak's endpoints. Sinking
//! a ship resets the engine to hunting. Because placement keeps a one-cell
//! ring clear around every ship, every cell adjacent to a sunk ship is
//! provably empty and is excluded from future fire.

use alloc::collections::VecDeque;
use alloc::vec::Vec;
use core::mem;

use num_traits::{PrimInt, Unsigned, Zero};

use crate::board::Board;
use crate::cellset::CellSet;
use crate::common::Coord;

/// Axis a tracked ship is known to lie on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Streak cells share `x`; the ship extends along `y`.
    Vertical,
    /// Streak cells share `y`; the ship extends along `x`.
    Horizontal,
}

/// Targeting mode, carrying exactly the state valid for that mode.
///
/// Orientation and its axis value travel together in `TrackingOriented`, so
/// "orientation known but axis missing" cannot be represented.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TargetingState {
    /// No active streak; the next shot is random.
    #[default]
    Hunting,
    /// One or more hits recorded, orientation not yet established.
    TrackingUnoriented { streak: Vec<Coord> },
    /// Orientation inferred; `axis_value` is the shared `x` (vertical) or
    /// `y` (horizontal) of the streak.
    TrackingOriented {
        axis: Axis,
        axis_value: u8,
        streak: Vec<Coord>,
    },
}

impl TargetingState {
    /// Hits recorded since the last reset.
    pub fn streak(&self) -> &[Coord] {
        match self {
            TargetingState::Hunting => &[],
            TargetingState::TrackingUnoriented { streak } => streak,
            TargetingState::TrackingOriented { streak, .. } => streak,
        }
    }

    /// The inferred axis and its fixed coordinate, if established.
    pub fn orientation(&self) -> Option<(Axis, u8)> {
        match self {
            TargetingState::TrackingOriented {
                axis, axis_value, ..
            } => Some((*axis, *axis_value)),
            _ => None,
        }
    }
}

/// Scan streak pairs in insertion order and commit to the first axis match:
/// a shared `x` locks `Vertical` before a shared `y` is even considered for
/// that pair. Returns `None` while no pair agrees.
pub fn infer_axis(streak: &[Coord]) -> Option<(Axis, u8)> {
    for i in 0..streak.len() {
        for j in i + 1..streak.len() {
            let (a, b) = (streak[i], streak[j]);
            if a.x == b.x {
                return Some((Axis::Vertical, a.x));
            }
            if a.y == b.y {
                return Some((Axis::Horizontal, a.y));
            }
        }
    }
    None
}

/// The two cells just beyond the streak's extent along the free axis, low
/// end first. Streak cells off `axis_value` are stray hits from another
/// ship and do not take part.
pub fn extension_candidates(axis: Axis, axis_value: u8, streak: &[Coord]) -> Vec<Coord> {
    let mut out = Vec::new();
    let mut extent: Option<(u8, u8)> = None;
    for &cell in streak {
        let (fixed, free) = match axis {
            Axis::Vertical => (cell.x, cell.y),
            Axis::Horizontal => (cell.y, cell.x),
        };
        if fixed != axis_value {
            continue;
        }
        extent = Some(match extent {
            None => (free, free),
            Some((lo, hi)) => (lo.min(free), hi.max(free)),
        });
    }
    let Some((lo, hi)) = extent else {
        return out;
    };
    let cell_at = |free: u8| match axis {
        Axis::Vertical => Coord::new(axis_value, free),
        Axis::Horizontal => Coord::new(free, axis_value),
    };
    if let Some(below) = lo.checked_sub(1) {
        out.push(cell_at(below));
    }
    if let Some(above) = hi.checked_add(1) {
        out.push(cell_at(above));
    }
    out
}

/// Fold a confirmed hit at `coord` into the tracking state.
///
/// Pure: returns the successor state and the raw follow-up candidates
/// (orthogonal neighbours while unoriented, axis extensions once oriented).
/// Candidates are not yet filtered against history, the forbidden zone, or
/// the queue; that is [`TargetingEngine::enqueue_if_valid`]'s job.
pub fn advance_on_hit(state: TargetingState, coord: Coord) -> (TargetingState, Vec<Coord>) {
    let (mut streak, known) = match state {
        TargetingState::Hunting => (Vec::new(), None),
        TargetingState::TrackingUnoriented { streak } => (streak, None),
        TargetingState::TrackingOriented {
            axis,
            axis_value,
            streak,
        } => (streak, Some((axis, axis_value))),
    };
    streak.push(coord);
    // orientation is decided at most once per streak
    let known = known.or_else(|| infer_axis(&streak));
    match known {
        None => {
            let additions: Vec<Coord> = coord.orthogonal().collect();
            (TargetingState::TrackingUnoriented { streak }, additions)
        }
        Some((axis, axis_value)) => {
            let additions = extension_candidates(axis, axis_value, &streak);
            (
                TargetingState::TrackingOriented {
                    axis,
                    axis_value,
                    streak,
                },
                additions,
            )
        }
    }
}

/// Cells guaranteed empty: every sunk ship's footprint plus its one-cell
/// ring, clipped to the board. Sound because placement keeps that ring
/// clear of other ships.
pub fn forbidden_cells<T, const N: usize>(board: &Board<T, N>) -> CellSet<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    let mut zone = CellSet::new();
    for placed in board.ships() {
        if !placed.ship().is_sunk() {
            continue;
        }
        for &cell in placed.cells() {
            for dx in -1i16..=1 {
                for dy in -1i16..=1 {
                    let nx = cell.x as i16 + dx;
                    let ny = cell.y as i16 + dy;
                    if nx < 0 || ny < 0 || nx >= N as i16 || ny >= N as i16 {
                        continue;
                    }
                    let _ = zone.insert(Coord::new(nx as u8, ny as u8));
                }
            }
        }
    }
    zone
}

/// Candidate queue plus tracking state for one computer player.
#[derive(Debug, Clone, Default)]
pub struct TargetingEngine {
    queue: VecDeque<Coord>,
    state: TargetingState,
}

impl TargetingEngine {
    pub fn new() -> Self {
        TargetingEngine {
            queue: VecDeque::new(),
            state: TargetingState::Hunting,
        }
    }

    pub fn state(&self) -> &TargetingState {
        &self.state
    }

    /// Queued candidates, front (next to fire) first.
    pub fn queue(&self) -> impl Iterator<Item = Coord> + '_ {
        self.queue.iter().copied()
    }

    /// Append `cell` unless it is off the board, forbidden, already fired
    /// at, or already queued.
    pub fn enqueue_if_valid<T, const N: usize>(
        &mut self,
        cell: Coord,
        fired: &CellSet<T, N>,
        forbidden: &CellSet<T, N>,
    ) where
        T: PrimInt + Unsigned + Zero,
    {
        if !cell.in_bounds(N) {
            return;
        }
        if forbidden.contains(cell).unwrap_or(false) {
            return;
        }
        if fired.contains(cell).unwrap_or(false) {
            return;
        }
        if self.queue.contains(&cell) {
            return;
        }
        self.queue.push_back(cell);
    }

    /// Drop queued candidates that have been fired at or become forbidden.
    pub fn prune<T, const N: usize>(&mut self, fired: &CellSet<T, N>, forbidden: &CellSet<T, N>)
    where
        T: PrimInt + Unsigned + Zero,
    {
        self.queue.retain(|&cell| {
            !fired.contains(cell).unwrap_or(false) && !forbidden.contains(cell).unwrap_or(false)
        });
    }

    /// FIFO-dequeue the first candidate that is still worth firing at.
    pub fn next_candidate<T, const N: usize>(
        &mut self,
        fired: &CellSet<T, N>,
        forbidden: &CellSet<T, N>,
    ) -> Option<Coord>
    where
        T: PrimInt + Unsigned + Zero,
    {
        while let Some(cell) = self.queue.pop_front() {
            if fired.contains(cell).unwrap_or(false) {
                continue;
            }
            if forbidden.contains(cell).unwrap_or(false) {
                continue;
            }
            return Some(cell);
        }
        None
    }

    /// Fold a hit into the engine: extend the streak, infer orientation,
    /// restrict the queue to a locked axis, and enqueue follow-up candidates
    /// filtered against `fired` and `forbidden`.
    pub fn observe_hit<T, const N: usize>(
        &mut self,
        coord: Coord,
        fired: &CellSet<T, N>,
        forbidden: &CellSet<T, N>,
    ) where
        T: PrimInt + Unsigned + Zero,
    {
        let state = mem::take(&mut self.state);
        let was_oriented = state.orientation().is_some();
        let (state, additions) = advance_on_hit(state, coord);
        if let Some((axis, axis_value)) = state.orientation() {
            if !was_oriented {
                log::debug!("orientation locked: {:?} axis={}", axis, axis_value);
            }
            self.queue.retain(|&c| match axis {
                Axis::Vertical => c.x == axis_value,
                Axis::Horizontal => c.y == axis_value,
            });
        }
        self.state = state;
        for cell in additions {
            self.enqueue_if_valid(cell, fired, forbidden);
        }
    }

    /// Clear streak, queue, and orientation back to hunting.
    pub fn reset(&mut self) {
        self.queue.clear();
        self.state = TargetingState::Hunting;
    }
}
