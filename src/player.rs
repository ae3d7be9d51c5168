//! Players: a human firing chosen shots, or a computer driven by the
//! hunt/target engine.

use alloc::vec::Vec;

use num_traits::{PrimInt, Unsigned, Zero};
use rand::Rng;

use crate::board::Board;
use crate::cellset::CellSet;
use crate::common::{AttackOutcome, Coord, GameError};
use crate::targeting::{forbidden_cells, TargetingEngine};

/// Kind of player, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerKind {
    Human,
    Computer,
}

/// One participant: an owned board plus the history of shots fired at the
/// opponent. Computer players additionally carry the targeting engine.
pub struct Player<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    kind: PlayerKind,
    board: Board<T, N>,
    moves: Vec<Coord>,
    fired: CellSet<T, N>,
    targeting: TargetingEngine,
}

impl<T, const N: usize> Player<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    pub fn new(kind: PlayerKind) -> Self {
        Player {
            kind,
            board: Board::new(),
            moves: Vec::new(),
            fired: CellSet::new(),
            targeting: TargetingEngine::new(),
        }
    }

    pub fn human() -> Self {
        Self::new(PlayerKind::Human)
    }

    pub fn computer() -> Self {
        Self::new(PlayerKind::Computer)
    }

    pub fn kind(&self) -> PlayerKind {
        self.kind
    }

    pub fn board(&self) -> &Board<T, N> {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board<T, N> {
        &mut self.board
    }

    /// Shots fired at the opponent so far, oldest first, duplicate-free.
    pub fn previous_moves(&self) -> &[Coord] {
        &self.moves
    }

    /// The targeting engine's current view; hunting and empty for humans.
    pub fn targeting(&self) -> &TargetingEngine {
        &self.targeting
    }

    /// Fire at `coord` on the opponent's board.
    ///
    /// Rejects coordinates this player has already fired at; on failure
    /// neither the history nor the opponent board changes.
    pub fn attack(
        &mut self,
        opponent: &mut Board<T, N>,
        coord: Coord,
    ) -> Result<AttackOutcome, GameError> {
        if self.fired.contains(coord).unwrap_or(false) {
            return Err(GameError::DuplicateAttack);
        }
        self.fired.insert(coord)?;
        self.moves.push(coord);
        opponent.receive_attack(coord)
    }

    /// Choose and fire the computer's next shot against `opponent`, folding
    /// the outcome back into the targeting engine.
    pub fn computer_attack<R: Rng + ?Sized>(
        &mut self,
        opponent: &mut Board<T, N>,
        rng: &mut R,
    ) -> Result<AttackOutcome, GameError> {
        if self.kind != PlayerKind::Computer {
            return Err(GameError::WrongPlayerKind);
        }

        let forbidden = forbidden_cells(opponent);
        self.targeting.prune(&self.fired, &forbidden);

        let coord = match self.targeting.next_candidate(&self.fired, &forbidden) {
            Some(cell) => cell,
            None => self.random_target(&forbidden, rng),
        };

        let outcome = self.attack(opponent, coord)?;
        log::debug!("computer fired at {}: {:?}", coord, outcome);

        if let AttackOutcome::Hit { sunk, .. } = outcome {
            // the hit may have sunk a ship, widening the forbidden zone
            let forbidden = forbidden_cells(opponent);
            self.targeting.observe_hit(coord, &self.fired, &forbidden);
            if sunk {
                self.targeting.reset();
                let forbidden = forbidden_cells(opponent);
                self.targeting.prune(&self.fired, &forbidden);
            }
        }
        Ok(outcome)
    }

    /// Uniform choice over unattacked, unforbidden cells; if the forbidden
    /// zone leaves nothing, any unattacked cell qualifies.
    fn random_target<R: Rng + ?Sized>(&self, forbidden: &CellSet<T, N>, rng: &mut R) -> Coord {
        let mut open = Vec::new();
        for x in 0..N as u8 {
            for y in 0..N as u8 {
                let cell = Coord::new(x, y);
                if self.fired.contains(cell).unwrap_or(false) {
                    continue;
                }
                if forbidden.contains(cell).unwrap_or(false) {
                    continue;
                }
                open.push(cell);
            }
        }
        if open.is_empty() {
            for x in 0..N as u8 {
                for y in 0..N as u8 {
                    let cell = Coord::new(x, y);
                    if !self.fired.contains(cell).unwrap_or(false) {
                        open.push(cell);
                    }
                }
            }
        }
        if open.is_empty() {
            // board exhausted; replaying the origin surfaces DuplicateAttack
            return Coord::new(0, 0);
        }
        open[rng.random_range(0..open.len())]
    }
}
