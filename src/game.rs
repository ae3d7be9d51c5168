//! Turn orchestration for a human-vs-computer match.

use num_traits::{PrimInt, Unsigned, Zero};
use rand::Rng;

use crate::common::{AttackOutcome, Coord, GameError};
use crate::player::Player;
use crate::ship::ShipClass;

/// Current status of a game, from the human's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Whose shot comes next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Human,
    Computer,
}

/// One match between a human and the targeting engine. An attacker that
/// hits keeps the turn; a miss passes it.
pub struct Game<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    human: Player<T, N>,
    computer: Player<T, N>,
    turn: Turn,
}

impl<T, const N: usize> Game<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Fresh game with empty boards; place fleets through the player
    /// accessors before attacking.
    pub fn new() -> Self {
        Game {
            human: Player::human(),
            computer: Player::computer(),
            turn: Turn::Human,
        }
    }

    pub fn human(&self) -> &Player<T, N> {
        &self.human
    }

    pub fn human_mut(&mut self) -> &mut Player<T, N> {
        &mut self.human
    }

    pub fn computer(&self) -> &Player<T, N> {
        &self.computer
    }

    pub fn computer_mut(&mut self) -> &mut Player<T, N> {
        &mut self.computer
    }

    pub fn turn(&self) -> Turn {
        self.turn
    }

    /// Human fires at the computer's board.
    pub fn human_attack(&mut self, coord: Coord) -> Result<AttackOutcome, GameError> {
        let outcome = self.human.attack(self.computer.board_mut(), coord)?;
        if let AttackOutcome::Hit { length, sunk: true } = outcome {
            log::info!("enemy {} sunk", ShipClass::describe(length));
        }
        if !outcome.is_hit() {
            self.turn = Turn::Computer;
        }
        Ok(outcome)
    }

    /// Computer fires at the human's board.
    pub fn computer_attack<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<AttackOutcome, GameError> {
        let outcome = self.computer.computer_attack(self.human.board_mut(), rng)?;
        if let AttackOutcome::Hit { length, sunk: true } = outcome {
            log::info!("your {} was sunk", ShipClass::describe(length));
        }
        if !outcome.is_hit() {
            self.turn = Turn::Human;
        }
        Ok(outcome)
    }

    /// Game status from the human's perspective. Meaningful once both
    /// fleets are placed.
    pub fn status(&self) -> GameStatus {
        if self.computer.board().all_ships_sunk() {
            GameStatus::Won
        } else if self.human.board().all_ships_sunk() {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }
}

impl<T, const N: usize> Default for Game<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn default() -> Self {
        Self::new()
    }
}
