//! The shared pile and its move-legality rule.

use log::trace;
use serde::{Deserialize, Serialize};

use crate::core::{GameRng, MoveError, PILE_MAX, PILE_MIN};

/// Remaining pieces in the shared pile.
///
/// The count is only changed through `remove` (checked against
/// `is_legal_move`) and `add`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pile {
    count: u32,
}

impl Pile {
    /// Create a pile with a fixed count.
    #[must_use]
    pub const fn with_count(count: u32) -> Self {
        Self { count }
    }

    /// Create a pile with a random count in `[PILE_MIN, PILE_MAX]`.
    #[must_use]
    pub fn random(rng: &mut GameRng) -> Self {
        let mut pile = Self::default();
        pile.randomize(rng);
        pile
    }

    /// Overwrite the count with a uniform draw from `[PILE_MIN, PILE_MAX]`.
    pub fn randomize(&mut self, rng: &mut GameRng) {
        self.count = rng.gen_range_inclusive(PILE_MIN..=PILE_MAX);
        trace!("pile randomized to {}", self.count);
    }

    /// Pieces left.
    #[must_use]
    pub const fn count(&self) -> u32 {
        self.count
    }

    /// Largest legal removal: half the pile (floor), but never below 1.
    ///
    /// The floor of 1 keeps a move available when a single piece remains.
    #[must_use]
    pub fn max_move(&self) -> u32 {
        (self.count / 2).max(1)
    }

    /// Whether `amount` can be taken now. Nothing is legal on an empty pile.
    #[must_use]
    pub fn is_legal_move(&self, amount: u32) -> bool {
        amount >= 1 && amount <= self.max_move() && amount <= self.count
    }

    /// Take `amount` pieces. Illegal amounts leave the pile untouched.
    ///
    /// Returns the new count.
    pub fn remove(&mut self, amount: u32) -> Result<u32, MoveError> {
        if !self.is_legal_move(amount) {
            return Err(MoveError::OutOfRange {
                amount: i64::from(amount),
                min: 1,
                max: self.max_move().min(self.count),
            });
        }
        self.count -= amount;
        Ok(self.count)
    }

    /// Put `amount` pieces back. Returns the new count.
    pub fn add(&mut self, amount: u32) -> u32 {
        self.count = self.count.saturating_add(amount);
        self.count
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }
}

impl std::fmt::Display for Pile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} pieces", self.count)
    }
}
