//! Participant identity, score and power-up slot.

use serde::{Deserialize, Serialize};

use crate::core::GameRng;
use crate::powerups::PowerUp;
use crate::strategy::StrategyKind;

/// Who decides a participant's moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Moves come from the frontend.
    Human,
    /// Moves come from a strategy.
    Computer(StrategyKind),
}

/// One of the two players in a session.
///
/// `score` persists across matches. The power-up slot is re-dealt at the
/// start of every match by `assign_power_up`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    name: String,
    role: Role,
    score: u32,
    power_up: PowerUp,
    power_up_consumed: bool,
}

impl Participant {
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            role,
            score: 0,
            power_up: PowerUp::None,
            power_up_consumed: false,
        }
    }

    pub fn human(name: impl Into<String>) -> Self {
        Self::new(name, Role::Human)
    }

    pub fn computer(name: impl Into<String>, strategy: StrategyKind) -> Self {
        Self::new(name, Role::Computer(strategy))
    }

    /// Display name, as entered at setup.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    #[must_use]
    pub fn is_automated(&self) -> bool {
        matches!(self.role, Role::Computer(_))
    }

    /// The strategy for automated participants, `None` for humans.
    #[must_use]
    pub fn strategy(&self) -> Option<StrategyKind> {
        match self.role {
            Role::Computer(kind) => Some(kind),
            Role::Human => None,
        }
    }

    /// Matches won this session.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn add_points(&mut self, points: u32) {
        self.score += points;
    }

    #[must_use]
    pub fn power_up(&self) -> PowerUp {
        self.power_up
    }

    #[must_use]
    pub fn power_up_consumed(&self) -> bool {
        self.power_up_consumed
    }

    /// Holds a power-up that has not been used this match.
    #[must_use]
    pub fn has_power_up(&self) -> bool {
        !self.power_up.is_none() && !self.power_up_consumed
    }

    /// Deal this match's power-up and clear the consumed flag.
    ///
    /// Automated participants, and everyone when `enabled` is false, get
    /// `PowerUp::None`. No randomness is drawn in that case.
    pub fn assign_power_up(&mut self, rng: &mut GameRng, enabled: bool) -> PowerUp {
        self.power_up = if enabled && !self.is_automated() {
            PowerUp::random_for_human(rng)
        } else {
            PowerUp::None
        };
        self.power_up_consumed = false;
        self.power_up
    }

    /// Give a specific power-up for this match.
    pub fn set_power_up(&mut self, power_up: PowerUp) {
        self.power_up = power_up;
        self.power_up_consumed = false;
    }

    /// Mark the power-up used. Returns it, or `None` if nothing was held.
    pub fn consume_power_up(&mut self) -> Option<PowerUp> {
        if !self.has_power_up() {
            return None;
        }
        self.power_up_consumed = true;
        Some(self.power_up)
    }
}

impl std::fmt::Display for Participant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
