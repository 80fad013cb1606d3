//! The move-selection capability shared by all automated players.

use serde::{Deserialize, Serialize};

use crate::core::GameRng;

use super::optimal::OptimalNim;
use super::random::RandomLegal;

/// Chooses how many pieces to take from a pile of `count`.
///
/// Implementations must return an amount in `[1, max(1, count / 2)]`.
pub trait MoveStrategy {
    fn select_move(&self, count: u32, rng: &mut GameRng) -> u32;
}

/// Which strategy an automated participant plays with.
///
/// Chosen explicitly when the participant is created.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrategyKind {
    /// Uniform over legal moves.
    #[default]
    Random,
    /// Aim for pile sizes of the form 2^k - 1.
    Optimal,
}

impl StrategyKind {
    /// Short name used in logs and simulation reports.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            StrategyKind::Random => "random",
            StrategyKind::Optimal => "optimal",
        }
    }
}

impl MoveStrategy for StrategyKind {
    fn select_move(&self, count: u32, rng: &mut GameRng) -> u32 {
        match self {
            StrategyKind::Random => RandomLegal.select_move(count, rng),
            StrategyKind::Optimal => OptimalNim.select_move(count, rng),
        }
    }
}

impl std::str::FromStr for StrategyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "random" => Ok(Self::Random),
            "optimal" => Ok(Self::Optimal),
            other => Err(format!("unknown strategy '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_delegates() {
        let mut rng = GameRng::new(1);
        assert_eq!(StrategyKind::Optimal.select_move(7, &mut rng), 3);
        assert_eq!(StrategyKind::Random.select_move(1, &mut rng), 1);
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!("Optimal".parse::<StrategyKind>(), Ok(StrategyKind::Optimal));
        assert_eq!("random".parse::<StrategyKind>(), Ok(StrategyKind::Random));
        assert!("smart".parse::<StrategyKind>().is_err());
    }
}
