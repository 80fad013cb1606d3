//! Rule constants and match configuration.
//!
//! The rules themselves are fixed: the pile range, the move-size formula and
//! the Add-Pieces bounds are constants. `MatchConfig` only carries the knobs
//! a session may choose: whether power-ups are dealt, and who opens each match.

use serde::{Deserialize, Serialize};

/// Smallest starting pile.
pub const PILE_MIN: u32 = 10;

/// Largest starting pile.
pub const PILE_MAX: u32 = 50;

/// Fewest pieces the Add-Pieces power-up may add.
pub const ADD_MIN: u32 = 1;

/// Most pieces the Add-Pieces power-up may add.
pub const ADD_MAX: u32 = 5;

/// Pile sizes the optimal strategy aims to leave behind (2^k - 1).
pub const SAFE_TARGETS: [u32; 5] = [3, 7, 15, 31, 63];

/// Number of seats in a match.
pub const SEATS: usize = 2;

/// Who opens a match after the first one.
///
/// The first match of a session always opens with a uniformly random seat.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FirstPlayerPolicy {
    /// The seat that was active when the previous match ended opens the next
    /// one. That is the previous loser.
    #[default]
    Persist,
    /// Every match draws a fresh random opener.
    Random,
}

impl std::str::FromStr for FirstPlayerPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "persist" => Ok(Self::Persist),
            "random" => Ok(Self::Random),
            other => Err(format!("unknown first-player policy '{other}'")),
        }
    }
}

/// Per-session match settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Deal power-ups to human participants at the start of each match.
    pub power_ups: bool,

    /// Opening-seat policy for matches after the first.
    pub first_player: FirstPlayerPolicy,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            power_ups: true,
            first_player: FirstPlayerPolicy::default(),
        }
    }
}

impl MatchConfig {
    /// Default configuration: power-ups on, previous loser opens.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_power_ups(mut self, enabled: bool) -> Self {
        self.power_ups = enabled;
        self
    }

    pub fn with_first_player(mut self, policy: FirstPlayerPolicy) -> Self {
        self.first_player = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MatchConfig::default();
        assert!(config.power_ups);
        assert_eq!(config.first_player, FirstPlayerPolicy::Persist);
    }

    #[test]
    fn test_builder() {
        let config = MatchConfig::new()
            .with_power_ups(false)
            .with_first_player(FirstPlayerPolicy::Random);

        assert!(!config.power_ups);
        assert_eq!(config.first_player, FirstPlayerPolicy::Random);
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!("Persist".parse::<FirstPlayerPolicy>(), Ok(FirstPlayerPolicy::Persist));
        assert_eq!("random".parse::<FirstPlayerPolicy>(), Ok(FirstPlayerPolicy::Random));
        assert!("alternate".parse::<FirstPlayerPolicy>().is_err());
    }

    #[test]
    fn test_safe_targets_are_mersenne() {
        for target in SAFE_TARGETS {
            assert!((target + 1).is_power_of_two());
        }
    }
}
