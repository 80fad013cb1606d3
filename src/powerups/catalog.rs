//! Power-up definitions.

use serde::{Deserialize, Serialize};

use crate::core::GameRng;

/// A one-shot modifier a human participant may trigger once per match.
///
/// The set is closed. Each variant carries a fixed display name and
/// description.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerUp {
    /// Act again right after this turn's removal.
    DoubleTurn,
    /// Put 1-5 pieces back on the pile before removing.
    AddPieces,
    /// Nothing held.
    #[default]
    None,
}

impl PowerUp {
    /// Power-ups a human can be dealt.
    pub const DEALABLE: [PowerUp; 2] = [PowerUp::DoubleTurn, PowerUp::AddPieces];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            PowerUp::DoubleTurn => "Double Turn",
            PowerUp::AddPieces => "Add Pieces",
            PowerUp::None => "None",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            PowerUp::DoubleTurn => "Take two turns in a row",
            PowerUp::AddPieces => "Add 1-5 pieces back to the pile",
            PowerUp::None => "No power-up available",
        }
    }

    #[must_use]
    pub const fn is_none(self) -> bool {
        matches!(self, PowerUp::None)
    }

    /// Uniform draw between `DoubleTurn` and `AddPieces`.
    pub fn random_for_human(rng: &mut GameRng) -> Self {
        Self::DEALABLE[rng.gen_index(Self::DEALABLE.len())]
    }
}

impl std::fmt::Display for PowerUp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_and_descriptions() {
        assert_eq!(PowerUp::DoubleTurn.name(), "Double Turn");
        assert_eq!(PowerUp::AddPieces.description(), "Add 1-5 pieces back to the pile");
        assert_eq!(PowerUp::None.to_string(), "None");
        assert!(PowerUp::default().is_none());
    }

    #[test]
    fn test_random_for_human_never_none() {
        let mut rng = GameRng::new(11);
        let mut seen = [false; 2];

        for _ in 0..200 {
            match PowerUp::random_for_human(&mut rng) {
                PowerUp::DoubleTurn => seen[0] = true,
                PowerUp::AddPieces => seen[1] = true,
                PowerUp::None => panic!("humans are never dealt None"),
            }
        }

        assert_eq!(seen, [true, true]);
    }
}
