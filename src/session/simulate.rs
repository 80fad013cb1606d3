//! Headless computer-vs-computer runs.
//!
//! Plays many matches between two strategies and tallies the outcome,
//! e.g. to compare optimal play against random play.

use log::info;
use serde::{Deserialize, Serialize};

use crate::core::{GameRng, MatchConfig, MatchError, PlayerId, PlayerMap, SEATS};
use crate::game::HeadlessFrontend;
use crate::participants::Participant;
use crate::strategy::StrategyKind;

use super::session::Session;

/// Aggregate outcome of a simulation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Strategy per seat.
    pub strategies: PlayerMap<StrategyKind>,
    /// Matches played.
    pub matches: u32,
    /// Wins per seat.
    pub wins: PlayerMap<u32>,
    /// Turns summed over all matches.
    pub total_turns: u64,
}

impl SimulationReport {
    /// Fraction of matches won by `player`.
    #[must_use]
    pub fn win_rate(&self, player: PlayerId) -> f64 {
        if self.matches == 0 {
            return 0.0;
        }
        f64::from(self.wins[player]) / f64::from(self.matches)
    }

    #[must_use]
    pub fn average_turns(&self) -> f64 {
        if self.matches == 0 {
            return 0.0;
        }
        self.total_turns as f64 / f64::from(self.matches)
    }
}

/// Play `matches` games between two computer strategies.
///
/// Power-ups never come into play since computers are not dealt any.
pub fn simulate(
    strategies: [StrategyKind; SEATS],
    matches: u32,
    config: MatchConfig,
    seed: u64,
) -> Result<SimulationReport, MatchError> {
    let participants = strategies.map(|kind| Participant::computer(format!("{} bot", kind.label()), kind));
    let mut session = Session::new(participants, config, GameRng::new(seed));
    let mut frontend = HeadlessFrontend;

    let mut total_turns = 0u64;
    for _ in 0..matches {
        let result = session.play_match(&mut frontend)?;
        total_turns += u64::from(result.turns);
    }

    let report = SimulationReport {
        strategies: PlayerMap::from_seats(strategies),
        matches,
        wins: session.scores(),
        total_turns,
    };
    info!(
        "simulated {} matches: {} {:.1}%, {} {:.1}%",
        matches,
        strategies[0].label(),
        report.win_rate(PlayerId::new(0)) * 100.0,
        strategies[1].label(),
        report.win_rate(PlayerId::new(1)) * 100.0,
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wins_add_up() {
        let report = simulate(
            [StrategyKind::Random, StrategyKind::Random],
            50,
            MatchConfig::default(),
            1,
        )
        .unwrap();

        assert_eq!(report.matches, 50);
        assert_eq!(report.wins[PlayerId::new(0)] + report.wins[PlayerId::new(1)], 50);
        assert!(report.average_turns() >= 1.0);
    }

    #[test]
    fn test_empty_simulation() {
        let report = simulate(
            [StrategyKind::Optimal, StrategyKind::Random],
            0,
            MatchConfig::default(),
            1,
        )
        .unwrap();

        assert_eq!(report.win_rate(PlayerId::new(0)), 0.0);
        assert_eq!(report.average_turns(), 0.0);
    }
}
