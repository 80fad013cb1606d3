//! Repeated matches with cumulative scoring.

use log::info;
use serde::{Deserialize, Serialize};

use crate::core::{
    FirstPlayerPolicy, GameRng, GameRngState, MatchConfig, MatchError, PlayerId, PlayerMap, SEATS,
};
use crate::game::{Frontend, Match, MatchEvent, MatchResult};
use crate::participants::Participant;

/// Scores at the end of a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub matches_played: usize,
    /// Names and wins in seat order.
    pub scores: Vec<(String, u32)>,
}

/// A run of matches between the same two participants.
///
/// Owns the participants (and so their scores) and the session rng, from
/// which each match gets its own fork.
pub struct Session {
    participants: PlayerMap<Participant>,
    config: MatchConfig,
    rng: GameRng,
    /// Seat that was active when the previous match ended.
    last_active: Option<PlayerId>,
    results: Vec<MatchResult>,
}

impl Session {
    pub fn new(participants: [Participant; SEATS], config: MatchConfig, rng: GameRng) -> Self {
        Self {
            participants: PlayerMap::from_seats(participants),
            config,
            rng,
            last_active: None,
            results: Vec::new(),
        }
    }

    /// Opening seat for the next match.
    ///
    /// The first match is always a coin flip. Later ones follow the
    /// configured `FirstPlayerPolicy`.
    fn next_first(&mut self) -> PlayerId {
        match (self.config.first_player, self.last_active) {
            (FirstPlayerPolicy::Persist, Some(seat)) => seat,
            _ => PlayerId::both()[self.rng.gen_index(SEATS)],
        }
    }

    /// Play one match to completion and record it.
    pub fn play_match<F: Frontend + ?Sized>(
        &mut self,
        frontend: &mut F,
    ) -> Result<MatchResult, MatchError> {
        let first = self.next_first();
        let rng = self.rng.fork();

        let mut game = Match::new(&mut self.participants, self.config.clone(), rng, first);
        let result = game.play(frontend)?;
        self.last_active = Some(game.active());

        self.results.push(result);
        info!(
            "match {} won by {}",
            self.results.len(),
            self.participants[result.winner].name()
        );
        Ok(result)
    }

    /// Play matches until the frontend declines another, then report scores.
    pub fn run<F: Frontend + ?Sized>(&mut self, frontend: &mut F) -> Result<SessionSummary, MatchError> {
        loop {
            self.play_match(frontend)?;
            if !frontend.play_again()? {
                break;
            }
        }

        let summary = self.summary();
        frontend.notify(
            &MatchEvent::FinalScores {
                scores: summary.scores.clone(),
            },
            &self.participants,
        );
        Ok(summary)
    }

    #[must_use]
    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            matches_played: self.results.len(),
            scores: self
                .participants
                .iter()
                .map(|(_, p)| (p.name().to_string(), p.score()))
                .collect(),
        }
    }

    /// Cumulative wins per seat.
    #[must_use]
    pub fn scores(&self) -> PlayerMap<u32> {
        self.participants.map(Participant::score)
    }

    #[must_use]
    pub fn participants(&self) -> &PlayerMap<Participant> {
        &self.participants
    }

    #[must_use]
    pub fn results(&self) -> &[MatchResult] {
        &self.results
    }

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Position of the session rng, e.g. to checkpoint between matches.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::ScriptedFrontend;
    use crate::strategy::StrategyKind;

    fn bots() -> [Participant; 2] {
        [
            Participant::computer("Naive", StrategyKind::Random),
            Participant::computer("Strategic", StrategyKind::Optimal),
        ]
    }

    #[test]
    fn test_scores_accumulate() {
        let mut session = Session::new(bots(), MatchConfig::default(), GameRng::new(3));
        let mut fe = ScriptedFrontend::new().with_play_again([true, true]);

        let summary = session.run(&mut fe).unwrap();

        assert_eq!(summary.matches_played, 3);
        let total: u32 = summary.scores.iter().map(|(_, s)| s).sum();
        assert_eq!(total, 3);
        assert!(matches!(fe.events().last(), Some(MatchEvent::FinalScores { .. })));
    }

    #[test]
    fn test_persist_policy_reopens_with_loser() {
        let mut session = Session::new(bots(), MatchConfig::default(), GameRng::new(10));
        let mut fe = ScriptedFrontend::new();

        let first = session.play_match(&mut fe).unwrap();
        fe = ScriptedFrontend::new();
        session.play_match(&mut fe).unwrap();

        assert_eq!(
            fe.events()[0],
            MatchEvent::MatchStarted {
                pile: fe.events()[0].pile().unwrap(),
                first: first.loser,
            }
        );
    }

    #[test]
    fn test_same_seed_same_session() {
        let play = |seed| {
            let mut session = Session::new(bots(), MatchConfig::default(), GameRng::new(seed));
            let mut fe = ScriptedFrontend::new().with_play_again([true; 4]);
            session.run(&mut fe).unwrap();
            session.results().to_vec()
        };

        assert_eq!(play(21), play(21));
    }

    #[test]
    fn test_rng_state_resumes_session() {
        let mut session = Session::new(bots(), MatchConfig::default(), GameRng::new(6));
        session.play_match(&mut ScriptedFrontend::new()).unwrap();

        let resumed = GameRng::from_state(&session.rng_state());
        let config = MatchConfig::default().with_first_player(FirstPlayerPolicy::Random);
        let mut before = Session { config: config.clone(), last_active: None, ..session };
        let mut copy = Session::new(bots(), config, resumed);

        assert_eq!(
            before.play_match(&mut ScriptedFrontend::new()).unwrap(),
            copy.play_match(&mut ScriptedFrontend::new()).unwrap()
        );
    }
}
