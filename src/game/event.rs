//! Display events.
//!
//! Events describe what happened during a match so a frontend can render
//! it. They are notifications only: the match never waits on them and a
//! frontend is free to ignore any of them.

use crate::core::{MoveError, PlayerId};
use crate::powerups::PowerUp;

/// Something a frontend may want to show.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MatchEvent {
    /// A fresh pile was set up and `first` opens.
    MatchStarted { pile: u32, first: PlayerId },

    /// A human was dealt a power-up for this match.
    PowerUpAssigned { player: PlayerId, power_up: PowerUp },

    /// `player` is about to act on a pile of `pile`.
    TurnStarted { player: PlayerId, pile: u32 },

    /// `player` triggered their power-up.
    PowerUpActivated { player: PlayerId, power_up: PowerUp },

    /// Add-Pieces resolved; `pile` is the new count.
    PiecesAdded { player: PlayerId, amount: u32, pile: u32 },

    /// `player` took `amount`; `pile` is what remains.
    MoveTaken { player: PlayerId, amount: u32, pile: u32 },

    /// A proposed amount was refused; the same request follows.
    MoveRejected { player: PlayerId, error: MoveError },

    /// The match ended: `loser` took the last piece.
    MatchWon { winner: PlayerId, loser: PlayerId },

    /// End of a session: names and cumulative wins in seat order.
    FinalScores { scores: Vec<(String, u32)> },
}

impl MatchEvent {
    /// The seat this event is about, if any.
    #[must_use]
    pub fn player(&self) -> Option<PlayerId> {
        match self {
            MatchEvent::MatchStarted { first, .. } => Some(*first),
            MatchEvent::PowerUpAssigned { player, .. }
            | MatchEvent::TurnStarted { player, .. }
            | MatchEvent::PowerUpActivated { player, .. }
            | MatchEvent::PiecesAdded { player, .. }
            | MatchEvent::MoveTaken { player, .. }
            | MatchEvent::MoveRejected { player, .. } => Some(*player),
            MatchEvent::MatchWon { winner, .. } => Some(*winner),
            MatchEvent::FinalScores { .. } => None,
        }
    }

    /// The pile count carried by this event, if any.
    #[must_use]
    pub fn pile(&self) -> Option<u32> {
        match self {
            MatchEvent::MatchStarted { pile, .. }
            | MatchEvent::TurnStarted { pile, .. }
            | MatchEvent::PiecesAdded { pile, .. }
            | MatchEvent::MoveTaken { pile, .. } => Some(*pile),
            _ => None,
        }
    }
}
