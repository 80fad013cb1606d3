//! Match outcome types.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Result of a completed match.
///
/// There are no draws: whoever takes the last piece loses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Seat that was awarded the point.
    pub winner: PlayerId,
    /// Seat that emptied the pile.
    pub loser: PlayerId,
    /// Turns played, extra turns included.
    pub turns: u32,
}

impl MatchResult {
    /// Check if a seat won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winner == player
    }
}

/// Where a match stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Created, pile not set up yet.
    NotStarted,
    /// Turns are being played.
    Active,
    /// The pile is empty.
    Terminated(MatchResult),
    /// A frontend stopped answering mid-match. No point was awarded.
    Aborted,
}

impl MatchPhase {
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self, MatchPhase::Active)
    }

    #[must_use]
    pub fn result(&self) -> Option<MatchResult> {
        match self {
            MatchPhase::Terminated(result) => Some(*result),
            _ => None,
        }
    }
}

/// What a single call to `Match::play_turn` led to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The match goes on with `next` to act.
    Continue { next: PlayerId },
    /// The pile was emptied.
    Finished(MatchResult),
}
