//! Turn actions and the recorded turn history.
//!
//! A turn produces one or two actions: an optional power-up activation
//! followed by the removal itself. Each is recorded with the pile count
//! before and after, which is enough to replay or audit a match.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// Something a participant did to the pile or the turn order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnAction {
    /// Took this many pieces from the pile.
    Remove(u32),
    /// Put this many pieces back (Add-Pieces power-up).
    AddPieces(u32),
    /// Claimed an extra turn (Double-Turn power-up).
    DoubleTurn,
}

impl TurnAction {
    /// Signed change this action makes to the pile.
    #[must_use]
    pub fn pile_delta(self) -> i64 {
        match self {
            TurnAction::Remove(n) => -i64::from(n),
            TurnAction::AddPieces(n) => i64::from(n),
            TurnAction::DoubleTurn => 0,
        }
    }
}

/// A recorded action with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// 1-based turn number within the match.
    pub turn: u32,
    /// Seat that acted.
    pub player: PlayerId,
    /// What it did.
    pub action: TurnAction,
    /// Pile count before the action.
    pub pile_before: u32,
    /// Pile count after the action.
    pub pile_after: u32,
}
