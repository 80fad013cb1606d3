//! One match of the game: state machine, outcome types, display events and
//! the frontend protocol.

pub mod event;
pub mod frontend;
pub mod result;
pub mod scripted;
pub mod state;

pub use event::MatchEvent;
pub use frontend::{Frontend, MoveRequest};
pub use result::{MatchPhase, MatchResult, TurnOutcome};
pub use scripted::{HeadlessFrontend, ScriptedFrontend};
pub use state::Match;
