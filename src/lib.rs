//! # nim-duel
//!
//! Rules engine for a two-player pile-subtraction game (a misère Nim
//! variant) with optional power-ups.
//!
//! ## Rules
//!
//! - A match starts with 10-50 pieces.
//! - On your turn, take between 1 and half the pile (floor). Taking 1 is
//!   always allowed.
//! - Whoever takes the last piece loses; the other player scores a point.
//! - Each human is dealt one power-up per match, usable once:
//!   Double Turn (act again) or Add Pieces (put 1-5 back).
//!
//! ## Design Principles
//!
//! 1. **No ambient I/O**: the engine talks to players through the
//!    `Frontend` trait. Terminal, scripted and headless frontends all use
//!    the same protocol.
//!
//! 2. **Injected randomness**: every random draw goes through a seeded
//!    `GameRng`, so any session replays exactly from its seed.
//!
//! 3. **Explicit roles**: a participant is `Human` or
//!    `Computer(StrategyKind)` from construction. Names are never
//!    inspected.
//!
//! ## Modules
//!
//! - `core`: seats, RNG, configuration, turn records, errors
//! - `board`: the pile and move legality
//! - `powerups`: the power-up catalog
//! - `strategy`: random and optimal move selection
//! - `participants`: players, scores, power-up slots
//! - `game`: the match state machine and frontend protocol
//! - `session`: repeated matches and headless simulation
//! - `console`: terminal frontend (feature `cli`)

pub mod core;
pub mod board;
pub mod powerups;
pub mod strategy;
pub mod participants;
pub mod game;
pub mod session;
#[cfg(feature = "cli")]
pub mod console;

// Re-export commonly used types
pub use crate::core::{
    FirstPlayerPolicy, FrontendError, GameRng, GameRngState, MatchConfig, MatchError, MoveError,
    PlayerId, PlayerMap, TurnAction, TurnRecord,
};

pub use crate::board::Pile;

pub use crate::powerups::PowerUp;

pub use crate::strategy::{MoveStrategy, OptimalNim, RandomLegal, StrategyKind};

pub use crate::participants::{Participant, Role};

pub use crate::game::{
    Frontend, HeadlessFrontend, Match, MatchEvent, MatchPhase, MatchResult, MoveRequest,
    ScriptedFrontend, TurnOutcome,
};

pub use crate::session::{simulate, Session, SessionSummary, SimulationReport};
