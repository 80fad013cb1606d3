//! Core engine types: seats, turn records, RNG, configuration, errors.
//!
//! These are the building blocks every other module depends on.

pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod error;

pub use player::{PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
pub use config::{
    FirstPlayerPolicy, MatchConfig, ADD_MAX, ADD_MIN, PILE_MAX, PILE_MIN, SAFE_TARGETS, SEATS,
};
pub use action::{TurnAction, TurnRecord};
pub use error::{parse_amount, FrontendError, MatchError, MoveError};
