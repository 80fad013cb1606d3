//! Move selection for automated participants.
//!
//! Strategies are trait-based so a participant can be handed any of them:
//! - `RandomLegal`: uniform over `[1, max(1, count / 2)]`
//! - `OptimalNim`: deterministic, aims for pile sizes 2^k - 1
//!
//! `StrategyKind` is the serializable tag stored on a participant; it
//! dispatches to the matching implementation.

pub mod policy;
pub mod random;
pub mod optimal;

pub use policy::{MoveStrategy, StrategyKind};
pub use random::RandomLegal;
pub use optimal::OptimalNim;
