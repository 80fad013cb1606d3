//! Power-up catalog.
//!
//! Human participants are dealt one power-up per match and may trigger it
//! once. The effects themselves are applied by the match state machine:
//! - `DoubleTurn`: the active seat does not advance after this turn
//! - `AddPieces`: 1-5 pieces go back on the pile before the removal

pub mod catalog;

pub use catalog::PowerUp;
