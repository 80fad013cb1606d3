//! The board: a single shared pile.
//!
//! A move removes between 1 and half the pile (floor), with 1 always
//! allowed. Whoever empties the pile loses.

pub mod pile;

pub use pile::Pile;
