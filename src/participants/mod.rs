//! Participants: humans driven by a frontend, or computers driven by a
//! `MoveStrategy`.

pub mod participant;

pub use participant::{Participant, Role};
