//! Sessions: a "play again?" loop around matches, plus headless simulation.

pub mod session;
pub mod simulate;

pub use session::{Session, SessionSummary};
pub use simulate::{simulate, SimulationReport};
