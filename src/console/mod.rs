//! Console front-end (feature `cli`).

pub mod terminal;

pub use terminal::TerminalFrontend;
