//! The I/O boundary between the rules engine and whoever plays.
//!
//! A match never touches the terminal. At each decision point it calls into
//! a `Frontend`:
//! - `request_move`: how many pieces a human takes
//! - `offer_power_up`: whether to trigger the held power-up now
//! - `request_add_amount`: how many pieces Add-Pieces puts back
//! - `play_again`: whether the session continues
//!
//! Replies for amounts are raw text. The engine parses and validates them
//! and asks again on anything illegal, so a frontend never needs to know
//! the rules.

use crate::core::{FrontendError, PlayerId, PlayerMap};
use crate::participants::Participant;
use crate::powerups::PowerUp;

use super::event::MatchEvent;

/// A request for a human's move.
#[derive(Clone, Copy, Debug)]
pub struct MoveRequest<'a> {
    /// Seat being asked.
    pub player: PlayerId,
    /// The participant in that seat.
    pub participant: &'a Participant,
    /// Current pile count.
    pub pile: u32,
    /// Smallest legal amount (always 1).
    pub min: u32,
    /// Largest legal amount, `max(1, pile / 2)`.
    pub max: u32,
}

/// Decision and display callbacks used by `Match` and `Session`.
pub trait Frontend {
    /// Ask a human how many pieces to take.
    fn request_move(&mut self, request: &MoveRequest<'_>) -> Result<String, FrontendError>;

    /// Offer the held power-up. `true` triggers it before this turn's move.
    fn offer_power_up(
        &mut self,
        participant: &Participant,
        power_up: PowerUp,
    ) -> Result<bool, FrontendError>;

    /// Ask how many pieces Add-Pieces should put back, within `[min, max]`.
    fn request_add_amount(
        &mut self,
        participant: &Participant,
        min: u32,
        max: u32,
    ) -> Result<String, FrontendError>;

    /// Ask whether to play another match.
    fn play_again(&mut self) -> Result<bool, FrontendError>;

    /// Fire-and-forget display hook.
    fn notify(&mut self, _event: &MatchEvent, _participants: &PlayerMap<Participant>) {}
}

impl<F: Frontend + ?Sized> Frontend for &mut F {
    fn request_move(&mut self, request: &MoveRequest<'_>) -> Result<String, FrontendError> {
        (**self).request_move(request)
    }

    fn offer_power_up(
        &mut self,
        participant: &Participant,
        power_up: PowerUp,
    ) -> Result<bool, FrontendError> {
        (**self).offer_power_up(participant, power_up)
    }

    fn request_add_amount(
        &mut self,
        participant: &Participant,
        min: u32,
        max: u32,
    ) -> Result<String, FrontendError> {
        (**self).request_add_amount(participant, min, max)
    }

    fn play_again(&mut self) -> Result<bool, FrontendError> {
        (**self).play_again()
    }

    fn notify(&mut self, event: &MatchEvent, participants: &PlayerMap<Participant>) {
        (**self).notify(event, participants)
    }
}
