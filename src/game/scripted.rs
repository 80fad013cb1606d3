//! Non-interactive frontends.
//!
//! - `ScriptedFrontend`: replays queued answers and records every event.
//!   Used to drive exact scenarios in tests.
//! - `HeadlessFrontend`: for computer-only matches. It answers nothing and
//!   drops every event.

use std::collections::VecDeque;

use crate::core::{FrontendError, PlayerId, PlayerMap};
use crate::participants::Participant;
use crate::powerups::PowerUp;

use super::event::MatchEvent;
use super::frontend::{Frontend, MoveRequest};

/// Frontend that answers from queues.
///
/// Move and Add-Pieces replies fail with `FrontendError::Closed` once their
/// queue is empty. Power-up offers and play-again queries answer `false`
/// when their queue runs out.
#[derive(Clone, Debug, Default)]
pub struct ScriptedFrontend {
    moves: VecDeque<String>,
    offers: VecDeque<bool>,
    add_amounts: VecDeque<String>,
    play_again: VecDeque<bool>,
    events: Vec<MatchEvent>,
    move_requests: Vec<(PlayerId, u32, u32)>,
}

impl ScriptedFrontend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue raw move replies, in order.
    pub fn with_moves<I, S>(mut self, moves: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.moves.extend(moves.into_iter().map(Into::into));
        self
    }

    /// Queue power-up offer answers, in order.
    pub fn with_offers(mut self, offers: impl IntoIterator<Item = bool>) -> Self {
        self.offers.extend(offers);
        self
    }

    /// Queue raw Add-Pieces replies, in order.
    pub fn with_add_amounts<I, S>(mut self, amounts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_amounts.extend(amounts.into_iter().map(Into::into));
        self
    }

    /// Queue play-again answers, in order.
    pub fn with_play_again(mut self, answers: impl IntoIterator<Item = bool>) -> Self {
        self.play_again.extend(answers);
        self
    }

    /// Every event received so far.
    #[must_use]
    pub fn events(&self) -> &[MatchEvent] {
        &self.events
    }

    /// `(player, pile, max)` for every move request received so far.
    #[must_use]
    pub fn move_requests(&self) -> &[(PlayerId, u32, u32)] {
        &self.move_requests
    }

    /// Number of move replies not consumed yet.
    #[must_use]
    pub fn pending_moves(&self) -> usize {
        self.moves.len()
    }

    /// Seats of every `TurnStarted` event, in order.
    #[must_use]
    pub fn turn_order(&self) -> Vec<PlayerId> {
        self.events
            .iter()
            .filter_map(|e| match e {
                MatchEvent::TurnStarted { player, .. } => Some(*player),
                _ => None,
            })
            .collect()
    }
}

impl Frontend for ScriptedFrontend {
    fn request_move(&mut self, request: &MoveRequest<'_>) -> Result<String, FrontendError> {
        self.move_requests
            .push((request.player, request.pile, request.max));
        self.moves.pop_front().ok_or(FrontendError::Closed)
    }

    fn offer_power_up(
        &mut self,
        _participant: &Participant,
        _power_up: PowerUp,
    ) -> Result<bool, FrontendError> {
        Ok(self.offers.pop_front().unwrap_or(false))
    }

    fn request_add_amount(
        &mut self,
        _participant: &Participant,
        _min: u32,
        _max: u32,
    ) -> Result<String, FrontendError> {
        self.add_amounts.pop_front().ok_or(FrontendError::Closed)
    }

    fn play_again(&mut self) -> Result<bool, FrontendError> {
        Ok(self.play_again.pop_front().unwrap_or(false))
    }

    fn notify(&mut self, event: &MatchEvent, _participants: &PlayerMap<Participant>) {
        self.events.push(event.clone());
    }
}

/// Frontend for matches between computers.
///
/// Any question is answered with `FrontendError::Closed`, except power-up
/// offers, which are declined.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeadlessFrontend;

impl Frontend for HeadlessFrontend {
    fn request_move(&mut self, _request: &MoveRequest<'_>) -> Result<String, FrontendError> {
        Err(FrontendError::Closed)
    }

    fn offer_power_up(
        &mut self,
        _participant: &Participant,
        _power_up: PowerUp,
    ) -> Result<bool, FrontendError> {
        Ok(false)
    }

    fn request_add_amount(
        &mut self,
        _participant: &Participant,
        _min: u32,
        _max: u32,
    ) -> Result<String, FrontendError> {
        Err(FrontendError::Closed)
    }

    fn play_again(&mut self) -> Result<bool, FrontendError> {
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_queues_drain_in_order() {
        let alice = Participant::human("Alice");
        let mut fe = ScriptedFrontend::new()
            .with_moves(["2", "x"])
            .with_offers([true])
            .with_add_amounts(["4"]);

        let request = MoveRequest {
            player: PlayerId::new(0),
            participant: &alice,
            pile: 10,
            min: 1,
            max: 5,
        };

        assert_eq!(fe.request_move(&request), Ok("2".to_string()));
        assert_eq!(fe.request_move(&request), Ok("x".to_string()));
        assert_eq!(fe.request_move(&request), Err(FrontendError::Closed));
        assert_eq!(fe.move_requests().len(), 3);

        assert_eq!(fe.offer_power_up(&alice, PowerUp::AddPieces), Ok(true));
        assert_eq!(fe.offer_power_up(&alice, PowerUp::AddPieces), Ok(false));

        assert_eq!(fe.request_add_amount(&alice, 1, 5), Ok("4".to_string()));
        assert_eq!(fe.request_add_amount(&alice, 1, 5), Err(FrontendError::Closed));

        assert_eq!(fe.play_again(), Ok(false));
    }

    #[test]
    fn test_headless_refuses_input() {
        let alice = Participant::human("Alice");
        let mut fe = HeadlessFrontend;
        let request = MoveRequest {
            player: PlayerId::new(0),
            participant: &alice,
            pile: 10,
            min: 1,
            max: 5,
        };

        assert_eq!(fe.request_move(&request), Err(FrontendError::Closed));
        assert_eq!(fe.offer_power_up(&alice, PowerUp::DoubleTurn), Ok(false));
    }
}
