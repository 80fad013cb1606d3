//! The match state machine.
//!
//! ## Lifecycle
//!
//! `NotStarted → Active → Terminated`
//!
//! A frontend failure during a turn moves the match to `Aborted`, with
//! whatever that turn already applied left in place.
//!
//! `start` deals a random pile and this match's power-ups. Each `play_turn`
//! then runs one iteration of the turn loop:
//!
//! 1. announce the turn (`TurnStarted`)
//! 2. offer the active participant's power-up, if one is held and unused
//! 3. apply it when accepted
//! 4. get a move, from the strategy or from the frontend (re-asked until legal)
//! 5. remove it from the pile
//! 6. on an empty pile, award the other seat a point and terminate;
//!    otherwise pass the turn, unless a Double Turn was just used

use im::Vector;
use log::{debug, info, warn};

use crate::board::Pile;
use crate::core::{
    parse_amount, GameRng, MatchConfig, MatchError, PlayerId, PlayerMap, TurnAction, TurnRecord,
    ADD_MAX, ADD_MIN,
};
use crate::participants::Participant;
use crate::powerups::PowerUp;
use crate::strategy::MoveStrategy;

use super::event::MatchEvent;
use super::frontend::{Frontend, MoveRequest};
use super::result::{MatchPhase, MatchResult, TurnOutcome};

/// One game, from a fresh pile to an empty one.
///
/// Borrows the session's participants so the end-of-match point lands on
/// their cumulative score directly.
pub struct Match<'a> {
    participants: &'a mut PlayerMap<Participant>,
    config: MatchConfig,
    rng: GameRng,
    pile: Pile,
    active: PlayerId,
    phase: MatchPhase,
    turn_number: u32,
    history: Vector<TurnRecord>,
}

impl<'a> Match<'a> {
    /// Create a match that `first` will open. Nothing is dealt until `start`.
    pub fn new(
        participants: &'a mut PlayerMap<Participant>,
        config: MatchConfig,
        rng: GameRng,
        first: PlayerId,
    ) -> Self {
        Self {
            participants,
            config,
            rng,
            pile: Pile::default(),
            active: first,
            phase: MatchPhase::NotStarted,
            turn_number: 0,
            history: Vector::new(),
        }
    }

    /// Deal a random pile and power-ups, then go active.
    pub fn start<F: Frontend + ?Sized>(&mut self, frontend: &mut F) -> Result<(), MatchError> {
        let pile = Pile::random(&mut self.rng);
        self.begin(pile, frontend)
    }

    /// Like `start`, but with a fixed pile count.
    ///
    /// Panics on an empty pile.
    pub fn start_with_pile<F: Frontend + ?Sized>(
        &mut self,
        count: u32,
        frontend: &mut F,
    ) -> Result<(), MatchError> {
        assert!(count > 0, "A match cannot start on an empty pile");
        self.begin(Pile::with_count(count), frontend)
    }

    fn begin<F: Frontend + ?Sized>(&mut self, pile: Pile, frontend: &mut F) -> Result<(), MatchError> {
        if self.phase != MatchPhase::NotStarted {
            return Err(MatchError::AlreadyStarted);
        }

        self.pile = pile;
        for (_, participant) in self.participants.iter_mut() {
            participant.assign_power_up(&mut self.rng, self.config.power_ups);
        }
        self.phase = MatchPhase::Active;

        info!(
            "match started: {} pieces, {} opens",
            self.pile.count(),
            self.participants[self.active].name()
        );
        self.emit(
            frontend,
            MatchEvent::MatchStarted {
                pile: self.pile.count(),
                first: self.active,
            },
        );

        let dealt: Vec<_> = self
            .participants
            .iter()
            .filter(|(_, p)| !p.power_up().is_none())
            .map(|(player, p)| (player, p.power_up()))
            .collect();
        for (player, power_up) in dealt {
            debug!("{} holds {}", self.participants[player].name(), power_up);
            self.emit(frontend, MatchEvent::PowerUpAssigned { player, power_up });
        }

        Ok(())
    }

    /// Start if needed, then play turns until the pile is empty.
    pub fn play<F: Frontend + ?Sized>(&mut self, frontend: &mut F) -> Result<MatchResult, MatchError> {
        if self.phase == MatchPhase::NotStarted {
            self.start(frontend)?;
        }
        loop {
            if let TurnOutcome::Finished(result) = self.play_turn(frontend)? {
                return Ok(result);
            }
        }
    }

    /// Run one turn of the active participant.
    ///
    /// A `MatchError::Frontend` ends the match: the phase becomes `Aborted`
    /// and later calls return `MatchError::NotActive`.
    pub fn play_turn<F: Frontend + ?Sized>(
        &mut self,
        frontend: &mut F,
    ) -> Result<TurnOutcome, MatchError> {
        if !self.phase.is_active() {
            return Err(MatchError::NotActive);
        }

        let outcome = self.run_turn(frontend);
        if let Err(MatchError::Frontend(error)) = &outcome {
            warn!("match aborted on turn {}: {}", self.turn_number, error);
            self.phase = MatchPhase::Aborted;
        }
        outcome
    }

    fn run_turn<F: Frontend + ?Sized>(
        &mut self,
        frontend: &mut F,
    ) -> Result<TurnOutcome, MatchError> {
        let player = self.active;
        self.turn_number += 1;
        debug!(
            "turn {}: {} to act on {}",
            self.turn_number,
            self.participants[player].name(),
            self.pile
        );
        self.emit(
            frontend,
            MatchEvent::TurnStarted {
                player,
                pile: self.pile.count(),
            },
        );

        let mut extra_turn = false;
        if self.participants[player].has_power_up() {
            let power_up = self.participants[player].power_up();
            if frontend.offer_power_up(&self.participants[player], power_up)? {
                extra_turn = self.activate_power_up(player, frontend)?;
            }
        }

        let amount = self.take_pieces(player, frontend)?;
        self.emit(
            frontend,
            MatchEvent::MoveTaken {
                player,
                amount,
                pile: self.pile.count(),
            },
        );

        if self.pile.is_empty() {
            return Ok(TurnOutcome::Finished(self.finish(player, frontend)));
        }

        if !extra_turn {
            self.active = player.opponent();
        }
        Ok(TurnOutcome::Continue { next: self.active })
    }

    /// Apply the held power-up. Returns true if the seat keeps the turn.
    fn activate_power_up<F: Frontend + ?Sized>(
        &mut self,
        player: PlayerId,
        frontend: &mut F,
    ) -> Result<bool, MatchError> {
        let Some(power_up) = self.participants[player].consume_power_up() else {
            return Ok(false);
        };
        info!("{} uses {}", self.participants[player].name(), power_up);
        self.emit(frontend, MatchEvent::PowerUpActivated { player, power_up });

        match power_up {
            PowerUp::DoubleTurn => {
                self.record(player, TurnAction::DoubleTurn, self.pile.count());
                Ok(true)
            }
            PowerUp::AddPieces => {
                let amount = loop {
                    let raw = frontend.request_add_amount(&self.participants[player], ADD_MIN, ADD_MAX)?;
                    match parse_amount(&raw, ADD_MIN, ADD_MAX) {
                        Ok(amount) => break amount,
                        Err(error) => {
                            debug!("rejected add amount from {}: {}", self.participants[player].name(), error);
                            self.emit(frontend, MatchEvent::MoveRejected { player, error });
                        }
                    }
                };
                let before = self.pile.count();
                let pile = self.pile.add(amount);
                self.record(player, TurnAction::AddPieces(amount), before);
                self.emit(frontend, MatchEvent::PiecesAdded { player, amount, pile });
                Ok(false)
            }
            PowerUp::None => Ok(false),
        }
    }

    /// Get a legal amount from the seat's strategy or frontend and remove it.
    fn take_pieces<F: Frontend + ?Sized>(
        &mut self,
        player: PlayerId,
        frontend: &mut F,
    ) -> Result<u32, MatchError> {
        loop {
            let proposal = match self.participants[player].strategy() {
                Some(kind) => Ok(kind.select_move(self.pile.count(), &mut self.rng)),
                None => {
                    let request = MoveRequest {
                        player,
                        participant: &self.participants[player],
                        pile: self.pile.count(),
                        min: 1,
                        max: self.pile.max_move(),
                    };
                    let raw = frontend.request_move(&request)?;
                    parse_amount(&raw, request.min, request.max)
                }
            };

            let before = self.pile.count();
            match proposal.and_then(|amount| self.pile.remove(amount).map(|_| amount)) {
                Ok(amount) => {
                    self.record(player, TurnAction::Remove(amount), before);
                    return Ok(amount);
                }
                Err(error) => {
                    debug!("rejected move from {}: {}", self.participants[player].name(), error);
                    self.emit(frontend, MatchEvent::MoveRejected { player, error });
                }
            }
        }
    }

    /// `loser` emptied the pile; the other seat scores.
    fn finish<F: Frontend + ?Sized>(&mut self, loser: PlayerId, frontend: &mut F) -> MatchResult {
        let winner = loser.opponent();
        self.participants[winner].add_points(1);

        let result = MatchResult {
            winner,
            loser,
            turns: self.turn_number,
        };
        self.phase = MatchPhase::Terminated(result);

        info!(
            "{} wins after {} turns",
            self.participants[winner].name(),
            self.turn_number
        );
        self.emit(frontend, MatchEvent::MatchWon { winner, loser });
        result
    }

    fn record(&mut self, player: PlayerId, action: TurnAction, pile_before: u32) {
        self.history.push_back(TurnRecord {
            turn: self.turn_number,
            player,
            action,
            pile_before,
            pile_after: self.pile.count(),
        });
    }

    fn emit<F: Frontend + ?Sized>(&self, frontend: &mut F, event: MatchEvent) {
        frontend.notify(&event, &*self.participants);
    }

    // === Accessors ===

    #[must_use]
    pub fn pile(&self) -> Pile {
        self.pile
    }

    /// Seat to act next. After termination, the seat that emptied the pile.
    #[must_use]
    pub fn active(&self) -> PlayerId {
        self.active
    }

    #[must_use]
    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    #[must_use]
    pub fn result(&self) -> Option<MatchResult> {
        self.phase.result()
    }

    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Every action taken so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<TurnRecord> {
        &self.history
    }

    #[must_use]
    pub fn participants(&self) -> &PlayerMap<Participant> {
        &*self.participants
    }

    /// Mutable access to a seat, e.g. to hand out a specific power-up after
    /// `start` has dealt random ones.
    pub fn participant_mut(&mut self, player: PlayerId) -> &mut Participant {
        &mut self.participants[player]
    }
}
