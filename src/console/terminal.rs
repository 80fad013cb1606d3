//! Interactive terminal frontend.

use std::io::ErrorKind;

use colored::Colorize;
use dialoguer::{Confirm, Input};

use crate::core::{FrontendError, PlayerMap};
use crate::game::{Frontend, MatchEvent, MoveRequest};
use crate::participants::Participant;
use crate::powerups::PowerUp;

fn map_err(err: dialoguer::Error) -> FrontendError {
    match err {
        dialoguer::Error::IO(io) if io.kind() == ErrorKind::UnexpectedEof => FrontendError::Closed,
        other => FrontendError::Io(other.to_string()),
    }
}

/// Prompts with `dialoguer` and prints events with `colored`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TerminalFrontend;

impl TerminalFrontend {
    pub fn new() -> Self {
        Self
    }

    /// Ask for a line of text. Used for player names at setup.
    pub fn ask_text(&mut self, prompt: &str, default: &str) -> Result<String, FrontendError> {
        Input::<String>::new()
            .with_prompt(prompt)
            .default(default.to_string())
            .interact_text()
            .map(|s| s.trim().to_string())
            .map_err(map_err)
    }

    /// Ask a yes/no question.
    pub fn ask_yes_no(&mut self, prompt: &str, default: bool) -> Result<bool, FrontendError> {
        Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()
            .map_err(map_err)
    }
}

impl Frontend for TerminalFrontend {
    fn request_move(&mut self, request: &MoveRequest<'_>) -> Result<String, FrontendError> {
        Input::<String>::new()
            .with_prompt(format!(
                "{}, how many pieces will you take? ({}-{})",
                request.participant.name(),
                request.min,
                request.max
            ))
            .interact_text()
            .map_err(map_err)
    }

    fn offer_power_up(
        &mut self,
        participant: &Participant,
        power_up: PowerUp,
    ) -> Result<bool, FrontendError> {
        println!(
            "{}, you have a {} power-up available: {}",
            participant.name(),
            power_up.name().magenta().bold(),
            power_up.description()
        );
        self.ask_yes_no("Would you like to use it?", false)
    }

    fn request_add_amount(
        &mut self,
        _participant: &Participant,
        min: u32,
        max: u32,
    ) -> Result<String, FrontendError> {
        Input::<String>::new()
            .with_prompt(format!("How many pieces would you like to add? ({min}-{max})"))
            .interact_text()
            .map_err(map_err)
    }

    fn play_again(&mut self) -> Result<bool, FrontendError> {
        self.ask_yes_no("Would you like to play again?", false)
    }

    fn notify(&mut self, event: &MatchEvent, participants: &PlayerMap<Participant>) {
        match event {
            MatchEvent::MatchStarted { pile, first } => {
                println!();
                println!("Starting new game with {} pieces", pile.to_string().bold());
                println!("{} goes first!", participants[*first].name().cyan());
            }
            MatchEvent::PowerUpAssigned { player, power_up } => {
                println!(
                    "{} received power-up: {} ({})",
                    participants[*player].name(),
                    power_up.name().magenta(),
                    power_up.description()
                );
            }
            MatchEvent::TurnStarted { player, pile } => {
                println!();
                println!("Current pile size: {}", pile.to_string().bold());
                println!("{}'s turn", participants[*player].name().cyan());
            }
            MatchEvent::PowerUpActivated { player, power_up } => {
                let banner = format!("*** {} ACTIVATED! ***", power_up.name().to_uppercase());
                println!("{}", banner.magenta().bold());
                if *power_up == PowerUp::DoubleTurn {
                    println!("{} will get another turn!", participants[*player].name());
                }
            }
            MatchEvent::PiecesAdded { amount, pile, .. } => {
                println!("{amount} pieces added to the pile, now {pile}");
            }
            MatchEvent::MoveTaken { player, amount, .. } => {
                if participants[*player].is_automated() {
                    println!("{} takes {} pieces", participants[*player].name(), amount);
                }
            }
            MatchEvent::MoveRejected { error, .. } => {
                println!("{} {}", "Invalid move!".red(), error);
            }
            MatchEvent::MatchWon { winner, loser } => {
                println!();
                println!(
                    "{} took the last piece. {} wins!",
                    participants[*loser].name(),
                    participants[*winner].name().green().bold()
                );
            }
            MatchEvent::FinalScores { scores } => {
                println!();
                println!("{}", "Final Scores:".bold());
                for (name, wins) in scores {
                    println!("{name}: {wins} wins");
                }
                println!("Thanks for playing!");
            }
        }
    }
}
