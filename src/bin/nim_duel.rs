//! Play the pile game in a terminal, or pit two strategies against each other.
//!
//! ```text
//! nim-duel                       # asks for names and opponent
//! nim-duel --opponent optimal    # play against the strategic computer
//! nim-duel --simulate 10000      # optimal vs random, headless
//! ```

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, LevelFilter};

use nim_duel::console::TerminalFrontend;
use nim_duel::core::{FirstPlayerPolicy, GameRng, MatchConfig, PlayerId};
use nim_duel::participants::Participant;
use nim_duel::session::{simulate, Session};
use nim_duel::strategy::StrategyKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Opponent {
    /// Ask at startup.
    Ask,
    /// A second human at the same terminal.
    Human,
    /// Computer picking uniformly among legal moves.
    Random,
    /// Computer aiming for 2^k - 1 piles.
    Optimal,
}

#[derive(Parser, Debug)]
#[command(name = "nim-duel", about = "Take at most half the pile; whoever takes the last piece loses")]
struct Args {
    /// Seed for every random draw (pile sizes, power-ups, computer moves).
    #[arg(long)]
    seed: Option<u64>,

    /// Who plays the second seat.
    #[arg(long, value_enum, default_value_t = Opponent::Ask)]
    opponent: Opponent,

    /// Who opens matches after the first: `persist` (previous loser) or `random`.
    #[arg(long, default_value = "persist")]
    first_player: FirstPlayerPolicy,

    /// Do not deal power-ups.
    #[arg(long)]
    no_power_ups: bool,

    /// Run this many optimal-vs-random matches headless and print the tally.
    #[arg(long, value_name = "MATCHES")]
    simulate: Option<u32>,

    /// More log output (-v info, -vv debug, -vvv trace). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let rng = match args.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    info!("seed {}", rng.seed());

    let config = MatchConfig::new()
        .with_power_ups(!args.no_power_ups)
        .with_first_player(args.first_player);

    if let Some(matches) = args.simulate {
        let report = simulate([StrategyKind::Optimal, StrategyKind::Random], matches, config, rng.seed())
            .context("simulation failed")?;
        for seat in PlayerId::both() {
            println!(
                "{:>8}: {:>6} wins ({:.1}%)",
                report.strategies[seat].label(),
                report.wins[seat],
                report.win_rate(seat) * 100.0
            );
        }
        println!("average turns per match: {:.1}", report.average_turns());
        return Ok(());
    }

    let mut frontend = TerminalFrontend::new();
    let first = Participant::human(frontend.ask_text("Player 1, enter your name", "Player 1")?);

    let opponent = match args.opponent {
        Opponent::Ask => {
            if frontend.ask_yes_no("Would you like to play against the computer?", true)? {
                Opponent::Random
            } else {
                Opponent::Human
            }
        }
        other => other,
    };
    let second = match opponent {
        Opponent::Optimal => Participant::computer("Strategic Computer", StrategyKind::Optimal),
        Opponent::Random => Participant::computer("Computer", StrategyKind::Random),
        Opponent::Human | Opponent::Ask => {
            Participant::human(frontend.ask_text("Player 2, enter your name", "Player 2")?)
        }
    };

    let mut session = Session::new([first, second], config, rng);
    session.run(&mut frontend).context("game aborted")?;
    Ok(())
}
