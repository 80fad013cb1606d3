//! Move strategies: fixed scenarios and legality over many draws.

use nim_duel::board::Pile;
use nim_duel::core::{GameRng, MatchConfig, PlayerId, PlayerMap};
use nim_duel::game::{Match, ScriptedFrontend};
use nim_duel::participants::Participant;
use nim_duel::strategy::{MoveStrategy, OptimalNim, RandomLegal, StrategyKind};
use proptest::prelude::*;

/// Pile 7: the target 3 is out of reach, so take the maximum of 3.
#[test]
fn test_optimal_seven() {
    let mut rng = GameRng::new(0);
    assert_eq!(OptimalNim.select_move(7, &mut rng), 3);
}

/// Pile 4: take 1 to leave 3.
#[test]
fn test_optimal_four() {
    let mut rng = GameRng::new(0);
    assert_eq!(OptimalNim.select_move(4, &mut rng), 1);
}

/// Pile 1: forced to take the last piece.
#[test]
fn test_optimal_one() {
    let mut rng = GameRng::new(0);
    assert_eq!(OptimalNim.select_move(1, &mut rng), 1);
}

/// An empty pile answers the minimum instead of underflowing.
#[test]
fn test_optimal_empty_pile() {
    assert_eq!(OptimalNim::compute(0), 1);
    assert_eq!(OptimalNim::compute(1), 1);
}

/// The optimal strategy is a pure function of the count.
#[test]
fn test_optimal_is_deterministic() {
    let mut rng = GameRng::new(0);
    let first: Vec<_> = (1..=80).map(|c| OptimalNim.select_move(c, &mut rng)).collect();
    let second: Vec<_> = (1..=80).map(|c| OptimalNim.select_move(c, &mut rng)).collect();
    assert_eq!(first, second);
}

/// 10,000 random choices, each legal for its pile.
#[test]
fn test_random_always_legal() {
    let mut rng = GameRng::new(31337);
    for _ in 0..10_000 {
        let count = rng.gen_range_inclusive(1..=60);
        let amount = RandomLegal.select_move(count, &mut rng);
        assert!(
            Pile::with_count(count).is_legal_move(amount),
            "{amount} is illegal for a pile of {count}"
        );
    }
}

proptest! {
    /// Both strategies only ever propose legal moves.
    #[test]
    fn strategies_stay_legal(count in 1u32..=120, seed in any::<u64>()) {
        let mut rng = GameRng::new(seed);
        let pile = Pile::with_count(count);
        prop_assert!(pile.is_legal_move(StrategyKind::Optimal.select_move(count, &mut rng)));
        prop_assert!(pile.is_legal_move(StrategyKind::Random.select_move(count, &mut rng)));
    }
}

/// Leaving 2^k - 1 pieces is a forced win: the optimal player wins every
/// match it opens from any other starting pile, whatever random does.
#[test]
fn test_optimal_wins_from_every_winning_start() {
    for pile in 10..=50u32 {
        if (pile + 1).is_power_of_two() {
            continue;
        }
        for seed in 0..5 {
            let mut participants = PlayerMap::from_seats([
                Participant::computer("Strategic", StrategyKind::Optimal),
                Participant::computer("Naive", StrategyKind::Random),
            ]);
            let mut game = Match::new(
                &mut participants,
                MatchConfig::default(),
                GameRng::new(seed),
                PlayerId::new(0),
            );
            let mut fe = ScriptedFrontend::new();

            game.start_with_pile(pile, &mut fe).unwrap();
            let result = game.play(&mut fe).unwrap();

            assert_eq!(result.winner, PlayerId::new(0), "pile {pile}, seed {seed}");
        }
    }
}
