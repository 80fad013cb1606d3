//! Pile invariants under arbitrary inputs.

use nim_duel::board::Pile;
use nim_duel::core::{GameRng, MoveError, PILE_MAX, PILE_MIN};
use proptest::prelude::*;

proptest! {
    /// A move is legal iff it lies in [1, max(1, count / 2)].
    #[test]
    fn legal_iff_within_half(count in 1u32..=200, amount in 0u32..=210) {
        let pile = Pile::with_count(count);
        let max = (count / 2).max(1);
        prop_assert_eq!(pile.is_legal_move(amount), amount >= 1 && amount <= max);
    }

    /// Rejected removals leave the count untouched.
    #[test]
    fn illegal_remove_never_mutates(count in 1u32..=200, amount in 0u32..=400) {
        let mut pile = Pile::with_count(count);
        if !pile.is_legal_move(amount) {
            prop_assert!(pile.remove(amount).is_err());
            prop_assert_eq!(pile.count(), count);
        }
    }

    /// After legal removals the count is the start minus what was taken.
    #[test]
    fn legal_removals_add_up(start in 1u32..=100, picks in prop::collection::vec(any::<u32>(), 0..60)) {
        let mut pile = Pile::with_count(start);
        let mut taken = 0u32;

        for pick in picks {
            if pile.is_empty() {
                break;
            }
            let amount = 1 + pick % pile.max_move();
            prop_assert!(pile.remove(amount).is_ok());
            taken += amount;
            prop_assert_eq!(pile.count(), start - taken);
        }
    }
}

/// A single piece can always be taken, and taking it empties the pile.
#[test]
fn test_one_piece_always_takeable() {
    let mut pile = Pile::with_count(1);
    assert_eq!(pile.max_move(), 1);
    assert_eq!(pile.remove(1), Ok(0));
    assert!(pile.is_empty());
}

/// An empty pile accepts no removal and stays empty.
#[test]
fn test_empty_pile_remove_fails() {
    let mut pile = Pile::with_count(0);
    assert!(pile.remove(1).is_err());
    assert_eq!(pile.count(), 0);
}

/// The rejection reports the legal bounds.
#[test]
fn test_rejection_reports_range() {
    let mut pile = Pile::with_count(9);
    assert_eq!(
        pile.remove(5),
        Err(MoveError::OutOfRange { amount: 5, min: 1, max: 4 })
    );
}

/// Random piles cover the whole [10, 50] range.
#[test]
fn test_random_pile_range() {
    let mut rng = GameRng::new(2024);
    let counts: Vec<_> = (0..3000).map(|_| Pile::random(&mut rng).count()).collect();

    assert!(counts.iter().all(|c| (PILE_MIN..=PILE_MAX).contains(c)));
    assert!(counts.contains(&PILE_MIN));
    assert!(counts.contains(&PILE_MAX));
}
