use log::trace;

use crate::core::{GameRng, SAFE_TARGETS};

use super::policy::MoveStrategy;

/// Heuristic play toward pile sizes of the form 2^k - 1.
///
/// Leaves the largest value of `SAFE_TARGETS` below the current count when
/// that removal is legal. Otherwise it falls back to the biggest move that
/// does not leave a single piece for the opponent. The result depends only
/// on `count`; the rng is never read.
///
/// This is the classic strategy for the take-at-most-half game. It is not a
/// proven solver for the misère variant played here.
#[derive(Clone, Copy, Debug, Default)]
pub struct OptimalNim;

impl OptimalNim {
    /// Pile size the strategy tries to leave behind.
    #[must_use]
    pub fn target(count: u32) -> u32 {
        SAFE_TARGETS
            .iter()
            .rev()
            .copied()
            .find(|&t| t < count)
            .unwrap_or(1)
    }

    /// The move for a pile of `count`.
    ///
    /// Piles of 0 or 1 answer 1, the only amount that can ever be legal.
    #[must_use]
    pub fn compute(count: u32) -> u32 {
        if count <= 1 {
            return 1;
        }
        let max_allowed = (count / 2).max(1);
        let target = Self::target(count);
        let desired = count.saturating_sub(target);

        if desired == 0 || desired > max_allowed {
            if count - max_allowed == 1 && max_allowed > 1 {
                max_allowed - 1
            } else {
                max_allowed
            }
        } else {
            desired
        }
    }
}

impl MoveStrategy for OptimalNim {
    fn select_move(&self, count: u32, _rng: &mut GameRng) -> u32 {
        let amount = Self::compute(count);
        trace!(
            "optimal strategy: pile {count}, target {}, takes {amount}",
            Self::target(count)
        );
        amount
    }
}
