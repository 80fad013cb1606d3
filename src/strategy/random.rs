use log::trace;

use crate::core::GameRng;

use super::policy::MoveStrategy;

/// Uniform choice over every legal move.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomLegal;

impl MoveStrategy for RandomLegal {
    fn select_move(&self, count: u32, rng: &mut GameRng) -> u32 {
        let max_allowed = (count / 2).max(1);
        let amount = rng.gen_range_inclusive(1..=max_allowed);
        trace!("random strategy: pile {count}, takes {amount} of 1..={max_allowed}");
        amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forced_when_small() {
        let mut rng = GameRng::new(5);
        for count in 1..=3 {
            assert_eq!(RandomLegal.select_move(count, &mut rng), 1);
        }
    }

    #[test]
    fn test_covers_whole_range() {
        let mut rng = GameRng::new(5);
        let mut seen = [false; 5];
        for _ in 0..500 {
            let amount = RandomLegal.select_move(10, &mut rng);
            seen[amount as usize - 1] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
