//! Seats and per-seat storage.
//!
//! A match always has exactly two seats, so `PlayerMap` is a fixed pair and
//! turn order is "the other seat".

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::config::SEATS;

/// One of the two seats, `0` or `1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(u8);

impl PlayerId {
    pub const FIRST: Self = Self(0);
    pub const SECOND: Self = Self(1);

    /// Panics if `seat` is not 0 or 1.
    #[must_use]
    pub const fn new(seat: u8) -> Self {
        assert!((seat as usize) < SEATS, "seat out of range");
        Self(seat)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The seat across the table.
    #[must_use]
    pub const fn opponent(self) -> Self {
        Self(1 - self.0)
    }

    /// Both seats in table order.
    pub fn both() -> [Self; SEATS] {
        [Self::FIRST, Self::SECOND]
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.0)
    }
}

/// One value per seat, indexed by `PlayerId`.
///
/// ```
/// use nim_duel::core::{PlayerId, PlayerMap};
///
/// let mut wins = PlayerMap::from_seats([0u32, 0]);
/// wins[PlayerId::SECOND] += 1;
/// assert_eq!(wins[PlayerId::SECOND], 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    seats: [T; SEATS],
}

impl<T> PlayerMap<T> {
    /// Build each seat's value from its id.
    pub fn new(mut factory: impl FnMut(PlayerId) -> T) -> Self {
        Self {
            seats: PlayerId::both().map(&mut factory),
        }
    }

    /// Values in seat order.
    pub fn from_seats(seats: [T; SEATS]) -> Self {
        Self { seats }
    }

    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::both().into_iter().zip(self.seats.iter())
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        PlayerId::both().into_iter().zip(self.seats.iter_mut())
    }

    /// Apply `f` to both seats.
    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> PlayerMap<U> {
        PlayerMap::new(|seat| f(&self[seat]))
    }
}

impl<T> From<[T; SEATS]> for PlayerMap<T> {
    fn from(seats: [T; SEATS]) -> Self {
        Self::from_seats(seats)
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &T {
        &self.seats[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.seats[player.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_alternates() {
        assert_eq!(PlayerId::FIRST.opponent(), PlayerId::SECOND);
        assert_eq!(PlayerId::SECOND.opponent(), PlayerId::FIRST);
        assert_eq!(PlayerId::new(1).opponent().opponent(), PlayerId::new(1));
        assert_eq!(PlayerId::SECOND.to_string(), "Seat 1");
    }

    #[test]
    #[should_panic(expected = "seat out of range")]
    fn test_third_seat_panics() {
        let _ = PlayerId::new(2);
    }

    #[test]
    fn test_map_by_seat() {
        let mut names = PlayerMap::from_seats(["Alice", "Bob"]);
        assert_eq!(names[PlayerId::SECOND], "Bob");

        names[PlayerId::FIRST] = "Carol";
        let lengths = names.map(|n| n.len());
        assert_eq!(lengths, PlayerMap::from_seats([5, 3]));
    }

    #[test]
    fn test_iter_pairs_seats_in_order() {
        let mut scores = PlayerMap::new(|seat| seat.index() as u32 * 10);
        for (_, s) in scores.iter_mut() {
            *s += 1;
        }

        let pairs: Vec<_> = scores.iter().collect();
        assert_eq!(pairs, vec![(PlayerId::FIRST, &1), (PlayerId::SECOND, &11)]);
    }
}
