//! Player identification and per-player registries.
//!
//! A game seats between [`MIN_PLAYERS`] and [`MAX_PLAYERS`] players, always
//! iterated in seating order. Per-player data (Vault wealth, the Adventurers
//! and Agents a player owns) lives in a [`PlayerMap`].

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Fewest players a game can be created with.
pub const MIN_PLAYERS: usize = 2;

/// Most players a game can be created with.
pub const MAX_PLAYERS: usize = 4;

/// Player identifier, 0-based in seating order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over every seat of a game with `player_count` players.
    ///
    /// ```
    /// use trade_winds::core::PlayerId;
    ///
    /// let seats: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(seats, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player storage with O(1) access by [`PlayerId`].
///
/// ```
/// use trade_winds::core::{PlayerId, PlayerMap};
///
/// let mut vaults: PlayerMap<u32> = PlayerMap::with_value(2, 0);
/// vaults[PlayerId::new(1)] += 12;
/// assert_eq!(vaults[PlayerId::new(1)], 12);
/// assert_eq!(vaults.iter().map(|(_, w)| *w).sum::<u32>(), 12);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a map with one value per seat produced by `factory`.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        Self {
            data: PlayerId::all(player_count).map(factory).collect(),
        }
    }

    /// Create a map with every seat set to `value`.
    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(player_count, |_| value.clone())
    }

    /// Create a map with default values.
    pub fn with_default(player_count: usize) -> Self
    where
        T: Default,
    {
        Self::new(player_count, |_| T::default())
    }

    /// Number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs in seating order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over (PlayerId, &mut T) pairs in seating order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over the values in seating order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p3 = PlayerId::new(3);

        assert_eq!(p0.index(), 0);
        assert_eq!(p3.index(), 3);
        assert_eq!(format!("{}", p3), "Player 3");
        assert!(p0 < p3);
    }

    #[test]
    fn test_player_map_new() {
        let map: PlayerMap<usize> = PlayerMap::new(4, |p| p.index() * 10);

        assert_eq!(map[PlayerId::new(0)], 0);
        assert_eq!(map[PlayerId::new(3)], 30);
        assert_eq!(map.player_count(), 4);
    }

    #[test]
    fn test_player_map_registries() {
        let mut adventurers: PlayerMap<Vec<u32>> = PlayerMap::with_default(2);

        adventurers[PlayerId::new(0)].push(1);
        adventurers[PlayerId::new(0)].push(2);

        assert_eq!(adventurers[PlayerId::new(0)].len(), 2);
        assert!(adventurers[PlayerId::new(1)].is_empty());
    }

    #[test]
    fn test_player_map_iter_in_seating_order() {
        let map: PlayerMap<u32> = PlayerMap::new(3, |p| 100 - p.0 as u32);

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs[0], (PlayerId::new(0), &100));
        assert_eq!(pairs[2], (PlayerId::new(2), &98));
        assert_eq!(map.values().copied().max(), Some(100));
    }

    #[test]
    fn test_player_map_serialization() {
        let map: PlayerMap<u32> = PlayerMap::new(2, |p| p.0 as u32 + 1);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PlayerMap<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }

    #[test]
    #[should_panic(expected = "Must have at least 1 player")]
    fn test_player_map_zero_players() {
        let _: PlayerMap<u32> = PlayerMap::with_value(0, 0);
    }
}
