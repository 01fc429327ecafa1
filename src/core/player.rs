//! Player identification and the per-player record arena.
//!
//! ## PlayerId
//!
//! Seat index at the table, 0-based. Both games support 2-4 seats.
//!
//! ## PlayerMap
//!
//! `Vec`-backed arena with one record per seat. Controllers own the only
//! mutable `PlayerMap`; rule engines and bots receive `&PlayerMap`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Maximum number of seats at either table.
pub const MAX_PLAYERS: usize = 4;

/// Seat identifier.
///
/// Seat order is also turn order and board color order
/// (see [`PlayerColor::for_seat`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The seat after this one, wrapping at `player_count`.
    #[must_use]
    pub fn next(self, player_count: usize) -> Self {
        PlayerId(((self.index() + 1) % player_count.max(1)) as u8)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "P{}", self.0 + 1)
    }
}

/// Display color of a seat.
///
/// In Ludo the color also selects the token path around the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerColor {
    Red,
    Green,
    Blue,
    Yellow,
}

impl PlayerColor {
    /// Colors in seat order: clockwise from the top-left corner.
    pub const ALL: [PlayerColor; MAX_PLAYERS] = [
        PlayerColor::Red,
        PlayerColor::Green,
        PlayerColor::Blue,
        PlayerColor::Yellow,
    ];

    /// Color assigned to a seat.
    #[must_use]
    pub fn for_seat(player: PlayerId) -> Self {
        Self::ALL[player.index() % MAX_PLAYERS]
    }

    /// Upper-case display name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            PlayerColor::Red => "RED",
            PlayerColor::Green => "GREEN",
            PlayerColor::Blue => "BLUE",
            PlayerColor::Yellow => "YELLOW",
        }
    }
}

impl std::fmt::Display for PlayerColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-player record arena with O(1) access by [`PlayerId`].
///
/// ## Example
///
/// ```
/// use snald_engine::core::{PlayerId, PlayerMap};
///
/// let mut kills: PlayerMap<u32> = PlayerMap::new(4, |_| 0);
/// kills[PlayerId::new(2)] += 1;
/// assert_eq!(kills[PlayerId::new(2)], 1);
/// assert!(kills.try_get(PlayerId::new(7)).is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= MAX_PLAYERS, "At most 4 players supported");

        let data = (0..player_count as u8)
            .map(|i| factory(PlayerId(i)))
            .collect();

        Self { data }
    }

    /// Rebuild an arena from stored records, e.g. when restoring a snapshot.
    ///
    /// Returns `None` when the record count is not a valid table size.
    #[must_use]
    pub fn from_records(data: Vec<T>) -> Option<Self> {
        if data.is_empty() || data.len() > MAX_PLAYERS {
            return None;
        }
        Some(Self { data })
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a reference to a player's record.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's record.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Checked access for ids that arrive from outside the controller.
    #[must_use]
    pub fn try_get(&self, player: PlayerId) -> Option<&T> {
        self.data.get(player.index())
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Borrow the records in seat order.
    #[must_use]
    pub fn records(&self) -> &[T] {
        &self.data
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
        assert_eq!(format!("{}", p0), "P1");
    }

    #[test]
    fn test_player_id_next_wraps() {
        assert_eq!(PlayerId::new(0).next(3), PlayerId::new(1));
        assert_eq!(PlayerId::new(2).next(3), PlayerId::new(0));
    }

    #[test]
    fn test_color_for_seat() {
        assert_eq!(PlayerColor::for_seat(PlayerId::new(0)), PlayerColor::Red);
        assert_eq!(PlayerColor::for_seat(PlayerId::new(1)), PlayerColor::Green);
        assert_eq!(PlayerColor::for_seat(PlayerId::new(2)), PlayerColor::Blue);
        assert_eq!(PlayerColor::for_seat(PlayerId::new(3)), PlayerColor::Yellow);
        assert_eq!(PlayerColor::Blue.to_string(), "BLUE");
    }

    #[test]
    fn test_player_map_new() {
        let map: PlayerMap<i32> = PlayerMap::new(4, |p| p.index() as i32 * 10);

        assert_eq!(map[PlayerId::new(0)], 0);
        assert_eq!(map[PlayerId::new(3)], 30);
    }

    #[test]
    fn test_player_map_try_get_out_of_range() {
        let map: PlayerMap<i32> = PlayerMap::new(2, |_| 5);

        assert_eq!(map.try_get(PlayerId::new(1)), Some(&5));
        assert_eq!(map.try_get(PlayerId::new(2)), None);
    }

    #[test]
    fn test_player_map_from_records() {
        assert!(PlayerMap::<u8>::from_records(vec![]).is_none());
        assert!(PlayerMap::from_records(vec![1u8; 5]).is_none());

        let map = PlayerMap::from_records(vec![1u8, 2, 3]).unwrap();
        assert_eq!(map.player_count(), 3);
        assert_eq!(map[PlayerId::new(2)], 3);
    }

    #[test]
    fn test_player_map_iter() {
        let map: PlayerMap<i32> = PlayerMap::new(3, |p| p.index() as i32);

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs[0], (PlayerId::new(0), &0));
        assert_eq!(pairs[2], (PlayerId::new(2), &2));
    }

    #[test]
    fn test_player_map_serialization() {
        let map: PlayerMap<i32> = PlayerMap::new(2, |p| p.index() as i32 + 1);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PlayerMap<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }

    #[test]
    #[should_panic(expected = "At most 4 players supported")]
    fn test_player_map_too_many_players() {
        let _: PlayerMap<i32> = PlayerMap::new(5, |_| 0);
    }
}
