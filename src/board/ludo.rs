//! Ludo board: a 15x15 grid with four colored paths.
//!
//! ## Position convention
//!
//! Every token is in exactly one of three places:
//!
//! | `TokenPos`    | integer view | meaning                          |
//! |---------------|--------------|----------------------------------|
//! | `Base`        | `-1`         | waiting in the corner base       |
//! | `Track(0..=50)` | `0..=50`   | shared outer track               |
//! | `Track(51..=55)`| `51..=55`  | private home stretch             |
//! | `Home`        | `56`         | finished, terminal               |
//!
//! Each colored path has [`PATH_LEN`] = 57 entries; index 56 is the center
//! home square. Coordinates are `(column, row)` with `(0, 0)` top-left.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::{PlayerColor, PlayerId};

/// Entries per colored path, including the home square.
pub const PATH_LEN: usize = 57;

/// Path index of the home square.
pub const HOME_INDEX: u8 = 56;

/// Last path index on the shared outer track.
pub const LAST_OUTER_INDEX: u8 = 50;

/// First path index of the private home stretch.
pub const HOME_STRETCH_START: u8 = 51;

/// A square on the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub col: u8,
    pub row: u8,
}

impl Coord {
    #[must_use]
    pub const fn new(col: u8, row: u8) -> Self {
        Self { col, row }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

/// Where a Ludo token is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenPos {
    /// In the corner base, not yet spawned.
    #[default]
    Base,
    /// On the path at an index in `0..=55`.
    Track(u8),
    /// Finished. Nothing moves a token out of `Home`.
    Home,
}

impl TokenPos {
    /// Integer view: `-1` base, `0..=55` track, `56` home.
    #[must_use]
    pub fn index(self) -> i32 {
        match self {
            TokenPos::Base => -1,
            TokenPos::Track(i) => i32::from(i),
            TokenPos::Home => i32::from(HOME_INDEX),
        }
    }

    /// Inverse of [`TokenPos::index`]. Returns `None` outside `-1..=56`.
    #[must_use]
    pub fn from_index(index: i32) -> Option<Self> {
        match index {
            -1 => Some(TokenPos::Base),
            i if (0..i32::from(HOME_INDEX)).contains(&i) => Some(TokenPos::Track(i as u8)),
            i if i == i32::from(HOME_INDEX) => Some(TokenPos::Home),
            _ => None,
        }
    }

    /// On the shared outer track, where tokens can meet.
    #[must_use]
    pub fn is_on_outer_track(self) -> bool {
        matches!(self, TokenPos::Track(i) if i <= LAST_OUTER_INDEX)
    }

    /// Anywhere on the path, excluding base and home.
    #[must_use]
    pub fn is_on_track(self) -> bool {
        matches!(self, TokenPos::Track(_))
    }
}

type RawPath = [(u8, u8); PATH_LEN];

const PATH_RED: RawPath = [
    (1, 6), (2, 6), (3, 6), (4, 6), (5, 6),
    (6, 5), (6, 4), (6, 3), (6, 2), (6, 1), (6, 0),
    (7, 0), (8, 0),
    (8, 1), (8, 2), (8, 3), (8, 4), (8, 5),
    (9, 6), (10, 6), (11, 6), (12, 6), (13, 6), (14, 6),
    (14, 7), (14, 8),
    (13, 8), (12, 8), (11, 8), (10, 8), (9, 8),
    (8, 9), (8, 10), (8, 11), (8, 12), (8, 13), (8, 14),
    (7, 14), (6, 14),
    (6, 13), (6, 12), (6, 11), (6, 10), (6, 9),
    (5, 8), (4, 8), (3, 8), (2, 8), (1, 8), (0, 8),
    (0, 7),
    (1, 7), (2, 7), (3, 7), (4, 7), (5, 7), (6, 7),
];

const PATH_GREEN: RawPath = [
    (8, 1), (8, 2), (8, 3), (8, 4), (8, 5),
    (9, 6), (10, 6), (11, 6), (12, 6), (13, 6), (14, 6),
    (14, 7), (14, 8),
    (13, 8), (12, 8), (11, 8), (10, 8), (9, 8),
    (8, 9), (8, 10), (8, 11), (8, 12), (8, 13), (8, 14),
    (7, 14), (6, 14),
    (6, 13), (6, 12), (6, 11), (6, 10), (6, 9),
    (5, 8), (4, 8), (3, 8), (2, 8), (1, 8), (0, 8),
    (0, 7), (0, 6),
    (1, 6), (2, 6), (3, 6), (4, 6), (5, 6),
    (6, 5), (6, 4), (6, 3), (6, 2), (6, 1), (6, 0),
    (7, 0),
    (7, 1), (7, 2), (7, 3), (7, 4), (7, 5), (7, 6),
];

const PATH_BLUE: RawPath = [
    (13, 8), (12, 8), (11, 8), (10, 8), (9, 8),
    (8, 9), (8, 10), (8, 11), (8, 12), (8, 13), (8, 14),
    (7, 14), (6, 14),
    (6, 13), (6, 12), (6, 11), (6, 10), (6, 9),
    (5, 8), (4, 8), (3, 8), (2, 8), (1, 8), (0, 8),
    (0, 7), (0, 6),
    (1, 6), (2, 6), (3, 6), (4, 6), (5, 6),
    (6, 5), (6, 4), (6, 3), (6, 2), (6, 1), (6, 0),
    (7, 0), (8, 0),
    (8, 1), (8, 2), (8, 3), (8, 4), (8, 5),
    (9, 6), (10, 6), (11, 6), (12, 6), (13, 6), (14, 6),
    (14, 7),
    (13, 7), (12, 7), (11, 7), (10, 7), (9, 7), (8, 7),
];

const PATH_YELLOW: RawPath = [
    (6, 13), (6, 12), (6, 11), (6, 10), (6, 9),
    (5, 8), (4, 8), (3, 8), (2, 8), (1, 8), (0, 8),
    (0, 7), (0, 6),
    (1, 6), (2, 6), (3, 6), (4, 6), (5, 6),
    (6, 5), (6, 4), (6, 3), (6, 2), (6, 1), (6, 0),
    (7, 0), (8, 0),
    (8, 1), (8, 2), (8, 3), (8, 4), (8, 5),
    (9, 6), (10, 6), (11, 6), (12, 6), (13, 6), (14, 6),
    (14, 7), (14, 8),
    (13, 8), (12, 8), (11, 8), (10, 8), (9, 8),
    (8, 9), (8, 10), (8, 11), (8, 12), (8, 13), (8, 14),
    (7, 14),
    (7, 13), (7, 12), (7, 11), (7, 10), (7, 9), (7, 8),
];

/// Static safe squares: the four start squares and the four star squares
/// eight steps beyond them.
pub const STATIC_SAFE_ZONES: [Coord; 8] = [
    Coord::new(1, 6),
    Coord::new(6, 2),
    Coord::new(8, 1),
    Coord::new(12, 6),
    Coord::new(13, 8),
    Coord::new(8, 12),
    Coord::new(6, 13),
    Coord::new(2, 8),
];

fn raw_path(color: PlayerColor) -> &'static RawPath {
    match color {
        PlayerColor::Red => &PATH_RED,
        PlayerColor::Green => &PATH_GREEN,
        PlayerColor::Blue => &PATH_BLUE,
        PlayerColor::Yellow => &PATH_YELLOW,
    }
}

/// Grid coordinate of `index` along `color`'s path.
#[must_use]
pub fn path_coord(color: PlayerColor, index: u8) -> Option<Coord> {
    raw_path(color)
        .get(usize::from(index))
        .map(|&(col, row)| Coord::new(col, row))
}

/// Grid coordinate of a token, or `None` while it sits in base.
#[must_use]
pub fn global_coord(player: PlayerId, pos: TokenPos) -> Option<Coord> {
    let color = PlayerColor::for_seat(player);
    match pos {
        TokenPos::Base => None,
        TokenPos::Track(i) => path_coord(color, i),
        TokenPos::Home => path_coord(color, HOME_INDEX),
    }
}

#[must_use]
pub fn is_static_safe(coord: Coord) -> bool {
    STATIC_SAFE_ZONES.contains(&coord)
}

/// Every coordinate of the shared outer track (52 squares).
#[must_use]
pub fn outer_track() -> FxHashSet<Coord> {
    PlayerColor::ALL
        .iter()
        .flat_map(|&color| {
            raw_path(color)[..=usize::from(LAST_OUTER_INDEX)]
                .iter()
                .map(|&(col, row)| Coord::new(col, row))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_pos_index_round_trip_edges() {
        assert_eq!(TokenPos::Base.index(), -1);
        assert_eq!(TokenPos::Home.index(), 56);
        assert_eq!(TokenPos::from_index(-1), Some(TokenPos::Base));
        assert_eq!(TokenPos::from_index(0), Some(TokenPos::Track(0)));
        assert_eq!(TokenPos::from_index(55), Some(TokenPos::Track(55)));
        assert_eq!(TokenPos::from_index(56), Some(TokenPos::Home));
        assert_eq!(TokenPos::from_index(57), None);
        assert_eq!(TokenPos::from_index(-2), None);
    }

    #[test]
    fn test_outer_track_membership() {
        assert!(TokenPos::Track(0).is_on_outer_track());
        assert!(TokenPos::Track(50).is_on_outer_track());
        assert!(!TokenPos::Track(51).is_on_outer_track());
        assert!(!TokenPos::Base.is_on_outer_track());
        assert!(!TokenPos::Home.is_on_outer_track());
    }

    #[test]
    fn test_outer_track_has_52_squares() {
        assert_eq!(outer_track().len(), 52);
    }

    #[test]
    fn test_home_stretches_are_private() {
        let track = outer_track();
        for color in PlayerColor::ALL {
            for i in HOME_STRETCH_START..=HOME_INDEX {
                let coord = path_coord(color, i).unwrap();
                assert!(!track.contains(&coord), "{color} stretch {i} leaks onto the track");
            }
        }
    }

    #[test]
    fn test_paths_share_the_track() {
        // Red's square 13 steps in is Green's start.
        assert_eq!(path_coord(PlayerColor::Red, 13), path_coord(PlayerColor::Green, 0));
        assert_eq!(path_coord(PlayerColor::Green, 13), path_coord(PlayerColor::Blue, 0));
        assert_eq!(path_coord(PlayerColor::Blue, 13), path_coord(PlayerColor::Yellow, 0));
        assert_eq!(path_coord(PlayerColor::Yellow, 13), path_coord(PlayerColor::Red, 0));
    }

    #[test]
    fn test_safe_zones_on_track() {
        let track = outer_track();
        for coord in STATIC_SAFE_ZONES {
            assert!(track.contains(&coord), "{coord} is not on the track");
        }
        for color in PlayerColor::ALL {
            assert!(is_static_safe(path_coord(color, 0).unwrap()));
            assert!(is_static_safe(path_coord(color, 8).unwrap()));
        }
    }

    #[test]
    fn test_global_coord() {
        let red = PlayerId::new(0);
        assert_eq!(global_coord(red, TokenPos::Base), None);
        assert_eq!(global_coord(red, TokenPos::Track(0)), Some(Coord::new(1, 6)));
        assert_eq!(global_coord(red, TokenPos::Home), Some(Coord::new(6, 7)));
    }

    #[test]
    fn test_path_coord_out_of_range() {
        assert_eq!(path_coord(PlayerColor::Red, 57), None);
    }
}
