//! Snakes & Ladders player records and the shared hunter.

use serde::{Deserialize, Serialize};

use crate::board::snald::{BOARD_SIZE, START_SQUARE};
use crate::core::{PlayerColor, PlayerId};

/// One seat's single token plus its counters.
///
/// Mutators are crate-private: only the controller changes a record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnaldPlayer {
    id: PlayerId,
    color: PlayerColor,
    square: u8,
    stars: u8,
    kills: u32,
    deaths: u32,
    rank: Option<u8>,
}

impl SnaldPlayer {
    /// A fresh token on the start square.
    #[must_use]
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            color: PlayerColor::for_seat(id),
            square: START_SQUARE,
            stars: 0,
            kills: 0,
            deaths: 0,
            rank: None,
        }
    }

    /// A token already on `square` holding `stars`.
    #[must_use]
    pub fn at(id: PlayerId, square: u8, stars: u8) -> Self {
        Self {
            square: square.clamp(START_SQUARE, BOARD_SIZE),
            stars,
            ..Self::new(id)
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn color(&self) -> PlayerColor {
        self.color
    }

    /// Current square, `1..=100`.
    #[must_use]
    pub fn square(&self) -> u8 {
        self.square
    }

    /// Stars held. Each star is one shield charge.
    #[must_use]
    pub fn stars(&self) -> u8 {
        self.stars
    }

    #[must_use]
    pub fn has_shield(&self) -> bool {
        self.stars >= 1
    }

    #[must_use]
    pub fn kills(&self) -> u32 {
        self.kills
    }

    #[must_use]
    pub fn deaths(&self) -> u32 {
        self.deaths
    }

    /// Finishing rank, once the token reached square 100.
    #[must_use]
    pub fn rank(&self) -> Option<u8> {
        self.rank
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.square == BOARD_SIZE
    }

    /// Move the token. A finished token never moves again.
    pub(crate) fn set_square(&mut self, square: u8) {
        if self.is_finished() {
            return;
        }
        self.square = square.clamp(START_SQUARE, BOARD_SIZE);
    }

    pub(crate) fn set_stars(&mut self, stars: u8) {
        self.stars = stars;
    }

    /// Spend one shield charge. Returns false when none was held.
    pub(crate) fn consume_star(&mut self) -> bool {
        if self.stars == 0 {
            return false;
        }
        self.stars -= 1;
        true
    }

    pub(crate) fn record_kill(&mut self) {
        self.kills += 1;
    }

    /// Send the token back to the start square.
    pub(crate) fn send_to_start(&mut self) {
        if self.is_finished() {
            return;
        }
        self.square = START_SQUARE;
        self.deaths += 1;
    }

    pub(crate) fn set_rank(&mut self, rank: u8) {
        self.rank = Some(rank);
    }
}

/// The single circulating hunter token.
///
/// The controller stores this as `Option<Hunter>`, so a second hunter can
/// never exist alongside the first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hunter {
    owner: PlayerId,
    square: u8,
}

impl Hunter {
    /// Spawn for `owner` at the far end of the board.
    #[must_use]
    pub fn spawn(owner: PlayerId) -> Self {
        Self {
            owner,
            square: BOARD_SIZE,
        }
    }

    /// Rebuild a hunter at a stored square, e.g. from a snapshot.
    #[must_use]
    pub fn at(owner: PlayerId, square: u8) -> Self {
        Self {
            owner,
            square: square.clamp(START_SQUARE, BOARD_SIZE),
        }
    }

    #[must_use]
    pub fn owner(&self) -> PlayerId {
        self.owner
    }

    #[must_use]
    pub fn square(&self) -> u8 {
        self.square
    }

    pub(crate) fn set_square(&mut self, square: u8) {
        self.square = square.clamp(START_SQUARE, BOARD_SIZE);
    }
}
