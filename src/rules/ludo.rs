//! Ludo move adjudication.
//!
//! The engine reads the player arena and the current dynamic safe zone and
//! returns one [`LudoOutcome`]. It never mutates anything; `LudoGame` applies
//! the outcome.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::ludo::{self, Coord, TokenPos, HOME_INDEX, HOME_STRETCH_START};
use crate::core::{PlayerId, PlayerMap, SoundCue};
use crate::roster::LudoPlayer;

/// Indices of tokens with a legal move.
pub type LegalTokens = SmallVec<[usize; 4]>;

/// Roll that always releases a token from base.
pub const SPAWN_ROLL: u8 = 6;

/// Roll that releases a token only when none is on the path.
pub const DESPERATION_ROLL: u8 = 1;

/// Result of moving one token by one roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LudoOutcome {
    /// The token cannot move.
    Invalid,
    /// Plain move.
    MoveOnly { to: TokenPos },
    /// A lone unshielded enemy is sent back to base.
    Kill {
        to: TokenPos,
        victim_player: PlayerId,
        victim_token: usize,
    },
    /// A lone shielded enemy loses its shield and stays put.
    ShieldBreak {
        to: TokenPos,
        victim_player: PlayerId,
        victim_token: usize,
    },
    /// The token reaches home.
    Win,
    /// Shares a block or a static safe square with enemies.
    SafeStack { to: TokenPos },
    /// Lands alone on a static safe square.
    SafeZoneLanded { to: TokenPos },
    /// Lands on the dynamic safe zone and earns a shield.
    StarCollected { to: TokenPos, zone: Coord },
}

impl LudoOutcome {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !matches!(self, LudoOutcome::Invalid)
    }

    /// Where the moving token ends up, or `None` for `Invalid`.
    #[must_use]
    pub fn destination(&self) -> Option<TokenPos> {
        match *self {
            LudoOutcome::Invalid => None,
            LudoOutcome::Win => Some(TokenPos::Home),
            LudoOutcome::MoveOnly { to }
            | LudoOutcome::Kill { to, .. }
            | LudoOutcome::ShieldBreak { to, .. }
            | LudoOutcome::SafeStack { to }
            | LudoOutcome::SafeZoneLanded { to }
            | LudoOutcome::StarCollected { to, .. } => Some(to),
        }
    }

    /// Kills and reaching home earn another roll. Rolling a six is tracked
    /// by the controller.
    #[must_use]
    pub fn grants_extra_turn(&self) -> bool {
        matches!(self, LudoOutcome::Kill { .. } | LudoOutcome::Win)
    }

    #[must_use]
    pub fn sound(&self) -> SoundCue {
        match self {
            LudoOutcome::Invalid | LudoOutcome::MoveOnly { .. } => SoundCue::None,
            LudoOutcome::Kill { .. } => SoundCue::Kill,
            LudoOutcome::ShieldBreak { .. } => SoundCue::ShieldBreak,
            LudoOutcome::Win => SoundCue::Win,
            LudoOutcome::SafeStack { .. } | LudoOutcome::SafeZoneLanded { .. } => SoundCue::Safe,
            LudoOutcome::StarCollected { .. } => SoundCue::StarCollect,
        }
    }
}

/// Stateless Ludo rules.
#[derive(Clone, Copy, Debug, Default)]
pub struct LudoRuleEngine;

impl LudoRuleEngine {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Adjudicate moving `player`'s token `token` from `current` by `roll`.
    #[must_use]
    pub fn calculate_move(
        &self,
        player: PlayerId,
        token: usize,
        current: TokenPos,
        roll: u8,
        players: &PlayerMap<LudoPlayer>,
        dynamic_zone: Option<Coord>,
    ) -> LudoOutcome {
        let exists = players
            .try_get(player)
            .map_or(false, |p| token < p.token_count());
        if !exists {
            return LudoOutcome::Invalid;
        }

        match current {
            TokenPos::Home => LudoOutcome::Invalid,
            TokenPos::Base => self.spawn(player, roll, players),
            TokenPos::Track(index) => {
                let target = u16::from(index) + u16::from(roll);
                if target > u16::from(HOME_INDEX) {
                    return LudoOutcome::Invalid;
                }
                if target == u16::from(HOME_INDEX) {
                    return LudoOutcome::Win;
                }

                let to = TokenPos::Track(target as u8);
                if target >= u16::from(HOME_STRETCH_START) {
                    return LudoOutcome::MoveOnly { to };
                }

                self.land(player, to, players, dynamic_zone)
            }
        }
    }

    /// Token indices of `player` that can move with `roll`.
    #[must_use]
    pub fn legal_tokens(
        &self,
        player: PlayerId,
        roll: u8,
        players: &PlayerMap<LudoPlayer>,
        dynamic_zone: Option<Coord>,
    ) -> LegalTokens {
        let Some(record) = players.try_get(player) else {
            return LegalTokens::new();
        };

        record
            .tokens()
            .iter()
            .enumerate()
            .filter(|&(idx, &pos)| {
                self.calculate_move(player, idx, pos, roll, players, dynamic_zone)
                    .is_valid()
            })
            .map(|(idx, _)| idx)
            .collect()
    }

    fn spawn(&self, player: PlayerId, roll: u8, players: &PlayerMap<LudoPlayer>) -> LudoOutcome {
        let on_path = players
            .try_get(player)
            .map_or(0, LudoPlayer::tokens_on_track);

        let allowed = roll == SPAWN_ROLL || (roll == DESPERATION_ROLL && on_path == 0);
        if !allowed {
            return LudoOutcome::Invalid;
        }

        let to = TokenPos::Track(0);
        let occupied = ludo::global_coord(player, to)
            .map_or(false, |coord| !enemies_at(player, coord, players).is_empty());

        if occupied {
            LudoOutcome::SafeStack { to }
        } else {
            LudoOutcome::MoveOnly { to }
        }
    }

    fn land(
        &self,
        player: PlayerId,
        to: TokenPos,
        players: &PlayerMap<LudoPlayer>,
        dynamic_zone: Option<Coord>,
    ) -> LudoOutcome {
        let Some(coord) = ludo::global_coord(player, to) else {
            return LudoOutcome::Invalid;
        };
        let enemies = enemies_at(player, coord, players);
        let is_static = ludo::is_static_safe(coord);

        if enemies.len() >= 2 || (is_static && !enemies.is_empty()) {
            return LudoOutcome::SafeStack { to };
        }

        if let Some(&(victim_player, victim_token)) = enemies.first() {
            if players[victim_player].has_shield(victim_token) {
                return LudoOutcome::ShieldBreak {
                    to,
                    victim_player,
                    victim_token,
                };
            }
            return LudoOutcome::Kill {
                to,
                victim_player,
                victim_token,
            };
        }

        if dynamic_zone == Some(coord) {
            return LudoOutcome::StarCollected { to, zone: coord };
        }

        if is_static {
            return LudoOutcome::SafeZoneLanded { to };
        }

        LudoOutcome::MoveOnly { to }
    }
}

/// Enemy tokens on the outer track at `coord`, as `(owner, token index)`.
fn enemies_at(
    player: PlayerId,
    coord: Coord,
    players: &PlayerMap<LudoPlayer>,
) -> SmallVec<[(PlayerId, usize); 4]> {
    let mut found = SmallVec::new();

    for (owner, record) in players.iter() {
        if owner == player {
            continue;
        }
        for (idx, &pos) in record.tokens().iter().enumerate() {
            if pos.is_on_outer_track() && ludo::global_coord(owner, pos) == Some(coord) {
                found.push((owner, idx));
            }
        }
    }

    found
}
