//! Persisted shape of a Ludo match.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::board::ludo::{self, Coord, TokenPos, HOME_INDEX};
use crate::core::{GamePhase, GameRngState, LudoConfig, PlayerId, SnapshotError, DIE_FACES};
use crate::roster::LudoPlayer;

use super::super::{corrupt, validate_phase};
use super::game::PendingEffect;

/// Everything needed to resume a match: table, clocks, and dice stream.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LudoSnapshot {
    pub config: LudoConfig,
    pub players: Vec<LudoPlayer>,
    pub active: PlayerId,
    pub dice: Option<u8>,
    pub phase: GamePhase,
    /// Phase to return to when `phase` is `Paused`.
    pub paused_from: Option<GamePhase>,
    pub finish_order: Vec<PlayerId>,
    /// Seconds until the next dynamic safe zone.
    pub timer_seconds: u32,
    pub dynamic_zone: Option<Coord>,
    pub extra_turn: bool,
    /// Effect waiting for the animation acknowledgement.
    pub pending: Option<PendingEffect>,
    pub abandoned: bool,
    pub rng: GameRngState,
}

impl LudoSnapshot {
    /// Check the match invariants a hand-edited or truncated save could break.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        self.config.validate().map_err(SnapshotError::Corrupt)?;

        let count = self.config.player_count;
        if self.players.len() != count {
            return Err(corrupt(format!(
                "{} player records for {count} seats",
                self.players.len()
            )));
        }

        let first_bot = count - self.config.bot_count;
        for (idx, p) in self.players.iter().enumerate() {
            if p.id().index() != idx {
                return Err(corrupt(format!("seat {idx} holds record for {}", p.id())));
            }
            if !p.is_well_formed() || p.token_count() != self.config.token_count {
                return Err(corrupt(format!("{} has malformed tokens", p.id())));
            }
            if p.is_bot() != (idx >= first_bot) {
                return Err(corrupt(format!("{} bot flag disagrees with config", p.id())));
            }
            let off_path = p
                .tokens()
                .iter()
                .any(|t| matches!(t, TokenPos::Track(i) if *i >= HOME_INDEX));
            if off_path {
                return Err(corrupt(format!("{} has a token past the path", p.id())));
            }
        }

        if self.active.index() >= count {
            return Err(corrupt(format!("active player {} out of range", self.active)));
        }
        if let Some(dice) = self.dice {
            if !(1..=DIE_FACES).contains(&dice) {
                return Err(corrupt(format!("die value {dice}")));
            }
        }

        let resumed = validate_phase(self.phase, self.paused_from)?;
        if resumed == GamePhase::WaitingForMove && self.dice.is_none() {
            return Err(corrupt("waiting for a move without a roll".to_string()));
        }
        let waiting = matches!(resumed, GamePhase::WaitingForRoll | GamePhase::WaitingForMove);
        if waiting && self.players[self.active.index()].is_finished() {
            return Err(corrupt(format!("active player {} already finished", self.active)));
        }

        if let Some(effect) = self.pending {
            if resumed != GamePhase::Animating {
                return Err(corrupt("pending effect outside animation".to_string()));
            }
            if effect.player().index() >= count {
                return Err(corrupt(format!("pending effect for {}", effect.player())));
            }
        }

        let mut seen = FxHashSet::default();
        for &id in &self.finish_order {
            let finished = self.players.get(id.index()).map_or(false, LudoPlayer::is_finished);
            if !finished || !seen.insert(id) {
                return Err(corrupt(format!("bad finish order entry {id}")));
            }
        }
        // A player may only be finished but unranked while its last token's
        // arrival waits for the animation acknowledgement.
        let ranking_pending = match self.pending {
            Some(PendingEffect::TokenHome { player }) => Some(player),
            _ => None,
        };
        for p in &self.players {
            if p.is_finished() && !seen.contains(&p.id()) && ranking_pending != Some(p.id()) {
                return Err(corrupt(format!("{} finished without a rank", p.id())));
            }
        }

        if let Some(zone) = self.dynamic_zone {
            if !ludo::outer_track().contains(&zone) || ludo::is_static_safe(zone) {
                return Err(corrupt(format!("dynamic zone at {zone}")));
            }
        }

        if !(1..=self.config.safe_zone_interval).contains(&self.timer_seconds) {
            return Err(corrupt(format!("timer at {}s", self.timer_seconds)));
        }

        Ok(())
    }
}
