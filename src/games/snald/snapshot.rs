//! Persisted shape of a Snakes & Ladders match.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::board::snald::{BOARD_SIZE, START_SQUARE};
use crate::core::{Announcement, GamePhase, GameRngState, PlayerId, SnaldConfig, SnapshotError, DIE_FACES};
use crate::roster::{Hunter, SnaldPlayer};

use super::super::{corrupt, validate_phase};

/// Everything needed to resume a match exactly where it stopped,
/// including the dice stream.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnaldSnapshot {
    pub config: SnaldConfig,
    pub players: Vec<SnaldPlayer>,
    pub hunter: Option<Hunter>,
    pub active: PlayerId,
    pub dice: Option<u8>,
    pub phase: GamePhase,
    /// Phase to return to when `phase` is `Paused`.
    pub paused_from: Option<GamePhase>,
    pub finish_order: Vec<PlayerId>,
    /// Banner waiting for the animation acknowledgement.
    pub pending: Option<Announcement>,
    pub abandoned: bool,
    pub rng: GameRngState,
}

impl SnaldSnapshot {
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

        for (idx, p) in self.players.iter().enumerate() {
            if p.id().index() != idx {
                return Err(corrupt(format!("seat {idx} holds record for {}", p.id())));
            }
            if !(START_SQUARE..=BOARD_SIZE).contains(&p.square()) {
                return Err(corrupt(format!("{} on square {}", p.id(), p.square())));
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
        if resumed == GamePhase::WaitingForMove {
            return Err(corrupt("snakes & ladders never waits for a token pick".to_string()));
        }
        if resumed == GamePhase::WaitingForRoll && self.players[self.active.index()].is_finished() {
            return Err(corrupt(format!("active player {} already finished", self.active)));
        }
        if self.pending.is_some() && resumed != GamePhase::Animating {
            return Err(corrupt("pending announcement outside animation".to_string()));
        }

        let mut seen = FxHashSet::default();
        for &id in &self.finish_order {
            let finished = self.players.get(id.index()).map_or(false, SnaldPlayer::is_finished);
            if !finished || !seen.insert(id) {
                return Err(corrupt(format!("bad finish order entry {id}")));
            }
        }
        if self.players.iter().filter(|p| p.is_finished()).count() != seen.len() {
            return Err(corrupt("finished player missing from finish order".to_string()));
        }

        if let Some(hunter) = self.hunter {
            let owner_ok = self
                .players
                .get(hunter.owner().index())
                .map_or(false, |p| !p.is_finished());
            if !owner_ok {
                return Err(corrupt(format!("hunter owned by {}", hunter.owner())));
            }
            if !(START_SQUARE..=BOARD_SIZE).contains(&hunter.square()) {
                return Err(corrupt(format!("hunter on square {}", hunter.square())));
            }
        }

        Ok(())
    }
}
