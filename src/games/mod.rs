//! Turn controllers for both games.
//!
//! Each controller exclusively owns its player arena, phase, and dice, and is
//! driven by the host through the [`TurnController`] commands:
//!
//! ```rust
//! use snald_engine::games::{snald::SnaldGameBuilder, TurnController};
//! use snald_engine::core::GamePhase;
//!
//! let mut game = SnaldGameBuilder::new().player_count(2).build(7);
//! let turn = game.roll_dice().unwrap();
//! assert_eq!(game.phase(), GamePhase::Animating);
//!
//! // ...host animates `turn`, then acknowledges:
//! let _banner = game.on_animations_finished().unwrap();
//! # let _ = turn;
//! ```

pub mod snald;
pub mod ludo;

use serde::{Deserialize, Serialize};

use crate::core::{Announcement, CommandError, GamePhase, PlayerId, SnapshotError};

pub use self::ludo::{LudoGame, LudoGameBuilder, LudoSnapshot};
pub use self::snald::{SnaldGame, SnaldGameBuilder, SnaldSnapshot};

/// Final standings of a completed match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Players in the order they finished.
    pub ranking: Vec<PlayerId>,
    /// The player left on the board when the match ended, if any.
    pub last: Option<PlayerId>,
}

impl MatchResult {
    /// First player to finish.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.ranking.first().copied()
    }

    /// 1-based rank of a player, counting the last player after the
    /// finishers.
    #[must_use]
    pub fn rank_of(&self, player: PlayerId) -> Option<usize> {
        if let Some(pos) = self.ranking.iter().position(|&p| p == player) {
            return Some(pos + 1);
        }
        (self.last == Some(player)).then(|| self.ranking.len() + 1)
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winner() == Some(player)
    }
}

/// Commands shared by every turn controller.
///
/// Commands issued in the wrong phase are rejected with
/// [`CommandError`] and leave the match untouched.
pub trait TurnController {
    /// Event returned by a roll.
    type Turn;

    fn phase(&self) -> GamePhase;

    fn active_player(&self) -> PlayerId;

    fn player_count(&self) -> usize;

    /// Last die value, if the match has rolled at all.
    fn dice_value(&self) -> Option<u8>;

    /// Roll the internal die for the active player.
    fn roll_dice(&mut self) -> Result<Self::Turn, CommandError>;

    /// Roll with a host-supplied die value in `1..=6`.
    fn roll_dice_with(&mut self, value: u8) -> Result<Self::Turn, CommandError>;

    /// Acknowledge that the host finished animating the last move.
    ///
    /// Commits deferred effects and advances the turn. Returns the banner
    /// to show, if any.
    fn on_animations_finished(&mut self) -> Result<Option<Announcement>, CommandError>;

    /// Suspend play. Only valid during active play.
    fn pause(&mut self) -> Result<(), CommandError>;

    /// Return to the phase `pause` interrupted.
    fn resume(&mut self) -> Result<(), CommandError>;

    /// End the match immediately without ranking anyone further.
    fn abandon(&mut self);

    /// Standings, once the match ended normally.
    fn result(&self) -> Option<MatchResult>;

    fn is_over(&self) -> bool {
        self.phase() == GamePhase::GameOver
    }
}

/// Either game's snapshot, for hosts that persist both through one slot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameSnapshot {
    Snald(SnaldSnapshot),
    Ludo(LudoSnapshot),
}

impl GameSnapshot {
    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(|e| SnapshotError::Encode(e.to_string()))
    }

    /// Decode bytes produced by [`GameSnapshot::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        Ok(bincode::deserialize(bytes)?)
    }
}

impl From<SnaldSnapshot> for GameSnapshot {
    fn from(snapshot: SnaldSnapshot) -> Self {
        GameSnapshot::Snald(snapshot)
    }
}

impl From<LudoSnapshot> for GameSnapshot {
    fn from(snapshot: LudoSnapshot) -> Self {
        GameSnapshot::Ludo(snapshot)
    }
}

/// Phase check shared by both controllers.
pub(crate) fn require_phase(
    command: &'static str,
    actual: GamePhase,
    expected: GamePhase,
) -> Result<(), CommandError> {
    if actual == expected {
        return Ok(());
    }
    if actual == GamePhase::GameOver {
        return Err(CommandError::MatchOver);
    }
    Err(CommandError::WrongPhase { command, actual })
}

/// Reject die values outside `1..=6`.
pub(crate) fn check_roll(value: u8) -> Result<(), CommandError> {
    if (1..=crate::core::DIE_FACES).contains(&value) {
        Ok(())
    } else {
        Err(CommandError::InvalidRoll(value))
    }
}

/// Check a stored phase pair and return the phase play resumes in.
pub(crate) fn validate_phase(
    phase: GamePhase,
    paused_from: Option<GamePhase>,
) -> Result<GamePhase, SnapshotError> {
    match (phase, paused_from) {
        (GamePhase::Setup, _) => Err(corrupt("match never started".to_string())),
        (GamePhase::Paused, Some(inner)) if inner.is_active_play() => Ok(inner),
        (GamePhase::Paused, _) => Err(corrupt("paused without a phase to resume".to_string())),
        (_, Some(_)) => Err(corrupt(format!("resume phase stored while {phase}"))),
        (other, None) => Ok(other),
    }
}

pub(crate) fn corrupt(message: String) -> SnapshotError {
    SnapshotError::Corrupt(message)
}
