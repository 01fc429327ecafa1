//! Values the controllers hand back to the host.
//!
//! There is no observer fan-out inside the engine: every command returns the
//! event describing what just changed, and the host decides what to animate,
//! which sound to play, and which banner to show.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// Sound category for the host's audio layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundCue {
    /// No special sound beyond the hop.
    #[default]
    None,
    /// Landed on a safe square or stacked.
    Safe,
    /// A token was sent back.
    Kill,
    /// A token reached the final square.
    Win,
    /// A star or dynamic safe zone was picked up.
    StarCollect,
    /// A shield absorbed a hit.
    ShieldBreak,
    /// Snake bite.
    SnakeBite,
    /// Ladder climb.
    LadderClimb,
    /// A star absorbed a snake bite.
    StarUsed,
}

/// Details of a kill, enough to animate the victim back to its start.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KillInfo {
    /// Owner of the killed token.
    pub victim_player: PlayerId,
    /// Index of the killed token within its owner's tokens.
    pub victim_token: usize,
    /// Square the victim was standing on (Ludo track index or Snald square).
    pub from: i32,
}

/// Banner category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnnouncementKind {
    /// A single token reached home.
    TokenHome,
    /// A token gained a shield.
    ShieldGained,
    /// A shield was broken.
    ShieldBroken,
    /// A player finished and received a rank.
    PlayerRanked,
}

/// A banner the host should show after the current animation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Announcement {
    /// What happened.
    pub kind: AnnouncementKind,
    /// Player the banner is about.
    pub player: PlayerId,
    /// Rank achieved, for [`AnnouncementKind::PlayerRanked`].
    pub rank: Option<u8>,
    /// Ready-to-display text.
    pub message: String,
}

impl Announcement {
    /// Create an announcement without a rank.
    pub fn new(kind: AnnouncementKind, player: PlayerId, message: impl Into<String>) -> Self {
        Self {
            kind,
            player,
            rank: None,
            message: message.into(),
        }
    }

    /// Create a rank announcement.
    pub fn ranked(player: PlayerId, rank: u8, message: impl Into<String>) -> Self {
        Self {
            kind: AnnouncementKind::PlayerRanked,
            player,
            rank: Some(rank),
            message: message.into(),
        }
    }
}
