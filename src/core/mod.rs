//! Core engine types: players, dice, configuration, phases, events, errors.
//!
//! Everything here is shared by both games. Game-specific rules live in
//! `rules`, and the state machines in `games`.

pub mod player;
pub mod rng;
pub mod config;
pub mod phase;
pub mod event;
pub mod timer;
pub mod error;

pub use player::{PlayerColor, PlayerId, PlayerMap, MAX_PLAYERS};
pub use rng::{GameRng, GameRngState, DIE_FACES};
pub use config::{LudoConfig, SnaldConfig, DEFAULT_SAFE_ZONE_INTERVAL};
pub use phase::GamePhase;
pub use event::{Announcement, AnnouncementKind, KillInfo, SoundCue};
pub use timer::SafeZoneTimer;
pub use error::{CommandError, SnapshotError};
