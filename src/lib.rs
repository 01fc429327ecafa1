//! # snald-engine
//!
//! Rule adjudication and turn state machines for two board games:
//! Snakes & Ladders with stars and a roaming hunter ("Snald"), and Ludo with
//! shields, blocks, a dynamic safe zone, and greedy bots.
//!
//! ## Design Principles
//!
//! 1. **Pure rules**: Rule engines take immutable views and a die value and
//!    return one closed outcome enum. They never roll and never mutate.
//!
//! 2. **One mutator**: Each controller owns its player arena; records only
//!    expose crate-private mutators.
//!
//! 3. **Events, not observers**: Every command returns the event describing
//!    what changed. The host animates it and acknowledges with
//!    `on_animations_finished`; deferred effects commit there.
//!
//! 4. **No clock**: "Animating" is a logical phase. The only time-driven
//!    element is `LudoGame::tick`, forwarded by the host.
//!
//! ## Modules
//!
//! - `core`: Player ids and arena, RNG, configuration, phases, events, errors
//! - `board`: Board topology for both games
//! - `roster`: Player and token records
//! - `rules`: Snald and Ludo rule engines
//! - `bot`: Greedy Ludo bot
//! - `games`: Turn controllers, match results, snapshots

pub mod core;
pub mod board;
pub mod roster;
pub mod rules;
pub mod bot;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    PlayerId, PlayerColor, PlayerMap,
    GameRng, GameRngState,
    LudoConfig, SnaldConfig,
    GamePhase, SafeZoneTimer,
    Announcement, AnnouncementKind, KillInfo, SoundCue,
    CommandError, SnapshotError,
};

pub use crate::board::{Coord, TokenPos};

pub use crate::roster::{Hunter, LudoPlayer, SnaldPlayer};

pub use crate::rules::{
    HunterEvent, HunterMove, SnaldOutcome, SnaldRuleEngine,
    LegalTokens, LudoOutcome, LudoRuleEngine,
};

pub use crate::bot::GreedyBot;

pub use crate::games::{
    GameSnapshot, MatchResult, TurnController,
    SnaldGame, SnaldGameBuilder, SnaldSnapshot,
    LudoGame, LudoGameBuilder, LudoSnapshot,
};

pub use crate::games::snald::{SnaldTurn, Strike};
pub use crate::games::ludo::{PendingEffect, RollResult, TurnUpdate};
