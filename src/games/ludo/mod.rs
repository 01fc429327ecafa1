//! Ludo with shields, a roaming dynamic safe zone, and greedy bots.
//!
//! Flow per turn:
//! 1. `roll_dice` rolls and enumerates legal tokens; none forfeits, one is
//!    applied at once, several wait for `select_token` (bots pick greedily)
//! 2. the host animates the [`TurnUpdate`] and calls `on_animations_finished`,
//!    which commits shields and ranks and grants or passes the turn
//!
//! `tick` runs independently, once per host second.

mod game;
mod snapshot;

pub use game::{LudoGame, LudoGameBuilder, PendingEffect, RollResult, TurnUpdate};
pub use snapshot::LudoSnapshot;
