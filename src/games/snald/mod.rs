//! Snakes & Ladders with stars and the circulating hunter.
//!
//! Flow per turn:
//! 1. `roll_dice` moves the token, spawns or walks the hunter, resolves
//!    collisions and wins, and returns a [`SnaldTurn`]
//! 2. the host animates it and calls `on_animations_finished`
//! 3. the turn passes (no extra turns in this game)

mod game;
mod snapshot;

pub use game::{SnaldGame, SnaldGameBuilder, SnaldTurn, Strike};
pub use snapshot::SnaldSnapshot;
