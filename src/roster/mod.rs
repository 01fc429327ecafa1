//! Player and token records for both games.
//!
//! Controllers own these inside a `PlayerMap` arena and are the only code
//! that mutates them; rule engines and the bot read them by reference.

pub mod snald;
pub mod ludo;

pub use snald::{Hunter, SnaldPlayer};
pub use ludo::{LudoPlayer, TokenSlots};
