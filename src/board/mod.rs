//! Static board topology for both games.
//!
//! Pure data plus lookups; no rules live here.

pub mod snald;
pub mod ludo;

pub use ludo::{Coord, TokenPos};
