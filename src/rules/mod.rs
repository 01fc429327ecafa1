//! Pure move adjudication for both games.
//!
//! Rule engines take immutable views of the board and a die value and return
//! a closed outcome enum:
//! - `SnaldRuleEngine`: token moves, collisions, and the hunter's walk
//! - `LudoRuleEngine`: spawns, blocks, kills, shields, safe zones
//!
//! They never roll dice and never mutate records; the controllers in
//! `games` do both.

pub mod snald;
pub mod ludo;

pub use snald::{HunterEvent, HunterMove, HunterPath, SnaldOutcome, SnaldRuleEngine};
pub use ludo::{LegalTokens, LudoOutcome, LudoRuleEngine};
