//! Computer opponents for Ludo.
//!
//! Only one bot exists: a stateless greedy scorer that looks a single move
//! ahead. It draws no randomness of its own, so the same board and roll
//! always produce the same choice.

pub mod greedy;

pub use greedy::{GreedyBot, MoveScores};
