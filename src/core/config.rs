//! Match configuration.
//!
//! Hosts set these up from their setup screens and hand them to the game
//! builders. Everything here is plain data so it can ride along inside a
//! snapshot.

use serde::{Deserialize, Serialize};

use super::player::MAX_PLAYERS;

/// Seconds between dynamic safe-zone spawns in Ludo.
pub const DEFAULT_SAFE_ZONE_INTERVAL: u32 = 30;

/// Ludo table configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LudoConfig {
    /// Seats at the table (2-4).
    pub player_count: usize,

    /// How many seats are bots. Bots take the last seats.
    pub bot_count: usize,

    /// Tokens per player (1-4).
    pub token_count: usize,

    /// Countdown length, in ticks, between dynamic safe-zone spawns.
    pub safe_zone_interval: u32,
}

impl Default for LudoConfig {
    fn default() -> Self {
        Self {
            player_count: MAX_PLAYERS,
            bot_count: 0,
            token_count: 4,
            safe_zone_interval: DEFAULT_SAFE_ZONE_INTERVAL,
        }
    }
}

impl LudoConfig {
    /// Number of human seats.
    #[must_use]
    pub fn human_count(&self) -> usize {
        self.player_count.saturating_sub(self.bot_count)
    }

    /// Check the configuration, describing the first problem found.
    pub fn validate(&self) -> Result<(), String> {
        if !(2..=MAX_PLAYERS).contains(&self.player_count) {
            return Err(format!("Player count must be 2-4, got {}", self.player_count));
        }
        if self.bot_count > self.player_count {
            return Err(format!(
                "Bot count {} exceeds player count {}",
                self.bot_count, self.player_count
            ));
        }
        if !(1..=4).contains(&self.token_count) {
            return Err(format!("Token count must be 1-4, got {}", self.token_count));
        }
        if self.safe_zone_interval == 0 {
            return Err("Safe zone interval must be positive".to_string());
        }
        Ok(())
    }
}

/// Snakes & Ladders table configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnaldConfig {
    /// Seats at the table (2-4).
    pub player_count: usize,
}

impl Default for SnaldConfig {
    fn default() -> Self {
        Self { player_count: 2 }
    }
}

impl SnaldConfig {
    /// Check the configuration, describing the first problem found.
    pub fn validate(&self) -> Result<(), String> {
        if !(2..=MAX_PLAYERS).contains(&self.player_count) {
            return Err(format!("Player count must be 2-4, got {}", self.player_count));
        }
        Ok(())
    }
}
