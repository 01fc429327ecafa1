//! Single-ply greedy token selection.

use serde::{Deserialize, Serialize};

use crate::board::ludo::{self, Coord, TokenPos};
use crate::core::{PlayerId, PlayerMap};
use crate::roster::LudoPlayer;
use crate::rules::{LudoOutcome, LudoRuleEngine};

/// Score table for each outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveScores {
    pub win: i32,
    pub kill: i32,
    pub star_collected: i32,
    pub shield_break: i32,
    pub safe_zone_landed: i32,
    pub safe_stack: i32,
    /// Plain move out of base.
    pub spawn: i32,
    /// Multiplier on the target index for a plain move along the path.
    pub advance_factor: i32,
    /// Subtracted when a plain move leaves a static safe square.
    pub leave_safe_penalty: i32,
}

impl Default for MoveScores {
    fn default() -> Self {
        Self {
            win: 5000,
            kill: 2000,
            star_collected: 1000,
            shield_break: 800,
            safe_zone_landed: 500,
            safe_stack: 400,
            spawn: 600,
            advance_factor: 2,
            leave_safe_penalty: 300,
        }
    }
}

/// Picks the token whose move scores highest.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GreedyBot {
    scores: MoveScores,
}

impl GreedyBot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Best token for `player` with `roll`, or `None` if nothing can move.
    ///
    /// Ties go to the lowest token index.
    #[must_use]
    pub fn best_move(
        &self,
        player: PlayerId,
        roll: u8,
        players: &PlayerMap<LudoPlayer>,
        dynamic_zone: Option<Coord>,
    ) -> Option<usize> {
        let record = players.try_get(player)?;
        let mut best: Option<(usize, i32)> = None;

        for token in 0..record.token_count() {
            let Some(score) = self.score(player, token, roll, players, dynamic_zone) else {
                continue;
            };
            if best.map_or(true, |(_, top)| score > top) {
                best = Some((token, score));
            }
        }

        best.map(|(token, _)| token)
    }

    /// Score one candidate move, or `None` when it is illegal.
    #[must_use]
    pub fn score(
        &self,
        player: PlayerId,
        token: usize,
        roll: u8,
        players: &PlayerMap<LudoPlayer>,
        dynamic_zone: Option<Coord>,
    ) -> Option<i32> {
        let current = players.try_get(player)?.token(token)?;
        let outcome = LudoRuleEngine::new().calculate_move(
            player,
            token,
            current,
            roll,
            players,
            dynamic_zone,
        );

        let s = &self.scores;
        let score = match outcome {
            LudoOutcome::Invalid => return None,
            LudoOutcome::Win => s.win,
            LudoOutcome::Kill { .. } => s.kill,
            LudoOutcome::StarCollected { .. } => s.star_collected,
            LudoOutcome::ShieldBreak { .. } => s.shield_break,
            LudoOutcome::SafeZoneLanded { .. } => s.safe_zone_landed,
            LudoOutcome::SafeStack { .. } => s.safe_stack,
            LudoOutcome::MoveOnly { to } => match current {
                TokenPos::Base => s.spawn,
                _ => {
                    let advance = to.index() * s.advance_factor;
                    if on_static_safe(player, current) {
                        advance - s.leave_safe_penalty
                    } else {
                        advance
                    }
                }
            },
        };

        Some(score)
    }
}

fn on_static_safe(player: PlayerId, pos: TokenPos) -> bool {
    pos.is_on_outer_track()
        && ludo::global_coord(player, pos).map_or(false, ludo::is_static_safe)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::ludo::path_coord;
    use crate::core::PlayerColor;

    const RED: PlayerId = PlayerId::new(0);
    const GREEN: PlayerId = PlayerId::new(1);

    fn table(red: &[TokenPos], green: &[TokenPos]) -> PlayerMap<LudoPlayer> {
        PlayerMap::from_records(vec![
            LudoPlayer::with_positions(RED, red, true),
            LudoPlayer::with_positions(GREEN, green, false),
        ])
        .unwrap()
    }

    #[test]
    fn test_prefers_win() {
        let players = table(
            &[TokenPos::Track(20), TokenPos::Track(52)],
            &[TokenPos::Base],
        );
        assert_eq!(GreedyBot::new().best_move(RED, 4, &players, None), Some(1));
    }

    #[test]
    fn test_prefers_kill_over_advance() {
        // Green index 7 shares Red index 20.
        let players = table(
            &[TokenPos::Track(30), TokenPos::Track(17)],
            &[TokenPos::Track(7)],
        );
        let bot = GreedyBot::new();

        assert_eq!(bot.score(RED, 1, 3, &players, None), Some(2000));
        assert_eq!(bot.best_move(RED, 3, &players, None), Some(1));
    }

    #[test]
    fn test_spawn_scores_flat() {
        let players = table(&[TokenPos::Base, TokenPos::Track(3)], &[TokenPos::Base]);
        assert_eq!(GreedyBot::new().score(RED, 0, 6, &players, None), Some(600));
        assert_eq!(GreedyBot::new().score(RED, 1, 6, &players, None), Some(18));
        assert_eq!(GreedyBot::new().best_move(RED, 6, &players, None), Some(0));
    }

    #[test]
    fn test_leaving_safe_square_is_penalized() {
        // Red index 8 is static safe; index 23 is not.
        let players = table(
            &[TokenPos::Track(8), TokenPos::Track(23)],
            &[TokenPos::Base],
        );
        let bot = GreedyBot::new();

        assert_eq!(bot.score(RED, 0, 1, &players, None), Some(18 - 300));
        assert_eq!(bot.score(RED, 1, 1, &players, None), Some(48));
        assert_eq!(bot.best_move(RED, 1, &players, None), Some(1));
    }

    #[test]
    fn test_star_collected_beats_plain_move() {
        let zone = path_coord(PlayerColor::Red, 33).unwrap();
        let players = table(
            &[TokenPos::Track(45), TokenPos::Track(30)],
            &[TokenPos::Base],
        );
        assert_eq!(GreedyBot::new().best_move(RED, 3, &players, Some(zone)), Some(1));
    }

    #[test]
    fn test_ties_go_to_first_token() {
        let players = table(&[TokenPos::Base, TokenPos::Base], &[TokenPos::Base]);
        assert_eq!(GreedyBot::new().best_move(RED, 6, &players, None), Some(0));
    }

    #[test]
    fn test_no_legal_move() {
        let players = table(&[TokenPos::Base, TokenPos::Home], &[TokenPos::Base]);
        assert_eq!(GreedyBot::new().best_move(RED, 3, &players, None), None);
    }
}
