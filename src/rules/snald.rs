//! Snakes & Ladders move adjudication.
//!
//! All functions are pure: the caller rolls the die and passes the value in,
//! and applies the returned outcome to its own state.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::snald::{self, BOARD_SIZE};
use crate::core::{PlayerId, PlayerMap, SoundCue};
use crate::roster::SnaldPlayer;

/// Squares a hunter walks in one turn (at most 6 * 2).
pub type HunterPath = SmallVec<[u8; 12]>;

/// Stars needed to call the hunter.
pub const STARS_FOR_HUNTER: u8 = 2;

/// Result of moving a token by one roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SnaldOutcome {
    /// Plain move.
    NormalMove { to: u8 },
    /// Landed on a snake head without a star; slides to the tail.
    SnakeBite { head: u8, tail: u8 },
    /// Landed on a ladder bottom; climbs to the top.
    LadderClimb { bottom: u8, top: u8 },
    /// Picked up a star.
    StarCollected { at: u8, stars: u8 },
    /// Picked up a star that calls the hunter for this token.
    HunterSpawned { at: u8, stars: u8 },
    /// A star absorbed a snake bite; the token stays on the head.
    StarUsed { at: u8, stars: u8 },
    /// Roll would overshoot the last square.
    Stay { at: u8 },
    /// Exact landing on the last square.
    Win { at: u8 },
}

impl SnaldOutcome {
    /// Square the token ends on.
    #[must_use]
    pub fn destination(&self) -> u8 {
        match *self {
            SnaldOutcome::NormalMove { to } => to,
            SnaldOutcome::SnakeBite { tail, .. } => tail,
            SnaldOutcome::LadderClimb { top, .. } => top,
            SnaldOutcome::StarCollected { at, .. }
            | SnaldOutcome::HunterSpawned { at, .. }
            | SnaldOutcome::StarUsed { at, .. }
            | SnaldOutcome::Stay { at }
            | SnaldOutcome::Win { at } => at,
        }
    }

    /// Star count after the move, given the count before it.
    #[must_use]
    pub fn stars_after(&self, prior: u8) -> u8 {
        match *self {
            SnaldOutcome::StarCollected { stars, .. }
            | SnaldOutcome::HunterSpawned { stars, .. }
            | SnaldOutcome::StarUsed { stars, .. } => stars,
            _ => prior,
        }
    }

    #[must_use]
    pub fn sound(&self) -> SoundCue {
        match self {
            SnaldOutcome::NormalMove { .. } | SnaldOutcome::Stay { .. } => SoundCue::None,
            SnaldOutcome::SnakeBite { .. } => SoundCue::SnakeBite,
            SnaldOutcome::LadderClimb { .. } => SoundCue::LadderClimb,
            SnaldOutcome::StarCollected { .. } | SnaldOutcome::HunterSpawned { .. } => {
                SoundCue::StarCollect
            }
            SnaldOutcome::StarUsed { .. } => SoundCue::StarUsed,
            SnaldOutcome::Win { .. } => SoundCue::Win,
        }
    }
}

/// What happened at the end of a hunter walk.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HunterEvent {
    Normal,
    SnakeBite,
    LadderClimb,
}

/// A hunter's walk for one turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HunterMove {
    /// Every square visited, in order, ending on the walk's last square.
    pub path: HunterPath,
    /// Square after any snake or ladder on the walk's last square.
    pub final_square: u8,
    pub event: HunterEvent,
}

impl HunterMove {
    /// Squares where a token is caught: the whole walk plus the slide target.
    #[must_use]
    pub fn swept_squares(&self) -> SmallVec<[u8; 13]> {
        let mut squares: SmallVec<[u8; 13]> = self.path.iter().copied().collect();
        if !squares.contains(&self.final_square) {
            squares.push(self.final_square);
        }
        squares
    }
}

/// Stateless Snakes & Ladders rules.
#[derive(Clone, Copy, Debug, Default)]
pub struct SnaldRuleEngine;

impl SnaldRuleEngine {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Adjudicate moving a token on `position` holding `stars` by `roll`.
    ///
    /// `hunter_active` is whether any hunter exists anywhere on the board.
    #[must_use]
    pub fn calculate_move(
        &self,
        position: u8,
        roll: u8,
        stars: u8,
        hunter_active: bool,
    ) -> SnaldOutcome {
        let target = u16::from(position) + u16::from(roll);

        if target > u16::from(BOARD_SIZE) {
            return SnaldOutcome::Stay { at: position };
        }
        let target = target as u8;
        if target == BOARD_SIZE {
            return SnaldOutcome::Win { at: target };
        }

        if snald::is_star(target) {
            let stars = stars.saturating_add(1);
            if stars >= STARS_FOR_HUNTER && !hunter_active {
                return SnaldOutcome::HunterSpawned { at: target, stars };
            }
            return SnaldOutcome::StarCollected { at: target, stars };
        }

        if let Some(tail) = snald::snake_tail(target) {
            if stars >= 1 {
                return SnaldOutcome::StarUsed {
                    at: target,
                    stars: stars - 1,
                };
            }
            return SnaldOutcome::SnakeBite { head: target, tail };
        }

        if let Some(top) = snald::ladder_top(target) {
            return SnaldOutcome::LadderClimb { bottom: target, top };
        }

        SnaldOutcome::NormalMove { to: target }
    }

    /// First other unfinished token sharing `active`'s square.
    ///
    /// The start and finish squares never host a collision.
    #[must_use]
    pub fn check_collision(
        &self,
        active: PlayerId,
        players: &PlayerMap<SnaldPlayer>,
    ) -> Option<PlayerId> {
        let square = players.try_get(active)?.square();
        if snald::is_universal_safe(square) {
            return None;
        }

        players
            .iter()
            .find(|(id, p)| *id != active && !p.is_finished() && p.square() == square)
            .map(|(id, _)| id)
    }

    /// Walk backward `steps` squares from `start`, wrapping from 1 to 100.
    #[must_use]
    pub fn hunter_path(&self, start: u8, steps: u8) -> HunterPath {
        let mut path = HunterPath::new();
        let mut current = start;

        for _ in 0..steps {
            current = if current <= 1 { BOARD_SIZE } else { current - 1 };
            path.push(current);
        }

        path
    }

    /// Move the hunter `roll * 2` squares backward, then apply any snake or
    /// ladder on the square it stops on.
    #[must_use]
    pub fn calculate_hunter_move(&self, hunter_square: u8, roll: u8) -> HunterMove {
        let path = self.hunter_path(hunter_square, roll.saturating_mul(2));
        let landed = path.last().copied().unwrap_or(hunter_square);

        let (final_square, event) = if let Some(tail) = snald::snake_tail(landed) {
            (tail, HunterEvent::SnakeBite)
        } else if let Some(top) = snald::ladder_top(landed) {
            (top, HunterEvent::LadderClimb)
        } else {
            (landed, HunterEvent::Normal)
        };

        HunterMove {
            path,
            final_square,
            event,
        }
    }

    /// First token caught anywhere on the hunter's walk.
    ///
    /// The owner, finished tokens, and tokens on squares 1 and 100 are
    /// never caught.
    #[must_use]
    pub fn check_hunter_path_kills(
        &self,
        owner: PlayerId,
        players: &PlayerMap<SnaldPlayer>,
        path: &[u8],
    ) -> Option<PlayerId> {
        players
            .iter()
            .find(|(id, p)| {
                *id != owner
                    && !p.is_finished()
                    && !snald::is_universal_safe(p.square())
                    && path.contains(&p.square())
            })
            .map(|(id, _)| id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> SnaldRuleEngine {
        SnaldRuleEngine::new()
    }

    fn table(squares: &[u8]) -> PlayerMap<SnaldPlayer> {
        let records = squares
            .iter()
            .enumerate()
            .map(|(i, &sq)| SnaldPlayer::at(PlayerId::new(i as u8), sq, 0))
            .collect();
        PlayerMap::from_records(records).unwrap()
    }

    #[test]
    fn test_overshoot_stays() {
        assert_eq!(engine().calculate_move(97, 5, 0, false), SnaldOutcome::Stay { at: 97 });
    }

    #[test]
    fn test_exact_landing_wins() {
        assert_eq!(engine().calculate_move(94, 6, 3, false), SnaldOutcome::Win { at: 100 });
    }

    #[test]
    fn test_normal_move() {
        assert_eq!(engine().calculate_move(1, 2, 0, false), SnaldOutcome::NormalMove { to: 3 });
    }

    #[test]
    fn test_snake_bite_without_star() {
        let outcome = engine().calculate_move(43, 2, 0, false);
        assert_eq!(outcome, SnaldOutcome::SnakeBite { head: 45, tail: 4 });
        assert_eq!(outcome.destination(), 4);
    }

    #[test]
    fn test_star_absorbs_snake() {
        let outcome = engine().calculate_move(43, 2, 2, false);
        assert_eq!(outcome, SnaldOutcome::StarUsed { at: 45, stars: 1 });
        assert_eq!(outcome.destination(), 45);
        assert_eq!(outcome.stars_after(2), 1);
    }

    #[test]
    fn test_ladder_climb() {
        let outcome = engine().calculate_move(5, 2, 0, false);
        assert_eq!(outcome, SnaldOutcome::LadderClimb { bottom: 7, top: 28 });
        assert_eq!(outcome.destination(), 28);
    }

    #[test]
    fn test_first_star_collected() {
        let outcome = engine().calculate_move(18, 2, 0, false);
        assert_eq!(outcome, SnaldOutcome::StarCollected { at: 20, stars: 1 });
    }

    #[test]
    fn test_second_star_spawns_hunter_when_none_active() {
        let outcome = engine().calculate_move(90, 4, 1, false);
        assert_eq!(outcome, SnaldOutcome::HunterSpawned { at: 94, stars: 2 });
    }

    #[test]
    fn test_second_star_with_active_hunter_only_collects() {
        let outcome = engine().calculate_move(90, 4, 1, true);
        assert_eq!(outcome, SnaldOutcome::StarCollected { at: 94, stars: 2 });
    }

    #[test]
    fn test_hunter_path_wraps() {
        let path = engine().hunter_path(3, 4);
        assert_eq!(path.as_slice(), &[2, 1, 100, 99]);
    }

    #[test]
    fn test_hunter_move_applies_snake() {
        // 100 - 4 = 96 is a snake head.
        let mv = engine().calculate_hunter_move(100, 2);
        assert_eq!(mv.path.as_slice(), &[99, 98, 97, 96]);
        assert_eq!(mv.final_square, 93);
        assert_eq!(mv.event, HunterEvent::SnakeBite);
        assert_eq!(mv.swept_squares().as_slice(), &[99, 98, 97, 96, 93]);
    }

    #[test]
    fn test_hunter_move_applies_ladder() {
        // 8 - 1 = 7 is a ladder bottom.
        let mv = engine().calculate_hunter_move(9, 1);
        assert_eq!(mv.path.as_slice(), &[8, 7]);
        assert_eq!(mv.final_square, 28);
        assert_eq!(mv.event, HunterEvent::LadderClimb);
    }

    #[test]
    fn test_collision_found() {
        let players = table(&[30, 30, 12]);
        assert_eq!(engine().check_collision(PlayerId::new(0), &players), Some(PlayerId::new(1)));
        assert_eq!(engine().check_collision(PlayerId::new(2), &players), None);
    }

    #[test]
    fn test_no_collision_on_start_square() {
        let players = table(&[1, 1]);
        assert_eq!(engine().check_collision(PlayerId::new(0), &players), None);
    }

    #[test]
    fn test_path_kill_excludes_owner_and_safe_squares() {
        let players = table(&[99, 98, 1, 100]);
        let path = [99, 98, 97, 1, 100];

        assert_eq!(
            engine().check_hunter_path_kills(PlayerId::new(0), &players, &path),
            Some(PlayerId::new(1))
        );
        assert_eq!(
            engine().check_hunter_path_kills(PlayerId::new(1), &players, &path),
            Some(PlayerId::new(0))
        );
    }

    #[test]
    fn test_path_kill_catches_passed_over_token() {
        let players = table(&[50, 42]);
        let mv = engine().calculate_hunter_move(44, 3);

        assert!(mv.path.contains(&42));
        assert_ne!(mv.final_square, 42);
        assert_eq!(
            engine().check_hunter_path_kills(PlayerId::new(0), &players, &mv.swept_squares()),
            Some(PlayerId::new(1))
        );
    }
}
