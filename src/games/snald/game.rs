//! Snakes & Ladders turn controller.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::core::{
    Announcement, CommandError, GamePhase, GameRng, KillInfo, PlayerId, PlayerMap, SnaldConfig,
    SnapshotError, SoundCue, MAX_PLAYERS,
};
use crate::games::{check_roll, require_phase, MatchResult, TurnController};
use crate::roster::{Hunter, SnaldPlayer};
use crate::rules::{HunterMove, SnaldOutcome, SnaldRuleEngine};

use super::snapshot::SnaldSnapshot;

/// A hit against a token, from a collision or the hunter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strike {
    /// The victim went back to the start square.
    Killed(KillInfo),
    /// A star absorbed the hit and the victim stayed.
    Absorbed { victim: PlayerId, stars_left: u8 },
}

impl Strike {
    #[must_use]
    pub fn victim(&self) -> PlayerId {
        match *self {
            Strike::Killed(info) => info.victim_player,
            Strike::Absorbed { victim, .. } => victim,
        }
    }

    #[must_use]
    pub fn is_kill(&self) -> bool {
        matches!(self, Strike::Killed(_))
    }
}

/// Everything that happened during one roll, in the order the host should
/// animate it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnaldTurn {
    pub player: PlayerId,
    pub roll: u8,
    /// Square the token started from.
    pub from: u8,
    pub outcome: SnaldOutcome,
    /// The hunter's walk, when the roller owns it.
    pub hunter: Option<HunterMove>,
    pub hunter_kill: Option<Strike>,
    pub collision: Option<Strike>,
    /// Who holds the hunter after it spawned or changed hands this turn.
    pub hunter_transfer: Option<PlayerId>,
}

impl SnaldTurn {
    /// Most important sound for the whole turn.
    #[must_use]
    pub fn sound(&self) -> SoundCue {
        let strikes = [self.hunter_kill, self.collision];
        if matches!(self.outcome, SnaldOutcome::Win { .. }) {
            SoundCue::Win
        } else if strikes.iter().flatten().any(Strike::is_kill) {
            SoundCue::Kill
        } else if strikes.iter().flatten().next().is_some() {
            SoundCue::ShieldBreak
        } else {
            self.outcome.sound()
        }
    }
}

/// Builder for creating a `SnaldGame`.
pub struct SnaldGameBuilder {
    config: SnaldConfig,
}

impl Default for SnaldGameBuilder {
    fn default() -> Self {
        Self {
            config: SnaldConfig::default(),
        }
    }
}

impl SnaldGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn player_count(mut self, count: usize) -> Self {
        assert!((2..=MAX_PLAYERS).contains(&count), "Player count must be 2-4");
        self.config.player_count = count;
        self
    }

    /// Take every setting from a stored configuration.
    pub fn config(mut self, config: SnaldConfig) -> Self {
        if let Err(msg) = config.validate() {
            panic!("{msg}");
        }
        self.config = config;
        self
    }

    /// Build a match with every token on the start square and the first
    /// seat to roll.
    pub fn build(self, seed: u64) -> SnaldGame {
        let players = PlayerMap::new(self.config.player_count, SnaldPlayer::new);
        info!(players = self.config.player_count, seed, "snald match created");

        SnaldGame {
            config: self.config,
            players,
            hunter: None,
            active: PlayerId::new(0),
            dice: None,
            phase: GamePhase::WaitingForRoll,
            paused_from: None,
            finish_order: Vec::new(),
            pending: None,
            abandoned: false,
            rng: GameRng::new(seed),
            engine: SnaldRuleEngine::new(),
        }
    }
}

/// Authoritative state of one Snakes & Ladders match.
#[derive(Clone, Debug)]
pub struct SnaldGame {
    config: SnaldConfig,
    players: PlayerMap<SnaldPlayer>,
    hunter: Option<Hunter>,
    active: PlayerId,
    dice: Option<u8>,
    phase: GamePhase,
    paused_from: Option<GamePhase>,
    finish_order: Vec<PlayerId>,
    pending: Option<Announcement>,
    abandoned: bool,
    rng: GameRng,
    engine: SnaldRuleEngine,
}

impl SnaldGame {
    #[must_use]
    pub fn config(&self) -> &SnaldConfig {
        &self.config
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<SnaldPlayer> {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&SnaldPlayer> {
        self.players.try_get(id)
    }

    /// The hunter, if one is on the board.
    #[must_use]
    pub fn hunter(&self) -> Option<Hunter> {
        self.hunter
    }

    /// Players in the order they reached square 100.
    #[must_use]
    pub fn finish_order(&self) -> &[PlayerId] {
        &self.finish_order
    }

    #[must_use]
    pub fn unfinished_count(&self) -> usize {
        self.players.iter().filter(|(_, p)| !p.is_finished()).count()
    }

    /// Capture the match for persistence.
    #[must_use]
    pub fn snapshot(&self) -> SnaldSnapshot {
        SnaldSnapshot {
            config: self.config.clone(),
            players: self.players.records().to_vec(),
            hunter: self.hunter,
            active: self.active,
            dice: self.dice,
            phase: self.phase,
            paused_from: self.paused_from,
            finish_order: self.finish_order.clone(),
            pending: self.pending.clone(),
            abandoned: self.abandoned,
            rng: self.rng.state(),
        }
    }

    /// Rebuild a match from a snapshot, continuing the same dice stream.
    pub fn restore(snapshot: SnaldSnapshot) -> Result<Self, SnapshotError> {
        snapshot.validate()?;

        let players = PlayerMap::from_records(snapshot.players)
            .ok_or_else(|| SnapshotError::Corrupt("no player records".to_string()))?;
        debug!(phase = %snapshot.phase, active = %snapshot.active, "snald match restored");

        Ok(Self {
            config: snapshot.config,
            players,
            hunter: snapshot.hunter,
            active: snapshot.active,
            dice: snapshot.dice,
            phase: snapshot.phase,
            paused_from: snapshot.paused_from,
            finish_order: snapshot.finish_order,
            pending: snapshot.pending,
            abandoned: snapshot.abandoned,
            rng: GameRng::from_state(&snapshot.rng),
            engine: SnaldRuleEngine::new(),
        })
    }

    fn play(&mut self, roll: u8) -> SnaldTurn {
        let player = self.active;
        self.dice = Some(roll);

        let (from, stars) = {
            let record = &self.players[player];
            (record.square(), record.stars())
        };
        let outcome = self
            .engine
            .calculate_move(from, roll, stars, self.hunter.is_some());

        let record = &mut self.players[player];
        record.set_square(outcome.destination());
        record.set_stars(outcome.stars_after(stars));
        debug!(%player, roll, from, ?outcome, "move applied");

        let mut turn = SnaldTurn {
            player,
            roll,
            from,
            outcome,
            hunter: None,
            hunter_kill: None,
            collision: None,
            hunter_transfer: None,
        };

        if let SnaldOutcome::HunterSpawned { .. } = outcome {
            self.hunter = Some(Hunter::spawn(player));
            turn.hunter_transfer = Some(player);
            info!(%player, "hunter spawned");
        }

        if let SnaldOutcome::Win { .. } = outcome {
            self.record_win(player, &mut turn);
        } else {
            self.walk_hunter(player, roll, &mut turn);
            self.resolve_collision(player, &mut turn);
        }

        self.phase = GamePhase::Animating;
        turn
    }

    fn walk_hunter(&mut self, player: PlayerId, roll: u8, turn: &mut SnaldTurn) {
        let Some(hunter) = self.hunter.as_mut().filter(|h| h.owner() == player) else {
            return;
        };

        let walk = self.engine.calculate_hunter_move(hunter.square(), roll);
        hunter.set_square(walk.final_square);
        debug!(%player, to = walk.final_square, event = ?walk.event, "hunter moved");

        turn.hunter_kill = self
            .engine
            .check_hunter_path_kills(player, &self.players, &walk.swept_squares())
            .map(|victim| self.strike(player, victim));
        turn.hunter = Some(walk);
    }

    fn resolve_collision(&mut self, player: PlayerId, turn: &mut SnaldTurn) {
        let Some(victim) = self.engine.check_collision(player, &self.players) else {
            return;
        };

        let strike = self.strike(player, victim);
        let victim_held_hunter = self.hunter.map_or(false, |h| h.owner() == victim);
        if strike.is_kill() && victim_held_hunter {
            self.hunter = Some(Hunter::spawn(player));
            turn.hunter_transfer = Some(player);
            info!(from = %victim, to = %player, "hunter captured");
        }
        turn.collision = Some(strike);
    }

    /// A star absorbs the hit; otherwise the victim goes back to the start.
    fn strike(&mut self, attacker: PlayerId, victim: PlayerId) -> Strike {
        let record = &mut self.players[victim];

        if record.consume_star() {
            debug!(%attacker, %victim, stars_left = record.stars(), "hit absorbed by star");
            return Strike::Absorbed {
                victim,
                stars_left: record.stars(),
            };
        }

        let from = record.square();
        record.send_to_start();
        self.players[attacker].record_kill();
        debug!(%attacker, %victim, from, "token sent to start");

        Strike::Killed(KillInfo {
            victim_player: victim,
            victim_token: 0,
            from: i32::from(from),
        })
    }

    fn record_win(&mut self, player: PlayerId, turn: &mut SnaldTurn) {
        let rank = self.next_rank();
        self.finish_order.push(player);
        let record = &mut self.players[player];
        record.set_rank(rank);
        info!(%player, rank, "player finished");

        self.pending = Some(Announcement::ranked(
            player,
            rank,
            format!("{} finished #{rank}", record.color()),
        ));

        if self.hunter.map_or(false, |h| h.owner() == player) {
            self.hunter = self.trailing_player().map(Hunter::spawn);
            turn.hunter_transfer = self.hunter.map(|h| h.owner());
            info!(heir = ?turn.hunter_transfer, "hunter handed down");
        }
    }

    fn next_rank(&self) -> u8 {
        (self.finish_order.len() + 1) as u8
    }

    /// Unfinished player furthest behind; ties go to the lowest seat.
    fn trailing_player(&self) -> Option<PlayerId> {
        self.players
            .iter()
            .filter(|(_, p)| !p.is_finished())
            .min_by_key(|(id, p)| (p.square(), *id))
            .map(|(id, _)| id)
    }

    fn pass_turn(&mut self) {
        let count = self.players.player_count();
        let mut next = self.active;

        for _ in 0..count {
            next = next.next(count);
            if !self.players[next].is_finished() {
                self.active = next;
                self.phase = GamePhase::WaitingForRoll;
                debug!(player = %next, "turn passed");
                return;
            }
        }

        self.finish_match();
    }

    fn finish_match(&mut self) {
        if let Some(last) = self.trailing_player() {
            let rank = self.next_rank();
            self.players[last].set_rank(rank);
        }
        self.phase = GamePhase::GameOver;
        info!(ranking = ?self.finish_order, "snald match over");
    }
}

impl TurnController for SnaldGame {
    type Turn = SnaldTurn;

    fn phase(&self) -> GamePhase {
        self.phase
    }

    fn active_player(&self) -> PlayerId {
        self.active
    }

    fn player_count(&self) -> usize {
        self.players.player_count()
    }

    fn dice_value(&self) -> Option<u8> {
        self.dice
    }

    #[instrument(skip(self))]
    fn roll_dice(&mut self) -> Result<SnaldTurn, CommandError> {
        require_phase("roll_dice", self.phase, GamePhase::WaitingForRoll).map_err(|err| {
            debug!(%err, "roll rejected");
            err
        })?;
        let roll = self.rng.roll_die();
        Ok(self.play(roll))
    }

    #[instrument(skip(self))]
    fn roll_dice_with(&mut self, value: u8) -> Result<SnaldTurn, CommandError> {
        require_phase("roll_dice", self.phase, GamePhase::WaitingForRoll).map_err(|err| {
            debug!(%err, "roll rejected");
            err
        })?;
        check_roll(value).map_err(|err| {
            warn!(%err, "host supplied a bad die value");
            err
        })?;
        Ok(self.play(value))
    }

    #[instrument(skip(self))]
    fn on_animations_finished(&mut self) -> Result<Option<Announcement>, CommandError> {
        require_phase("on_animations_finished", self.phase, GamePhase::Animating)?;
        let announcement = self.pending.take();

        if self.unfinished_count() <= 1 {
            self.finish_match();
        } else {
            self.pass_turn();
        }

        Ok(announcement)
    }

    #[instrument(skip(self))]
    fn pause(&mut self) -> Result<(), CommandError> {
        if !self.phase.is_active_play() {
            return Err(CommandError::WrongPhase {
                command: "pause",
                actual: self.phase,
            });
        }
        self.paused_from = Some(self.phase);
        self.phase = GamePhase::Paused;
        debug!("paused");
        Ok(())
    }

    #[instrument(skip(self))]
    fn resume(&mut self) -> Result<(), CommandError> {
        require_phase("resume", self.phase, GamePhase::Paused)?;
        self.phase = self.paused_from.take().unwrap_or(GamePhase::WaitingForRoll);
        debug!(phase = %self.phase, "resumed");
        Ok(())
    }

    #[instrument(skip(self))]
    fn abandon(&mut self) {
        if self.phase == GamePhase::GameOver {
            return;
        }
        self.phase = GamePhase::GameOver;
        self.paused_from = None;
        self.pending = None;
        self.abandoned = true;
        info!("snald match abandoned");
    }

    fn result(&self) -> Option<MatchResult> {
        if self.phase != GamePhase::GameOver || self.abandoned {
            return None;
        }
        Some(MatchResult {
            ranking: self.finish_order.clone(),
            last: self.trailing_player(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn restored(squares: &[(u8, u8)], hunter: Option<Hunter>) -> SnaldGame {
        let players: Vec<_> = squares
            .iter()
            .enumerate()
            .map(|(i, &(sq, stars))| SnaldPlayer::at(PlayerId::new(i as u8), sq, stars))
            .collect();
        let mut snapshot = SnaldGameBuilder::new()
            .player_count(players.len())
            .build(1)
            .snapshot();
        snapshot.players = players;
        snapshot.hunter = hunter;
        SnaldGame::restore(snapshot).unwrap()
    }

    #[test]
    fn test_builder_defaults() {
        let game = SnaldGameBuilder::new().build(42);
        assert_eq!(game.player_count(), 2);
        assert_eq!(game.phase(), GamePhase::WaitingForRoll);
        assert_eq!(game.active_player(), PlayerId::new(0));
        assert!(game.hunter().is_none());
    }

    #[test]
    #[should_panic(expected = "Player count must be 2-4")]
    fn test_builder_rejects_one_player() {
        let _ = SnaldGameBuilder::new().player_count(1);
    }

    #[test]
    fn test_roll_moves_and_passes() {
        let mut game = SnaldGameBuilder::new().build(42);

        let turn = game.roll_dice_with(2).unwrap();
        assert_eq!(turn.outcome, SnaldOutcome::NormalMove { to: 3 });
        assert_eq!(game.phase(), GamePhase::Animating);
        assert_eq!(game.roll_dice_with(2), Err(CommandError::WrongPhase {
            command: "roll_dice",
            actual: GamePhase::Animating,
        }));

        assert_eq!(game.on_animations_finished(), Ok(None));
        assert_eq!(game.active_player(), PlayerId::new(1));
        assert_eq!(game.phase(), GamePhase::WaitingForRoll);
    }

    #[test]
    fn test_bad_roll_rejected_without_mutation() {
        let mut game = SnaldGameBuilder::new().build(42);
        assert_eq!(game.roll_dice_with(0), Err(CommandError::InvalidRoll(0)));
        assert_eq!(game.phase(), GamePhase::WaitingForRoll);
        assert_eq!(game.dice_value(), None);
    }

    #[test]
    fn test_second_star_spawns_hunter_and_walks_it() {
        let mut game = restored(&[(90, 1), (50, 0)], None);

        let turn = game.roll_dice_with(4).unwrap();
        assert_eq!(turn.outcome, SnaldOutcome::HunterSpawned { at: 94, stars: 2 });
        assert_eq!(turn.hunter_transfer, Some(PlayerId::new(0)));

        // Spawned on 100 and walked 8 back.
        let walk = turn.hunter.unwrap();
        assert_eq!(walk.path.len(), 8);
        assert_eq!(game.hunter().map(|h| h.square()), Some(92));
    }

    #[test]
    fn test_collision_kills_unshielded() {
        let mut game = restored(&[(30, 0), (33, 0)], None);

        let turn = game.roll_dice_with(3).unwrap();
        let strike = turn.collision.unwrap();
        assert!(strike.is_kill());
        assert_eq!(game.players()[PlayerId::new(1)].square(), 1);
        assert_eq!(game.players()[PlayerId::new(0)].kills(), 1);
        assert_eq!(turn.sound(), SoundCue::Kill);
    }

    #[test]
    fn test_collision_absorbed_by_star() {
        let mut game = restored(&[(30, 0), (33, 2)], None);

        let turn = game.roll_dice_with(3).unwrap();
        assert_eq!(
            turn.collision,
            Some(Strike::Absorbed {
                victim: PlayerId::new(1),
                stars_left: 1,
            })
        );
        assert_eq!(game.players()[PlayerId::new(1)].square(), 33);
        assert_eq!(turn.sound(), SoundCue::ShieldBreak);
    }

    #[test]
    fn test_killing_hunter_owner_captures_hunter() {
        let mut game = restored(
            &[(30, 0), (33, 0)],
            Some(Hunter::at(PlayerId::new(1), 70)),
        );

        let turn = game.roll_dice_with(3).unwrap();
        assert_eq!(turn.hunter_transfer, Some(PlayerId::new(0)));
        let hunter = game.hunter().unwrap();
        assert_eq!(hunter.owner(), PlayerId::new(0));
        assert_eq!(hunter.square(), 100);
    }

    #[test]
    fn test_win_hands_hunter_to_trailing_player() {
        let mut game = restored(
            &[(96, 3), (40, 0), (12, 0)],
            Some(Hunter::at(PlayerId::new(0), 50)),
        );

        let turn = game.roll_dice_with(4).unwrap();
        assert_eq!(turn.outcome, SnaldOutcome::Win { at: 100 });
        assert!(turn.hunter.is_none());
        assert_eq!(turn.hunter_transfer, Some(PlayerId::new(2)));
        assert_eq!(game.hunter(), Some(Hunter::spawn(PlayerId::new(2))));
        assert_eq!(game.players()[PlayerId::new(0)].rank(), Some(1));

        let banner = game.on_animations_finished().unwrap().unwrap();
        assert_eq!(banner.rank, Some(1));
        assert_eq!(game.active_player(), PlayerId::new(1));
    }

    #[test]
    fn test_last_win_ends_match() {
        let mut game = restored(&[(98, 0), (20, 0)], None);

        game.roll_dice_with(2).unwrap();
        game.on_animations_finished().unwrap();

        assert!(game.is_over());
        let result = game.result().unwrap();
        assert_eq!(result.ranking, vec![PlayerId::new(0)]);
        assert_eq!(result.last, Some(PlayerId::new(1)));
        assert_eq!(game.players()[PlayerId::new(1)].rank(), Some(2));
        assert_eq!(game.roll_dice(), Err(CommandError::MatchOver));
    }

    #[test]
    fn test_pause_and_resume() {
        let mut game = SnaldGameBuilder::new().build(3);
        game.roll_dice_with(1).unwrap();

        game.pause().unwrap();
        assert_eq!(game.phase(), GamePhase::Paused);
        assert!(game.on_animations_finished().is_err());
        assert!(game.pause().is_err());

        game.resume().unwrap();
        assert_eq!(game.phase(), GamePhase::Animating);
    }

    #[test]
    fn test_abandon_has_no_result() {
        let mut game = SnaldGameBuilder::new().build(3);
        game.abandon();
        assert!(game.is_over());
        assert!(game.result().is_none());
        assert_eq!(game.roll_dice(), Err(CommandError::MatchOver));
    }
}
