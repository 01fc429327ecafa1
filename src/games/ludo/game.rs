//! Ludo turn controller.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::board::ludo::{self, Coord, TokenPos};
use crate::bot::GreedyBot;
use crate::core::{
    Announcement, AnnouncementKind, CommandError, GamePhase, GameRng, KillInfo, LudoConfig,
    PlayerId, PlayerMap, SafeZoneTimer, SnapshotError, SoundCue, MAX_PLAYERS,
};
use crate::games::{check_roll, require_phase, MatchResult, TurnController};
use crate::roster::LudoPlayer;
use crate::rules::ludo::SPAWN_ROLL;
use crate::rules::{LegalTokens, LudoOutcome, LudoRuleEngine};

use super::snapshot::LudoSnapshot;

/// What a roll led to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RollResult {
    /// No token could move; the turn passed and any extra turn was lost.
    Forfeited { player: PlayerId, roll: u8 },
    /// A single legal token (or the bot's pick) was moved.
    Moved(TurnUpdate),
    /// Several tokens can move; call `select_token`.
    AwaitingSelection {
        player: PlayerId,
        roll: u8,
        legal: LegalTokens,
    },
}

/// An applied move, with what the host needs to animate it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnUpdate {
    pub player: PlayerId,
    pub token: usize,
    pub roll: u8,
    pub from: TokenPos,
    pub to: TokenPos,
    /// Squares to hop. Spawns jump straight to the start square.
    pub visual_steps: u8,
    pub is_spawn: bool,
    pub sound: SoundCue,
    pub kill: Option<KillInfo>,
    pub outcome: LudoOutcome,
    /// Whether the same player rolls again after the animation.
    pub extra_turn: bool,
}

/// Side effect held back until the host finished animating.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PendingEffect {
    /// Grant a shield and consume the dynamic zone.
    ShieldGrant {
        player: PlayerId,
        token: usize,
        zone: Coord,
    },
    /// Remove the victim's shield.
    ShieldBreak {
        victim_player: PlayerId,
        victim_token: usize,
    },
    /// Announce a token home, and rank the player if it was the last one.
    TokenHome { player: PlayerId },
}

impl PendingEffect {
    /// Player whose record the effect touches.
    #[must_use]
    pub fn player(&self) -> PlayerId {
        match *self {
            PendingEffect::ShieldGrant { player, .. } | PendingEffect::TokenHome { player } => {
                player
            }
            PendingEffect::ShieldBreak { victim_player, .. } => victim_player,
        }
    }
}

/// Builder for creating a `LudoGame`.
pub struct LudoGameBuilder {
    config: LudoConfig,
}

impl Default for LudoGameBuilder {
    fn default() -> Self {
        Self {
            config: LudoConfig::default(),
        }
    }
}

impl LudoGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn player_count(mut self, count: usize) -> Self {
        assert!((2..=MAX_PLAYERS).contains(&count), "Player count must be 2-4");
        self.config.player_count = count;
        self
    }

    /// Seats taken by bots, counted from the last seat.
    pub fn bot_count(mut self, count: usize) -> Self {
        assert!(count <= MAX_PLAYERS, "Bot count must be 0-4");
        self.config.bot_count = count;
        self
    }

    pub fn token_count(mut self, count: usize) -> Self {
        assert!((1..=4).contains(&count), "Token count must be 1-4");
        self.config.token_count = count;
        self
    }

    pub fn safe_zone_interval(mut self, ticks: u32) -> Self {
        assert!(ticks > 0, "Safe zone interval must be positive");
        self.config.safe_zone_interval = ticks;
        self
    }

    /// Take every setting from a stored configuration.
    pub fn config(mut self, config: LudoConfig) -> Self {
        if let Err(msg) = config.validate() {
            panic!("{msg}");
        }
        self.config = config;
        self
    }

    /// Build a match with every token in base and the first seat to roll.
    pub fn build(self, seed: u64) -> LudoGame {
        let config = self.config;
        assert!(
            config.bot_count <= config.player_count,
            "Bot count exceeds player count"
        );

        let first_bot = config.human_count();
        let players = PlayerMap::new(config.player_count, |id| {
            LudoPlayer::new(id, config.token_count, id.index() >= first_bot)
        });
        info!(
            players = config.player_count,
            bots = config.bot_count,
            tokens = config.token_count,
            seed,
            "ludo match created"
        );

        LudoGame {
            timer: SafeZoneTimer::new(config.safe_zone_interval),
            config,
            players,
            active: PlayerId::new(0),
            dice: None,
            phase: GamePhase::WaitingForRoll,
            paused_from: None,
            finish_order: Vec::new(),
            dynamic_zone: None,
            extra_turn: false,
            pending: None,
            abandoned: false,
            rng: GameRng::new(seed),
            engine: LudoRuleEngine::new(),
            bot: GreedyBot::new(),
        }
    }
}

/// Authoritative state of one Ludo match.
#[derive(Clone, Debug)]
pub struct LudoGame {
    config: LudoConfig,
    players: PlayerMap<LudoPlayer>,
    active: PlayerId,
    dice: Option<u8>,
    phase: GamePhase,
    paused_from: Option<GamePhase>,
    finish_order: Vec<PlayerId>,
    timer: SafeZoneTimer,
    dynamic_zone: Option<Coord>,
    extra_turn: bool,
    pending: Option<PendingEffect>,
    abandoned: bool,
    rng: GameRng,
    engine: LudoRuleEngine,
    bot: GreedyBot,
}

impl LudoGame {
    #[must_use]
    pub fn config(&self) -> &LudoConfig {
        &self.config
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<LudoPlayer> {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&LudoPlayer> {
        self.players.try_get(id)
    }

    #[must_use]
    pub fn dynamic_zone(&self) -> Option<Coord> {
        self.dynamic_zone
    }

    /// Ticks left before the next dynamic safe zone.
    #[must_use]
    pub fn timer_remaining(&self) -> u32 {
        self.timer.remaining()
    }

    #[must_use]
    pub fn timer_stopped(&self) -> bool {
        self.timer.is_stopped()
    }

    /// Whether the active player rolls again after the current move.
    #[must_use]
    pub fn extra_turn_pending(&self) -> bool {
        self.extra_turn
    }

    #[must_use]
    pub fn pending_effect(&self) -> Option<PendingEffect> {
        self.pending
    }

    /// Players in the order they brought every token home.
    #[must_use]
    pub fn finish_order(&self) -> &[PlayerId] {
        &self.finish_order
    }

    /// 1-based finishing rank, once the player finished.
    #[must_use]
    pub fn rank_of(&self, player: PlayerId) -> Option<u8> {
        self.finish_order
            .iter()
            .position(|&p| p == player)
            .map(|pos| (pos + 1) as u8)
    }

    #[must_use]
    pub fn unfinished_count(&self) -> usize {
        self.players.iter().filter(|(_, p)| !p.is_finished()).count()
    }

    /// The host should call `roll_dice` for a bot now.
    #[must_use]
    pub fn is_bot_turn(&self) -> bool {
        self.phase == GamePhase::WaitingForRoll && self.players[self.active].is_bot()
    }

    /// Tokens the active player may select, while waiting for a move.
    #[must_use]
    pub fn legal_tokens(&self) -> LegalTokens {
        match (self.phase, self.dice) {
            (GamePhase::WaitingForMove, Some(roll)) => {
                self.engine
                    .legal_tokens(self.active, roll, &self.players, self.dynamic_zone)
            }
            _ => LegalTokens::new(),
        }
    }

    /// Move the chosen token after a roll with several legal moves.
    ///
    /// Stale or illegal indices are rejected and nothing changes.
    #[instrument(skip(self))]
    pub fn select_token(&mut self, index: usize) -> Result<TurnUpdate, CommandError> {
        require_phase("select_token", self.phase, GamePhase::WaitingForMove)?;
        let roll = self.dice.ok_or(CommandError::WrongPhase {
            command: "select_token",
            actual: self.phase,
        })?;

        self.apply(index, roll).map_err(|err| {
            warn!(%err, "selection rejected");
            err
        })
    }

    /// One host second. Spawns a new dynamic safe zone when the countdown
    /// expires and returns it.
    ///
    /// Ignored outside active play. When the timer fires but every
    /// candidate square is taken, the old zone is cleared and `None` is
    /// returned.
    pub fn tick(&mut self) -> Option<Coord> {
        if !self.phase.is_active_play() || !self.timer.tick() {
            return None;
        }

        self.dynamic_zone = self.pick_zone();
        debug!(zone = ?self.dynamic_zone, "dynamic safe zone moved");
        self.dynamic_zone
    }

    /// Capture the match for persistence.
    #[must_use]
    pub fn snapshot(&self) -> LudoSnapshot {
        LudoSnapshot {
            config: self.config.clone(),
            players: self.players.records().to_vec(),
            active: self.active,
            dice: self.dice,
            phase: self.phase,
            paused_from: self.paused_from,
            finish_order: self.finish_order.clone(),
            timer_seconds: self.timer.remaining(),
            dynamic_zone: self.dynamic_zone,
            extra_turn: self.extra_turn,
            pending: self.pending,
            abandoned: self.abandoned,
            rng: self.rng.state(),
        }
    }

    /// Rebuild a match from a snapshot, continuing the same dice stream.
    pub fn restore(snapshot: LudoSnapshot) -> Result<Self, SnapshotError> {
        snapshot.validate()?;

        let players = PlayerMap::from_records(snapshot.players)
            .ok_or_else(|| SnapshotError::Corrupt("no player records".to_string()))?;
        let mut timer =
            SafeZoneTimer::resume_at(snapshot.config.safe_zone_interval, snapshot.timer_seconds);
        if snapshot.phase == GamePhase::GameOver {
            timer.stop();
        }
        debug!(phase = %snapshot.phase, active = %snapshot.active, "ludo match restored");

        Ok(Self {
            config: snapshot.config,
            players,
            active: snapshot.active,
            dice: snapshot.dice,
            phase: snapshot.phase,
            paused_from: snapshot.paused_from,
            finish_order: snapshot.finish_order,
            timer,
            dynamic_zone: snapshot.dynamic_zone,
            extra_turn: snapshot.extra_turn,
            pending: snapshot.pending,
            abandoned: snapshot.abandoned,
            rng: GameRng::from_state(&snapshot.rng),
            engine: LudoRuleEngine::new(),
            bot: GreedyBot::new(),
        })
    }

    fn play(&mut self, roll: u8) -> Result<RollResult, CommandError> {
        let player = self.active;
        self.dice = Some(roll);
        self.extra_turn = roll == SPAWN_ROLL;
        if self.extra_turn {
            self.players[player].record_six();
        }
        self.phase = GamePhase::Animating;

        let legal = self
            .engine
            .legal_tokens(player, roll, &self.players, self.dynamic_zone);
        debug!(%player, roll, legal = ?legal.as_slice(), "rolled");

        match legal.len() {
            0 => {
                self.extra_turn = false;
                self.pass_turn();
                Ok(RollResult::Forfeited { player, roll })
            }
            1 => Ok(RollResult::Moved(self.apply(legal[0], roll)?)),
            _ if self.players[player].is_bot() => {
                let pick = self
                    .bot
                    .best_move(player, roll, &self.players, self.dynamic_zone)
                    .unwrap_or(legal[0]);
                debug!(%player, token = pick, "bot picked");
                Ok(RollResult::Moved(self.apply(pick, roll)?))
            }
            _ => {
                self.phase = GamePhase::WaitingForMove;
                Ok(RollResult::AwaitingSelection {
                    player,
                    roll,
                    legal,
                })
            }
        }
    }

    /// Adjudicate and apply one token move. Fails without mutating when the
    /// token does not exist or cannot move.
    fn apply(&mut self, token: usize, roll: u8) -> Result<TurnUpdate, CommandError> {
        let player = self.active;
        let record = &self.players[player];
        let from = record.token(token).ok_or(CommandError::TokenOutOfRange {
            index: token,
            count: record.token_count(),
        })?;

        let outcome =
            self.engine
                .calculate_move(player, token, from, roll, &self.players, self.dynamic_zone);
        let to = outcome
            .destination()
            .ok_or(CommandError::IllegalMove { index: token, roll })?;

        self.players[player].set_token(token, to);
        let mut kill = None;

        match outcome {
            LudoOutcome::Kill {
                victim_player,
                victim_token,
                ..
            } => {
                let victim = &mut self.players[victim_player];
                let victim_from = victim.token(victim_token).map_or(-1, TokenPos::index);
                victim.send_to_base(victim_token);
                self.players[player].record_kill();
                kill = Some(KillInfo {
                    victim_player,
                    victim_token,
                    from: victim_from,
                });
            }
            LudoOutcome::ShieldBreak {
                victim_player,
                victim_token,
                ..
            } => {
                self.pending = Some(PendingEffect::ShieldBreak {
                    victim_player,
                    victim_token,
                });
            }
            LudoOutcome::StarCollected { zone, .. } => {
                self.pending = Some(PendingEffect::ShieldGrant {
                    player,
                    token,
                    zone,
                });
            }
            LudoOutcome::Win => {
                self.pending = Some(PendingEffect::TokenHome { player });
            }
            _ => {}
        }

        if outcome.grants_extra_turn() {
            self.extra_turn = true;
        }
        self.phase = GamePhase::Animating;
        debug!(%player, token, ?from, ?to, ?outcome, "move applied");

        let is_spawn = from == TokenPos::Base;
        Ok(TurnUpdate {
            player,
            token,
            roll,
            from,
            to,
            visual_steps: if is_spawn { 0 } else { roll },
            is_spawn,
            sound: outcome.sound(),
            kill,
            outcome,
            extra_turn: self.extra_turn && !self.players[player].is_finished(),
        })
    }

    fn commit(&mut self, effect: PendingEffect) -> Announcement {
        match effect {
            PendingEffect::ShieldGrant {
                player,
                token,
                zone,
            } => {
                self.players[player].set_shield(token, true);
                if self.dynamic_zone == Some(zone) {
                    self.dynamic_zone = None;
                }
                debug!(%player, token, "shield granted");
                Announcement::new(
                    AnnouncementKind::ShieldGained,
                    player,
                    format!("{} gained a shield", self.players[player].display_name()),
                )
            }
            PendingEffect::ShieldBreak {
                victim_player,
                victim_token,
            } => {
                self.players[victim_player].set_shield(victim_token, false);
                debug!(%victim_player, victim_token, "shield broken");
                Announcement::new(
                    AnnouncementKind::ShieldBroken,
                    victim_player,
                    format!("{} lost a shield", self.players[victim_player].display_name()),
                )
            }
            PendingEffect::TokenHome { player } => {
                let name = self.players[player].display_name();
                let newly_finished =
                    self.players[player].is_finished() && !self.finish_order.contains(&player);
                if !newly_finished {
                    return Announcement::new(
                        AnnouncementKind::TokenHome,
                        player,
                        format!("{name} token reached home"),
                    );
                }

                self.finish_order.push(player);
                let rank = self.finish_order.len() as u8;
                info!(%player, rank, "player finished");
                Announcement::ranked(player, rank, format!("{name} finished #{rank}"))
            }
        }
    }

    /// Random outer-track square that is neither static-safe nor occupied.
    fn pick_zone(&mut self) -> Option<Coord> {
        let occupied: FxHashSet<Coord> = self
            .players
            .iter()
            .flat_map(|(id, p)| {
                p.tokens()
                    .iter()
                    .filter(|t| t.is_on_outer_track())
                    .filter_map(move |&t| ludo::global_coord(id, t))
            })
            .collect();

        let mut candidates: Vec<Coord> = ludo::outer_track()
            .into_iter()
            .filter(|c| !ludo::is_static_safe(*c) && !occupied.contains(c))
            .collect();
        candidates.sort_unstable();

        self.rng.choose(&candidates).copied()
    }

    fn pass_turn(&mut self) {
        let count = self.players.player_count();
        let mut next = self.active;

        if self.unfinished_count() > 1 {
            for _ in 0..count {
                next = next.next(count);
                if !self.players[next].is_finished() {
                    self.active = next;
                    self.phase = GamePhase::WaitingForRoll;
                    debug!(player = %next, "turn passed");
                    return;
                }
            }
        }

        self.finish_match();
    }

    fn finish_match(&mut self) {
        self.phase = GamePhase::GameOver;
        self.extra_turn = false;
        self.timer.stop();
        info!(ranking = ?self.finish_order, "ludo match over");
    }

    fn last_player(&self) -> Option<PlayerId> {
        let mut unfinished = self
            .players
            .iter()
            .filter(|(_, p)| !p.is_finished())
            .map(|(id, _)| id);
        match (unfinished.next(), unfinished.next()) {
            (Some(id), None) => Some(id),
            _ => None,
        }
    }
}

impl TurnController for LudoGame {
    type Turn = RollResult;

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
    fn roll_dice(&mut self) -> Result<RollResult, CommandError> {
        require_phase("roll_dice", self.phase, GamePhase::WaitingForRoll).map_err(|err| {
            debug!(%err, "roll rejected");
            err
        })?;
        let roll = self.rng.roll_die();
        self.play(roll)
    }

    #[instrument(skip(self))]
    fn roll_dice_with(&mut self, value: u8) -> Result<RollResult, CommandError> {
        require_phase("roll_dice", self.phase, GamePhase::WaitingForRoll).map_err(|err| {
            debug!(%err, "roll rejected");
            err
        })?;
        check_roll(value).map_err(|err| {
            warn!(%err, "host supplied a bad die value");
            err
        })?;
        self.play(value)
    }

    #[instrument(skip(self))]
    fn on_animations_finished(&mut self) -> Result<Option<Announcement>, CommandError> {
        require_phase("on_animations_finished", self.phase, GamePhase::Animating)?;
        let announcement = self.pending.take().map(|effect| self.commit(effect));
        let player = self.active;

        if self.unfinished_count() <= 1 {
            self.finish_match();
        } else if self.players[player].is_finished() {
            self.extra_turn = false;
            self.pass_turn();
        } else if self.extra_turn {
            self.extra_turn = false;
            self.phase = GamePhase::WaitingForRoll;
            debug!(%player, "extra turn");
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
        self.extra_turn = false;
        self.abandoned = true;
        self.timer.stop();
        info!("ludo match abandoned");
    }

    fn result(&self) -> Option<MatchResult> {
        if self.phase != GamePhase::GameOver || self.abandoned {
            return None;
        }
        Some(MatchResult {
            ranking: self.finish_order.clone(),
            last: self.last_player(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: PlayerId = PlayerId::new(0);
    const GREEN: PlayerId = PlayerId::new(1);

    fn restored(players: Vec<LudoPlayer>) -> LudoGame {
        let mut snapshot = LudoGameBuilder::new()
            .player_count(players.len())
            .token_count(players[0].token_count())
            .build(9)
            .snapshot();
        snapshot.players = players;
        LudoGame::restore(snapshot).unwrap()
    }

    #[test]
    fn test_builder_seats_bots_last() {
        let game = LudoGameBuilder::new().player_count(3).bot_count(1).build(1);

        assert!(!game.players()[PlayerId::new(0)].is_bot());
        assert!(!game.players()[PlayerId::new(1)].is_bot());
        assert!(game.players()[PlayerId::new(2)].is_bot());
        assert_eq!(game.timer_remaining(), 30);
    }

    #[test]
    #[should_panic(expected = "Token count must be 1-4")]
    fn test_builder_rejects_zero_tokens() {
        let _ = LudoGameBuilder::new().token_count(0);
    }

    #[test]
    fn test_no_legal_move_forfeits() {
        let mut game = LudoGameBuilder::new().player_count(2).build(1);

        let result = game.roll_dice_with(3).unwrap();
        assert_eq!(result, RollResult::Forfeited { player: RED, roll: 3 });
        assert_eq!(game.active_player(), GREEN);
        assert_eq!(game.phase(), GamePhase::WaitingForRoll);
    }

    #[test]
    fn test_spawn_then_extra_turn() {
        let mut game = LudoGameBuilder::new().player_count(2).token_count(1).build(1);

        let RollResult::Moved(update) = game.roll_dice_with(6).unwrap() else {
            panic!("single token should move automatically");
        };
        assert!(update.is_spawn);
        assert_eq!(update.visual_steps, 0);
        assert_eq!(update.to, TokenPos::Track(0));
        assert!(update.extra_turn);
        assert_eq!(game.players()[RED].sixes_rolled(), 1);

        game.on_animations_finished().unwrap();
        assert_eq!(game.active_player(), RED);
        assert_eq!(game.phase(), GamePhase::WaitingForRoll);
    }

    #[test]
    fn test_several_legal_tokens_wait_for_selection() {
        let mut game = restored(vec![
            LudoPlayer::with_positions(RED, &[TokenPos::Track(10), TokenPos::Track(20)], false),
            LudoPlayer::with_positions(GREEN, &[TokenPos::Base, TokenPos::Base], false),
        ]);

        let result = game.roll_dice_with(2).unwrap();
        assert!(matches!(result, RollResult::AwaitingSelection { ref legal, .. } if legal.as_slice() == [0, 1]));
        assert_eq!(game.phase(), GamePhase::WaitingForMove);
        assert_eq!(game.roll_dice_with(2), Err(CommandError::WrongPhase {
            command: "roll_dice",
            actual: GamePhase::WaitingForMove,
        }));

        assert_eq!(
            game.select_token(7),
            Err(CommandError::TokenOutOfRange { index: 7, count: 2 })
        );
        assert_eq!(game.phase(), GamePhase::WaitingForMove);

        let update = game.select_token(1).unwrap();
        assert_eq!(update.to, TokenPos::Track(22));
        assert_eq!(update.visual_steps, 2);
        assert_eq!(game.phase(), GamePhase::Animating);
    }

    #[test]
    fn test_bot_picks_without_selection() {
        let mut snapshot = LudoGameBuilder::new()
            .player_count(2)
            .bot_count(2)
            .token_count(2)
            .build(5)
            .snapshot();
        snapshot.players = vec![
            LudoPlayer::with_positions(RED, &[TokenPos::Track(10), TokenPos::Track(52)], true),
            LudoPlayer::with_positions(GREEN, &[TokenPos::Base, TokenPos::Base], true),
        ];
        let mut game = LudoGame::restore(snapshot).unwrap();
        assert!(game.is_bot_turn());

        let RollResult::Moved(update) = game.roll_dice_with(4).unwrap() else {
            panic!("bot should move without a selection");
        };
        assert_eq!(update.token, 1);
        assert_eq!(update.outcome, LudoOutcome::Win);
    }

    #[test]
    fn test_star_collected_shield_granted_after_animation() {
        let zone = ludo::path_coord(crate::core::PlayerColor::Red, 12).unwrap();
        let mut snapshot = LudoGameBuilder::new()
            .player_count(2)
            .token_count(1)
            .build(5)
            .snapshot();
        snapshot.players = vec![
            LudoPlayer::with_positions(RED, &[TokenPos::Track(9)], false),
            LudoPlayer::with_positions(GREEN, &[TokenPos::Base], false),
        ];
        snapshot.dynamic_zone = Some(zone);
        let mut game = LudoGame::restore(snapshot).unwrap();

        let RollResult::Moved(update) = game.roll_dice_with(3).unwrap() else {
            panic!("expected a move");
        };
        assert_eq!(update.sound, SoundCue::StarCollect);
        assert!(!game.players()[RED].has_shield(0));
        assert_eq!(game.dynamic_zone(), Some(zone));

        let banner = game.on_animations_finished().unwrap().unwrap();
        assert_eq!(banner.kind, AnnouncementKind::ShieldGained);
        assert!(game.players()[RED].has_shield(0));
        assert_eq!(game.dynamic_zone(), None);
        assert_eq!(game.active_player(), GREEN);
    }

    #[test]
    fn test_tick_only_during_play() {
        let mut game = LudoGameBuilder::new()
            .player_count(2)
            .safe_zone_interval(2)
            .build(5);

        assert_eq!(game.tick(), None);
        let zone = game.tick().unwrap();
        assert!(!ludo::is_static_safe(zone));
        assert!(ludo::outer_track().contains(&zone));

        game.pause().unwrap();
        let remaining = game.timer_remaining();
        assert_eq!(game.tick(), None);
        assert_eq!(game.timer_remaining(), remaining);
    }

    #[test]
    fn test_abandon_stops_timer() {
        let mut game = LudoGameBuilder::new().player_count(2).safe_zone_interval(1).build(5);
        game.abandon();

        assert!(game.timer_stopped());
        assert_eq!(game.tick(), None);
        assert!(game.result().is_none());
        assert_eq!(game.select_token(0), Err(CommandError::MatchOver));
    }
}
