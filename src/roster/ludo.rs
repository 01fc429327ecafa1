//! Ludo player records.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::TokenPos;
use crate::core::{PlayerColor, PlayerId};

/// Inline storage for up to four tokens.
pub type TokenSlots<T> = SmallVec<[T; 4]>;

/// One seat: its tokens, their shields, and match statistics.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LudoPlayer {
    id: PlayerId,
    color: PlayerColor,
    is_bot: bool,
    tokens: TokenSlots<TokenPos>,
    shields: TokenSlots<bool>,
    kills: u32,
    deaths: u32,
    sixes_rolled: u32,
}

impl LudoPlayer {
    /// A seat with every token in base.
    #[must_use]
    pub fn new(id: PlayerId, token_count: usize, is_bot: bool) -> Self {
        Self {
            id,
            color: PlayerColor::for_seat(id),
            is_bot,
            tokens: SmallVec::from_elem(TokenPos::Base, token_count),
            shields: SmallVec::from_elem(false, token_count),
            kills: 0,
            deaths: 0,
            sixes_rolled: 0,
        }
    }

    /// A seat with tokens at the given positions and no shields.
    ///
    /// Used to set up puzzles and restore positions; the controller still
    /// owns any record it is handed.
    #[must_use]
    pub fn with_positions(id: PlayerId, positions: &[TokenPos], is_bot: bool) -> Self {
        Self {
            tokens: SmallVec::from_slice(positions),
            shields: SmallVec::from_elem(false, positions.len()),
            ..Self::new(id, 0, is_bot)
        }
    }

    /// Give a token a shield (builder pattern).
    #[must_use]
    pub fn shielded(mut self, index: usize) -> Self {
        self.set_shield(index, true);
        self
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn color(&self) -> PlayerColor {
        self.color
    }

    #[must_use]
    pub fn is_bot(&self) -> bool {
        self.is_bot
    }

    /// Display name, with a marker for bots.
    #[must_use]
    pub fn display_name(&self) -> String {
        if self.is_bot {
            format!("BOT {}", self.color)
        } else {
            self.color.to_string()
        }
    }

    #[must_use]
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn tokens(&self) -> &[TokenPos] {
        &self.tokens
    }

    #[must_use]
    pub fn token(&self, index: usize) -> Option<TokenPos> {
        self.tokens.get(index).copied()
    }

    #[must_use]
    pub fn has_shield(&self, index: usize) -> bool {
        self.shields.get(index).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn shields(&self) -> &[bool] {
        &self.shields
    }

    /// Tokens currently on the path (home stretch included, home excluded).
    #[must_use]
    pub fn tokens_on_track(&self) -> usize {
        self.tokens.iter().filter(|t| t.is_on_track()).count()
    }

    #[must_use]
    pub fn finished_count(&self) -> usize {
        self.tokens.iter().filter(|t| **t == TokenPos::Home).count()
    }

    /// All tokens are home.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        !self.tokens.is_empty() && self.finished_count() == self.tokens.len()
    }

    #[must_use]
    pub fn kills(&self) -> u32 {
        self.kills
    }

    #[must_use]
    pub fn deaths(&self) -> u32 {
        self.deaths
    }

    #[must_use]
    pub fn sixes_rolled(&self) -> u32 {
        self.sixes_rolled
    }

    /// Move a token. Tokens at home never move again and never keep a
    /// shield; returns whether the position changed.
    pub(crate) fn set_token(&mut self, index: usize, pos: TokenPos) -> bool {
        match self.tokens.get_mut(index) {
            Some(slot) if *slot != TokenPos::Home => {
                *slot = pos;
                if pos == TokenPos::Home {
                    self.set_shield(index, false);
                }
                true
            }
            _ => false,
        }
    }

    pub(crate) fn set_shield(&mut self, index: usize, shielded: bool) {
        if let Some(slot) = self.shields.get_mut(index) {
            *slot = shielded;
        }
    }

    /// Send a killed token back to base, dropping any shield.
    pub(crate) fn send_to_base(&mut self, index: usize) {
        if self.set_token(index, TokenPos::Base) {
            self.set_shield(index, false);
            self.deaths += 1;
        }
    }

    pub(crate) fn record_kill(&mut self) {
        self.kills += 1;
    }

    pub(crate) fn record_six(&mut self) {
        self.sixes_rolled += 1;
    }

    /// Check that tokens and shields line up and fall in `1..=4`.
    pub(crate) fn is_well_formed(&self) -> bool {
        (1..=4).contains(&self.tokens.len()) && self.tokens.len() == self.shields.len()
    }
}
