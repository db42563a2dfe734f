//! Match configuration.
//!
//! The host fills in a [`MatchConfig`] (usually from its setup form) and
//! hands it to [`crate::setup::new_match`]. [`MatchRules`] is the part of the
//! configuration the engine keeps inside the state for the whole match.

use serde::{Deserialize, Serialize};

use super::error::SetupError;
use crate::tiles::TileValue;

/// Smallest supported table.
pub const MIN_PLAYERS: usize = 2;
/// Largest supported table.
pub const MAX_PLAYERS: usize = 4;
/// Upper bound on distinct numeric faces.
pub const MAX_VALUE_COUNT: u8 = 64;

/// One seat at the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSetup {
    pub name: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub automated: bool,
}

impl PlayerSetup {
    /// A human seat.
    pub fn human(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            avatar: String::new(),
            automated: false,
        }
    }

    /// An agent-driven seat.
    pub fn automated(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            avatar: String::new(),
            automated: true,
        }
    }

    #[must_use]
    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = avatar.into();
        self
    }
}

/// Rules that stay fixed for a whole match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRules {
    /// Numeric faces are `0..value_count`.
    pub value_count: u8,
    /// Whether the two wildcards are in the supply.
    pub wildcards: bool,
    /// Host-enforced turn timer. The engine only stores it.
    pub turn_timer_secs: u32,
}

impl Default for MatchRules {
    fn default() -> Self {
        Self {
            value_count: 12,
            wildcards: true,
            turn_timer_secs: 30,
        }
    }
}

impl MatchRules {
    /// Every value a guess may name, numbers first.
    #[must_use]
    pub fn guess_domain(&self) -> Vec<TileValue> {
        let mut values: Vec<_> = (0..self.value_count).map(TileValue::Number).collect();
        if self.wildcards {
            values.push(TileValue::Wildcard);
        }
        values
    }

    /// Whether a guess names a value this match can contain.
    #[must_use]
    pub fn allows(&self, value: TileValue) -> bool {
        match value {
            TileValue::Number(n) => n < self.value_count,
            TileValue::Wildcard => self.wildcards,
        }
    }

    /// Size of the full supply.
    #[must_use]
    pub fn supply_size(&self) -> usize {
        self.value_count as usize * 2 + if self.wildcards { 2 } else { 0 }
    }
}

/// Complete setup for a new match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    pub players: Vec<PlayerSetup>,
    #[serde(default)]
    pub rules: MatchRules,
    /// Overrides the per-table-size deal.
    #[serde(default)]
    pub tiles_per_hand: Option<usize>,
}

impl MatchConfig {
    /// Create a config with default rules.
    pub fn new(players: Vec<PlayerSetup>) -> Self {
        Self {
            players,
            rules: MatchRules::default(),
            tiles_per_hand: None,
        }
    }

    #[must_use]
    pub fn with_value_count(mut self, value_count: u8) -> Self {
        self.rules.value_count = value_count;
        self
    }

    #[must_use]
    pub fn with_wildcards(mut self, wildcards: bool) -> Self {
        self.rules.wildcards = wildcards;
        self
    }

    #[must_use]
    pub fn with_turn_timer(mut self, secs: u32) -> Self {
        self.rules.turn_timer_secs = secs;
        self
    }

    #[must_use]
    pub fn with_tiles_per_hand(mut self, tiles: usize) -> Self {
        self.tiles_per_hand = Some(tiles);
        self
    }

    /// Tiles dealt to each player: 4 at a table of 2 or 3, 3 at a table of 4,
    /// unless overridden.
    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.tiles_per_hand
            .unwrap_or(if self.players.len() >= 4 { 3 } else { 4 })
    }

    /// Check the config describes a playable match.
    pub fn validate(&self) -> Result<(), SetupError> {
        let count = self.players.len();
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&count) {
            return Err(SetupError::PlayerCount {
                got: count,
                min: MIN_PLAYERS,
                max: MAX_PLAYERS,
            });
        }
        if self.rules.value_count == 0 || self.rules.value_count > MAX_VALUE_COUNT {
            return Err(SetupError::ValueCount {
                got: self.rules.value_count,
                max: MAX_VALUE_COUNT,
            });
        }
        let hand_size = self.hand_size();
        if hand_size == 0 {
            return Err(SetupError::EmptyHands);
        }
        let needed = hand_size * count;
        let available = self.rules.supply_size();
        if needed > available {
            return Err(SetupError::NotEnoughTiles { needed, available });
        }
        Ok(())
    }
}
