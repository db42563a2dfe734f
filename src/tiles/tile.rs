//! Tiles: the units of hidden information.
//!
//! A tile is a color plus a face value. Numeric faces live in `0..N` for the
//! configured value count; the wildcard face is a separate variant, never a
//! magic number, so a guess can never collide with a real value by accident.

use serde::{Deserialize, Serialize};

use crate::core::player::PlayerId;

/// Stable tile identifier, unique within a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TileId(pub u16);

impl TileId {
    /// Create a new tile ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile({})", self.0)
    }
}

/// Tile color. `Black` sorts before `White` when sort keys tie.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TileColor {
    Black,
    White,
}

impl TileColor {
    /// Both colors, in hand order.
    pub const ALL: [TileColor; 2] = [TileColor::Black, TileColor::White];
}

/// The face of a tile, and the domain a guess is drawn from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileValue {
    /// A numbered face in `0..value_count`.
    Number(u8),
    /// The wildcard face. Only matched by a wildcard guess.
    Wildcard,
}

impl TileValue {
    #[must_use]
    pub const fn is_wildcard(self) -> bool {
        matches!(self, TileValue::Wildcard)
    }

    /// The numeric face, if any.
    #[must_use]
    pub const fn number(self) -> Option<u8> {
        match self {
            TileValue::Number(n) => Some(n),
            TileValue::Wildcard => None,
        }
    }
}

impl std::fmt::Display for TileValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TileValue::Number(n) => write!(f, "{n}"),
            TileValue::Wildcard => write!(f, "-"),
        }
    }
}

/// A tile and its mutable match state.
///
/// `sort_key` drives hand order. It equals the face value for numbered tiles
/// and never changes for them. Wildcards start past the numeric range and may
/// be moved exactly once; `repositioned` records that the move happened.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    pub id: TileId,
    pub color: TileColor,
    pub value: TileValue,
    sort_key: f64,
    revealed: bool,
    owner: Option<PlayerId>,
    repositioned: bool,
}

impl Tile {
    /// Create an unrevealed, unowned numbered tile.
    #[must_use]
    pub fn number(id: TileId, color: TileColor, value: u8) -> Self {
        Self {
            id,
            color,
            value: TileValue::Number(value),
            sort_key: f64::from(value),
            revealed: false,
            owner: None,
            repositioned: false,
        }
    }

    /// Create an unrevealed, unowned wildcard with the given starting key.
    #[must_use]
    pub fn wildcard(id: TileId, color: TileColor, sort_key: f64) -> Self {
        Self {
            id,
            color,
            value: TileValue::Wildcard,
            sort_key,
            revealed: false,
            owner: None,
            repositioned: false,
        }
    }

    #[must_use]
    pub fn sort_key(&self) -> f64 {
        self.sort_key
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    #[must_use]
    pub fn owner(&self) -> Option<PlayerId> {
        self.owner
    }

    #[must_use]
    pub fn is_wildcard(&self) -> bool {
        self.value.is_wildcard()
    }

    #[must_use]
    pub fn is_repositioned(&self) -> bool {
        self.repositioned
    }

    /// Whether a guess names this tile's face.
    #[must_use]
    pub fn matches(&self, guess: TileValue) -> bool {
        self.value == guess
    }

    /// Can this tile still take its one-time move?
    #[must_use]
    pub fn can_reposition(&self) -> bool {
        self.is_wildcard() && !self.repositioned && !self.revealed
    }

    /// Builder-style reveal, for hosts assembling hands by hand.
    #[must_use]
    pub fn revealed(mut self) -> Self {
        self.revealed = true;
        self
    }

    pub(crate) fn reveal(&mut self) {
        self.revealed = true;
    }

    pub(crate) fn set_owner(&mut self, owner: PlayerId) {
        self.owner = Some(owner);
    }

    /// Move a wildcard to a new key. Returns false (and changes nothing)
    /// once the move has been used or for numbered tiles.
    pub(crate) fn reposition(&mut self, sort_key: f64) -> bool {
        if !self.can_reposition() {
            return false;
        }
        self.sort_key = sort_key;
        self.repositioned = true;
        true
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let color = match self.color {
            TileColor::Black => 'B',
            TileColor::White => 'W',
        };
        write!(f, "{color}{}", self.value)
    }
}
