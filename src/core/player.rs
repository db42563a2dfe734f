//! Players and their hands.
//!
//! ## PlayerId
//!
//! Seat index, 0-based. Seating order is turn order.
//!
//! ## Player
//!
//! Display data plus the hand. The hand is private so every structural
//! change goes through a method that re-sorts it, and the eliminated flag
//! can only be derived from hand contents.

use serde::{Deserialize, Serialize};

use crate::tiles::{insertion_index, sort_hand, Tile};

/// Player identifier (seat index).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a match with `player_count` seats.
    ///
    /// ```
    /// use rust_tilecode::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(players, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A seated player.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub avatar: String,
    /// Driven by the opponent agent rather than a person.
    pub automated: bool,
    hand: Vec<Tile>,
    eliminated: bool,
}

impl Player {
    /// Create a player with an empty hand.
    pub fn new(id: PlayerId, name: impl Into<String>, automated: bool) -> Self {
        Self {
            id,
            name: name.into(),
            avatar: String::new(),
            automated,
            hand: Vec::new(),
            eliminated: false,
        }
    }

    /// Set the avatar token.
    #[must_use]
    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = avatar.into();
        self
    }

    /// Give this player a hand. Tiles are claimed and sorted.
    #[must_use]
    pub fn with_hand(mut self, tiles: impl IntoIterator<Item = Tile>) -> Self {
        for mut tile in tiles {
            tile.set_owner(self.id);
            self.hand.push(tile);
        }
        sort_hand(&mut self.hand);
        self.refresh_elimination();
        self
    }

    /// The hand, in canonical order.
    #[must_use]
    pub fn hand(&self) -> &[Tile] {
        &self.hand
    }

    #[must_use]
    pub fn is_eliminated(&self) -> bool {
        self.eliminated
    }

    /// Number of tiles opponents can still guess at.
    #[must_use]
    pub fn hidden_count(&self) -> usize {
        self.hand.iter().filter(|t| !t.is_revealed()).count()
    }

    /// Indices of unrevealed tiles, in hand order.
    pub fn hidden_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.hand
            .iter()
            .enumerate()
            .filter(|(_, t)| !t.is_revealed())
            .map(|(i, _)| i)
    }

    /// Position of a tile in the hand.
    #[must_use]
    pub fn position_of(&self, tile: crate::tiles::TileId) -> Option<usize> {
        self.hand.iter().position(|t| t.id == tile)
    }

    /// Move to another seat, carrying the hand along.
    pub(crate) fn reseat(&mut self, id: PlayerId) {
        self.id = id;
        for tile in &mut self.hand {
            tile.set_owner(id);
        }
    }

    /// Insert in hand order, ahead of any tiles the new one ties with.
    pub(crate) fn insert_tile(&mut self, mut tile: Tile) {
        tile.set_owner(self.id);
        let index = insertion_index(&self.hand, &tile);
        self.hand.insert(index, tile);
    }

    pub(crate) fn take_tile(&mut self, index: usize) -> Option<Tile> {
        (index < self.hand.len()).then(|| self.hand.remove(index))
    }

    pub(crate) fn tile_mut(&mut self, index: usize) -> Option<&mut Tile> {
        self.hand.get_mut(index)
    }

    pub(crate) fn resort(&mut self) {
        sort_hand(&mut self.hand);
    }

    /// Recompute the eliminated flag from the hand.
    ///
    /// Returns true if this call newly eliminated the player. An empty hand
    /// does not count as fully revealed. Never clears the flag.
    pub(crate) fn refresh_elimination(&mut self) -> bool {
        if self.eliminated || self.hand.is_empty() {
            return false;
        }
        if self.hand.iter().all(Tile::is_revealed) {
            self.eliminated = true;
            return true;
        }
        false
    }
}
