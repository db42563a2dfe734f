//! Commands the host (or the agent) sends to the engine.

use serde::{Deserialize, Serialize};

use crate::core::player::PlayerId;
use crate::tiles::{TileId, TileValue};

/// One engine command. The acting player is always the active player,
/// except for wildcard placement, which acts for the tile's owner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Take a tile from the pool.
    Draw,
    /// Name the face of an opponent's hidden tile.
    Guess {
        target: PlayerId,
        /// Position in the target's hand.
        index: usize,
        value: TileValue,
    },
    /// After a hit, guess again.
    ContinueGuessing,
    /// After a hit, stop and keep the drawn tile hidden.
    EndTurn,
    /// Use a wildcard's one-time move: place it before the tile at
    /// `position` among the other tiles of its owner's hand.
    RepositionWildcard { tile: TileId, position: usize },
    /// Draw-phase timer expiry. Same as `Draw`.
    TimeoutDraw,
    /// Guess/Resolve timer expiry. In Guess the drawn tile is revealed.
    TimeoutEndTurn,
}

impl Command {
    /// Shorthand for a guess.
    #[must_use]
    pub fn guess(target: PlayerId, index: usize, value: TileValue) -> Self {
        Self::Guess { target, index, value }
    }

    #[must_use]
    pub fn is_timeout(self) -> bool {
        matches!(self, Command::TimeoutDraw | Command::TimeoutEndTurn)
    }
}
