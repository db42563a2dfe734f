//! Error types.
//!
//! A rejected command never changes state: the reducer returns the error
//! and the caller keeps its snapshot.

use thiserror::Error;

use super::player::PlayerId;
use super::state::Phase;
use crate::tiles::TileId;

/// Why a command was rejected.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RuleViolation {
    #[error("the match is over")]
    GameOver,
    #[error("command not allowed in {actual:?} phase")]
    WrongPhase { actual: Phase },
    #[error("{0} cannot guess at their own tiles")]
    SelfTarget(PlayerId),
    #[error("{0} is not seated in this match")]
    UnknownPlayer(PlayerId),
    #[error("{0} is already eliminated")]
    TargetEliminated(PlayerId),
    #[error("tile index {index} out of range for a hand of {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("tile at index {0} is already revealed")]
    AlreadyRevealed(usize),
    #[error("guess value {0} is outside this match's value domain")]
    ValueOutOfDomain(crate::tiles::TileValue),
    #[error("{0} is not in any hand or the drawn slot")]
    UnknownTile(TileId),
    #[error("{0} is not a wildcard that can still be moved")]
    NotRepositionable(TileId),
    #[error("{0} is not in the active player's hand or drawn slot")]
    NotYourTile(TileId),
    #[error("hand order cannot keep {tile} at position {position}")]
    PlacementUnavailable { tile: TileId, position: usize },
    #[error("position {position} out of range (max {max})")]
    PositionOutOfRange { position: usize, max: usize },
    #[error("{0} is not automated")]
    NotAutomated(PlayerId),
    #[error("{0} is automated and ends the turn after a hit")]
    AutomatedChain(PlayerId),
    #[error("agent had no move to make")]
    NoDecision,
}

/// Why a match could not be set up.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SetupError {
    #[error("player count {got} out of range ({min}..={max})")]
    PlayerCount { got: usize, min: usize, max: usize },
    #[error("value count {got} out of range (1..={max})")]
    ValueCount { got: u8, max: u8 },
    #[error("tiles per hand must be at least 1")]
    EmptyHands,
    #[error("not enough tiles: need {needed}, supply has {available}")]
    NotEnoughTiles { needed: usize, available: usize },
    #[error("{0} appears more than once")]
    DuplicateTile(TileId),
    #[error("{0} has a non-finite sort key")]
    NonFiniteKey(TileId),
}
