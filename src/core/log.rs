//! The in-game turn log.
//!
//! Entries are what the table sees: draws, guesses, eliminations and so on.
//! Hidden information (drawn tile faces, wildcard keys) is never logged.
//! The log keeps the most recent [`TurnLog::CAPACITY`] entries, newest first.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::tiles::TileValue;

/// What happened.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogEvent {
    /// Took a tile from the pool.
    Drew,
    /// Pool was empty; went straight to guessing.
    PoolEmpty,
    /// A correct guess.
    GuessHit { target: PlayerId, index: usize, value: TileValue },
    /// A wrong guess.
    GuessMiss { target: PlayerId, index: usize, value: TileValue },
    /// Chose to keep guessing after a hit.
    ContinuedGuessing,
    /// Turn handed on. `revealed_drawn` is set when the drawn tile was
    /// exposed as the cost of a miss or a timeout.
    TurnEnded { revealed_drawn: bool },
    /// The host's timer ran out.
    TimedOut,
    /// A wildcard took its one-time move.
    WildcardPlaced,
    /// Every tile of this player is revealed.
    Eliminated(PlayerId),
    /// Last player standing.
    Victory(PlayerId),
}

/// A log line: who, when, what.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Move counter at the time of the event.
    pub move_number: u32,
    /// The acting player.
    pub player: PlayerId,
    pub event: LogEvent,
}

impl LogEntry {
    #[must_use]
    pub fn new(move_number: u32, player: PlayerId, event: LogEvent) -> Self {
        Self {
            move_number,
            player,
            event,
        }
    }
}

impl std::fmt::Display for LogEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let who = self.player;
        match &self.event {
            LogEvent::Drew => write!(f, "{who} drew a tile"),
            LogEvent::PoolEmpty => write!(f, "{who} found the pool empty"),
            LogEvent::GuessHit { target, index, value } => {
                write!(f, "{who} guessed {value} at {target} #{index}: correct")
            }
            LogEvent::GuessMiss { target, index, value } => {
                write!(f, "{who} guessed {value} at {target} #{index}: wrong")
            }
            LogEvent::ContinuedGuessing => write!(f, "{who} keeps guessing"),
            LogEvent::TurnEnded { revealed_drawn: true } => {
                write!(f, "{who} ended the turn and revealed the drawn tile")
            }
            LogEvent::TurnEnded { revealed_drawn: false } => write!(f, "{who} ended the turn"),
            LogEvent::TimedOut => write!(f, "{who} ran out of time"),
            LogEvent::WildcardPlaced => write!(f, "{who} placed a wildcard"),
            LogEvent::Eliminated(p) => write!(f, "{p} is eliminated"),
            LogEvent::Victory(p) => write!(f, "{p} wins"),
        }
    }
}

/// Bounded, newest-first log backed by a persistent vector.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnLog {
    entries: Vector<LogEntry>,
}

impl TurnLog {
    /// Entries kept.
    pub const CAPACITY: usize = 50;

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an entry, dropping the oldest past capacity.
    pub fn push(&mut self, entry: LogEntry) {
        self.entries.push_front(entry);
        if self.entries.len() > Self::CAPACITY {
            self.entries.truncate(Self::CAPACITY);
        }
    }

    /// Newest first.
    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn latest(&self) -> Option<&LogEntry> {
        self.entries.front()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
