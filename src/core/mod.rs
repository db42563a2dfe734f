//! Core types: players, state, configuration, errors, the turn log, RNG.

pub mod player;
pub mod rng;
pub mod config;
pub mod error;
pub mod log;
pub mod state;

pub use player::{Player, PlayerId};
pub use rng::{GameRng, RandomSource, SequenceRng};
pub use config::{MatchConfig, MatchRules, PlayerSetup, MAX_PLAYERS, MAX_VALUE_COUNT, MIN_PLAYERS};
pub use error::{RuleViolation, SetupError};
pub use log::{LogEntry, LogEvent, TurnLog};
pub use state::{GameState, Phase};
