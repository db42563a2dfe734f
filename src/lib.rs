//! # rust-tilecode
//!
//! Rules engine for a hidden-tile deduction game. Each player holds a row
//! of numbered tiles in strict order; on your turn you draw a tile, then name
//! the value of an opponent's hidden tile until a guess misses. Lose every
//! tile to correct guesses and you are out. Last player standing wins.
//!
//! ## Design Principles
//!
//! 1. **Reducer shape**: the engine turns `(state, command)` into the next
//!    state. It never mutates the caller's state and never blocks; timers
//!    and pacing belong to the host.
//!
//! 2. **Reject, don't panic**: invalid commands return a `RuleViolation`
//!    and leave the state exactly as it was.
//!
//! 3. **Injected randomness**: shuffling, automated wildcard placement and
//!    agent choices all go through `RandomSource`, so tests can script them.
//!
//! ## Usage
//!
//! ```
//! use rust_tilecode::{new_match, GameRng, MatchConfig, NaiveOpponent, Phase, PlayerSetup, TurnEngine};
//!
//! let config = MatchConfig::new(vec![
//!     PlayerSetup::human("Ada"),
//!     PlayerSetup::automated("Bot"),
//! ]);
//! let rng = GameRng::new(42);
//! let state = new_match(&config, &mut rng.for_context("deal")).unwrap();
//!
//! let mut engine = TurnEngine::new(rng.for_context("play"));
//! let state = engine.draw(&state).unwrap();
//! assert_eq!(state.phase(), Phase::Guess);
//!
//! // Automated seats are driven through the same command path.
//! assert!(engine.step_automated(&state, &NaiveOpponent).is_err()); // Ada is active
//! ```
//!
//! ## Modules
//!
//! - `core`: players, state, configuration, errors, the turn log, RNG
//! - `tiles`: tiles, the tile supply, canonical hand order
//! - `rules`: commands, the turn engine, victory evaluation
//! - `agent`: automated player policies
//! - `setup`: shuffling and dealing a new match

pub mod core;
pub mod tiles;
pub mod rules;
pub mod agent;
pub mod setup;

// Re-export commonly used types
pub use crate::core::{
    GameRng, GameState, LogEntry, LogEvent, MatchConfig, MatchRules, Phase, Player, PlayerId,
    PlayerSetup, RandomSource, RuleViolation, SequenceRng, SetupError, TurnLog,
};

pub use crate::tiles::{Tile, TileColor, TileId, TileValue};

pub use crate::rules::{Command, TurnEngine};

pub use crate::agent::{NaiveOpponent, OpponentPolicy};

pub use crate::setup::new_match;
