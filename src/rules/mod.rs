//! Game rules: commands, the turn engine, and victory evaluation.
//!
//! The engine is a reducer: `(state, command) -> next state`. It validates
//! every command against the current phase and rejects anything invalid
//! without touching the state.

pub mod command;
pub mod engine;
pub mod victory;

pub use command::Command;
pub use engine::TurnEngine;
pub use victory::{live_count, winner};
