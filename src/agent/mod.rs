//! Automated players.
//!
//! The host decides *when* an automated player acts (typically after a short
//! delay); a policy decides *what* it does.

pub mod policy;

pub use policy::{NaiveOpponent, OpponentPolicy};
