//! Decision procedures for automated players.
//!
//! A policy reads the state and proposes one command for the active player.
//! It never mutates state itself: the host (or
//! [`TurnEngine::step_automated`](crate::rules::TurnEngine::step_automated))
//! submits the command through the engine, so agent moves are validated
//! exactly like human ones.

use smallvec::SmallVec;

use crate::core::player::PlayerId;
use crate::core::rng::RandomSource;
use crate::core::state::{GameState, Phase};
use crate::rules::Command;

/// Chooses a command for the automated active player.
pub trait OpponentPolicy {
    /// Propose a command for the current phase.
    ///
    /// Returns `None` when there is nothing sensible to do (match over, or no
    /// opponent left to guess at).
    fn decide<R: RandomSource>(&self, state: &GameState, rng: &mut R) -> Option<Command>;
}

/// The naive opponent.
///
/// Always draws, guesses a uniformly random value at a uniformly random
/// hidden tile of a uniformly random live opponent, and never chains a
/// second guess after a hit. It keeps no memory of earlier reveals.
#[derive(Clone, Copy, Debug, Default)]
pub struct NaiveOpponent;

impl OpponentPolicy for NaiveOpponent {
    fn decide<R: RandomSource>(&self, state: &GameState, rng: &mut R) -> Option<Command> {
        match state.phase() {
            Phase::Draw => Some(Command::Draw),
            Phase::Guess => {
                let actor = state.active_player_id();
                let opponents: SmallVec<[PlayerId; 4]> = state.opponents_of(actor).collect();
                let target = *rng.choose(&opponents)?;

                let hidden: SmallVec<[usize; 16]> = state.player(target)?.hidden_indices().collect();
                let index = *rng.choose(&hidden)?;

                let domain = state.legal_guess_values();
                let value = *rng.choose(&domain)?;

                Some(Command::guess(target, index, value))
            }
            Phase::Resolve => Some(Command::EndTurn),
            Phase::GameOver => None,
        }
    }
}
