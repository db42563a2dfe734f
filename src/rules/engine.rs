//! The turn engine.
//!
//! ## Phases
//!
//! ```text
//! Draw --draw--> Guess --hit--> Resolve --continue--> Guess
//!                  |                |
//!                  +--miss--+       +--end turn--+
//!                           v                    v
//!                      reconcile + next player: Draw
//! ```
//!
//! `GameOver` is entered from any command that leaves one player standing.
//!
//! ## Contract
//!
//! [`TurnEngine::apply`] never modifies its input. On success it returns the
//! next state; on failure it returns a [`RuleViolation`] and the caller's
//! state is exactly as it was, log included.

use tracing::{debug, info};

use crate::agent::OpponentPolicy;
use crate::core::error::RuleViolation;
use crate::core::log::{LogEntry, LogEvent};
use crate::core::player::PlayerId;
use crate::core::rng::RandomSource;
use crate::core::state::{GameState, Phase};
use crate::tiles::{insertion_index, Tile, TileId, TileValue};

use super::command::Command;
use super::victory;

/// Gap left between a wildcard placed at either end of a hand and its
/// neighbour.
const END_PLACEMENT_GAP: f64 = 0.5;

/// Applies commands to game states.
///
/// Owns the random source used for automated wildcard placement and, via
/// [`TurnEngine::step_automated`], for agent decisions.
#[derive(Clone, Debug)]
pub struct TurnEngine<R: RandomSource> {
    rng: R,
}

impl<R: RandomSource> TurnEngine<R> {
    /// Create an engine around a random source.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Access the random source (to seed setup from the same stream, say).
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Apply a command, producing the next state.
    pub fn apply(&mut self, state: &GameState, command: Command) -> Result<GameState, RuleViolation> {
        let mut next = state.clone();
        match self.execute(&mut next, command) {
            Ok(()) => {
                debug!(?command, phase = ?next.phase, active = %next.active, "command applied");
                Ok(next)
            }
            Err(err) => {
                debug!(?command, %err, "command rejected");
                Err(err)
            }
        }
    }

    // === Host-facing shorthands ===

    pub fn draw(&mut self, state: &GameState) -> Result<GameState, RuleViolation> {
        self.apply(state, Command::Draw)
    }

    pub fn guess(
        &mut self,
        state: &GameState,
        target: PlayerId,
        index: usize,
        value: TileValue,
    ) -> Result<GameState, RuleViolation> {
        self.apply(state, Command::guess(target, index, value))
    }

    pub fn continue_guessing(&mut self, state: &GameState) -> Result<GameState, RuleViolation> {
        self.apply(state, Command::ContinueGuessing)
    }

    pub fn end_turn(&mut self, state: &GameState) -> Result<GameState, RuleViolation> {
        self.apply(state, Command::EndTurn)
    }

    pub fn reposition_wildcard(
        &mut self,
        state: &GameState,
        tile: TileId,
        position: usize,
    ) -> Result<GameState, RuleViolation> {
        self.apply(state, Command::RepositionWildcard { tile, position })
    }

    /// The timer ran out: draw in the Draw phase, end the turn otherwise.
    pub fn timeout(&mut self, state: &GameState) -> Result<GameState, RuleViolation> {
        let command = match state.phase {
            Phase::Draw => Command::TimeoutDraw,
            Phase::Guess | Phase::Resolve => Command::TimeoutEndTurn,
            Phase::GameOver => return Err(RuleViolation::GameOver),
        };
        self.apply(state, command)
    }

    /// Let the policy act once for the automated active player.
    ///
    /// The decision goes through [`TurnEngine::apply`] like any human command.
    pub fn step_automated<P: OpponentPolicy>(
        &mut self,
        state: &GameState,
        policy: &P,
    ) -> Result<GameState, RuleViolation> {
        if state.is_over() {
            return Err(RuleViolation::GameOver);
        }
        if !state.active_player().automated {
            return Err(RuleViolation::NotAutomated(state.active));
        }
        let command = policy
            .decide(state, &mut self.rng)
            .ok_or(RuleViolation::NoDecision)?;
        self.apply(state, command)
    }

    // === Transitions ===

    /// Validate, then mutate. Every check happens before the first write.
    fn execute(&mut self, state: &mut GameState, command: Command) -> Result<(), RuleViolation> {
        if state.is_over() {
            return Err(RuleViolation::GameOver);
        }
        let actor = state.active;

        match command {
            Command::Draw => {
                expect_phase(state, &[Phase::Draw])?;
                self.draw_tile(state);
            }
            Command::TimeoutDraw => {
                expect_phase(state, &[Phase::Draw])?;
                record(state, actor, LogEvent::TimedOut);
                self.draw_tile(state);
            }
            Command::Guess { target, index, value } => {
                expect_phase(state, &[Phase::Guess])?;
                validate_guess(state, target, index, value)?;
                resolve_guess(state, target, index, value);
            }
            Command::ContinueGuessing => {
                expect_phase(state, &[Phase::Resolve])?;
                if state.active_player().automated {
                    return Err(RuleViolation::AutomatedChain(actor));
                }
                record(state, actor, LogEvent::ContinuedGuessing);
                state.phase = Phase::Guess;
            }
            Command::EndTurn => {
                expect_phase(state, &[Phase::Resolve])?;
                end_turn(state, true);
            }
            Command::TimeoutEndTurn => {
                expect_phase(state, &[Phase::Guess, Phase::Resolve])?;
                let success = state.phase == Phase::Resolve;
                record(state, actor, LogEvent::TimedOut);
                end_turn(state, success);
            }
            Command::RepositionWildcard { tile, position } => {
                reposition(state, tile, position)?;
            }
        }
        Ok(())
    }

    fn draw_tile(&mut self, state: &mut GameState) {
        let actor = state.active;
        match state.pool.pop_back() {
            None => {
                record(state, actor, LogEvent::PoolEmpty);
            }
            Some(mut tile) => {
                tile.set_owner(actor);
                if state.active_player().automated && tile.can_reposition() {
                    let key = private_wildcard_key(state.rules.value_count, &mut self.rng);
                    tile.reposition(key);
                }
                state.drawn = Some(tile);
                record(state, actor, LogEvent::Drew);
            }
        }
        state.phase = Phase::Guess;
    }
}

/// Automated wildcard keys are multiples of `1 / PRIVATE_PLACEMENT_STEPS`,
/// so two distinct keys in a hand are never within the ordering epsilon.
const PRIVATE_PLACEMENT_STEPS: f64 = 100.0;

/// A uniformly random key inside the numeric range, used when an automated
/// player places a wildcard without any UI.
pub(crate) fn private_wildcard_key<R: RandomSource>(value_count: u8, rng: &mut R) -> f64 {
    let raw = rng.next_in_range(0.0, f64::from(value_count));
    (raw * PRIVATE_PLACEMENT_STEPS).floor() / PRIVATE_PLACEMENT_STEPS
}

/// Sort key that puts a tile before `others[position]` (after the last tile
/// when `position == others.len()`). `others` must be in hand order.
#[must_use]
pub fn placement_key(others: &[Tile], position: usize, current: f64) -> f64 {
    let before = position.checked_sub(1).and_then(|i| others.get(i));
    let after = others.get(position);
    match (before, after) {
        (Some(l), Some(r)) => (l.sort_key() + r.sort_key()) / 2.0,
        (Some(l), None) => l.sort_key() + END_PLACEMENT_GAP,
        (None, Some(r)) => r.sort_key() - END_PLACEMENT_GAP,
        (None, None) => current,
    }
}

fn record(state: &mut GameState, player: PlayerId, event: LogEvent) {
    let entry = LogEntry::new(state.move_counter, player, event);
    state.log.push(entry);
}

fn expect_phase(state: &GameState, allowed: &[Phase]) -> Result<(), RuleViolation> {
    if allowed.contains(&state.phase) {
        Ok(())
    } else {
        Err(RuleViolation::WrongPhase { actual: state.phase })
    }
}

fn validate_guess(
    state: &GameState,
    target: PlayerId,
    index: usize,
    value: TileValue,
) -> Result<(), RuleViolation> {
    if target == state.active {
        return Err(RuleViolation::SelfTarget(target));
    }
    let player = state.player(target).ok_or(RuleViolation::UnknownPlayer(target))?;
    if player.is_eliminated() {
        return Err(RuleViolation::TargetEliminated(target));
    }
    let hand = player.hand();
    let tile = hand.get(index).ok_or(RuleViolation::IndexOutOfRange {
        index,
        len: hand.len(),
    })?;
    if tile.is_revealed() {
        return Err(RuleViolation::AlreadyRevealed(index));
    }
    if !state.rules.allows(value) {
        return Err(RuleViolation::ValueOutOfDomain(value));
    }
    Ok(())
}

/// Apply an already validated guess.
fn resolve_guess(state: &mut GameState, target: PlayerId, index: usize, value: TileValue) {
    let actor = state.active;
    let Some(player) = state.player_mut(target) else {
        return;
    };
    let Some(tile) = player.tile_mut(index) else {
        return;
    };

    if !tile.matches(value) {
        record(state, actor, LogEvent::GuessMiss { target, index, value });
        end_turn(state, false);
        return;
    }

    tile.reveal();
    let newly_eliminated = player.refresh_elimination();
    record(state, actor, LogEvent::GuessHit { target, index, value });
    if newly_eliminated {
        info!(player = %target, by = %actor, "player eliminated");
        record(state, actor, LogEvent::Eliminated(target));
    }

    match victory::winner(state.players.iter()) {
        Some(winner) => finish(state, winner),
        None => state.phase = Phase::Resolve,
    }
}

/// End-of-turn reconciliation. `success` is false when the turn ended on a
/// miss or a guess-phase timeout; the drawn tile is then exposed.
fn end_turn(state: &mut GameState, success: bool) {
    let actor = state.active;
    let mut revealed_drawn = false;

    if let Some(mut tile) = state.drawn.take() {
        if !success {
            tile.reveal();
            revealed_drawn = true;
        }
        let player = state.active_player_mut();
        player.insert_tile(tile);
        if player.refresh_elimination() {
            info!(player = %actor, "player eliminated by own reveal");
            record(state, actor, LogEvent::Eliminated(actor));
        }
    }
    record(state, actor, LogEvent::TurnEnded { revealed_drawn });
    state.move_counter += 1;

    if let Some(winner) = victory::winner(state.players.iter()) {
        finish(state, winner);
        return;
    }

    match next_live_seat(state, actor) {
        Some(next) => {
            state.active = next;
            state.phase = Phase::Draw;
        }
        // Nobody else left to play.
        None => finish(state, actor),
    }
}

/// Next non-eliminated seat after `from`, wrapping around. `None` when
/// every other seat is eliminated.
fn next_live_seat(state: &GameState, from: PlayerId) -> Option<PlayerId> {
    let count = state.player_count();
    (1..count)
        .map(|offset| PlayerId::new(((from.index() + offset) % count) as u8))
        .find(|&id| state.player(id).is_some_and(|p| !p.is_eliminated()))
}

fn finish(state: &mut GameState, winner: PlayerId) {
    if let Some(tile) = state.drawn.take() {
        state.active_player_mut().insert_tile(tile);
    }
    state.winner = Some(winner);
    state.phase = Phase::GameOver;
    info!(winner = %winner, moves = state.move_counter, "match over");
    record(state, winner, LogEvent::Victory(winner));
}

/// Wildcard placement acts for the active player only: a wildcard in their
/// hand or in the drawn slot.
fn reposition(state: &mut GameState, tile_id: TileId, position: usize) -> Result<(), RuleViolation> {
    let actor = state.active;

    // Drawn slot first: the tile is not in the hand yet.
    if let Some(drawn) = state.drawn.as_ref().filter(|t| t.id == tile_id) {
        if !drawn.can_reposition() {
            return Err(RuleViolation::NotRepositionable(tile_id));
        }
        let key = checked_placement(state.active_player().hand(), drawn, position)?;
        if let Some(drawn) = state.drawn.as_mut() {
            drawn.reposition(key);
        }
        record(state, actor, LogEvent::WildcardPlaced);
        return Ok(());
    }

    let player = state.active_player();
    let Some(index) = player.position_of(tile_id) else {
        let held_elsewhere = state.players().any(|p| p.position_of(tile_id).is_some());
        return Err(if held_elsewhere {
            RuleViolation::NotYourTile(tile_id)
        } else {
            RuleViolation::UnknownTile(tile_id)
        });
    };
    let tile = &player.hand()[index];
    if !tile.can_reposition() {
        return Err(RuleViolation::NotRepositionable(tile_id));
    }
    let others: Vec<Tile> = player
        .hand()
        .iter()
        .filter(|t| t.id != tile_id)
        .cloned()
        .collect();
    let key = checked_placement(&others, tile, position)?;

    let player = state.active_player_mut();
    if let Some(mut moved) = player.take_tile(index) {
        moved.reposition(key);
        player.insert_tile(moved);
    }
    record(state, actor, LogEvent::WildcardPlaced);
    Ok(())
}

/// Key that puts `tile` at `position` among `others`.
///
/// Rejected when hand order would not keep it there: between two tiles with
/// tied keys the midpoint ties too, and color alone decides.
fn checked_placement(others: &[Tile], tile: &Tile, position: usize) -> Result<f64, RuleViolation> {
    check_position(others, position)?;
    let key = placement_key(others, position, tile.sort_key());
    let mut placed = tile.clone();
    placed.reposition(key);
    if insertion_index(others, &placed) != position {
        return Err(RuleViolation::PlacementUnavailable {
            tile: tile.id,
            position,
        });
    }
    Ok(key)
}

fn check_position(others: &[Tile], position: usize) -> Result<(), RuleViolation> {
    if position > others.len() {
        return Err(RuleViolation::PositionOutOfRange {
            position,
            max: others.len(),
        });
    }
    Ok(())
}
