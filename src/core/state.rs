//! Match state.
//!
//! `GameState` is a value. The engine never mutates a caller's state: each
//! command clones it, applies the transition to the clone and returns the
//! clone. The pool, the seats and the log live in `im` persistent vectors,
//! so that clone shares structure instead of copying tiles.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::config::{MatchRules, MAX_PLAYERS, MIN_PLAYERS};
use super::error::SetupError;
use super::log::TurnLog;
use super::player::{Player, PlayerId};
use crate::rules::victory;
use crate::tiles::{Tile, TileId, TileValue};

/// Turn-level phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the active player to draw.
    Draw,
    /// Waiting for a guess.
    Guess,
    /// After a correct guess: keep guessing or end the turn.
    Resolve,
    /// A winner is set. Terminal.
    GameOver,
}

/// Full match state.
#[derive(Clone, Debug)]
pub struct GameState {
    pub(crate) rules: MatchRules,
    pub(crate) players: Vector<Player>,
    pub(crate) active: PlayerId,
    /// Tile drawn this turn and not yet merged into the active hand.
    pub(crate) drawn: Option<Tile>,
    /// Draw end is the back.
    pub(crate) pool: Vector<Tile>,
    pub(crate) phase: Phase,
    pub(crate) winner: Option<PlayerId>,
    pub(crate) log: TurnLog,
    pub(crate) move_counter: u32,
}

impl GameState {
    /// Start a match from explicit hands and pool.
    ///
    /// Players are reseated by position, hands sorted, the pool's back is
    /// its draw end. Elimination and victory are evaluated immediately, so a
    /// roster with a single live player starts in [`Phase::GameOver`].
    pub fn from_hands(
        rules: MatchRules,
        players: Vec<Player>,
        pool: Vec<Tile>,
    ) -> Result<Self, SetupError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&players.len()) {
            return Err(SetupError::PlayerCount {
                got: players.len(),
                min: MIN_PLAYERS,
                max: MAX_PLAYERS,
            });
        }

        let mut seen = FxHashSet::default();
        let all_tiles = players.iter().flat_map(|p| p.hand().iter()).chain(pool.iter());
        for tile in all_tiles {
            if !seen.insert(tile.id) {
                return Err(SetupError::DuplicateTile(tile.id));
            }
            if !tile.sort_key().is_finite() {
                return Err(SetupError::NonFiniteKey(tile.id));
            }
        }

        let players: Vector<Player> = players
            .into_iter()
            .enumerate()
            .map(|(seat, mut player)| {
                player.reseat(PlayerId::new(seat as u8));
                player.resort();
                player.refresh_elimination();
                player
            })
            .collect();

        let winner = victory::winner(players.iter());
        let active = players
            .iter()
            .find(|p| !p.is_eliminated())
            .map_or(PlayerId::new(0), |p| p.id);

        Ok(Self {
            rules,
            players,
            active,
            drawn: None,
            pool: pool.into_iter().collect(),
            phase: if winner.is_some() { Phase::GameOver } else { Phase::Draw },
            winner,
            log: TurnLog::new(),
            move_counter: 0,
        })
    }

    // === Rules ===

    #[must_use]
    pub fn rules(&self) -> &MatchRules {
        &self.rules
    }

    /// Every value a guess may name in this match.
    #[must_use]
    pub fn legal_guess_values(&self) -> Vec<TileValue> {
        self.rules.guess_domain()
    }

    // === Seats ===

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Players in seating order.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index())
    }

    #[must_use]
    pub fn active_player_id(&self) -> PlayerId {
        self.active
    }

    #[must_use]
    pub fn active_player(&self) -> &Player {
        &self.players[self.active.index()]
    }

    /// Whether the host should schedule the opponent agent.
    #[must_use]
    pub fn active_is_automated(&self) -> bool {
        !self.is_over() && self.active_player().automated
    }

    /// Players still in the match, in seating order.
    pub fn non_eliminated(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.players.iter().filter(|p| !p.is_eliminated()).map(|p| p.id)
    }

    /// Live players other than `player`.
    pub fn opponents_of(&self, player: PlayerId) -> impl Iterator<Item = PlayerId> + '_ {
        self.non_eliminated().filter(move |&p| p != player)
    }

    // === Turn ===

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    #[must_use]
    pub fn drawn_tile(&self) -> Option<&Tile> {
        self.drawn.as_ref()
    }

    #[must_use]
    pub fn pool_len(&self) -> usize {
        self.pool.len()
    }

    /// The pool, draw end last.
    pub fn pool(&self) -> impl Iterator<Item = &Tile> {
        self.pool.iter()
    }

    #[must_use]
    pub fn log(&self) -> &TurnLog {
        &self.log
    }

    /// Completed turns so far.
    #[must_use]
    pub fn move_counter(&self) -> u32 {
        self.move_counter
    }

    /// Every tile id in play: hands, drawn slot, pool.
    #[must_use]
    pub fn tile_ids(&self) -> Vec<TileId> {
        self.players
            .iter()
            .flat_map(|p| p.hand().iter())
            .chain(self.drawn.iter())
            .chain(self.pool.iter())
            .map(|t| t.id)
            .collect()
    }

    // === Internal mutation ===

    pub(crate) fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.get_mut(id.index())
    }

    pub(crate) fn active_player_mut(&mut self) -> &mut Player {
        let index = self.active.index();
        &mut self.players[index]
    }
}
