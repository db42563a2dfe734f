//! Match setup: build the supply, shuffle, deal.

use tracing::debug;

use crate::core::config::MatchConfig;
use crate::core::error::SetupError;
use crate::core::player::{Player, PlayerId};
use crate::core::rng::RandomSource;
use crate::core::state::GameState;
use crate::rules::engine::private_wildcard_key;
use crate::tiles::build_tile_set;

/// Create the opening state for a match.
///
/// The supply is shuffled once, then each seat in order takes its hand from
/// the draw end of the pool. Wildcards dealt to automated players are placed
/// at random right away; human players place theirs with a reposition
/// command. The first seat is active and the phase is `Draw`.
pub fn new_match<R: RandomSource>(config: &MatchConfig, rng: &mut R) -> Result<GameState, SetupError> {
    config.validate()?;
    let rules = config.rules;
    let hand_size = config.hand_size();

    let mut pool = build_tile_set(rules.value_count, rules.wildcards);
    rng.shuffle(&mut pool);

    let mut players = Vec::with_capacity(config.players.len());
    for (seat, setup) in config.players.iter().enumerate() {
        let split = pool.len() - hand_size;
        let mut hand = pool.split_off(split);
        if setup.automated {
            for tile in hand.iter_mut().filter(|t| t.can_reposition()) {
                tile.reposition(private_wildcard_key(rules.value_count, rng));
            }
        }
        let player = Player::new(PlayerId::new(seat as u8), setup.name.clone(), setup.automated)
            .with_avatar(setup.avatar.clone())
            .with_hand(hand);
        players.push(player);
    }

    debug!(
        players = players.len(),
        hand_size,
        pool = pool.len(),
        wildcards = rules.wildcards,
        "match dealt"
    );
    GameState::from_hands(rules, players, pool)
}
